use tsglot::mcp::{
    TsglotMcpServer,
    types::{ScanIssuesParams, ScanOverviewParams},
};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{
    DANBOORU_ES, McpTestFixture, assert_pagination, extract_tool_result_json, fixture_danbooru,
};

fn issues_params(fixture: &McpTestFixture, rule: Option<&str>) -> Parameters<ScanIssuesParams> {
    Parameters(ScanIssuesParams {
        project_root_path: fixture.root(),
        rule: rule.map(str::to_string),
        limit: None,
        offset: None,
    })
}

// ============================================================================
// scan_overview tests
// ============================================================================

#[tokio::test]
async fn test_scan_overview() {
    let fixture = fixture_danbooru().unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(ScanOverviewParams {
        project_root_path: fixture.root(),
    });

    let result = server.scan_overview(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["filesChecked"], 2);
    // es: untranslated, identical, 2x whitespace; de: placeholder mismatch
    assert_eq!(json_result["totalCount"], 5);
    assert_eq!(json_result["errorCount"], 1);
    assert_eq!(json_result["warningCount"], 4);

    let rules = json_result["rules"].as_array().unwrap();
    let placeholder = rules
        .iter()
        .find(|r| r["rule"] == "placeholder-mismatch")
        .unwrap();
    assert_eq!(placeholder["count"], 1);
    assert_eq!(placeholder["severity"], "error");

    let whitespace = rules.iter().find(|r| r["rule"] == "whitespace").unwrap();
    assert_eq!(whitespace["count"], 2);
    assert!(rules.iter().all(|r| r["rule"] != "duplicate-message"));
}

#[tokio::test]
async fn test_scan_overview_missing_root() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "translationsRoot": "does-not-exist" }))
        .unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(ScanOverviewParams {
        project_root_path: fixture.root(),
    });

    assert!(server.scan_overview(params).await.is_err());
}

// ============================================================================
// scan_issues tests
// ============================================================================

#[tokio::test]
async fn test_scan_issues_filtered_by_rule() {
    let fixture = fixture_danbooru().unwrap();
    let server = TsglotMcpServer::new();

    let result = server
        .scan_issues(issues_params(&fixture, Some("placeholder-mismatch")))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 1);
    assert_eq!(json_result["totalFileCount"], 1);

    let item = &json_result["items"][0];
    assert_eq!(item["rule"], "placeholder-mismatch");
    assert_eq!(item["severity"], "error");
    assert_eq!(item["message"], "Found %i images");
    assert_eq!(item["line"], 6);
    assert!(item["filePath"].as_str().unwrap().ends_with("danbooru_gui-de.ts"));
    assert_eq!(item["details"], "[DanbooruGUI] expected %i, found none");

    assert_pagination(&json_result, 0, 20, false);
}

#[tokio::test]
async fn test_scan_issues_untranslated_and_identical() {
    let fixture =
        McpTestFixture::with_translations(vec![("danbooru_gui-es.ts", DANBOORU_ES)]).unwrap();
    let server = TsglotMcpServer::new();

    let result = server
        .scan_issues(issues_params(&fixture, Some("untranslated")))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["totalCount"], 1);
    assert_eq!(json_result["items"][0]["message"], "Danbooru GUI");

    let result = server
        .scan_issues(issues_params(&fixture, Some("identical")))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["totalCount"], 1);
    assert_eq!(json_result["items"][0]["message"], "ID");
    assert!(json_result["items"][0]["hint"].is_string());
}

#[tokio::test]
async fn test_scan_issues_pagination() {
    let fixture = fixture_danbooru().unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(ScanIssuesParams {
        project_root_path: fixture.root(),
        rule: None,
        limit: Some(2),
        offset: Some(0),
    });
    let result = server.scan_issues(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 5);
    assert_eq!(json_result["totalFileCount"], 2);
    assert_eq!(json_result["items"].as_array().unwrap().len(), 2);
    assert_pagination(&json_result, 0, 2, true);

    let params = Parameters(ScanIssuesParams {
        project_root_path: fixture.root(),
        rule: None,
        limit: Some(2),
        offset: Some(4),
    });
    let result = server.scan_issues(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["items"].as_array().unwrap().len(), 1);
    assert_pagination(&json_result, 4, 2, false);
}

#[tokio::test]
async fn test_scan_issues_limit_is_capped() {
    let fixture = fixture_danbooru().unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(ScanIssuesParams {
        project_root_path: fixture.root(),
        rule: None,
        limit: Some(1000),
        offset: None,
    });
    let result = server.scan_issues(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_pagination(&json_result, 0, 100, false);
}

#[tokio::test]
async fn test_scan_issues_unknown_rule() {
    let fixture = fixture_danbooru().unwrap();
    let server = TsglotMcpServer::new();

    let result = server
        .scan_issues(issues_params(&fixture, Some("hardcoded-text")))
        .await;

    assert!(result.is_err());
}
