use tsglot::mcp::{
    TsglotMcpServer,
    types::{GetConfigParams, ListTranslationFilesParams},
};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{DANBOORU_ES, McpTestFixture, extract_tool_result_json, fixture_danbooru};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["config"]["translationsRoot"], "./translations");
    assert_eq!(json_result["config"]["sourceLanguage"], "en");
    assert_eq!(json_result["config"]["includeUnfinished"], true);
    assert!(json_result["config"]["locationExtensions"].is_array());
    assert_eq!(json_result["fromFile"], false);
}

#[tokio::test]
async fn test_get_config_from_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "translationsRoot": "i18n",
            "catalogName": "danbooru_gui",
            "ignoreTexts": ["ID"]
        }))
        .unwrap();

    let server = TsglotMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["translationsRoot"], "i18n");
    assert_eq!(json_result["config"]["catalogName"], "danbooru_gui");
    assert_eq!(json_result["config"]["ignoreTexts"], json!(["ID"]));
}

#[tokio::test]
async fn test_get_config_invalid_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "locationExtensions": [".py"] }))
        .unwrap();

    let server = TsglotMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_config(params).await.is_err());
}

// ============================================================================
// list_translation_files tests
// ============================================================================

#[tokio::test]
async fn test_list_translation_files() {
    let fixture = fixture_danbooru().unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(ListTranslationFilesParams {
        project_root_path: fixture.root(),
    });

    let result = server.list_translation_files(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["sourceLanguage"], "en");
    let files = json_result["files"].as_array().unwrap();
    assert_eq!(files.len(), 2);

    // Sorted by path: -de before -es
    assert!(files[0]["filePath"].as_str().unwrap().ends_with("danbooru_gui-de.ts"));
    assert_eq!(files[0]["language"], "de");
    assert_eq!(files[0]["messageCount"], 2);

    let es = &files[1];
    assert_eq!(es["language"], "es");
    assert_eq!(es["sourceLanguage"], "en");
    assert_eq!(es["contextCount"], 2);
    assert_eq!(es["messageCount"], 20);
    assert_eq!(es["finishedCount"], 19);

    assert!(json_result["parseErrors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_translation_files_with_parse_error() {
    let fixture = McpTestFixture::with_translations(vec![
        ("danbooru_gui-es.ts", DANBOORU_ES),
        ("broken-de.ts", "<resources></resources>"),
    ])
    .unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(ListTranslationFilesParams {
        project_root_path: fixture.root(),
    });

    let result = server.list_translation_files(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["files"].as_array().unwrap().len(), 1);
    let errors = json_result["parseErrors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0]["filePath"].as_str().unwrap().ends_with("broken-de.ts"));
}
