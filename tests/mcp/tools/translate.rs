use tsglot::mcp::{TsglotMcpServer, types::TranslateParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{extract_tool_result_json, fixture_danbooru};

fn params(root: String, context: &str, source: &str) -> TranslateParams {
    TranslateParams {
        project_root_path: root,
        context: context.to_string(),
        source: source.to_string(),
        locale: None,
        file: None,
        name: None,
        count: None,
        args: None,
    }
}

#[tokio::test]
async fn test_translate_with_file() {
    let fixture = fixture_danbooru().unwrap();
    let server = TsglotMcpServer::new();

    let mut p = params(fixture.root(), "DanbooruGUI", "Size: %i pixels");
    p.file = Some("translations/danbooru_gui-es.ts".to_string());
    p.args = Some(vec!["1024".to_string()]);

    let result = server.translate(Parameters(p)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["text"], "Tamaño: 1024 pixeles");
    assert_eq!(json_result["translated"], true);
    assert!(
        json_result["catalogPath"]
            .as_str()
            .unwrap()
            .ends_with("danbooru_gui-es.ts")
    );
}

#[tokio::test]
async fn test_translate_with_locale_from_config() {
    let fixture = fixture_danbooru().unwrap();
    fixture
        .write_config(&json!({ "catalogName": "danbooru_gui" }))
        .unwrap();
    let server = TsglotMcpServer::new();

    let mut p = params(fixture.root(), "DanbooruGUI", "Width");
    p.locale = Some("de_DE.UTF-8".to_string());

    let result = server.translate(Parameters(p)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["text"], "Breite");
    assert!(
        json_result["catalogPath"]
            .as_str()
            .unwrap()
            .ends_with("danbooru_gui-de.ts")
    );
}

#[tokio::test]
async fn test_translate_missing_entry_falls_back() {
    let fixture = fixture_danbooru().unwrap();
    let server = TsglotMcpServer::new();

    let mut p = params(fixture.root(), "MainWindow", "Danbooru GUI");
    p.locale = Some("es".to_string());
    p.name = Some("danbooru_gui".to_string());

    let result = server.translate(Parameters(p)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["text"], "Danbooru GUI");
    assert_eq!(json_result["translated"], false);
}

#[tokio::test]
async fn test_translate_unknown_locale_uses_source() {
    let fixture = fixture_danbooru().unwrap();
    let server = TsglotMcpServer::new();

    let mut p = params(fixture.root(), "DanbooruGUI", "Found %i images");
    p.locale = Some("fr_FR".to_string());
    p.name = Some("danbooru_gui".to_string());
    p.args = Some(vec!["7".to_string()]);

    let result = server.translate(Parameters(p)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["text"], "Found 7 images");
    assert_eq!(json_result["translated"], false);
    assert!(json_result.get("catalogPath").is_none());
}

#[tokio::test]
async fn test_translate_requires_file_or_locale() {
    let fixture = fixture_danbooru().unwrap();
    let server = TsglotMcpServer::new();

    let p = params(fixture.root(), "MainWindow", "Search");

    assert!(server.translate(Parameters(p)).await.is_err());
}

#[tokio::test]
async fn test_translate_locale_without_catalog_name() {
    let fixture = fixture_danbooru().unwrap();
    let server = TsglotMcpServer::new();

    let mut p = params(fixture.root(), "MainWindow", "Search");
    p.locale = Some("es".to_string());

    assert!(server.translate(Parameters(p)).await.is_err());
}
