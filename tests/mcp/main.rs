use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;

mod tools;

/// Translation table shared with the unit tests.
pub const DANBOORU_ES: &str = include_str!("../fixtures/danbooru_gui-es.ts");

/// Test fixture for MCP integration tests
///
/// Manages a temporary project with a translations/ directory
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;

        fs::create_dir_all(project_root.join("translations"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a test project with translation files
    ///
    /// # Example
    /// ```ignore
    /// let fixture = McpTestFixture::with_translations(vec![
    ///     ("danbooru_gui-es.ts", DANBOORU_ES),
    /// ])?;
    /// ```
    pub fn with_translations(files: Vec<(&str, &str)>) -> Result<Self> {
        let fixture = Self::new()?;
        for (name, content) in files {
            fixture.write_translation_file(name, content)?;
        }
        Ok(fixture)
    }

    /// Write a .ts file to translations/<name>
    pub fn write_translation_file(&self, name: &str, content: &str) -> Result<()> {
        let path = self.project_root.join("translations").join(name);
        fs::write(&path, content)
            .with_context(|| format!("Failed to write translation file: {}", path.display()))?;
        Ok(())
    }

    /// Write a .tsglotrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let path = self.project_root.join(".tsglotrc.json");
        let json_str = serde_json::to_string_pretty(content)?;
        fs::write(&path, format!("{}\n", json_str))?;
        Ok(())
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    /// Get the project root path as a Path reference
    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

// ============================================================================
// Fixture Generators
// ============================================================================

/// Spanish Danbooru GUI table plus a German one with a broken placeholder
pub fn fixture_danbooru() -> Result<McpTestFixture> {
    McpTestFixture::with_translations(vec![
        ("danbooru_gui-es.ts", DANBOORU_ES),
        (
            "danbooru_gui-de.ts",
            r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.0" language="de">
<context>
    <name>DanbooruGUI</name>
    <message>
        <source>Found %i images</source>
        <translation>Bilder gefunden</translation>
    </message>
    <message>
        <source>Width</source>
        <translation>Breite</translation>
    </message>
</context>
</TS>
"#,
        ),
    ])
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert pagination fields in a scan result
pub fn assert_pagination(
    result: &Value,
    expected_offset: usize,
    expected_limit: usize,
    expected_has_more: bool,
) {
    let pagination = &result["pagination"];
    assert_eq!(
        pagination["offset"].as_u64().unwrap(),
        expected_offset as u64,
        "Pagination offset mismatch"
    );
    assert_eq!(
        pagination["limit"].as_u64().unwrap(),
        expected_limit as u64,
        "Pagination limit mismatch"
    );
    assert_eq!(
        pagination["hasMore"].as_bool().unwrap(),
        expected_has_more,
        "Pagination hasMore mismatch"
    );
}

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
