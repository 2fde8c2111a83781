use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::config::load_config;

use super::helpers;
use super::types::{
    ConfigDto, ConfigValues, GetConfigParams, ListTranslationFilesParams, ScanIssuesParams,
    ScanOverviewParams, TranslateParams,
};

#[derive(Clone)]
pub struct TsglotMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for TsglotMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_router]
impl TsglotMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current tsglot configuration
    #[tool(description = "Get the current tsglot configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        to_json_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }

    /// List the .ts files under the translations root
    #[tool(
        description = "List Qt Linguist .ts files under the translations root with their language and message counts."
    )]
    pub async fn list_translation_files(
        &self,
        params: Parameters<ListTranslationFilesParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = helpers::list_translation_files(path).map_err(|e| {
            McpError::internal_error(format!("Failed to list translation files: {}", e), None)
        })?;

        to_json_result(&result)
    }

    /// Get overview statistics of all translation issues
    #[tool(
        description = "Get statistics of all translation issues per rule without detailed items. Use this first to understand the overall state before diving into details."
    )]
    pub async fn scan_overview(
        &self,
        params: Parameters<ScanOverviewParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let (issues, files_checked) = helpers::scan_project(path)
            .map_err(|e| McpError::internal_error(format!("Scan failed: {}", e), None))?;

        to_json_result(&helpers::overview(&issues, files_checked))
    }

    /// Get detailed issues, optionally filtered by rule
    #[tool(
        description = "Scan .ts files for translation issues (placeholder mismatches, duplicates, untranslated entries, ...). Optionally filter by rule name. Returns paginated list of issues."
    )]
    pub async fn scan_issues(
        &self,
        params: Parameters<ScanIssuesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let path = Path::new(&params.project_root_path);

        let (issues, _) = helpers::scan_project(path)
            .map_err(|e| McpError::internal_error(format!("Scan failed: {}", e), None))?;

        let result =
            helpers::paginate_issues(issues, params.rule.as_deref(), params.limit, params.offset)
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        to_json_result(&result)
    }

    /// Translate one source string
    #[tool(
        description = "Look up the translation of a source string in a context and substitute placeholder arguments. Falls back to the source text when no translation exists."
    )]
    pub async fn translate(
        &self,
        params: Parameters<TranslateParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = helpers::translate(&params.0)
            .map_err(|e| McpError::internal_error(format!("Translation failed: {}", e), None))?;

        to_json_result(&result)
    }
}

#[tool_handler]
impl ServerHandler for TsglotMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "tsglot MCP helps AI agents maintain Qt Linguist .ts translation tables.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. list_translation_files - List .ts files with language and message counts\n\
                 3. scan_overview - Get issue counts per rule\n\
                 4. scan_issues - Get detailed issues, optionally filtered by rule (paginated)\n\
                 5. translate - Render one source string through a translation file\n\n\
                 Recommended Workflow:\n\
                 1. Use scan_overview to understand the overall state\n\
                 2. Fix placeholder-mismatch and numerus errors first, they break the running application\n\
                 3. Then fill untranslated entries and review identical ones\n\
                 4. Use translate to verify how a fixed string renders"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = TsglotMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
