//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the analyzer over MCP so that assistants can request proficiency
//! and readability estimates through the stdio transport.
//!
//! The server is a presentation layer over `essay-lens-core`. Every tool
//! enforces the configured input size limit on the raw text and reports
//! invalid input as `invalid_params`; anything else is an `internal_error`.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use essay_lens_core::config::Config;
use essay_lens_core::{
    AnalysisError, ScoringModel, analyze, check_input_length, markdown, readability, syllables,
};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `analyze_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeTextParams {
    /// The essay or paragraph to analyze.
    pub text: String,
    /// Scoring model: "ratio" or "grade". Defaults to the configured model.
    pub model: Option<String>,
    /// Number of vocabulary words to list.
    pub sample_size: Option<usize>,
    /// Whether to strip markdown formatting before analysis.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// Parameters for the `check_readability` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CheckReadabilityParams {
    /// The text to analyze.
    pub text: String,
    /// Maximum acceptable Flesch-Kincaid grade level.
    pub max_grade: Option<f64>,
    /// Whether to strip markdown formatting before analysis.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// Parameters for the `count_syllables` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CountSyllablesParams {
    /// Words or text to estimate.
    pub text: String,
}

/// MCP server exposing the analyzer to AI assistants.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    config: Config,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a server with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a server that applies `config` to every tool call.
    pub fn with_config(config: Config) -> Self {
        Self {
            tool_router: Self::tool_router(),
            config,
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "model": self.config.model.as_str(),
        });

        let text = if params.format == "json" {
            to_json(&info)?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Estimate CEFR level, IELTS band, and advanced vocabulary.
    #[tool(
        description = "Analyze an English essay or paragraph. Returns word and sentence metrics, an estimated CEFR level and IELTS band, and a sample of advanced vocabulary."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_text(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<AnalyzeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        let model = match params.model.as_deref() {
            Some(name) => name
                .parse::<ScoringModel>()
                .map_err(|e| McpError::invalid_params(e, None))?,
            None => self.config.model,
        };
        tracing::debug!(tool = "analyze_text", %model, "executing MCP tool");

        let text = self.prepare(&params.text, params.strip_markdown)?;
        check_input_length(&text, self.config.min_input_chars_for(model)).map_err(to_mcp_error)?;

        let mut options = self.config.analysis_options(model);
        if params.sample_size.is_some() {
            options.sample_size = params.sample_size;
        }
        let report = analyze(&text, &options).map_err(to_mcp_error)?;
        let json = report.to_json_pretty().map_err(to_mcp_error)?;

        tracing::info!(
            tool = "analyze_text",
            cefr = report.assessment.cefr_level(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Score readability using Flesch-Kincaid Grade Level.
    #[tool(
        description = "Check readability of text. Returns Flesch-Kincaid grade level and statistics."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn check_readability(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<CheckReadabilityParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "check_readability",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );

        let text = self.prepare(&params.text, params.strip_markdown)?;
        let max_grade = params.max_grade.or(self.config.max_grade);
        let report = readability::check_readability(&text, max_grade).map_err(to_mcp_error)?;
        let json = to_json(&report)?;

        tracing::info!(
            tool = "check_readability",
            grade = report.grade,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Estimate syllables per word.
    #[tool(description = "Estimate the syllable count of each word in the text.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn count_syllables(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<CountSyllablesParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "count_syllables", "executing MCP tool");

        let text = self.prepare(&params.text, false)?;
        let words = syllables::estimate_words(&text);
        if words.is_empty() {
            return Err(to_mcp_error(AnalysisError::NoContent));
        }
        let total: usize = words.iter().map(|w| w.syllables).sum();
        let json = to_json(&serde_json::json!({ "words": words, "total": total }))?;

        tracing::info!(tool = "count_syllables", total, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

impl ProjectServer {
    /// Enforce the input limit on the raw text, then strip markdown if asked.
    fn prepare(&self, text: &str, strip_markdown: bool) -> Result<String, McpError> {
        if let Some(max) = self.config.input_limit()
            && text.len() > max
        {
            return Err(McpError::invalid_params(
                format!(
                    "input too large: {} bytes (limit: {max} bytes)",
                    text.len()
                ),
                None,
            ));
        }
        Ok(if strip_markdown {
            markdown::strip_to_prose(text)
        } else {
            text.to_string()
        })
    }
}

fn to_mcp_error(err: AnalysisError) -> McpError {
    if err.is_input_error() {
        McpError::invalid_params(err.to_string(), None)
    } else {
        McpError::internal_error(err.to_string(), None)
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use analyze_text to estimate the CEFR level and IELTS band of English prose.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
