//! MCP (Model Context Protocol) server implementation.
//!
//! This module exposes text analysis, chat, and content generation over the
//! MCP protocol via stdio transport.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer. It wraps the same core library
//! that the CLI commands use, and each `#[tool]` method delegates to
//! `aimpact_core` rather than implementing behavior itself.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use aimpact_core::chat::{ChatResponder, Intent};
use aimpact_core::generator::TemplateSet;
use aimpact_core::{AnalysisResult, Config, ContentError, metrics};

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
    /// The text to analyze.
    pub text: String,
    /// Minimum acceptable readability score (0-100).
    pub min_readability: Option<f64>,
}

/// Parameters for the `chat_reply` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ChatReplyParams {
    /// The user's message.
    pub message: String,
    /// Seed for a reproducible reply.
    pub seed: Option<u64>,
}

/// Parameters for the `generate_content` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GenerateContentParams {
    /// What the content should be about.
    pub prompt: String,
    /// Template name: "blog", "email", "social", "product", or a configured one.
    #[serde(default = "default_template")]
    pub template: String,
}

fn default_template() -> String {
    "blog".to_string()
}

#[derive(Serialize)]
struct AnalyzeTextResponse {
    #[serde(flatten)]
    report: AnalysisResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pass: Option<bool>,
}

#[derive(Serialize)]
struct ChatReplyResponse {
    intent: Intent,
    reply: &'static str,
}

/// MCP server exposing aimpact to AI assistants.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    max_input_bytes: Option<usize>,
    min_readability: Option<f64>,
    templates: TemplateSet,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

fn content_error(err: ContentError) -> McpError {
    McpError::invalid_params(err.to_string(), None)
}

#[tool_router]
impl ProjectServer {
    /// Create a server with default limits and only the built-in templates.
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Create a server using the limits, gates, and templates in `config`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            tool_router: Self::tool_router(),
            max_input_bytes: config.input_limit(),
            min_readability: config.min_readability,
            templates: TemplateSet::with_custom(config.templates.as_ref()),
        }
    }

    fn check_input_size(&self, text: &str) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            )),
            _ => Ok(()),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "templates": self.templates.names().collect::<Vec<_>>(),
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

    /// Compute text statistics.
    #[tool(
        description = "Analyze text. Returns word, character, sentence, and paragraph counts, reading time, sentiment, readability score, and key words."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_text(
        &self,
        Parameters(params): Parameters<AnalyzeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "analyze_text", len = params.text.len(), "executing MCP tool");
        self.check_input_size(&params.text)?;

        let report = metrics::analyze(&params.text);
        let pass = params
            .min_readability
            .or(self.min_readability)
            .map(|min| report.readability_score >= min);

        tracing::info!(
            tool = "analyze_text",
            words = report.word_count,
            readability = report.readability_score,
            "MCP tool completed"
        );
        let json = to_json(&AnalyzeTextResponse { report, pass })?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Reply to a chat message.
    #[tool(
        description = "Reply to a chat message with the canned assistant. Returns the detected intent and the reply."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", seed = ?params.seed))]
    fn chat_reply(
        &self,
        Parameters(params): Parameters<ChatReplyParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "chat_reply", "executing MCP tool");
        self.check_input_size(&params.message)?;
        if params.message.trim().is_empty() {
            return Err(content_error(ContentError::EmptyMessage));
        }

        let mut responder = params
            .seed
            .map_or_else(ChatResponder::new, ChatResponder::seeded);
        let response = ChatReplyResponse {
            intent: Intent::detect(&params.message),
            reply: responder.reply(&params.message),
        };

        tracing::info!(tool = "chat_reply", intent = %response.intent, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(to_json(
            &response,
        )?)]))
    }

    /// Generate content from a template.
    #[tool(
        description = "Generate content for a prompt from a template (blog, email, social, product, or a configured template)."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", template = %params.template))]
    fn generate_content(
        &self,
        Parameters(params): Parameters<GenerateContentParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "generate_content", template = %params.template, "executing MCP tool");
        self.check_input_size(&params.prompt)?;

        let generated = self
            .templates
            .generate(&params.prompt, &params.template)
            .map_err(content_error)?;

        tracing::info!(
            tool = "generate_content",
            chars = generated.content.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(to_json(
            &generated,
        )?)]))
    }
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
                "{} MCP server. Use analyze_text for text statistics, chat_reply for the assistant, and generate_content for templated content.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
