pub mod claude_cli;
pub mod mock;

use anyhow::{bail, Result};
use async_trait::async_trait;

use crate::config::RunnerConfig;

/// Trait for text-generation agent backends.
///
/// Each backend encapsulates:
/// - How to reach one agent CLI or service
/// - What environment variables / CLI flags to pass
/// - How to validate the tool is available
///
/// The trait does NOT handle:
/// - Prompt assembly (handled by specstage-prompts)
/// - Response parsing (handled by response_parser.rs)
/// - Outcome recording (handled by pipeline.rs)
#[async_trait]
pub trait Agent: Send + Sync {
    /// Human-readable backend name for logging.
    fn name(&self) -> &str;

    /// Optional model hint for logging/display purposes.
    fn model_hint(&self) -> Option<&str> {
        None
    }

    /// Run preflight checks specific to this backend.
    /// Called once at startup, before any pipeline work.
    async fn preflight_check(&self) -> Result<()>;

    /// Send one system instruction and one user instruction, then wait for
    /// the complete text response. A failed invocation surfaces as an error;
    /// the caller decides what a failure means for the run.
    async fn run(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;
}

/// Construct the backend selected in the runner configuration.
pub fn from_config(config: &RunnerConfig) -> Result<Box<dyn Agent>> {
    match config.agent_backend.as_str() {
        "claude-cli" => Ok(Box::new(claude_cli::ClaudeCliAgent {
            anthropic_base_url: config.anthropic_base_url.clone(),
            anthropic_auth_token: config.anthropic_auth_token.clone(),
            model: config.anthropic_model.clone(),
        })),
        "mock" => Ok(Box::new(mock::MockAgent::respond_with(
            mock::SAMPLE_RESPONSE,
        ))),
        other => bail!("unknown agent backend: {other} (expected claude-cli or mock)"),
    }
}
