use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::info;

use super::Agent;

/// Claude CLI backend — wraps the `claude` command-line tool in
/// single-prompt mode.
///
/// Supports optional endpoint overrides via `anthropic_base_url` and
/// `anthropic_auth_token`, enabling use with vLLM, Ollama, OpenRouter,
/// or any Anthropic-compatible API.
pub struct ClaudeCliAgent {
    /// Override for ANTHROPIC_BASE_URL (e.g., for vLLM, Ollama, OpenRouter)
    pub anthropic_base_url: Option<String>,
    /// Override for ANTHROPIC_AUTH_TOKEN
    pub anthropic_auth_token: Option<String>,
    /// Model name hint for logging
    pub model: Option<String>,
}

impl ClaudeCliAgent {
    fn apply_endpoint_overrides(&self, cmd: &mut Command) {
        if let Some(ref url) = self.anthropic_base_url {
            cmd.env("ANTHROPIC_BASE_URL", url);
        }
        if let Some(ref token) = self.anthropic_auth_token {
            cmd.env("ANTHROPIC_AUTH_TOKEN", token);
        }
    }
}

#[async_trait]
impl Agent for ClaudeCliAgent {
    fn name(&self) -> &str {
        if self.anthropic_base_url.is_some() {
            "claude-cli/custom"
        } else {
            "claude-cli"
        }
    }

    fn model_hint(&self) -> Option<&str> {
        self.model.as_deref()
    }

    async fn preflight_check(&self) -> Result<()> {
        let output = std::process::Command::new("claude")
            .arg("--version")
            .output()
            .context(
                "Claude CLI is not installed. Install it: https://docs.anthropic.com/en/docs/claude-cli",
            )?;
        if !output.status.success() {
            bail!("claude --version failed");
        }
        let version = String::from_utf8_lossy(&output.stdout);
        info!("claude: {}", version.trim());
        Ok(())
    }

    async fn run(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let mut cmd = Command::new("claude");
        cmd.arg("-p")
            .arg(user_prompt)
            .arg("--append-system-prompt")
            .arg(system_prompt)
            .arg("--output-format")
            .arg("text");
        self.apply_endpoint_overrides(&mut cmd);

        let output = cmd.output().await.context("failed to spawn claude")?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "claude exited with code {}: {}",
                output.status.code().unwrap_or(-1),
                stderr.trim()
            );
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
