use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::pipeline::StageInput;

#[derive(Debug, Parser)]
#[command(
    name = "specstage-runner",
    about = "TDD design-stage runner: turns a requirement document into a final feature specification"
)]
pub struct RunnerConfig {
    /// Feature requirement document (PRD) fed to the agent
    #[arg(long, env = "SPECSTAGE_REQUIREMENT")]
    pub requirement: PathBuf,

    /// Answers to the clarifying questions from the previous stage
    #[arg(long, env = "SPECSTAGE_ANSWERS")]
    pub answers: PathBuf,

    /// Optional project structure overview, included ahead of the file snapshots
    #[arg(long, env = "SPECSTAGE_STRUCTURE")]
    pub structure: Option<PathBuf>,

    /// Project root against which context files are resolved
    #[arg(long, env = "SPECSTAGE_PROJECT_ROOT", default_value = ".")]
    pub project_root: PathBuf,

    /// Source file to snapshot into the prompt, relative to the project root (repeatable)
    #[arg(long = "context-file")]
    pub context_files: Vec<PathBuf>,

    /// Where the generated specification is written
    #[arg(
        long,
        env = "SPECSTAGE_OUTPUT",
        default_value = "tdd-automation/logs/output-02-feature-spec.md"
    )]
    pub output: PathBuf,

    /// Where the run checklist is written
    #[arg(
        long,
        env = "SPECSTAGE_CHECKLIST",
        default_value = "tdd-automation/logs/checklist-02-feature-spec.md"
    )]
    pub checklist: PathBuf,

    /// Agent backend to use (claude-cli or mock)
    #[arg(long, env = "SPECSTAGE_AGENT_BACKEND", default_value = "claude-cli")]
    pub agent_backend: String,

    /// Override for ANTHROPIC_BASE_URL (e.g., for vLLM, Ollama, OpenRouter)
    #[arg(long, env = "SPECSTAGE_ANTHROPIC_BASE_URL")]
    pub anthropic_base_url: Option<String>,

    /// Override for ANTHROPIC_AUTH_TOKEN
    #[arg(long, env = "SPECSTAGE_ANTHROPIC_AUTH_TOKEN")]
    pub anthropic_auth_token: Option<String>,

    /// Model name hint for logging
    #[arg(long, env = "SPECSTAGE_ANTHROPIC_MODEL")]
    pub anthropic_model: Option<String>,
}

impl RunnerConfig {
    /// Load the file-backed inputs into a stage input. Unlike context
    /// snapshots, the requirement and answers documents are required:
    /// any read failure here is fatal, missing files included.
    pub fn load_input(&self) -> Result<StageInput> {
        let requirement = std::fs::read_to_string(&self.requirement)
            .with_context(|| format!("read requirement document {}", self.requirement.display()))?;
        let answers = std::fs::read_to_string(&self.answers)
            .with_context(|| format!("read answers document {}", self.answers.display()))?;
        let structure = match &self.structure {
            Some(path) => Some(
                std::fs::read_to_string(path)
                    .with_context(|| format!("read structure overview {}", path.display()))?,
            ),
            None => None,
        };

        Ok(StageInput {
            requirement,
            answers,
            structure,
            project_root: self.project_root.clone(),
            context_files: self.context_files.clone(),
            output_path: self.output.clone(),
        })
    }
}
