use anyhow::Result;
use clap::Parser;
use specstage_runner::checklist::FileChecklist;
use specstage_runner::config::RunnerConfig;
use specstage_runner::{agent, pipeline};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = RunnerConfig::parse();
    info!("specstage-runner starting");
    info!("stage: {}", pipeline::STAGE_NAME);

    let agent = agent::from_config(&config)?;
    info!("agent backend: {}", agent.name());

    // Fail fast before assembling any prompt
    agent.preflight_check().await?;

    let input = config.load_input()?;
    let checklist = FileChecklist::new(config.checklist.clone());

    let outcome = pipeline::execute(&input, agent.as_ref(), &checklist).await?;
    if !outcome.success {
        std::process::exit(1);
    }

    info!("stage complete: {}", outcome.output_path.display());
    Ok(())
}
