use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use specstage_core::{SelfReview, StageOutcome, StageStatus};
use specstage_prompts::DesignContext;
use tracing::{error, info, warn};

use crate::agent::Agent;
use crate::artifact;
use crate::checklist::{ChecklistEntry, ChecklistStore};
use crate::context;
use crate::response_parser;

/// Stage identifier recorded in logs and the checklist
/// ("1-2. feature design, final specification").
pub const STAGE_NAME: &str = "1-2. 기능 설계 (최종 명세서)";

/// Everything the design stage consumes, resolved from configuration.
#[derive(Debug, Clone)]
pub struct StageInput {
    pub requirement: String,
    pub answers: String,
    pub structure: Option<String>,
    pub project_root: PathBuf,
    pub context_files: Vec<PathBuf>,
    pub output_path: PathBuf,
}

/// Run the design stage end to end.
///
/// An unreadable (not missing) context file aborts before the agent is
/// invoked and before any checklist exists. From the agent call onward the
/// run always terminates in the checklist write: a failure is captured in
/// the returned outcome as `success = false`, never re-thrown past it.
pub async fn execute(
    input: &StageInput,
    agent: &dyn Agent,
    checklist: &dyn ChecklistStore,
) -> Result<StageOutcome> {
    info!("--- {STAGE_NAME} ---");

    // 1. Snapshot the configured context files (missing ones degrade to
    //    placeholders; anything else unreadable is fatal here)
    let snapshots = context::collect_snapshots(&input.project_root, &input.context_files)
        .map_err(|e| {
            error!("context assembly failed: {e}");
            e
        })?;

    // 2. Assemble the user prompt
    let ctx = DesignContext {
        requirement: input.requirement.clone(),
        answers: input.answers.clone(),
        structure: input.structure.clone(),
        snapshots,
    };
    let user_prompt = specstage_prompts::assemble_user_prompt(&ctx);
    info!("prompt assembled ({} chars)", user_prompt.chars().count());

    // 3. Guarded section: agent call, response split, artifact write
    let (status, review) = match run_stage(agent, &user_prompt, &input.output_path).await {
        Ok(review) => {
            info!("specification written to {}", input.output_path.display());
            info!("self-review rating: {}/10", review.rating);
            (StageStatus::Succeeded, review)
        }
        Err(e) => {
            error!("stage failed: {e:#}");
            (StageStatus::Failed, SelfReview::default())
        }
    };

    // 4. Record the checklist, success or failure alike
    let outcome = StageOutcome {
        success: status == StageStatus::Succeeded,
        output_path: input.output_path.clone(),
        rating: review.rating,
        strengths: review.strengths,
        gaps: review.gaps,
    };
    let entry = ChecklistEntry {
        agent_name: STAGE_NAME.to_string(),
        source: source_locator(),
        status,
        outcome: outcome.clone(),
        items: checklist_items(&outcome),
        recorded_at: Utc::now(),
    };
    if let Err(e) = checklist.save(&entry) {
        warn!("checklist write failed: {e:#}");
    }

    Ok(outcome)
}

async fn run_stage(
    agent: &dyn Agent,
    user_prompt: &str,
    output_path: &Path,
) -> Result<SelfReview> {
    match agent.model_hint() {
        Some(model) => info!("invoking agent {} ({model})", agent.name()),
        None => info!("invoking agent {}", agent.name()),
    }
    let raw = agent
        .run(specstage_prompts::system_prompt(), user_prompt)
        .await
        .context("agent invocation")?;

    let parsed = response_parser::split_response(&raw);
    let cleaned = artifact::strip_markdown_fences(&parsed.specification);
    artifact::write_specification(output_path, &cleaned)?;
    Ok(parsed.review)
}

/// Fixed audit items; every run attempts the same sub-steps.
fn checklist_items(outcome: &StageOutcome) -> Vec<String> {
    let relative = relative_to_cwd(&outcome.output_path);
    vec![
        "PRD 및 프로젝트 컨텍스트 분석 수행 시도".to_string(),
        "질문에 대한 답변을 포함하여 최종 명세서 작성 시도".to_string(),
        "데이터 모델 변경 섹션에 모든 관련 타입의 완전한 정의 포함 시도".to_string(),
        format!("산출물({}) 생성 시도", relative.display()),
        format!("AI 자가 평가 점수: {}/10점 기록 시도", outcome.rating),
    ]
}

fn relative_to_cwd(path: &Path) -> PathBuf {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(&cwd).ok().map(Path::to_path_buf))
        .unwrap_or_else(|| path.to_path_buf())
}

fn source_locator() -> String {
    std::env::current_exe()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| env!("CARGO_PKG_NAME").to_string())
}
