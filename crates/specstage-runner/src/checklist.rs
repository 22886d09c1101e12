use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use specstage_core::{StageOutcome, StageStatus};

/// One persisted audit record of a stage run.
#[derive(Debug, Clone)]
pub struct ChecklistEntry {
    /// Stage identifier, e.g. `1-2. 기능 설계 (최종 명세서)`.
    pub agent_name: String,
    /// Locator of the program that produced this record.
    pub source: String,
    pub status: StageStatus,
    pub outcome: StageOutcome,
    /// Human-readable descriptions of the sub-steps this run attempted.
    pub items: Vec<String>,
    pub recorded_at: DateTime<Utc>,
}

/// Persistence boundary for checklist records. The pipeline saves exactly
/// one entry per run, success or failure; a refused save is logged by the
/// caller, never propagated.
pub trait ChecklistStore {
    fn save(&self, entry: &ChecklistEntry) -> Result<()>;
}

/// Writes each record as a single markdown file, overwritten per run.
pub struct FileChecklist {
    path: PathBuf,
}

impl FileChecklist {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChecklistStore for FileChecklist {
    fn save(&self, entry: &ChecklistEntry) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create checklist directory {}", parent.display()))?;
            }
        }
        std::fs::write(&self.path, render_markdown(entry))
            .with_context(|| format!("write checklist {}", self.path.display()))?;
        Ok(())
    }
}

fn render_markdown(entry: &ChecklistEntry) -> String {
    let mut out = String::new();
    out.push_str(&format!("# 체크리스트: {}\n\n", entry.agent_name));
    out.push_str(&format!(
        "- 기록 시각: {}\n",
        entry.recorded_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str(&format!("- 소스: {}\n", entry.source));
    out.push_str(&format!("- 상태: {}\n", entry.status));
    out.push_str(&format!(
        "- 산출물: {}\n\n",
        entry.outcome.output_path.display()
    ));

    out.push_str("## 수행 항목\n\n");
    for item in &entry.items {
        out.push_str(&format!("- [x] {item}\n"));
    }

    out.push_str("\n## 실행 결과\n\n```json\n");
    out.push_str(
        &serde_json::to_string_pretty(&entry.outcome).unwrap_or_else(|_| "{}".to_string()),
    );
    out.push_str("\n```\n");
    out
}
