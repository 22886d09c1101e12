use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Terminal record of one stage run, handed to the checklist store whether
/// the run succeeded or failed. On failure the review fields keep their
/// defaults.
#[derive(Debug, Clone, Serialize)]
pub struct StageOutcome {
    pub success: bool,
    pub output_path: PathBuf,
    pub rating: u8,
    pub strengths: String,
    pub gaps: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    Running,
    Succeeded,
    Failed,
}

impl StageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageStatus::Running => "running",
            StageStatus::Succeeded => "succeeded",
            StageStatus::Failed => "failed",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "running" => Some(StageStatus::Running),
            "succeeded" => Some(StageStatus::Succeeded),
            "failed" => Some(StageStatus::Failed),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, StageStatus::Succeeded | StageStatus::Failed)
    }
}

impl fmt::Display for StageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
