use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContextError {
    /// The file is present but could not be read. A missing file is not an
    /// error; callers substitute a placeholder for those.
    #[error("failed to read context file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
