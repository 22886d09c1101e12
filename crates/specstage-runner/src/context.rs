use std::path::{Path, PathBuf};

use specstage_core::ContextError;
use specstage_prompts::FileSnapshot;
use tracing::warn;

/// Read each named context file into a snapshot for the prompt.
///
/// A missing file is not an error: its snapshot carries a placeholder
/// comment naming the path, and the run proceeds on a best-effort context.
/// Any other read failure aborts the run before the agent is invoked.
pub fn collect_snapshots(
    project_root: &Path,
    files: &[PathBuf],
) -> Result<Vec<FileSnapshot>, ContextError> {
    files
        .iter()
        .map(|file| read_snapshot(project_root, file))
        .collect()
}

fn read_snapshot(project_root: &Path, file: &Path) -> Result<FileSnapshot, ContextError> {
    let full = project_root.join(file);
    let listed = file.display().to_string();
    match std::fs::read_to_string(&full) {
        Ok(content) => Ok(FileSnapshot {
            path: listed,
            content,
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("context file missing, substituting placeholder: {listed}");
            Ok(FileSnapshot {
                path: listed.clone(),
                content: format!("// [파일 없음] {listed}"),
            })
        }
        Err(e) => Err(ContextError::Unreadable {
            path: full,
            source: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readable_file_is_snapshotted() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(tmp.path().join("src")).unwrap();
        std::fs::write(tmp.path().join("src/types.ts"), "export type Id = string;").unwrap();

        let snapshots =
            collect_snapshots(tmp.path(), &[PathBuf::from("src/types.ts")]).unwrap();
        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].path, "src/types.ts");
        assert_eq!(snapshots[0].content, "export type Id = string;");
    }

    #[test]
    fn missing_file_becomes_placeholder() {
        let tmp = tempfile::tempdir().unwrap();
        let snapshots =
            collect_snapshots(tmp.path(), &[PathBuf::from("src/ghost.ts")]).unwrap();
        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].content, "// [파일 없음] src/ghost.ts");
    }

    #[test]
    fn mixed_present_and_missing_files() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("real.ts"), "real").unwrap();

        let snapshots = collect_snapshots(
            tmp.path(),
            &[PathBuf::from("real.ts"), PathBuf::from("ghost.ts")],
        )
        .unwrap();
        assert_eq!(snapshots[0].content, "real");
        assert!(snapshots[1].content.contains("ghost.ts"));
    }

    #[test]
    fn unreadable_file_is_an_error() {
        // A directory at the path fails read_to_string with something other
        // than NotFound, which must abort instead of degrading.
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(tmp.path().join("src/hooks")).unwrap();

        let err = collect_snapshots(tmp.path(), &[PathBuf::from("src/hooks")]).unwrap_err();
        let ContextError::Unreadable { path, .. } = err;
        assert!(path.ends_with("src/hooks"));
    }

    #[test]
    fn empty_file_list_yields_empty_snapshot_set() {
        let tmp = tempfile::tempdir().unwrap();
        let snapshots = collect_snapshots(tmp.path(), &[]).unwrap();
        assert!(snapshots.is_empty());
    }
}
