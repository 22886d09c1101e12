use std::path::Path;

use anyhow::{Context, Result};

/// Strip a single fenced-code-block wrapper from the specification text.
///
/// Only a fence opening the very start of the text (bare or tagged
/// `markdown`, case-insensitive) and a fence closing the very end are
/// removed; fences inside the document are left alone. Surrounding
/// whitespace is trimmed.
pub fn strip_markdown_fences(text: &str) -> String {
    let mut body = text.trim();

    if let Some(rest) = body.strip_prefix("```") {
        let rest = strip_markdown_tag(rest);
        if let Some(newline) = rest.find('\n') {
            if rest[..newline].trim().is_empty() {
                body = &rest[newline + 1..];
            }
        }
    }

    if let Some(rest) = body.trim_end().strip_suffix("```") {
        body = rest;
    }

    body.trim().to_string()
}

fn strip_markdown_tag(rest: &str) -> &str {
    const TAG: &str = "markdown";
    match rest.get(..TAG.len()) {
        Some(head) if head.eq_ignore_ascii_case(TAG) => &rest[TAG.len()..],
        _ => rest,
    }
}

/// Write the cleaned specification, creating the output directory (and any
/// parents) first. The write is a full overwrite of any previous artifact.
pub fn write_specification(path: &Path, specification: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output directory {}", parent.display()))?;
        }
    }
    std::fs::write(path, specification)
        .with_context(|| format!("write specification {}", path.display()))?;
    Ok(())
}
