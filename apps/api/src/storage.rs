//! Scratch-directory persistence for uploaded and derived files.
//!
//! Each parse request gets its own subdirectory under the configured upload
//! dir; nothing is cleaned up by the service itself.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use uuid::Uuid;

/// Creates a fresh scratch subdirectory under `base` for one upload request.
pub fn create_scratch_dir(base: &Path) -> Result<PathBuf> {
    let dir = base.join(Uuid::new_v4().to_string());
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create scratch dir {}", dir.display()))?;
    Ok(dir)
}

/// Writes `bytes` under `dir` using a sanitized version of `filename`.
pub fn save_file(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
    let path = dir.join(sanitize_filename(filename));
    fs::write(&path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

/// Download filename for the derived text: `<stem>_extracted.txt`.
pub fn extracted_filename(original: &str) -> String {
    let sanitized = sanitize_filename(original);
    let stem = Path::new(&sanitized)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("resume");
    format!("{stem}_extracted.txt")
}

/// Keeps only the final path component of a client-supplied filename and
/// drops characters that could escape the scratch directory.
fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let cleaned: String = base.chars().filter(|c| !matches!(c, ':' | '\0')).collect();
    if cleaned.is_empty() || cleaned == "." || cleaned == ".." {
        "upload.bin".to_string()
    } else {
        cleaned
    }
}
