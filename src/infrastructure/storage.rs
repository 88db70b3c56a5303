use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use crate::domain::error::{AppError, Result};

static UNSAFE_FILENAME_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_.-]").unwrap());

/// Whether `filename` has one of `allowed` as its (case-insensitive) extension
pub fn is_allowed_file(filename: &str, allowed: &[String]) -> bool {
    match filename.rsplit_once('.') {
        Some((_, ext)) => {
            let ext = ext.to_lowercase();
            allowed.iter().any(|a| a.to_lowercase() == ext)
        }
        None => false,
    }
}

/// Reduce an uploaded file name to a safe, flat ASCII name.
///
/// Path separators and whitespace collapse to `_`, anything outside
/// `[A-Za-z0-9_.-]` is removed and leading/trailing dots or underscores are
/// stripped, so the result can never climb out of the upload directory.
pub fn sanitize_filename(filename: &str) -> Result<String> {
    let ascii: String = filename
        .chars()
        .filter(|c| c.is_ascii())
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();
    let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");
    let cleaned = UNSAFE_FILENAME_CHARS.replace_all(&joined, "");
    let cleaned = cleaned.trim_matches(|c| c == '.' || c == '_');

    if cleaned.is_empty() {
        return Err(AppError::ValidationError(format!(
            "Invalid file name: {:?}",
            filename
        )));
    }
    Ok(cleaned.to_string())
}

/// Copy an upload into `upload_dir` under its sanitized name.
///
/// Uploads are keyed only by name; a later upload with the same name
/// replaces the earlier file. A source that already is the staged file is
/// left untouched.
pub fn stage_upload(upload_dir: &Path, original_name: &str, source: &Path) -> Result<PathBuf> {
    let name = sanitize_filename(original_name)?;
    ensure_dir(upload_dir)?;
    let target = upload_dir.join(name);
    if is_same_file(source, &target) {
        info!(path = %target.display(), "Upload already staged");
        return Ok(target);
    }
    fs::copy(source, &target).map_err(|e| {
        AppError::IoError(format!(
            "Failed to stage upload {} to {}: {}",
            source.display(),
            target.display(),
            e
        ))
    })?;
    info!(path = %target.display(), "Upload staged");
    Ok(target)
}

// fs::copy truncates the target before reading, so copying a file onto itself empties it.
fn is_same_file(source: &Path, target: &Path) -> bool {
    match (fs::canonicalize(source), fs::canonicalize(target)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Location of the generated record, or `NotFound` when nothing has been written yet
pub fn resolve_download(output_path: &Path) -> Result<PathBuf> {
    if output_path.is_file() {
        Ok(output_path.to_path_buf())
    } else {
        Err(AppError::NotFound("File not found".to_string()))
    }
}

pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exts() -> Vec<String> {
        vec!["xlsx".to_string(), "xlsm".to_string()]
    }

    #[test]
    fn test_is_allowed_file() {
        assert!(is_allowed_file("deal.xlsx", &exts()));
        assert!(is_allowed_file("Deal.Sheet.XLSM", &exts()));
        assert!(!is_allowed_file("deal.xls", &exts()));
        assert!(!is_allowed_file("xlsx", &exts()));
        assert!(!is_allowed_file("deal.csv", &exts()));
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("My Deal Sheet.xlsx").unwrap(), "My_Deal_Sheet.xlsx");
        assert_eq!(sanitize_filename("../../etc/passwd").unwrap(), "etc_passwd");
        assert_eq!(sanitize_filename("Café (v2).xlsm").unwrap(), "Caf_v2.xlsm");
        assert!(sanitize_filename("../..").is_err());
    }

    #[test]
    fn test_stage_upload_overwrites_same_name() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.xlsx");
        let second = dir.path().join("second.xlsx");
        fs::write(&first, b"one").unwrap();
        fs::write(&second, b"two").unwrap();
        let uploads = dir.path().join("uploads");

        let a = stage_upload(&uploads, "deal sheet.xlsx", &first).unwrap();
        let b = stage_upload(&uploads, "deal sheet.xlsx", &second).unwrap();

        assert_eq!(a, b);
        assert_eq!(a, uploads.join("deal_sheet.xlsx"));
        assert_eq!(fs::read(&b).unwrap(), b"two");
    }

    #[test]
    fn test_stage_upload_in_place_keeps_contents() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = dir.path().join("uploads");
        fs::create_dir_all(&uploads).unwrap();
        let source = uploads.join("deal.xlsx");
        fs::write(&source, b"workbook bytes").unwrap();

        let staged = stage_upload(&uploads, "deal.xlsx", &source).unwrap();
        assert_eq!(staged, uploads.join("deal.xlsx"));
        assert_eq!(fs::read(&staged).unwrap(), b"workbook bytes");

        // Same file reached through a relative detour
        let detour = uploads.join("..").join("uploads").join("deal.xlsx");
        stage_upload(&uploads, "deal.xlsx", &detour).unwrap();
        assert_eq!(fs::read(&staged).unwrap(), b"workbook bytes");
    }

    #[test]
    fn test_resolve_download() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data_record.xlsx");

        let err = resolve_download(&path).unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "File not found"));

        fs::write(&path, b"x").unwrap();
        assert_eq!(resolve_download(&path).unwrap(), path);
    }
}
