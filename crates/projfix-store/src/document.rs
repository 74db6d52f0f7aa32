//! Opening and saving project documents on disk

use std::fs;
use std::path::Path;
use std::time::Instant;

use projfix_core::model::ProjectDocument;
use projfix_core::{log_op_end, log_op_error, log_op_start};
use tracing::warn;

use crate::errors::{io_error, missing_path, Result};
use crate::reader::parse_project_str;
use crate::writer::write_project_string;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Load a project document, reporting why it could not be read
///
/// The returned document remembers `path` as its save location and has no
/// unsaved changes.
///
/// # Errors
/// * `ERR_NOT_FOUND` - The file does not exist
/// * `ERR_IO` - The file could not be read
/// * `ERR_INVALID_DOCUMENT` - The content is not a well-formed project
pub fn try_open(path: &Path) -> Result<ProjectDocument> {
    let start = Instant::now();
    log_op_start!("open_project", project_path = %path.display());

    let result = fs::read_to_string(path)
        .map_err(|e| io_error("open_project", path, e))
        .and_then(|text| parse_project_str(&text).map_err(|e| e.with_path(path)));

    match result {
        Ok(project) => {
            log_op_end!(
                "open_project",
                duration_ms = start.elapsed().as_millis() as u64,
                group_count = project.property_groups().count()
            );
            Ok(project.with_path(path))
        }
        Err(err) => {
            log_op_error!(
                "open_project",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(err)
        }
    }
}

/// Load a project document
///
/// Returns `None` when the file is missing or is not a well-formed
/// project; the reason is logged as a warning.
pub fn open(path: &Path) -> Option<ProjectDocument> {
    match try_open(path) {
        Ok(project) => Some(project),
        Err(err) => {
            warn!(
                project_path = %path.display(),
                err.code = err.code(),
                "Could not open project: {}",
                err
            );
            None
        }
    }
}

/// Write a document to its path and clear its dirty flag
///
/// The content goes to a sibling temporary file first and is renamed over
/// the target, so a failed save never leaves a half-written project.
///
/// # Errors
/// * `ERR_INVALID_INPUT` - The document has no path
/// * `ERR_SERIALIZATION` - The document could not be serialized
/// * `ERR_IO` - The file could not be written
pub fn save(project: &mut ProjectDocument) -> Result<()> {
    let start = Instant::now();
    let path = project
        .path()
        .map(Path::to_path_buf)
        .ok_or_else(|| missing_path("save_project"))?;
    log_op_start!("save_project", project_path = %path.display());

    let result = write_project_string(project).and_then(|text| {
        let mut bytes = Vec::with_capacity(text.len() + UTF8_BOM.len());
        if project.has_utf8_bom() {
            bytes.extend_from_slice(UTF8_BOM);
        }
        bytes.extend_from_slice(text.as_bytes());
        atomic_write(&path, &bytes)
    });

    match result {
        Ok(()) => {
            project.mark_saved();
            log_op_end!(
                "save_project",
                duration_ms = start.elapsed().as_millis() as u64
            );
            Ok(())
        }
        Err(err) => {
            let err = err.with_path(&path);
            log_op_error!(
                "save_project",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(err)
        }
    }
}

fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    let mut temp_name = target_path.as_os_str().to_os_string();
    temp_name.push(".tmp");
    let temp_path = Path::new(&temp_name);

    fs::write(temp_path, content).map_err(|e| io_error("save_project", temp_path, e))?;
    fs::rename(temp_path, target_path).map_err(|e| io_error("save_project", target_path, e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use projfix_core::errors::ExErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_try_open_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = try_open(&temp_dir.path().join("Missing.csproj")).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::NotFound);
        assert_eq!(err.op(), Some("open_project"));
    }

    #[test]
    fn test_save_without_path_is_rejected() {
        let mut project = ProjectDocument::empty();
        project.mark_dirty();

        let err = save(&mut project).unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
        assert!(project.has_unsaved_changes());
    }

    #[test]
    fn test_no_tmp_files_after_save() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("Game.csproj");
        let mut project = ProjectDocument::empty().with_path(&target);

        save(&mut project).unwrap();

        let entries: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("Game.csproj")]);
    }
}
