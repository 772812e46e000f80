// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::ui::prompt::confirm;
use std::path::{Path, PathBuf};

/// Export targets must be absolute paths (`~/` is expanded first).
pub(crate) fn resolve_target(file: &str) -> AppResult<PathBuf> {
    let path = crate::utils::path::expand_tilde(file);
    if !path.is_absolute() {
        return Err(AppError::Export(format!(
            "output file path must be absolute: {file}"
        )));
    }
    Ok(path)
}

/// A missing file is always writable; an existing one needs `force`
/// or an interactive yes.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    if confirm(&format!(
        "The file '{}' already exists. Overwrite it?",
        path.display()
    )) {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".into(),
        ))
    }
}
