// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::{ExportFormat, notify_export_success, render};
use crate::models::calculation::CalculationResult;
use crate::ui::messages::info;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Writes a calculation result to a file.
pub struct ExportLogic;

impl ExportLogic {
    /// - `format`: text | json | csv (text is written without colours)
    /// - `path`: output file; an existing file needs `force` or confirmation
    pub fn export(
        result: &CalculationResult,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        info(format!(
            "Exporting to {}: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));

        let content = render(result, format, false)?;
        fs::write(path, &content)?;
        debug!(bytes = content.len(), path = %path.display(), "export written");

        notify_export_success(&format.as_str().to_uppercase(), path);
        Ok(())
    }
}
