// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
mod text;

pub use logic::ExportLogic;

use crate::errors::AppResult;
use crate::models::calculation::CalculationResult;
use crate::ui::messages::success;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Shared completion message for file exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Text => "text",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

/// Renders a result in the given format. `color` only affects text output.
pub fn render(result: &CalculationResult, format: ExportFormat, color: bool) -> AppResult<String> {
    match format {
        ExportFormat::Text => Ok(text::render_text(result, color)),
        ExportFormat::Json => json_csv::render_json(result),
        ExportFormat::Csv => json_csv::render_csv(result),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_match_cli_values() {
        for f in [ExportFormat::Text, ExportFormat::Json, ExportFormat::Csv] {
            let value = f.to_possible_value().unwrap();
            assert_eq!(value.get_name(), f.as_str());
        }
    }

    #[test]
    fn format_names_match_config_values() {
        let yaml = serde_yaml::to_string(&ExportFormat::Json).unwrap();
        assert_eq!(yaml.trim(), "json");
        let back: ExportFormat = serde_yaml::from_str("csv").unwrap();
        assert_eq!(back, ExportFormat::Csv);
    }
}
