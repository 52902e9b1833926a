use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::models::break_window::{BreakPolicy, BreakWindow};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_morning_break")]
    pub morning_break: BreakWindow,
    #[serde(default = "default_lunch_break")]
    pub lunch_break: BreakWindow,
    #[serde(default)]
    pub default_format: ExportFormat,
}

fn default_morning_break() -> BreakWindow {
    BreakWindow::MORNING
}
fn default_lunch_break() -> BreakWindow {
    BreakWindow::LUNCH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            morning_break: default_morning_break(),
            lunch_break: default_lunch_break(),
            default_format: ExportFormat::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("timetowin")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".timetowin")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timetowin.conf")
    }

    /// Load configuration from `path`, or return defaults if the file is missing.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
        cfg.policy().validate()?;
        Ok(cfg)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    pub fn policy(&self) -> BreakPolicy {
        BreakPolicy {
            morning: self.morning_break,
            lunch: self.lunch_break,
        }
    }
}
