pub mod ui_state;

use crate::models::paths::SYSTEM_DATA_DIR_NAME;
use camino::Utf8PathBuf;
use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const APP_NAME: &str = "emu_keeper";
pub const DEFAULT_API_BASE_URL: &str = "https://api.emusak.fr";
pub const STATUS_PAGE_URL: &str = "https://emusak.betteruptime.com/";

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AppSettings {
    pub version: u8,
    pub api_base_url: String,
    /// Unset means requests may wait forever.
    pub request_timeout_secs: Option<u32>,
    /// Overrides the shared (non-portable) Ryujinx data directory.
    pub system_data_dir: Option<Utf8PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            version: 0,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: None,
            system_data_dir: None,
        }
    }
}

impl AppSettings {
    pub fn load() -> Result<AppSettings, confy::ConfyError> {
        confy::load(APP_NAME, None)
    }

    /// Where non-portable installs keep their data: `<config dir>/Ryujinx`.
    pub fn resolve_system_data_dir(&self) -> Utf8PathBuf {
        if let Some(dir) = &self.system_data_dir {
            return dir.clone();
        }

        BaseDirs::new()
            .and_then(|dirs| Utf8PathBuf::from_path_buf(dirs.config_dir().to_path_buf()).ok())
            .unwrap_or_else(|| Utf8PathBuf::from("."))
            .join(SYSTEM_DATA_DIR_NAME)
    }

    pub fn log_dir() -> PathBuf {
        ProjectDirs::from("com", "martes", APP_NAME)
            .map(|dirs| dirs.data_local_dir().join("logs"))
            .or_else(|| {
                std::env::current_exe()
                    .ok()
                    .and_then(|exe_path| exe_path.parent().map(|p| p.join("logs")))
            })
            .unwrap_or_else(|| PathBuf::from("logs"))
    }
}
