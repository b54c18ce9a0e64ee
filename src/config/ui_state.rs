// src/config/ui_state.rs
use crate::config::APP_NAME;
use crate::models::error::EmuError;
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// Small view flags that outlive a session. Kept apart from the installation list.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct UiState {
    pub alert_dismissed: bool,
}

/// Where the flags live: the named confy config, or an explicit file.
#[derive(Debug, Clone)]
pub enum UiStateLocation {
    Default,
    File(Utf8PathBuf),
    Memory,
}

impl UiStateLocation {
    pub fn load(&self) -> UiState {
        match self {
            UiStateLocation::Default => confy::load(APP_NAME, "ui").unwrap_or_default(),
            UiStateLocation::File(path) => load_from(path).unwrap_or_default(),
            UiStateLocation::Memory => UiState::default(),
        }
    }

    pub fn save(&self, state: &UiState) -> Result<(), EmuError> {
        match self {
            UiStateLocation::Default => Ok(confy::store(APP_NAME, "ui", state)?),
            UiStateLocation::File(path) => Ok(confy::store_path(path, state)?),
            UiStateLocation::Memory => Ok(()),
        }
    }
}

fn load_from(path: &Utf8Path) -> Result<UiState, EmuError> {
    Ok(confy::load_path(path)?)
}
