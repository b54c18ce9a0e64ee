use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use specta::Type;

/// A user action sent from the front-end. Installations are addressed by path.
#[derive(Serialize, Deserialize, Type, Clone, Debug, PartialEq)]
pub enum Action {
    AddInstallation {
        #[specta(type = String)]
        path: Utf8PathBuf,
    },
    RemoveInstallation {
        #[specta(type = String)]
        path: Utf8PathBuf,
    },
    MakePortable {
        #[specta(type = String)]
        path: Utf8PathBuf,
    },
    DownloadFirmware {
        #[specta(type = String)]
        path: Utf8PathBuf,
    },
    DownloadKeys {
        #[specta(type = String)]
        path: Utf8PathBuf,
    },
    DownloadShaders {
        #[specta(type = String)]
        path: Utf8PathBuf,
        title_id: String,
    },
    DownloadMod {
        #[specta(type = String)]
        path: Utf8PathBuf,
        title_id: String,
        version: String,
        mod_name: String,
        mod_id: String,
    },
    DownloadSave {
        title_id: String,
        file_name: String,
        #[specta(type = String)]
        destination: Utf8PathBuf,
    },
    DismissAlert,
}

#[derive(Serialize, Deserialize, Type, Clone, Debug, Default, PartialEq)]
pub struct ActionOutcome {
    /// The page data is stale and must be fetched again.
    pub needs_refresh: bool,
}

impl ActionOutcome {
    pub fn refresh() -> Self {
        Self { needs_refresh: true }
    }

    pub fn unchanged() -> Self {
        Self::default()
    }
}
