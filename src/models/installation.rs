use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use specta::Type;

/// A Ryujinx install directory known to the app. `path` is the identity.
#[derive(Serialize, Deserialize, Type, Clone, Debug, PartialEq, Eq)]
pub struct InstallationConfig {
    #[specta(type = String)]
    pub path: Utf8PathBuf,
    pub is_portable: bool,
}

impl InstallationConfig {
    pub fn new(path: impl Into<Utf8PathBuf>, is_portable: bool) -> Self {
        Self {
            path: path.into(),
            is_portable,
        }
    }
}

/// On-disk representation of the installation list.
#[derive(Serialize, Deserialize, Default, Clone, Debug)]
pub struct InstallationsFile {
    pub version: u8,
    pub installations: Vec<InstallationConfig>,
}
