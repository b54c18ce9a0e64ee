use crate::core::probe::FsProbe;
use crate::models::error::EmuError;
use crate::models::installation::InstallationConfig;
use crate::models::paths::{DataPaths, InstallPaths};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::info;

/// Resolves where an installation keeps its games, keys, firmware and mods.
#[derive(Clone, Debug)]
pub struct Layout {
    pub system_data_dir: Utf8PathBuf,
}

impl Layout {
    pub fn new(system_data_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            system_data_dir: system_data_dir.into(),
        }
    }

    pub fn data_dir(&self, config: &InstallationConfig) -> Utf8PathBuf {
        if config.is_portable {
            InstallPaths::new(&config.path).portable
        } else {
            self.system_data_dir.clone()
        }
    }

    pub fn data_paths(&self, config: &InstallationConfig) -> DataPaths {
        DataPaths::new(&self.data_dir(config))
    }

    /// Title ids found under `games/`. A missing directory means the emulator
    /// has not launched a game yet.
    pub fn title_ids(&self, config: &InstallationConfig) -> Vec<String> {
        let games = self.data_paths(config).games;
        if !games.is_dir() {
            return Vec::new();
        }
        FsProbe::list_directories(&games).unwrap_or_default()
    }
}

/// Creates the `portable` directory and returns the re-probed configuration.
pub fn make_portable(install_root: &Utf8Path) -> Result<InstallationConfig, EmuError> {
    let paths = InstallPaths::new(install_root);
    std::fs::create_dir_all(&paths.portable)?;
    info!("Switched {install_root} to portable mode");

    FsProbe::inspect(install_root)
}
