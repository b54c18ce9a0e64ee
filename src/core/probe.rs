use crate::models::error::EmuError;
use crate::models::installation::InstallationConfig;
use crate::models::paths::{PORTABLE_DIR, RYUJINX_EXECUTABLES};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, warn};

pub struct FsProbe;

impl FsProbe {
    /// Names of the immediate subdirectories of `path`, sorted.
    pub fn list_directories(path: &Utf8Path) -> Result<Vec<String>, EmuError> {
        Self::list_entries(path, |ft| ft.is_dir())
    }

    /// Names of the immediate files of `path`, sorted.
    pub fn list_files(path: &Utf8Path) -> Result<Vec<String>, EmuError> {
        Self::list_entries(path, |ft| ft.is_file())
    }

    fn list_entries(
        path: &Utf8Path,
        keep: impl Fn(&std::fs::FileType) -> bool,
    ) -> Result<Vec<String>, EmuError> {
        let mut names: Vec<String> = std::fs::read_dir(path)?
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().map(|ft| keep(&ft)).unwrap_or(false))
            .filter_map(|e| e.file_name().into_string().ok())
            .collect();
        names.sort();
        Ok(names)
    }

    /// Validates a candidate install directory and detects portable mode.
    pub fn inspect(path: &Utf8Path) -> Result<InstallationConfig, EmuError> {
        let files = Self::list_files(path).map_err(|e| {
            warn!("Cannot read candidate installation {path}: {e}");
            EmuError::InvalidInstallation(path.to_string())
        })?;

        let has_executable = RYUJINX_EXECUTABLES
            .iter()
            .any(|exe| files.iter().any(|f| f == exe));
        if !has_executable {
            debug!("No Ryujinx executable in {path}: {files:?}");
            return Err(EmuError::InvalidInstallation(path.to_string()));
        }

        let is_portable = Self::list_directories(path)
            .map(|dirs| dirs.iter().any(|d| d == PORTABLE_DIR))
            .unwrap_or(false);

        Ok(InstallationConfig {
            path: Self::normalize(path),
            is_portable,
        })
    }

    /// Canonical form used as the store key. Falls back to the input when the
    /// path cannot be resolved or is not UTF-8.
    pub fn normalize(path: &Utf8Path) -> Utf8PathBuf {
        dunce::canonicalize(path)
            .ok()
            .and_then(|p| Utf8PathBuf::from_path_buf(p).ok())
            .unwrap_or_else(|| path.to_owned())
    }
}
