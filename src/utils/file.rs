use crate::models::error::EmuError;
use camino::{Utf8Path, Utf8PathBuf};
use regex::Regex;

pub struct FileUtils;

impl FileUtils {
    /// Writes `bytes` next to `path` under a temporary name, then renames it into place,
    /// so a failed write never leaves a truncated file behind.
    pub fn write_atomic(path: &Utf8Path, bytes: &[u8]) -> Result<(), EmuError> {
        let parent = path
            .parent()
            .ok_or_else(|| EmuError::IOError(format!("{path} has no parent directory")))?;
        std::fs::create_dir_all(parent)?;

        let tmp = parent.join(format!(".{}.tmp", uuid::Uuid::new_v4()));
        std::fs::write(&tmp, bytes)?;
        std::fs::rename(&tmp, path).inspect_err(|_| {
            let _ = std::fs::remove_file(&tmp);
        })?;
        Ok(())
    }

    /// Removes everything inside `dir` and leaves it empty. Creates it when missing.
    pub fn reset_dir(dir: &Utf8Path) -> Result<(), EmuError> {
        if dir.exists() {
            std::fs::remove_dir_all(dir)?;
        }
        std::fs::create_dir_all(dir)?;
        Ok(())
    }

    pub fn remove_dir_if_exists(dir: &Utf8Path) -> Result<bool, EmuError> {
        if !dir.is_dir() {
            return Ok(false);
        }
        std::fs::remove_dir_all(dir)?;
        Ok(true)
    }

    /// Joins a single, user-supplied name onto `base`, refusing anything that
    /// would escape it.
    pub fn join_component(base: &Utf8Path, name: &str) -> Result<Utf8PathBuf, EmuError> {
        Ok(base.join(Self::component(name)?))
    }

    pub fn component(name: &str) -> Result<&str, EmuError> {
        let trimmed = name.trim();
        let invalid = trimmed.is_empty()
            || trimmed == "."
            || trimmed == ".."
            || trimmed.contains(['/', '\\', ':', '\0']);
        if invalid {
            return Err(EmuError::InvalidFileName(name.to_string()));
        }
        Ok(trimmed)
    }
}

/// Title ids are 16 hex digits. The id is returned as given so it keeps matching
/// the directory it was listed from.
pub fn validate_title_id(title_id: &str) -> Result<&str, EmuError> {
    let re = Regex::new(r"^[0-9a-fA-F]{16}$")
        .map_err(|e| EmuError::ParseError(format!("Failed to create regex: {}", e)))?;

    if !re.is_match(title_id) {
        return Err(EmuError::InvalidTitleId(title_id.to_string()));
    }
    Ok(title_id)
}
