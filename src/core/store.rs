use crate::config::APP_NAME;
use crate::models::error::EmuError;
use crate::models::installation::{InstallationConfig, InstallationsFile};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

const FILE_VERSION: u8 = 1;

/// Persistence interface behind the configuration store.
pub trait StoreBackend: Send {
    fn load(&self) -> Result<Vec<InstallationConfig>, EmuError>;
    fn save(&mut self, records: &[InstallationConfig]) -> Result<(), EmuError>;
}

/// Stores the installation list as a confy (TOML) document.
#[derive(Debug, Clone)]
pub struct ConfyBackend {
    path: Option<Utf8PathBuf>,
}

impl ConfyBackend {
    /// The per-user `installations` config of the app.
    pub fn named() -> Self {
        Self { path: None }
    }

    pub fn at_path(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    fn read(&self) -> Result<InstallationsFile, confy::ConfyError> {
        match &self.path {
            Some(path) => confy::load_path(path),
            None => confy::load(APP_NAME, "installations"),
        }
    }

    fn write(&self, file: &InstallationsFile) -> Result<(), confy::ConfyError> {
        match &self.path {
            Some(path) => confy::store_path(path, file),
            None => confy::store(APP_NAME, "installations", file),
        }
    }
}

impl StoreBackend for ConfyBackend {
    fn load(&self) -> Result<Vec<InstallationConfig>, EmuError> {
        Ok(self.read()?.installations)
    }

    fn save(&mut self, records: &[InstallationConfig]) -> Result<(), EmuError> {
        let file = InstallationsFile {
            version: FILE_VERSION,
            installations: records.to_vec(),
        };
        Ok(self.write(&file)?)
    }
}

/// Keeps records in memory only. Used for previews and tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    pub records: Vec<InstallationConfig>,
    pub saves: usize,
}

impl StoreBackend for MemoryBackend {
    fn load(&self) -> Result<Vec<InstallationConfig>, EmuError> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[InstallationConfig]) -> Result<(), EmuError> {
        self.records = records.to_vec();
        self.saves += 1;
        Ok(())
    }
}

/// Ordered list of known installations, unique by path, written through on every change.
pub struct ConfigStore<B: StoreBackend> {
    backend: B,
    records: Vec<InstallationConfig>,
}

impl<B: StoreBackend> ConfigStore<B> {
    pub fn open(backend: B) -> Result<Self, EmuError> {
        let mut records: Vec<InstallationConfig> = Vec::new();
        for record in backend.load()? {
            if records.iter().any(|r| r.path == record.path) {
                debug!("Skipping duplicate installation record {}", record.path);
                continue;
            }
            records.push(record);
        }

        Ok(Self { backend, records })
    }

    pub fn list(&self) -> &[InstallationConfig] {
        &self.records
    }

    pub fn get(&self, path: &Utf8Path) -> Option<&InstallationConfig> {
        self.records.iter().find(|r| r.path == path)
    }

    /// Returns `true` when a new record was inserted. An existing path keeps its
    /// position and only takes the new portability flag.
    pub fn add(&mut self, config: InstallationConfig) -> Result<bool, EmuError> {
        let inserted = match self.records.iter_mut().find(|r| r.path == config.path) {
            Some(existing) => {
                if existing.is_portable == config.is_portable {
                    return Ok(false);
                }
                existing.is_portable = config.is_portable;
                false
            }
            None => {
                info!("Adding installation {}", config.path);
                self.records.push(config);
                true
            }
        };

        self.backend.save(&self.records)?;
        Ok(inserted)
    }

    /// Removes the record with this path. Absent paths are a no-op.
    pub fn delete(&mut self, path: &Utf8Path) -> Result<bool, EmuError> {
        let before = self.records.len();
        self.records.retain(|r| r.path != path);

        if self.records.len() == before {
            debug!("No installation recorded at {path}, nothing to delete");
            return Ok(false);
        }

        info!("Removed installation {path}");
        self.backend.save(&self.records)?;
        Ok(true)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
