use crate::core::decompression::Decompression;
use crate::core::layout::Layout;
use crate::core::remote::{RemoteAsset, RemoteService};
use crate::models::error::EmuError;
use crate::models::installation::InstallationConfig;
use crate::utils::file::{validate_title_id, FileUtils};
use camino::{Utf8Path, Utf8PathBuf};
use std::sync::Arc;
use tracing::{info, instrument};

/// Runs downloads against the content service and writes the results into an
/// installation. Every call is independent; nothing is retried.
pub struct Orchestrator<R: RemoteService> {
    remote: Arc<R>,
    layout: Layout,
}

impl<R: RemoteService> Orchestrator<R> {
    pub fn new(remote: Arc<R>, layout: Layout) -> Self {
        Self { remote, layout }
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Replaces the registered firmware contents with the downloaded archive.
    #[instrument(skip(self, install), fields(install = %install.path))]
    pub fn install_firmware(&self, install: &InstallationConfig) -> Result<Utf8PathBuf, EmuError> {
        let bytes = self.remote.fetch(&RemoteAsset::Firmware)?;
        Decompression::validate(&bytes)?;

        let target = self.layout.data_paths(install).firmware;
        FileUtils::reset_dir(&target)?;
        let written = Decompression::extract_bytes(&bytes, &target)?;

        info!("Installed firmware ({written} files) into {target}");
        Ok(target)
    }

    #[instrument(skip(self, install), fields(install = %install.path))]
    pub fn install_keys(&self, install: &InstallationConfig) -> Result<Utf8PathBuf, EmuError> {
        let bytes = self.remote.fetch(&RemoteAsset::Keys)?;
        let target = self.layout.data_paths(install).keys;
        FileUtils::write_atomic(&target, &bytes)?;

        info!("Wrote keys to {target}");
        Ok(target)
    }

    /// Writes the remote shader archive for `title_id` and drops the host cache
    /// so the emulator recompiles from the new guest cache.
    #[instrument(skip(self, install), fields(install = %install.path))]
    pub fn install_shaders(
        &self,
        install: &InstallationConfig,
        title_id: &str,
    ) -> Result<Utf8PathBuf, EmuError> {
        let title_id = validate_title_id(title_id)?;
        let bytes = self.remote.fetch(&RemoteAsset::Shaders {
            title_id: title_id.to_string(),
        })?;
        let entries = Decompression::validate(&bytes)?;

        let game = self.layout.data_paths(install).game(title_id);
        FileUtils::write_atomic(&game.shader_archive, &bytes)?;
        if FileUtils::remove_dir_if_exists(&game.host_shader_cache)? {
            info!("Cleared host shader cache {}", game.host_shader_cache);
        }

        info!("Installed {entries} shaders for {title_id}");
        Ok(game.shader_archive)
    }

    #[instrument(skip(self, install), fields(install = %install.path))]
    pub fn install_mod(
        &self,
        install: &InstallationConfig,
        title_id: &str,
        version: &str,
        mod_name: &str,
        mod_id: &str,
    ) -> Result<Utf8PathBuf, EmuError> {
        let title_id = validate_title_id(title_id)?;
        let mod_name = FileUtils::component(mod_name)?;

        let bytes = self.remote.fetch(&RemoteAsset::Mod {
            title_id: title_id.to_string(),
            version: version.to_string(),
            name: mod_name.to_string(),
            id: mod_id.to_string(),
        })?;
        Decompression::validate(&bytes)?;

        let target = self.layout.data_paths(install).mod_dir(title_id, mod_name);
        let written = Decompression::extract_bytes(&bytes, &target)?;

        info!("Installed mod {mod_name} ({written} files) into {target}");
        Ok(target)
    }

    /// Saves are not tied to an installation; the user picks where they go.
    #[instrument(skip(self))]
    pub fn download_save(
        &self,
        title_id: &str,
        file_name: &str,
        destination: &Utf8Path,
    ) -> Result<Utf8PathBuf, EmuError> {
        let title_id = validate_title_id(title_id)?;
        let target = FileUtils::join_component(destination, file_name)?;

        let bytes = self.remote.fetch(&RemoteAsset::Save {
            title_id: title_id.to_string(),
            file_name: file_name.trim().to_string(),
        })?;
        FileUtils::write_atomic(&target, &bytes)?;

        info!("Saved {} bytes to {target}", bytes.len());
        Ok(target)
    }
}
