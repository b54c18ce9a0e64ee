use crate::config::AppSettings;
use crate::models::error::EmuError;
use crate::models::remote::{
    FirmwareVersionResponse, RemoteMetadata, RemoteMod, SaveIndex, ShaderCounts,
    ThresholdResponse,
};
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

/// A downloadable payload on the content service.
#[derive(Clone, Debug, PartialEq)]
pub enum RemoteAsset {
    Firmware,
    Keys,
    Shaders {
        title_id: String,
    },
    Mod {
        title_id: String,
        version: String,
        name: String,
        id: String,
    },
    Save {
        title_id: String,
        file_name: String,
    },
}

impl RemoteAsset {
    /// URL path segments, unencoded.
    pub fn segments(&self) -> Vec<&str> {
        match self {
            RemoteAsset::Firmware => vec!["firmware", "download"],
            RemoteAsset::Keys => vec!["keys", "download"],
            RemoteAsset::Shaders { title_id } => vec!["shaders", "ryujinx", title_id, "download"],
            RemoteAsset::Mod {
                title_id,
                version,
                name,
                id,
            } => vec!["mods", title_id, version, name, id, "download"],
            RemoteAsset::Save {
                title_id,
                file_name,
            } => vec!["saves", title_id, file_name, "download"],
        }
    }
}

/// Read-only view of the content service.
pub trait RemoteService: Send + Sync {
    fn shader_counts(&self) -> Result<ShaderCounts, EmuError>;
    fn metadata(&self) -> Result<RemoteMetadata, EmuError>;
    fn fetch(&self, asset: &RemoteAsset) -> Result<Vec<u8>, EmuError>;
}

pub struct EmusakClient {
    base_url: Url,
    client: reqwest::blocking::Client,
}

impl EmusakClient {
    pub fn new(settings: &AppSettings) -> Result<Self, EmuError> {
        let base_url = Url::parse(&settings.api_base_url)
            .map_err(|e| EmuError::ParseError(format!("{}: {e}", settings.api_base_url)))?;

        // reqwest's blocking client defaults to 30s; keep requests unbounded unless asked.
        let timeout = settings
            .request_timeout_secs
            .map(|secs| Duration::from_secs(u64::from(secs)));

        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("emu_keeper/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { base_url, client })
    }

    pub fn url(&self, segments: &[&str]) -> Result<Url, EmuError> {
        build_url(&self.base_url, segments)
    }

    fn get(&self, segments: &[&str]) -> Result<reqwest::blocking::Response, EmuError> {
        let url = self.url(segments)?;
        debug!("GET {url}");
        let response = self.client.get(url.clone()).send()?;

        if !response.status().is_success() {
            return Err(EmuError::Network(format!(
                "{url} returned {}",
                response.status()
            )));
        }
        Ok(response)
    }

    fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, EmuError> {
        Ok(self.get(segments)?.json::<T>()?)
    }
}

impl RemoteService for EmusakClient {
    fn shader_counts(&self) -> Result<ShaderCounts, EmuError> {
        self.get_json(&["shaders", "ryujinx", "count"])
    }

    fn metadata(&self) -> Result<RemoteMetadata, EmuError> {
        let firmware: FirmwareVersionResponse = self.get_json(&["firmware", "version"])?;
        let threshold: ThresholdResponse = self.get_json(&["shaders", "threshold"])?;
        let saves: SaveIndex = self.get_json(&["saves"])?;
        let mods: Vec<RemoteMod> = self.get_json(&["mods"])?;

        Ok(RemoteMetadata {
            firmware_version: firmware.version,
            threshold: threshold.threshold,
            saves,
            mods,
        })
    }

    fn fetch(&self, asset: &RemoteAsset) -> Result<Vec<u8>, EmuError> {
        let bytes = self.get(&asset.segments())?.bytes()?;
        info!("Downloaded {:?} ({} bytes)", asset, bytes.len());
        Ok(bytes.to_vec())
    }
}

/// Appends percent-encoded segments to `base`, keeping any path the base already has.
pub fn build_url(base: &Url, segments: &[&str]) -> Result<Url, EmuError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| EmuError::ParseError(format!("{base} cannot be a base URL")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
