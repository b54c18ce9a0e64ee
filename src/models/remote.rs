use serde::{Deserialize, Serialize};
use specta::Type;
use std::collections::BTreeMap;

/// Remote shader count per title id.
pub type ShaderCounts = BTreeMap<String, u32>;

/// Save file names available per title id.
pub type SaveIndex = BTreeMap<String, Vec<String>>;

#[derive(Serialize, Deserialize, Type, Clone, Debug, PartialEq)]
pub struct RemoteMod {
    pub title_id: String,
    pub version: String,
    pub name: String,
    pub id: String,
}

#[derive(Serialize, Deserialize, Type, Clone, Debug, Default, PartialEq)]
pub struct RemoteMetadata {
    pub firmware_version: String,
    pub threshold: u32,
    pub saves: SaveIndex,
    pub mods: Vec<RemoteMod>,
}

#[derive(Deserialize)]
pub(crate) struct FirmwareVersionResponse {
    pub version: String,
}

#[derive(Deserialize)]
pub(crate) struct ThresholdResponse {
    pub threshold: u32,
}
