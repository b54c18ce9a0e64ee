use crate::models::game::GameRow;
use crate::models::installation::InstallationConfig;
use crate::models::remote::RemoteMetadata;
use serde::{Deserialize, Serialize};
use specta::Type;

#[derive(Serialize, Deserialize, Type, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagePhase {
    Uninitialized,
    Loading,
    Ready,
}

#[derive(Serialize, Deserialize, Type, Clone, Debug)]
pub struct InstallationView {
    pub config: InstallationConfig,
    pub filter: String,
    pub games: Vec<GameRow>,
}

/// Everything the front-end needs to draw the Ryujinx screen.
#[derive(Serialize, Deserialize, Type, Clone, Debug)]
pub struct PageSnapshot {
    pub phase: PagePhase,
    pub needs_refresh: bool,
    pub installations: Vec<InstallationView>,
    pub metadata: Option<RemoteMetadata>,
    pub alert_dismissed: bool,
    /// Shown next to the loading message in case the remote never answers.
    pub status_url: String,
}
