use serde::{Deserialize, Serialize};
use specta::Type;

/// Title id the emulator uses as a placeholder. Never a real game.
pub const SENTINEL_TITLE_ID: &str = "0000000000000000";

/// One row of a rendered game list.
#[derive(Serialize, Deserialize, Type, Clone, Debug, PartialEq)]
pub struct GameRow {
    pub title_id: String,
    /// Upper-case form shown under the name.
    pub display_id: String,
    pub name: String,
    pub local_shader_count: u32,
    pub remote_shader_count: u32,
    pub can_download_shaders: bool,
    pub can_share_shaders: bool,
}
