use crate::core::decompression::Decompression;
use crate::models::paths::DataPaths;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::warn;

/// Per-title lookups the game list needs.
pub trait GameSource {
    fn display_name(&self, title_id: &str) -> String;
    fn local_shader_count(&self, title_id: &str) -> u32;
}

#[derive(Deserialize)]
struct GameMetadata {
    title: Option<String>,
}

/// Reads names and shader caches from an installation's data directory.
pub struct InstallationGames {
    paths: DataPaths,
}

impl InstallationGames {
    pub fn new(paths: DataPaths) -> Self {
        Self { paths }
    }

    fn metadata_title(&self, title_id: &str) -> Option<String> {
        let file = std::fs::File::open(self.paths.game(title_id).metadata).ok()?;
        let metadata: GameMetadata = serde_json::from_reader(file).ok()?;
        metadata.title.filter(|t| !t.trim().is_empty())
    }
}

impl GameSource for InstallationGames {
    fn display_name(&self, title_id: &str) -> String {
        self.metadata_title(title_id)
            .unwrap_or_else(|| title_id.to_uppercase())
    }

    fn local_shader_count(&self, title_id: &str) -> u32 {
        let archive = self.paths.game(title_id).shader_archive;
        if !archive.is_file() {
            return 0;
        }

        match Decompression::count_entries(&archive) {
            Ok(count) => u32::try_from(count).unwrap_or(u32::MAX),
            Err(e) => {
                warn!("Unreadable shader cache {archive}: {e}");
                0
            }
        }
    }
}

/// Fixed names and counts, for previews and tests.
#[derive(Default, Clone, Debug)]
pub struct StaticGames {
    pub names: BTreeMap<String, String>,
    pub shader_counts: BTreeMap<String, u32>,
}

impl StaticGames {
    pub fn with(mut self, title_id: &str, name: &str, local_shaders: u32) -> Self {
        self.names.insert(title_id.to_string(), name.to_string());
        self.shader_counts.insert(title_id.to_string(), local_shaders);
        self
    }
}

impl GameSource for StaticGames {
    fn display_name(&self, title_id: &str) -> String {
        self.names
            .get(title_id)
            .cloned()
            .unwrap_or_else(|| title_id.to_uppercase())
    }

    fn local_shader_count(&self, title_id: &str) -> u32 {
        self.shader_counts.get(title_id).copied().unwrap_or(0)
    }
}
