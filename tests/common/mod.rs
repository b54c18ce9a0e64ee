#![allow(dead_code)]

use camino::{Utf8Path, Utf8PathBuf};
use emu_keeper_lib::config::ui_state::UiStateLocation;
use emu_keeper_lib::core::layout::Layout;
use emu_keeper_lib::core::registry::AppRegistry;
use emu_keeper_lib::core::remote::{RemoteAsset, RemoteService};
use emu_keeper_lib::core::store::MemoryBackend;
use emu_keeper_lib::models::error::EmuError;
use emu_keeper_lib::models::paths::DataPaths;
use emu_keeper_lib::models::remote::{RemoteMetadata, RemoteMod, ShaderCounts};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::sync::Arc;
use tempfile::TempDir;

/// Temp root with a shared data dir at `<root>/system`.
pub fn setup_test_env() -> (TempDir, Utf8PathBuf, Utf8PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap();
    let system = root.join("system");
    fs::create_dir_all(&system).unwrap();
    (tmp, root, system)
}

/// Mock a Ryujinx install folder. `exe` is the executable to drop in, if any.
pub fn create_install(root: &Utf8Path, name: &str, exe: Option<&str>, portable: bool) -> Utf8PathBuf {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    if let Some(exe) = exe {
        fs::write(dir.join(exe), "dummy").unwrap();
    }
    if portable {
        fs::create_dir_all(dir.join("portable")).unwrap();
    }
    fs::write(dir.join("config.json"), "{}").unwrap();
    dir
}

/// Mock a game folder under a data dir, with an optional metadata title and shader cache.
pub fn create_game(data_dir: &Utf8Path, title_id: &str, title: Option<&str>, shaders: usize) {
    let game = DataPaths::new(data_dir).game(title_id);

    fs::create_dir_all(game.metadata.parent().unwrap()).unwrap();
    if let Some(title) = title {
        fs::write(
            &game.metadata,
            format!(r#"{{"title": "{}", "favorite": false, "timespan_played": 0}}"#, title),
        )
        .unwrap();
    }

    if shaders > 0 {
        let entries: Vec<(String, String)> = (0..shaders)
            .map(|i| (format!("{i:04}"), format!("shader {i}")))
            .collect();
        let entries: Vec<(&str, &str)> = entries
            .iter()
            .map(|(n, d)| (n.as_str(), d.as_str()))
            .collect();
        fs::create_dir_all(game.shader_archive.parent().unwrap()).unwrap();
        fs::write(&game.shader_archive, zip_bytes(&entries)).unwrap();
    }
}

pub fn zip_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Stored);
    for (name, data) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(data.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// In-memory content service. Assets are keyed by their URL path.
#[derive(Default)]
pub struct FakeRemote {
    pub counts: ShaderCounts,
    pub metadata: Option<RemoteMetadata>,
    pub assets: BTreeMap<String, Vec<u8>>,
    pub fetched: Mutex<Vec<RemoteAsset>>,
}

impl FakeRemote {
    pub fn with_asset(mut self, asset: &RemoteAsset, bytes: Vec<u8>) -> Self {
        self.assets.insert(asset.segments().join("/"), bytes);
        self
    }

    pub fn with_counts(mut self, counts: &[(&str, u32)]) -> Self {
        self.counts = counts.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        self
    }

    pub fn complete(mut self) -> Self {
        self.metadata = Some(complete_metadata());
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetched.lock().len()
    }
}

impl RemoteService for FakeRemote {
    fn shader_counts(&self) -> Result<ShaderCounts, EmuError> {
        Ok(self.counts.clone())
    }

    fn metadata(&self) -> Result<RemoteMetadata, EmuError> {
        self.metadata
            .clone()
            .ok_or_else(|| EmuError::Network("service unavailable".into()))
    }

    fn fetch(&self, asset: &RemoteAsset) -> Result<Vec<u8>, EmuError> {
        self.fetched.lock().push(asset.clone());
        self.assets
            .get(&asset.segments().join("/"))
            .cloned()
            .ok_or_else(|| EmuError::Network(format!("404 for {asset:?}")))
    }
}

pub fn complete_metadata() -> RemoteMetadata {
    RemoteMetadata {
        firmware_version: "17.0.0".into(),
        threshold: 100,
        saves: BTreeMap::from([(
            "0100f2c0115b6000".to_string(),
            vec!["save.zip".to_string()],
        )]),
        mods: vec![RemoteMod {
            title_id: "0100f2c0115b6000".into(),
            version: "1.0.0".into(),
            name: "60fps".into(),
            id: "1".into(),
        }],
    }
}

pub fn registry(remote: FakeRemote, system: &Utf8Path) -> AppRegistry<MemoryBackend, FakeRemote> {
    AppRegistry::with_parts(
        MemoryBackend::default(),
        Arc::new(remote),
        Layout::new(system),
        UiStateLocation::Memory,
    )
    .unwrap()
}
