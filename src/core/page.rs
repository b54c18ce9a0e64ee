use crate::config::STATUS_PAGE_URL;
use crate::core::games::InstallationGames;
use crate::core::layout::Layout;
use crate::core::presenter;
use crate::core::remote::RemoteService;
use crate::models::error::EmuError;
use crate::models::installation::InstallationConfig;
use crate::models::page::{InstallationView, PagePhase, PageSnapshot};
use crate::models::remote::{RemoteMetadata, ShaderCounts};
use camino::{Utf8Path, Utf8PathBuf};
use std::collections::BTreeMap;
use tracing::{debug, error, info};

/// Games found on disk for one installation, before presentation.
#[derive(Clone, Debug)]
pub struct InstallationListing {
    pub config: InstallationConfig,
    pub title_ids: Vec<String>,
}

impl InstallationListing {
    pub fn scan(config: &InstallationConfig, layout: &Layout) -> Self {
        let title_ids = layout.title_ids(config);
        debug!("{} titles under {}", title_ids.len(), config.path);
        Self {
            config: config.clone(),
            title_ids,
        }
    }
}

/// Screen state: `Uninitialized -> Loading -> Ready`, and back to `Loading`
/// whenever something marks the data stale.
pub struct Page {
    phase: PagePhase,
    needs_refresh: bool,
    generation: u64,
    layout: Layout,
    listings: Vec<InstallationListing>,
    shader_counts: ShaderCounts,
    metadata: Option<RemoteMetadata>,
    filters: BTreeMap<Utf8PathBuf, String>,
}

impl Page {
    pub fn new(layout: Layout) -> Self {
        Self {
            phase: PagePhase::Uninitialized,
            needs_refresh: true,
            generation: 0,
            layout,
            listings: Vec::new(),
            shader_counts: ShaderCounts::new(),
            metadata: None,
            filters: BTreeMap::new(),
        }
    }

    pub fn phase(&self) -> PagePhase {
        self.phase
    }

    pub fn needs_refresh(&self) -> bool {
        self.needs_refresh
    }

    pub fn mark_stale(&mut self) {
        self.needs_refresh = true;
        self.generation += 1;
        self.phase = PagePhase::Loading;
    }

    /// Returns the generation the refresh is based on; pass it back to [`Page::apply`].
    pub fn begin_loading(&mut self) -> u64 {
        self.phase = PagePhase::Loading;
        self.generation
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Takes the result of a refresh that ran without holding the page. If the
    /// page was marked stale meanwhile, the data is kept but still flagged stale.
    pub fn apply(
        &mut self,
        generation: u64,
        configs: &[InstallationConfig],
        listings: Vec<InstallationListing>,
        remote: Result<(ShaderCounts, RemoteMetadata), EmuError>,
    ) {
        self.listings = listings;
        self.filters
            .retain(|path, _| configs.iter().any(|c| &c.path == path));
        self.needs_refresh = generation != self.generation;

        match remote {
            Ok((counts, metadata)) => {
                let complete = is_complete(&counts, &metadata);
                self.shader_counts = counts;
                self.metadata = Some(metadata);

                if complete && !self.needs_refresh {
                    info!("Page ready with {} installations", self.listings.len());
                    self.phase = PagePhase::Ready;
                } else {
                    info!("Remote data incomplete, page stays loading");
                    self.phase = PagePhase::Loading;
                }
            }
            Err(e) => {
                error!("Failed to load remote data: {e}");
                self.phase = PagePhase::Loading;
            }
        }
    }

    pub fn set_filter(&mut self, path: &Utf8Path, filter: &str) {
        if filter.is_empty() {
            self.filters.remove(path);
        } else {
            self.filters.insert(path.to_owned(), filter.to_string());
        }
    }

    /// Copies out what a snapshot needs, so rows can be built without the page.
    pub fn capture(&self) -> PageCapture {
        PageCapture {
            phase: self.phase,
            needs_refresh: self.needs_refresh,
            layout: self.layout.clone(),
            listings: self.listings.clone(),
            shader_counts: self.shader_counts.clone(),
            metadata: self.metadata.clone(),
            filters: self.filters.clone(),
        }
    }
}

/// Page state detached from the lock. Rendering reads game metadata and shader
/// archives from disk.
#[derive(Clone, Debug)]
pub struct PageCapture {
    phase: PagePhase,
    needs_refresh: bool,
    layout: Layout,
    listings: Vec<InstallationListing>,
    shader_counts: ShaderCounts,
    metadata: Option<RemoteMetadata>,
    filters: BTreeMap<Utf8PathBuf, String>,
}

impl PageCapture {
    pub fn render(self, alert_dismissed: bool) -> PageSnapshot {
        let installations = self
            .listings
            .iter()
            .map(|listing| {
                let source = InstallationGames::new(self.layout.data_paths(&listing.config));
                let filter = self.filters.get(&listing.config.path).map(String::as_str);
                InstallationView {
                    config: listing.config.clone(),
                    filter: filter.unwrap_or_default().to_string(),
                    games: presenter::present(
                        &listing.title_ids,
                        &source,
                        &self.shader_counts,
                        filter,
                    ),
                }
            })
            .collect();

        PageSnapshot {
            phase: self.phase,
            needs_refresh: self.needs_refresh,
            installations,
            metadata: self.metadata,
            alert_dismissed,
            status_url: STATUS_PAGE_URL.to_string(),
        }
    }
}

pub fn scan_all(configs: &[InstallationConfig], layout: &Layout) -> Vec<InstallationListing> {
    configs
        .iter()
        .map(|c| InstallationListing::scan(c, layout))
        .collect()
}

pub fn fetch_remote(remote: &dyn RemoteService) -> Result<(ShaderCounts, RemoteMetadata), EmuError> {
    let counts = remote.shader_counts()?;
    let metadata = remote.metadata()?;
    Ok((counts, metadata))
}

/// The screen only becomes usable once every remote piece has arrived.
pub fn is_complete(counts: &ShaderCounts, metadata: &RemoteMetadata) -> bool {
    !counts.is_empty()
        && !metadata.saves.is_empty()
        && !metadata.mods.is_empty()
        && !metadata.firmware_version.is_empty()
        && metadata.threshold > 0
}
