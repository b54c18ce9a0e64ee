// src/core/registry.rs
use crate::config::ui_state::{UiState, UiStateLocation};
use crate::config::AppSettings;
use crate::core::layout::Layout;
use crate::core::orchestrator::Orchestrator;
use crate::core::page::Page;
use crate::core::remote::{EmusakClient, RemoteService};
use crate::core::store::{ConfigStore, ConfyBackend, StoreBackend};
use crate::models::error::EmuError;
use parking_lot::Mutex;
use std::sync::Arc;

/// Shared application state. Cloning is cheap: every part sits behind an `Arc`.
pub struct AppRegistry<B: StoreBackend = ConfyBackend, R: RemoteService = EmusakClient> {
    pub store: Arc<Mutex<ConfigStore<B>>>,
    pub page: Arc<Mutex<Page>>,
    pub ui_state: Arc<Mutex<UiState>>,
    pub ui_location: UiStateLocation,
    pub orchestrator: Arc<Orchestrator<R>>,
}

impl AppRegistry {
    pub fn new(settings: &AppSettings) -> Result<Self, EmuError> {
        let remote = Arc::new(EmusakClient::new(settings)?);
        let layout = Layout::new(settings.resolve_system_data_dir());
        Self::with_parts(
            ConfyBackend::named(),
            remote,
            layout,
            UiStateLocation::Default,
        )
    }
}

impl<B: StoreBackend, R: RemoteService> AppRegistry<B, R> {
    pub fn with_parts(
        backend: B,
        remote: Arc<R>,
        layout: Layout,
        ui_location: UiStateLocation,
    ) -> Result<Self, EmuError> {
        let store = ConfigStore::open(backend)?;
        let ui_state = ui_location.load();

        Ok(Self {
            store: Arc::new(Mutex::new(store)),
            page: Arc::new(Mutex::new(Page::new(layout.clone()))),
            ui_state: Arc::new(Mutex::new(ui_state)),
            ui_location,
            orchestrator: Arc::new(Orchestrator::new(remote, layout)),
        })
    }
}

impl<B: StoreBackend, R: RemoteService> Clone for AppRegistry<B, R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            page: self.page.clone(),
            ui_state: self.ui_state.clone(),
            ui_location: self.ui_location.clone(),
            orchestrator: self.orchestrator.clone(),
        }
    }
}
