use crate::core::layout;
use crate::core::page;
use crate::core::probe::FsProbe;
use crate::core::registry::AppRegistry;
use crate::core::remote::RemoteService;
use crate::core::store::StoreBackend;
use crate::models::action::{Action, ActionOutcome};
use crate::models::error::EmuError;
use crate::models::installation::InstallationConfig;
use crate::models::page::PageSnapshot;
use camino::Utf8Path;
use tracing::{info, instrument, warn};

/// Runs one user action to completion. When the outcome asks for a refresh the
/// page is marked stale only after the action finished, so a refresh never
/// races a write that is still in flight.
#[instrument(skip(registry))]
pub fn dispatch<B: StoreBackend, R: RemoteService>(
    registry: &AppRegistry<B, R>,
    action: Action,
) -> Result<ActionOutcome, EmuError> {
    let outcome = run(registry, action)?;

    if outcome.needs_refresh {
        registry.page.lock().mark_stale();
    }
    Ok(outcome)
}

fn run<B: StoreBackend, R: RemoteService>(
    registry: &AppRegistry<B, R>,
    action: Action,
) -> Result<ActionOutcome, EmuError> {
    let orchestrator = &registry.orchestrator;

    match action {
        Action::AddInstallation { path } => {
            // Probe before touching the store: an invalid folder changes nothing.
            let config = FsProbe::inspect(&path)?;
            let inserted = registry.store.lock().add(config)?;
            if !inserted {
                info!("{path} was already known");
            }
            Ok(ActionOutcome::refresh())
        }
        Action::RemoveInstallation { path } => {
            registry.store.lock().delete(&path)?;
            Ok(ActionOutcome::refresh())
        }
        Action::MakePortable { path } => {
            let known = installation(registry, &path)?;
            let probed = layout::make_portable(&known.path)?;
            registry.store.lock().add(InstallationConfig {
                path: known.path,
                is_portable: probed.is_portable,
            })?;
            Ok(ActionOutcome::refresh())
        }
        Action::DownloadFirmware { path } => {
            let install = installation(registry, &path)?;
            orchestrator.install_firmware(&install)?;
            Ok(ActionOutcome::refresh())
        }
        Action::DownloadKeys { path } => {
            let install = installation(registry, &path)?;
            orchestrator.install_keys(&install)?;
            Ok(ActionOutcome::refresh())
        }
        Action::DownloadShaders { path, title_id } => {
            let install = installation(registry, &path)?;
            orchestrator.install_shaders(&install, &title_id)?;
            Ok(ActionOutcome::refresh())
        }
        Action::DownloadMod {
            path,
            title_id,
            version,
            mod_name,
            mod_id,
        } => {
            let install = installation(registry, &path)?;
            orchestrator.install_mod(&install, &title_id, &version, &mod_name, &mod_id)?;
            Ok(ActionOutcome::refresh())
        }
        Action::DownloadSave {
            title_id,
            file_name,
            destination,
        } => {
            orchestrator.download_save(&title_id, &file_name, &destination)?;
            Ok(ActionOutcome::unchanged())
        }
        Action::DismissAlert => {
            let mut state = registry.ui_state.lock();
            state.alert_dismissed = true;
            if let Err(e) = registry.ui_location.save(&state) {
                warn!("Failed to persist dismissed alert: {e}");
            }
            Ok(ActionOutcome::unchanged())
        }
    }
}

/// Copies the record out so no store lock is held during downloads.
fn installation<B: StoreBackend, R: RemoteService>(
    registry: &AppRegistry<B, R>,
    path: &Utf8Path,
) -> Result<InstallationConfig, EmuError> {
    registry
        .store
        .lock()
        .get(path)
        .cloned()
        .ok_or_else(|| EmuError::InstallationNotFound(path.to_string()))
}

/// Rebuilds the page from the store and the remote, then returns what to draw.
/// The page lock is not held while the disk scan and network calls run.
#[instrument(skip(registry))]
pub fn refresh_page<B: StoreBackend, R: RemoteService>(
    registry: &AppRegistry<B, R>,
) -> PageSnapshot {
    let configs = registry.store.lock().list().to_vec();
    let (generation, layout) = {
        let mut page = registry.page.lock();
        (page.begin_loading(), page.layout().clone())
    };

    let listings = page::scan_all(&configs, &layout);
    let remote = page::fetch_remote(registry.orchestrator.remote());

    registry
        .page
        .lock()
        .apply(generation, &configs, listings, remote);
    page_snapshot(registry)
}

/// Current page without refetching anything. Rows are read from disk after the
/// page lock is released.
pub fn page_snapshot<B: StoreBackend, R: RemoteService>(registry: &AppRegistry<B, R>) -> PageSnapshot {
    let alert_dismissed = registry.ui_state.lock().alert_dismissed;
    let capture = registry.page.lock().capture();
    capture.render(alert_dismissed)
}

pub fn set_filter<B: StoreBackend, R: RemoteService>(
    registry: &AppRegistry<B, R>,
    path: &Utf8Path,
    filter: &str,
) -> PageSnapshot {
    registry.page.lock().set_filter(path, filter);
    page_snapshot(registry)
}
