use crate::core::dispatch;
use crate::core::registry::AppRegistry;
use crate::models::action::{Action, ActionOutcome};
use crate::models::error::EmuError;
use tauri::{AppHandle, State};
use tauri_plugin_dialog::DialogExt;
use tracing::{debug, info, instrument};

/// Single entry point for user actions. Downloads for different titles may run
/// side by side; each call resolves only once its files are written.
#[tauri::command]
#[specta::specta]
#[instrument(skip(state))]
pub async fn dispatch_action(
    state: State<'_, AppRegistry>,
    action: Action,
) -> Result<ActionOutcome, EmuError> {
    info!("Starting action");
    let registry = state.inner().clone();

    tauri::async_runtime::spawn_blocking(move || dispatch::dispatch(&registry, action))
        .await
        .map_err(|e| EmuError::AsyncRuntimeError(e.to_string()))?
}

/// Asks where to put a save file, then downloads it there.
#[tauri::command]
#[specta::specta]
#[instrument(skip(app_handle, state))]
pub async fn pick_save_destination(
    app_handle: AppHandle,
    state: State<'_, AppRegistry>,
    title_id: String,
    file_name: String,
) -> Result<Option<String>, EmuError> {
    let registry = state.inner().clone();

    tauri::async_runtime::spawn_blocking(move || {
        let Some(picked) = app_handle.dialog().file().blocking_pick_folder() else {
            debug!("Save destination selection cancelled");
            return Ok(None);
        };

        let destination = picked
            .into_path()
            .map_err(|e| EmuError::IOError(e.to_string()))
            .and_then(|p| {
                camino::Utf8PathBuf::from_path_buf(p)
                    .map_err(|p| EmuError::ParseError(format!("Invalid UTF-8 path: {p:?}")))
            })?;
        let target = destination.join(file_name.trim()).to_string();

        dispatch::dispatch(
            &registry,
            Action::DownloadSave {
                title_id,
                file_name,
                destination,
            },
        )?;
        Ok(Some(target))
    })
    .await
    .map_err(|e| EmuError::AsyncRuntimeError(e.to_string()))?
}
