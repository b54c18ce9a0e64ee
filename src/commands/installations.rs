use crate::core::dispatch;
use crate::core::probe::FsProbe;
use crate::core::registry::AppRegistry;
use crate::models::action::Action;
use crate::models::error::EmuError;
use crate::models::installation::InstallationConfig;
use camino::Utf8PathBuf;
use tauri::{AppHandle, State};
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};
use tracing::{info, instrument};

const PICK_NOTICE: &str = "You must pick a valid Ryujinx folder where \"Ryujinx.exe\" or \"Ryujinx\" \
(for linux users) is located. If you are using portable mode, you can add multiple Ryujinx \
instances by clicking this button again.";

const INVALID_FOLDER: &str = "Cannot find \"Ryujinx.exe\" or \"Ryujinx\" (on linux) in this folder, \
please retry with a valid Ryujinx directory.";

#[tauri::command]
#[specta::specta]
pub fn list_installations(state: State<'_, AppRegistry>) -> Vec<InstallationConfig> {
    let installations = state.store.lock().list().to_vec();
    installations
}

/// Shows the notice, lets the user pick a folder and registers it. Returns
/// `None` when the user cancels or the folder is not a Ryujinx install; the
/// latter is reported with an error dialog and leaves the store untouched.
#[tauri::command]
#[specta::specta]
#[instrument(skip(app_handle, state))]
pub async fn pick_installation_folder(
    app_handle: AppHandle,
    state: State<'_, AppRegistry>,
) -> Result<Option<InstallationConfig>, EmuError> {
    let registry = state.inner().clone();

    tauri::async_runtime::spawn_blocking(move || {
        let dialog = app_handle.dialog();
        dialog
            .message(PICK_NOTICE)
            .title("Notice")
            .kind(MessageDialogKind::Info)
            .blocking_show();

        let Some(picked) = dialog.file().blocking_pick_folder() else {
            info!("Folder selection cancelled");
            return Ok(None);
        };

        let path = picked
            .into_path()
            .map_err(|e| EmuError::IOError(e.to_string()))
            .and_then(|p| {
                Utf8PathBuf::from_path_buf(p)
                    .map_err(|p| EmuError::ParseError(format!("Invalid UTF-8 path: {p:?}")))
            })?;

        match dispatch::dispatch(&registry, Action::AddInstallation { path: path.clone() }) {
            Ok(_) => {
                let added = registry.store.lock().get(&FsProbe::normalize(&path)).cloned();
                Ok(added)
            }
            Err(EmuError::InvalidInstallation(_)) => {
                dialog
                    .message(INVALID_FOLDER)
                    .title("Error")
                    .kind(MessageDialogKind::Error)
                    .blocking_show();
                Ok(None)
            }
            Err(e) => Err(e),
        }
    })
    .await
    .map_err(|e| EmuError::AsyncRuntimeError(e.to_string()))?
}
