use crate::config::STATUS_PAGE_URL;
use crate::core::dispatch;
use crate::core::registry::AppRegistry;
use crate::models::error::EmuError;
use crate::models::page::PageSnapshot;
use camino::Utf8PathBuf;
use tauri::{AppHandle, State};
use tauri_plugin_opener::OpenerExt;
use tracing::instrument;

#[tauri::command]
#[specta::specta]
pub async fn get_page(state: State<'_, AppRegistry>) -> Result<PageSnapshot, EmuError> {
    let registry = state.inner().clone();

    tauri::async_runtime::spawn_blocking(move || dispatch::page_snapshot(&registry))
        .await
        .map_err(|e| EmuError::AsyncRuntimeError(e.to_string()))
}

/// Scans every installation and refetches remote data. Slow when the remote is.
#[tauri::command]
#[specta::specta]
#[instrument(skip(state))]
pub async fn refresh_page(state: State<'_, AppRegistry>) -> Result<PageSnapshot, EmuError> {
    let registry = state.inner().clone();

    tauri::async_runtime::spawn_blocking(move || dispatch::refresh_page(&registry))
        .await
        .map_err(|e| EmuError::AsyncRuntimeError(e.to_string()))
}

#[tauri::command]
#[specta::specta]
pub async fn set_filter(
    state: State<'_, AppRegistry>,
    path: String,
    filter: String,
) -> Result<PageSnapshot, EmuError> {
    let registry = state.inner().clone();
    let path = Utf8PathBuf::from(path);

    tauri::async_runtime::spawn_blocking(move || dispatch::set_filter(&registry, &path, &filter))
        .await
        .map_err(|e| EmuError::AsyncRuntimeError(e.to_string()))
}

#[tauri::command]
#[specta::specta]
pub fn open_status_page(app_handle: AppHandle) -> Result<(), EmuError> {
    app_handle
        .opener()
        .open_url(STATUS_PAGE_URL, None::<&str>)
        .map_err(|e| EmuError::IOError(format!("Failed to open {STATUS_PAGE_URL}: {e}")))
}
