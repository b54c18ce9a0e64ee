#[cfg(feature = "desktop")]
pub mod commands;
pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod utils;

#[cfg(feature = "desktop")]
use crate::config::AppSettings;
#[cfg(feature = "desktop")]
use crate::core::registry::AppRegistry;
#[cfg(feature = "desktop")]
use specta_typescript::Typescript;
#[cfg(feature = "desktop")]
use tauri_specta::{collect_commands, Builder};

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let settings = AppSettings::load().unwrap_or_else(|e| {
        eprintln!("Falling back to default settings: {e}");
        AppSettings::default()
    });
    let _log_guard = logging::init(&AppSettings::log_dir());

    let registry = match AppRegistry::new(&settings) {
        Ok(registry) => registry,
        Err(e) => {
            tracing::error!("Failed to start: {e}");
            return;
        }
    };

    let builder = Builder::<tauri::Wry>::new().commands(collect_commands![
        commands::page::get_page,
        commands::page::refresh_page,
        commands::page::set_filter,
        commands::page::open_status_page,
        commands::installations::list_installations,
        commands::installations::pick_installation_folder,
        commands::actions::dispatch_action,
        commands::actions::pick_save_destination,
    ]);

    #[cfg(debug_assertions)] // <- Only export on non-release builds
    {
        if let Err(e) = builder.export(Typescript::default(), "ui/bindings.ts") {
            tracing::warn!("Failed to export typescript bindings: {e:?}");
        }
    }

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_opener::init())
        .manage(registry)
        .invoke_handler(builder.invoke_handler())
        .setup(move |app| {
            builder.mount_events(app);
            Ok(())
        })
        .run(tauri::generate_context!("tauri.conf.json"))
        .expect("error while running tauri application");
}
