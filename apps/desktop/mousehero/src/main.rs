// Prevents additional console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use mousehero::commands;
use mousehero::error::MouseHeroError;
use mousehero::run_event::{RunEventAction, ShellRunEvent, dispatch_run_event};
use mousehero::state::AppState;
use mousehero::window::{MAIN_WINDOW_LABEL, TauriWindowController};

use shell_core::config::{ShellConfig, resolve_config_dir};
use shell_core::lifecycle::{LifecycleEvent, LifecycleReply};
use shell_core::logger::initialize as LoggerInitialize;

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::panic::Location;

use log::{debug, info, warn};
use tauri::{Manager, RunEvent, WindowEvent};

fn main() {
    let app = tauri::Builder::default()
        .invoke_handler(tauri::generate_handler![
            commands::launch_at_startup::launch_at_startup_is_enabled,
            commands::launch_at_startup::launch_at_startup_set_enabled,
            commands::launch_at_startup::launch_at_startup,
        ])
        .setup(|app| {
            let log_dir = app
                .path()
                .app_log_dir()
                .map_err(|e| MouseHeroError::MouseHero {
                    message: format!("Failed to get log directory: {e}"),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            create_dir_all(&log_dir).map_err(|e| MouseHeroError::MouseHero {
                message: format!("Failed to create log directory: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

            // Config decides the log level, so it is read before the logger exists
            let config_result = resolve_config_dir().and_then(|dir| ShellConfig::load(&dir));
            let config = config_result.as_ref().cloned().unwrap_or_default();

            LoggerInitialize(&log_dir, config.logging.level.to_level_filter()).map_err(|e| {
                MouseHeroError::MouseHero {
                    message: e.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

            info!("MouseHero shell starting");
            info!("Log directory: {}", log_dir.display());

            if let Err(e) = config_result {
                warn!("Using default config: {e}");
            }

            let state = AppState::for_current_user();

            let windows = TauriWindowController::new(app.handle());
            if let LifecycleReply::SupportsSecureRestorableState(supported) = state
                .lifecycle
                .handle(LifecycleEvent::SecureRestorableStateQuery, &windows)
            {
                debug!("Secure restorable state supported: {supported}");
            }

            app.manage(state);

            if !config.window.start_hidden
                && let Some(window) = app.get_webview_window(MAIN_WINDOW_LABEL)
            {
                window.show()?;
            }

            Ok(())
        })
        .on_window_event(|window, event| {
            // Closing the window only hides it; the app keeps running in the background
            if let WindowEvent::CloseRequested { api, .. } = event {
                api.prevent_close();
                if let Err(e) = window.hide() {
                    warn!("Failed to hide window {}: {e}", window.label());
                }
            }
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|app_handle, event| {
        let Some(state) = app_handle.try_state::<AppState>() else {
            return;
        };
        let windows = TauriWindowController::new(app_handle);

        match event {
            RunEvent::ExitRequested { code, api, .. } => {
                let action = dispatch_run_event(
                    &state.lifecycle,
                    ShellRunEvent::ExitRequested { code },
                    &windows,
                );
                if action == RunEventAction::PreventExit {
                    api.prevent_exit();
                }
            }
            RunEvent::Exit => {
                dispatch_run_event(&state.lifecycle, ShellRunEvent::Exit, &windows);
            }
            #[cfg(target_os = "macos")]
            RunEvent::Reopen {
                has_visible_windows,
                ..
            } => {
                dispatch_run_event(
                    &state.lifecycle,
                    ShellRunEvent::Reopen {
                        has_visible_windows,
                    },
                    &windows,
                );
            }
            _ => {}
        }
    });
}
