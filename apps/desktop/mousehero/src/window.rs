use shell_core::lifecycle::WindowController;

use log::{debug, warn};
use tauri::{AppHandle, Manager, Runtime};

/// Label of the single application window declared in `tauri.conf.json`.
pub const MAIN_WINDOW_LABEL: &str = "main";

/// [`WindowController`] over the Tauri window registry.
pub struct TauriWindowController<'a, R: Runtime> {
    app: &'a AppHandle<R>,
}

impl<'a, R: Runtime> TauriWindowController<'a, R> {
    pub fn new(app: &'a AppHandle<R>) -> Self {
        Self { app }
    }
}

impl<R: Runtime> WindowController for TauriWindowController<'_, R> {
    fn focus_first_window(&self) -> bool {
        let window = self
            .app
            .get_webview_window(MAIN_WINDOW_LABEL)
            .or_else(|| self.app.webview_windows().into_values().next());

        let Some(window) = window else {
            debug!("No window to bring to the foreground");
            return false;
        };

        if let Err(e) = window.show() {
            warn!("Failed to show window {}: {e}", window.label());
            return false;
        }

        if let Err(e) = window.unminimize() {
            warn!("Failed to unminimize window {}: {e}", window.label());
        }

        if let Err(e) = window.set_focus() {
            warn!("Failed to focus window {}: {e}", window.label());
        }

        true
    }
}
