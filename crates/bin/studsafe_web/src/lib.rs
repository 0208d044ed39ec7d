//! # studsafe-web — page script
//!
//! Composition root that wires the browser adapters to the page behaviours.
//!
//! ## Responsibilities
//! - Read configuration from the page (`config`)
//! - Initialise logging to the browser console (`logging`)
//! - Construct the browser adapters (`localStorage`, DOM, `setTimeout`)
//! - Construct the theme controller and alert dismisser, injecting the adapters
//! - Apply the persisted theme immediately and defer the rest to DOM-ready
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no page logic belongs here.

pub mod config;
pub mod logging;

use studsafe_app::page;
use studsafe_app::ports::{PageDocument, PreferenceStore, TaskScheduler};
use studsafe_app::services::alert_dismisser::AlertDismisser;
use studsafe_app::services::theme_controller::ThemeController;
use studsafe_domain::theme::Theme;

pub use config::{Config, ConfigError};

/// Build both services from `config` and install them on `document`.
///
/// Returns the theme applied to the document root.
pub fn run<S, D, T>(config: &Config, store: S, document: D, scheduler: T) -> Theme
where
    S: PreferenceStore + Clone + 'static,
    D: PageDocument,
    T: TaskScheduler + Clone + 'static,
{
    let theme = ThemeController::new(config.theme_options(), store, document.clone());
    let alerts = AlertDismisser::new(config.alert_options(), document.clone(), scheduler);
    page::install(theme, alerts, &document)
}

#[cfg(target_arch = "wasm32")]
mod entry {
    use studsafe_adapter_web_sys::{LocalStorage, TimeoutScheduler, WebDocument};
    use studsafe_app::ports::PageDocument;
    use wasm_bindgen::prelude::*;

    use crate::config::{CONFIG_ELEMENT_ID, Config};
    use crate::logging::{self, MakeConsoleWriter};

    /// Runs when the module is instantiated; include the script in `<head>`
    /// so the theme lands before first paint.
    ///
    /// Configuration is read at this point, so the
    /// `<script type="application/json" id="studsafe-config">` element must
    /// come before the loader script. If it comes later it has not been
    /// parsed yet and the defaults apply.
    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();

        let document = match WebDocument::current() {
            Ok(document) => document,
            Err(err) => {
                web_sys::console::error_1(&JsValue::from_str(&err.to_string()));
                return;
            }
        };

        let config_present = document.element_by_id(CONFIG_ELEMENT_ID).is_some();
        let (config, config_error) = match Config::from_document(&document) {
            Ok(config) => (config, None),
            Err(err) => (Config::default(), Some(err)),
        };

        if let Err(err) = logging::init(&config.logging.filter, MakeConsoleWriter) {
            web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
        }
        if !config_present {
            tracing::debug!(id = CONFIG_ELEMENT_ID, "no config element found, using defaults");
        }
        if let Some(err) = config_error {
            tracing::warn!(error = %err, "invalid page configuration, using defaults");
        }

        let theme = crate::run(&config, LocalStorage, document, TimeoutScheduler);
        tracing::info!(%theme, "studsafe page script started");
    }
}
