//! Page wiring — runs both behaviours against the page lifecycle.

use studsafe_domain::theme::Theme;

use crate::ports::{PageDocument, PreferenceStore, TaskScheduler};
use crate::services::alert_dismisser::AlertDismisser;
use crate::services::theme_controller::ThemeController;

/// Apply the persisted theme now, then register the DOM-ready handlers.
///
/// The theme is applied before returning so styling is correct on first
/// paint. Toggle binding and alert dismissal are registered as two separate
/// handlers; neither depends on the other. Returns the resolved theme.
pub fn install<S, D, T>(
    theme: ThemeController<S, D>,
    alerts: AlertDismisser<D, T>,
    document: &D,
) -> Theme
where
    S: PreferenceStore + Clone + 'static,
    D: PageDocument,
    T: TaskScheduler + Clone + 'static,
{
    let initial = theme.initialize();

    let bind = Box::new(move || {
        theme.bind_toggle(initial);
    });
    if let Err(err) = document.on_ready(bind) {
        tracing::warn!(error = %err, "failed to register theme toggle binding");
    }

    let dismiss = Box::new(move || {
        alerts.dismiss_existing();
    });
    if let Err(err) = document.on_ready(dismiss) {
        tracing::warn!(error = %err, "failed to register alert auto-dismiss");
    }

    initial
}
