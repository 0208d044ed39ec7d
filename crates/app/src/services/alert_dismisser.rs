//! Alert dismisser — fades out and removes the alert banners present at
//! DOM-ready.

use studsafe_domain::alert::{AlertAction, AlertTimeline, ScheduledTask};

use crate::ports::{PageDocument, PageElement, TaskScheduler};

/// Which elements count as alerts and how long they live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertOptions {
    /// Selector matching alert banners.
    pub selector: String,
    /// Fade and removal timing.
    pub timeline: AlertTimeline,
    /// When `false`, alerts stay on the page.
    pub enabled: bool,
}

impl Default for AlertOptions {
    fn default() -> Self {
        Self {
            selector: ".alert".to_string(),
            timeline: AlertTimeline::default(),
            enabled: true,
        }
    }
}

/// Application service scheduling the exit of existing alerts.
pub struct AlertDismisser<D, T> {
    options: AlertOptions,
    document: D,
    scheduler: T,
}

impl<D, T> AlertDismisser<D, T>
where
    D: PageDocument,
    T: TaskScheduler + Clone + 'static,
{
    /// Create a dismisser over the given document and scheduler.
    pub fn new(options: AlertOptions, document: D, scheduler: T) -> Self {
        Self {
            options,
            document,
            scheduler,
        }
    }

    /// Schedule the fade and removal of every alert currently in the page.
    ///
    /// This is a one-shot scan: alerts added later are left alone. Returns the
    /// number of alerts scheduled.
    #[tracing::instrument(skip(self), fields(selector = %self.options.selector))]
    pub fn dismiss_existing(&self) -> usize {
        if !self.options.enabled {
            tracing::debug!("alert auto-dismiss disabled");
            return 0;
        }
        let alerts = self.document.query_selector_all(&self.options.selector);
        let count = alerts.len();
        let timeline = self.options.timeline;
        for alert in alerts {
            schedule_step(&self.scheduler, alert, timeline, timeline.fade_task());
        }
        tracing::debug!(count, "alerts scheduled for dismissal");
        count
    }
}

fn schedule_step<E, T>(scheduler: &T, alert: E, timeline: AlertTimeline, task: ScheduledTask)
where
    E: PageElement,
    T: TaskScheduler + Clone + 'static,
{
    let next_scheduler = scheduler.clone();
    scheduler.schedule(
        task.delay,
        Box::new(move || match task.action {
            AlertAction::Fade => {
                if fade_out(&alert, &timeline) {
                    schedule_step(&next_scheduler, alert, timeline, timeline.remove_task());
                }
            }
            AlertAction::Remove => alert.remove(),
        }),
    );
}

/// Start the exit animation. Returns `false` if the alert is already gone.
fn fade_out<E: PageElement>(alert: &E, timeline: &AlertTimeline) -> bool {
    if !alert.is_connected() {
        tracing::debug!("alert already detached, skipping fade");
        return false;
    }
    let style = timeline.fade_style();
    for (property, value) in style.properties() {
        if let Err(err) = alert.set_style_property(property, value) {
            tracing::warn!(error = %err, property, "failed to apply alert fade style");
        }
    }
    true
}
