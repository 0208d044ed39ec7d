//! Alert timeline — the one-shot lifecycle of a transient alert banner.
//!
//! An alert stays untouched for [`AlertTimeline::visible_for`], then fades
//! and slides out over [`AlertTimeline::fade_for`], then leaves the document.
//! The two delayed steps are expressed as [`ScheduledTask`] records so the
//! application layer can hand them to a scheduler without owning any timing
//! arithmetic.

use std::time::Duration;

/// Default time an alert stays fully visible.
pub const DEFAULT_VISIBLE_FOR: Duration = Duration::from_millis(4000);
/// Default length of the exit animation.
pub const DEFAULT_FADE_FOR: Duration = Duration::from_millis(500);
/// Default horizontal slide distance during the exit animation.
pub const DEFAULT_SLIDE_OFFSET_PX: i32 = 30;

/// Lifecycle stage of a single alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertStage {
    Visible,
    Fading,
    Removed,
}

/// Which delayed step a [`ScheduledTask`] performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertAction {
    /// Apply the [`FadeStyle`] to start the exit animation.
    Fade,
    /// Detach the element from the document.
    Remove,
}

/// A delayed step. `delay` is measured from the moment the task is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTask {
    pub action: AlertAction,
    pub delay: Duration,
}

/// Inline style values applied when an alert starts fading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FadeStyle {
    pub transition: String,
    pub opacity: &'static str,
    pub transform: String,
}

impl FadeStyle {
    /// `(property, value)` pairs in the order they should be applied.
    ///
    /// `transition` comes first so the other two animate.
    #[must_use]
    pub fn properties(&self) -> [(&'static str, &str); 3] {
        [
            ("transition", self.transition.as_str()),
            ("opacity", self.opacity),
            ("transform", self.transform.as_str()),
        ]
    }
}

/// Timing of the alert auto-dismiss lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertTimeline {
    /// How long the alert stays untouched.
    pub visible_for: Duration,
    /// Length of the exit animation, after which the alert is removed.
    pub fade_for: Duration,
    /// Horizontal slide distance in CSS pixels.
    pub slide_offset_px: i32,
}

impl Default for AlertTimeline {
    fn default() -> Self {
        Self {
            visible_for: DEFAULT_VISIBLE_FOR,
            fade_for: DEFAULT_FADE_FOR,
            slide_offset_px: DEFAULT_SLIDE_OFFSET_PX,
        }
    }
}

impl AlertTimeline {
    /// Offset from DOM-ready at which the fade starts.
    #[must_use]
    pub fn fade_at(&self) -> Duration {
        self.visible_for
    }

    /// Offset from DOM-ready at which the alert is gone.
    #[must_use]
    pub fn removed_at(&self) -> Duration {
        self.visible_for + self.fade_for
    }

    /// Stage an alert is in `elapsed` after DOM-ready.
    #[must_use]
    pub fn stage_at(&self, elapsed: Duration) -> AlertStage {
        if elapsed >= self.removed_at() {
            AlertStage::Removed
        } else if elapsed >= self.fade_at() {
            AlertStage::Fading
        } else {
            AlertStage::Visible
        }
    }

    /// First step, scheduled at DOM-ready.
    #[must_use]
    pub fn fade_task(&self) -> ScheduledTask {
        ScheduledTask {
            action: AlertAction::Fade,
            delay: self.visible_for,
        }
    }

    /// Second step, scheduled when the fade step runs.
    #[must_use]
    pub fn remove_task(&self) -> ScheduledTask {
        ScheduledTask {
            action: AlertAction::Remove,
            delay: self.fade_for,
        }
    }

    /// Style applied by the fade step.
    #[must_use]
    pub fn fade_style(&self) -> FadeStyle {
        let ms = self.fade_for.as_millis();
        FadeStyle {
            transition: format!("opacity {ms}ms ease, transform {ms}ms ease"),
            opacity: "0",
            transform: format!("translateX({}px)", self.slide_offset_px),
        }
    }
}
