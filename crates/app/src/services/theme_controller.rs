//! Theme controller — keeps the persisted preference, the document root
//! attribute, and the toggle control's icon in sync.

use std::rc::Rc;

use studsafe_domain::theme::Theme;

use crate::ports::{PageDocument, PageElement, PreferenceStore};

/// Where the theme lives in storage and in the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeOptions {
    /// Storage key holding `"light"` or `"dark"`.
    pub storage_key: String,
    /// Attribute set on the document root.
    pub attribute: String,
    /// `id` of the toggle control.
    pub toggle_id: String,
    /// Selector of the icon inside the toggle control.
    pub icon_selector: String,
    /// Attribute on the icon's container that carries the tooltip.
    pub title_attribute: String,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            storage_key: "studsafe-theme".to_string(),
            attribute: "data-theme".to_string(),
            toggle_id: "theme-toggle".to_string(),
            icon_selector: ".theme-toggle-icon".to_string(),
            title_attribute: "title".to_string(),
        }
    }
}

/// Application service for the light/dark theme.
///
/// Cheap to clone: the click handler owns its own copy.
#[derive(Clone)]
pub struct ThemeController<S, D> {
    options: Rc<ThemeOptions>,
    store: S,
    document: D,
}

impl<S, D> ThemeController<S, D>
where
    S: PreferenceStore + Clone + 'static,
    D: PageDocument,
{
    /// Create a controller over the given store and document.
    pub fn new(options: ThemeOptions, store: S, document: D) -> Self {
        Self {
            options: Rc::new(options),
            store,
            document,
        }
    }

    /// Resolve the persisted preference and apply it to the document root.
    ///
    /// Meant to run as soon as the script is evaluated, before the page
    /// renders. A storage failure resolves to the default theme.
    #[tracing::instrument(skip(self), fields(key = %self.options.storage_key))]
    pub fn initialize(&self) -> Theme {
        let stored = match self.store.load(&self.options.storage_key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read theme preference, using default");
                None
            }
        };
        let theme = Theme::from_stored(stored.as_deref());
        self.apply(theme);
        tracing::debug!(%theme, "theme initialised");
        theme
    }

    /// Theme currently reflected on the document root.
    #[must_use]
    pub fn current_theme(&self) -> Theme {
        let value = self
            .document
            .root_element()
            .and_then(|root| root.attribute(&self.options.attribute));
        Theme::from_stored(value.as_deref())
    }

    /// Find the toggle control, show `theme` on its icon, and wire clicks.
    ///
    /// Returns `false` when the page has no toggle control, which is a valid
    /// page layout rather than an error.
    #[tracing::instrument(skip(self))]
    pub fn bind_toggle(&self, theme: Theme) -> bool {
        let Some(toggle) = self.document.element_by_id(&self.options.toggle_id) else {
            tracing::debug!(id = %self.options.toggle_id, "no theme toggle on this page");
            return false;
        };
        let icon = toggle.query_selector(&self.options.icon_selector);
        if icon.is_none() {
            tracing::debug!(selector = %self.options.icon_selector, "theme toggle has no icon");
        }
        self.update_icon(icon.as_ref(), theme);

        let controller = self.clone();
        let handler = Box::new(move || {
            controller.toggle(icon.as_ref());
        });
        if let Err(err) = toggle.on_click(handler) {
            tracing::warn!(error = %err, "failed to attach theme toggle listener");
            return false;
        }
        true
    }

    /// Switch to the opposite of the theme on the document root, persist it,
    /// and refresh the icon. Returns the new theme.
    #[tracing::instrument(skip(self, icon))]
    pub fn toggle(&self, icon: Option<&D::Element>) -> Theme {
        let next = self.current_theme().toggled();
        self.apply(next);
        if let Err(err) = self.store.save(&self.options.storage_key, next.as_str()) {
            tracing::warn!(error = %err, "failed to persist theme preference");
        }
        self.update_icon(icon, next);
        tracing::debug!(theme = %next, "theme toggled");
        next
    }

    /// Show the action the toggle will perform while `theme` is active.
    pub fn update_icon(&self, icon: Option<&D::Element>, theme: Theme) {
        let Some(icon) = icon else {
            return;
        };
        let appearance = theme.appearance();
        icon.set_text_content(appearance.glyph);
        if let Some(container) = icon.parent_element() {
            if let Err(err) = container.set_attribute(&self.options.title_attribute, appearance.label)
            {
                tracing::warn!(error = %err, "failed to set theme toggle tooltip");
            }
        }
    }

    fn apply(&self, theme: Theme) {
        let Some(root) = self.document.root_element() else {
            tracing::debug!("document has no root element");
            return;
        };
        if let Err(err) = root.set_attribute(&self.options.attribute, theme.as_str()) {
            tracing::warn!(error = %err, %theme, "failed to set theme attribute");
        }
    }
}
