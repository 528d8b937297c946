//! The rich-text form widget.
//!
//! A [`Widget`] replaces a plain textarea with an editor placeholder, a
//! hidden textarea carrying the current value, and the script that
//! initializes the editor. [`AdminWidget`] wraps a widget with the admin
//! site's textarea styling.

use crate::assets::Media;
use crate::config::{EditorConfig, language_config};
use crate::error::Result;
use crate::locale_resolution::{HostLocale, TranslationOracle};
use crate::render::{Callbacks, WidgetMarkup, render_init_js, render_widget};
use crate::settings::WidgetSettings;
use crate::spellcheck::DictionarySource;
use indexmap::IndexMap;
use tracing::{debug, warn};

/// HTML attributes in render order.
pub type Attrs = IndexMap<String, String>;

/// CSS class the admin site gives large text areas.
pub const ADMIN_TEXTAREA_CLASS: &str = "vLargeTextField";

/// Attributes the widget template owns.
const RESERVED_ATTRS: &[&str] = &["id", "name", "type"];

/// Merge `extra` over `base`; keys in `extra` win.
///
/// # Examples
///
/// ```rust
/// use ueditor_widget::widget::{Attrs, build_attrs};
///
/// let base: Attrs = [("class".to_owned(), "a".to_owned())].into_iter().collect();
/// let extra: Attrs = [("class".to_owned(), "b".to_owned())].into_iter().collect();
/// assert_eq!(build_attrs(&base, Some(&extra))["class"], "b");
/// ```
#[must_use]
pub fn build_attrs(base: &Attrs, extra: Option<&Attrs>) -> Attrs {
    let mut attrs = base.clone();
    if let Some(overrides) = extra {
        for (key, value) in overrides {
            attrs.insert(key.clone(), value.clone());
        }
    }
    attrs
}

/// Attribute names the HTML tokenizer reads as a single name.
fn is_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().all(|ch| {
            !ch.is_whitespace()
                && !ch.is_control()
                && !matches!(ch, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

/// Request-time collaborators needed to localize the editor.
#[derive(Clone, Copy)]
pub struct LocaleContext<'a> {
    /// Active locale and direction of the request.
    pub host: &'a dyn HostLocale,
    /// Installed editor translations.
    pub translations: &'a dyn TranslationOracle,
    /// Spellchecking engine, when one is installed.
    pub dictionaries: Option<&'a dyn DictionarySource>,
}

/// Rich-text editor widget.
///
/// The profile *replaces* the base profile from settings; editor attributes
/// *amend* whichever profile is in effect.
#[derive(Debug, Clone)]
pub struct Widget {
    attrs: Attrs,
    editor_attrs: EditorConfig,
    profile: EditorConfig,
    callbacks: Callbacks,
    settings: WidgetSettings,
}

impl Widget {
    /// Create a widget using the base profile from `settings`.
    #[must_use]
    pub fn new(settings: &WidgetSettings) -> Self {
        Self {
            attrs: Attrs::new(),
            editor_attrs: EditorConfig::new(),
            profile: settings.config.clone(),
            callbacks: Callbacks::new(),
            settings: settings.clone(),
        }
    }

    /// Set the HTML attributes applied on every render.
    #[must_use]
    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = attrs;
        self
    }

    /// Amend the editor configuration.
    #[must_use]
    pub fn with_editor_attrs(mut self, editor_attrs: EditorConfig) -> Self {
        self.editor_attrs = editor_attrs;
        self
    }

    /// Replace the base profile.
    #[must_use]
    pub fn with_profile(mut self, profile: EditorConfig) -> Self {
        self.profile = profile;
        self
    }

    /// Wire editor options to named JavaScript callbacks.
    #[must_use]
    pub fn with_callbacks(mut self, callbacks: Callbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Attributes applied on every render.
    #[must_use]
    pub const fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    /// Profile and editor attributes merged, before localization.
    #[must_use]
    pub fn editor_config(&self) -> EditorConfig {
        self.profile.clone().merged(&self.editor_attrs)
    }

    /// Full editor configuration for one request.
    ///
    /// The profile comes first, then the locale keys, then the editor
    /// attributes, so explicit amendments always win.
    ///
    /// # Errors
    ///
    /// Propagates [`language_config`] failures.
    pub fn resolved_config(&self, locale: &LocaleContext<'_>) -> Result<EditorConfig> {
        let localized = language_config(
            &self.settings,
            locale.host,
            locale.translations,
            locale.dictionaries,
        )?;
        Ok(self
            .profile
            .clone()
            .merged(&localized)
            .merged(&self.editor_attrs))
    }

    /// Render the widget for field `name`.
    ///
    /// A missing value renders as an empty editor. The element id comes from
    /// the `id` attribute when present, otherwise from `name`.
    ///
    /// # Errors
    ///
    /// Returns an error when configuration or template rendering fails.
    pub fn render(
        &self,
        name: &str,
        value: Option<&str>,
        attrs: Option<&Attrs>,
        locale: &LocaleContext<'_>,
    ) -> Result<String> {
        let final_attrs = build_attrs(&self.attrs, attrs);
        let element_id = final_attrs.get("id").map_or(name, String::as_str);
        let config = self.resolved_config(locale)?;
        debug!(name, element_id, keys = config.len(), "rendering editor widget");
        let init_js = render_init_js(&config, &self.callbacks, element_id, &self.settings)?;
        let mut extra = Vec::with_capacity(final_attrs.len());
        for (key, val) in &final_attrs {
            if RESERVED_ATTRS.contains(&key.as_str()) {
                continue;
            }
            if !is_attribute_name(key) {
                warn!(attribute = %key, "ignoring invalid HTML attribute name");
                continue;
            }
            extra.push((key.clone(), val.clone()));
        }
        render_widget(&WidgetMarkup {
            name,
            element_id,
            value: value.unwrap_or_default(),
            attrs: &extra,
            init_js: &init_js,
        })
    }

    /// Scripts the page must load before the widget initializes.
    #[must_use]
    pub fn media(&self) -> Media {
        Media::with_js([
            self.settings.config_url.clone(),
            self.settings.js_url.clone(),
        ])
    }
}

/// A [`Widget`] styled for the admin site.
#[derive(Debug, Clone)]
pub struct AdminWidget {
    inner: Widget,
}

impl AdminWidget {
    /// Wrap `widget`, defaulting its class to [`ADMIN_TEXTAREA_CLASS`].
    ///
    /// An explicit `class` attribute on `widget` is kept.
    #[must_use]
    pub fn new(widget: Widget) -> Self {
        let admin: Attrs = [("class".to_owned(), ADMIN_TEXTAREA_CLASS.to_owned())]
            .into_iter()
            .collect();
        let attrs = build_attrs(&admin, Some(widget.attrs()));
        Self {
            inner: widget.with_attrs(attrs),
        }
    }

    /// The wrapped widget.
    #[must_use]
    pub const fn widget(&self) -> &Widget {
        &self.inner
    }

    /// Render via the wrapped widget.
    ///
    /// # Errors
    ///
    /// See [`Widget::render`].
    pub fn render(
        &self,
        name: &str,
        value: Option<&str>,
        attrs: Option<&Attrs>,
        locale: &LocaleContext<'_>,
    ) -> Result<String> {
        self.inner.render(name, value, attrs, locale)
    }

    /// Media of the wrapped widget.
    #[must_use]
    pub fn media(&self) -> Media {
        self.inner.media()
    }
}
