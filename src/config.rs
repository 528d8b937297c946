//! Editor configuration synthesis.
//!
//! [`EditorConfig`] is the flat key/value object handed to the editor at
//! initialization. [`language_config`] derives the locale-dependent part of
//! it from the host's active locale, the installed translation bundles, and
//! (when enabled) the spellchecker dictionaries.

use crate::error::{Result, WidgetError};
use crate::locale_resolution::{HostLocale, TranslationOracle, resolve_language};
use crate::localization::{Message, keys};
use crate::settings::WidgetSettings;
use crate::spellcheck::{
    DictionarySource, SPELLCHECKER_LANGUAGE_KEY, SPELLCHECKER_LANGUAGES_KEY, SpellcheckConfig,
    build_spellcheck_config, require_dictionaries,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Config key holding the editor UI language.
pub const LANGUAGE_KEY: &str = "language";

/// Config key holding the text direction.
pub const DIRECTIONALITY_KEY: &str = "directionality";

/// Text direction of the editing area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right.
    Ltr,
    /// Right to left.
    Rtl,
}

impl Direction {
    /// Map the host bidi flag to a direction.
    #[must_use]
    pub const fn from_bidi(bidi: bool) -> Self {
        if bidi { Self::Rtl } else { Self::Ltr }
    }

    /// The value the editor expects for `directionality`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Insertion-ordered editor configuration object.
///
/// # Examples
///
/// ```rust
/// use ueditor_widget::config::EditorConfig;
///
/// let mut base = EditorConfig::new();
/// base.insert("language", "en");
/// base.insert("zIndex", 100);
///
/// let mut overrides = EditorConfig::new();
/// overrides.insert("language", "fr");
///
/// let merged = base.merged(&overrides);
/// assert_eq!(merged.get_str("language"), Some("fr"));
/// assert_eq!(merged.to_json().unwrap(), r#"{"language":"fr","zIndex":100}"#);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditorConfig(Map<String, Value>);

impl EditorConfig {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Set `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Look up a string value.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Return `true` when `key` is set.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` when no keys are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate keys and values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Copy every key of `other` into `self`; `other` wins on collisions.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Consume `self` and return it merged with `other`.
    #[must_use]
    pub fn merged(mut self, other: &Self) -> Self {
        self.merge(other);
        self
    }

    /// Serialize to compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Serialize`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.0).map_err(|source| WidgetError::Serialize {
            message: Message::new(keys::CONFIG_SERIALIZE_FAILED),
            source,
        })
    }

    /// Borrow the underlying JSON object.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for EditorConfig {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, V)> for EditorConfig
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut config = Self::new();
        for (key, value) in iter {
            config.insert(key, value);
        }
        config
    }
}

/// Assemble the locale part of the editor configuration.
///
/// Produces `language` and `directionality`, followed by the spellchecker
/// keys when `spellcheck` is supplied. `spellchecker_language` is omitted
/// when no language survived dictionary filtering.
///
/// # Examples
///
/// ```rust
/// use ueditor_widget::config::build_config;
///
/// let config = build_config("ar", true, None);
/// assert_eq!(config.get_str("directionality"), Some("rtl"));
/// ```
#[must_use]
pub fn build_config(
    language: &str,
    bidi: bool,
    spellcheck: Option<&SpellcheckConfig>,
) -> EditorConfig {
    let mut config = EditorConfig::new();
    config.insert(LANGUAGE_KEY, language);
    config.insert(DIRECTIONALITY_KEY, Direction::from_bidi(bidi).as_str());
    if let Some(spell) = spellcheck {
        if let Some(default) = spell.default_language() {
            config.insert(SPELLCHECKER_LANGUAGE_KEY, default);
        }
        config.insert(SPELLCHECKER_LANGUAGES_KEY, spell.languages_value());
    }
    config
}

/// Derive the locale configuration for the current request.
///
/// The host's active language is used, falling back to
/// `settings.language_code`. When `settings.use_spellchecker` is set the
/// dictionary engine is consulted once; its absence is fatal.
///
/// # Errors
///
/// Returns [`WidgetError::SpellcheckerUnavailable`] when spellchecking is
/// enabled and `dictionaries` is `None`.
pub fn language_config<T>(
    settings: &WidgetSettings,
    host: &dyn HostLocale,
    translations: &T,
    dictionaries: Option<&dyn DictionarySource>,
) -> Result<EditorConfig>
where
    T: TranslationOracle + ?Sized,
{
    let active = host
        .active_language()
        .unwrap_or_else(|| settings.language_code.clone());
    let language = resolve_language(&active, translations);
    let spellcheck = if settings.use_spellchecker {
        let available = require_dictionaries(dictionaries, settings.debug)?;
        Some(build_spellcheck_config(&settings.languages, &available))
    } else {
        None
    };
    Ok(build_config(&language, host.is_bidi(), spellcheck.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_round_trips_through_serde() {
        let json = serde_json::to_string(&Direction::Rtl).unwrap_or_default();
        assert_eq!(json, "\"rtl\"");
        assert_eq!(Direction::from_bidi(false).to_string(), "ltr");
    }

    #[test]
    fn from_iterator_keeps_order() {
        let config: EditorConfig = [("b", 1), ("a", 2)].into_iter().collect();
        let keys: Vec<&String> = config.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["b", "a"]);
    }
}
