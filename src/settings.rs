//! Host settings consumed by the widget.
//!
//! Settings are layered with `figment`: built-in defaults first, then
//! `UEDITOR_*` environment variables (nested keys use `__`). Editor profile
//! keys under `UEDITOR_CONFIG__` keep their case. Hosts embedding
//! the widget may also build a [`Figment`] of their own and hand it to
//! [`WidgetSettings::from_figment`].

use crate::config::EditorConfig;
use crate::error::{Result, WidgetError};
use crate::localization::{Message, keys};
use crate::spellcheck::{DictionarySource, HunspellDirectory, LanguageEntry, StaticDictionaries};
use camino::Utf8PathBuf;
use ortho_config::figment::Figment;
use ortho_config::figment::providers::{Env, Serialized};
use serde::{Deserialize, Serialize};

/// Prefix of environment variables read by [`WidgetSettings::load`].
pub const ENV_PREFIX: &str = "UEDITOR_";

/// Prefix of environment variables holding editor profile options, for
/// example `UEDITOR_CONFIG__initialFrameHeight=500`.
pub const PROFILE_ENV_PREFIX: &str = "UEDITOR_CONFIG__";

const PROFILE_KEY_PREFIX: &str = "config__";

/// Widget configuration supplied by the host application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    /// Enable the spellchecker plugin.
    pub use_spellchecker: bool,
    /// Wire the host file browser into the editor.
    pub use_filebrowser: bool,
    /// Base editor profile applied to every widget.
    pub config: EditorConfig,
    /// URL of the editor script.
    pub js_url: String,
    /// URL of the editor's configuration script, loaded before `js_url`.
    pub config_url: String,
    /// Host language used when a request has no active language.
    pub language_code: String,
    /// Languages supported by the host, in menu order.
    pub languages: Vec<LanguageEntry>,
    /// Directories searched for editor assets.
    pub static_roots: Vec<Utf8PathBuf>,
    /// Directory holding Hunspell `.dic` files for the spellchecker.
    pub dictionary_dir: Option<Utf8PathBuf>,
    /// Fixed dictionary list used when no dictionary directory is set.
    pub dictionaries: Vec<String>,
    /// Emit extra diagnostics while building configuration.
    pub debug: bool,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            use_spellchecker: false,
            use_filebrowser: false,
            config: default_profile(),
            js_url: String::from("/static/UE/ueditor.all.min.js"),
            config_url: String::from("/static/UE/ueditor.config.js"),
            language_code: String::from("en-us"),
            languages: vec![LanguageEntry::new("en-us", "English")],
            static_roots: Vec::new(),
            dictionary_dir: None,
            dictionaries: Vec::new(),
            debug: false,
        }
    }
}

fn default_profile() -> EditorConfig {
    [
        ("initialFrameHeight", serde_json::Value::from(320)),
        ("zIndex", serde_json::Value::from(100)),
    ]
    .into_iter()
    .collect()
}

impl WidgetSettings {
    /// Defaults overlaid with `UEDITOR_*` environment variables.
    ///
    /// Editor profile options are camelCase, so `UEDITOR_CONFIG__*` keys are
    /// read by a separate provider that keeps their case.
    #[must_use]
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(settings_env())
            .merge(profile_env())
    }

    /// Load settings from defaults and the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Settings`] when a value cannot be deserialized.
    pub fn load() -> Result<Self> {
        Self::from_figment(&Self::figment())
    }

    /// Extract settings from a caller-provided figment.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Settings`] when a value cannot be deserialized.
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        figment
            .extract()
            .map_err(|source| WidgetError::Settings {
                message: Message::new(keys::SETTINGS_LOAD_FAILED),
                source: Box::new(source),
            })
    }

    /// Probe the configured spellchecking engine.
    ///
    /// A dictionary directory wins over a fixed list; with neither, the
    /// system enchant broker is used when the `enchant` feature is enabled.
    /// `Ok(None)` means no engine is available.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::DictionaryDirectory`] when the configured
    /// directory cannot be read.
    pub fn dictionary_source(&self) -> Result<Option<Box<dyn DictionarySource>>> {
        if let Some(dir) = &self.dictionary_dir {
            return Ok(Some(Box::new(HunspellDirectory::open(dir)?)));
        }
        if !self.dictionaries.is_empty() {
            return Ok(Some(Box::new(StaticDictionaries(self.dictionaries.clone()))));
        }
        Ok(system_dictionaries())
    }
}

fn settings_env() -> Env {
    Env::prefixed(ENV_PREFIX)
        .filter(|key| !key.starts_with(PROFILE_KEY_PREFIX))
        .split("__")
}

// `lowercase` must come last: every key adapter resets it.
fn profile_env() -> Env {
    Env::prefixed(PROFILE_ENV_PREFIX)
        .map(|key| format!("config.{}", key.as_str().replace("__", ".")).into())
        .lowercase(false)
}

#[cfg(feature = "enchant")]
fn system_dictionaries() -> Option<Box<dyn DictionarySource>> {
    Some(Box::new(crate::spellcheck::EnchantBroker))
}

#[cfg(not(feature = "enchant"))]
const fn system_dictionaries() -> Option<Box<dyn DictionarySource>> {
    None
}
