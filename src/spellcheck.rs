//! Spellchecker language selection.
//!
//! The editor's spellchecker plugin needs a default language and the list of
//! languages offered in its menu. Both are derived from the host's supported
//! languages, filtered by what the dictionary engine can actually check.
//! Languages without a dictionary are skipped with an error log line; a
//! missing engine is a configuration error.

use crate::error::{Result, WidgetError};
use crate::language_code::{convert_language_code, language_subtag};
use crate::localization::{Message, keys};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{error, info};

/// Config key holding the default spellchecker language.
pub const SPELLCHECKER_LANGUAGE_KEY: &str = "spellchecker_language";

/// Config key holding the `Name=code` list offered by the spellchecker.
pub const SPELLCHECKER_LANGUAGES_KEY: &str = "spellchecker_languages";

/// A language the host application supports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    /// Host language code, for example `pt-br`.
    pub code: String,
    /// Human-readable name shown in the spellchecker menu.
    pub name: String,
}

impl LanguageEntry {
    /// Create an entry from a host code and its display name.
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

impl From<(&str, &str)> for LanguageEntry {
    fn from((code, name): (&str, &str)) -> Self {
        Self::new(code, name)
    }
}

/// Availability check for spellchecker dictionaries.
pub trait DictionaryOracle {
    /// Return `true` when a dictionary exists for the editor `code`.
    fn has_dictionary(&self, code: &str) -> bool;
}

impl<F> DictionaryOracle for F
where
    F: Fn(&str) -> bool,
{
    fn has_dictionary(&self, code: &str) -> bool {
        self(code)
    }
}

/// A spellchecking engine that can report its installed dictionaries.
pub trait DictionarySource {
    /// Editor codes (`ll` or `ll_CC`) with an installed dictionary.
    fn languages(&self) -> Vec<String>;
}

/// Snapshot of an engine's dictionary list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DictionarySet {
    languages: BTreeSet<String>,
}

impl DictionarySet {
    /// Query `source` once and keep its answer.
    #[must_use]
    pub fn from_source(source: &dyn DictionarySource) -> Self {
        source.languages().into_iter().collect()
    }

    /// Iterate the known dictionary codes in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(String::as_str)
    }
}

impl FromIterator<String> for DictionarySet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            languages: iter.into_iter().collect(),
        }
    }
}

impl DictionaryOracle for DictionarySet {
    fn has_dictionary(&self, code: &str) -> bool {
        self.languages.contains(code)
    }
}

/// Fixed dictionary list, typically taken from settings.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StaticDictionaries(pub Vec<String>);

impl DictionarySource for StaticDictionaries {
    fn languages(&self) -> Vec<String> {
        self.0.clone()
    }
}

/// Hunspell dictionaries found as `<code>.dic` files in one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HunspellDirectory {
    path: Utf8PathBuf,
    languages: Vec<String>,
}

impl HunspellDirectory {
    /// Scan `path` for `.dic` files.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::DictionaryDirectory`] when the directory cannot
    /// be opened or listed.
    pub fn open(path: impl AsRef<Utf8Path>) -> Result<Self> {
        let dir_path = path.as_ref().to_owned();
        let languages = scan_dictionaries(&dir_path).map_err(|source| {
            WidgetError::DictionaryDirectory {
                message: Message::new(keys::SPELLCHECK_DICTIONARY_DIR_UNREADABLE)
                    .arg("path", dir_path.as_str()),
                path: dir_path.clone(),
                source,
            }
        })?;
        Ok(Self {
            path: dir_path,
            languages,
        })
    }

    /// Directory the dictionaries were read from.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl DictionarySource for HunspellDirectory {
    fn languages(&self) -> Vec<String> {
        self.languages.clone()
    }
}

fn scan_dictionaries(path: &Utf8Path) -> std::io::Result<Vec<String>> {
    let dir = Dir::open_ambient_dir(path, ambient_authority())?;
    let mut languages = Vec::new();
    for entry in dir.entries()? {
        let file_name = entry?.file_name()?;
        let name = Utf8Path::new(&file_name);
        if name.extension() != Some("dic") {
            continue;
        }
        if let Some(stem) = name.file_stem() {
            languages.push(stem.to_owned());
        }
    }
    languages.sort();
    Ok(languages)
}

/// Dictionaries reported by the system enchant broker.
#[cfg(feature = "enchant")]
#[derive(Debug, Default, Clone, Copy)]
pub struct EnchantBroker;

#[cfg(feature = "enchant")]
impl DictionarySource for EnchantBroker {
    fn languages(&self) -> Vec<String> {
        let mut broker = enchant::Broker::new();
        broker
            .list_dicts()
            .iter()
            .map(|dict| dict.lang.to_owned())
            .collect()
    }
}

/// A language offered by the spellchecker menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellcheckLanguage {
    /// Display name.
    pub name: String,
    /// Editor code with an installed dictionary.
    pub code: String,
}

/// Spellchecker settings for the editor.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SpellcheckConfig {
    languages: Vec<SpellcheckLanguage>,
}

impl SpellcheckConfig {
    /// The default language: the first language that survived filtering.
    #[must_use]
    pub fn default_language(&self) -> Option<&str> {
        self.languages.first().map(|lang| lang.code.as_str())
    }

    /// Languages offered by the spellchecker, in host order.
    #[must_use]
    pub fn languages(&self) -> &[SpellcheckLanguage] {
        &self.languages
    }

    /// The `Name=code` list joined by commas.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ueditor_widget::spellcheck::{build_spellcheck_config, LanguageEntry};
    ///
    /// let supported = [LanguageEntry::new("en-us", "English"), LanguageEntry::new("de", "German")];
    /// let config = build_spellcheck_config(&supported, &|code: &str| code == "en_US" || code == "de");
    /// assert_eq!(config.languages_value(), "English=en_US,German=de");
    /// ```
    #[must_use]
    pub fn languages_value(&self) -> String {
        self.languages
            .iter()
            .map(|lang| format!("{}={}", lang.name, lang.code))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Filter `supported` languages down to those with a dictionary.
///
/// Each host code is converted to editor form; when no dictionary matches,
/// the two-letter language subtag is tried before the language is dropped.
#[must_use]
pub fn build_spellcheck_config<O>(supported: &[LanguageEntry], oracle: &O) -> SpellcheckConfig
where
    O: DictionaryOracle + ?Sized,
{
    let languages = supported
        .iter()
        .filter_map(|entry| {
            dictionary_code(&entry.code, oracle).map(|code| SpellcheckLanguage {
                name: entry.name.clone(),
                code,
            })
        })
        .collect();
    SpellcheckConfig { languages }
}

fn dictionary_code<O>(host_code: &str, oracle: &O) -> Option<String>
where
    O: DictionaryOracle + ?Sized,
{
    let exact = convert_language_code(host_code);
    if oracle.has_dictionary(&exact) {
        return Some(exact);
    }
    let language = language_subtag(&exact);
    if oracle.has_dictionary(&language) {
        return Some(language);
    }
    error!(language = %language, "missing spellchecker dictionary");
    None
}

/// Snapshot the dictionary engine, failing when none was supplied.
///
/// When `log_languages` is set the engine's full list is logged at info
/// level.
///
/// # Errors
///
/// Returns [`WidgetError::SpellcheckerUnavailable`] when `source` is `None`.
pub fn require_dictionaries(
    source: Option<&dyn DictionarySource>,
    log_languages: bool,
) -> Result<DictionarySet> {
    let Some(engine) = source else {
        return Err(WidgetError::SpellcheckerUnavailable {
            message: Message::new(keys::SPELLCHECK_ENGINE_MISSING),
            help: Message::new(keys::SPELLCHECK_ENGINE_MISSING_HELP),
        });
    };
    let dictionaries = DictionarySet::from_source(engine);
    if log_languages {
        let listed: Vec<&str> = dictionaries.iter().collect();
        info!(languages = ?listed, "spellchecker dictionaries");
    }
    Ok(dictionaries)
}
