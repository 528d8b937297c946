//! Locale resolution for the embedded editor.
//!
//! These helpers pick the editor translation bundle for the host
//! application's active locale and report the text direction. The bundle
//! lookup degrades from the exact locale to the bare language and finally to
//! English, so the resolved language is always one the editor can load.

use crate::language_code::{convert_language_code, language_subtag};
use ortho_config::LanguageIdentifier;
use std::str::FromStr;
use tracing::debug;

/// Environment variable name used to override the active locale.
pub const UEDITOR_LOCALE_ENV: &str = "UEDITOR_LOCALE";

/// Language used when no translation bundle matches the active locale.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Host languages written right-to-left.
const BIDI_LANGUAGES: &[&str] = &["ar", "ar-dz", "ckb", "fa", "he", "ug", "ur"];

/// Existence check for editor translation bundles.
///
/// Any `Fn(&str) -> bool` closure is an oracle, which keeps tests terse.
pub trait TranslationOracle {
    /// Return `true` when a translation bundle exists for the editor `code`.
    fn translation_exists(&self, code: &str) -> bool;
}

impl<F> TranslationOracle for F
where
    F: Fn(&str) -> bool,
{
    fn translation_exists(&self, code: &str) -> bool {
        self(code)
    }
}

/// Resolve the editor language for a host locale.
///
/// The host code is converted to editor form and checked against `oracle`.
/// When absent, the two-letter language subtag is tried; when that is also
/// absent, [`FALLBACK_LANGUAGE`] is returned.
///
/// # Examples
///
/// ```rust
/// use ueditor_widget::locale_resolution::resolve_language;
///
/// let only_french = |code: &str| code == "fr";
/// assert_eq!(resolve_language("fr-fr", &only_french), "fr");
/// assert_eq!(resolve_language("de-at", &only_french), "en");
/// ```
#[must_use]
pub fn resolve_language<O>(active_locale: &str, oracle: &O) -> String
where
    O: TranslationOracle + ?Sized,
{
    let exact = convert_language_code(active_locale);
    if oracle.translation_exists(&exact) {
        return exact;
    }
    let language = language_subtag(&exact);
    if oracle.translation_exists(&language) {
        debug!(locale = active_locale, language = %language, "using language-only translation");
        return language;
    }
    debug!(
        locale = active_locale,
        fallback = FALLBACK_LANGUAGE,
        "no editor translation found"
    );
    FALLBACK_LANGUAGE.to_owned()
}

/// Locale state reported by the host application for the current request.
pub trait HostLocale {
    /// The active language in host form (`ll-cc`), when one is set.
    fn active_language(&self) -> Option<String>;

    /// Return `true` when the active language is written right-to-left.
    fn is_bidi(&self) -> bool;
}

/// Request-scoped [`HostLocale`] value.
///
/// When no explicit direction is supplied, the direction follows the base
/// language of the active locale.
///
/// # Examples
///
/// ```rust
/// use ueditor_widget::locale_resolution::{HostLocale, RequestLocale};
///
/// assert!(RequestLocale::new("ar-dz").is_bidi());
/// assert!(!RequestLocale::new("en-gb").is_bidi());
/// assert!(RequestLocale::new("en-gb").with_bidi(true).is_bidi());
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RequestLocale {
    language: Option<String>,
    bidi: Option<bool>,
}

impl RequestLocale {
    /// Create a locale with `language` active.
    #[must_use]
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
            bidi: None,
        }
    }

    /// Create a locale with no active language.
    #[must_use]
    pub const fn unset() -> Self {
        Self {
            language: None,
            bidi: None,
        }
    }

    /// Force the text direction regardless of the active language.
    #[must_use]
    pub const fn with_bidi(mut self, bidi: bool) -> Self {
        self.bidi = Some(bidi);
        self
    }
}

impl HostLocale for RequestLocale {
    fn active_language(&self) -> Option<String> {
        self.language.clone()
    }

    fn is_bidi(&self) -> bool {
        self.bidi
            .unwrap_or_else(|| self.language.as_deref().is_some_and(is_bidi_language))
    }
}

/// Return `true` when the host `code` names a right-to-left language.
///
/// Region variants without their own entry inherit the base language.
#[must_use]
pub fn is_bidi_language(code: &str) -> bool {
    let lowered = code.to_ascii_lowercase();
    if BIDI_LANGUAGES.contains(&lowered.as_str()) {
        return true;
    }
    lowered
        .split('-')
        .next()
        .is_some_and(|base| BIDI_LANGUAGES.contains(&base))
}

/// Where the preview binary looks for a host locale when none is given.
pub trait LocaleProbe {
    /// Value of [`UEDITOR_LOCALE_ENV`], when set.
    fn env_locale(&self) -> Option<String>;

    /// The operating system's preferred locale, when known.
    fn system_locale(&self) -> Option<String>;
}

/// [`LocaleProbe`] backed by the process environment and `sys-locale`.
#[derive(Debug, Default, Copy, Clone)]
pub struct ProcessLocale;

impl LocaleProbe for ProcessLocale {
    fn env_locale(&self) -> Option<String> {
        std::env::var(UEDITOR_LOCALE_ENV).ok()
    }

    fn system_locale(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// Convert a POSIX or BCP 47 locale into a host language code.
///
/// Host codes carry only a language and an optional region (`ll` or
/// `ll-cc`), so encodings (`.UTF-8`), modifiers (`@euro`) and script
/// subtags are dropped. The POSIX `C` locale and unparseable values yield
/// `None`.
///
/// # Examples
///
/// ```rust
/// use ueditor_widget::locale_resolution::host_language_code;
///
/// assert_eq!(host_language_code("pt_BR.UTF-8"), Some("pt-br".to_owned()));
/// assert_eq!(host_language_code("sr-Latn-RS"), Some("sr-rs".to_owned()));
/// assert_eq!(host_language_code("POSIX"), None);
/// ```
#[must_use]
pub fn host_language_code(raw: &str) -> Option<String> {
    let tag = raw.trim().split(['.', '@']).next()?.trim();
    if tag.is_empty() || tag.eq_ignore_ascii_case("c") || tag.eq_ignore_ascii_case("posix") {
        return None;
    }
    let parsed = LanguageIdentifier::from_str(&tag.replace('_', "-")).ok()?;
    if parsed.language.is_empty() {
        return None;
    }
    let language = parsed.language.as_str().to_ascii_lowercase();
    Some(match parsed.region {
        Some(region) => format!("{language}-{}", region.as_str().to_ascii_lowercase()),
        None => language,
    })
}

/// Pick the host locale for a command-line preview.
///
/// The explicit `--locale` value wins, then `UEDITOR_LOCALE`, then the
/// system locale; candidates that are not locales are passed over. `None`
/// leaves the configured `language_code` in charge.
#[must_use]
pub fn resolve_active_locale(explicit: Option<&str>, probe: &impl LocaleProbe) -> Option<String> {
    explicit
        .and_then(host_language_code)
        .or_else(|| probe.env_locale().as_deref().and_then(host_language_code))
        .or_else(|| probe.system_locale().as_deref().and_then(host_language_code))
}
