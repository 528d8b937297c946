//! Fluent catalogues embedded in the crate.

use crate::language_code::language_subtag;
use ortho_config::{FluentLocalizer, LanguageIdentifier, LocalizationArgs, Localizer, NoOpLocalizer};
use std::sync::OnceLock;
use tracing::warn;

const ENGLISH_SOURCE: &str = include_str!("../../locales/en-US/messages.ftl");
const SPANISH_SOURCE: &str = include_str!("../../locales/es-ES/messages.ftl");

/// A message catalogue shipped with the widget.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Catalogue {
    /// `en-US`; used for every language without its own catalogue.
    #[default]
    English = 0,
    /// `es-ES`; English fills in untranslated ids.
    Spanish = 1,
}

impl Catalogue {
    /// Every shipped catalogue.
    pub const ALL: [Self; 2] = [Self::English, Self::Spanish];

    /// Catalogue for an editor (`es_ES`) or host (`es-es`) language code.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ueditor_widget::localization::Catalogue;
    ///
    /// assert_eq!(Catalogue::for_language("es_MX"), Catalogue::Spanish);
    /// assert_eq!(Catalogue::for_language("zh_CN"), Catalogue::English);
    /// ```
    #[must_use]
    pub fn for_language(code: &str) -> Self {
        match language_subtag(code).to_ascii_lowercase().as_str() {
            "es" => Self::Spanish,
            _ => Self::English,
        }
    }

    /// BCP 47 tag of the catalogue's locale.
    #[must_use]
    pub const fn locale_tag(self) -> &'static str {
        match self {
            Self::English => "en-US",
            Self::Spanish => "es-ES",
        }
    }

    /// The catalogue's Fluent source.
    #[must_use]
    pub const fn source(self) -> &'static str {
        match self {
            Self::English => ENGLISH_SOURCE,
            Self::Spanish => SPANISH_SOURCE,
        }
    }

    pub(super) const fn from_index(index: u8) -> Self {
        match index {
            1 => Self::Spanish,
            _ => Self::English,
        }
    }

    /// Built lazily, once per catalogue.
    pub(super) fn localizer(self) -> &'static dyn Localizer {
        static ENGLISH: OnceLock<Box<dyn Localizer>> = OnceLock::new();
        static SPANISH: OnceLock<Box<dyn Localizer>> = OnceLock::new();
        match self {
            Self::English => ENGLISH.get_or_init(|| load(Self::English)).as_ref(),
            Self::Spanish => SPANISH
                .get_or_init(|| {
                    Box::new(EnglishBacked {
                        preferred: load(Self::Spanish),
                    })
                })
                .as_ref(),
        }
    }
}

fn load(catalogue: Catalogue) -> Box<dyn Localizer> {
    let Ok(locale) = catalogue.locale_tag().parse::<LanguageIdentifier>() else {
        return Box::new(NoOpLocalizer);
    };
    match FluentLocalizer::builder(locale)
        .with_consumer_resources([catalogue.source()])
        .disable_defaults()
        .try_build()
    {
        Ok(localizer) => Box::new(localizer),
        Err(err) => {
            warn!(
                catalogue = catalogue.locale_tag(),
                error = ?err,
                "message catalogue failed to load"
            );
            Box::new(NoOpLocalizer)
        }
    }
}

struct EnglishBacked {
    preferred: Box<dyn Localizer>,
}

impl Localizer for EnglishBacked {
    fn lookup(&self, id: &str, args: Option<&LocalizationArgs<'_>>) -> Option<String> {
        self.preferred
            .lookup(id, args)
            .or_else(|| Catalogue::English.localizer().lookup(id, args))
    }
}
