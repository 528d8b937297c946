//! Fixed [`LocaleProbe`] answers for locale discovery tests.

use ueditor_widget::locale_resolution::LocaleProbe;

/// Locale probe returning preset environment and system values.
#[derive(Debug, Default, Clone)]
pub struct StubLocale {
    env: Option<String>,
    system: Option<String>,
}

impl StubLocale {
    /// Report `locale` as the value of `UEDITOR_LOCALE`.
    #[must_use]
    pub fn env(mut self, locale: &str) -> Self {
        self.env = Some(locale.to_owned());
        self
    }

    /// Report `locale` as the operating system locale.
    #[must_use]
    pub fn system(mut self, locale: &str) -> Self {
        self.system = Some(locale.to_owned());
        self
    }
}

impl LocaleProbe for StubLocale {
    fn env_locale(&self) -> Option<String> {
        self.env.clone()
    }

    fn system_locale(&self) -> Option<String> {
        self.system.clone()
    }
}
