//! Conversions between host-application and editor language codes.
//!
//! The host application names languages in lowercase hyphenated form
//! (`pt-br`), while the editor ships translation bundles and spellchecker
//! dictionaries keyed by underscore codes with an upper-cased region
//! (`pt_BR`).

/// Separator between language and region subtags in host codes.
const HOST_SEPARATOR: char = '-';

/// Separator between language and region subtags in editor codes.
const EDITOR_SEPARATOR: char = '_';

/// Number of characters kept when degrading a code to its language subtag.
const LANGUAGE_SUBTAG_LEN: usize = 2;

/// Convert a host language code (`ll-cc`) into editor form (`ll_CC`).
///
/// Codes without a region subtag are returned unchanged. Only the first two
/// hyphen-separated parts take part in the conversion.
///
/// # Examples
///
/// ```rust
/// use ueditor_widget::language_code::convert_language_code;
///
/// assert_eq!(convert_language_code("pt-br"), "pt_BR");
/// assert_eq!(convert_language_code("en"), "en");
/// ```
#[must_use]
pub fn convert_language_code(code: &str) -> String {
    let mut parts = code.split(HOST_SEPARATOR);
    let language = parts.next().unwrap_or_default();
    match parts.next() {
        Some(region) => format!("{language}{EDITOR_SEPARATOR}{}", region.to_uppercase()),
        None => language.to_owned(),
    }
}

/// Truncate a code to its leading two-character language subtag.
///
/// # Examples
///
/// ```rust
/// use ueditor_widget::language_code::language_subtag;
///
/// assert_eq!(language_subtag("de_AT"), "de");
/// assert_eq!(language_subtag("x"), "x");
/// ```
#[must_use]
pub fn language_subtag(code: &str) -> String {
    code.chars().take(LANGUAGE_SUBTAG_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("pt-br", "pt_BR")]
    #[case("zh-hans", "zh_HANS")]
    #[case("sr-latn-rs", "sr_LATN")]
    #[case("en", "en")]
    #[case("", "")]
    fn converts_host_codes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(convert_language_code(input), expected);
    }

    #[rstest]
    #[case("fr_FR", "fr")]
    #[case("fr", "fr")]
    #[case("", "")]
    #[case("éa_X", "éa")]
    fn truncates_to_language_subtag(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(language_subtag(input), expected);
    }
}
