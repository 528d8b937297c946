//! Fluent message identifiers used by the widget.
//!
//! Every id declared here must exist in both `locales/en-US/messages.ftl`
//! and `locales/es-ES/messages.ftl`; `tests/localization_tests.rs` checks
//! the catalogues stay aligned.

macro_rules! define_keys {
    ($($name:ident => $value:literal,)+) => {
        $(
            #[doc = concat!("Fluent message id `", $value, "`.")]
            pub const $name: &str = $value;
        )+

        /// Every declared message id, in declaration order.
        pub const ALL_KEYS: &[&str] = &[$($value),+];
    };
}

define_keys! {
    SPELLCHECK_ENGINE_MISSING => "spellcheck-engine-missing",
    SPELLCHECK_ENGINE_MISSING_HELP => "spellcheck-engine-missing-help",
    SPELLCHECK_DICTIONARY_DIR_UNREADABLE => "spellcheck-dictionary-dir-unreadable",
    SETTINGS_LOAD_FAILED => "settings-load-failed",
    RENDER_TEMPLATE_FAILED => "render-template-failed",
    CONFIG_SERIALIZE_FAILED => "config-serialize-failed",
}
