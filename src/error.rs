//! Error types raised while configuring or rendering the widget.
//!
//! Missing translations and missing per-language dictionaries are not
//! errors; they degrade silently. Only misconfiguration and rendering
//! failures surface here.

// Scoped suppression for version-dependent lint false positives from
// miette/thiserror derive macros.
#![allow(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    unused_assignments
)]

use crate::localization::Message;
use camino::Utf8PathBuf;
use miette::Diagnostic;
use thiserror::Error;

/// Errors raised by the widget.
#[derive(Debug, Error, Diagnostic)]
pub enum WidgetError {
    /// Spellchecking was requested but no dictionary engine was supplied.
    #[error("{message}")]
    #[diagnostic(code(ueditor::spellcheck::engine_missing))]
    SpellcheckerUnavailable {
        /// Localised error message.
        message: Message,
        /// Localised hint naming the missing dependency.
        #[help]
        help: Message,
    },

    /// A Hunspell dictionary directory could not be listed.
    #[error("{message}")]
    #[diagnostic(code(ueditor::spellcheck::dictionary_dir))]
    DictionaryDirectory {
        /// Directory that failed to open.
        path: Utf8PathBuf,
        /// Localised error message.
        message: Message,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Layered settings failed to load or deserialize.
    #[error("{message}")]
    #[diagnostic(code(ueditor::settings))]
    Settings {
        /// Localised error message.
        message: Message,
        /// Underlying provider failure.
        #[source]
        source: Box<ortho_config::figment::Error>,
    },

    /// A widget template failed to render.
    #[error("{message}")]
    #[diagnostic(code(ueditor::render))]
    Render {
        /// Localised error message.
        message: Message,
        /// Underlying template failure.
        #[source]
        source: minijinja::Error,
    },

    /// The editor configuration could not be serialized to JSON.
    #[error("{message}")]
    #[diagnostic(code(ueditor::serialize))]
    Serialize {
        /// Localised error message.
        message: Message,
        /// Underlying serializer failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = WidgetError> = std::result::Result<T, E>;
