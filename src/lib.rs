//! UEditor form widget for server-rendered Rust web applications.
//!
//! The crate resolves the editor's language and text direction from the
//! host locale, merges the host's editor profile with per-widget
//! amendments, renders the markup and initialization script for a form
//! field, and declares the static assets the editor needs.

pub mod assets;
pub mod cli;
pub mod config;
pub mod error;
pub mod language_code;
pub mod locale_resolution;
pub mod localization;
pub mod render;
pub mod runner;
pub mod settings;
pub mod spellcheck;
pub mod widget;

pub use config::{EditorConfig, build_config, language_config};
pub use error::WidgetError;
pub use widget::{AdminWidget, Widget};
