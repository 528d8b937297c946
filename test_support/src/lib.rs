//! Shared helpers for the widget's integration tests.
//!
//! Provides scoped environment variables, locale stubs, message catalogue
//! scopes, temporary static roots, and log capture so test files stay
//! focused on behaviour.

pub mod env;
pub mod locale_stubs;
pub mod log_capture;
pub mod messages;
pub mod static_root;

pub use static_root::StaticRoot;
