//! Helpers for asserting on localized messages.
//!
//! The message catalogue is process-wide, so tests that select one, or that
//! assert on message text, hold [`lock_catalogue`] for their duration.

use std::error::Error;
use std::sync::{Mutex, MutexGuard, PoisonError};
use ueditor_widget::localization::{Catalogue, CatalogueGuard, scoped_catalogue};

static CATALOGUE_LOCK: Mutex<()> = Mutex::new(());

/// Serialize access to the active message catalogue.
pub fn lock_catalogue() -> MutexGuard<'static, ()> {
    CATALOGUE_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The catalogue lock held with a catalogue selected.
///
/// Dropping it restores the previous catalogue before releasing the lock.
#[derive(Debug)]
pub struct CatalogueScope {
    _catalogue: CatalogueGuard,
    _lock: MutexGuard<'static, ()>,
}

/// Render messages in the catalogue for the editor `language`.
#[must_use]
pub fn catalogue_for(language: &str) -> CatalogueScope {
    let lock = lock_catalogue();
    CatalogueScope {
        _catalogue: scoped_catalogue(Catalogue::for_language(language)),
        _lock: lock,
    }
}

/// Drop the bidi isolation marks Fluent wraps around placeables.
///
/// # Examples
///
/// ```rust
/// use test_support::messages::plain;
///
/// assert_eq!(plain("Failed to render \u{2068}a.html\u{2069}."), "Failed to render a.html.");
/// ```
#[must_use]
pub fn plain(text: &str) -> String {
    text.chars()
        .filter(|ch| !matches!(ch, '\u{2068}' | '\u{2069}'))
        .collect()
}

/// `err` and each of its sources in plain text, joined by `": "`.
#[must_use]
pub fn error_chain(err: &(dyn Error + 'static)) -> String {
    std::iter::successors(Some(err), |&current| current.source())
        .map(|link| plain(&link.to_string()))
        .collect::<Vec<_>>()
        .join(": ")
}
