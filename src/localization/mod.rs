//! Localized error messages.
//!
//! Messages follow the language the editor is shown in: once the editor
//! language is resolved, [`use_editor_language`] selects the matching
//! [`Catalogue`]. The selection is process-wide and starts as English.

mod catalogue;
pub mod keys;

pub use catalogue::Catalogue;

use ortho_config::LocalizationArgs;
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use tracing::debug;

static ACTIVE: AtomicU8 = AtomicU8::new(Catalogue::English as u8);

/// The catalogue messages currently render with.
#[must_use]
pub fn active_catalogue() -> Catalogue {
    Catalogue::from_index(ACTIVE.load(Ordering::Acquire))
}

fn swap_catalogue(catalogue: Catalogue) -> Catalogue {
    Catalogue::from_index(ACTIVE.swap(catalogue as u8, Ordering::AcqRel))
}

/// Render messages from `catalogue`.
pub fn use_catalogue(catalogue: Catalogue) {
    swap_catalogue(catalogue);
}

/// Render messages in the catalogue matching an editor language code.
pub fn use_editor_language(language: &str) {
    let catalogue = Catalogue::for_language(language);
    debug!(language, ?catalogue, "selected message catalogue");
    use_catalogue(catalogue);
}

/// Restores the previous catalogue when dropped.
#[derive(Debug)]
#[must_use = "the previous catalogue is restored as soon as the guard drops"]
pub struct CatalogueGuard {
    previous: Catalogue,
}

impl Drop for CatalogueGuard {
    fn drop(&mut self) {
        use_catalogue(self.previous);
    }
}

/// Select `catalogue` until the returned guard drops.
pub fn scoped_catalogue(catalogue: Catalogue) -> CatalogueGuard {
    CatalogueGuard {
        previous: swap_catalogue(catalogue),
    }
}

/// A message id and its placeables, rendered with the active catalogue.
///
/// Unknown ids render as the id itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: &'static str,
    args: Vec<(&'static str, String)>,
}

impl Message {
    /// Message `id` with no placeables.
    #[must_use]
    pub const fn new(id: &'static str) -> Self {
        Self {
            id,
            args: Vec::new(),
        }
    }

    /// Fill the `$name` placeable.
    #[must_use]
    pub fn arg(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.args.push((name, value.into()));
        self
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args: Option<LocalizationArgs<'_>> = (!self.args.is_empty()).then(|| {
            self.args
                .iter()
                .map(|(name, value)| (*name, value.clone().into()))
                .collect()
        });
        let text = active_catalogue()
            .localizer()
            .message(self.id, args.as_ref(), self.id);
        f.write_str(&text)
    }
}
