//! Static asset lookup and media declarations for the editor widget.
//!
//! [`StaticAssetFinder`] answers whether a bundled editor asset is present
//! under any configured static root. [`Media`] collects the script and style
//! URLs a page must include before the widget can initialize.

use crate::error::Result;
use crate::locale_resolution::TranslationOracle;
use crate::render::render_media;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use indexmap::IndexMap;
use tracing::debug;

/// Directory under each static root holding the editor distribution.
pub const DEFAULT_ASSET_PREFIX: &str = "UE";

struct StaticRoot {
    path: Utf8PathBuf,
    dir: Dir,
}

/// Finds editor assets across an ordered list of static roots.
///
/// Roots are opened once on construction. Roots that cannot be opened are
/// skipped so lookups themselves never fail.
pub struct StaticAssetFinder {
    roots: Vec<StaticRoot>,
    prefix: Utf8PathBuf,
}

impl std::fmt::Debug for StaticAssetFinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticAssetFinder")
            .field(
                "roots",
                &self.roots.iter().map(|root| &root.path).collect::<Vec<_>>(),
            )
            .field("prefix", &self.prefix)
            .finish()
    }
}

impl StaticAssetFinder {
    /// Open each of `roots` using the default `UE` asset prefix.
    #[must_use]
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Utf8Path>,
    {
        Self::with_prefix(roots, DEFAULT_ASSET_PREFIX)
    }

    /// Open each of `roots`, resolving editor assets below `prefix`.
    #[must_use]
    pub fn with_prefix<I, P>(roots: I, prefix: impl Into<Utf8PathBuf>) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Utf8Path>,
    {
        let opened = roots
            .into_iter()
            .filter_map(|root| {
                let path = root.as_ref().to_owned();
                match Dir::open_ambient_dir(&path, ambient_authority()) {
                    Ok(dir) => Some(StaticRoot { path, dir }),
                    Err(err) => {
                        debug!(root = %path, error = %err, "skipping unreadable static root");
                        None
                    }
                }
            })
            .collect();
        Self {
            roots: opened,
            prefix: prefix.into(),
        }
    }

    /// Number of static roots that were opened successfully.
    #[must_use]
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// Relative path of the translation bundle for the editor `code`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ueditor_widget::assets::StaticAssetFinder;
    ///
    /// let finder = StaticAssetFinder::new(Vec::<&str>::new());
    /// assert_eq!(finder.translation_path("pt_BR"), "UE/lang/pt_BR/pt_BR.js");
    /// ```
    #[must_use]
    pub fn translation_path(&self, code: &str) -> Utf8PathBuf {
        self.prefix
            .join("lang")
            .join(code)
            .join(format!("{code}.js"))
    }

    /// Return the first absolute location of `relative` across the roots.
    #[must_use]
    pub fn find(&self, relative: impl AsRef<Utf8Path>) -> Option<Utf8PathBuf> {
        let relative_path = relative.as_ref();
        self.roots
            .iter()
            .find(|root| root.dir.is_file(relative_path))
            .map(|root| root.path.join(relative_path))
    }
}

impl TranslationOracle for StaticAssetFinder {
    fn translation_exists(&self, code: &str) -> bool {
        // Codes come from request locales; refuse anything that could walk
        // out of the language directory.
        if code.is_empty() || code.contains(['/', '\\', '.']) {
            return false;
        }
        self.find(self.translation_path(code)).is_some()
    }
}

/// Script and stylesheet URLs required by a widget.
///
/// Lists keep first-seen order and drop duplicates when merged.
///
/// # Examples
///
/// ```rust
/// use ueditor_widget::assets::Media;
///
/// let media = Media::with_js(["ueditor.config.js", "ueditor.all.min.js"]);
/// assert_eq!(
///     media.render()?,
///     "<script src=\"ueditor.config.js\"></script>\n<script src=\"ueditor.all.min.js\"></script>"
/// );
/// # Ok::<(), ueditor_widget::WidgetError>(())
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Media {
    js: Vec<String>,
    css: IndexMap<String, Vec<String>>,
}

impl Media {
    /// Create media declaring only scripts.
    #[must_use]
    pub fn with_js<I, S>(js: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut media = Self::default();
        for url in js {
            media.add_js(url);
        }
        media
    }

    /// Append a script URL unless already declared.
    pub fn add_js(&mut self, url: impl Into<String>) {
        push_unique(&mut self.js, url.into());
    }

    /// Append a stylesheet URL for `medium` unless already declared.
    pub fn add_css(&mut self, medium: impl Into<String>, url: impl Into<String>) {
        push_unique(self.css.entry(medium.into()).or_default(), url.into());
    }

    /// Declared script URLs in include order.
    #[must_use]
    pub fn js(&self) -> &[String] {
        &self.js
    }

    /// Declared stylesheet URLs for `medium`.
    #[must_use]
    pub fn css(&self, medium: &str) -> &[String] {
        self.css.get(medium).map_or(&[], Vec::as_slice)
    }

    /// Combine two declarations; entries from `other` follow ours.
    #[must_use]
    pub fn merge(mut self, other: &Self) -> Self {
        for url in &other.js {
            self.add_js(url.clone());
        }
        for (medium, urls) in &other.css {
            for url in urls {
                self.add_css(medium.clone(), url.clone());
            }
        }
        self
    }

    /// Stylesheets as `(medium, url)` pairs in declaration order.
    pub fn stylesheets(&self) -> impl Iterator<Item = (&str, &str)> {
        self.css
            .iter()
            .flat_map(|(medium, urls)| urls.iter().map(move |url| (medium.as_str(), url.as_str())))
    }

    /// Render stylesheet `<link>` tags followed by `<script>` tags.
    ///
    /// # Errors
    ///
    /// Returns [`crate::WidgetError::Render`] when the media template fails.
    pub fn render(&self) -> Result<String> {
        render_media(self)
    }
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_links_before_escaped_scripts() {
        let mut media = Media::with_js(["a.js?x=1&y=\"2\""]);
        media.add_css("screen", "/ue.css");
        assert_eq!(
            media.render().unwrap_or_default(),
            "<link href=\"&#x2f;ue.css\" media=\"screen\" rel=\"stylesheet\">\n\
             <script src=\"a.js?x=1&amp;y=&quot;2&quot;\"></script>"
        );
    }

    #[test]
    fn merge_appends_and_dedups() {
        let first = Media::with_js(["a.js", "b.js"]);
        let mut second = Media::with_js(["b.js", "c.js"]);
        second.add_css("all", "x.css");
        let merged = first.merge(&second);
        assert_eq!(merged.js(), ["a.js", "b.js", "c.js"]);
        assert_eq!(merged.css("all"), ["x.css"]);
        assert!(merged.css("print").is_empty());
    }
}
