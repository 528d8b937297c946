//! Renders the widget markup and the editor initialization script.
//!
//! Templates are embedded at compile time and rendered with `MiniJinja`.
//! HTML templates auto-escape; values spliced into JavaScript are serialized
//! to JSON first and escaped so they cannot close the surrounding
//! `<script>` element.

use crate::assets::Media;
use crate::config::EditorConfig;
use crate::error::{Result, WidgetError};
use crate::localization::{Message, keys};
use crate::settings::WidgetSettings;
use indexmap::IndexMap;
use minijinja::{AutoEscape, Environment, Value, context};
use serde::Serialize;
use tracing::warn;

/// Template name of the initialization script.
pub const INIT_TEMPLATE: &str = "ueditor/init.js";

/// Template name of the widget markup.
pub const WIDGET_TEMPLATE: &str = "ueditor/widget.html";

/// Template name of the asset tags.
pub const MEDIA_TEMPLATE: &str = "ueditor/media.html";

const INIT_SOURCE: &str = include_str!("../templates/ueditor/init.js");
const WIDGET_SOURCE: &str = include_str!("../templates/ueditor/widget.html");
const MEDIA_SOURCE: &str = include_str!("../templates/ueditor/media.html");

/// Callback wired in when the host file browser is enabled.
pub const FILE_BROWSER_CALLBACK: (&str, &str) = ("file_browser_callback", "djangoFileBrowser");

/// Callback wired in when the spellchecker is enabled.
pub const SPELLCHECKER_CALLBACK: (&str, &str) = ("spellchecker_callback", "ueditor4_spellcheck");

/// Marker Django-style admin formsets put in ids of the empty template row.
pub const INLINE_PREFIX_MARKER: &str = "__prefix__";

/// Editor option name mapped to the JavaScript function handling it.
pub type Callbacks = IndexMap<String, String>;

/// Markup for one widget instance.
#[derive(Debug, Clone, Copy)]
pub struct WidgetMarkup<'a> {
    /// Form field name.
    pub name: &'a str,
    /// DOM id of the editor placeholder.
    pub element_id: &'a str,
    /// Current field value, unescaped.
    pub value: &'a str,
    /// Extra HTML attributes for the placeholder.
    pub attrs: &'a [(String, String)],
    /// Rendered initialization script.
    pub init_js: &'a str,
}

fn environment() -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|name| {
        if name.ends_with(".html") {
            AutoEscape::Html
        } else {
            AutoEscape::None
        }
    });
    env.add_template(INIT_TEMPLATE, INIT_SOURCE)
        .map_err(|source| render_error(INIT_TEMPLATE, source))?;
    env.add_template(WIDGET_TEMPLATE, WIDGET_SOURCE)
        .map_err(|source| render_error(WIDGET_TEMPLATE, source))?;
    env.add_template(MEDIA_TEMPLATE, MEDIA_SOURCE)
        .map_err(|source| render_error(MEDIA_TEMPLATE, source))?;
    Ok(env)
}

fn render_error(template: &str, source: minijinja::Error) -> WidgetError {
    WidgetError::Render {
        message: Message::new(keys::RENDER_TEMPLATE_FAILED).arg("template", template),
        source,
    }
}

fn render_template(template: &'static str, ctx: Value) -> Result<String> {
    let env = environment()?;
    env.get_template(template)
        .and_then(|tmpl| tmpl.render(ctx))
        .map_err(|source| render_error(template, source))
}

/// Serialize `value` as JSON that is safe inside an inline `<script>`.
///
/// `<`, `>` and `&` only occur inside JSON strings, so replacing them with
/// unicode escapes keeps the document valid JSON.
///
/// # Errors
///
/// Returns [`WidgetError::Serialize`] if serialization fails.
///
/// # Examples
///
/// ```rust
/// use ueditor_widget::render::script_json;
///
/// assert_eq!(script_json(&"</script>").unwrap(), r#""\u003c/script\u003e""#);
/// ```
pub fn script_json(value: &impl Serialize) -> Result<String> {
    let raw = serde_json::to_string(value).map_err(|source| WidgetError::Serialize {
        message: Message::new(keys::CONFIG_SERIALIZE_FAILED),
        source,
    })?;
    Ok(raw
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

fn is_js_reference(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with(|ch: char| ch.is_ascii_digit())
        && name
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '$' | '.'))
}

/// Render the editor initialization script.
///
/// Adds the file browser and spellchecker callbacks when enabled in
/// `settings` and not already supplied. A non-empty `id` narrows the
/// `selector` option to that element. Ids of admin inline template rows
/// defer initialization until the row is added to the page; the listener
/// then initializes only the editor whose id matches the template id with
/// the marker replaced by the new row's index.
///
/// # Errors
///
/// Returns [`WidgetError::Render`] or [`WidgetError::Serialize`] when the
/// script cannot be produced.
pub fn render_init_js(
    config: &EditorConfig,
    callbacks: &Callbacks,
    id: &str,
    settings: &WidgetSettings,
) -> Result<String> {
    let mut callbacks = callbacks.clone();
    if settings.use_filebrowser {
        let (option, function) = FILE_BROWSER_CALLBACK;
        callbacks
            .entry(option.to_owned())
            .or_insert_with(|| function.to_owned());
    }
    if settings.use_spellchecker {
        let (option, function) = SPELLCHECKER_CALLBACK;
        callbacks
            .entry(option.to_owned())
            .or_insert_with(|| function.to_owned());
    }

    let mut config = config.clone();
    if !id.is_empty() {
        let selector = config.get_str("selector").unwrap_or("textarea").to_owned();
        config.insert("selector", format!("{selector}#{id}"));
    }

    let mut wired = Vec::with_capacity(callbacks.len());
    for (option, function) in &callbacks {
        if !is_js_reference(function) {
            warn!(option = %option, callback = %function, "ignoring invalid callback reference");
            continue;
        }
        wired.push(Value::from(vec![
            Value::from_safe_string(script_json(option)?),
            Value::from_safe_string(function.clone()),
        ]));
    }

    render_template(
        INIT_TEMPLATE,
        context! {
            config => Value::from_safe_string(script_json(&config)?),
            callbacks => Value::from(wired),
            editor_id => Value::from_safe_string(script_json(&id)?),
            prefix_marker => Value::from_safe_string(script_json(&INLINE_PREFIX_MARKER)?),
            has_id => !id.is_empty(),
            is_admin_inline => id.contains(INLINE_PREFIX_MARKER),
        },
    )
}

/// Render the widget markup around an already rendered init script.
///
/// # Errors
///
/// Returns [`WidgetError::Render`] when the template fails.
pub fn render_widget(markup: &WidgetMarkup<'_>) -> Result<String> {
    render_template(
        WIDGET_TEMPLATE,
        context! {
            name => markup.name,
            element_id => markup.element_id,
            value => markup.value,
            attrs => markup.attrs,
            init_js => markup.init_js,
        },
    )
}

/// Render `<link>` tags for stylesheets followed by `<script>` tags, one
/// per line, with URLs HTML-escaped.
///
/// # Errors
///
/// Returns [`WidgetError::Render`] when the template fails.
pub fn render_media(media: &Media) -> Result<String> {
    let links: Vec<(&str, &str)> = media.stylesheets().collect();
    let rendered = render_template(
        MEDIA_TEMPLATE,
        context! {
            links => links,
            scripts => media.js(),
        },
    )?;
    Ok(rendered.trim_end().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_dotted_js_references() {
        assert!(is_js_reference("window.handlers.browse"));
        assert!(is_js_reference("$cb_1"));
        assert!(!is_js_reference("alert(1)"));
        assert!(!is_js_reference("1abc"));
        assert!(!is_js_reference(""));
    }
}
