//! Command dispatch for the preview binary.
//!
//! This module keeps `main` minimal: it layers CLI flags over the loaded
//! settings, gathers the locale collaborators, and writes the requested
//! output. Error messages follow the resolved editor language.

use crate::assets::StaticAssetFinder;
use crate::cli::{Cli, Commands};
use crate::locale_resolution::{
    HostLocale, ProcessLocale, RequestLocale, resolve_active_locale, resolve_language,
};
use crate::localization;
use crate::settings::WidgetSettings;
use crate::spellcheck::DictionarySource;
use crate::widget::{AdminWidget, Attrs, LocaleContext, Widget};
use anyhow::{Context, Result};
use std::io::Write;
use tracing::{debug, info};

/// Apply command-line overrides to loaded settings.
#[must_use]
pub fn apply_overrides(mut settings: WidgetSettings, cli: &Cli) -> WidgetSettings {
    settings.static_roots.extend(cli.static_roots.iter().cloned());
    if let Some(dir) = &cli.dictionary_dir {
        settings.dictionary_dir = Some(dir.clone());
    }
    settings.use_spellchecker |= cli.spellcheck;
    settings.use_filebrowser |= cli.filebrowser;
    settings.debug |= cli.verbose;
    settings
}

fn request_locale(cli: &Cli) -> RequestLocale {
    let active = resolve_active_locale(cli.locale.as_deref(), &ProcessLocale);
    let locale = active.map_or_else(RequestLocale::unset, RequestLocale::new);
    match cli.bidi {
        Some(bidi) => locale.with_bidi(bidi),
        None => locale,
    }
}

/// Execute the parsed command, writing its output to `out`.
///
/// # Errors
///
/// Returns an error when settings fail to load, the widget cannot be
/// configured or rendered, or `out` cannot be written.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let settings = apply_overrides(
        WidgetSettings::load().context("load widget settings")?,
        cli,
    );
    let host = request_locale(cli);
    debug!(?host, roots = settings.static_roots.len(), "resolved preview inputs");

    let translations = StaticAssetFinder::new(&settings.static_roots);
    let active = host
        .active_language()
        .unwrap_or_else(|| settings.language_code.clone());
    localization::use_editor_language(&resolve_language(&active, &translations));
    let dictionaries: Option<Box<dyn DictionarySource>> = if settings.use_spellchecker {
        settings
            .dictionary_source()
            .context("open spellchecker dictionaries")?
    } else {
        None
    };
    let locale = LocaleContext {
        host: &host,
        translations: &translations,
        dictionaries: dictionaries.as_deref(),
    };
    let widget = Widget::new(&settings);

    let output = match &cli.command {
        Commands::Config => widget
            .resolved_config(&locale)
            .context("resolve editor configuration")?
            .to_json()?,
        Commands::Render {
            name,
            value,
            id,
            admin,
        } => {
            let attrs: Option<Attrs> = id
                .as_ref()
                .map(|element_id| [("id".to_owned(), element_id.clone())].into_iter().collect());
            let rendered = if *admin {
                AdminWidget::new(widget).render(name, value.as_deref(), attrs.as_ref(), &locale)
            } else {
                widget.render(name, value.as_deref(), attrs.as_ref(), &locale)
            };
            rendered.with_context(|| format!("render widget for field '{name}'"))?
        }
        Commands::Media => widget.media().render()?,
    };
    info!(command = ?cli.command, bytes = output.len(), "preview rendered");
    writeln!(out, "{output}").context("write preview output")?;
    Ok(())
}
