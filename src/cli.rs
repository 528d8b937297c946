//! Command line interface definition using clap.
//!
//! The binary previews what the widget emits for a given locale and static
//! asset layout without running a web server.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

/// Preview the UEditor widget's configuration, markup, and assets.
#[derive(Debug, Parser)]
#[command(name = "ueditor-widget", author, version, about, long_about = None)]
pub struct Cli {
    /// Active host locale (for example: pt-br, ar).
    ///
    /// Falls back to `UEDITOR_LOCALE`, then the system locale, then the
    /// configured `language_code`.
    #[arg(long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Force right-to-left (`true`) or left-to-right (`false`) text.
    #[arg(long, value_name = "BOOL")]
    pub bidi: Option<bool>,

    /// Directory searched for editor assets; may be repeated.
    #[arg(long = "static-root", value_name = "DIR")]
    pub static_roots: Vec<Utf8PathBuf>,

    /// Directory holding Hunspell `.dic` dictionaries.
    #[arg(long, value_name = "DIR")]
    pub dictionary_dir: Option<Utf8PathBuf>,

    /// Enable the spellchecker plugin.
    #[arg(long)]
    pub spellcheck: bool,

    /// Wire the host file browser into the editor.
    #[arg(long)]
    pub filebrowser: bool,

    /// Enable verbose diagnostic logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// What to print.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand, PartialEq, Eq, Clone)]
pub enum Commands {
    /// Print the resolved editor configuration as JSON.
    Config,

    /// Print the widget markup for one form field.
    Render {
        /// Form field name.
        #[arg(value_name = "NAME")]
        name: String,

        /// Current field value.
        #[arg(long, value_name = "TEXT")]
        value: Option<String>,

        /// DOM id of the editor element; defaults to the field name.
        #[arg(long, value_name = "ID")]
        id: Option<String>,

        /// Render the admin-site variant.
        #[arg(long)]
        admin: bool,
    },

    /// Print the script and stylesheet tags the widget needs.
    Media,
}
