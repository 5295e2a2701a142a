//! Command-line interface.
//!
//! Drives the library against a real site: page loads and launches use a
//! file-backed store so the saved role persists between runs.

mod commands;
mod icons;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "ministax")]
#[command(about = "Static course site helpers: launches, redirects, and resource loading")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Storage file holding the saved role (overrides config)
    #[arg(long, global = true, env = "MINISTAX_STORAGE")]
    storage: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate loading a page: launch handling or saved-role redirect
    Visit {
        /// Full page URL, including any query string
        url: String,
    },

    /// Run only the launch handler for a launch URL
    Launch {
        /// Launch URL carrying user_role and context_id
        url: String,
    },

    /// Show the saved role and context
    Session,

    /// Load a chapter document and print it
    Chapter {
        /// Chapter id
        id: String,
        /// URL of the page doing the loading (http(s):// or file://)
        #[arg(short, long)]
        page: String,
    },

    /// Load assignment analytics and print them
    Analytics {
        /// Assignment id
        id: String,
        /// URL of the page doing the loading (http(s):// or file://)
        #[arg(short, long)]
        page: String,
    },

    /// HTML-escape text for display
    Escape {
        text: String,
    },

    /// Format a ratio as a percentage (value is read as JSON)
    Score {
        value: String,
    },

    /// Render a placeholder
    Placeholder {
        #[arg(value_enum)]
        kind: PlaceholderKind,
        /// Message to show (defaults depend on kind)
        message: Option<String>,
    },

    /// Show the effective configuration
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlaceholderKind {
    Loading,
    Error,
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => Config::load_from_path(path).await?,
        None => Config::load().await,
    };
    if let Some(storage) = cli.storage {
        config.storage_path = Some(storage);
    }

    match cli.command {
        Commands::Visit { url } => commands::launch::cmd_visit(&config, &url),
        Commands::Launch { url } => commands::launch::cmd_launch(&config, &url),
        Commands::Session => commands::launch::cmd_session(&config),
        Commands::Chapter { id, page } => {
            commands::load::cmd_load(&config, crate::loader::ResourceRef::chapter(id), &page).await
        }
        Commands::Analytics { id, page } => {
            commands::load::cmd_load(&config, crate::loader::ResourceRef::analytics(id), &page)
                .await
        }
        Commands::Escape { text } => commands::text::cmd_escape(&text),
        Commands::Score { value } => commands::text::cmd_score(&value),
        Commands::Placeholder { kind, message } => {
            commands::text::cmd_placeholder(kind, message.as_deref())
        }
        Commands::Config => commands::config_cmd::cmd_config_show(&config),
    }
}
