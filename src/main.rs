//! Localized site server and tools.
//!
//! ```text
//!  Client ──▶ request id ─▶ trace ─▶ timeout ─▶ root redirect ─▶ locale gate ─▶ localization ─▶ pages
//!                                                    │                │
//!                                                    └──── 302 ◀──────┘
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use localized_site::config::{load_config, validate_config_or_error, SiteConfig};
use localized_site::lifecycle::{signals, startup, Shutdown};
use localized_site::observability::logging;
use localized_site::{CultureRewriter, SupportedLocales};

#[derive(Parser)]
#[command(name = "localized-site", version)]
#[command(about = "Localized web front-end with URL culture prefixes", long_about = None)]
struct Cli {
    /// Path to a TOML config file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address
    #[arg(short, long)]
    bind: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the site (default)
    Serve,
    /// Print PATH rewritten under LOCALE, as the language switcher would
    Rewrite { path: String, locale: String },
    /// Validate the configuration and print it as JSON
    CheckConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SiteConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
        validate_config_or_error(&config)?;
    }

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            logging::init_logging(&config.observability);
            tracing::info!(version = env!("CARGO_PKG_VERSION"), "localized-site starting");

            let shutdown = Shutdown::new();
            signals::spawn_signal_listener(shutdown.clone());
            startup::start(config, &shutdown).await?;

            tracing::info!("Shutdown complete");
        }
        Commands::Rewrite { path, locale } => {
            let locales = SupportedLocales::from_config(&config.localization)?;
            let rewriter = CultureRewriter::new(
                locales.into(),
                config.localization.home_route.trim().to_ascii_lowercase(),
            );
            println!("{}", rewriter.rewrite_raw(&path, &locale));
        }
        Commands::CheckConfig => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
