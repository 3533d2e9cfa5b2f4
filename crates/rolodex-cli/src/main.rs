//! Rolodex binary.
//!
//! # Usage
//!
//! ```bash
//! # Interactive menu
//! rolodex
//!
//! # One-line menu, debug logs on stderr
//! rolodex --banner compact --log-level debug
//! ```

use std::io;

use clap::Parser;
use rolodex_cli::{BannerStyle, SessionConfig};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Rolodex contact directory
#[derive(Parser, Debug)]
#[command(name = "rolodex")]
#[command(about = "In-memory contact directory with a text menu")]
#[command(version)]
struct Args {
    /// Menu banner style
    #[arg(long, value_enum, default_value_t = BannerStyle::Boxed)]
    banner: BannerStyle,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    // stdout belongs to the menu
    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    tracing::info!("Rolodex starting");

    let config = SessionConfig { banner: args.banner };
    let session = rolodex_cli::run(io::stdin().lock(), io::stdout().lock(), &config)?;

    tracing::info!("Rolodex exiting with {} contacts", session.directory().len());

    Ok(())
}
