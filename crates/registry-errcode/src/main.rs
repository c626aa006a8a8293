//! Registry Errcode - inspect the registry error vocabulary and envelopes

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;

use commands::RenderOptions;
use config::Config;

/// Registry Errcode - inspect registry error codes and error envelopes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config/errcode.toml")]
    config: String,

    /// Log level
    #[arg(long, env = "REGISTRY_ERRCODE_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every error code with its message
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve an error code string
    Parse {
        /// Code string as seen on the wire
        code: String,
    },

    /// Describe an error envelope read from a file or stdin
    Describe {
        /// Envelope file; stdin when omitted
        file: Option<PathBuf>,
    },

    /// Render a single-error envelope as JSON
    Render {
        /// Error code string
        code: String,

        /// Message overriding the code's default
        #[arg(long)]
        message: Option<String>,

        /// Detail as a JSON value
        #[arg(long)]
        detail: Option<String>,

        /// Digest of an unknown layer, attached as the detail
        #[arg(long, conflicts_with = "detail")]
        layer: Option<String>,
    },
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration
    let config = Config::load(&args.config)?;

    // Initialize logging
    let level = args.log_level.as_deref().unwrap_or(&config.logging.level);
    init_logging(level, &config.logging.format);
    info!("{}", Config::source(&args.config));

    debug!("Running {:?}", args.command);

    let out = match args.command {
        Command::List { json } => commands::list(json, &config.output)?,
        Command::Parse { code } => commands::parse(&code),
        Command::Describe { file } => commands::describe(&read_input(file)?)?,
        Command::Render {
            code,
            message,
            detail,
            layer,
        } => commands::render(
            &code,
            RenderOptions {
                message,
                detail,
                layer,
            },
            &config.output,
        )?,
    };

    print!("{}", out);
    Ok(())
}

/// Initialize logging on stderr
fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    if format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}

fn read_input(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read envelope file: {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read envelope from stdin")?;
            Ok(input)
        }
    }
}
