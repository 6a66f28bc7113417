//! CLI administration tool for link-ingestor.
//!
//! Provides commands for generating the shared ingest secret, checking the
//! environment configuration, and converting exported JSON files to CSV
//! without running the HTTP service.
//!
//! # Usage
//!
//! ```bash
//! # Generate a new shared secret
//! cargo run --bin admin -- secret generate
//!
//! # Validate environment configuration
//! cargo run --bin admin -- config check
//!
//! # Convert an export file to CSV
//! cargo run --bin admin -- convert export.json --output links.csv
//! ```
//!
//! # Features
//!
//! - **Secret Generation**: Random alphanumeric value for `INGEST_SECRET`
//! - **Config Check**: Same validation the server runs at startup
//! - **Offline Conversion**: Export or canonical JSON to CSV
//! - **Interactive Prompts**: Overwrite confirmation via `dialoguer`
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use link_ingestor::config::{self, mask_secret};
use link_ingestor::domain::entities::{Submission, UploadDocument};
use link_ingestor::domain::normalizer::normalize;
use link_ingestor::utils::csv_export::encode_items;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::path::PathBuf;

/// CLI tool for managing link-ingestor.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage the shared ingest secret
    Secret {
        #[command(subcommand)]
        action: SecretAction,
    },

    /// Configuration operations
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Convert a JSON export file to CSV
    Convert {
        /// Export or canonical JSON file
        file: PathBuf,

        /// Write the CSV here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite the output file without asking
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Secret management subcommands.
#[derive(Subcommand)]
enum SecretAction {
    /// Generate a random secret
    Generate {
        /// Secret length in characters
        #[arg(short, long, default_value_t = 48)]
        length: usize,
    },
}

/// Configuration subcommands.
#[derive(Subcommand)]
enum ConfigAction {
    /// Load and validate configuration from the environment
    Check,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Secret {
            action: SecretAction::Generate { length },
        } => generate_secret_command(length)?,
        Commands::Config {
            action: ConfigAction::Check,
        } => check_config()?,
        Commands::Convert { file, output, yes } => convert(file, output, yes)?,
    }

    Ok(())
}

/// Prints a fresh secret and how to use it.
fn generate_secret_command(length: usize) -> Result<()> {
    if length < 16 {
        anyhow::bail!("Secret length must be at least 16 characters");
    }

    let secret = generate_secret(length);

    println!("{}", "🔑 New ingest secret".bright_blue().bold());
    println!();
    println!("  {}", secret.bright_yellow().bold());
    println!();
    println!("{}", "Server:".bright_white());
    println!("  {}={}", "INGEST_SECRET".bright_cyan(), secret);
    println!();
    println!("{}", "Producer requests:".bright_white());
    println!(
        "  curl -X POST -H \"{}: {}\" -H \"Content-Type: application/json\" -d @batch.json http://localhost:8080/ingest",
        "X-Ingest-Secret".bright_cyan(),
        secret.bright_yellow()
    );
    println!();

    Ok(())
}

/// Loads configuration the same way the server does and prints it.
fn check_config() -> Result<()> {
    println!("{}", "🔍 Checking configuration...".bright_blue());

    let config = config::load_from_env().context("Configuration is invalid")?;

    println!();
    println!("  Listen address:  {}", config.listen_addr.cyan());
    println!(
        "  Max ingests:     {}",
        config.max_ingests.to_string().bright_white()
    );
    match config.ingest_secret {
        Some(ref secret) => println!(
            "  Ingest secret:   {} {}",
            mask_secret(secret).bright_black(),
            "(enabled)".green()
        ),
        None => println!("  Ingest secret:   {}", "disabled".yellow()),
    }
    println!("  Behind proxy:    {}", config.behind_proxy);
    println!("  Rate limiting:   {}", config.rate_limit_enabled);
    println!("  Max upload size: {} bytes", config.max_upload_bytes);
    println!(
        "  Logging:         {} ({})",
        config.log_level, config.log_format
    );
    println!();
    println!("{}", "✅ Configuration OK".green().bold());

    Ok(())
}

/// Runs a file through the upload normalizer and writes its CSV.
fn convert(file: PathBuf, output: Option<PathBuf>, skip_confirm: bool) -> Result<()> {
    let bytes =
        std::fs::read(&file).with_context(|| format!("Failed to read {}", file.display()))?;

    let document = UploadDocument::parse(&bytes)
        .with_context(|| format!("{} is not a supported JSON file", file.display()))?;
    let batch = normalize(Submission::Upload(document))?;
    let csv = encode_items(&batch.items);

    let Some(path) = output else {
        print!("{csv}");
        return Ok(());
    };

    if path.exists() && !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("{} exists. Overwrite?", path.display()))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    std::fs::write(&path, csv).with_context(|| format!("Failed to write {}", path.display()))?;

    println!(
        "{} {} links ({}) written to {}",
        "✅".green(),
        batch.items.len().to_string().bright_white().bold(),
        batch.platform.cyan(),
        path.display()
    );

    Ok(())
}

/// Generates a random alphanumeric secret.
fn generate_secret(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
