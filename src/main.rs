//! bom-mapping: Maven BOM dependency tracker
//!
//! Snapshots the managed dependencies of published Maven BOMs and diffs
//! them across releases.

use anyhow::Result;
use bom_mapping::{cli, config};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bom-mapping")]
#[command(version)]
#[command(about = "Track the managed dependencies of Maven BOMs across releases", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success / no changes detected
    1  Changes detected, no matching BOM, or nothing extracted

EXAMPLES:
    # Snapshot every configured BOM and emit the site data tree
    bom-mapping generate

    # Refresh a single BOM, ignoring stored snapshots
    bom-mapping generate --bom spring-boot-dependencies --force

    # Diff two releases in CI
    bom-mapping compare org.springframework.boot:spring-boot-dependencies 3.2.0 3.3.0 -o summary

    # List known releases of an artifact
    bom-mapping versions com.fasterxml.jackson jackson-bom")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `generate` subcommand
#[derive(Parser)]
struct GenerateArgs {
    /// Only process the BOM with this artifactId or groupId:artifactId
    #[arg(short, long)]
    bom: Option<String>,

    /// Re-extract versions that already have a stored snapshot
    #[arg(short, long)]
    force: bool,

    /// Update snapshots without rewriting the site data tree
    #[arg(long)]
    skip_emit: bool,
}

/// Arguments for the `compare` subcommand
#[derive(Parser)]
struct CompareArgs {
    /// BOM to compare, as groupId:artifactId
    bom_key: String,

    /// Baseline version
    from: String,

    /// Target version
    to: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "diff")]
    output: cli::CompareFormat,
}

/// Arguments for the `versions` subcommand
#[derive(Parser)]
struct VersionsArgs {
    /// Maven groupId of the artifact
    group_id: String,

    /// Maven artifactId
    artifact_id: String,

    /// Repository name from the config, or a direct base URL
    #[arg(short, long)]
    repository: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Discover, snapshot, and emit data for every configured BOM
    Generate(GenerateArgs),

    /// Compare the managed artifacts of two stored BOM versions
    Compare(CompareArgs),

    /// List released versions of an artifact from repository metadata
    Versions(VersionsArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Dispatch to command handlers
    match cli.command {
        Commands::Generate(args) => {
            let config = config::load_or_default(cli.config.as_deref())?;
            let exit_code =
                cli::run_generate(&config, args.bom.as_deref(), args.force, args.skip_emit)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Compare(args) => {
            let config = config::load_or_default(cli.config.as_deref())?;
            let exit_code =
                cli::run_compare(&config, &args.bom_key, &args.from, &args.to, args.output)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Versions(args) => {
            let config = config::load_or_default(cli.config.as_deref())?;
            let exit_code = cli::run_versions(
                &config,
                &args.group_id,
                &args.artifact_id,
                args.repository.as_deref(),
            )?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "bom-mapping", &mut io::stdout());
            Ok(())
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }
    }
}
