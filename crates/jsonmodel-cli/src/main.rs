//! jsonmodel CLI - generate typed models from JSON via an external generator
//!
//! Commands:
//! - `jsonmodel generate` - Generate a typed model from a JSON or JSON Schema file
//! - `jsonmodel detect` - Print the detected source type for a file
//! - `jsonmodel languages` - List supported target languages
//! - `jsonmodel check` - Validate a jsonmodel.toml config

use std::path::Path;

use clap::{Parser, Subcommand};
use jsonmodel_core::{ModelGenError, SUPPORTED_LANGUAGES, SourceType};

mod collect;
mod config;
mod generate;
mod prompt;
mod runner;

#[derive(Parser)]
#[command(name = "jsonmodel")]
#[command(author, version, about = "Generate typed model files from JSON and JSON Schema", long_about = None)]
struct Cli {
    /// Log level for diagnostic output (overridden by RUST_LOG)
    #[arg(short = 'L', long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a typed model from a JSON or JSON Schema file
    Generate {
        /// Path to the input .json file
        file: String,

        /// Target language display name (e.g. Java, C#, TypeScript, Python)
        #[arg(short, long)]
        lang: Option<String>,

        /// Source kind: auto (detect and confirm), json, schema, graphql, or typescript
        #[arg(long, default_value = "auto")]
        src_lang: String,

        /// Path to the generator settings document
        #[arg(short, long)]
        settings: Option<String>,

        /// Path to jsonmodel.toml (default: ./jsonmodel.toml)
        #[arg(short, long)]
        config: Option<String>,

        /// Accept all defaults without prompting
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Print the detected source type for a file
    Detect {
        /// Path to a .json, .graphql/.gql, or .ts/.tsx file
        file: String,
    },

    /// List supported target languages
    Languages,

    /// Validate a jsonmodel.toml config
    Check {
        /// Path to jsonmodel.toml (default: ./jsonmodel.toml)
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level);

    match cli.command {
        Commands::Generate {
            file,
            lang,
            src_lang,
            settings,
            config,
            yes,
        } => {
            let args = generate::GenerateArgs {
                file,
                lang,
                src_lang,
                settings,
                config,
                yes,
            };
            match generate::run(args) {
                Err(err)
                    if matches!(
                        err.downcast_ref::<ModelGenError>(),
                        Some(ModelGenError::Cancelled)
                    ) =>
                {
                    eprintln!("Cancelled.");
                    Ok(())
                }
                other => other,
            }
        }
        Commands::Detect { file } => {
            let source_type = SourceType::from_path(Path::new(&file))?;
            println!("{source_type}");
            Ok(())
        }
        Commands::Languages => {
            for lang in SUPPORTED_LANGUAGES {
                println!(
                    "{:<12} {:<12} .{}",
                    lang.display_name, lang.generator_code, lang.file_extension
                );
            }
            Ok(())
        }
        Commands::Check { config } => config::check(config),
    }
}
