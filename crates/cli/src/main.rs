//! EduSkills CLI - Database migrations, catalog seeding and price quotes.
//!
//! # Usage
//!
//! ```bash
//! # Run site database migrations
//! edu-cli migrate
//!
//! # Upsert catalog subjects from the bundled YAML file
//! edu-cli seed
//!
//! # Upsert catalog subjects from a custom file
//! edu-cli seed --file prices-2026.yaml
//!
//! # Show the prices for a package without touching the database
//! edu-cli quote --cost 1500 --package-size 10 --discount 10
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed` - Upsert catalog subjects from YAML
//! - `quote` - Print unit and package prices

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "edu-cli")]
#[command(author, version, about = "EduSkills CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Upsert catalog subjects from a YAML file
    Seed {
        /// Path to the YAML file
        #[arg(short, long, default_value = commands::seed::DEFAULT_SEED_FILE)]
        file: String,
    },
    /// Print unit and package prices for the given inputs
    Quote {
        /// Unit price in whole rubles
        #[arg(short, long)]
        cost: i64,

        /// Units per package
        #[arg(short, long, default_value_t = 10)]
        package_size: i64,

        /// Package discount in percent
        #[arg(short, long, allow_negative_numbers = true)]
        discount: Option<i32>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { file } => commands::seed::subjects(&file).await?,
        Commands::Quote {
            cost,
            package_size,
            discount,
        } => commands::quote::print(cost, package_size, discount),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_quote() {
        let cli = Cli::try_parse_from(["edu-cli", "quote", "--cost", "1500", "--discount", "10"])
            .unwrap_or_else(|e| panic!("valid arguments: {e}"));

        match cli.command {
            Commands::Quote {
                cost,
                package_size,
                discount,
            } => {
                assert_eq!(cost, 1500);
                assert_eq!(package_size, 10);
                assert_eq!(discount, Some(10));
            }
            _ => panic!("expected quote command"),
        }
    }

    #[test]
    fn test_seed_defaults_to_bundled_file() {
        let cli = Cli::try_parse_from(["edu-cli", "seed"])
            .unwrap_or_else(|e| panic!("valid arguments: {e}"));

        assert!(matches!(
            cli.command,
            Commands::Seed { ref file } if file == commands::seed::DEFAULT_SEED_FILE
        ));
    }
}
