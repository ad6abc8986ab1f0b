//! Command-line interface for bike-fit.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **search**: Find the best-fitting size of every bike for a stack/reach pair
//! - **catalog**: List, show, or export bikes from the catalog
//! - **favorites**: Manage the saved favorite bikes
//!
//! ## Usage
//!
//! ```text
//! # Find bikes for a 555mm stack / 395mm reach
//! bike-fit search --stack 555 --reach 395
//!
//! # Only the three closest, as JSON
//! bike-fit search --stack 555 --reach 395 -n 3 --format json
//!
//! # Browse the catalog without touching the network
//! bike-fit catalog list --offline
//!
//! # Save a favorite
//! bike-fit favorites add canyon-aeroad-cfr
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::catalog::remote::{CatalogClient, CatalogOrigin, LoadedCatalog, DEFAULT_CATALOG_URL};
use crate::catalog::store::BikeCatalog;

pub mod catalog;
pub mod favorites;
pub mod search;

#[derive(Parser)]
#[command(name = "bike-fit")]
#[command(version)]
#[command(about = "Find bikes whose frame geometry matches your stack and reach")]
#[command(
    long_about = "bike-fit helps you pick a bike model and size from your frame measurements.\n\nIt compares the stack and reach you enter against every size of every bike in the catalog and provides:\n- The closest size of each model, ranked by distance\n- A precise/approximate label based on a configurable tolerance\n- A saved list of favorite bikes"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the bikes that best fit a stack/reach pair
    Search(search::SearchArgs),

    /// Browse the bike catalog
    Catalog(catalog::CatalogArgs),

    /// Manage favorite bikes
    Favorites(favorites::FavoritesArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Where to get the catalog from
#[derive(Args, Clone, Debug)]
pub struct CatalogSourceArgs {
    /// Path to a catalog JSON file (skips the network)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// URL of the published catalog
    #[arg(
        long,
        env = "BIKE_FIT_CATALOG_URL",
        default_value = DEFAULT_CATALOG_URL
    )]
    pub catalog_url: String,

    /// Use the embedded catalog without fetching
    #[arg(long)]
    pub offline: bool,
}

impl CatalogSourceArgs {
    /// Resolve the catalog: file, embedded, or remote with embedded fallback.
    ///
    /// # Errors
    ///
    /// Returns an error if a catalog file was given and cannot be loaded, or the
    /// embedded catalog is unreadable.
    pub fn load(&self, verbose: bool) -> anyhow::Result<LoadedCatalog> {
        let loaded = if let Some(path) = &self.catalog {
            LoadedCatalog {
                catalog: BikeCatalog::load_from_file(path)?,
                origin: CatalogOrigin::File,
            }
        } else if self.offline {
            LoadedCatalog::fallback()?
        } else {
            let client = CatalogClient::new(&self.catalog_url);
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(client.fetch_or_fallback())?
        };

        if verbose {
            eprintln!(
                "Loaded {} bikes ({} catalog)",
                loaded.catalog.len(),
                loaded.origin
            );
        }

        Ok(loaded)
    }
}

/// Truncate to `max_chars` characters, marking the cut with "..."
pub(crate) fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Aeroad", 10), "Aeroad");
        assert_eq!(truncate("Specialized Tarmac SL8", 10), "Special...");
    }

    #[test]
    fn test_cli_parses_search() {
        let cli = Cli::try_parse_from([
            "bike-fit", "search", "--stack", "555", "--reach", "395", "--offline",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Search(_)));
    }
}
