use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::catalog::print_bike_list;
use crate::cli::{CatalogSourceArgs, OutputFormat};
use crate::core::types::BikeId;
use crate::favorites::kv::JsonFileStore;
use crate::favorites::store::FavoritesStore;

#[derive(Args)]
pub struct FavoritesArgs {
    /// File the favorites are stored in
    #[arg(long, global = true, env = "BIKE_FIT_FAVORITES_FILE")]
    pub favorites_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: FavoritesCommands,
}

#[derive(Subcommand)]
pub enum FavoritesCommands {
    /// List favorite bikes that exist in the catalog
    List {
        #[command(flatten)]
        source: CatalogSourceArgs,
    },

    /// Add a bike to favorites
    Add {
        /// Bike ID
        #[arg(required = true)]
        id: String,
    },

    /// Remove a bike from favorites
    Remove {
        /// Bike ID
        #[arg(required = true)]
        id: String,
    },

    /// Add the bike if it is not a favorite, remove it if it is
    Toggle {
        /// Bike ID
        #[arg(required = true)]
        id: String,
    },
}

/// Default favorites location under the platform data directory
fn default_favorites_path() -> PathBuf {
    directories::ProjectDirs::from("com", "bike-fit", "bike-fit")
        .map(|d| d.data_dir().join("favorites.json"))
        .unwrap_or_else(|| PathBuf::from("favorites.json"))
}

/// Execute favorites subcommand
///
/// # Errors
///
/// Returns an error if the favorites cannot be written or the catalog cannot be
/// loaded for listing.
pub fn run(args: FavoritesArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let path = args.favorites_file.unwrap_or_else(default_favorites_path);
    if verbose {
        eprintln!("Using favorites file {}", path.display());
    }
    let mut favorites = FavoritesStore::load(JsonFileStore::open(path));

    match args.command {
        FavoritesCommands::List { source } => {
            let loaded = source.load(verbose)?;
            let bikes = favorites.favorite_bikes(&loaded.catalog);
            if verbose && bikes.len() < favorites.len() {
                eprintln!(
                    "{} favorite(s) not in the current catalog",
                    favorites.len() - bikes.len()
                );
            }
            print_bike_list(&bikes, "Favorites", format)?;
        }
        FavoritesCommands::Add { id } => {
            let id = BikeId::new(id);
            if favorites.add(&id)? {
                println!("Added {id} to favorites");
            } else {
                println!("{id} is already a favorite");
            }
        }
        FavoritesCommands::Remove { id } => {
            let id = BikeId::new(id);
            if favorites.remove(&id)? {
                println!("Removed {id} from favorites");
            } else {
                println!("{id} is not a favorite");
            }
        }
        FavoritesCommands::Toggle { id } => {
            let id = BikeId::new(id);
            if favorites.toggle(&id)? {
                println!("Added {id} to favorites");
            } else {
                println!("Removed {id} from favorites");
            }
        }
    }

    Ok(())
}
