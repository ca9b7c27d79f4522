use clap::{Args, Subcommand};

use crate::cli::subcommands::{BreedsCommands, FavoritesCommands};

/// Root commands for the `felis` binary.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Browse the breed catalog.
    Breeds {
        #[command(subcommand)]
        action: BreedsCommands,
    },
    /// Fetch photos for a breed.
    Images(ImagesArgs),
    /// Print a random cat image URL.
    Random,
    /// Drop the cached breed list and refetch it.
    Refresh,
    /// Manage favorite breeds.
    Favorites {
        #[command(subcommand)]
        action: FavoritesCommands,
    },
    /// Recently viewed breeds, most recent first.
    History,
}

#[derive(Clone, Debug, Args)]
pub struct ImagesArgs {
    /// Breed slug or upstream id.
    pub identifier: String,

    /// Maximum number of photos to fetch.
    #[arg(long, default_value_t = 6)]
    pub limit: usize,
}
