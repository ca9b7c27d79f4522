use clap::Subcommand;
use felis_core::CoatType;

/// Breed catalog commands.
#[derive(Clone, Debug, Subcommand)]
pub enum BreedsCommands {
    /// List breeds, sorted by name.
    List {
        /// Filter by coat type (short, medium, long, hairless).
        #[arg(long)]
        coat: Option<CoatType>,
        /// Max breeds to show.
        #[arg(long)]
        limit: Option<usize>,
        /// Fetch one thumbnail URL per listed breed.
        #[arg(long)]
        thumbnails: bool,
    },
    /// Show one breed with care advice and trait scores.
    Show {
        /// Breed slug or upstream id.
        identifier: String,
    },
    /// Search breeds by name, temperament, or origin.
    Search { query: String },
}

/// Favorites commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FavoritesCommands {
    /// Add a breed to favorites.
    Add {
        /// Breed slug or upstream id.
        slug: String,
    },
    /// Remove a breed from favorites.
    Remove { slug: String },
    /// List favorite breeds.
    List,
}
