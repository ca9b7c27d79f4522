use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::context::AppContext;

pub mod breeds;
pub mod favorites;
pub mod history;
pub mod images;
pub mod random;
pub mod refresh;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Breeds { action } => breeds::handle(&action, ctx, flags).await,
        Commands::Images(args) => images::handle(&args, ctx, flags).await,
        Commands::Random => random::handle(ctx, flags),
        Commands::Refresh => refresh::handle(ctx, flags).await,
        Commands::Favorites { action } => favorites::handle(&action, ctx, flags).await,
        Commands::History => history::handle(ctx, flags).await,
    }
}
