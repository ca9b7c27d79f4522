use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FavoritesCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct FavoriteChange {
    slug: String,
    changed: bool,
}

/// A stored favorite joined back to the catalog by slug.
///
/// `name` is absent when the breed no longer exists upstream; the entry
/// itself is kept, since the slug is the persistent reference.
#[derive(Serialize)]
struct FavoriteView {
    slug: String,
    name: Option<String>,
    added_at: DateTime<Utc>,
}

/// Handle `felis favorites`.
pub async fn handle(
    action: &FavoritesCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        FavoritesCommands::Add { slug } => add(slug, ctx, flags).await,
        FavoritesCommands::Remove { slug } => remove(slug, ctx, flags),
        FavoritesCommands::List => list(ctx, flags).await,
    }
}

async fn add(identifier: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    // Validate against the catalog and store the canonical slug, so an
    // upstream id given on the command line favorites the same breed.
    let Some(breed) = ctx.catalog.breed(identifier).await else {
        anyhow::bail!("no breed matches '{identifier}'");
    };

    let changed = ctx.store.add_favorite(&breed.slug)?;
    output(
        &FavoriteChange {
            slug: breed.slug,
            changed,
        },
        flags.format,
    )
}

fn remove(slug: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let changed = ctx.store.remove_favorite(slug)?;
    output(
        &FavoriteChange {
            slug: slug.to_string(),
            changed,
        },
        flags.format,
    )
}

async fn list(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut views = Vec::with_capacity(ctx.store.favorites().len());
    for item in ctx.store.favorites() {
        let name = ctx
            .catalog
            .breed(&item.slug)
            .await
            .map(|breed| breed.display_name);
        views.push(FavoriteView {
            slug: item.slug.clone(),
            name,
            added_at: item.added_at,
        });
    }
    output(&views, flags.format)
}
