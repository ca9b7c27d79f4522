use serde::Serialize;

use felis_core::{Breed, CoatType};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::BreedsCommands;
use crate::context::AppContext;
use crate::output::output;

/// Row shape for catalog listings; the full record is reserved for `show`.
#[derive(Serialize)]
struct BreedRow {
    slug: String,
    name: String,
    origin: String,
    coat: CoatType,
    life_span: String,
    summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    thumbnail: Option<String>,
}

impl From<&Breed> for BreedRow {
    fn from(breed: &Breed) -> Self {
        Self {
            slug: breed.slug.clone(),
            name: breed.display_name.clone(),
            origin: breed.origin.clone(),
            coat: breed.coat,
            life_span: breed.life_span.clone(),
            summary: breed.summary.clone(),
            thumbnail: None,
        }
    }
}

/// Handle `felis breeds`.
pub async fn handle(
    action: &BreedsCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        BreedsCommands::List {
            coat,
            limit,
            thumbnails,
        } => list(*coat, *limit, *thumbnails, ctx, flags).await,
        BreedsCommands::Show { identifier } => show(identifier, ctx, flags).await,
        BreedsCommands::Search { query } => search(query, ctx, flags).await,
    }
}

async fn list(
    coat: Option<CoatType>,
    limit: Option<usize>,
    thumbnails: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut breeds: Vec<Breed> = match coat {
        Some(coat) => ctx.catalog.breeds_by_coat(coat).await,
        None => ctx.catalog.all_breeds().await.to_vec(),
    };
    if let Some(limit) = limit {
        breeds.truncate(limit);
    }

    let mut rows: Vec<BreedRow> = breeds.iter().map(BreedRow::from).collect();

    if thumbnails {
        let slugs: Vec<String> = rows.iter().map(|row| row.slug.clone()).collect();
        let mut urls = ctx.catalog.breed_thumbnails(&slugs).await;
        for row in &mut rows {
            row.thumbnail = urls.remove(&row.slug);
        }
    }

    output(&rows, flags.format)
}

async fn show(identifier: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(breed) = ctx.catalog.breed(identifier).await else {
        anyhow::bail!("no breed matches '{identifier}'");
    };

    ctx.store.record_view(&breed.slug)?;
    output(&breed, flags.format)
}

async fn search(query: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let matches = ctx.catalog.search(query).await;
    let rows: Vec<BreedRow> = matches.iter().map(BreedRow::from).collect();
    output(&rows, flags.format)
}
