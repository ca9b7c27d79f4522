use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct HistoryEntry {
    slug: String,
    name: Option<String>,
}

/// Handle `felis history`: recently viewed breeds, most recent first.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut entries = Vec::with_capacity(ctx.store.history().len());
    for slug in ctx.store.history() {
        let name = ctx
            .catalog
            .breed(slug)
            .await
            .map(|breed| breed.display_name);
        entries.push(HistoryEntry {
            slug: slug.clone(),
            name,
        });
    }
    output(&entries, flags.format)
}
