use anyhow::Context as _;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct RefreshReport {
    breeds: usize,
}

/// Handle `felis refresh`: drop the cache and force a refetch.
///
/// Unlike the read path this surfaces the upstream error, since the user
/// explicitly asked for fresh data.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.catalog.clear_cache().await;
    let breeds = ctx
        .catalog
        .refresh()
        .await
        .context("failed to refresh the breed catalog")?;

    output(
        &RefreshReport {
            breeds: breeds.len(),
        },
        flags.format,
    )
}
