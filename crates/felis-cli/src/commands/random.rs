use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct RandomCat {
    url: String,
}

/// Handle `felis random`. URL construction only; nothing is fetched.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let url = ctx.catalog.random_cat_url();
    output(&RandomCat { url }, flags.format)
}
