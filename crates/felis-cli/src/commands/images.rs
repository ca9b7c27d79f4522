use crate::cli::GlobalFlags;
use crate::cli::root_commands::ImagesArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `felis images`.
///
/// An empty result means either an unknown breed or an unreachable image
/// service; the catalog absorbs the difference by design.
pub async fn handle(
    args: &ImagesArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let images = ctx.catalog.breed_images(&args.identifier, args.limit).await;
    output(&images, flags.format)
}
