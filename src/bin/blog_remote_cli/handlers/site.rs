#![deny(clippy::all, clippy::pedantic)]

use serde_json::json;

use crate::args::SiteCmd;
use crate::client::{CliError, Ctx};
use crate::print::print_json;

pub async fn handle(ctx: &Ctx, cmd: SiteCmd) -> Result<(), CliError> {
    match cmd {
        SiteCmd::MultiAuthor => multi_author(ctx).await,
        SiteCmd::Options => options(ctx).await,
        SiteCmd::PostFormats => post_formats(ctx).await,
    }
}

async fn multi_author(ctx: &Ctx) -> Result<(), CliError> {
    let blog = ctx.blog()?;
    let multi_author = ctx.remote.check_multi_author(&blog).await?;
    print_json(&json!({
        "site_id": blog.site_id,
        "multi_author": multi_author,
    }))
}

async fn options(ctx: &Ctx) -> Result<(), CliError> {
    let blog = ctx.blog()?;
    let options = ctx.remote.sync_options(&blog).await?;
    print_json(&options)
}

async fn post_formats(ctx: &Ctx) -> Result<(), CliError> {
    let blog = ctx.blog()?;
    let formats = ctx.remote.sync_post_formats(&blog).await?;
    print_json(&formats)
}
