//! blog-remote-cli: remote blog administration from the command line.
//! Thin front end over the library's REST client; every command prints JSON.
#![deny(clippy::all, clippy::pedantic)]

mod args;
mod client;
mod handlers;
mod io;
mod print;


use blog_remote::{config, infra::telemetry};
use clap::Parser;

use args::{Cli, Commands};
use client::{CliError, Ctx};
use handlers::{publicize, settings, site};

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let settings = config::load(&cli.config)?;
    telemetry::init(&settings.logging)?;
    let ctx = Ctx::from_settings(&settings, cli.site_id)?;

    match cli.command {
        Commands::Site(cmd) => site::handle(&ctx, cmd.action).await?,
        Commands::Settings(cmd) => settings::handle(&ctx, cmd.action).await?,
        Commands::Publicize(cmd) => publicize::handle(&ctx, cmd.action).await?,
    }

    Ok(())
}
