#![deny(clippy::all, clippy::pedantic)]

use crate::args::PublicizeCmd;
use crate::client::{CliError, Ctx};
use crate::print::print_json;

pub async fn handle(ctx: &Ctx, cmd: PublicizeCmd) -> Result<(), CliError> {
    match cmd {
        PublicizeCmd::Connections => connections(ctx).await,
        PublicizeCmd::CheckAuth { service } => check_auth(ctx, &service).await,
        PublicizeCmd::Connect {
            service,
            keyring,
            account,
        } => connect(ctx, &service, keyring, account.as_deref()).await,
        PublicizeCmd::Disconnect {
            service,
            connection_id,
        } => disconnect(ctx, &service, connection_id).await,
    }
}

async fn connections(ctx: &Ctx) -> Result<(), CliError> {
    let blog = ctx.blog()?;
    let connections = ctx.remote.sync_connections(&blog).await?;
    print_json(&connections)
}

async fn check_auth(ctx: &Ctx, service: &str) -> Result<(), CliError> {
    let publicizer = ctx.publicizer(service)?;
    let authorization = ctx.remote.check_authorization(&publicizer).await?;
    print_json(&authorization)
}

async fn connect(
    ctx: &Ctx,
    service: &str,
    keyring: u64,
    account: Option<&str>,
) -> Result<(), CliError> {
    let publicizer = ctx.publicizer(service)?;
    ctx.remote
        .connect_publicizer(&publicizer, keyring, account)
        .await?;
    println!("connected");
    Ok(())
}

async fn disconnect(ctx: &Ctx, service: &str, connection_id: u64) -> Result<(), CliError> {
    let publicizer = ctx.publicizer(service)?.with_connection(connection_id);
    ctx.remote.disconnect_publicizer(&publicizer).await?;
    println!("disconnected");
    Ok(())
}
