#![deny(clippy::all, clippy::pedantic)]

use blog_remote::domain::{RemoteBlogSettings, settings::split_keys};

use crate::args::{SettingsCmd, SettingsUpdateArgs};
use crate::client::{CliError, Ctx};
use crate::io::read_opt_value;
use crate::print::print_json;

pub async fn handle(ctx: &Ctx, cmd: SettingsCmd) -> Result<(), CliError> {
    match cmd {
        SettingsCmd::Get => get(ctx).await,
        SettingsCmd::Update(args) => update(ctx, *args).await,
    }
}

async fn get(ctx: &Ctx) -> Result<(), CliError> {
    let blog = ctx.blog()?;
    let settings = ctx.remote.sync_settings(&blog).await?;
    print_json(&settings)
}

async fn update(ctx: &Ctx, args: SettingsUpdateArgs) -> Result<(), CliError> {
    let blog = ctx.blog()?;
    let mut settings = ctx.remote.sync_settings(&blog).await?;
    apply_changes(&mut settings, args)?;

    let blog = blog.with_settings(settings);
    ctx.remote.update_settings(&blog).await?;
    print_json(&blog.settings)
}

/// Applies the requested changes; errors when nothing was requested.
pub fn apply_changes(
    settings: &mut RemoteBlogSettings,
    args: SettingsUpdateArgs,
) -> Result<(), CliError> {
    let SettingsUpdateArgs {
        name,
        tagline,
        privacy,
        default_category,
        default_post_format,
        comments_allowed,
        pingback_inbound,
        pingback_outbound,
        require_name_email,
        require_registration,
        close_comments_after_days,
        threading_depth,
        comments_page_size,
        comments_sort_order,
        manual_moderation,
        known_users_allowlisted,
        max_links,
        moderation_keys,
        moderation_keys_file,
        blocklist_keys,
        blocklist_keys_file,
        related_posts,
    } = args;

    let moderation_keys = read_opt_value(moderation_keys, moderation_keys_file)?;
    let blocklist_keys = read_opt_value(blocklist_keys, blocklist_keys_file)?;
    let before = settings.clone();

    set_if_some(&mut settings.name, name);
    set_if_some(&mut settings.tagline, tagline);
    set_if_some(&mut settings.privacy, privacy.map(Into::into));
    set_if_some(&mut settings.default_category_id, default_category);
    set_if_some(&mut settings.default_post_format, default_post_format);

    let discussion = &mut settings.discussion;
    set_if_some(&mut discussion.comments_allowed, comments_allowed);
    set_if_some(&mut discussion.pingback_inbound_enabled, pingback_inbound);
    set_if_some(&mut discussion.pingback_outbound_enabled, pingback_outbound);
    set_if_some(
        &mut discussion.comments_require_name_and_email,
        require_name_email,
    );
    set_if_some(
        &mut discussion.comments_require_registration,
        require_registration,
    );
    if let Some(days) = close_comments_after_days {
        discussion.comments_close_automatically = Some(days > 0);
        if days > 0 {
            discussion.comments_close_automatically_after_days = Some(days);
        }
    }
    if let Some(depth) = threading_depth {
        discussion.comments_threading_enabled = Some(depth > 0);
        if depth > 0 {
            discussion.comments_threading_depth = Some(depth);
        }
    }
    if let Some(size) = comments_page_size {
        discussion.comments_paging_enabled = Some(size > 0);
        if size > 0 {
            discussion.comments_page_size = Some(size);
        }
    }
    set_if_some(
        &mut discussion.comments_sort_order,
        comments_sort_order.map(Into::into),
    );
    set_if_some(
        &mut discussion.comments_require_manual_moderation,
        manual_moderation,
    );
    set_if_some(
        &mut discussion.comments_from_known_users_allowlisted,
        known_users_allowlisted,
    );
    set_if_some(&mut discussion.comments_max_links, max_links);
    set_if_some(
        &mut discussion.moderation_keys,
        moderation_keys.as_deref().map(split_keys),
    );
    set_if_some(
        &mut discussion.blocklist_keys,
        blocklist_keys.as_deref().map(split_keys),
    );
    set_if_some(&mut settings.related_posts.enabled, related_posts);

    if *settings == before {
        return Err(CliError::InvalidInput("no settings changes to push".into()));
    }
    Ok(())
}

fn set_if_some<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}
