//! Command-line surface for `blog-remote-cli`.

#![deny(clippy::all, clippy::pedantic)]

use std::fmt;
use std::path::PathBuf;

use blog_remote::config::ConfigOverrides;
use blog_remote::domain::{BlogPrivacy, CommentSortOrder};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "blog-remote-cli", version, about = "Remote blog administration CLI", long_about = None)]
pub struct Cli {
    /// Remote site ID the command operates on
    #[arg(long, env = "BLOG_REMOTE_SITE_ID", global = true)]
    pub site_id: Option<u64>,

    #[command(flatten)]
    pub config: ConfigOverrides,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Site capabilities and options
    Site(SiteArgs),
    /// Blog settings
    Settings(SettingsArgs),
    /// Publicize (third-party sharing) connections
    Publicize(PublicizeArgs),
}

#[derive(Parser, Debug)]
pub struct SiteArgs {
    #[command(subcommand)]
    pub action: SiteCmd,
}

#[derive(Subcommand, Debug)]
pub enum SiteCmd {
    /// Report whether the blog has more than one author
    MultiAuthor,
    /// Fetch blog options
    Options,
    /// Fetch supported post formats
    PostFormats,
}

#[derive(Parser, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub action: SettingsCmd,
}

#[derive(Subcommand, Debug)]
pub enum SettingsCmd {
    /// Fetch current settings
    Get,
    /// Fetch settings, apply the given changes and push them back
    Update(Box<SettingsUpdateArgs>),
}

#[derive(Parser, Debug, Default)]
pub struct SettingsUpdateArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub tagline: Option<String>,
    #[arg(long)]
    pub privacy: Option<PrivacyArg>,
    #[arg(long)]
    pub default_category: Option<u64>,
    #[arg(long)]
    pub default_post_format: Option<String>,
    #[arg(long)]
    pub comments_allowed: Option<bool>,
    #[arg(long)]
    pub pingback_inbound: Option<bool>,
    #[arg(long)]
    pub pingback_outbound: Option<bool>,
    #[arg(long)]
    pub require_name_email: Option<bool>,
    #[arg(long)]
    pub require_registration: Option<bool>,
    /// Close comments on posts older than this many days; 0 keeps them open
    #[arg(long)]
    pub close_comments_after_days: Option<u64>,
    /// Nest replies up to this depth; 0 disables threading
    #[arg(long)]
    pub threading_depth: Option<u64>,
    /// Split comments into pages of this size; 0 disables paging
    #[arg(long)]
    pub comments_page_size: Option<u64>,
    #[arg(long)]
    pub comments_sort_order: Option<SortOrderArg>,
    #[arg(long)]
    pub manual_moderation: Option<bool>,
    #[arg(long)]
    pub known_users_allowlisted: Option<bool>,
    #[arg(long)]
    pub max_links: Option<u64>,
    /// Newline separated moderation keys
    #[arg(long)]
    pub moderation_keys: Option<String>,
    #[arg(long)]
    pub moderation_keys_file: Option<PathBuf>,
    /// Newline separated blocklist keys
    #[arg(long)]
    pub blocklist_keys: Option<String>,
    #[arg(long)]
    pub blocklist_keys_file: Option<PathBuf>,
    #[arg(long)]
    pub related_posts: Option<bool>,
}

#[derive(Parser, Debug)]
pub struct PublicizeArgs {
    #[command(subcommand)]
    pub action: PublicizeCmd,
}

#[derive(Subcommand, Debug)]
pub enum PublicizeCmd {
    /// List the blog's Publicize connections
    Connections,
    /// Look up the keyring authorised for a service
    CheckAuth {
        #[arg(long)]
        service: String,
    },
    /// Connect the blog to a service through a keyring
    Connect {
        #[arg(long)]
        service: String,
        #[arg(long)]
        keyring: u64,
        /// Additional external account; omit for the keyring's default account
        #[arg(long)]
        account: Option<String>,
    },
    /// Remove a Publicize connection
    Disconnect {
        #[arg(long)]
        service: String,
        #[arg(long)]
        connection_id: u64,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PrivacyArg {
    Private,
    Hidden,
    Public,
}

impl PrivacyArg {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Hidden => "hidden",
            Self::Public => "public",
        }
    }
}

impl fmt::Display for PrivacyArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<PrivacyArg> for BlogPrivacy {
    fn from(value: PrivacyArg) -> Self {
        match value {
            PrivacyArg::Private => BlogPrivacy::Private,
            PrivacyArg::Hidden => BlogPrivacy::Hidden,
            PrivacyArg::Public => BlogPrivacy::Public,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SortOrderArg {
    Asc,
    Desc,
}

impl From<SortOrderArg> for CommentSortOrder {
    fn from(value: SortOrderArg) -> Self {
        match value {
            SortOrderArg::Asc => CommentSortOrder::Ascending,
            SortOrderArg::Desc => CommentSortOrder::Descending,
        }
    }
}
