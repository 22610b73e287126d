//! Blog settings as read from and written to the remote site.
//!
//! Every field is optional: `None` means the server did not report the value,
//! and an update leaves such fields untouched on the server.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteBlogSettings {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub privacy: Option<BlogPrivacy>,
    pub default_category_id: Option<u64>,
    pub default_post_format: Option<String>,
    #[serde(default)]
    pub discussion: DiscussionSettings,
    #[serde(default)]
    pub related_posts: RelatedPostsSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscussionSettings {
    pub comments_allowed: Option<bool>,
    pub pingback_inbound_enabled: Option<bool>,
    pub pingback_outbound_enabled: Option<bool>,
    pub comments_require_name_and_email: Option<bool>,
    pub comments_require_registration: Option<bool>,
    pub comments_close_automatically: Option<bool>,
    pub comments_close_automatically_after_days: Option<u64>,
    pub comments_threading_enabled: Option<bool>,
    pub comments_threading_depth: Option<u64>,
    pub comments_paging_enabled: Option<bool>,
    pub comments_page_size: Option<u64>,
    pub comments_sort_order: Option<CommentSortOrder>,
    pub comments_require_manual_moderation: Option<bool>,
    pub comments_from_known_users_allowlisted: Option<bool>,
    pub comments_max_links: Option<u64>,
    pub moderation_keys: Option<Vec<String>>,
    pub blocklist_keys: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedPostsSettings {
    pub enabled: Option<bool>,
    pub show_headline: Option<bool>,
    pub show_thumbnails: Option<bool>,
}

/// Maps onto the `blog_public` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlogPrivacy {
    Private,
    Hidden,
    Public,
}

impl BlogPrivacy {
    pub fn as_option_value(self) -> i64 {
        match self {
            BlogPrivacy::Private => -1,
            BlogPrivacy::Hidden => 0,
            BlogPrivacy::Public => 1,
        }
    }
}

impl TryFrom<i64> for BlogPrivacy {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(BlogPrivacy::Private),
            0 => Ok(BlogPrivacy::Hidden),
            1 => Ok(BlogPrivacy::Public),
            other => Err(DomainError::invalid_value("blog_public", other)),
        }
    }
}

impl FromStr for BlogPrivacy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "private" | "-1" => Ok(BlogPrivacy::Private),
            "hidden" | "0" => Ok(BlogPrivacy::Hidden),
            "public" | "1" => Ok(BlogPrivacy::Public),
            other => Err(DomainError::invalid_value("privacy", other)),
        }
    }
}

impl fmt::Display for BlogPrivacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BlogPrivacy::Private => "private",
            BlogPrivacy::Hidden => "hidden",
            BlogPrivacy::Public => "public",
        };
        f.write_str(label)
    }
}

/// Maps onto the `comment_order` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentSortOrder {
    Ascending,
    Descending,
}

impl CommentSortOrder {
    pub fn as_option_value(self) -> &'static str {
        match self {
            CommentSortOrder::Ascending => "asc",
            CommentSortOrder::Descending => "desc",
        }
    }
}

impl FromStr for CommentSortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(CommentSortOrder::Ascending),
            "desc" | "descending" => Ok(CommentSortOrder::Descending),
            other => Err(DomainError::invalid_value("comment_order", other)),
        }
    }
}

/// Splits a newline separated key list (moderation / blocklist) into entries.
pub fn split_keys(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

pub fn join_keys(keys: &[String]) -> String {
    keys.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn privacy_round_trips_option_value() {
        for privacy in [BlogPrivacy::Private, BlogPrivacy::Hidden, BlogPrivacy::Public] {
            let value = privacy.as_option_value();
            assert_eq!(BlogPrivacy::try_from(value), Ok(privacy));
        }
        assert!(BlogPrivacy::try_from(2).is_err());
    }

    #[test]
    fn privacy_parses_cli_spellings() {
        assert_eq!("Public".parse::<BlogPrivacy>(), Ok(BlogPrivacy::Public));
        assert_eq!("-1".parse::<BlogPrivacy>(), Ok(BlogPrivacy::Private));
        assert!("secret".parse::<BlogPrivacy>().is_err());
    }

    #[test]
    fn key_lists_drop_blank_lines() {
        let keys = split_keys("spam\n\n  viagra \r\n");
        assert_eq!(keys, vec!["spam".to_string(), "viagra".to_string()]);
        assert_eq!(join_keys(&keys), "spam\nviagra");
    }
}
