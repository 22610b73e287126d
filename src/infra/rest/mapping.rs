//! Translation between wire payloads and domain entities.

use std::collections::BTreeMap;

use blog_remote_types::{
    ConnectionPayload, ExternalUserPayload, KeyringConnectionsResponse, SettingsPayload,
    SettingsUpdateRequest, SiteResponse, SiteSettingsResponse,
};
use serde_json::Value;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::application::RemoteError;
use crate::domain::{
    Authorization, BlogOptions, BlogPrivacy, CommentSortOrder, DiscussionSettings,
    KeyringAccount, PostFormats, PublicizeConnection, RelatedPostsSettings, RemoteBlogSettings,
    blog::STANDARD_POST_FORMAT,
    settings::{join_keys, split_keys},
};

/// Options copied verbatim from the site's `options` object.
const DIRECT_OPTION_KEYS: &[&str] = &[
    "active_modules",
    "admin_url",
    "login_url",
    "unmapped_url",
    "image_default_link_type",
    "software_version",
    "videopress_enabled",
    "timezone",
    "gmt_offset",
    "allowed_file_types",
    "frame_nonce",
    "jetpack_version",
    "max_upload_size",
];

/// Reported for sites whose response carries no `options` object.
const FALLBACK_SOFTWARE_VERSION: &str = "3.6";

/// WordPress stores the standard format as `0`.
const STANDARD_FORMAT_OPTION_VALUE: &str = "0";

pub fn options_from_site(site: SiteResponse) -> BlogOptions {
    let mut options = BlogOptions::new();
    if let Some(url) = site.url {
        options.insert("home_url", Value::String(url));
    }
    let blog_public = if site.is_private { "-1" } else { "0" };
    options.insert("blog_public", Value::String(blog_public.to_string()));
    if site.jetpack {
        options.insert("jetpack_client_id", Value::from(site.id));
    }

    match site.options {
        Some(raw) => {
            if let Some(enabled) = raw.get("featured_images_enabled") {
                options.insert("post_thumbnail", enabled.clone());
            }
            for key in DIRECT_OPTION_KEYS {
                if let Some(value) = raw.get(*key).filter(|v| !v.is_null()) {
                    options.insert(*key, value.clone());
                }
            }
        }
        None => options.insert(
            "software_version",
            Value::String(FALLBACK_SOFTWARE_VERSION.to_string()),
        ),
    }
    options
}

pub fn post_formats_from_value(formats: Value) -> PostFormats {
    let Value::Object(raw) = formats else {
        return PostFormats::default();
    };
    let map: BTreeMap<String, String> = raw
        .into_iter()
        .map(|(slug, label)| {
            let label = match label {
                Value::String(s) => s,
                other => other.to_string(),
            };
            (slug, label)
        })
        .collect();
    PostFormats::from_map(map)
}

pub fn connection_from_payload(payload: ConnectionPayload) -> PublicizeConnection {
    PublicizeConnection {
        connection_id: payload.id,
        date_issued: parse_timestamp(payload.issued.as_deref()),
        date_expires: parse_timestamp(payload.expires.as_deref()),
        external_id: payload.external_id,
        external_name: payload.external_name,
        external_display: payload.external_display,
        external_profile_picture: payload.external_profile_picture,
        external_profile_url: payload.external_profile_url,
        external_follower_count: payload.external_follower_count,
        keyring_connection_id: payload.keyring_connection_id,
        keyring_connection_user_id: payload.keyring_connection_user_id,
        label: payload.label,
        refresh_url: payload.refresh_url,
        service: payload.service,
        shared: payload.shared,
        status: payload.status,
        site_id: payload.site_id,
        user_id: payload.user_id,
    }
}

/// Picks the first keyring connection for `service`.
pub fn authorization_for_service(
    keyrings: KeyringConnectionsResponse,
    service: &str,
) -> Result<Authorization, RemoteError> {
    keyrings
        .connections
        .into_iter()
        .find(|keyring| keyring.service == service)
        .map(|keyring| Authorization {
            keyring_id: keyring.id,
            accounts: keyring
                .additional_external_users
                .into_iter()
                .map(account_from_payload)
                .collect(),
        })
        .ok_or_else(|| RemoteError::KeyringNotFound {
            service: service.to_string(),
        })
}

fn account_from_payload(payload: ExternalUserPayload) -> KeyringAccount {
    KeyringAccount {
        external_id: payload.external_id,
        external_name: payload.external_name,
        external_profile_picture: payload.external_profile_picture,
    }
}

pub fn settings_from_response(response: SiteSettingsResponse) -> RemoteBlogSettings {
    let raw = response.settings.unwrap_or_default();
    let SettingsPayload {
        blog_public,
        default_category,
        default_post_format,
        default_comment_status,
        default_ping_status,
        default_pingback_flag,
        require_name_email,
        comment_registration,
        close_comments_for_old_posts,
        close_comments_days_old,
        thread_comments,
        thread_comments_depth,
        page_comments,
        comments_per_page,
        comment_order,
        comment_moderation,
        comment_whitelist,
        comment_max_links,
        moderation_keys,
        blacklist_keys,
        jetpack_relatedposts_enabled,
        jetpack_relatedposts_show_headline,
        jetpack_relatedposts_show_thumbnails,
    } = raw;

    RemoteBlogSettings {
        name: response.name,
        tagline: response.description,
        privacy: blog_public.and_then(|v| BlogPrivacy::try_from(v).ok()),
        default_category_id: default_category,
        default_post_format: default_post_format.map(|format| {
            if format == STANDARD_FORMAT_OPTION_VALUE {
                STANDARD_POST_FORMAT.to_string()
            } else {
                format
            }
        }),
        discussion: DiscussionSettings {
            comments_allowed: default_comment_status,
            pingback_inbound_enabled: default_ping_status,
            pingback_outbound_enabled: default_pingback_flag,
            comments_require_name_and_email: require_name_email,
            comments_require_registration: comment_registration,
            comments_close_automatically: close_comments_for_old_posts,
            comments_close_automatically_after_days: close_comments_days_old,
            comments_threading_enabled: thread_comments,
            comments_threading_depth: thread_comments_depth,
            comments_paging_enabled: page_comments,
            comments_page_size: comments_per_page,
            comments_sort_order: comment_order.and_then(|order| order.parse::<CommentSortOrder>().ok()),
            comments_require_manual_moderation: comment_moderation,
            comments_from_known_users_allowlisted: comment_whitelist,
            comments_max_links: comment_max_links,
            moderation_keys: moderation_keys.as_deref().map(split_keys),
            blocklist_keys: blacklist_keys.as_deref().map(split_keys),
        },
        related_posts: RelatedPostsSettings {
            enabled: jetpack_relatedposts_enabled,
            show_headline: jetpack_relatedposts_show_headline,
            show_thumbnails: jetpack_relatedposts_show_thumbnails,
        },
    }
}

pub fn update_request_from_settings(settings: &RemoteBlogSettings) -> SettingsUpdateRequest {
    let discussion = &settings.discussion;
    let related = &settings.related_posts;
    SettingsUpdateRequest {
        blogname: settings.name.clone(),
        blogdescription: settings.tagline.clone(),
        blog_public: settings.privacy.map(BlogPrivacy::as_option_value),
        default_category: settings.default_category_id,
        default_post_format: settings.default_post_format.as_ref().map(|format| {
            if format == STANDARD_POST_FORMAT {
                STANDARD_FORMAT_OPTION_VALUE.to_string()
            } else {
                format.clone()
            }
        }),
        default_comment_status: discussion.comments_allowed,
        default_ping_status: discussion.pingback_inbound_enabled,
        default_pingback_flag: discussion.pingback_outbound_enabled,
        require_name_email: discussion.comments_require_name_and_email,
        comment_registration: discussion.comments_require_registration,
        close_comments_for_old_posts: discussion.comments_close_automatically,
        close_comments_days_old: discussion.comments_close_automatically_after_days,
        thread_comments: discussion.comments_threading_enabled,
        thread_comments_depth: discussion.comments_threading_depth,
        page_comments: discussion.comments_paging_enabled,
        comments_per_page: discussion.comments_page_size,
        comment_order: discussion
            .comments_sort_order
            .map(|order| order.as_option_value().to_string()),
        comment_moderation: discussion.comments_require_manual_moderation,
        comment_whitelist: discussion.comments_from_known_users_allowlisted,
        comment_max_links: discussion.comments_max_links,
        moderation_keys: discussion.moderation_keys.as_deref().map(join_keys),
        blacklist_keys: discussion.blocklist_keys.as_deref().map(join_keys),
        jetpack_relatedposts_enabled: related.enabled,
        jetpack_relatedposts_show_headline: related.show_headline,
        jetpack_relatedposts_show_thumbnails: related.show_thumbnails,
    }
}

fn parse_timestamp(raw: Option<&str>) -> Option<OffsetDateTime> {
    raw.and_then(|value| OffsetDateTime::parse(value, &Rfc3339).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn site(value: Value) -> SiteResponse {
        serde_json::from_value(value).expect("site response")
    }

    #[test]
    fn options_without_options_object_report_fallback_version() {
        let options = options_from_site(site(json!({
            "ID": 7,
            "URL": "https://example.com",
            "is_private": true
        })));
        assert_eq!(options.get("home_url"), Some(&json!("https://example.com")));
        assert_eq!(options.get("blog_public"), Some(&json!("-1")));
        assert_eq!(options.get("software_version"), Some(&json!("3.6")));
        assert!(options.get("jetpack_client_id").is_none());
    }

    #[test]
    fn options_copy_known_keys_and_jetpack_id() {
        let options = options_from_site(site(json!({
            "ID": 99,
            "jetpack": true,
            "options": {
                "featured_images_enabled": true,
                "timezone": "Europe/Berlin",
                "gmt_offset": 1,
                "software_version": "4.4",
                "unrelated": "ignored",
                "admin_url": null
            }
        })));
        assert_eq!(options.get("jetpack_client_id"), Some(&json!(99)));
        assert_eq!(options.get("post_thumbnail"), Some(&json!(true)));
        assert_eq!(options.get("timezone"), Some(&json!("Europe/Berlin")));
        assert_eq!(options.get("software_version"), Some(&json!("4.4")));
        assert_eq!(options.get("blog_public"), Some(&json!("0")));
        assert!(options.get("unrelated").is_none());
        assert!(options.get("admin_url").is_none());
    }

    #[test]
    fn non_object_formats_fall_back_to_standard_only() {
        let formats = post_formats_from_value(json!([]));
        assert_eq!(formats.len(), 1);
        assert!(formats.contains("standard"));
    }

    #[test]
    fn unparseable_timestamps_are_dropped() {
        let payload: ConnectionPayload = serde_json::from_value(json!({
            "ID": 1,
            "service": "facebook",
            "issued": "2016-01-20T15:10:38+00:00",
            "expires": "0000-00-00 00:00:00"
        }))
        .expect("payload");
        let connection = connection_from_payload(payload);
        assert!(connection.date_issued.is_some());
        assert!(connection.date_expires.is_none());
    }

    #[test]
    fn standard_format_maps_to_option_zero_and_back() {
        let settings = settings_from_response(SiteSettingsResponse {
            settings: Some(SettingsPayload {
                default_post_format: Some("0".into()),
                ..Default::default()
            }),
            ..Default::default()
        });
        assert_eq!(settings.default_post_format.as_deref(), Some("standard"));
        let request = update_request_from_settings(&settings);
        assert_eq!(request.default_post_format.as_deref(), Some("0"));
    }

    #[test]
    fn unknown_privacy_is_left_unset() {
        let settings = settings_from_response(SiteSettingsResponse {
            settings: Some(SettingsPayload {
                blog_public: Some(7),
                ..Default::default()
            }),
            ..Default::default()
        });
        assert_eq!(settings.privacy, None);
    }
}
