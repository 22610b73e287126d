use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::lenient;

/// `GET sites/{id}/settings`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SiteSettingsResponse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub settings: Option<SettingsPayload>,
}

/// Raw WordPress option values nested under `settings`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SettingsPayload {
    #[serde(default, deserialize_with = "lenient::opt_i64_from_any")]
    pub blog_public: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_u64_from_any")]
    pub default_category: Option<u64>,
    #[serde(default, deserialize_with = "lenient::opt_string_from_any")]
    pub default_post_format: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_bool_from_any")]
    pub default_comment_status: Option<bool>,
    #[serde(default, deserialize_with = "lenient::opt_bool_from_any")]
    pub default_ping_status: Option<bool>,
    #[serde(default, deserialize_with = "lenient::opt_bool_from_any")]
    pub default_pingback_flag: Option<bool>,
    #[serde(default, deserialize_with = "lenient::opt_bool_from_any")]
    pub require_name_email: Option<bool>,
    #[serde(default, deserialize_with = "lenient::opt_bool_from_any")]
    pub comment_registration: Option<bool>,
    #[serde(default, deserialize_with = "lenient::opt_bool_from_any")]
    pub close_comments_for_old_posts: Option<bool>,
    #[serde(default, deserialize_with = "lenient::opt_u64_from_any")]
    pub close_comments_days_old: Option<u64>,
    #[serde(default, deserialize_with = "lenient::opt_bool_from_any")]
    pub thread_comments: Option<bool>,
    #[serde(default, deserialize_with = "lenient::opt_u64_from_any")]
    pub thread_comments_depth: Option<u64>,
    #[serde(default, deserialize_with = "lenient::opt_bool_from_any")]
    pub page_comments: Option<bool>,
    #[serde(default, deserialize_with = "lenient::opt_u64_from_any")]
    pub comments_per_page: Option<u64>,
    #[serde(default, deserialize_with = "lenient::opt_string_from_any")]
    pub comment_order: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_bool_from_any")]
    pub comment_moderation: Option<bool>,
    #[serde(default, deserialize_with = "lenient::opt_bool_from_any")]
    pub comment_whitelist: Option<bool>,
    #[serde(default, deserialize_with = "lenient::opt_u64_from_any")]
    pub comment_max_links: Option<u64>,
    #[serde(default)]
    pub moderation_keys: Option<String>,
    #[serde(default)]
    pub blacklist_keys: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_bool_from_any")]
    pub jetpack_relatedposts_enabled: Option<bool>,
    #[serde(default, deserialize_with = "lenient::opt_bool_from_any")]
    pub jetpack_relatedposts_show_headline: Option<bool>,
    #[serde(default, deserialize_with = "lenient::opt_bool_from_any")]
    pub jetpack_relatedposts_show_thumbnails: Option<bool>,
}

/// `POST sites/{id}/settings`; only present fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SettingsUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blogname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blogdescription: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog_public: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_category: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_post_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_comment_status: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_ping_status: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_pingback_flag: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_name_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_registration: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_comments_for_old_posts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_comments_days_old: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_comments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_comments_depth: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_comments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments_per_page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_moderation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_whitelist: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_max_links: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moderation_keys: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blacklist_keys: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jetpack_relatedposts_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jetpack_relatedposts_show_headline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jetpack_relatedposts_show_thumbnails: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SettingsUpdateResponse {
    #[serde(default)]
    pub updated: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_payload_reads_option_strings() {
        let body = r#"{
            "name": "Notes",
            "description": "Just another blog",
            "settings": {
                "blog_public": "-1",
                "default_category": 1,
                "default_post_format": 0,
                "default_comment_status": true,
                "require_name_email": "1",
                "comment_order": "desc"
            }
        }"#;
        let parsed: SiteSettingsResponse = serde_json::from_str(body).expect("settings");
        let settings = parsed.settings.expect("nested settings");
        assert_eq!(settings.blog_public, Some(-1));
        assert_eq!(settings.default_category, Some(1));
        assert_eq!(settings.default_post_format.as_deref(), Some("0"));
        assert_eq!(settings.require_name_email, Some(true));
        assert_eq!(settings.thread_comments, None);
    }

    #[test]
    fn update_request_skips_absent_fields() {
        let req = SettingsUpdateRequest {
            blogname: Some("Notes".into()),
            blog_public: Some(1),
            ..Default::default()
        };
        let json = serde_json::to_value(&req).expect("serialize");
        assert_eq!(json, serde_json::json!({"blogname": "Notes", "blog_public": 1}));
    }
}
