use serde::{Deserialize, Serialize};

use crate::lenient;

/// `GET sites/{id}/publicize-connections`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConnectionsResponse {
    #[serde(default)]
    pub connections: Vec<ConnectionPayload>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConnectionPayload {
    #[serde(rename = "ID", deserialize_with = "lenient::u64_from_any")]
    pub id: u64,
    #[serde(default)]
    pub issued: Option<String>,
    #[serde(default)]
    pub expires: Option<String>,
    #[serde(
        rename = "external_ID",
        default,
        deserialize_with = "lenient::opt_string_from_any"
    )]
    pub external_id: Option<String>,
    #[serde(default)]
    pub external_name: Option<String>,
    #[serde(default)]
    pub external_display: Option<String>,
    #[serde(default)]
    pub external_profile_picture: Option<String>,
    #[serde(rename = "external_profile_URL", default)]
    pub external_profile_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_u64_from_any")]
    pub external_follower_count: Option<u64>,
    #[serde(
        rename = "keyring_connection_ID",
        default,
        deserialize_with = "lenient::opt_u64_from_any"
    )]
    pub keyring_connection_id: Option<u64>,
    #[serde(
        rename = "keyring_connection_user_ID",
        default,
        deserialize_with = "lenient::opt_u64_from_any"
    )]
    pub keyring_connection_user_id: Option<u64>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "refresh_URL", default)]
    pub refresh_url: Option<String>,
    pub service: String,
    #[serde(default, deserialize_with = "lenient::bool_from_any")]
    pub shared: bool,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(
        rename = "site_ID",
        default,
        deserialize_with = "lenient::opt_u64_from_any"
    )]
    pub site_id: Option<u64>,
    #[serde(
        rename = "user_ID",
        default,
        deserialize_with = "lenient::opt_u64_from_any"
    )]
    pub user_id: Option<u64>,
}

/// `GET me/keyring-connections`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct KeyringConnectionsResponse {
    #[serde(default)]
    pub connections: Vec<KeyringConnectionPayload>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KeyringConnectionPayload {
    #[serde(rename = "ID", deserialize_with = "lenient::u64_from_any")]
    pub id: u64,
    pub service: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub additional_external_users: Vec<ExternalUserPayload>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExternalUserPayload {
    #[serde(
        rename = "external_ID",
        default,
        deserialize_with = "lenient::opt_string_from_any"
    )]
    pub external_id: Option<String>,
    #[serde(default)]
    pub external_name: Option<String>,
    #[serde(default)]
    pub external_profile_picture: Option<String>,
}

/// `POST sites/{id}/publicize-connections/new`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConnectRequest {
    #[serde(rename = "keyring_connection_ID")]
    pub keyring_connection_id: u64,
    #[serde(rename = "external_user_ID", skip_serializing_if = "Option::is_none")]
    pub external_user_id: Option<String>,
}
