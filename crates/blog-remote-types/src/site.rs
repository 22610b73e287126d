use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::lenient;

/// `GET sites/{id}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteResponse {
    #[serde(rename = "ID", deserialize_with = "lenient::u64_from_any")]
    pub id: u64,
    #[serde(rename = "URL", default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient::bool_from_any")]
    pub is_private: bool,
    #[serde(default, deserialize_with = "lenient::bool_from_any")]
    pub jetpack: bool,
    #[serde(default, deserialize_with = "lenient::opt_object_from_any")]
    pub options: Option<Map<String, Value>>,
}

/// `GET sites/{id}/users`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub found: Option<u64>,
    #[serde(default)]
    pub users: Vec<Value>,
}

/// `GET sites/{id}/post-formats`
///
/// `formats` is an object on success but some servers send an empty array.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PostFormatsResponse {
    #[serde(default)]
    pub formats: Value,
}
