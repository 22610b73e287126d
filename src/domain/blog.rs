//! The blog a remote call targets, and the collections synced for it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{error::DomainError, settings::RemoteBlogSettings};

pub const STANDARD_POST_FORMAT: &str = "standard";
const STANDARD_POST_FORMAT_LABEL: &str = "Standard";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    pub site_id: u64,
    pub url: String,
    /// Local copy of the settings; pushed by `update_settings`.
    #[serde(default)]
    pub settings: Option<RemoteBlogSettings>,
}

impl Blog {
    pub fn new(site_id: u64, url: impl Into<String>) -> Result<Self, DomainError> {
        if site_id == 0 {
            return Err(DomainError::validation("site id must be greater than zero"));
        }
        Ok(Self {
            site_id,
            url: url.into(),
            settings: None,
        })
    }

    #[must_use]
    pub fn with_settings(mut self, settings: RemoteBlogSettings) -> Self {
        self.settings = Some(settings);
        self
    }
}

/// Blog options keyed by WordPress option name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlogOptions(BTreeMap<String, Value>);

impl BlogOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

/// Post format slug to display name. Always includes `standard`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostFormats(BTreeMap<String, String>);

impl PostFormats {
    pub fn from_map(mut formats: BTreeMap<String, String>) -> Self {
        formats
            .entry(STANDARD_POST_FORMAT.to_string())
            .or_insert_with(|| STANDARD_POST_FORMAT_LABEL.to_string());
        Self(formats)
    }

    pub fn get(&self, slug: &str) -> Option<&str> {
        self.0.get(slug).map(String::as_str)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.0.contains_key(slug)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }
}

impl Default for PostFormats {
    fn default() -> Self {
        Self::from_map(BTreeMap::new())
    }
}
