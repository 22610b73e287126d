//! Publicize: third-party sharing services linked to a blog.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::error::DomainError;

/// A sharing service (Twitter, Facebook, ...) as offered to one blog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publicizer {
    pub site_id: u64,
    pub service: String,
    pub label: String,
    #[serde(default)]
    pub connect_url: Option<String>,
    /// Set when the blog holds an active connection to this service.
    #[serde(default)]
    pub connection_id: Option<u64>,
}

impl Publicizer {
    pub fn new(site_id: u64, service: impl Into<String>) -> Result<Self, DomainError> {
        let service = service.into().trim().to_string();
        if service.is_empty() {
            return Err(DomainError::validation("publicize service must not be empty"));
        }
        if site_id == 0 {
            return Err(DomainError::validation("site id must be greater than zero"));
        }
        Ok(Self {
            site_id,
            label: service.clone(),
            service,
            connect_url: None,
            connection_id: None,
        })
    }

    #[must_use]
    pub fn with_connection(mut self, connection_id: u64) -> Self {
        self.connection_id = Some(connection_id);
        self
    }

    pub fn is_connected(&self) -> bool {
        self.connection_id.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicizeConnection {
    pub connection_id: u64,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date_issued: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date_expires: Option<OffsetDateTime>,
    pub external_id: Option<String>,
    pub external_name: Option<String>,
    pub external_display: Option<String>,
    pub external_profile_picture: Option<String>,
    pub external_profile_url: Option<String>,
    pub external_follower_count: Option<u64>,
    pub keyring_connection_id: Option<u64>,
    pub keyring_connection_user_id: Option<u64>,
    pub label: Option<String>,
    pub refresh_url: Option<String>,
    pub service: String,
    pub shared: bool,
    pub status: Option<String>,
    pub site_id: Option<u64>,
    pub user_id: Option<u64>,
}

impl PublicizeConnection {
    /// `broken` and `must-reauth` connections need the user to reconnect.
    pub fn needs_reconnect(&self) -> bool {
        matches!(self.status.as_deref(), Some("broken" | "must-reauth"))
    }
}

/// An extra account reachable through one keyring connection, e.g. a
/// Facebook page owned by the authorised user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyringAccount {
    pub external_id: Option<String>,
    pub external_name: Option<String>,
    pub external_profile_picture: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authorization {
    pub keyring_id: u64,
    pub accounts: Vec<KeyringAccount>,
}
