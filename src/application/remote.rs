//! The remote blog service contract.
//!
//! Implementations talk to a remote site on behalf of a [`Blog`]; callers get
//! exactly one outcome per call, either the payload or a [`RemoteError`].

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    Authorization, Blog, BlogOptions, DomainError, PostFormats, PublicizeConnection, Publicizer,
    RemoteBlogSettings,
};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("request timed out")]
    Timeout,
    #[error("invalid endpoint: {0}")]
    Endpoint(String),
    #[error("remote api error {status} `{code}`: {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("no keyring connection found for service `{service}`")]
    KeyringNotFound { service: String },
    #[error("service `{service}` has no active connection")]
    NotConnected { service: String },
    #[error("blog {site_id} has no local settings to push")]
    MissingSettings { site_id: u64 },
    #[error("remote site did not acknowledge the update")]
    Rejected,
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl RemoteError {
    pub fn from_transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode(err.to_string())
    }

    /// 401 and 403 both mean the token is missing, expired or lacks scope.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401 | 403, .. })
    }
}

#[async_trait]
pub trait BlogServiceRemote: Send + Sync {
    /// Whether the blog has more than one user able to author posts.
    async fn check_multi_author(&self, blog: &Blog) -> Result<bool, RemoteError>;

    async fn sync_options(&self, blog: &Blog) -> Result<BlogOptions, RemoteError>;

    async fn sync_post_formats(&self, blog: &Blog) -> Result<PostFormats, RemoteError>;

    /// Publicize connections currently held by the blog.
    async fn sync_connections(&self, blog: &Blog)
    -> Result<Vec<PublicizeConnection>, RemoteError>;

    /// Looks up the keyring the current user authorised for `service`.
    ///
    /// Fails with [`RemoteError::KeyringNotFound`] when the user has not yet
    /// completed the service's authorisation flow.
    async fn check_authorization(&self, service: &Publicizer)
    -> Result<Authorization, RemoteError>;

    /// Connects the blog to `service` through `keyring_id`. `account` picks one
    /// of the keyring's additional accounts; `None` uses the default account.
    async fn connect_publicizer(
        &self,
        service: &Publicizer,
        keyring_id: u64,
        account: Option<&str>,
    ) -> Result<(), RemoteError>;

    async fn disconnect_publicizer(&self, service: &Publicizer) -> Result<(), RemoteError>;

    async fn sync_settings(&self, blog: &Blog) -> Result<RemoteBlogSettings, RemoteError>;

    /// Pushes `blog.settings` to the remote site.
    async fn update_settings(&self, blog: &Blog) -> Result<(), RemoteError>;
}
