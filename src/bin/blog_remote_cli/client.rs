#![deny(clippy::all, clippy::pedantic)]

use blog_remote::{
    application::{BlogServiceRemote, RemoteError},
    config::{LoadError, Settings},
    domain::{Blog, DomainError, Publicizer},
    infra::{
        error::InfraError,
        rest::{RestApi, RestBlogServiceRemote},
    },
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("site id is required (use --site-id or BLOG_REMOTE_SITE_ID)")]
    MissingSite,
    #[error("api token is required (use --token-file or BLOG_REMOTE_TOKEN)")]
    MissingToken,
    #[error("failed to read input file {path}: {source}")]
    InputFile {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Config(#[from] LoadError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error(transparent)]
    Remote(#[from] RemoteError),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to render output: {0}")]
    Output(String),
}

pub struct Ctx {
    pub remote: Box<dyn BlogServiceRemote>,
    pub site_id: u64,
}

impl Ctx {
    pub fn from_settings(settings: &Settings, site_id: Option<u64>) -> Result<Self, CliError> {
        let site_id = site_id.ok_or(CliError::MissingSite)?;
        if settings.api.token.is_none() {
            return Err(CliError::MissingToken);
        }
        let api = RestApi::from_settings(&settings.api)?;
        Ok(Self::with_api(api, site_id))
    }

    pub fn with_api(api: RestApi, site_id: u64) -> Self {
        Self {
            remote: Box::new(RestBlogServiceRemote::new(api)),
            site_id,
        }
    }

    pub fn blog(&self) -> Result<Blog, CliError> {
        Ok(Blog::new(self.site_id, String::new())?)
    }

    pub fn publicizer(&self, service: &str) -> Result<Publicizer, CliError> {
        Ok(Publicizer::new(self.site_id, service)?)
    }
}
