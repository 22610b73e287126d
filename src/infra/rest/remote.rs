use std::{future::Future, time::Instant};

use async_trait::async_trait;
use blog_remote_types::{
    ConnectRequest, ConnectionsResponse, KeyringConnectionsResponse, PostFormatsResponse,
    SettingsUpdateResponse, SiteResponse, SiteSettingsResponse, UsersResponse,
};
use metrics::{counter, histogram};
use tracing::{instrument, warn};

use super::{api::RestApi, mapping};
use crate::application::{BlogServiceRemote, RemoteError};
use crate::domain::{
    Authorization, Blog, BlogOptions, PostFormats, PublicizeConnection, Publicizer,
    RemoteBlogSettings,
};
use crate::infra::telemetry::{REQUEST_MS, REQUESTS_TOTAL};

/// [`BlogServiceRemote`] backed by the v1.1 REST API.
#[derive(Clone, Debug)]
pub struct RestBlogServiceRemote {
    api: RestApi,
}

impl RestBlogServiceRemote {
    pub fn new(api: RestApi) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &RestApi {
        &self.api
    }
}

fn site_path(site_id: u64, suffix: &str) -> String {
    if suffix.is_empty() {
        format!("sites/{site_id}")
    } else {
        format!("sites/{site_id}/{suffix}")
    }
}

async fn observed<T, F>(operation: &'static str, call: F) -> Result<T, RemoteError>
where
    F: Future<Output = Result<T, RemoteError>>,
{
    let started = Instant::now();
    let result = call.await;
    let outcome = if result.is_ok() { "success" } else { "failure" };
    counter!(REQUESTS_TOTAL, "operation" => operation, "outcome" => outcome).increment(1);
    histogram!(REQUEST_MS, "operation" => operation)
        .record(started.elapsed().as_secs_f64() * 1000.0);
    if let Err(error) = &result {
        warn!(operation, error = %error, "remote call failed");
    }
    result
}

#[async_trait]
impl BlogServiceRemote for RestBlogServiceRemote {
    #[instrument(skip_all, fields(site_id = blog.site_id))]
    async fn check_multi_author(&self, blog: &Blog) -> Result<bool, RemoteError> {
        observed("check_multi_author", async {
            let query = [("authors_only", "1".to_string())];
            let users: UsersResponse = self
                .api
                .get(&site_path(blog.site_id, "users"), Some(&query))
                .await?;
            Ok(users.users.len() > 1)
        })
        .await
    }

    #[instrument(skip_all, fields(site_id = blog.site_id))]
    async fn sync_options(&self, blog: &Blog) -> Result<BlogOptions, RemoteError> {
        observed("sync_options", async {
            let site: SiteResponse = self.api.get(&site_path(blog.site_id, ""), None).await?;
            Ok(mapping::options_from_site(site))
        })
        .await
    }

    #[instrument(skip_all, fields(site_id = blog.site_id))]
    async fn sync_post_formats(&self, blog: &Blog) -> Result<PostFormats, RemoteError> {
        observed("sync_post_formats", async {
            let response: PostFormatsResponse = self
                .api
                .get(&site_path(blog.site_id, "post-formats"), None)
                .await?;
            Ok(mapping::post_formats_from_value(response.formats))
        })
        .await
    }

    #[instrument(skip_all, fields(site_id = blog.site_id))]
    async fn sync_connections(
        &self,
        blog: &Blog,
    ) -> Result<Vec<PublicizeConnection>, RemoteError> {
        observed("sync_connections", async {
            let response: ConnectionsResponse = self
                .api
                .get(&site_path(blog.site_id, "publicize-connections"), None)
                .await?;
            Ok(response
                .connections
                .into_iter()
                .map(mapping::connection_from_payload)
                .collect())
        })
        .await
    }

    #[instrument(skip_all, fields(service = %service.service))]
    async fn check_authorization(
        &self,
        service: &Publicizer,
    ) -> Result<Authorization, RemoteError> {
        observed("check_authorization", async {
            let keyrings: KeyringConnectionsResponse =
                self.api.get("me/keyring-connections", None).await?;
            mapping::authorization_for_service(keyrings, &service.service)
        })
        .await
    }

    #[instrument(skip_all, fields(site_id = service.site_id, service = %service.service, keyring_id = keyring_id))]
    async fn connect_publicizer(
        &self,
        service: &Publicizer,
        keyring_id: u64,
        account: Option<&str>,
    ) -> Result<(), RemoteError> {
        observed("connect_publicizer", async {
            let body = ConnectRequest {
                keyring_connection_id: keyring_id,
                external_user_id: account.map(ToString::to_string),
            };
            self.api
                .post_unit(
                    &site_path(service.site_id, "publicize-connections/new"),
                    &body,
                )
                .await
        })
        .await
    }

    #[instrument(skip_all, fields(site_id = service.site_id, service = %service.service))]
    async fn disconnect_publicizer(&self, service: &Publicizer) -> Result<(), RemoteError> {
        observed("disconnect_publicizer", async {
            let connection_id =
                service
                    .connection_id
                    .ok_or_else(|| RemoteError::NotConnected {
                        service: service.service.clone(),
                    })?;
            let path = site_path(
                service.site_id,
                &format!("publicize-connections/{connection_id}/delete"),
            );
            self.api.post_unit(&path, &serde_json::json!({})).await
        })
        .await
    }

    #[instrument(skip_all, fields(site_id = blog.site_id))]
    async fn sync_settings(&self, blog: &Blog) -> Result<RemoteBlogSettings, RemoteError> {
        observed("sync_settings", async {
            let response: SiteSettingsResponse = self
                .api
                .get(&site_path(blog.site_id, "settings"), None)
                .await?;
            Ok(mapping::settings_from_response(response))
        })
        .await
    }

    #[instrument(skip_all, fields(site_id = blog.site_id))]
    async fn update_settings(&self, blog: &Blog) -> Result<(), RemoteError> {
        observed("update_settings", async {
            let settings = blog.settings.as_ref().ok_or(RemoteError::MissingSettings {
                site_id: blog.site_id,
            })?;
            let body = mapping::update_request_from_settings(settings);
            let response: SettingsUpdateResponse = self
                .api
                .post(&site_path(blog.site_id, "settings"), &body)
                .await?;
            match response.updated {
                Some(updated) if !updated.is_null() => Ok(()),
                _ => Err(RemoteError::Rejected),
            }
        })
        .await
    }
}
