//! Authenticated JSON transport shared by the REST adapters.

use std::time::Duration;

use blog_remote_types::ApiErrorBody;
use reqwest::{
    Client, Method, RequestBuilder, Response, StatusCode, Url,
    header::{AUTHORIZATION, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::application::RemoteError;
use crate::config::ApiSettings;
use crate::infra::error::InfraError;

pub type Query<'a> = &'a [(&'a str, String)];

#[derive(Clone, Debug)]
pub struct RestApi {
    client: Client,
    base: Url,
    auth: HeaderValue,
}

impl RestApi {
    pub fn new(base: &Url, token: &str, timeout: Duration) -> Result<Self, InfraError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
            .map_err(|e| InfraError::http_client(format!("invalid api token: {e}")))?;
        auth.set_sensitive(true);
        let client = Client::builder()
            .user_agent(Self::user_agent())
            .timeout(timeout)
            .build()
            .map_err(|e| InfraError::http_client(e.to_string()))?;
        Ok(Self {
            client,
            base: with_trailing_slash(base.clone()),
            auth,
        })
    }

    pub fn from_settings(api: &ApiSettings) -> Result<Self, InfraError> {
        let token = api.token.as_deref().ok_or(InfraError::MissingToken)?;
        Self::new(&api.base_url, token, api.timeout)
    }

    pub fn user_agent() -> &'static str {
        concat!("blog-remote/", env!("CARGO_PKG_VERSION"))
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn auth_header(&self) -> &HeaderValue {
        &self.auth
    }

    pub fn url(&self, path: &str, query: Option<Query<'_>>) -> Result<Url, RemoteError> {
        let mut url = self
            .base
            .join(path.trim_start_matches('/'))
            .map_err(|e| RemoteError::Endpoint(format!("{path}: {e}")))?;
        if let Some(q) = query {
            url.set_query(None);
            let mut qp = url.query_pairs_mut();
            for (k, v) in q {
                qp.append_pair(k, v);
            }
        }
        Ok(url)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<Query<'_>>,
    ) -> Result<T, RemoteError> {
        let url = self.url(path, query)?;
        let resp = self.send(self.client.request(Method::GET, url)).await?;
        Self::handle(resp).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, RemoteError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path, None)?;
        let resp = self
            .send(self.client.request(Method::POST, url).json(body))
            .await?;
        Self::handle(resp).await
    }

    /// POST where only the status matters.
    pub async fn post_unit<B>(&self, path: &str, body: &B) -> Result<(), RemoteError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path, None)?;
        let resp = self
            .send(self.client.request(Method::POST, url).json(body))
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let bytes = resp.bytes().await.map_err(map_transport)?;
            return Err(api_error(status, &bytes));
        }
        Ok(())
    }

    async fn send(&self, req: RequestBuilder) -> Result<Response, RemoteError> {
        let resp = req
            .header(AUTHORIZATION, self.auth.clone())
            .send()
            .await
            .map_err(map_transport)?;
        debug!(status = %resp.status(), url = %resp.url(), "remote response");
        Ok(resp)
    }

    async fn handle<T: DeserializeOwned>(resp: Response) -> Result<T, RemoteError> {
        let status = resp.status();
        let bytes = resp.bytes().await.map_err(map_transport)?;
        if !status.is_success() {
            return Err(api_error(status, &bytes));
        }
        serde_json::from_slice(&bytes)
            .map_err(|e| RemoteError::decode(format!("failed to parse body: {e}")))
    }
}

fn with_trailing_slash(mut base: Url) -> Url {
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}

fn map_transport(err: reqwest::Error) -> RemoteError {
    if err.is_timeout() {
        RemoteError::Timeout
    } else {
        RemoteError::from_transport(err)
    }
}

fn api_error(status: StatusCode, bytes: &[u8]) -> RemoteError {
    let body: ApiErrorBody = serde_json::from_slice(bytes).unwrap_or_default();
    let code = if body.error.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown_error")
            .to_ascii_lowercase()
            .replace(' ', "_")
    } else {
        body.error
    };
    let message = if body.message.is_empty() {
        String::from_utf8_lossy(bytes).trim().to_string()
    } else {
        body.message
    };
    RemoteError::Api {
        status: status.as_u16(),
        code,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> RestApi {
        let base = Url::parse(base).expect("base url");
        RestApi::new(&base, "secret", Duration::from_secs(5)).expect("rest api")
    }

    #[test]
    fn base_keeps_version_path() -> Result<(), RemoteError> {
        let api = api("https://public-api.example.com/rest/v1.1");
        let url = api.url("sites/42/settings", None)?;
        assert_eq!(
            url.as_str(),
            "https://public-api.example.com/rest/v1.1/sites/42/settings"
        );
        Ok(())
    }

    #[test]
    fn query_pairs_are_encoded() -> Result<(), RemoteError> {
        let api = api("https://public-api.example.com/rest/v1.1/");
        let url = api.url("/sites/1/users", Some(&[("authors_only", "1".to_string())]))?;
        assert_eq!(url.query(), Some("authors_only=1"));
        Ok(())
    }

    #[test]
    fn auth_header_is_bearer_and_sensitive() {
        let api = api("https://public-api.example.com/");
        assert_eq!(api.auth_header().to_str().expect("ascii"), "Bearer secret");
        assert!(api.auth_header().is_sensitive());
    }

    #[test]
    fn api_error_prefers_structured_body() {
        let err = api_error(
            StatusCode::FORBIDDEN,
            br#"{"error":"unauthorized","message":"User cannot manage options"}"#,
        );
        assert!(err.is_unauthorized());
        assert_eq!(
            err,
            RemoteError::Api {
                status: 403,
                code: "unauthorized".into(),
                message: "User cannot manage options".into(),
            }
        );
    }

    #[test]
    fn api_error_falls_back_to_status_reason() {
        let err = api_error(StatusCode::BAD_GATEWAY, b"upstream down");
        assert_eq!(
            err,
            RemoteError::Api {
                status: 502,
                code: "bad_gateway".into(),
                message: "upstream down".into(),
            }
        );
    }
}
