//! Success/failure callback facade over [`BlogServiceRemote`].
//!
//! Every method returns immediately with the handle of a spawned task. The
//! task resolves the remote call and then fires exactly one callback: the
//! success callback with the payload, or the failure callback with the error.
//! A missing callback for the outcome means nothing fires.

use std::{future::Future, sync::Arc};

use tokio::{
    runtime::{Handle, TryCurrentError},
    task::JoinHandle,
};
use tracing::debug;

use crate::application::remote::{BlogServiceRemote, RemoteError};
use crate::domain::{
    Authorization, Blog, BlogOptions, PostFormats, PublicizeConnection, Publicizer,
    RemoteBlogSettings,
};

pub type Success<T> = Box<dyn FnOnce(T) + Send + 'static>;
pub type Failure = Box<dyn FnOnce(RemoteError) + Send + 'static>;

pub struct CallbackBlogService<R: ?Sized> {
    remote: Arc<R>,
    runtime: Handle,
}

impl<R: ?Sized> Clone for CallbackBlogService<R> {
    fn clone(&self) -> Self {
        Self {
            remote: Arc::clone(&self.remote),
            runtime: self.runtime.clone(),
        }
    }
}

impl<R> CallbackBlogService<R>
where
    R: BlogServiceRemote + ?Sized + 'static,
{
    pub fn new(remote: Arc<R>, runtime: Handle) -> Self {
        Self { remote, runtime }
    }

    /// Binds to the runtime of the calling context.
    pub fn on_current_runtime(remote: Arc<R>) -> Result<Self, TryCurrentError> {
        Ok(Self::new(remote, Handle::try_current()?))
    }

    pub fn remote(&self) -> &Arc<R> {
        &self.remote
    }

    pub fn check_multi_author(
        &self,
        blog: Blog,
        success: Option<Success<bool>>,
        failure: Option<Failure>,
    ) -> JoinHandle<()> {
        let remote = Arc::clone(&self.remote);
        self.complete(
            "check_multi_author",
            async move { remote.check_multi_author(&blog).await },
            success,
            failure,
        )
    }

    pub fn sync_options(
        &self,
        blog: Blog,
        success: Option<Success<BlogOptions>>,
        failure: Option<Failure>,
    ) -> JoinHandle<()> {
        let remote = Arc::clone(&self.remote);
        self.complete(
            "sync_options",
            async move { remote.sync_options(&blog).await },
            success,
            failure,
        )
    }

    pub fn sync_post_formats(
        &self,
        blog: Blog,
        success: Option<Success<PostFormats>>,
        failure: Option<Failure>,
    ) -> JoinHandle<()> {
        let remote = Arc::clone(&self.remote);
        self.complete(
            "sync_post_formats",
            async move { remote.sync_post_formats(&blog).await },
            success,
            failure,
        )
    }

    pub fn sync_connections(
        &self,
        blog: Blog,
        success: Option<Success<Vec<PublicizeConnection>>>,
        failure: Option<Failure>,
    ) -> JoinHandle<()> {
        let remote = Arc::clone(&self.remote);
        self.complete(
            "sync_connections",
            async move { remote.sync_connections(&blog).await },
            success,
            failure,
        )
    }

    pub fn check_authorization(
        &self,
        service: Publicizer,
        success: Option<Success<Authorization>>,
        failure: Option<Failure>,
    ) -> JoinHandle<()> {
        let remote = Arc::clone(&self.remote);
        self.complete(
            "check_authorization",
            async move { remote.check_authorization(&service).await },
            success,
            failure,
        )
    }

    pub fn connect_publicizer(
        &self,
        service: Publicizer,
        keyring_id: u64,
        account: Option<String>,
        success: Option<Success<()>>,
        failure: Option<Failure>,
    ) -> JoinHandle<()> {
        let remote = Arc::clone(&self.remote);
        self.complete(
            "connect_publicizer",
            async move {
                remote
                    .connect_publicizer(&service, keyring_id, account.as_deref())
                    .await
            },
            success,
            failure,
        )
    }

    pub fn disconnect_publicizer(
        &self,
        service: Publicizer,
        success: Option<Success<()>>,
        failure: Option<Failure>,
    ) -> JoinHandle<()> {
        let remote = Arc::clone(&self.remote);
        self.complete(
            "disconnect_publicizer",
            async move { remote.disconnect_publicizer(&service).await },
            success,
            failure,
        )
    }

    pub fn sync_settings(
        &self,
        blog: Blog,
        success: Option<Success<RemoteBlogSettings>>,
        failure: Option<Failure>,
    ) -> JoinHandle<()> {
        let remote = Arc::clone(&self.remote);
        self.complete(
            "sync_settings",
            async move { remote.sync_settings(&blog).await },
            success,
            failure,
        )
    }

    pub fn update_settings(
        &self,
        blog: Blog,
        success: Option<Success<()>>,
        failure: Option<Failure>,
    ) -> JoinHandle<()> {
        let remote = Arc::clone(&self.remote);
        self.complete(
            "update_settings",
            async move { remote.update_settings(&blog).await },
            success,
            failure,
        )
    }

    fn complete<T, Fut>(
        &self,
        operation: &'static str,
        call: Fut,
        success: Option<Success<T>>,
        failure: Option<Failure>,
    ) -> JoinHandle<()>
    where
        T: Send + 'static,
        Fut: Future<Output = Result<T, RemoteError>> + Send + 'static,
    {
        self.runtime.spawn(async move {
            match call.await {
                Ok(value) => match success {
                    Some(callback) => callback(value),
                    None => debug!(operation, "remote call succeeded without a success handler"),
                },
                Err(error) => match failure {
                    Some(callback) => callback(error),
                    None => debug!(
                        operation,
                        error = %error,
                        "remote call failed without a failure handler"
                    ),
                },
            }
        })
    }
}
