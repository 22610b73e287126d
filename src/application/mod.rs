//! Application layer: the remote service contract and its completion styles.

pub mod callbacks;
pub mod remote;

pub use callbacks::{CallbackBlogService, Failure, Success};
pub use remote::{BlogServiceRemote, RemoteError};
