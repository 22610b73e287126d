//! REST adapter for the remote blog service.

pub mod api;
pub mod mapping;
pub mod remote;

pub use api::RestApi;
pub use remote::RestBlogServiceRemote;
