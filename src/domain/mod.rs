//! Domain entities exchanged with the remote blog service.

pub mod blog;
pub mod error;
pub mod publicize;
pub mod settings;

pub use blog::{Blog, BlogOptions, PostFormats};
pub use error::DomainError;
pub use publicize::{Authorization, KeyringAccount, PublicizeConnection, Publicizer};
pub use settings::{
    BlogPrivacy, CommentSortOrder, DiscussionSettings, RelatedPostsSettings, RemoteBlogSettings,
};
