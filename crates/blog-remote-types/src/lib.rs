//! Wire types for the remote blog administration REST API (v1.1).
//!
//! The server is loose about JSON types: identifiers arrive as numbers or
//! strings, booleans as `true`, `1` or `"1"`. Every response type here
//! tolerates those variations through the helpers in [`lenient`].

pub mod error;
pub mod lenient;
pub mod publicize;
pub mod settings;
pub mod site;

pub use error::ApiErrorBody;
pub use publicize::{
    ConnectRequest, ConnectionPayload, ConnectionsResponse, ExternalUserPayload,
    KeyringConnectionPayload, KeyringConnectionsResponse,
};
pub use settings::{SettingsPayload, SettingsUpdateRequest, SettingsUpdateResponse, SiteSettingsResponse};
pub use site::{PostFormatsResponse, SiteResponse, UsersResponse};
