//! A client library for the [Instagram](https://www.instagram.com/developer/) REST API: OAuth
//! login URLs and token exchange, optional request signing, and thin wrappers around the user,
//! relationship, media, tag and location endpoints.
//!
//! ```no_run
//! use instagram::{Client, Config, RelationshipAction, Scope};
//!
//! # async fn f() -> Result<(), Box<dyn std::error::Error>> {
//! let mut client = Client::new(Config::Authorized {
//!     api_key: "YOUR_CLIENT_ID".into(),
//!     api_secret: "YOUR_CLIENT_SECRET".into(),
//!     callback_url: "https://example.com/callback".into(),
//! })?;
//!
//! // Send the user here, then pick the code up on the callback URL
//! let url = client.login_url([Scope::Basic, Scope::Relationships])?;
//! # let code = "";
//! client.authorize(code).await?;
//!
//! let feed = client.get_user_feed(Some(10)).await?;
//! client.modify_relationship(RelationshipAction::Follow, 1574083_u64).await?;
//! println!("{} calls left", client.rate_limit().unwrap_or_default());
//! # Ok(())
//! # }
//! ```
//!
//! Responses are returned as [`serde_json::Value`] without interpretation, including error
//! payloads reported by the service.
//!
//! # License
//!
//! instagram-rs is released under the terms of the BSD 3-Clause License.

#![deny(elided_lifetimes_in_paths)]
#![warn(clippy::pedantic, missing_docs)]
#![allow(clippy::missing_errors_doc)]

mod client;
mod config;
mod error;
mod location;
mod media;
mod oauth;
mod relationship;
mod request;
mod scope;
mod tag;
mod user;

pub use crate::client::Client;
pub use crate::config::Config;
pub use crate::error::Error;
pub use crate::location::LocationId;
pub use crate::media::{MediaId, MediaSearch};
pub use crate::oauth::OAuthToken;
pub use crate::relationship::RelationshipAction;
pub use crate::scope::{Scope, DEFAULT_SCOPES};
pub use crate::user::{UserId, UserRef};
