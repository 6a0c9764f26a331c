/// Errors that might occur when using the library.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The client configuration is missing a field required by the operation, or a field was
    /// provided empty.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A login URL was requested with a scope outside of the known [`Scope`][`crate::Scope`]
    /// set.
    #[error("invalid scope: {0:?}")]
    InvalidScope(String),

    /// A relationship change was requested with an unknown
    /// [`RelationshipAction`][`crate::RelationshipAction`] or without a target user. Holds the
    /// rejected action name, or the empty target ID.
    #[error("invalid relationship action or target: {0:?}")]
    InvalidAction(String),

    /// The endpoint needs an access token and none is set on the client.
    #[error("endpoint {endpoint} requires an access token")]
    AuthenticationRequired {
        /// Path of the endpoint that was called.
        endpoint: String,
    },

    /// Request parameters could not be flattened into key/value pairs.
    #[error("parameter serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// An HTTP client error (connection failures and undecodable response bodies).
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
}
