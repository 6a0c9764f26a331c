use crate::Error;
use std::env;

const API_KEY_VAR: &str = "INSTAGRAM_API_KEY";
const API_SECRET_VAR: &str = "INSTAGRAM_API_SECRET";
const CALLBACK_URL_VAR: &str = "INSTAGRAM_CALLBACK_URL";

/// Credentials a [`Client`][`crate::Client`] is created with.
///
/// Use [`Config::Public`] (or just pass the API key as a string) when you only read public data.
/// The OAuth flow and signed requests need [`Config::Authorized`].
#[derive(Clone, PartialEq, Eq)]
pub enum Config {
    /// Only the client ID is known.
    Public {
        /// Client ID of the registered application.
        api_key: String,
    },
    /// Full application credentials.
    Authorized {
        /// Client ID of the registered application.
        api_key: String,
        /// Client secret of the registered application.
        api_secret: String,
        /// Redirect URI registered for the application.
        callback_url: String,
    },
}

impl Config {
    /// Reads the configuration from `INSTAGRAM_API_KEY`, `INSTAGRAM_API_SECRET` and
    /// `INSTAGRAM_CALLBACK_URL`.
    ///
    /// The secret and callback URL must be set together; with neither set the result is
    /// [`Config::Public`].
    pub fn from_env() -> Result<Config, Error> {
        Config::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, Error> {
        let api_key = lookup(API_KEY_VAR)
            .ok_or_else(|| Error::Configuration(format!("{} is not set", API_KEY_VAR)))?;
        match (lookup(API_SECRET_VAR), lookup(CALLBACK_URL_VAR)) {
            (None, None) => Ok(Config::Public { api_key }),
            (Some(api_secret), Some(callback_url)) => Ok(Config::Authorized {
                api_key,
                api_secret,
                callback_url,
            }),
            (Some(_), None) => Err(Error::Configuration(format!(
                "{} is set but {} is not",
                API_SECRET_VAR, CALLBACK_URL_VAR
            ))),
            (None, Some(_)) => Err(Error::Configuration(format!(
                "{} is set but {} is not",
                CALLBACK_URL_VAR, API_SECRET_VAR
            ))),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        let fields = match self {
            Config::Public { api_key } => vec![("api key", api_key.as_str())],
            Config::Authorized {
                api_key,
                api_secret,
                callback_url,
            } => vec![
                ("api key", api_key.as_str()),
                ("api secret", api_secret.as_str()),
                ("callback url", callback_url.as_str()),
            ],
        };
        match fields.into_iter().find(|(_, value)| value.is_empty()) {
            Some((name, _)) => Err(Error::Configuration(format!("{} must not be empty", name))),
            None => Ok(()),
        }
    }
}

impl From<&str> for Config {
    fn from(api_key: &str) -> Config {
        Config::Public {
            api_key: api_key.to_owned(),
        }
    }
}

impl From<String> for Config {
    fn from(api_key: String) -> Config {
        Config::Public { api_key }
    }
}

// Keeps the secret out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Config::Public { api_key } => f.debug_struct("Public").field("api_key", api_key).finish(),
            Config::Authorized {
                api_key,
                callback_url,
                ..
            } => f
                .debug_struct("Authorized")
                .field("api_key", api_key)
                .field("api_secret", &"<redacted>")
                .field("callback_url", callback_url)
                .finish(),
        }
    }
}
