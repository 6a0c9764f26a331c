use crate::request::{self, ApiRequest, Params, SIGNATURE_PARAM};
use crate::{Config, Error};
use reqwest::{Method, RequestBuilder, Response};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

const RATE_LIMIT_HEADER: &str = "x-ratelimit-remaining";

/// HTTP client for the Instagram API.
///
/// Clones share the last observed rate limit. The access token belongs to each clone and can
/// only be changed through `&mut self`.
#[derive(Clone)]
pub struct Client {
    pub(crate) base_url: Cow<'static, str>,
    pub(crate) client: reqwest::Client,
    api_key: String,
    api_secret: Option<String>,
    callback_url: Option<String>,
    access_token: Option<String>,
    signed_header: bool,
    rate_limit: Arc<Mutex<Option<u32>>>,
}

impl Client {
    /// Creates a new `Client` with the default base URL, `https://api.instagram.com/`. Use
    /// [`Client::with_base_url`] to change the base URL.
    ///
    /// A bare API key (`Client::new("KEY123")`) is enough for public endpoints. The OAuth flow
    /// and signed requests need a [`Config::Authorized`].
    pub fn new(config: impl Into<Config>) -> Result<Client, Error> {
        const USER_AGENT: &str = concat!("instagram-rs/", env!("CARGO_PKG_VERSION"));

        let config = config.into();
        config.validate()?;
        let (api_key, api_secret, callback_url) = match config {
            Config::Public { api_key } => (api_key, None, None),
            Config::Authorized {
                api_key,
                api_secret,
                callback_url,
            } => (api_key, Some(api_secret), Some(callback_url)),
        };

        Ok(Client {
            base_url: Cow::Borrowed("https://api.instagram.com/"),
            client: reqwest::Client::builder().user_agent(USER_AGENT).build()?,
            api_key,
            api_secret,
            callback_url,
            access_token: None,
            signed_header: false,
            rate_limit: Arc::default(),
        })
    }

    /// Replaces the base URL. The REST API lives under `<base>v1/` and the OAuth endpoints under
    /// `<base>oauth/`.
    #[must_use]
    pub fn with_base_url(mut self, mut base_url: String) -> Client {
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = Cow::Owned(base_url);
        self
    }

    /// Client ID of the application.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Client secret of the application, if configured.
    #[must_use]
    pub fn api_secret(&self) -> Option<&str> {
        self.api_secret.as_deref()
    }

    /// Redirect URI of the application, if configured.
    #[must_use]
    pub fn callback_url(&self) -> Option<&str> {
        self.callback_url.as_deref()
    }

    /// The access token attached to authenticated calls.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Sets the access token, e.g. one obtained earlier through [`Client::get_oauth_token`].
    pub fn set_access_token(&mut self, access_token: impl Into<String>) {
        self.access_token = Some(access_token.into());
    }

    /// Forgets the access token. Subsequent calls are made with the client ID only.
    pub fn clear_access_token(&mut self) {
        self.access_token = None;
    }

    /// Whether requests carry a `sig` parameter.
    #[must_use]
    pub fn signed_header(&self) -> bool {
        self.signed_header
    }

    /// Enables or disables request signing. Enabling requires an API secret.
    pub fn set_signed_header(&mut self, enabled: bool) -> Result<(), Error> {
        if enabled && self.api_secret.is_none() {
            return Err(Error::Configuration(
                "signed requests require an api secret".into(),
            ));
        }
        self.signed_header = enabled;
        Ok(())
    }

    /// Remaining calls in the current window, as reported by the `X-RateLimit-Remaining` header
    /// of the most recent response. `None` before the first call or when that response carried no
    /// such header.
    #[must_use]
    pub fn rate_limit(&self) -> Option<u32> {
        *self
            .rate_limit
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn has_access_token(&self) -> bool {
        self.access_token.is_some()
    }

    pub(crate) fn secret_for(&self, operation: &str) -> Result<&str, Error> {
        self.api_secret()
            .ok_or_else(|| Error::Configuration(format!("{} requires an api secret", operation)))
    }

    pub(crate) fn callback_for(&self, operation: &str) -> Result<&str, Error> {
        self.callback_url()
            .ok_or_else(|| Error::Configuration(format!("{} requires a callback url", operation)))
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    #[inline]
    pub(crate) fn request(&self, method: Method, url: &str) -> RequestBuilder {
        tracing::info!(%method, url, "Client::request");
        self.client.request(method, url)
    }

    /// Attaches credentials (and the signature when enabled), sends the request and returns the
    /// parsed body as-is.
    pub(crate) async fn call(&self, api: ApiRequest) -> Result<Value, Error> {
        let mut credentials = Params::new();
        if api.auth {
            let token = self
                .access_token
                .as_deref()
                .ok_or_else(|| Error::AuthenticationRequired {
                    endpoint: api.path.clone(),
                })?;
            credentials.insert("access_token".into(), token.into());
        } else {
            credentials.insert("client_id".into(), self.api_key.clone());
        }

        let mut query = credentials.clone();
        if !api.has_form_body() {
            query.extend(api.params.clone());
        }
        if self.signed_header {
            let mut signed = credentials;
            signed.extend(api.params.clone());
            let sig = request::sign(self.secret_for("signed requests")?, &api.path, &signed)?;
            query.insert(SIGNATURE_PARAM.into(), sig);
        }

        let mut builder = self
            .request(api.method.clone(), &self.url(&format!("v1/{}", api.path)))
            .query(&query);
        if api.has_form_body() && !api.params.is_empty() {
            builder = builder.form(&api.params);
        }

        let response = builder.send().await?;
        self.record_rate_limit(&response);
        Ok(response.json().await?)
    }

    fn record_rate_limit(&self, response: &Response) {
        let remaining: Option<u32> = response
            .headers()
            .get(RATE_LIMIT_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse().ok());
        tracing::debug!(status = %response.status(), ?remaining, "rate limit");
        *self
            .rate_limit
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = remaining;
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key)
            .field("callback_url", &self.callback_url)
            .field("has_access_token", &self.access_token.is_some())
            .field("signed_header", &self.signed_header)
            .field("rate_limit", &self.rate_limit())
            .finish_non_exhaustive()
    }
}
