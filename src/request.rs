use crate::Error;
use hmac::{Hmac, Mac};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use sha2::Sha256;
use std::collections::BTreeMap;
use std::fmt::Display;

/// Query parameter carrying the request signature.
pub(crate) const SIGNATURE_PARAM: &str = "sig";

pub(crate) type Params = BTreeMap<String, String>;

/// One call against the REST API, before credentials are attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ApiRequest {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) auth: bool,
    pub(crate) params: Params,
}

impl ApiRequest {
    pub(crate) fn new(method: Method, path: impl Into<String>) -> ApiRequest {
        ApiRequest {
            method,
            path: path.into(),
            auth: false,
            params: Params::new(),
        }
    }

    pub(crate) fn get(path: impl Into<String>) -> ApiRequest {
        ApiRequest::new(Method::GET, path)
    }

    pub(crate) fn post(path: impl Into<String>) -> ApiRequest {
        ApiRequest::new(Method::POST, path)
    }

    pub(crate) fn delete(path: impl Into<String>) -> ApiRequest {
        ApiRequest::new(Method::DELETE, path)
    }

    pub(crate) fn auth(mut self, auth: bool) -> ApiRequest {
        self.auth = auth;
        self
    }

    pub(crate) fn param(mut self, key: &str, value: impl ToString) -> ApiRequest {
        self.params.insert(key.to_owned(), value.to_string());
        self
    }

    /// Adds `count` unless the limit is absent or zero.
    pub(crate) fn limit(self, limit: Option<u32>) -> ApiRequest {
        match limit {
            Some(count) if count > 0 => self.param("count", count),
            _ => self,
        }
    }

    /// Flattens a serializable struct into parameters, skipping `null` fields.
    pub(crate) fn params<T: Serialize>(mut self, params: &T) -> Result<ApiRequest, Error> {
        match serde_json::to_value(params)? {
            Value::Object(map) => {
                for (key, value) in map {
                    match value {
                        Value::Null => {}
                        Value::String(s) => {
                            self.params.insert(key, s);
                        }
                        other => {
                            self.params.insert(key, other.to_string());
                        }
                    }
                }
                Ok(self)
            }
            other => Err(Error::Serialize(serde::ser::Error::custom(format!(
                "expected a map of parameters, got {}",
                other
            )))),
        }
    }

    /// Whether call parameters go in a form body rather than the query string.
    pub(crate) fn has_form_body(&self) -> bool {
        self.method == Method::POST
    }
}

/// Percent-encodes a caller-supplied value for use as a single path segment.
pub(crate) fn segment(value: impl Display) -> String {
    urlencoding::encode(&value.to_string()).into_owned()
}

/// The string the signature is computed over: `/<path>` followed by `|key=value` for every
/// parameter in ascending key order.
pub(crate) fn signature_base(path: &str, params: &Params) -> String {
    let mut base = format!("/{}", path.trim_start_matches('/'));
    for (key, value) in params {
        base.push('|');
        base.push_str(key);
        base.push('=');
        base.push_str(value);
    }
    base
}

/// Hex-encoded HMAC-SHA256 of [`signature_base`] keyed by the API secret.
pub(crate) fn sign(secret: &str, path: &str, params: &Params) -> Result<String, Error> {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
        .map_err(|e| Error::Configuration(format!("unusable api secret: {}", e)))?;
    mac.update(signature_base(path, params).as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}
