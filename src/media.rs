use crate::request::{segment, ApiRequest};
use crate::{Client, Error};
use chrono::{DateTime, Utc};
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A media ID, e.g. `657988443280050001_25025320`.
#[allow(clippy::module_name_repetitions)]
#[derive(
    Clone,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct MediaId(pub String);

impl From<&str> for MediaId {
    fn from(id: &str) -> MediaId {
        MediaId(id.to_owned())
    }
}

impl From<u64> for MediaId {
    fn from(id: u64) -> MediaId {
        MediaId(id.to_string())
    }
}

/// Parameters of a media search around a point.
///
/// ```
/// # use instagram::MediaSearch;
/// let search = MediaSearch::new(48.858844, 2.294351).distance(5000);
/// ```
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct MediaSearch {
    lat: f64,
    lng: f64,
    distance: u32,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    min_timestamp: Option<DateTime<Utc>>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    max_timestamp: Option<DateTime<Utc>>,
}

impl MediaSearch {
    /// Default search distance, in metres.
    pub const DEFAULT_DISTANCE: u32 = 1000;

    /// Search around the given coordinates within [`Self::DEFAULT_DISTANCE`].
    pub fn new(lat: f64, lng: f64) -> MediaSearch {
        MediaSearch {
            lat,
            lng,
            distance: MediaSearch::DEFAULT_DISTANCE,
            min_timestamp: None,
            max_timestamp: None,
        }
    }

    /// Search radius in metres. The API caps it at 5km.
    pub fn distance(mut self, distance: u32) -> MediaSearch {
        self.distance = distance;
        self
    }

    /// Only return media taken after this time.
    pub fn min_timestamp<T: Into<Option<DateTime<Utc>>>>(mut self, min_timestamp: T) -> MediaSearch {
        self.min_timestamp = min_timestamp.into();
        self
    }

    /// Only return media taken before this time.
    pub fn max_timestamp<T: Into<Option<DateTime<Utc>>>>(mut self, max_timestamp: T) -> MediaSearch {
        self.max_timestamp = max_timestamp.into();
        self
    }
}

impl Client {
    /// Search for media taken around a location.
    #[tracing::instrument(skip(self))]
    pub async fn search_media(&self, search: &MediaSearch) -> Result<Value, Error> {
        self.call(ApiRequest::get("media/search").params(search)?)
            .await
    }

    /// Get information about a media object. The access token is used if there is one.
    #[tracing::instrument(skip(self, id))]
    pub async fn get_media(&self, id: impl Into<MediaId>) -> Result<Value, Error> {
        self.call(
            ApiRequest::get(format!("media/{}", segment(id.into()))).auth(self.has_access_token()),
        )
        .await
    }

    /// Get the currently popular media.
    #[tracing::instrument(skip(self))]
    pub async fn get_popular_media(&self) -> Result<Value, Error> {
        self.call(ApiRequest::get("media/popular")).await
    }

    /// List the users who have liked a media object.
    #[tracing::instrument(skip(self, id))]
    pub async fn get_media_likes(&self, id: impl Into<MediaId>) -> Result<Value, Error> {
        self.call(ApiRequest::get(format!("media/{}/likes", segment(id.into()))).auth(true))
            .await
    }

    /// Like a media object as the authenticated user.
    #[tracing::instrument(skip(self, id))]
    pub async fn like_media(&self, id: impl Into<MediaId>) -> Result<Value, Error> {
        self.call(ApiRequest::post(format!("media/{}/likes", segment(id.into()))).auth(true))
            .await
    }

    /// Remove the authenticated user's like from a media object.
    #[tracing::instrument(skip(self, id))]
    pub async fn unlike_media(&self, id: impl Into<MediaId>) -> Result<Value, Error> {
        self.call(ApiRequest::delete(format!("media/{}/likes", segment(id.into()))).auth(true))
            .await
    }

    /// List the comments on a media object.
    #[tracing::instrument(skip(self, id))]
    pub async fn get_media_comments(&self, id: impl Into<MediaId>) -> Result<Value, Error> {
        self.call(ApiRequest::get(format!("media/{}/comments", segment(id.into()))))
            .await
    }

    /// Comment on a media object.
    #[tracing::instrument(skip(self, id, text))]
    pub async fn add_media_comment(
        &self,
        id: impl Into<MediaId>,
        text: &str,
    ) -> Result<Value, Error> {
        self.call(
            ApiRequest::post(format!("media/{}/comments", segment(id.into())))
                .auth(true)
                .param("text", text),
        )
        .await
    }

    /// Delete a comment, either on the authenticated user's media or authored by them.
    #[tracing::instrument(skip(self, id))]
    pub async fn delete_media_comment(
        &self,
        id: impl Into<MediaId>,
        comment_id: &str,
    ) -> Result<Value, Error> {
        self.call(
            ApiRequest::delete(format!(
                "media/{}/comments/{}",
                segment(id.into()),
                segment(comment_id)
            ))
            .auth(true),
        )
        .await
    }
}
