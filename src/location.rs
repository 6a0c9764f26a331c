use crate::request::{segment, ApiRequest};
use crate::{Client, Error};
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A location ID.
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
pub struct LocationId(pub String);

impl From<u64> for LocationId {
    fn from(id: u64) -> LocationId {
        LocationId(id.to_string())
    }
}

impl Client {
    /// Get information about a location.
    #[tracing::instrument(skip(self, id))]
    pub async fn get_location(&self, id: impl Into<LocationId>) -> Result<Value, Error> {
        self.call(ApiRequest::get(format!("locations/{}", segment(id.into()))))
            .await
    }

    /// Get the most recent media published at a location.
    #[tracing::instrument(skip(self, id))]
    pub async fn get_location_media(&self, id: impl Into<LocationId>) -> Result<Value, Error> {
        self.call(ApiRequest::get(format!("locations/{}/media/recent", segment(id.into()))))
            .await
    }

    /// Search for locations around the given coordinates. `distance` is in metres and defaults to
    /// 1km on the server.
    #[tracing::instrument(skip(self))]
    pub async fn search_locations(
        &self,
        lat: f64,
        lng: f64,
        distance: Option<u32>,
    ) -> Result<Value, Error> {
        let mut request = ApiRequest::get("locations/search")
            .param("lat", lat)
            .param("lng", lng);
        if let Some(distance) = distance {
            request = request.param("distance", distance);
        }
        self.call(request).await
    }
}
