use crate::request::{segment, ApiRequest};
use crate::{Client, Error};
use serde_json::Value;

impl Client {
    /// Search for tags by name.
    #[tracing::instrument(skip(self))]
    pub async fn search_tags(&self, name: &str) -> Result<Value, Error> {
        self.call(ApiRequest::get("tags/search").param("q", name))
            .await
    }

    /// Get information about a tag.
    #[tracing::instrument(skip(self))]
    pub async fn get_tag(&self, name: &str) -> Result<Value, Error> {
        self.call(ApiRequest::get(format!("tags/{}", segment(name))))
            .await
    }

    /// Get the media most recently tagged with `name`.
    #[tracing::instrument(skip(self))]
    pub async fn get_tag_media(&self, name: &str, limit: Option<u32>) -> Result<Value, Error> {
        self.call(
            ApiRequest::get(format!("tags/{}/media/recent", segment(name)))
                .limit(limit),
        )
        .await
    }
}
