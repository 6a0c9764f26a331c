use crate::request::{segment, ApiRequest};
use crate::{Client, Error};
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A user ID.
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
pub struct UserId(pub String);

impl From<u64> for UserId {
    fn from(id: u64) -> UserId {
        UserId(id.to_string())
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> UserId {
        UserId(id.to_owned())
    }
}

/// Either the user owning the access token (`self` on the wire) or a user by ID.
///
/// Endpoints addressed at [`UserRef::Current`] always need an access token.
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum UserRef {
    /// The authenticated user.
    #[default]
    Current,
    /// Any user.
    Id(UserId),
}

impl From<UserId> for UserRef {
    fn from(id: UserId) -> UserRef {
        UserRef::Id(id)
    }
}

impl From<u64> for UserRef {
    fn from(id: u64) -> UserRef {
        UserRef::Id(id.into())
    }
}

impl From<&str> for UserRef {
    fn from(id: &str) -> UserRef {
        if id == "self" {
            UserRef::Current
        } else {
            UserRef::Id(id.into())
        }
    }
}

impl fmt::Display for UserRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRef::Current => f.write_str("self"),
            UserRef::Id(id) => write!(f, "{}", id),
        }
    }
}

impl Client {
    /// Endpoints on "self" need a token; other users are fetched with the token if there is one.
    fn user_auth(&self, user: &UserRef) -> bool {
        matches!(user, UserRef::Current) || self.has_access_token()
    }

    /// Search for users by name.
    #[tracing::instrument(skip(self))]
    pub async fn search_users(&self, name: &str, limit: Option<u32>) -> Result<Value, Error> {
        self.call(ApiRequest::get("users/search").param("q", name).limit(limit))
            .await
    }

    /// Get basic information about a user.
    #[tracing::instrument(skip(self, user))]
    pub async fn get_user(&self, user: impl Into<UserRef>) -> Result<Value, Error> {
        let user = user.into();
        let auth = self.user_auth(&user);
        self.call(ApiRequest::get(format!("users/{}", segment(&user))).auth(auth))
            .await
    }

    /// Get the authenticated user's feed.
    #[tracing::instrument(skip(self))]
    pub async fn get_user_feed(&self, limit: Option<u32>) -> Result<Value, Error> {
        self.call(ApiRequest::get("users/self/feed").auth(true).limit(limit))
            .await
    }

    /// Get the most recent media published by a user.
    #[tracing::instrument(skip(self, user))]
    pub async fn get_user_media(
        &self,
        user: impl Into<UserRef>,
        limit: Option<u32>,
    ) -> Result<Value, Error> {
        let user = user.into();
        let auth = self.user_auth(&user);
        self.call(
            ApiRequest::get(format!("users/{}/media/recent", segment(&user)))
                .auth(auth)
                .limit(limit),
        )
        .await
    }

    /// Get the media most recently liked by the authenticated user.
    #[tracing::instrument(skip(self))]
    pub async fn get_user_likes(&self, limit: Option<u32>) -> Result<Value, Error> {
        self.call(
            ApiRequest::get("users/self/media/liked")
                .auth(true)
                .limit(limit),
        )
        .await
    }

    /// Get the list of users this user follows.
    #[tracing::instrument(skip(self, user))]
    pub async fn get_user_follows(
        &self,
        user: impl Into<UserRef>,
        limit: Option<u32>,
    ) -> Result<Value, Error> {
        self.call(
            ApiRequest::get(format!("users/{}/follows", segment(user.into())))
                .auth(true)
                .limit(limit),
        )
        .await
    }

    /// Get the list of users this user is followed by.
    #[tracing::instrument(skip(self, user))]
    pub async fn get_user_followers(
        &self,
        user: impl Into<UserRef>,
        limit: Option<u32>,
    ) -> Result<Value, Error> {
        self.call(
            ApiRequest::get(format!("users/{}/followed-by", segment(user.into())))
                .auth(true)
                .limit(limit),
        )
        .await
    }

    /// List the users who have requested to follow the authenticated user.
    #[tracing::instrument(skip(self))]
    pub async fn get_user_requested_by(&self) -> Result<Value, Error> {
        self.call(ApiRequest::get("users/self/requested-by").auth(true))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::{UserId, UserRef};
    use crate::client::tests::mocked;
    use crate::Error;
    use mockito::Matcher;

    #[test]
    fn user_ref_conversions() {
        assert_eq!(UserRef::from("self"), UserRef::Current);
        assert_eq!(UserRef::from(42_u64), UserRef::Id(UserId("42".into())));
        assert_eq!(UserRef::from("1574083").to_string(), "1574083");
        assert_eq!(UserRef::Current.to_string(), "self");
    }

    #[tokio::test]
    async fn user_media_for_self_requires_token() {
        let (mut server, client) = mocked("KEY123").await;
        let m = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        assert!(matches!(
            client.get_user_media(UserRef::Current, None).await,
            Err(Error::AuthenticationRequired { endpoint }) if endpoint == "users/self/media/recent"
        ));
        m.assert_async().await;
    }

    #[tokio::test]
    async fn user_media_by_id_without_token_is_public() {
        let (mut server, client) = mocked("KEY123").await;
        let m = server
            .mock("GET", "/v1/users/42/media/recent")
            .match_query(Matcher::Exact("client_id=KEY123&count=5".into()))
            .with_body("{}")
            .create_async()
            .await;
        client.get_user_media(42_u64, Some(5)).await.unwrap();
        m.assert_async().await;
    }

    #[tokio::test]
    async fn get_user_uses_token_when_present() {
        let (mut server, mut client) = mocked("KEY123").await;
        client.set_access_token("TOKEN");
        let m = server
            .mock("GET", "/v1/users/42")
            .match_query(Matcher::Exact("access_token=TOKEN".into()))
            .with_body(r#"{"data": {"id": "42"}}"#)
            .create_async()
            .await;
        let user = client.get_user(42_u64).await.unwrap();
        assert_eq!(user["data"]["id"], "42");
        m.assert_async().await;
    }

    #[tokio::test]
    async fn search_users_omits_zero_limit() {
        let (mut server, client) = mocked("KEY123").await;
        let m = server
            .mock("GET", "/v1/users/search")
            .match_query(Matcher::Exact("client_id=KEY123&q=jack".into()))
            .with_body(r#"{"data": []}"#)
            .create_async()
            .await;
        client.search_users("jack", Some(0)).await.unwrap();
        m.assert_async().await;
    }

    #[tokio::test]
    async fn follows_always_authenticated() {
        let (_server, client) = mocked("KEY123").await;
        assert!(matches!(
            client.get_user_follows(42_u64, None).await,
            Err(Error::AuthenticationRequired { .. })
        ));
        assert!(matches!(
            client.get_user_followers(UserRef::Current, None).await,
            Err(Error::AuthenticationRequired { .. })
        ));
        assert!(matches!(
            client.get_user_likes(None).await,
            Err(Error::AuthenticationRequired { .. })
        ));
    }

    #[tokio::test]
    async fn user_ids_are_escaped() {
        let (mut server, client) = mocked("KEY123").await;
        let m = server
            .mock("GET", "/v1/users/1574083%2Ffollows")
            .match_query(Matcher::Exact("client_id=KEY123".into()))
            .with_body("{}")
            .create_async()
            .await;
        client.get_user("1574083/follows").await.unwrap();
        m.assert_async().await;
    }

    #[tokio::test]
    async fn followers_path() {
        let (mut server, mut client) = mocked("KEY123").await;
        client.set_access_token("TOKEN");
        let m = server
            .mock("GET", "/v1/users/self/followed-by")
            .match_query(Matcher::Exact("access_token=TOKEN&count=50".into()))
            .with_body("{}")
            .create_async()
            .await;
        client.get_user_followers("self", Some(50)).await.unwrap();
        m.assert_async().await;
    }
}
