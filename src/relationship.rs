use crate::request::{segment, ApiRequest};
use crate::{Client, Error, UserId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A change to the relationship between the authenticated user and another user.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipAction {
    /// Follow the user, or request to if their account is private.
    Follow,
    /// Stop following the user.
    Unfollow,
    /// Block the user.
    Block,
    /// Lift a block.
    Unblock,
    /// Accept a pending follow request.
    Approve,
    /// Reject a pending follow request.
    Deny,
}

impl RelationshipAction {
    /// Every action the relationship endpoint accepts.
    pub const ALL: [RelationshipAction; 6] = [
        RelationshipAction::Follow,
        RelationshipAction::Unfollow,
        RelationshipAction::Block,
        RelationshipAction::Unblock,
        RelationshipAction::Approve,
        RelationshipAction::Deny,
    ];

    /// The value sent in the `action` form field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RelationshipAction::Follow => "follow",
            RelationshipAction::Unfollow => "unfollow",
            RelationshipAction::Block => "block",
            RelationshipAction::Unblock => "unblock",
            RelationshipAction::Approve => "approve",
            RelationshipAction::Deny => "deny",
        }
    }
}

impl AsRef<str> for RelationshipAction {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RelationshipAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationshipAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<RelationshipAction, Error> {
        RelationshipAction::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| Error::InvalidAction(s.to_owned()))
    }
}

impl Client {
    /// Get the relationship between the authenticated user and another user.
    #[tracing::instrument(skip(self, user))]
    pub async fn get_user_relationship(&self, user: impl Into<UserId>) -> Result<Value, Error> {
        self.call(
            ApiRequest::get(format!("users/{}/relationship", segment(user.into()))).auth(true),
        )
        .await
    }

    /// Follow, unfollow, block, unblock, approve or deny a user.
    ///
    /// `action` may be a [`RelationshipAction`] or its wire name; anything else fails with
    /// [`Error::InvalidAction`] before a request is made.
    #[tracing::instrument(skip(self, action, user))]
    pub async fn modify_relationship(
        &self,
        action: impl AsRef<str>,
        user: impl Into<UserId>,
    ) -> Result<Value, Error> {
        let action: RelationshipAction = action.as_ref().parse()?;
        let user = user.into();
        if user.0.is_empty() {
            return Err(Error::InvalidAction(user.0));
        }
        tracing::info!(%action, %user, "modifying relationship");
        self.call(
            ApiRequest::post(format!("users/{}/relationship", segment(&user)))
                .auth(true)
                .param("action", action),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::RelationshipAction;
    use crate::client::tests::mocked;
    use crate::Error;
    use mockito::Matcher;

    #[test]
    fn parse_actions() {
        for action in RelationshipAction::ALL {
            assert_eq!(action.as_str().parse::<RelationshipAction>().unwrap(), action);
        }
        assert!(matches!(
            "nonsense".parse::<RelationshipAction>(),
            Err(Error::InvalidAction(action)) if action == "nonsense"
        ));
    }

    #[tokio::test]
    async fn follow_posts_action() {
        let (mut server, mut client) = mocked("KEY123").await;
        client.set_access_token("TOKEN");
        let m = server
            .mock("POST", "/v1/users/42/relationship")
            .match_query(Matcher::Exact("access_token=TOKEN".into()))
            .match_body(Matcher::UrlEncoded("action".into(), "follow".into()))
            .with_body(r#"{"data": {"outgoing_status": "follows"}}"#)
            .create_async()
            .await;
        let response = client.modify_relationship("follow", 42_u64).await.unwrap();
        assert_eq!(response["data"]["outgoing_status"], "follows");
        m.assert_async().await;
    }

    #[tokio::test]
    async fn typed_action_is_accepted() {
        let (mut server, mut client) = mocked("KEY123").await;
        client.set_access_token("TOKEN");
        let m = server
            .mock("POST", "/v1/users/42/relationship")
            .match_query(Matcher::Any)
            .match_body(Matcher::Exact("action=unblock".into()))
            .with_body("{}")
            .create_async()
            .await;
        client
            .modify_relationship(RelationshipAction::Unblock, 42_u64)
            .await
            .unwrap();
        m.assert_async().await;
    }

    #[tokio::test]
    async fn invalid_action_makes_no_request() {
        let (mut server, mut client) = mocked("KEY123").await;
        client.set_access_token("TOKEN");
        let m = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        assert!(matches!(
            client.modify_relationship("nonsense", 42_u64).await,
            Err(Error::InvalidAction(action)) if action == "nonsense"
        ));
        assert!(matches!(
            client.modify_relationship("follow", "").await,
            Err(Error::InvalidAction(target)) if target.is_empty()
        ));
        m.assert_async().await;
    }

    #[tokio::test]
    async fn user_id_stays_in_its_segment() {
        let (mut server, mut client) = mocked("KEY123").await;
        client.set_access_token("TOKEN");
        let m = server
            .mock("POST", "/v1/users/42%3Fx%3D/relationship")
            .match_query(Matcher::Exact("access_token=TOKEN".into()))
            .match_body(Matcher::Exact("action=follow".into()))
            .with_body("{}")
            .create_async()
            .await;
        let stray = server
            .mock("POST", "/v1/users/42")
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        client.modify_relationship("follow", "42?x=").await.unwrap();
        m.assert_async().await;
        stray.assert_async().await;
    }

    #[tokio::test]
    async fn relationship_requires_token() {
        let (_server, client) = mocked("KEY123").await;
        assert!(matches!(
            client.modify_relationship("follow", 42_u64).await,
            Err(Error::AuthenticationRequired { .. })
        ));
        assert!(matches!(
            client.get_user_relationship(42_u64).await,
            Err(Error::AuthenticationRequired { .. })
        ));
    }
}
