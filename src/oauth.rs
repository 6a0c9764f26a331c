use crate::{Client, Error, Scope};
use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;

/// Response of the token endpoint.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[non_exhaustive]
pub struct OAuthToken {
    /// Token to pass to [`Client::set_access_token`].
    pub access_token: String,
    /// Profile of the user who granted the token.
    #[serde(default)]
    pub user: Option<Value>,
}

impl Client {
    /// Builds the URL users are sent to for authorizing the application.
    ///
    /// `scopes` may be [`Scope`]s or their wire names; [`DEFAULT_SCOPES`][`crate::DEFAULT_SCOPES`]
    /// only asks for `basic`. Fails with [`Error::InvalidScope`] on unknown names and with
    /// [`Error::Configuration`] if no callback URL is configured.
    pub fn login_url<I>(&self, scopes: I) -> Result<String, Error>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let scopes = scopes
            .into_iter()
            .map(|scope| scope.as_ref().parse::<Scope>())
            .collect::<Result<Vec<_>, _>>()?;
        let callback_url = self.callback_for("login url")?;

        Ok(format!(
            "{}?client_id={}&redirect_uri={}&scope={}&response_type=code",
            self.url("oauth/authorize"),
            self.api_key(),
            urlencoding::encode(callback_url),
            scopes
                .iter()
                .map(|scope| scope.as_str())
                .collect::<Vec<_>>()
                .join("+"),
        ))
    }

    /// Exchanges the `code` the user was redirected back with for an access token.
    ///
    /// The token is not stored on the client; see [`Client::authorize`] for that.
    #[tracing::instrument(skip(self, code))]
    pub async fn get_oauth_token(&self, code: &str) -> Result<OAuthToken, Error> {
        let form = [
            ("client_id", self.api_key()),
            ("client_secret", self.secret_for("token exchange")?),
            ("grant_type", "authorization_code"),
            ("redirect_uri", self.callback_for("token exchange")?),
            ("code", code),
        ];

        let token: OAuthToken = self
            .request(Method::POST, &self.url("oauth/access_token"))
            .form(&form)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        tracing::info!(
            user = ?token.user.as_ref().and_then(|user| user.get("username")),
            "obtained access token"
        );
        Ok(token)
    }

    /// Exchanges `code` for an access token and uses it for subsequent calls.
    pub async fn authorize(&mut self, code: &str) -> Result<OAuthToken, Error> {
        let token = self.get_oauth_token(code).await?;
        self.set_access_token(token.access_token.clone());
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::{authorized, mocked};
    use crate::{Client, Error, Scope, DEFAULT_SCOPES};
    use mockito::Matcher;
    use serde_json::json;

    #[test]
    fn default_login_url() {
        let client = Client::new(authorized()).unwrap();
        assert_eq!(
            client.login_url(DEFAULT_SCOPES).unwrap(),
            "https://api.instagram.com/oauth/authorize?client_id=KEY123\
             &redirect_uri=https%3A%2F%2Fexample.com%2Fcallback&scope=basic&response_type=code"
        );
    }

    #[test]
    fn scopes_joined_verbatim() {
        let client = Client::new(authorized()).unwrap();
        let url = client
            .login_url(["likes", "basic", "public_content", "relationships", "comments"])
            .unwrap();
        assert!(url.ends_with(
            "&scope=likes+basic+public_content+relationships+comments&response_type=code"
        ));
        let url = client
            .login_url([Scope::Comments, Scope::Likes])
            .unwrap();
        assert!(url.contains("&scope=comments+likes&"));
    }

    #[test]
    fn unknown_scope_rejected() {
        let client = Client::new(authorized()).unwrap();
        assert!(matches!(
            client.login_url(["basic", "email"]),
            Err(Error::InvalidScope(s)) if s == "email"
        ));
    }

    #[test]
    fn login_url_requires_callback() {
        let client = Client::new("KEY123").unwrap();
        assert!(matches!(
            client.login_url(DEFAULT_SCOPES),
            Err(Error::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn authorize_stores_token() {
        let (mut server, mut client) = mocked(authorized()).await;
        let m = server
            .mock("POST", "/oauth/access_token")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("client_id".into(), "KEY123".into()),
                Matcher::UrlEncoded("client_secret".into(), "SECRET".into()),
                Matcher::UrlEncoded("grant_type".into(), "authorization_code".into()),
                Matcher::UrlEncoded(
                    "redirect_uri".into(),
                    "https://example.com/callback".into(),
                ),
                Matcher::UrlEncoded("code".into(), "CODE".into()),
            ]))
            .with_body(
                json!({
                    "access_token": "fb2e77d.47a0479900504cb3ab4a1f626d174d2d",
                    "user": {"id": "1574083", "username": "snoopdogg"},
                })
                .to_string(),
            )
            .create_async()
            .await;

        let token = client.authorize("CODE").await.unwrap();
        assert_eq!(token.user.unwrap()["username"], "snoopdogg");
        assert_eq!(
            client.access_token(),
            Some("fb2e77d.47a0479900504cb3ab4a1f626d174d2d")
        );
        m.assert_async().await;
    }

    #[tokio::test]
    async fn token_exchange_failure_is_error() {
        let (mut server, mut client) = mocked(authorized()).await;
        let _m = server
            .mock("POST", "/oauth/access_token")
            .with_status(400)
            .with_body(r#"{"error_type": "OAuthException", "code": 400}"#)
            .create_async()
            .await;
        assert!(matches!(
            client.authorize("BAD").await,
            Err(Error::Request(_))
        ));
        assert_eq!(client.access_token(), None);
    }

    #[tokio::test]
    async fn token_exchange_requires_secret() {
        let (_server, client) = mocked("KEY123").await;
        assert!(matches!(
            client.get_oauth_token("CODE").await,
            Err(Error::Configuration(_))
        ));
    }
}
