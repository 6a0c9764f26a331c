use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A permission requested from the user during OAuth authorization.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Read a user's profile info and media.
    Basic,
    /// Read any public profile info and media on a user's behalf.
    PublicContent,
    /// Like and unlike media on a user's behalf.
    Likes,
    /// Post and delete comments on a user's behalf.
    Comments,
    /// Follow and unfollow accounts on a user's behalf.
    Relationships,
}

/// Scopes requested by a login URL when the caller has no particular needs.
pub const DEFAULT_SCOPES: &[Scope] = &[Scope::Basic];

impl Scope {
    /// Every scope the authorize endpoint accepts.
    pub const ALL: [Scope; 5] = [
        Scope::Basic,
        Scope::PublicContent,
        Scope::Likes,
        Scope::Comments,
        Scope::Relationships,
    ];

    /// The name of the scope as it appears in the `scope` query parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Basic => "basic",
            Scope::PublicContent => "public_content",
            Scope::Likes => "likes",
            Scope::Comments => "comments",
            Scope::Relationships => "relationships",
        }
    }
}

impl AsRef<str> for Scope {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Scope, Error> {
        Scope::ALL
            .into_iter()
            .find(|scope| scope.as_str() == s)
            .ok_or_else(|| Error::InvalidScope(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::Scope;
    use crate::Error;

    #[test]
    fn parse_known_scopes() {
        for scope in Scope::ALL {
            assert_eq!(scope.as_str().parse::<Scope>().unwrap(), scope);
        }
    }

    #[test]
    fn parse_unknown_scope() {
        assert!(matches!(
            "follower_list".parse::<Scope>(),
            Err(Error::InvalidScope(s)) if s == "follower_list"
        ));
        // names are case sensitive on the wire
        assert!("Basic".parse::<Scope>().is_err());
    }

    #[test]
    fn serde_names_match_wire_names() {
        assert_eq!(
            serde_json::to_value(Scope::PublicContent).unwrap(),
            serde_json::json!("public_content")
        );
    }
}
