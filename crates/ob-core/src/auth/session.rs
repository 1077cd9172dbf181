//! Session state.
//!
//! 会话状态：`username` 仅在已认证时存在。

use serde::{Deserialize, Serialize};

/// Current authentication session.
///
/// The "username present iff authenticated" rule is carried by the enum shape,
/// so no code path can observe an authenticated session without a username.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "SessionRecord", into = "SessionRecord")]
pub enum Session {
    /// No user is logged in.
    ///
    /// 未登录。
    #[default]
    Anonymous,
    /// A user passed the credential check.
    ///
    /// 已登录。
    Authenticated { username: String },
}

impl Session {
    pub fn authenticated(username: impl Into<String>) -> Self {
        Self::Authenticated {
            username: username.into(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { username } => Some(username),
        }
    }
}

/// Persisted layout of the session (`authState` key).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub is_authenticated: bool,
    #[serde(default)]
    pub username: Option<String>,
}

impl From<SessionRecord> for Session {
    fn from(record: SessionRecord) -> Self {
        match (record.is_authenticated, record.username) {
            (true, Some(username)) if !username.trim().is_empty() => {
                Session::Authenticated { username }
            }
            _ => Session::Anonymous,
        }
    }
}

impl From<Session> for SessionRecord {
    fn from(session: Session) -> Self {
        match session {
            Session::Anonymous => SessionRecord {
                is_authenticated: false,
                username: None,
            },
            Session::Authenticated { username } => SessionRecord {
                is_authenticated: true,
                username: Some(username),
            },
        }
    }
}
