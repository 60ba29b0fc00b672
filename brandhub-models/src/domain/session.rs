use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Bearer token record handed out at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: Uuid,
    pub expires_at: DateTime<Utc>,
    pub email: String,
}

impl Session {
    /// Mint a session for `email` valid for `lifetime` from now.
    pub fn new(email: impl Into<String>, lifetime: Duration) -> Self {
        Self {
            token: Uuid::new_v4(),
            expires_at: Utc::now() + lifetime,
            email: email.into(),
        }
    }

    /// A session is usable only while its expiry is strictly in the future.
    #[inline]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_expiry_is_strict() {
        let session = Session::new("a@x.com", Duration::seconds(60));
        assert!(!session.is_expired());
        assert!(session.is_expired_at(session.expires_at));
        assert!(!session.is_expired_at(session.expires_at - Duration::milliseconds(1)));

        let stale = Session::new("a@x.com", Duration::seconds(-1));
        assert!(stale.is_expired());
    }

    #[test]
    fn test_tokens_are_unique() {
        let a = Session::new("a@x.com", Duration::seconds(60));
        let b = Session::new("a@x.com", Duration::seconds(60));
        assert_ne!(a.token, b.token);
    }
}
