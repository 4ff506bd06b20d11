use {
    secrecy::{ExposeSecret, Secret},
    serde::{Deserialize, Serialize},
};

/// Login identity for one notifier run. Supplied by the caller at the
/// boundary and never persisted by the core.
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Account identifier: email, username, or bot id, whatever the
    /// platform keys logins on.
    pub identifier: String,

    /// Account secret.
    #[serde(serialize_with = "serialize_secret")]
    pub secret: Secret<String>,
}

impl Credentials {
    #[must_use]
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: Secret::new(secret.into()),
        }
    }

    /// Both parts present. The notifier refuses to dial out otherwise.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.identifier.is_empty() && !self.secret.expose_secret().is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

fn serialize_secret<S: serde::Serializer>(
    secret: &Secret<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}

/// Opaque authenticated handle minted by [`ChatClient::authenticate`].
///
/// Owned by exactly one run: created by a successful login, threaded
/// through the listing and send calls, discarded when the run ends. Never
/// shared across concurrent invocations.
///
/// [`ChatClient::authenticate`]: crate::ChatClient::authenticate
#[derive(Clone)]
pub struct Session {
    token: Secret<String>,
}

impl Session {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Secret::new(token.into()),
        }
    }

    /// Raw platform token, for [`ChatClient`] implementations only.
    ///
    /// [`ChatClient`]: crate::ChatClient
    #[must_use]
    pub fn expose_token(&self) -> &str {
        self.token.expose_secret()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Platform-side channel id. Opaque to the notifier; only ever handed
/// back to the client that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelHandle(pub String);

impl std::fmt::Display for ChannelHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read-only snapshot of one joined channel, fetched fresh each run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub name: String,
    pub handle: ChannelHandle,
}

impl Channel {
    #[must_use]
    pub fn new(name: impl Into<String>, handle: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handle: ChannelHandle(handle.into()),
        }
    }
}

/// One page of the joined-channel listing.
///
/// Ordering within and across pages is whatever the platform returns;
/// callers must not assume alphabetical or join order.
#[derive(Debug, Clone, Default)]
pub struct ChannelPage {
    pub channels: Vec<Channel>,

    /// Cursor for the next page, `None` when this page is the last.
    pub next_cursor: Option<String>,
}

impl ChannelPage {
    /// Terminal page, for clients that return the whole listing in one
    /// round trip.
    #[must_use]
    pub fn last(channels: Vec<Channel>) -> Self {
        Self {
            channels,
            next_cursor: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_debug_redacts_secret() {
        let creds = Credentials::new("bot@example.com", "hunter2");
        let repr = format!("{creds:?}");
        assert!(repr.contains("bot@example.com"));
        assert!(repr.contains("[REDACTED]"));
        assert!(!repr.contains("hunter2"));
    }

    #[test]
    fn credentials_completeness() {
        assert!(Credentials::new("u", "p").is_complete());
        assert!(!Credentials::new("", "p").is_complete());
        assert!(!Credentials::new("u", "").is_complete());
    }

    #[test]
    fn credentials_deserialize_from_json() {
        let json = r#"{"identifier": "bot@example.com", "secret": "pw"}"#;
        let creds: Credentials = serde_json::from_str(json).unwrap();
        assert_eq!(creds.identifier, "bot@example.com");
        assert_eq!(creds.secret.expose_secret(), "pw");
    }

    #[test]
    fn credentials_serialize_roundtrip() {
        let creds = Credentials::new("u", "pw");
        let json = serde_json::to_string(&creds).unwrap();
        let back: Credentials = serde_json::from_str(&json).unwrap();
        assert_eq!(back.identifier, "u");
        assert_eq!(back.secret.expose_secret(), "pw");
    }

    #[test]
    fn session_debug_redacts_token() {
        let session = Session::new("tok-123");
        let repr = format!("{session:?}");
        assert!(!repr.contains("tok-123"));
        assert_eq!(session.expose_token(), "tok-123");
    }

    #[test]
    fn terminal_page_has_no_cursor() {
        let page = ChannelPage::last(vec![Channel::new("공지방", "ch-1")]);
        assert_eq!(page.channels.len(), 1);
        assert!(page.next_cursor.is_none());
    }
}
