use {std::error::Error as StdError, thiserror::Error};

/// Authentication rejection from the chat platform.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The platform rejected the identifier/secret pair.
    #[error("credentials rejected")]
    InvalidCredentials,

    /// The account exists but is locked out.
    #[error("account locked")]
    AccountLocked,

    /// Too many login attempts; the platform is throttling.
    #[error("login rate limited")]
    RateLimited,

    /// The login request never completed.
    #[error("login transport failed: {context}: {source}")]
    Transport {
        context: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl AuthError {
    #[must_use]
    pub fn transport(
        context: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::Transport {
            context: context.into(),
            source: Box::new(source),
        }
    }
}

/// Failure to retrieve the joined-channel listing.
#[derive(Debug, Error)]
pub enum ListError {
    /// The session is no longer accepted by the platform.
    #[error("session expired")]
    SessionExpired,

    /// The platform rejected a listing cursor, or the cursor chain never
    /// terminated.
    #[error("bad channel listing cursor: {cursor}")]
    BadCursor { cursor: String },

    /// The listing request never completed.
    #[error("channel listing transport failed: {context}: {source}")]
    Transport {
        context: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl ListError {
    #[must_use]
    pub fn bad_cursor(cursor: impl Into<String>) -> Self {
        Self::BadCursor {
            cursor: cursor.into(),
        }
    }

    #[must_use]
    pub fn transport(
        context: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::Transport {
            context: context.into(),
            source: Box::new(source),
        }
    }
}

/// Failure to deliver a message to a channel.
#[derive(Debug, Error)]
pub enum SendError {
    /// The account may not post to this channel.
    #[error("permission denied")]
    PermissionDenied,

    /// The send request never completed.
    #[error("send transport failed: {context}: {source}")]
    Transport {
        context: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl SendError {
    #[must_use]
    pub fn transport(
        context: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::Transport {
            context: context.into(),
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_carry_context_and_source() {
        let io = || std::io::Error::other("socket closed");
        assert_eq!(
            AuthError::transport("logging in", io()).to_string(),
            "login transport failed: logging in: socket closed"
        );
        assert_eq!(
            ListError::transport("fetching page", io()).to_string(),
            "channel listing transport failed: fetching page: socket closed"
        );
        assert_eq!(
            SendError::transport("posting", io()).to_string(),
            "send transport failed: posting: socket closed"
        );
    }

    #[test]
    fn bad_cursor_displays_cursor() {
        assert_eq!(
            ListError::bad_cursor("p99").to_string(),
            "bad channel listing cursor: p99"
        );
    }
}
