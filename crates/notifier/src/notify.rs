use {
    balju_client::{AuthError, Channel, ChatClient, Credentials, ListError, SendError, Session},
    tracing::{debug, info, warn},
};

use crate::error::{Error, Result};

/// Pages fetched before a cursor chain is declared runaway.
const MAX_CHANNEL_PAGES: usize = 64;

/// Outcome of one notify run.
///
/// Every variant is an ordinary, expected result of a single attempt, not
/// a program fault; callers decide whether to log, alert, or exit nonzero.
#[derive(Debug)]
pub enum NotifyOutcome {
    /// Message delivered; carries the matched channel name.
    Sent { channel: String },

    /// The platform rejected the login. Not retried.
    AuthFailed(AuthError),

    /// The joined-channel listing could not be retrieved.
    ListFailed(ListError),

    /// No joined channel matched the predicate. Nothing was sent.
    ChannelNotFound,

    /// Delivery to the matched channel failed.
    SendFailed(SendError),
}

impl NotifyOutcome {
    #[must_use]
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent { .. })
    }
}

/// Single-shot notifier over an external [`ChatClient`].
///
/// Holds no session or channel state between runs; every call logs in
/// fresh and fetches the listing anew, the platform being the source of
/// truth.
pub struct Notifier<C> {
    client: C,
}

impl<C: ChatClient> Notifier<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Authenticate, find the first joined channel whose name satisfies
    /// `predicate`, and deliver `message` to it.
    ///
    /// Exactly one authentication attempt, one exhaustive channel-list
    /// fetch, and at most one send per call; no retries. External
    /// failures come back as [`NotifyOutcome`] variants. `Err` is
    /// reserved for precondition violations, which are rejected before
    /// any external call is made. Dropping the future before the send
    /// step leaves no partial state behind.
    pub async fn notify<P>(
        &self,
        credentials: &Credentials,
        predicate: P,
        message: &str,
    ) -> Result<NotifyOutcome>
    where
        P: Fn(&str) -> bool,
    {
        if !credentials.is_complete() {
            return Err(Error::invalid_input(
                "credentials identifier and secret must be non-empty",
            ));
        }
        if message.is_empty() {
            return Err(Error::invalid_input("message must be non-empty"));
        }

        let session = match self.client.authenticate(credentials).await {
            Ok(session) => session,
            Err(err) => {
                warn!(identifier = %credentials.identifier, error = %err, "login rejected");
                return Ok(NotifyOutcome::AuthFailed(err));
            },
        };
        debug!(identifier = %credentials.identifier, "login succeeded");

        let channels = match self.all_channels(&session).await {
            Ok(channels) => channels,
            Err(err) => {
                warn!(error = %err, "channel listing failed");
                return Ok(NotifyOutcome::ListFailed(err));
            },
        };
        info!(count = channels.len(), "fetched joined channels");
        for channel in &channels {
            debug!(name = %channel.name, "joined channel");
        }

        // First match in listing order; further matches are ignored.
        let Some(target) = channels.into_iter().find(|c| predicate(&c.name)) else {
            info!("no channel matched");
            return Ok(NotifyOutcome::ChannelNotFound);
        };

        match self
            .client
            .send_message(&session, &target.handle, message)
            .await
        {
            Ok(()) => {
                info!(channel = %target.name, "message delivered");
                Ok(NotifyOutcome::Sent {
                    channel: target.name,
                })
            },
            Err(err) => {
                warn!(channel = %target.name, error = %err, "delivery failed");
                Ok(NotifyOutcome::SendFailed(err))
            },
        }
    }

    /// Exhaust the listing, following cursors until the platform reports
    /// no further page. Filtering happens only after the full set is in
    /// hand.
    async fn all_channels(&self, session: &Session) -> std::result::Result<Vec<Channel>, ListError> {
        let mut channels = Vec::new();
        let mut cursor: Option<String> = None;
        for _ in 0..MAX_CHANNEL_PAGES {
            let page = self.client.list_channels(session, cursor.as_deref()).await?;
            channels.extend(page.channels);
            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => return Ok(channels),
            }
        }
        Err(ListError::bad_cursor(cursor.unwrap_or_default()))
    }
}
