use async_trait::async_trait;

use crate::{
    error::{AuthError, ListError, SendError},
    types::{ChannelHandle, ChannelPage, Credentials, Session},
};

/// Chat-platform capability consumed by the notifier.
///
/// Three operations, one session per run. Implementations own transport,
/// timeouts, and wire formats; callers never retry on their behalf.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Log in and mint a [`Session`] for one run.
    ///
    /// Rejections (bad credentials, locked account, rate limiting) come
    /// back as typed [`AuthError`]s.
    async fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError>;

    /// Fetch one page of the joined-channel listing.
    ///
    /// `cursor` is `None` for the first page; a `next_cursor` in the
    /// returned page means more channels remain. Clients without
    /// pagination return a single page via [`ChannelPage::last`].
    async fn list_channels(
        &self,
        session: &Session,
        cursor: Option<&str>,
    ) -> Result<ChannelPage, ListError>;

    /// Deliver `text` to one channel. Atomic from the caller's view: it
    /// either went out or it did not.
    async fn send_message(
        &self,
        session: &Session,
        channel: &ChannelHandle,
        text: &str,
    ) -> Result<(), SendError>;
}
