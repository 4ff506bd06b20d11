//! External chat-platform client boundary.
//!
//! The chat protocol itself (authentication handshake, channel-list
//! retrieval, message transport) lives behind the [`ChatClient`] trait.
//! Implementations own all transport, timeout, and wire-format concerns;
//! nothing about the protocol leaks past this boundary.

pub mod client;
pub mod error;
pub mod types;

pub use {
    client::ChatClient,
    error::{AuthError, ListError, SendError},
    types::{Channel, ChannelHandle, ChannelPage, Credentials, Session},
};
