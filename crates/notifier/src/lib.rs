//! Find-channel-and-notify core.
//!
//! One operation: authenticate against a chat platform, fetch the joined
//! channels, pick the first whose name satisfies a predicate, and deliver
//! a single message. Strictly linear, no retries, no state across runs.

pub mod config;
pub mod error;
pub mod notify;

pub use {
    config::NotifyConfig,
    error::{Error, Result},
    notify::{Notifier, NotifyOutcome},
};
