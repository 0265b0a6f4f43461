//! Core error types.
//!
//! Invariant violations are immediate hard errors; nothing in this crate
//! retries or recovers on the caller's behalf.

use thiserror::Error;

/// Errors raised by the [`crate::EventManager`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventError {
    /// The subscription token does not match any registered subscriber
    /// (already unsubscribed, or forged).
    #[error("subscription token does not match any registered subscriber")]
    UnknownSubscriber,

    /// No subscriber for the token's event type was ever registered with this
    /// manager.
    #[error("no subscribers were ever registered for this event type")]
    UnknownEventType,
}

/// Errors raised by the [`crate::StateMachine`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// The machine was asked to run or enter a state no object was registered
    /// for.
    #[error("no state object registered for state {state}")]
    MissingState {
        /// Debug rendering of the offending state key.
        state: String,
    },
}
