//! # BRAMBLE Core
//!
//! Engine-independent processing primitives for tick-driven simulations.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: no wall clocks, no threads; time is whatever the
//!    caller feeds in as delta time
//! 2. **Cooperative**: long-running work is spread over ticks, never blocked on
//! 3. **Composable**: every pipeline is built from small links that are
//!    themselves valid links
//!
//! ## Core Components
//!
//! - [`Chain`]: ordered composition of transforms, processed atomically
//! - [`SteppedChain`]: the same composition fed with the tick's delta time
//! - [`DeferredChain`]: a pipeline whose links complete across multiple ticks
//! - [`EventManager`]: typed publish-subscribe with once-per-tick dispatch
//! - [`TimedTrigger`], [`StateMachine`], [`CommandQueue`]: small tick helpers

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod chain;
pub mod command;
pub mod deferred;
pub mod error;
pub mod events;
pub mod state;
pub mod stepped;
pub mod trigger;

pub use chain::{Chain, ChainLink};
pub use command::{Command, CommandQueue};
pub use deferred::{DeferredChain, DeferredLink, LinkStatus, TimedStep};
pub use error::{EventError, StateError};
pub use events::{EventManager, EventWriter, Subscription};
pub use state::{State, StateMachine};
pub use stepped::{SteppedChain, SteppedLink};
pub use trigger::TimedTrigger;
