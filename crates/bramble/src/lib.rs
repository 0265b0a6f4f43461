//! # BRAMBLE
//!
//! The facade crate, tying the toolkit together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        BRAMBLE TOOLKIT                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                             │
//! │  ┌───────────────┐   ┌────────────────┐   ┌─────────────┐  │
//! │  │ bramble_core  │   │ bramble_       │   │ bramble_    │  │
//! │  │               │──>│ procedural     │   │ prefs       │  │
//! │  │ • Chains      │   │                │   │             │  │
//! │  │ • Events      │   │ • Random       │   │ • Typed KV  │  │
//! │  │ • Triggers    │   │ • Noise links  │   │   store     │  │
//! │  │ • States      │   │ • Room paths   │   │             │  │
//! │  └───────┬───────┘   └────────────────┘   └─────────────┘  │
//! │          │                                                  │
//! │  ┌───────┴──────────────────────────────────────────────┐  │
//! │  │ bramble (this crate)                                 │  │
//! │  │ • Simulation lifecycle  • Fixed-timestep loop        │  │
//! │  │ • TOML configuration                                 │  │
//! │  └──────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`]: TOML-loaded loop settings
//! - [`simulation`]: the [`Simulation`] lifecycle and [`SimulationLoop`]

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod simulation;

// Re-export the member crates.
pub use bramble_core as core;
pub use bramble_prefs as prefs;
pub use bramble_procedural as procedural;

// Re-export commonly used types.
pub use config::{ConfigError, SimulationConfig};
pub use simulation::{Simulation, SimulationLoop};
