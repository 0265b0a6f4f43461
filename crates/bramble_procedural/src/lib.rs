//! # BRAMBLE Procedural Generation
//!
//! Deterministic building blocks for procedural content.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: every generator is driven by a seeded
//!    [`RandomSource`]; the same seed replays the exact same draw sequence
//! 2. **Composable**: noise generators are ordinary chain links from
//!    `bramble_core` and stack freely
//! 3. **Forward-only**: the room path builder is a pure weighted walk - it
//!    cannot fail, retry or revisit
//!
//! ## Core Components
//!
//! - [`UniformRandom`]: ChaCha-backed implementation of [`RandomSource`]
//! - [`noise`]: chain links producing and mutating sample buffers
//! - [`RoomPosition`] / [`Direction`]: the integer room lattice
//! - [`RoomBuilder`]: start-to-target lattice paths via a weighted walk

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builder;
pub mod noise;
pub mod rng;
pub mod room;

pub use builder::RoomBuilder;
pub use noise::{
    AmplitudeScale, ConstantNoise, LayeredSineNoise, NeighbourSmooth, RedNoise, SineNoise,
    VioletNoise, WhiteNoise,
};
pub use rng::{RandomSource, UniformRandom};
pub use room::{Direction, RoomPosition};
