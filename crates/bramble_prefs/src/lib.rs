//! # BRAMBLE Prefs
//!
//! Typed key/value preference storage.
//!
//! ## Design Principles
//!
//! 1. **One value per key**: an entry holds exactly one [`PrefValue`]
//!    variant; writing a different type replaces the old payload outright
//! 2. **Never panics**: a missing key or a type mismatch yields the
//!    caller's default, not an error
//! 3. **Defensive reads**: callers get copies; nothing hands out references
//!    into the store
//!
//! ## Core Components
//!
//! - [`PrefValue`]: the closed set of storable types
//! - [`PreferenceStore`]: the in-memory store with typed accessors

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod store;

pub use store::{PrefValue, PreferenceEntry, PreferenceStore};
