//! Core domain types for Twofold.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. Everything here can be used from any layer:
//!
//! - **`Outcome`**: the tagged per-input settlement record produced by
//!   `settle`-style combinators
//! - **`AggregateError`**: the all-inputs-rejected error produced when a
//!   one-of race runs out of candidates

mod error;
mod outcome;

pub use error::AggregateError;
pub use outcome::Outcome;
