//! Randomized generation for 90-ball bingo.
//!
//! This crate produces the artifacts a bingo session needs:
//!
//! - [`CardGenerator`] builds single cards satisfying the structural rules
//!   enforced by [`housie_core::Card`].
//! - [`StripGenerator`] builds strips of six independently generated cards.
//! - [`NumberCaller`] draws the numbers 1-90 in random order without
//!   repetition.
//!
//! All three are reproducible: a [`GeneratorSeed`] (64 hex digits) pins
//! down the exact output, while the plain constructors seed from OS
//! entropy.
//!
//! # Examples
//!
//! ```
//! use housie_generator::{CardGenerator, NumberCaller};
//!
//! let card = CardGenerator::new().generate();
//!
//! let mut caller = NumberCaller::new();
//! while let Some(ball) = caller.draw() {
//!     if card.contains(ball) {
//!         // mark the card...
//!     }
//! }
//! assert!(caller.is_exhausted());
//! ```

pub mod caller;
pub mod generator;
pub mod layout;
pub mod sampling;
pub mod seed;

// Re-export commonly used types
pub use self::{
    caller::NumberCaller,
    generator::{CardGenerator, StripGenerator},
    seed::{GeneratorSeed, ParseSeedError},
};
