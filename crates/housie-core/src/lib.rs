//! Core data structures for 90-ball bingo applications.
//!
//! This crate provides the fundamental types for representing bingo cards,
//! strips and called numbers. They are used across generation, calling and
//! any presentation layer built on top.
//!
//! # Overview
//!
//! The crate is organized around three groups:
//!
//! 1. **Number types** - Validated bingo values
//!    - [`ball`]: Type-safe ball numbers 1-90
//!    - [`ball_set`]: Efficient sets of balls ([`BallSet`])
//! 2. **Grid types** - The card and its coordinates
//!    - [`position`]: Cell coordinates on the 3×9 grid
//!    - [`column`]: Grid columns and their fixed numeric ranges
//!    - [`card`]: The validated, immutable [`Card`]
//!    - [`strip`]: Strips of six cards
//! 3. **Bookkeeping** - Identification
//!    - [`serial`]: Card serial numbers and the injectable
//!      [`SerialCounter`]
//!
//! # Examples
//!
//! ```
//! use housie_core::{Ball, Card, Position};
//!
//! let card = Card::from_values([
//!     [1, 0, 22, 0, 41, 0, 65, 74, 0],
//!     [0, 10, 0, 33, 0, 56, 0, 77, 81],
//!     [5, 12, 0, 36, 44, 0, 0, 0, 90],
//! ])?;
//!
//! // Every row holds 5 numbers, every column 1-3, columns ascend.
//! assert_eq!(card.numbers().count(), 15);
//! assert!(card.contains(Ball::new(41)));
//! assert_eq!(card.value_at(Position::new(1, 0)), None);
//! # Ok::<(), housie_core::InvalidCardError>(())
//! ```

pub mod ball;
pub mod ball_set;
pub mod card;
pub mod column;
pub mod position;
pub mod serial;
pub mod strip;

// Re-export commonly used types
pub use self::{
    ball::Ball,
    ball_set::BallSet,
    card::{Card, CardGrid, InvalidCardError},
    column::Column,
    position::Position,
    serial::{CardSerial, SerialCounter},
    strip::Strip,
};
