//! Card columns and their numeric ranges.

use std::{fmt, ops::RangeInclusive};

use crate::Ball;

/// A card column (0-8) together with its fixed numeric range.
///
/// 90-ball bingo assigns each column an inclusive interval: column 0 holds
/// 1-9, columns 1-7 hold `10c`-`10c + 9`, and column 8 holds 80-90 (eleven
/// values, absorbing 90).
///
/// # Examples
///
/// ```
/// use housie_core::Column;
///
/// assert_eq!(Column::new(0).range(), 1..=9);
/// assert_eq!(Column::new(3).range(), 30..=39);
/// assert_eq!(Column::new(8).range(), 80..=90);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Column(u8);

impl Column {
    /// All nine columns, left to right.
    pub const ALL: [Self; 9] = [
        Column(0),
        Column(1),
        Column(2),
        Column(3),
        Column(4),
        Column(5),
        Column(6),
        Column(7),
        Column(8),
    ];

    /// Creates a column from its index (0-8).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-8.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < 9, "column index must be 0-8");
        Column(index)
    }

    /// Returns the column index (0-8).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the inclusive range of ball numbers this column may hold.
    #[must_use]
    pub const fn range(self) -> RangeInclusive<u8> {
        let low = if self.0 == 0 { 1 } else { self.0 * 10 };
        let high = if self.0 == 8 { 90 } else { self.0 * 10 + 9 };
        low..=high
    }

    /// Returns `true` if `ball` lies in this column's range.
    #[must_use]
    pub fn admits(self, ball: Ball) -> bool {
        self.range().contains(&ball.value())
    }

    /// Returns the column whose range contains `ball`.
    ///
    /// # Examples
    ///
    /// ```
    /// use housie_core::{Ball, Column};
    ///
    /// assert_eq!(Column::containing(Ball::new(5)), Column::new(0));
    /// assert_eq!(Column::containing(Ball::new(37)), Column::new(3));
    /// assert_eq!(Column::containing(Ball::new(90)), Column::new(8));
    /// ```
    #[must_use]
    pub const fn containing(ball: Ball) -> Self {
        let index = ball.value() / 10;
        Column(if index > 8 { 8 } else { index })
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges() {
        assert_eq!(Column::new(0).range(), 1..=9);
        for index in 1..=7 {
            assert_eq!(Column::new(index).range(), index * 10..=index * 10 + 9);
        }
        assert_eq!(Column::new(8).range(), 80..=90);
    }

    #[test]
    fn test_ranges_cover_all_balls_once() {
        // Every ball belongs to exactly one column range.
        for ball in Ball::all() {
            let owners = Column::ALL
                .into_iter()
                .filter(|column| column.admits(ball))
                .count();
            assert_eq!(owners, 1, "ball {ball} has {owners} owning columns");
        }
    }

    #[test]
    fn test_containing_agrees_with_admits() {
        for ball in Ball::all() {
            assert!(Column::containing(ball).admits(ball));
        }
    }

    #[test]
    #[should_panic(expected = "column index must be 0-8")]
    fn test_out_of_range_panics() {
        let _ = Column::new(9);
    }
}
