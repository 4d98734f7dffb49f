//! The 90-ball bingo card and its structural invariants.

use std::fmt::{self, Display};

use crate::{Ball, BallSet, CardSerial, Column, Position};

/// Rows on a card.
pub const CARD_ROWS: usize = 3;
/// Columns on a card.
pub const CARD_COLUMNS: usize = 9;
/// Numbers carried by a card.
pub const NUMBERS_PER_CARD: usize = 15;
/// Numbers carried by every row.
pub const NUMBERS_PER_ROW: usize = 5;
/// Most numbers a single column may carry.
pub const MAX_NUMBERS_PER_COLUMN: usize = 3;

/// A card grid as rows of cells; `None` is an empty cell.
pub type CardGrid = [[Option<Ball>; CARD_COLUMNS]; CARD_ROWS];

/// Why a grid was rejected by [`Card::new`] or [`Card::from_values`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidCardError {
    /// A row does not hold exactly 5 numbers.
    #[display("row {y} holds {count} numbers, expected 5")]
    RowCount {
        /// Row index (0-2).
        y: u8,
        /// Numbers found in that row.
        count: usize,
    },
    /// A column holds no numbers. (The 3-row grid makes more than 3 per
    /// column unrepresentable.)
    #[display("column {x} holds no numbers")]
    EmptyColumn {
        /// Column index (0-8).
        x: u8,
    },
    /// A ball lies outside its column's numeric range.
    #[display("ball {ball} at {position} is outside its column's range")]
    BallOutOfRange {
        /// Cell holding the offending ball.
        position: Position,
        /// The offending ball.
        ball: Ball,
    },
    /// A column's numbers do not strictly ascend from top to bottom.
    #[display("numbers in column {x} do not ascend")]
    UnorderedColumn {
        /// Column index (0-8).
        x: u8,
    },
    /// A cell value is neither 0 (empty) nor a ball number 1-90.
    #[display("cell {position} holds {value}, expected 0 or a number 1-90")]
    InvalidValue {
        /// Cell holding the offending value.
        position: Position,
        /// The offending value.
        value: u8,
    },
}

/// An immutable 90-ball bingo card.
///
/// A card is a 3×9 grid carrying exactly 15 numbers: 5 per row, 1-3 per
/// column, each within its column's range (see [`Column::range`]), ascending
/// top to bottom within a column. Every constructor validates these
/// invariants, so a `Card` in hand is always well-formed, and it offers no
/// mutating operations afterwards.
///
/// # Examples
///
/// ```
/// use housie_core::{Ball, Card, Position};
///
/// let card = Card::from_values([
///     [1, 0, 22, 0, 41, 0, 65, 74, 0],
///     [0, 10, 0, 33, 0, 56, 0, 77, 81],
///     [5, 12, 0, 36, 44, 0, 0, 0, 90],
/// ])?;
///
/// assert_eq!(card.numbers().count(), 15);
/// assert_eq!(card.value_at(Position::new(2, 0)), Some(Ball::new(22)));
/// assert_eq!(card.value_at(Position::new(1, 0)), None);
/// assert!(card.contains(Ball::new(90)));
/// # Ok::<(), housie_core::InvalidCardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    cells: [Option<Ball>; CARD_ROWS * CARD_COLUMNS],
    numbers: BallSet,
    serial: Option<CardSerial>,
}

impl Card {
    /// Creates a card from a grid of cells, validating every invariant.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidCardError`] describing the first violated
    /// invariant: a column that is empty, out of order or holding an
    /// out-of-range ball, or a row not holding exactly 5 numbers.
    pub fn new(grid: CardGrid) -> Result<Self, InvalidCardError> {
        for column in Column::ALL {
            let x = column.index();
            let placed: Vec<(Position, Ball)> = (0..3u8)
                .filter_map(|y| {
                    let ball = grid[y as usize][x as usize]?;
                    Some((Position::new(x, y), ball))
                })
                .collect();
            if placed.is_empty() {
                return Err(InvalidCardError::EmptyColumn { x });
            }
            for &(position, ball) in &placed {
                if !column.admits(ball) {
                    return Err(InvalidCardError::BallOutOfRange { position, ball });
                }
            }
            if placed.windows(2).any(|pair| pair[0].1 >= pair[1].1) {
                return Err(InvalidCardError::UnorderedColumn { x });
            }
        }

        for y in 0..3u8 {
            let count = grid[y as usize].iter().flatten().count();
            if count != NUMBERS_PER_ROW {
                return Err(InvalidCardError::RowCount { y, count });
            }
        }

        let mut cells = [None; CARD_ROWS * CARD_COLUMNS];
        for pos in Position::ALL {
            cells[pos.cell_index()] = grid[pos.y() as usize][pos.x() as usize];
        }
        let numbers = cells.iter().flatten().copied().collect();
        Ok(Card {
            cells,
            numbers,
            serial: None,
        })
    }

    /// Creates a card from a grid of raw numbers, where 0 denotes an empty
    /// cell.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCardError::InvalidValue`] for a non-zero value
    /// outside 1-90, or any error [`Card::new`] reports.
    pub fn from_values(
        values: [[u8; CARD_COLUMNS]; CARD_ROWS],
    ) -> Result<Self, InvalidCardError> {
        let mut grid: CardGrid = [[None; CARD_COLUMNS]; CARD_ROWS];
        for pos in Position::ALL {
            let value = values[pos.y() as usize][pos.x() as usize];
            if value != 0 {
                let ball = Ball::try_new(value).ok_or(InvalidCardError::InvalidValue {
                    position: pos,
                    value,
                })?;
                grid[pos.y() as usize][pos.x() as usize] = Some(ball);
            }
        }
        Card::new(grid)
    }

    /// Attaches a serial number, consuming the card.
    ///
    /// Serials identify printed cards; they play no part in the structural
    /// invariants.
    #[must_use]
    pub fn with_serial(mut self, serial: CardSerial) -> Self {
        self.serial = Some(serial);
        self
    }

    /// Returns the serial number attached at creation, if any.
    #[must_use]
    pub fn serial(&self) -> Option<CardSerial> {
        self.serial
    }

    /// Returns the ball at `pos`, or `None` for an empty cell.
    #[must_use]
    pub fn value_at(&self, pos: Position) -> Option<Ball> {
        self.cells[pos.cell_index()]
    }

    /// Returns the card's 15 balls in row-major order.
    ///
    /// The iterator is finite and may be restarted by calling this method
    /// again.
    pub fn numbers(&self) -> impl Iterator<Item = Ball> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Returns `true` if the card carries `ball`.
    #[must_use]
    pub fn contains(&self, ball: Ball) -> bool {
        self.numbers.contains(ball)
    }

    /// Returns the set of all balls on the card.
    #[must_use]
    pub fn ball_set(&self) -> BallSet {
        self.numbers
    }
}

impl Display for Card {
    /// Formats the card as three rows of two-digit cells, `__` for empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..3u8 {
            for x in 0..9u8 {
                if x > 0 {
                    f.write_str(" ")?;
                }
                match self.value_at(Position::new(x, y)) {
                    Some(ball) => write!(f, "{:>2}", ball.value())?,
                    None => f.write_str("__")?,
                }
            }
            if y < 2 {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}
