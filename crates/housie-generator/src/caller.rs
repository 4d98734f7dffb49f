//! The number caller.

use housie_core::{Ball, BallSet};
use rand_pcg::Pcg64;

use crate::{GeneratorSeed, sampling};

/// Calls bingo numbers 1-90 in random order without repetition.
///
/// [`draw`](Self::draw) hands out each of the 90 balls exactly once, then
/// reports exhaustion by returning `None` until [`reset`](Self::reset) puts
/// the full range back in play. Exhaustion is a normal terminal state, not
/// an error.
///
/// Drawing takes `&mut self`, so a caller shared between threads goes
/// behind a `Mutex`; that keeps concurrent draws serialized and the drawn
/// set consistent.
///
/// # Examples
///
/// ```
/// use housie_generator::NumberCaller;
///
/// let mut caller = NumberCaller::new();
/// let first = caller.draw().unwrap();
/// assert!(caller.drawn().contains(first));
/// assert_eq!(caller.remaining(), 89);
///
/// caller.reset();
/// assert_eq!(caller.remaining(), 90);
/// ```
#[derive(Debug, Clone)]
pub struct NumberCaller {
    rng: Pcg64,
    pool: Vec<Ball>,
    drawn: BallSet,
    last: Option<Ball>,
}

impl NumberCaller {
    /// Creates a caller with a fresh random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(GeneratorSeed::random())
    }

    /// Creates a caller whose draw order is determined by `seed`.
    #[must_use]
    pub fn with_seed(seed: GeneratorSeed) -> Self {
        let mut caller = NumberCaller {
            rng: seed.rng(),
            pool: Vec::new(),
            drawn: BallSet::new(),
            last: None,
        };
        caller.refill();
        caller
    }

    fn refill(&mut self) {
        let values = sampling::sample_distinct(&mut self.rng, 1..=90, 90);
        self.pool = values.into_iter().map(Ball::new).collect();
    }

    /// Draws the next number, or `None` once all 90 have been drawn.
    pub fn draw(&mut self) -> Option<Ball> {
        let ball = self.pool.pop()?;
        self.drawn.insert(ball);
        self.last = Some(ball);
        Some(ball)
    }

    /// Returns every ball drawn since the last reset.
    #[must_use]
    pub fn drawn(&self) -> BallSet {
        self.drawn
    }

    /// Returns the most recently drawn ball, if any.
    #[must_use]
    pub fn last_drawn(&self) -> Option<Ball> {
        self.last
    }

    /// Returns how many balls remain drawable.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    /// Returns `true` once every ball has been drawn.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.pool.is_empty()
    }

    /// Clears the drawn set and makes the full range drawable again.
    pub fn reset(&mut self) {
        self.drawn.clear();
        self.last = None;
        self.refill();
    }
}

impl Default for NumberCaller {
    fn default() -> Self {
        NumberCaller::new()
    }
}
