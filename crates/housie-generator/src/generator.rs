//! Card and strip generation.

use housie_core::{Ball, Card, CardGrid, Column, SerialCounter, Strip};
use rand::Rng;

use crate::{
    GeneratorSeed,
    layout::{self, CardLayout},
    sampling,
};

/// Generates 90-ball bingo cards.
///
/// Each card is a 3×9 grid holding 15 numbers: exactly 5 per row, 1-3 per
/// column, every number within its column's range, ascending within a
/// column. Generation proceeds in four steps: allocate counts to columns,
/// choose rows per column, balance the rows to 5 each, then populate every
/// column with sorted numbers from its range.
///
/// Generation never fails; it needs nothing but randomness.
///
/// # Examples
///
/// ```
/// use housie_generator::CardGenerator;
///
/// let generator = CardGenerator::new();
/// let card = generator.generate();
/// assert_eq!(card.numbers().count(), 15);
/// ```
///
/// Cards can be numbered by a shared [`SerialCounter`]:
///
/// ```
/// use housie_core::SerialCounter;
/// use housie_generator::CardGenerator;
///
/// let counter = SerialCounter::new();
/// let generator = CardGenerator::with_serials(&counter);
/// assert_eq!(generator.generate().serial().map(|s| s.value()), Some(1));
/// assert_eq!(generator.generate().serial().map(|s| s.value()), Some(2));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CardGenerator<'a> {
    serials: Option<&'a SerialCounter>,
}

impl<'a> CardGenerator<'a> {
    /// Creates a generator that leaves cards unnumbered.
    #[must_use]
    pub const fn new() -> Self {
        CardGenerator { serials: None }
    }

    /// Creates a generator that numbers its cards from `counter`.
    #[must_use]
    pub const fn with_serials(counter: &'a SerialCounter) -> Self {
        CardGenerator {
            serials: Some(counter),
        }
    }

    /// Generates a card from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> Card {
        self.generate_with_seed(GeneratorSeed::random())
    }

    /// Generates the card determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: GeneratorSeed) -> Card {
        self.generate_from_rng(&mut seed.rng())
    }

    fn generate_from_rng<R>(&self, rng: &mut R) -> Card
    where
        R: Rng + ?Sized,
    {
        let layout = loop {
            let mut candidate = CardLayout::random(rng);
            if layout::balance(&mut candidate, rng) {
                break candidate;
            }
            // Not observed in practice; the repair converges well within
            // its pass bound from any allocation this allocator produces.
            log::debug!("row balancing missed its pass bound, resampling layout");
        };

        let mut grid: CardGrid = [[None; 9]; 3];
        for column in Column::ALL {
            let x = usize::from(column.index());
            let rows = layout.rows_for(x);
            let mut values = sampling::sample_distinct(rng, column.range(), rows.len());
            values.sort_unstable();
            // Ascending values meet ascending rows: smallest to the top.
            for (y, value) in rows.iter().zip(values) {
                grid[usize::from(y)][x] = Some(Ball::new(value));
            }
        }

        let card = Card::new(grid).expect("balanced layout fills a structurally valid card");
        match self.serials {
            Some(counter) => card.with_serial(counter.next()),
            None => card,
        }
    }
}

/// Generates strips of six cards.
///
/// The six cards are statistically independent: no cross-card constraint
/// is enforced, and numbers may repeat across the cards of one strip. Only
/// serial numbers (when enabled) are guaranteed to differ.
///
/// # Examples
///
/// ```
/// use housie_generator::StripGenerator;
///
/// let strip = StripGenerator::new().generate();
/// assert_eq!(strip.len(), 6);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StripGenerator<'a> {
    cards: CardGenerator<'a>,
}

impl<'a> StripGenerator<'a> {
    /// Creates a generator that leaves cards unnumbered.
    #[must_use]
    pub const fn new() -> Self {
        StripGenerator {
            cards: CardGenerator::new(),
        }
    }

    /// Creates a generator that numbers the strip's cards from `counter`.
    #[must_use]
    pub const fn with_serials(counter: &'a SerialCounter) -> Self {
        StripGenerator {
            cards: CardGenerator::with_serials(counter),
        }
    }

    /// Generates a strip from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> Strip {
        self.generate_with_seed(GeneratorSeed::random())
    }

    /// Generates the strip determined by `seed`.
    ///
    /// Each card uses its own seed derived from `seed`
    /// (see [`GeneratorSeed::derive_child`]), so one strip seed reproduces
    /// all six cards.
    #[must_use]
    pub fn generate_with_seed(&self, seed: GeneratorSeed) -> Strip {
        Strip::new(std::array::from_fn(|index| {
            self.cards.generate_with_seed(seed.derive_child(index as u64))
        }))
    }
}

#[cfg(test)]
mod tests {
    use housie_core::Position;

    use super::*;

    /// Structural invariants checked through the public accessors, the way
    /// a consumer would see them.
    fn assert_card_is_well_formed(card: &Card) {
        assert_eq!(card.numbers().count(), 15);

        for y in 0..3u8 {
            let count = (0..9u8)
                .filter(|&x| card.value_at(Position::new(x, y)).is_some())
                .count();
            assert_eq!(count, 5, "row {y} must hold 5 numbers");
        }

        for column in Column::ALL {
            let placed: Vec<Ball> = (0..3u8)
                .filter_map(|y| card.value_at(Position::new(column.index(), y)))
                .collect();
            assert!(
                (1..=3).contains(&placed.len()),
                "column {column} must hold 1-3 numbers"
            );
            for &ball in &placed {
                assert!(column.admits(ball), "ball {ball} outside column {column}");
            }
            assert!(
                placed.windows(2).all(|pair| pair[0] < pair[1]),
                "column {column} must ascend"
            );
        }
    }

    #[test]
    fn test_generated_cards_satisfy_all_invariants() {
        // Statistical fuzz over fresh entropy, not a fixed seed: the
        // invariants must hold for arbitrary random choices.
        let generator = CardGenerator::new();
        for _ in 0..1_000 {
            assert_card_is_well_formed(&generator.generate());
        }
    }

    #[test]
    fn test_numbers_and_contains_agree() {
        let card = CardGenerator::new().generate();
        for ball in card.numbers() {
            assert!(card.contains(ball));
        }
        assert_eq!(card.ball_set().len(), 15);
    }

    #[test]
    fn test_same_seed_reproduces_card() {
        let seed = GeneratorSeed::from_bytes([42; 32]);
        let generator = CardGenerator::new();
        assert_eq!(
            generator.generate_with_seed(seed),
            generator.generate_with_seed(seed)
        );
    }

    #[test]
    fn test_distinct_seeds_give_distinct_cards() {
        let generator = CardGenerator::new();
        let a = generator.generate_with_seed(GeneratorSeed::from_bytes([1; 32]));
        let b = generator.generate_with_seed(GeneratorSeed::from_bytes([2; 32]));
        assert_ne!(a, b);
    }

    #[test]
    fn test_serials_increase_across_cards() {
        let counter = SerialCounter::new();
        let generator = CardGenerator::with_serials(&counter);
        let serials: Vec<u32> = (0..3)
            .map(|_| generator.generate().serial().unwrap().value())
            .collect();
        assert_eq!(serials, [1, 2, 3]);
    }

    #[test]
    fn test_strip_holds_six_valid_cards() {
        let strip = StripGenerator::new().generate();
        assert_eq!(strip.len(), 6);
        for card in &strip {
            assert_card_is_well_formed(card);
        }
    }

    #[test]
    fn test_strip_serials_are_sequential() {
        let counter = SerialCounter::new();
        let generator = StripGenerator::with_serials(&counter);
        let strip = generator.generate();
        for (index, card) in strip.iter().enumerate() {
            assert_eq!(card.serial().unwrap().value() as usize, index + 1);
        }
        // A later strip continues the same sequence until reset.
        let strip = generator.generate();
        assert_eq!(strip[0].serial().unwrap().value(), 7);
        counter.reset();
        assert_eq!(generator.generate()[0].serial().unwrap().value(), 1);
    }

    #[test]
    fn test_same_seed_reproduces_strip() {
        let seed = GeneratorSeed::from_bytes([7; 32]);
        let generator = StripGenerator::new();
        assert_eq!(
            generator.generate_with_seed(seed),
            generator.generate_with_seed(seed)
        );
    }

    #[test]
    fn test_strips_differ_between_runs() {
        let generator = StripGenerator::new();
        let a = generator.generate();
        let b = generator.generate();
        // 6 independent 15-of-90 cards colliding wholesale is negligible.
        assert_ne!(a, b);
    }
}
