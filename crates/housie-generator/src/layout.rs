//! Card layout: deciding which cells of the grid receive numbers.
//!
//! Layout runs in three steps before any actual number is drawn:
//!
//! 1. [`allocate_column_counts`] spreads the card's 15 numbers over the 9
//!    columns, 1-3 each.
//! 2. [`choose_rows`] picks, per column, which rows hold that column's
//!    numbers.
//! 3. [`balance`] repairs the per-column choices until every row holds
//!    exactly 5 numbers.
//!
//! The result is a [`CardLayout`], a purely structural object the populator
//! then fills with balls.

use housie_core::card::{MAX_NUMBERS_PER_COLUMN, NUMBERS_PER_CARD, NUMBERS_PER_ROW};
use rand::{
    Rng, RngExt as _,
    seq::{IndexedRandom as _, SliceRandom as _},
};

/// Most repair passes the balancer makes before reporting failure.
pub const MAX_BALANCE_PASSES: usize = 100;

/// A set of row indices (0-2) within one column.
///
/// Iteration is ascending by construction, which is what keeps a column's
/// numbers ascending once sorted values are assigned in iteration order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowSet(u8);

impl RowSet {
    /// The empty set.
    pub const EMPTY: Self = RowSet(0);

    /// Inserts row `y` (0-2).
    pub fn insert(&mut self, y: u8) {
        debug_assert!(y < 3);
        self.0 |= 1 << y;
    }

    /// Removes row `y`.
    pub fn remove(&mut self, y: u8) {
        self.0 &= !(1 << y);
    }

    /// Returns `true` if the set contains row `y`.
    #[must_use]
    pub const fn contains(self, y: u8) -> bool {
        self.0 & (1 << y) != 0
    }

    /// Returns the number of rows in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if no row is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the rows in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..3).filter(move |&y| self.contains(y))
    }
}

impl FromIterator<u8> for RowSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = RowSet::EMPTY;
        for y in iter {
            set.insert(y);
        }
        set
    }
}

/// Which rows receive a number, per column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    rows: [RowSet; 9],
}

impl CardLayout {
    /// Samples an initial layout: column counts via
    /// [`allocate_column_counts`], rows per column via [`choose_rows`].
    ///
    /// The initial layout satisfies the column constraints but usually not
    /// the row constraint; run [`balance`] before populating.
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let counts = allocate_column_counts(rng);
        let mut rows = [RowSet::EMPTY; 9];
        for (set, count) in rows.iter_mut().zip(counts) {
            *set = choose_rows(count, rng);
        }
        CardLayout { rows }
    }

    /// Returns the rows holding numbers in column `x` (0-8).
    #[must_use]
    pub fn rows_for(&self, x: usize) -> RowSet {
        self.rows[x]
    }

    /// Returns how many numbers column `x` holds.
    #[must_use]
    pub fn column_count(&self, x: usize) -> usize {
        self.rows[x].len()
    }

    /// Returns how many numbers row `y` holds across all columns.
    #[must_use]
    pub fn row_count(&self, y: u8) -> usize {
        self.rows.iter().filter(|set| set.contains(y)).count()
    }

    /// Returns the per-row counts `[row 0, row 1, row 2]`.
    #[must_use]
    pub fn row_counts(&self) -> [usize; 3] {
        [self.row_count(0), self.row_count(1), self.row_count(2)]
    }

    /// Returns `true` once every row holds exactly 5 numbers.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.row_counts() == [NUMBERS_PER_ROW; 3]
    }
}

/// Distributes the card's 15 numbers over the 9 columns, 1-3 each.
///
/// Every column starts with one number; the remaining six go to uniformly
/// random columns that still have room. Any column may end up with extras,
/// but the greedy process does not sample uniformly over all valid
/// 9-tuples.
pub fn allocate_column_counts<R>(rng: &mut R) -> [usize; 9]
where
    R: Rng + ?Sized,
{
    let mut counts = [1; 9];
    let mut remaining = NUMBERS_PER_CARD - counts.len();
    while remaining > 0 {
        let x = rng.random_range(0..counts.len());
        if counts[x] < MAX_NUMBERS_PER_COLUMN {
            counts[x] += 1;
            remaining -= 1;
        }
    }
    counts
}

/// Picks which `count` of the three rows hold a column's numbers,
/// uniformly without replacement.
pub fn choose_rows<R>(count: usize, rng: &mut R) -> RowSet
where
    R: Rng + ?Sized,
{
    debug_assert!((1..=3).contains(&count));
    let mut rows = [0u8, 1, 2];
    rows.shuffle(rng);
    rows[..count].iter().copied().collect()
}

/// Repairs `layout` until every row holds exactly 5 numbers.
///
/// Local-search repair bounded at [`MAX_BALANCE_PASSES`]. Each pass visits
/// the rows in order and moves one placement into an under-filled row (from
/// a uniformly random column that does not hold that row and has fewer than
/// 3 numbers) or out of an over-filled row (from a uniformly random column
/// that holds it and has more than 1). Column bounds are never violated and
/// a column never holds the same row twice.
///
/// Returns whether the layout ended balanced. The repair is best-effort:
/// with no eligible column a row stays off-target for that pass, and the
/// pass bound caps the search.
pub fn balance<R>(layout: &mut CardLayout, rng: &mut R) -> bool
where
    R: Rng + ?Sized,
{
    for pass in 0..MAX_BALANCE_PASSES {
        let mut settled = true;
        for y in 0..3u8 {
            let count = layout.row_count(y);
            if count < NUMBERS_PER_ROW {
                settled = false;
                add_to_row(layout, y, rng);
            } else if count > NUMBERS_PER_ROW {
                settled = false;
                remove_from_row(layout, y, rng);
            }
        }
        if settled {
            log::trace!("layout balanced after {pass} repair passes");
            return true;
        }
    }
    layout.is_balanced()
}

fn add_to_row<R>(layout: &mut CardLayout, y: u8, rng: &mut R)
where
    R: Rng + ?Sized,
{
    let eligible: Vec<usize> = (0..layout.rows.len())
        .filter(|&x| !layout.rows[x].contains(y) && layout.rows[x].len() < MAX_NUMBERS_PER_COLUMN)
        .collect();
    if let Some(&x) = eligible.choose(rng) {
        layout.rows[x].insert(y);
    }
}

fn remove_from_row<R>(layout: &mut CardLayout, y: u8, rng: &mut R)
where
    R: Rng + ?Sized,
{
    let eligible: Vec<usize> = (0..layout.rows.len())
        .filter(|&x| layout.rows[x].contains(y) && layout.rows[x].len() > 1)
        .collect();
    if let Some(&x) = eligible.choose(rng) {
        layout.rows[x].remove(y);
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    #[test]
    fn test_row_set_iterates_ascending() {
        let set: RowSet = [2u8, 0].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(0));
        assert!(!set.contains(1));
        let rows: Vec<u8> = set.iter().collect();
        assert_eq!(rows, [0, 2]);
    }

    #[test]
    fn test_choose_rows_counts() {
        let mut rng = Pcg64::from_seed([9; 32]);
        for count in 1..=3 {
            for _ in 0..50 {
                let set = choose_rows(count, &mut rng);
                assert_eq!(set.len(), count);
            }
        }
    }

    #[test]
    fn test_add_respects_column_limits() {
        // Every column already holds all three rows: nothing is eligible.
        let full: RowSet = [0u8, 1, 2].into_iter().collect();
        let mut layout = CardLayout { rows: [full; 9] };
        let mut rng = Pcg64::from_seed([1; 32]);
        add_to_row(&mut layout, 1, &mut rng);
        assert_eq!(layout, CardLayout { rows: [full; 9] });
    }

    #[test]
    fn test_remove_keeps_columns_nonempty() {
        // Every column holds only row 1: removal would empty it.
        let single: RowSet = [1u8].into_iter().collect();
        let mut layout = CardLayout { rows: [single; 9] };
        let mut rng = Pcg64::from_seed([2; 32]);
        remove_from_row(&mut layout, 1, &mut rng);
        assert_eq!(layout, CardLayout { rows: [single; 9] });
    }

    #[test]
    fn test_add_targets_requested_row() {
        let single: RowSet = [0u8].into_iter().collect();
        let mut layout = CardLayout { rows: [single; 9] };
        let mut rng = Pcg64::from_seed([3; 32]);
        add_to_row(&mut layout, 2, &mut rng);
        assert_eq!(layout.row_count(2), 1);
        assert_eq!(layout.row_count(0), 9);
    }

    proptest! {
        #[test]
        fn allocation_is_within_bounds(seed in any::<[u8; 32]>()) {
            let mut rng = Pcg64::from_seed(seed);
            let counts = allocate_column_counts(&mut rng);
            prop_assert!(counts.iter().all(|&c| (1..=3).contains(&c)));
            prop_assert_eq!(counts.iter().sum::<usize>(), NUMBERS_PER_CARD);
        }

        #[test]
        fn balancing_reaches_five_per_row(seed in any::<[u8; 32]>()) {
            let mut rng = Pcg64::from_seed(seed);
            let mut layout = CardLayout::random(&mut rng);
            // Empirically the repair always converges from a fresh
            // allocation; this pins that down across arbitrary seeds.
            prop_assert!(balance(&mut layout, &mut rng));
            prop_assert_eq!(layout.row_counts(), [5, 5, 5]);
            for x in 0..9 {
                prop_assert!((1..=3).contains(&layout.column_count(x)));
            }
        }
    }
}
