//! Sampling without replacement.
//!
//! Both the column populator and the number caller need the same primitive:
//! draw some number of distinct values uniformly from a finite pool. This
//! module holds the one shared implementation, shuffle-and-take over
//! [`rand::seq`].

use std::ops::RangeInclusive;

use rand::{Rng, seq::SliceRandom as _};

/// Draws `count` distinct values uniformly from `range`.
///
/// The returned values are in random order; callers that need them sorted
/// sort afterwards. Drawing the whole pool yields a uniform random
/// permutation of it.
///
/// # Panics
///
/// Panics if `count` exceeds the number of values in `range`.
pub fn sample_distinct<R>(rng: &mut R, range: RangeInclusive<u8>, count: usize) -> Vec<u8>
where
    R: Rng + ?Sized,
{
    let mut pool: Vec<u8> = range.collect();
    assert!(
        count <= pool.len(),
        "cannot draw {count} distinct values from a pool of {}",
        pool.len()
    );
    let (drawn, _) = pool.partial_shuffle(rng, count);
    drawn.to_vec()
}
