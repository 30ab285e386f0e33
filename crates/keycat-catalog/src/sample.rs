//! Unbiased random draws.

use rand::Rng;

/// Shuffles `items` in place with Fisher-Yates.
///
/// Walks `i` from the last index down to 1 and swaps it with a uniform `j`
/// in `0..=i`, so every permutation is equally likely.
pub(crate) fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Draws up to `count` distinct items from `pool` in random order.
///
/// A non-positive count yields nothing; a count past the pool size yields
/// the whole pool shuffled.
pub(crate) fn draw<T, R: Rng + ?Sized>(mut pool: Vec<T>, count: i64, rng: &mut R) -> Vec<T> {
    if count <= 0 {
        return Vec::new();
    }
    shuffle(&mut pool, rng);
    let take = usize::try_from(count).map_or(pool.len(), |n| n.min(pool.len()));
    pool.truncate(take);
    pool
}
