//! Counting binary search tree shapes.
//!
//! For the keys `1..=n`, any key can sit at the root. Whatever sits at root `r` splits the
//! remaining keys into `r - 1` keys that must go left and `n - r` keys that must go right, and
//! each side can take any of its own shapes independently. So
//!
//! ```text
//! count(0) = count(1) = 1
//! count(n) = sum over r in 1..=n of count(r - 1) * count(n - r)
//! ```
//!
//! which are the Catalan numbers.

/// Returns how many structurally distinct binary search trees can hold `num_keys` distinct keys.
/// This does not look at any actual tree.
///
/// # Panics
///
/// If the count does not fit in a `u128`, which happens once `num_keys` reaches 70.
/// Use [`checked_count_trees`] to handle that case.
///
/// # Examples
///
/// ```
/// use plain_bst::count_trees;
///
/// assert_eq!(count_trees(0), 1);
/// assert_eq!(count_trees(3), 5);
/// assert_eq!(count_trees(4), 14);
/// ```
pub fn count_trees(num_keys: usize) -> u128 {
    match checked_count_trees(num_keys) {
        Some(count) => count,
        None => panic!("count_trees({}) overflows u128", num_keys),
    }
}

/// Like [`count_trees`] but returns `None` instead of panicking when the count overflows.
pub fn checked_count_trees(num_keys: usize) -> Option<u128> {
    // counts[n] is the number of shapes for n keys.
    let mut counts: Vec<u128> = Vec::new();
    for n in 0..=num_keys {
        let count = if n <= 1 {
            1
        } else {
            (1..=n).try_fold(0u128, |sum, root| {
                counts[root - 1]
                    .checked_mul(counts[n - root])?
                    .checked_add(sum)
            })?
        };
        counts.push(count);
    }
    log::debug!("count_trees built table for {} keys", num_keys);

    counts.pop()
}
