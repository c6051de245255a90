//! Symbol frequency counting.
//!
//! Symbols are Unicode scalar values (`char`), not bytes, so a multi-byte
//! character counts once.

use std::collections::BTreeMap;

/// Mapping from symbol to its number of occurrences.
///
/// Ordered by symbol, which is also the order in which the tree builder seeds
/// its queue.
pub type FrequencyMap = BTreeMap<char, u64>;

/// Count how often each `char` occurs in `text`.
pub fn compute_frequencies(text: &str) -> FrequencyMap {
    text.chars().fold(FrequencyMap::new(), |mut acc, symbol| {
        *acc.entry(symbol).or_insert(0) += 1;
        acc
    })
}
