//! # Huffman Coding
//!
//! *Optimal prefix codes from symbol frequencies.*
//!
//! ## Intuition First
//!
//! Think of a Morse code designed for one particular text. Letters that show up
//! all the time should get the shortest signals, rare letters can afford long
//! ones. Huffman's algorithm finds the assignment of binary codewords that makes
//! the encoded text as short as possible, under the rule that no codeword is the
//! beginning of another (so a decoder never needs a separator).
//!
//! ## The Algorithm
//!
//! Start with one leaf per symbol, weighted by how often it occurs. Take the two
//! lightest trees, hang them under a new parent whose weight is their sum, and
//! put the parent back. Repeat until a single tree is left. Reading the path
//! from the root to a leaf (`0` for left, `1` for right) gives that symbol's
//! codeword.
//!
//! ```text
//!   a:5  b:9  c:12  d:13
//!
//!   merge a+b -> 14       merge c+d -> 25       merge 14+25 -> 39
//!
//!              39
//!            0/  \1
//!          14      25
//!         0/ \1   0/ \1
//!         a   b   c   d        a=00  b=01  c=10  d=11
//! ```
//!
//! ## Mathematical Formulation
//!
//! Given weights $w_s$ for each symbol $s$, the tree minimises the weighted
//! path length
//!
//! ```text
//! L = sum_s  w_s * len(code(s))
//! ```
//!
//! over all binary prefix codes. $L / \sum_s w_s$ lies within one bit of the
//! Shannon entropy of the distribution.
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(n \log n)$ for $n$ distinct symbols, dominated by $2n - 1$
//!   heap insertions and extractions.
//! - **Space**: $O(n)$ for the heap and the $2n - 1$ tree nodes.
//!
//! ## Failure Modes
//!
//! 1. **Empty alphabet**: there is no tree to build; reported as
//!    [`Error::EmptyAlphabet`].
//! 2. **Zero frequencies**: not rejected, but such symbols still receive
//!    codewords. Callers should only pass symbols that occur.
//! 3. **Huge counts**: frequencies whose total exceeds `u64::MAX` are reported
//!    as [`Error::FrequencyOverflow`] instead of wrapping.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - [`PriorityQueue`]: an indexed binary min-heap whose items can be
//!   reprioritized in place.
//! - [`HuffmanTree`]: tree construction and codeword assignment with fixed
//!   tie-breaking, so equal inputs always produce identical codewords.
//! - [`compute_frequencies`]: a per-`char` tally to feed the builder.
//!
//! ```
//! use huffman_code::{compute_frequencies, compute_huffman_encoding};
//!
//! let frequencies = compute_frequencies("abracadabra");
//! let encoding = compute_huffman_encoding(&frequencies)?;
//! assert_eq!(encoding[&'a'], "0");
//! # Ok::<(), huffman_code::Error>(())
//! ```
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."
//! - Cormen, T. H., et al. "Introduction to Algorithms", section 16.3.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod frequency;
pub mod heap;
pub mod huffman;

pub use error::{Error, Result};
pub use frequency::{compute_frequencies, FrequencyMap};
pub use heap::{ItemHandle, PriorityItem, PriorityQueue};
pub use huffman::{compute_huffman_encoding, encoded_bits, Encoding, HuffmanTree, TreeNode};
