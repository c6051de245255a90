//! Huffman tree construction and codeword assignment.
//!
//! Builds the tree by repeatedly merging the two lightest subtrees taken from
//! a [`PriorityQueue`], then walks it depth-first to read off one codeword per
//! symbol.
//!
//! # Conventions
//!
//! The algorithm leaves a few choices open. They are fixed here so that equal
//! inputs always produce identical codewords:
//!
//! - Leaves enter the queue in ascending symbol order, and equal weights leave
//!   the queue in insertion order.
//! - The first subtree extracted becomes the left child, the second the right.
//! - Left edges are labelled `0`, right edges `1`.
//! - An alphabet of one symbol is coded as `"0"`.
//!
//! # Historical Context
//!
//! David Huffman (1952) developed this algorithm as a term paper at MIT.
//! It was the first practical algorithm for constructing optimal prefix codes.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::frequency::FrequencyMap;
use crate::heap::PriorityQueue;

/// Mapping from symbol to codeword, written as a string of `'0'` and `'1'`.
pub type Encoding = BTreeMap<char, String>;

/// Huffman tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    /// A single alphabet symbol.
    Leaf {
        /// The symbol this leaf stands for.
        symbol: char,
        /// Occurrence count of the symbol.
        frequency: u64,
    },
    /// The merge of two subtrees.
    Internal {
        /// Sum of both children's frequencies.
        frequency: u64,
        /// Subtree reached by a `0` bit.
        left: Box<TreeNode>,
        /// Subtree reached by a `1` bit.
        right: Box<TreeNode>,
    },
}

impl TreeNode {
    /// Create a leaf for `symbol`.
    pub fn leaf(symbol: char, frequency: u64) -> Self {
        TreeNode::Leaf { symbol, frequency }
    }

    /// Merge two subtrees under a new internal node, taking ownership of both.
    ///
    /// # Errors
    /// Returns `Error::FrequencyOverflow` if the summed frequency does not fit
    /// in a `u64`.
    pub fn merge(left: TreeNode, right: TreeNode) -> Result<Self> {
        let (a, b) = (left.frequency(), right.frequency());
        let frequency = a.checked_add(b).ok_or(Error::FrequencyOverflow(a, b))?;
        Ok(TreeNode::Internal {
            frequency,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// The symbol of a leaf, `None` for internal nodes.
    pub fn symbol(&self) -> Option<char> {
        match self {
            TreeNode::Leaf { symbol, .. } => Some(*symbol),
            TreeNode::Internal { .. } => None,
        }
    }

    /// Weight of the subtree rooted here.
    pub fn frequency(&self) -> u64 {
        match self {
            TreeNode::Leaf { frequency, .. } => *frequency,
            TreeNode::Internal { frequency, .. } => *frequency,
        }
    }

    /// The `0` child of an internal node.
    pub fn left(&self) -> Option<&TreeNode> {
        match self {
            TreeNode::Leaf { .. } => None,
            TreeNode::Internal { left, .. } => Some(left),
        }
    }

    /// The `1` child of an internal node.
    pub fn right(&self) -> Option<&TreeNode> {
        match self {
            TreeNode::Leaf { .. } => None,
            TreeNode::Internal { right, .. } => Some(right),
        }
    }

    /// Returns true for leaves.
    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }
}

/// A complete Huffman tree over a non-empty alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: TreeNode,
    num_symbols: usize,
}

impl HuffmanTree {
    /// Build the tree for the given symbol frequencies.
    ///
    /// Every frequency is expected to be positive. Zero counts are not
    /// rejected in release builds, but the resulting code assigns codewords to
    /// symbols that never occur.
    ///
    /// # Errors
    /// Returns `Error::EmptyAlphabet` if `frequencies` is empty, and
    /// `Error::FrequencyOverflow` if the counts sum past `u64::MAX`.
    pub fn build(frequencies: &FrequencyMap) -> Result<Self> {
        if frequencies.is_empty() {
            return Err(Error::EmptyAlphabet);
        }

        let mut queue = PriorityQueue::with_capacity(frequencies.len());
        for (&symbol, &frequency) in frequencies {
            debug_assert!(frequency > 0, "symbol {:?} has a zero frequency", symbol);
            queue.insert(TreeNode::leaf(symbol, frequency), frequency);
        }

        while queue.size() > 1 {
            let left = queue.extract_min()?.into_value();
            let right = queue.extract_min()?.into_value();
            let parent = TreeNode::merge(left, right)?;
            let frequency = parent.frequency();
            queue.insert(parent, frequency);
        }

        let root = queue.extract_min()?.into_value();
        Ok(Self {
            root,
            num_symbols: frequencies.len(),
        })
    }

    /// The root node. A leaf when the alphabet has a single symbol.
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Number of distinct symbols (leaves) in the tree.
    pub fn num_symbols(&self) -> usize {
        self.num_symbols
    }

    /// Derive the codeword of every symbol.
    pub fn encoding(&self) -> Encoding {
        let mut codes = Encoding::new();
        Self::build_codes(&self.root, String::new(), &mut codes);
        codes
    }

    /// Total number of bits needed to encode every counted occurrence, i.e. the
    /// sum of `frequency * codeword length` over all leaves.
    ///
    /// Saturates at `u64::MAX`.
    pub fn weighted_length(&self) -> u64 {
        Self::weigh(&self.root, 0)
    }

    fn build_codes(node: &TreeNode, prefix: String, codes: &mut Encoding) {
        match node {
            TreeNode::Leaf { symbol, .. } => {
                let code = if prefix.is_empty() {
                    String::from("0")
                } else {
                    prefix
                };
                codes.insert(*symbol, code);
            }
            TreeNode::Internal { left, right, .. } => {
                let mut left_prefix = prefix.clone();
                left_prefix.push('0');
                Self::build_codes(left, left_prefix, codes);

                let mut right_prefix = prefix;
                right_prefix.push('1');
                Self::build_codes(right, right_prefix, codes);
            }
        }
    }

    fn weigh(node: &TreeNode, depth: u64) -> u64 {
        match node {
            // a lone root leaf still costs one bit per occurrence
            TreeNode::Leaf { frequency, .. } => frequency.saturating_mul(depth.max(1)),
            TreeNode::Internal { left, right, .. } => {
                Self::weigh(left, depth + 1).saturating_add(Self::weigh(right, depth + 1))
            }
        }
    }
}

/// Compute the Huffman codeword of every symbol in `frequencies`.
///
/// # Errors
/// Returns `Error::EmptyAlphabet` if `frequencies` is empty, and
/// `Error::FrequencyOverflow` if the counts sum past `u64::MAX`.
pub fn compute_huffman_encoding(frequencies: &FrequencyMap) -> Result<Encoding> {
    Ok(HuffmanTree::build(frequencies)?.encoding())
}

/// Number of bits `encoding` spends on the occurrences counted in
/// `frequencies`. Symbols missing from `encoding` contribute nothing.
/// Saturates at `u64::MAX`.
pub fn encoded_bits(encoding: &Encoding, frequencies: &FrequencyMap) -> u64 {
    frequencies
        .iter()
        .filter_map(|(symbol, &count)| encoding.get(symbol).map(|code| (count, code.len())))
        .fold(0u64, |bits, (count, len)| bits.saturating_add(count.saturating_mul(len as u64)))
}
