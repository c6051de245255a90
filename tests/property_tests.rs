use std::collections::{HashMap, VecDeque};

use huffman_code::{
    compute_frequencies, compute_huffman_encoding, encoded_bits, Encoding, Error, FrequencyMap,
    HuffmanTree,
};
use proptest::prelude::*;

/// Optimal weighted path length via the two-queue method: leaves sorted by
/// weight in one queue, merged subtrees (produced in non-decreasing order) in
/// the other. A lone symbol costs one bit per occurrence.
fn optimal_cost(frequencies: &FrequencyMap) -> u64 {
    let mut leaves: Vec<u64> = frequencies.values().copied().collect();
    leaves.sort_unstable();
    if leaves.len() == 1 {
        return leaves[0];
    }

    let mut leaves: VecDeque<u64> = leaves.into();
    let mut merged: VecDeque<u64> = VecDeque::new();

    let mut cost = 0;
    while leaves.len() + merged.len() > 1 {
        let a = take_min(&mut leaves, &mut merged);
        let b = take_min(&mut leaves, &mut merged);
        cost += a + b;
        merged.push_back(a + b);
    }
    cost
}

fn take_min(leaves: &mut VecDeque<u64>, merged: &mut VecDeque<u64>) -> u64 {
    let next = match (leaves.front(), merged.front()) {
        (Some(&l), Some(&m)) if m < l => merged.pop_front(),
        (Some(_), _) => leaves.pop_front(),
        (None, _) => merged.pop_front(),
    };
    next.unwrap_or(0)
}

/// Greedy codeword matcher; only unambiguous for prefix-free codes.
fn decode(encoding: &Encoding, bits: &str) -> Option<String> {
    let lookup: HashMap<&str, char> = encoding
        .iter()
        .map(|(&symbol, code)| (code.as_str(), symbol))
        .collect();

    let mut out = String::new();
    let mut start = 0;
    for end in 1..=bits.len() {
        if let Some(&symbol) = lookup.get(&bits[start..end]) {
            out.push(symbol);
            start = end;
        }
    }
    (start == bits.len()).then_some(out)
}

fn frequency_maps() -> impl Strategy<Value = FrequencyMap> {
    prop::collection::btree_map(any::<char>(), 1u64..1000, 1..48)
}

#[test]
fn test_empty_alphabet_is_rejected() {
    assert_eq!(
        compute_huffman_encoding(&FrequencyMap::new()),
        Err(Error::EmptyAlphabet)
    );
    assert_eq!(
        compute_huffman_encoding(&compute_frequencies("")),
        Err(Error::EmptyAlphabet)
    );
}

#[test]
fn test_reference_cost_on_known_inputs() {
    let four: FrequencyMap = [('a', 5), ('b', 9), ('c', 12), ('d', 13)].into_iter().collect();
    assert_eq!(optimal_cost(&four), 78);

    let one: FrequencyMap = [('a', 5)].into_iter().collect();
    assert_eq!(optimal_cost(&one), 5);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_complete_and_prefix_free(frequencies in frequency_maps()) {
        let encoding = compute_huffman_encoding(&frequencies).unwrap();

        prop_assert!(encoding.keys().eq(frequencies.keys()));

        let codes: Vec<&str> = encoding.values().map(String::as_str).collect();
        for (i, a) in codes.iter().enumerate() {
            prop_assert!(!a.is_empty());
            prop_assert!(a.chars().all(|bit| bit == '0' || bit == '1'));
            for b in &codes[i + 1..] {
                prop_assert!(!a.starts_with(b) && !b.starts_with(a), "{} / {}", a, b);
            }
        }
    }

    #[test]
    fn prop_weighted_length_is_optimal(frequencies in frequency_maps()) {
        let tree = HuffmanTree::build(&frequencies).unwrap();
        let encoding = tree.encoding();

        let expected = optimal_cost(&frequencies);
        prop_assert_eq!(tree.weighted_length(), expected);
        prop_assert_eq!(encoded_bits(&encoding, &frequencies), expected);
    }

    #[test]
    fn prop_deterministic(frequencies in frequency_maps()) {
        let first = compute_huffman_encoding(&frequencies).unwrap();
        let second = compute_huffman_encoding(&frequencies.clone()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_text_roundtrip(text in "[a-f ]{1,200}") {
        let frequencies = compute_frequencies(&text);
        let encoding = compute_huffman_encoding(&frequencies).unwrap();

        let bits: String = text.chars().map(|c| encoding[&c].as_str()).collect();
        prop_assert_eq!(bits.len() as u64, encoded_bits(&encoding, &frequencies));
        prop_assert_eq!(decode(&encoding, &bits), Some(text));
    }
}
