#![no_main]
use huffman_code::{compute_frequencies, compute_huffman_encoding, encoded_bits, HuffmanTree};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let frequencies = compute_frequencies(&text);

    if frequencies.is_empty() {
        assert!(compute_huffman_encoding(&frequencies).is_err());
        return;
    }

    let tree = HuffmanTree::build(&frequencies).unwrap();
    let encoding = tree.encoding();

    assert!(encoding.keys().eq(frequencies.keys()));
    assert_eq!(encoded_bits(&encoding, &frequencies), tree.weighted_length());

    let codes: Vec<&String> = encoding.values().collect();
    for (i, a) in codes.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &codes[i + 1..] {
            assert!(!a.starts_with(b.as_str()) && !b.starts_with(a.as_str()));
        }
    }
});
