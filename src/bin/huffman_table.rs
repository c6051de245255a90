//! Print the symbol frequencies and Huffman codewords of a text.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use huffman_code::{compute_frequencies, compute_huffman_encoding, encoded_bits};

#[derive(Debug, Parser)]
#[command(about = "Print the symbol frequencies and Huffman codewords of a text")]
struct Args {
    /// Text to encode. Standard input is read when neither this nor --file is given
    text: Option<String>,
    /// Read the text from a file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,
}

fn read_input(args: Args) -> anyhow::Result<String> {
    match (args.text, args.file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display())),
        (None, None) => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read standard input")?;
            Ok(text)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let text = read_input(args)?;

    let frequencies = compute_frequencies(&text);
    let encoding =
        compute_huffman_encoding(&frequencies).context("failed to build the Huffman code")?;

    println!("FREQUENCIES");
    println!("{}", "-".repeat(44));
    for (symbol, count) in &frequencies {
        println!("'{}' = {}", symbol.escape_debug(), count);
    }

    println!();
    println!("HUFFMAN ENCODING");
    println!("{}", "-".repeat(44));
    for (symbol, code) in &encoding {
        println!("'{}' = {}", symbol.escape_debug(), code);
    }

    let symbols: u64 = frequencies.values().sum();
    let bits = encoded_bits(&encoding, &frequencies);
    println!();
    println!(
        "{} symbols: {} bits encoded, {} bits at 8 bits per symbol",
        symbols,
        bits,
        symbols * 8
    );
    Ok(())
}
