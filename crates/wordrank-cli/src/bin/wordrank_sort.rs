// wordrank-sort: sort words under a custom alphabet order.
//
// The first stdin line is a permutation of the alphabet; the remaining
// lines are the words to sort. The words are printed in the order induced
// by the permutation, one per line, with no trailing newline after the
// last word.
//
// Usage:
//   wordrank-sort [-h]

use std::io::{self, BufRead, Write};

use wordrank_trie::Trie;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if wordrank_cli::wants_help(&args) {
        println!("wordrank-sort: Sort words under a custom alphabet order.");
        println!();
        println!("Usage: wordrank-sort [-h]");
        println!();
        println!("Reads from stdin: the first line is the alphabet permutation,");
        println!("each remaining line is a word. Prints the words sorted under");
        println!("that alphabet, one per line.");
        return;
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let order = match lines.next() {
        Some(Ok(line)) => line,
        Some(Err(e)) => wordrank_cli::fatal(&format!("error reading stdin: {e}")),
        None => wordrank_cli::fatal("missing alphabet order on the first input line"),
    };

    let mut words = Trie::new();
    for line in lines {
        let line = match line {
            Ok(l) => l,
            Err(e) => wordrank_cli::fatal(&format!("error reading stdin: {e}")),
        };
        if line.is_empty() {
            continue;
        }
        if let Err(e) = words.insert(&line) {
            wordrank_cli::fatal(&e.to_string());
        }
    }

    let sorted = match words.ordered_words(&order) {
        Ok(w) => w,
        Err(e) => wordrank_cli::fatal(&e.to_string()),
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let _ = write!(out, "{}", sorted.join("\n"));
}
