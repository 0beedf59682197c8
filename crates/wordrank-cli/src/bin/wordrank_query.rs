// wordrank-query: answer autocomplete queries against a weighted dictionary.
//
// The dictionary file holds an entry count N on its first line, then N
// lines of WEIGHT<TAB>TERM. Each stdin line is a prefix; the top K
// completions are printed one per line as the weight (one fractional
// digit, right-aligned in a 14-column field), two spaces, and the term.
//
// Usage:
//   wordrank-query FILE K

use std::io::{self, BufRead, Write};

use wordrank_autocomplete::Autocomplete;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if wordrank_cli::wants_help(&args) {
        println!("wordrank-query: Answer autocomplete queries from stdin.");
        println!();
        println!("Usage: wordrank-query FILE K");
        println!();
        println!("FILE   dictionary file: a count N, then N WEIGHT<TAB>TERM lines");
        println!("K      number of matches to print per query");
        println!();
        println!("Each line read from stdin is a prefix; the K highest-weight");
        println!("completions are printed in descending order of weight.");
        return;
    }

    if args.len() != 2 {
        wordrank_cli::fatal("usage: wordrank-query FILE K");
    }

    let k: usize = args[1]
        .parse()
        .unwrap_or_else(|_| wordrank_cli::fatal(&format!("invalid match count \"{}\"", args[1])));

    let contents = std::fs::read_to_string(&args[0])
        .unwrap_or_else(|e| wordrank_cli::fatal(&format!("failed to read {}: {}", args[0], e)));
    let (terms, weights) = wordrank_cli::parse_dictionary(&contents)
        .unwrap_or_else(|e| wordrank_cli::fatal(&e));
    let autocomplete =
        Autocomplete::new(&terms, &weights).unwrap_or_else(|e| wordrank_cli::fatal(&e.to_string()));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let prefix = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        for term in autocomplete.top_matches(&prefix, k) {
            let _ = writeln!(out, "{:14.1}  {}", autocomplete.weight_of(&term), term);
        }
    }
}
