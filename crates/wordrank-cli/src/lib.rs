// wordrank-cli: shared utilities for the CLI tools.

use std::process;

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Parse a dictionary file into parallel term/weight collections.
///
/// The first line is the entry count `N`; each of the next `N` lines is a
/// weight and a term separated by a single tab. Leading whitespace before
/// the weight is ignored; the term is taken verbatim to the end of the line
/// (terms may contain spaces, including a leading one).
pub fn parse_dictionary(input: &str) -> Result<(Vec<String>, Vec<f64>), String> {
    let mut lines = input.lines();
    let count_line = lines.next().ok_or("empty dictionary file")?;
    let count: usize = count_line
        .trim()
        .parse()
        .map_err(|_| format!("invalid entry count \"{}\"", count_line.trim()))?;

    let mut terms = Vec::with_capacity(count);
    let mut weights = Vec::with_capacity(count);
    for i in 0..count {
        let line = lines
            .next()
            .ok_or_else(|| format!("expected {} entries, file ends after {}", count, i))?;
        let entry = line.trim_start();
        let (weight_str, term) = entry.split_once('\t').ok_or_else(|| {
            format!("line {}: expected WEIGHT<TAB>TERM, got \"{}\"", i + 2, line)
        })?;
        let weight: f64 = weight_str
            .trim()
            .parse()
            .map_err(|_| format!("line {}: invalid weight \"{}\"", i + 2, weight_str))?;
        weights.push(weight);
        terms.push(term.to_string());
    }
    Ok((terms, weights))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_count_and_entries() {
        let input = "3\n100.0\tthe\n50.5\tof\n7.0\tand\n";
        let (terms, weights) = parse_dictionary(input).unwrap();
        assert_eq!(terms, vec!["the", "of", "and"]);
        assert_eq!(weights, vec![100.0, 50.5, 7.0]);
    }

    #[test]
    fn tolerates_leading_whitespace_before_the_weight() {
        let input = "2\n  431052.0\tAl Mahallah al Kubra\n\t420195.0\tAl Mansurah\n";
        let (terms, weights) = parse_dictionary(input).unwrap();
        assert_eq!(terms, vec!["Al Mahallah al Kubra", "Al Mansurah"]);
        assert_eq!(weights, vec![431052.0, 420195.0]);
    }

    #[test]
    fn keeps_the_term_verbatim_after_the_tab() {
        let input = "1\n7.0\t spy\n";
        let (terms, _) = parse_dictionary(input).unwrap();
        assert_eq!(terms, vec![" spy"]);
    }

    #[test]
    fn extra_lines_after_the_count_are_ignored() {
        let input = "1\n5.0\tword\ngarbage\n";
        let (terms, weights) = parse_dictionary(input).unwrap();
        assert_eq!(terms, vec!["word"]);
        assert_eq!(weights, vec![5.0]);
    }

    #[test]
    fn rejects_a_bad_count_line() {
        assert!(parse_dictionary("").is_err());
        assert!(parse_dictionary("x\n").is_err());
    }

    #[test]
    fn rejects_truncated_files() {
        let err = parse_dictionary("3\n1.0\ta\n").unwrap_err();
        assert!(err.contains("ends after 1"), "got: {err}");
    }

    #[test]
    fn rejects_entries_without_a_tab() {
        let err = parse_dictionary("1\n1.0 word\n").unwrap_err();
        assert!(err.contains("WEIGHT<TAB>TERM"), "got: {err}");
    }

    #[test]
    fn rejects_a_malformed_weight() {
        let err = parse_dictionary("1\nheavy\tword\n").unwrap_err();
        assert!(err.contains("invalid weight"), "got: {err}");
    }
}
