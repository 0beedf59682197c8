// Criterion benchmarks for wordrank-autocomplete.
//
// The dictionary is generated in-process (xorshift over a small alphabet),
// so the benches need no data files.
//
// Run: cargo bench -p wordrank-autocomplete

use criterion::{Criterion, criterion_group, criterion_main};

use wordrank_autocomplete::Autocomplete;

struct XorShift64(u64);

impl XorShift64 {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

fn generate_dictionary(n: usize) -> (Vec<String>, Vec<f64>) {
    let alphabet: Vec<char> = ('a'..='j').collect();
    let mut rng = XorShift64(0x0dd5eed);
    let mut seen = std::collections::HashSet::new();
    let mut terms = Vec::with_capacity(n);
    let mut weights = Vec::with_capacity(n);

    while terms.len() < n {
        let len = 3 + (rng.next() % 12) as usize;
        let term: String = (0..len)
            .map(|_| alphabet[(rng.next() % alphabet.len() as u64) as usize])
            .collect();
        if seen.insert(term.clone()) {
            weights.push((rng.next() % 1_000_000) as f64);
            terms.push(term);
        }
    }
    (terms, weights)
}

/// Build a 50k-term dictionary from scratch.
fn bench_build(c: &mut Criterion) {
    let (terms, weights) = generate_dictionary(50_000);

    c.bench_function("build_50k_terms", |b| {
        b.iter(|| {
            std::hint::black_box(Autocomplete::new(&terms, &weights).expect("valid dictionary"));
        });
    });
}

/// Small-k queries over short prefixes, the pruning-friendly case.
fn bench_top_matches_small_k(c: &mut Criterion) {
    let (terms, weights) = generate_dictionary(50_000);
    let auto = Autocomplete::new(&terms, &weights).expect("valid dictionary");
    let prefixes = ["a", "ab", "abc", "j", "fe", ""];

    c.bench_function("top_matches_k5_6_prefixes", |b| {
        b.iter(|| {
            for prefix in &prefixes {
                std::hint::black_box(auto.top_matches(prefix, 5));
            }
        });
    });
}

/// Large k forces the search to visit most of the matching subtree.
fn bench_top_matches_large_k(c: &mut Criterion) {
    let (terms, weights) = generate_dictionary(50_000);
    let auto = Autocomplete::new(&terms, &weights).expect("valid dictionary");

    c.bench_function("top_matches_k500_empty_prefix", |b| {
        b.iter(|| {
            std::hint::black_box(auto.top_matches("", 500));
        });
    });
}

/// Guided descent to the single best completion.
fn bench_top_match(c: &mut Criterion) {
    let (terms, weights) = generate_dictionary(50_000);
    let auto = Autocomplete::new(&terms, &weights).expect("valid dictionary");
    let prefixes = ["a", "ab", "abc", "j", "fe", ""];

    c.bench_function("top_match_6_prefixes", |b| {
        b.iter(|| {
            for prefix in &prefixes {
                std::hint::black_box(auto.top_match(prefix));
            }
        });
    });
}

/// Exact and prefix membership over stored terms.
fn bench_find(c: &mut Criterion) {
    let (terms, weights) = generate_dictionary(50_000);
    let auto = Autocomplete::new(&terms, &weights).expect("valid dictionary");
    let probes: Vec<String> = terms.iter().take(1000).cloned().collect();

    c.bench_function("find_1000_terms", |b| {
        b.iter(|| {
            for term in &probes {
                std::hint::black_box(auto.find(term, true).expect("non-empty term"));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_build,
    bench_top_matches_small_k,
    bench_top_matches_large_k,
    bench_top_match,
    bench_find,
);
criterion_main!(benches);
