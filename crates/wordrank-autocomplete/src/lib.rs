//! Autocomplete facade over the weighted trie engine.
//!
//! [`Autocomplete`] is the integration point callers use: it validates the
//! construction data (parallel term/weight collections), builds one
//! [`Trie`] from it, and exposes the read-only query surface. Construction
//! is all-or-nothing: any invalid entry fails the constructor and no
//! partially built dictionary exists afterward.

use wordrank_trie::{Trie, TrieError};

/// Error type for dictionary construction and queries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AutocompleteError {
    /// The term and weight collections differ in length.
    #[error("terms and weights must have the same length ({terms} terms, {weights} weights)")]
    LengthMismatch { terms: usize, weights: usize },

    /// An individual entry was rejected by the trie (empty term, negative
    /// weight, duplicate term).
    #[error(transparent)]
    Trie(#[from] TrieError),
}

/// An autocomplete dictionary built from parallel term/weight collections.
///
/// All query methods are read-only; once constructed the value can be shared
/// freely across threads for concurrent queries.
#[derive(Debug)]
pub struct Autocomplete {
    dictionary: Trie,
}

impl Autocomplete {
    /// Build a dictionary from parallel collections of terms and weights.
    ///
    /// Fails when the collections differ in length, a term is empty or
    /// repeated, or a weight is negative.
    pub fn new<T: AsRef<str>>(terms: &[T], weights: &[f64]) -> Result<Self, AutocompleteError> {
        if terms.len() != weights.len() {
            return Err(AutocompleteError::LengthMismatch {
                terms: terms.len(),
                weights: weights.len(),
            });
        }

        let mut dictionary = Trie::new();
        for (term, &weight) in terms.iter().zip(weights) {
            dictionary.insert_weighted(term.as_ref(), weight)?;
        }
        Ok(Self { dictionary })
    }

    /// Weight of `term`, or `0.0` when the term is not in the dictionary.
    /// Absence is not an error.
    pub fn weight_of(&self, term: &str) -> f64 {
        match self.dictionary.node_for_prefix(term) {
            Some(id) => self.dictionary.node(id).weight(),
            None => 0.0,
        }
    }

    /// Membership query; see [`Trie::find`].
    pub fn find(&self, s: &str, full_word: bool) -> Result<bool, AutocompleteError> {
        Ok(self.dictionary.find(s, full_word)?)
    }

    /// Highest-weight completion of `prefix`, or `None` when the prefix is
    /// not a path in the dictionary.
    pub fn top_match(&self, prefix: &str) -> Option<String> {
        self.dictionary.top_match(prefix)
    }

    /// Up to `k` highest-weight completions of `prefix`, descending by
    /// weight. An unknown prefix or `k == 0` yields an empty vector.
    pub fn top_matches(&self, prefix: &str, k: usize) -> Vec<String> {
        self.dictionary.top_matches(prefix, k)
    }

    /// Read access to the underlying trie.
    pub fn trie(&self) -> &Trie {
        &self.dictionary
    }
}
