//! Weighted prefix trie engine.
//!
//! This crate stores a vocabulary of terms (optionally weighted) in a prefix
//! trie and answers three kinds of queries over it:
//!
//! - exact-word and prefix membership ([`Trie::find`])
//! - enumeration of every stored word under a caller-supplied total order
//!   over the alphabet ([`Trie::ordered_words`])
//! - the best or the top-k highest-weight completions of a prefix
//!   ([`Trie::top_match`], [`Trie::top_matches`])
//!
//! # Architecture
//!
//! - [`trie`] -- Node arena, insertion, membership lookup
//! - [`ordered`] -- Exhaustive DFS enumeration under a custom alphabet order
//! - [`topk`] -- Guided descent and pruned best-first top-k search
//!
//! Each node carries `max_weight`, the maximum weight over all words in its
//! subtree (including itself). Insertion maintains the aggregate in a single
//! root-to-leaf pass, and the top-k search uses it as an upper bound to
//! prune whole subtrees.

pub mod ordered;
pub mod topk;
pub mod trie;

pub use trie::{Node, NodeId, Trie};

/// Error type for trie construction and traversal.
///
/// Every variant is an invalid-input condition detected synchronously at the
/// offending call. Absent matches are not errors; they surface as `false`,
/// `None`, or an empty result depending on the operation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrieError {
    #[error("term must not be empty")]
    EmptyTerm,
    #[error("negative weight {weight} for term \"{term}\"")]
    NegativeWeight { term: String, weight: f64 },
    #[error("duplicate term \"{0}\"")]
    DuplicateTerm(String),
    #[error("alphabet order must not be empty")]
    EmptyOrder,
    #[error("alphabet order contains repeated symbol '{0}'")]
    RepeatedOrderSymbol(char),
    #[error("cannot enumerate an empty trie")]
    EmptyTrie,
}
