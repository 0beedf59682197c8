// Exhaustive DFS enumeration under a caller-supplied alphabet order.

use hashbrown::HashSet;

use crate::TrieError;
use crate::trie::{NodeId, Trie};

impl Trie {
    /// Enumerate all stored words under a custom total order over symbols.
    ///
    /// `alphabet_order` assigns each symbol its rank by position. The
    /// traversal is a depth-first walk visiting each node's children in that
    /// order; order symbols with no child edge are skipped, and child edges
    /// whose symbol does not appear in the order are never visited, so any
    /// words beneath them are dropped from the output.
    ///
    /// A word node is emitted once, when first reached. A childless node is
    /// emitted whether or not it is a word node; tries built by insertion
    /// only mark leaves as words, so the distinction is observable only on
    /// hand-assembled structures.
    ///
    /// Fails when the order is empty, contains a repeated symbol, or the
    /// trie holds no terms at all. Pure function of the trie and the order;
    /// repeated calls return identical output.
    pub fn ordered_words(&self, alphabet_order: &str) -> Result<Vec<String>, TrieError> {
        if alphabet_order.is_empty() {
            return Err(TrieError::EmptyOrder);
        }
        let mut seen = HashSet::new();
        for c in alphabet_order.chars() {
            if !seen.insert(c) {
                return Err(TrieError::RepeatedOrderSymbol(c));
            }
        }
        if !self.node(self.root()).has_children() {
            return Err(TrieError::EmptyTrie);
        }

        let order: Vec<char> = alphabet_order.chars().collect();
        let mut result = Vec::new();
        let mut prefix = String::new();
        self.collect_ordered(self.root(), &order, &mut prefix, &mut result);
        Ok(result)
    }

    fn collect_ordered(
        &self,
        id: NodeId,
        order: &[char],
        prefix: &mut String,
        result: &mut Vec<String>,
    ) {
        for &c in order {
            let Some(child) = self.node(id).child(c) else {
                continue;
            };
            prefix.push(c);
            let child_node = self.node(child);
            if child_node.has_children() {
                if child_node.is_word() {
                    result.push(prefix.clone());
                }
                self.collect_ordered(child, order, prefix, result);
            } else {
                // Leaves are always emitted, word node or not.
                result.push(prefix.clone());
            }
            prefix.pop();
        }
    }
}
