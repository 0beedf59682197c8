// Guided descent and pruned best-first top-k completion search.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::trie::{NodeId, Trie};

/// Fringe entry: an unexplored subtree root, ordered by `bound`, the
/// subtree's `max_weight`. The bound is an upper limit on the weight of any
/// word still to be found below the node.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    bound: f64,
    id: NodeId,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.bound.total_cmp(&other.bound) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bound.total_cmp(&other.bound)
    }
}

/// Confirmed word node, ordered by its own weight. Wrapped in
/// [`Reverse`] to turn the max-heap into a min-heap, so the k-th best
/// (current floor) sits at the top for cheap eviction.
#[derive(Debug, Clone, Copy)]
struct Found {
    weight: f64,
    id: NodeId,
}

impl PartialEq for Found {
    fn eq(&self, other: &Self) -> bool {
        self.weight.total_cmp(&other.weight) == Ordering::Equal
    }
}

impl Eq for Found {}

impl PartialOrd for Found {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Found {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight.total_cmp(&other.weight)
    }
}

/// Weight of the k-th best word collected so far, the threshold a candidate
/// subtree must beat to stay interesting.
fn floor(best: &BinaryHeap<Reverse<Found>>) -> f64 {
    best.peek()
        .map(|Reverse(f)| f.weight)
        .unwrap_or(f64::NEG_INFINITY)
}

impl Trie {
    /// The single highest-weight completion of `prefix`, or `None` when the
    /// prefix is not a path in the trie.
    ///
    /// This is a guided descent, not a search: from the prefix node, follow
    /// the child whose `max_weight` equals the current node's `max_weight`
    /// (insertion guarantees one exists) until the current node's own weight
    /// equals its `max_weight`, i.e. the node itself carries the best word.
    /// Cost is proportional to the result's length, not the subtree size.
    ///
    /// When several children share the maximal bound, whichever the child
    /// iteration yields is taken; callers must not rely on a particular
    /// tie-break.
    pub fn top_match(&self, prefix: &str) -> Option<String> {
        let id = self.node_for_prefix(prefix)?;
        let mut result = String::from(prefix);
        let mut node = self.node(id);
        while node.weight() != node.max_weight() {
            let (c, child) = node.children().max_by(|a, b| {
                self.node(a.1)
                    .max_weight()
                    .total_cmp(&self.node(b.1).max_weight())
            })?;
            result.push(c);
            node = self.node(child);
        }
        Some(result)
    }

    /// The `k` highest-weight words extending `prefix`, in descending order
    /// of weight. Fewer than `k` matches returns all of them; `k == 0` or an
    /// unknown prefix returns an empty vector.
    ///
    /// Bounded best-first search over the node graph: a max-heap fringe of
    /// unexplored subtree roots keyed by their `max_weight` upper bound, and
    /// a min-heap of at most `k` confirmed words keyed by actual weight. The
    /// loop stops as soon as no fringe bound can beat the current k-th best
    /// weight, so subtrees that cannot contribute are never descended into.
    pub fn top_matches(&self, prefix: &str, k: usize) -> Vec<String> {
        let Some(start) = self.node_for_prefix(prefix) else {
            return Vec::new();
        };
        if k == 0 {
            return Vec::new();
        }

        let mut fringe: BinaryHeap<Candidate> = BinaryHeap::new();
        let mut best: BinaryHeap<Reverse<Found>> = BinaryHeap::new();

        let start_node = self.node(start);
        if start_node.is_word() {
            best.push(Reverse(Found {
                weight: start_node.weight(),
                id: start,
            }));
        }
        for (_, child) in start_node.children() {
            fringe.push(Candidate {
                bound: self.node(child).max_weight(),
                id: child,
            });
        }

        while let Some(candidate) = fringe.pop() {
            // Termination: every remaining bound is at most this one, so once
            // it cannot beat the k-th best nothing on the fringe can.
            if best.len() >= k && candidate.bound <= floor(&best) {
                break;
            }

            let node = self.node(candidate.id);
            if node.is_word() && (best.len() < k || node.weight() > floor(&best)) {
                best.push(Reverse(Found {
                    weight: node.weight(),
                    id: candidate.id,
                }));
                if best.len() > k {
                    best.pop();
                }
            }

            for (_, child) in node.children() {
                let bound = self.node(child).max_weight();
                if best.len() < k || bound > floor(&best) {
                    fringe.push(Candidate { bound, id: child });
                }
            }
        }

        // Drain ascending, then reverse into descending-weight order,
        // resolving node ids to terms through the reverse index.
        let mut result = Vec::with_capacity(best.len());
        while let Some(Reverse(found)) = best.pop() {
            if let Some(word) = self.word_for(found.id) {
                result.push(word.to_string());
            }
        }
        result.reverse();
        result
    }
}
