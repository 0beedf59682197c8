// Node arena, insertion, and membership lookup.

use hashbrown::HashMap;

use crate::TrieError;

/// Identity of a node within a [`Trie`].
///
/// Ids are indices into the trie's node arena, assigned at creation time and
/// stable for the lifetime of the trie. They are only meaningful for the trie
/// that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node. Present in every trie, never a word.
    pub const ROOT: NodeId = NodeId(0);

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// One prefix of the stored vocabulary.
///
/// `weight` is only meaningful when `is_word` is true; both it and
/// `max_weight` default to `0.0`. Since weights are validated non-negative,
/// `max_weight` never decreases along any path toward the root.
#[derive(Debug)]
pub struct Node {
    is_word: bool,
    weight: f64,
    max_weight: f64,
    children: HashMap<char, NodeId>,
}

impl Node {
    fn new() -> Self {
        Self {
            is_word: false,
            weight: 0.0,
            max_weight: 0.0,
            children: HashMap::new(),
        }
    }

    /// Whether some inserted term ends exactly at this node.
    pub fn is_word(&self) -> bool {
        self.is_word
    }

    /// Weight of the term ending here. `0.0` when this is not a word node.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Maximum weight over all words in the subtree rooted here, including
    /// this node's own weight when it is a word.
    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    /// Child reached by `symbol`, if any.
    pub fn child(&self, symbol: char) -> Option<NodeId> {
        self.children.get(&symbol).copied()
    }

    /// Iterate over the `(symbol, child)` edges of this node.
    ///
    /// Iteration order is arbitrary; callers that need a specific order must
    /// impose it themselves.
    pub fn children(&self) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.children.iter().map(|(&c, &id)| (c, id))
    }

    /// Whether this node has any children.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of child edges.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// In-memory prefix trie over a weighted vocabulary.
///
/// Nodes live in an arena indexed by [`NodeId`]; the trie additionally keeps
/// a reverse index from word-node id to the literal term, so a search can
/// report the term for a matched node without re-walking from the root.
///
/// The trie is built once by a sequence of inserts and is read-only
/// afterward; none of the query methods mutate it.
#[derive(Debug)]
pub struct Trie {
    nodes: Vec<Node>,
    words: HashMap<NodeId, String>,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Create an empty trie containing only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new()],
            words: HashMap::new(),
        }
    }

    /// Access a node by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this trie.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// The root node's id.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Literal term ending at `id`, if `id` is a word node inserted with a
    /// weight.
    pub fn word_for(&self, id: NodeId) -> Option<&str> {
        self.words.get(&id).map(String::as_str)
    }

    /// Number of weighted words stored.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Insert a term without a weight, marking membership only.
    ///
    /// Neither `weight` nor `max_weight` is touched, so a trie built purely
    /// with this method supports membership and ordered enumeration but not
    /// ranked queries. Re-inserting the same term is a no-op.
    pub fn insert(&mut self, term: &str) -> Result<(), TrieError> {
        if term.is_empty() {
            return Err(TrieError::EmptyTerm);
        }
        let mut cur = NodeId::ROOT;
        for c in term.chars() {
            cur = self.child_or_new(cur, c);
        }
        self.nodes[cur.index()].is_word = true;
        Ok(())
    }

    /// Insert a term with a non-negative weight.
    ///
    /// Descends from the root creating missing nodes, raising each visited
    /// child's `max_weight` to `weight` where lower; the terminal node
    /// becomes a word node with the given weight and is recorded in the
    /// reverse index. The root's own `max_weight` is raised as well so that
    /// empty-prefix queries see a well-defined bound.
    ///
    /// Fails on an empty term, a negative weight, or a term that is already
    /// a word in this trie. A failed insert leaves the trie unchanged.
    pub fn insert_weighted(&mut self, term: &str, weight: f64) -> Result<(), TrieError> {
        if term.is_empty() {
            return Err(TrieError::EmptyTerm);
        }
        if weight < 0.0 {
            return Err(TrieError::NegativeWeight {
                term: term.to_string(),
                weight,
            });
        }
        // Read-only pre-walk: detect duplicates before any aggregate is
        // raised, so rejection cannot leave a half-updated path behind.
        if let Some(id) = self.node_for_prefix(term) {
            if self.nodes[id.index()].is_word {
                return Err(TrieError::DuplicateTerm(term.to_string()));
            }
        }

        let mut cur = NodeId::ROOT;
        for c in term.chars() {
            let next = self.child_or_new(cur, c);
            if self.nodes[next.index()].max_weight < weight {
                self.nodes[next.index()].max_weight = weight;
            }
            cur = next;
        }
        let terminal = &mut self.nodes[cur.index()];
        terminal.is_word = true;
        terminal.weight = weight;
        if self.nodes[NodeId::ROOT.index()].max_weight < weight {
            self.nodes[NodeId::ROOT.index()].max_weight = weight;
        }
        self.words.insert(cur, term.to_string());
        Ok(())
    }

    /// Membership query.
    ///
    /// Walks `s` from the root; if any symbol is missing the answer is
    /// `false`. When the walk completes, `full_word == true` asks whether a
    /// term ends exactly here, while `full_word == false` only asks whether
    /// the prefix exists as a path.
    pub fn find(&self, s: &str, full_word: bool) -> Result<bool, TrieError> {
        if s.is_empty() {
            return Err(TrieError::EmptyTerm);
        }
        match self.node_for_prefix(s) {
            Some(id) if full_word => Ok(self.nodes[id.index()].is_word),
            Some(_) => Ok(true),
            None => Ok(false),
        }
    }

    /// Node reached by walking `prefix` from the root, or `None` if some
    /// symbol along the way has no edge. The empty prefix resolves to the
    /// root.
    pub fn node_for_prefix(&self, prefix: &str) -> Option<NodeId> {
        let mut cur = NodeId::ROOT;
        for c in prefix.chars() {
            cur = self.nodes[cur.index()].child(c)?;
        }
        Some(cur)
    }

    fn child_or_new(&mut self, parent: NodeId, symbol: char) -> NodeId {
        if let Some(id) = self.nodes[parent.index()].child(symbol) {
            return id;
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new());
        self.nodes[parent.index()].children.insert(symbol, id);
        id
    }
}
