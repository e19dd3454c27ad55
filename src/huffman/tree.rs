use std::cmp::{min, Ordering};
use std::ops::Index;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use log::{debug, trace};

use crate::heap::PriorityQueue;
use crate::huffman::code_table::CodeTable;
use crate::huffman::node::{HuffmanNode, Leaf, NodeId};
use crate::huffman::{child_index, child_selector, HuffmanError, MalformedCode};
use crate::{Freq, Symbol, MAX_ORDER};

/// Source of the generations stamped on trees, unique across all the trees of the process.
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

fn next_generation() -> u64 {
    NEXT_GENERATION.fetch_add(1, AtomicOrdering::Relaxed)
}

/// A node waiting in the priority queue during the build.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    node: NodeId,
    freq: Freq,
    tag: usize,
    /// Whether the node is a leaf carrying a symbol.
    real: bool,
}

/// The extraction order of the build: lower frequency first. With equal frequency, leaves with a
/// symbol come before any other node (padding leaves and internal nodes), and nodes of the same
/// kind come in tag order.
fn rank(a: &Candidate, b: &Candidate) -> Ordering {
    a.freq
        .cmp(&b.freq)
        .then_with(|| b.real.cmp(&a.real))
        .then_with(|| a.tag.cmp(&b.tag))
}

/// # N-ary Huffman tree
///
/// A Huffman tree whose internal nodes have `ORDER` children. Nodes live in an arena owned by the
/// tree and refer to each other through [`NodeId`]s, so rebuilding the tree simply drops the old
/// arena.
///
/// Every [`build`](Self::build) stamps the tree with a new generation. A [`CodeTable`] generated
/// from the tree remembers that generation and becomes stale as soon as the tree is rebuilt: check
/// it with [`CodeTable::is_current_for`] and regenerate it with [`generate_codes`](Self::generate_codes).
#[derive(Clone, Debug)]
pub struct HuffmanTree<const ORDER: usize> {
    nodes: Vec<HuffmanNode>,
    root: Option<NodeId>,
    generation: u64,
}

impl<const ORDER: usize> Default for HuffmanTree<ORDER> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const ORDER: usize> HuffmanTree<ORDER> {
    /// Rejects, at compile time, orders that the code alphabet can't represent.
    const SUPPORTED_ORDER: () = assert!(
        ORDER >= 2 && ORDER <= MAX_ORDER,
        "the order of the tree must be in [2, 16]"
    );

    /// Creates an empty tree. It has no root until it is built from at least one symbol.
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::SUPPORTED_ORDER;

        Self {
            nodes: Vec::new(),
            root: None,
            generation: next_generation(),
        }
    }

    /// Creates a tree and builds it from the given pairs (symbol, frequency).
    pub fn from_frequencies(symbols_freqs: &[(Symbol, Freq)]) -> Self {
        let mut tree = Self::new();
        tree.build(symbols_freqs);
        tree
    }

    /// The number of padding leaves needed so that `symbols` leaves can be merged `ORDER` at a time
    /// down to a single root.
    pub fn padding_for(symbols: usize) -> usize {
        if symbols == 0 {
            return 0;
        }
        match (symbols - 1) % (ORDER - 1) {
            0 => 0,
            remainder => (ORDER - 1) - remainder,
        }
    }

    /// Builds the tree from the given pairs (symbol, frequency), discarding the previous one.
    ///
    /// Symbols are expected to be distinct. Ties between symbols with the same frequency are won by
    /// the one appearing first in `symbols_freqs`. An empty list leaves the tree without a root.
    pub fn build(&mut self, symbols_freqs: &[(Symbol, Freq)]) {
        self.nodes = Vec::new();
        self.root = None;
        self.generation = next_generation();

        match symbols_freqs {
            [] => {
                debug!("No symbols to build the tree from");
                return;
            }
            [(symbol, freq)] => {
                self.build_single_symbol(*symbol, *freq);
                return;
            }
            _ => {}
        }

        let padding = Self::padding_for(symbols_freqs.len());
        debug!(
            "Building a tree of order {} from {} symbols and {} padding leaves",
            ORDER,
            symbols_freqs.len(),
            padding
        );

        let leaves = symbols_freqs
            .iter()
            .map(|(symbol, freq)| (Leaf::Real(*symbol), *freq))
            .chain((0..padding).map(|_| (Leaf::Padding, 0)))
            .enumerate()
            .map(|(tag, (leaf, freq))| Candidate {
                node: self.push_node(HuffmanNode::Leaf { leaf, freq, tag }),
                freq,
                tag,
                real: leaf.symbol().is_some(),
            })
            .collect::<Vec<_>>();

        let mut next_tag = leaves.len();
        let mut queue = PriorityQueue::with_comparator(rank);
        queue.heapify(leaves);

        while queue.len() > 1 {
            let arity = min(ORDER, queue.len());
            let merged = (0..arity)
                .map_while(|_| queue.pop().ok())
                .collect::<Vec<_>>();
            let freq = merged.iter().map(|candidate| candidate.freq).sum::<Freq>();

            trace!(
                "Merging {:?} into a node of frequency {}",
                merged.iter().map(|candidate| candidate.freq).collect::<Vec<_>>(),
                freq
            );

            let node = self.push_node(HuffmanNode::Internal {
                freq,
                tag: next_tag,
                children: merged.iter().map(|candidate| candidate.node).collect(),
            });
            queue.push(Candidate {
                node,
                freq,
                tag: next_tag,
                real: false,
            });
            next_tag += 1;
        }

        self.root = queue.pop().ok().map(|candidate| candidate.node);
    }

    /// With a single symbol, the root gets `ORDER - 1` padding leaves followed by the symbol, so
    /// that the symbol still has a non-empty code. A zero-frequency symbol is instead the only
    /// child of the root.
    fn build_single_symbol(&mut self, symbol: Symbol, freq: Freq) {
        let mut children = Vec::with_capacity(ORDER);

        if freq > 0 {
            for tag in 0..ORDER - 1 {
                children.push(self.push_node(HuffmanNode::Leaf {
                    leaf: Leaf::Padding,
                    freq: 0,
                    tag,
                }));
            }
        }

        let tag = children.len();
        children.push(self.push_node(HuffmanNode::Leaf {
            leaf: Leaf::Real(symbol),
            freq,
            tag,
        }));

        self.root = Some(self.push_node(HuffmanNode::Internal {
            freq,
            tag: tag + 1,
            children,
        }));
    }

    fn push_node(&mut self, node: HuffmanNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Fills `table` with the code of every symbol of the tree, replacing its previous content.
    ///
    /// The code of a symbol is the sequence of [child selectors](super::child_selector) on the path
    /// from the root to its leaf. Padding leaves get no code.
    pub fn generate_codes(&self, table: &mut CodeTable) {
        table.reset(self.generation);

        let Some(root) = self.root else {
            return;
        };

        let mut pending = vec![(root, String::new())];
        while let Some((id, path)) = pending.pop() {
            match &self[id] {
                HuffmanNode::Leaf { leaf: Leaf::Real(symbol), .. } => table.insert(*symbol, path),
                HuffmanNode::Leaf { leaf: Leaf::Padding, .. } => {}
                HuffmanNode::Internal { children, .. } => {
                    for (index, child) in children.iter().enumerate().rev() {
                        let mut child_path = String::with_capacity(path.len() + 1);
                        child_path.push_str(&path);
                        child_path.push(child_selector(index));
                        pending.push((*child, child_path));
                    }
                }
            }
        }
    }

    /// Decodes `code`, returning an empty string if it is malformed.
    ///
    /// See [`try_decode`](Self::try_decode) for the conditions making a code malformed.
    pub fn decode(&self, code: &str) -> String {
        self.try_decode(code).unwrap_or_else(|error| {
            debug!("Discarding code of length {}: {}", code.len(), error);
            String::new()
        })
    }

    /// Decodes `code` by walking the tree one character at a time, going back to the root every
    /// time a leaf is reached. Padding leaves are walked through without emitting anything.
    ///
    /// # Errors
    /// [`HuffmanError::MalformedCode`] if a character is not a child selector, if it selects a
    /// child the current node doesn't have, or if the code ends in the middle of a path.
    /// [`HuffmanError::EmptyTree`] if a non-empty code is given to a tree without root.
    pub fn try_decode(&self, code: &str) -> Result<String, HuffmanError> {
        if code.is_empty() {
            return Ok(String::new());
        }
        let root = self.root.ok_or(HuffmanError::EmptyTree)?;

        let mut decoded = String::new();
        let mut current = root;
        let mut consumed = 0;

        for (position, selector) in code.chars().enumerate() {
            let malformed = |cause| HuffmanError::MalformedCode { position, cause };

            let index = child_index(selector).ok_or(malformed(MalformedCode::InvalidCharacter(selector)))?;
            let children = self[current].children();
            current = *children.get(index).ok_or(malformed(MalformedCode::ChildOutOfRange {
                index,
                children: children.len(),
            }))?;

            if let HuffmanNode::Leaf { leaf, .. } = &self[current] {
                if let Leaf::Real(symbol) = leaf {
                    decoded.push(*symbol);
                }
                current = root;
            }
            consumed = position + 1;
        }

        if current != root {
            return Err(HuffmanError::MalformedCode {
                position: consumed,
                cause: MalformedCode::Truncated,
            });
        }

        Ok(decoded)
    }

    #[inline(always)]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    #[inline(always)]
    pub fn node(&self, id: NodeId) -> &HuffmanNode {
        &self.nodes[id.index()]
    }

    /// The order of the tree.
    pub const fn order(&self) -> usize {
        ORDER
    }

    /// The generation stamped by the last build.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns true if the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes of the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// All the nodes of the tree, in creation order.
    pub fn nodes(&self) -> &[HuffmanNode] {
        &self.nodes
    }

    /// The number of leaves, padding included.
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }

    pub fn padding_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_padding()).count()
    }

    /// The length of the longest path from the root to a leaf.
    pub fn depth(&self) -> usize {
        let Some(root) = self.root else {
            return 0;
        };

        let mut deepest = 0;
        let mut pending = vec![(root, 0)];
        while let Some((id, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(self[id].children().iter().map(|child| (*child, depth + 1)));
        }
        deepest
    }
}

impl<const ORDER: usize> Index<NodeId> for HuffmanTree<ORDER> {
    type Output = HuffmanNode;

    #[inline(always)]
    fn index(&self, id: NodeId) -> &Self::Output {
        self.node(id)
    }
}
