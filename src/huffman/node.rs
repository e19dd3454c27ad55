use crate::{Freq, Symbol};

/// The handle of a node inside the arena of a [`HuffmanTree`](super::HuffmanTree).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The position of the node in the arena.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a leaf stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Leaf {
    /// A symbol of the input alphabet.
    Real(Symbol),

    /// A zero-frequency placeholder that only completes the shape of the tree. It never gets a
    /// code and always loses ties against real leaves.
    Padding,
}

impl Leaf {
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Leaf::Real(symbol) => Some(symbol),
            Leaf::Padding => None,
        }
    }
}

/// A node of the tree.
///
/// The `tag` records when the node entered the priority queue during the build: leaves get
/// increasing tags in input order (padding last), internal nodes the next free tag when merged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HuffmanNode {
    Leaf {
        leaf: Leaf,
        freq: Freq,
        tag: usize,
    },
    Internal {
        freq: Freq,
        tag: usize,
        /// The merged nodes, in extraction order.
        children: Vec<NodeId>,
    },
}

impl HuffmanNode {
    pub fn freq(&self) -> Freq {
        match self {
            HuffmanNode::Leaf { freq, .. } | HuffmanNode::Internal { freq, .. } => *freq,
        }
    }

    pub fn tag(&self) -> usize {
        match self {
            HuffmanNode::Leaf { tag, .. } | HuffmanNode::Internal { tag, .. } => *tag,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    /// Returns true only for leaves carrying a symbol.
    pub fn is_real(&self) -> bool {
        self.symbol().is_some()
    }

    pub fn is_padding(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { leaf: Leaf::Padding, .. })
    }

    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            HuffmanNode::Leaf { leaf, .. } => leaf.symbol(),
            HuffmanNode::Internal { .. } => None,
        }
    }

    /// The children of the node, empty for leaves.
    pub fn children(&self) -> &[NodeId] {
        match self {
            HuffmanNode::Leaf { .. } => &[],
            HuffmanNode::Internal { children, .. } => children,
        }
    }
}
