//! Node views over a heap's backing sequence
//!
//! A [`HeapNode`] is a cheap `(index, value)` projection computed on demand
//! from the heap's backing sequence. It is never stored by the heap itself:
//! recomputing a node after a mutation may yield a different value at the
//! same index.
//!
//! Positions that do not exist (an index past the end, the parent of nothing,
//! the right child of a leaf) are represented by [`HeapNode::Absent`] rather
//! than a reserved index/value pair, so "is this a real node" checks are
//! `match`es instead of magic-number comparisons.

/// A view of one heap position, or the absence of one.
///
/// `HeapNode` is a plain value type. Copying it never aliases heap storage,
/// and holding one across a mutation does not keep it current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapNode {
    /// A node that exists in the heap: its position and the value there.
    Present {
        /// Zero-based position in the backing sequence.
        index: usize,
        /// Value stored at that position when the view was taken.
        value: i64,
    },
    /// No such node: out-of-range index or a missing neighbor.
    Absent,
}

impl HeapNode {
    /// Returns true if this view refers to an existing node.
    pub fn is_present(&self) -> bool {
        matches!(self, HeapNode::Present { .. })
    }

    /// Returns true if this view stands for "no such node".
    pub fn is_absent(&self) -> bool {
        matches!(self, HeapNode::Absent)
    }

    /// The node's position, or `None` for an absent node.
    pub fn index(&self) -> Option<usize> {
        match self {
            HeapNode::Present { index, .. } => Some(*index),
            HeapNode::Absent => None,
        }
    }

    /// The node's value, or `None` for an absent node.
    pub fn value(&self) -> Option<i64> {
        match self {
            HeapNode::Present { value, .. } => Some(*value),
            HeapNode::Absent => None,
        }
    }
}
