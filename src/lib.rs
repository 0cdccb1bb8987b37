//! Indexed binary max-heap with explicit node navigation
//!
//! This crate provides a binary max-heap over a dense, zero-indexed sequence
//! of integers, built around node views rather than an opaque priority
//! queue: every position can be inspected as an `(index, value)` pair, and
//! parent/child navigation is part of the public surface.
//!
//! # Features
//!
//! - **Node views**: [`HeapNode`] is a cheap projection over the backing
//!   sequence, with an explicit `Absent` variant for positions that do not
//!   exist
//! - **Navigation**: parent and child lookup by index arithmetic, with the
//!   exact bounds behavior documented on each method
//! - **Mutation**: append-and-reorder insertion, in-place value assignment,
//!   and remove-from-front root extraction
//! - **Verification**: a breadth-first invariant check that reports the
//!   first parent/child ordering violation with both indices
//!
//! # Example
//!
//! ```rust
//! use navheap::{Heap, HeapNode};
//!
//! let mut heap = Heap::default();
//! heap.insert(5)?;
//! heap.insert(3)?;
//! heap.insert(8)?;
//! heap.insert(1)?;
//!
//! assert_eq!(heap.root(), HeapNode::Present { index: 0, value: 8 });
//!
//! let (root, result) = heap.pop_root();
//! result?;
//! assert_eq!(root.value(), Some(8));
//! assert_eq!(heap.len(), 3);
//! # Ok::<(), navheap::HeapError>(())
//! ```

pub mod error;
pub mod heap;
pub mod node;

// Re-export the main types for convenience
pub use error::HeapError;
pub use heap::Heap;
pub use node::HeapNode;
