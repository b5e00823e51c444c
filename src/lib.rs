//! # linkchain
//!
//! An owned **singly-linked list** built from [`Node`]s, each of which
//! exclusively owns the chain behind it.
//!
//! ## Quick Start
//!
//! ```rust
//! use linkchain::Node;
//!
//! let mut head = Node::new("A", None);
//! head.insert("B");
//! head.next.as_mut().unwrap().insert("C");
//!
//! let second = head.next.as_ref().unwrap();
//! let third = second.next.as_ref().unwrap();
//! assert_eq!(second.data, "B");
//! assert_eq!(third.data, "C");
//! assert!(third.next.is_none());
//! ```
//!
//! ## Features
//!
//! - **Splicing insert** — [`Node::insert`] attaches after a node and keeps
//!   any existing successor behind the new one.
//! - **Tail append** — [`Node::append`] and [`Chain::push_back`].
//! - **Bounded chains** — [`ChainConfig::max_len`] caps the node count.
//! - **Flat teardown** — dropping a chain never recurses once per node.

mod chain;
mod node;

pub use chain::{Chain, ChainConfig, ChainError};
pub use node::Node;
