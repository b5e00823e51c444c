//! # Node Module
//!
//! A single element of a **singly-linked list**.
//!
//! A [`Node`] carries a payload and exclusively owns the chain of nodes
//! reachable through its `next` field. There is no separate list header at
//! this level: any node can act as the head of the chain it owns.
//!
//! ## Ownership
//!
//! ```text
//! [data|next] -> Box<[data|next]> -> Box<[data|next]> -> None
//! ```
//!
//! - Each node owns its successor through a `Box`; there are no cycles and
//!   no shared ownership.
//! - Dropping a node drops its whole chain. The destructor unlinks the chain
//!   one node at a time, so arbitrarily long chains are reclaimed without
//!   recursing once per node.
//! - `Clone`, `PartialEq` and `Debug` walk the chain the same way, so they
//!   are safe on chains of any length.

// ------------------------------------------------------------------------------------------------
// Unit tests
// ------------------------------------------------------------------------------------------------


// ------------------------------------------------------------------------------------------------
// Includes
// ------------------------------------------------------------------------------------------------

use std::fmt;

use tracing::trace;

// ------------------------------------------------------------------------------------------------
// Node Core
// ------------------------------------------------------------------------------------------------

/// One element of a singly-linked list.
///
/// Both fields are public, so a node can be built directly with a struct
/// literal as well as through [`Node::new`].
pub struct Node<T> {
    /// The payload carried by this node.
    pub data: T,

    /// The successor chain. `None` for the last node.
    pub next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// Creates a node with an explicit payload and successor.
    pub fn new(data: T, next: Option<Box<Node<T>>>) -> Self {
        Self { data, next }
    }

    /// Attaches a new node carrying `data` directly after `self`.
    ///
    /// # Behavior
    /// - The new node becomes `self.next`.
    /// - A successor that was already present is kept: it becomes the new
    ///   node's `next`, so the new node is spliced in rather than replacing
    ///   the rest of the chain.
    ///
    /// Returns a mutable reference to the inserted node.
    pub fn insert(&mut self, data: T) -> &mut Node<T> {
        let spliced = self.next.is_some();
        let successor = Box::new(Node::new(data, self.next.take()));

        trace!(spliced, "node inserted");

        self.next.insert(successor)
    }

    /// Walks to the last node of the chain and inserts `data` after it.
    ///
    /// O(n) in the number of nodes behind `self`. Returns a mutable reference
    /// to the new tail.
    pub fn append(&mut self, data: T) -> &mut Node<T> {
        let mut slot = &mut self.next;
        let mut depth: usize = 1;
        while let Some(node) = slot {
            slot = &mut node.next;
            depth += 1;
        }

        trace!(depth, "node appended at tail");

        slot.insert(Box::new(Node::new(data, None)))
    }

    /// Returns `true` if this node has no successor.
    pub fn is_tail(&self) -> bool {
        self.next.is_none()
    }
}

impl<T: Default> Default for Node<T> {
    fn default() -> Self {
        Self::new(T::default(), None)
    }
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        let mut head = Node::new(self.data.clone(), None);
        let mut tail = &mut head;
        let mut cur = self.next.as_deref();
        while let Some(node) = cur {
            tail = &mut **tail.next.insert(Box::new(Node::new(node.data.clone(), None)));
            cur = node.next.as_deref();
        }
        head
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut lhs = Some(self);
        let mut rhs = Some(other);
        loop {
            match (lhs, rhs) {
                (Some(a), Some(b)) => {
                    if a.data != b.data {
                        return false;
                    }
                    lhs = a.next.as_deref();
                    rhs = b.next.as_deref();
                }
                (None, None) => return true,
                _ => return false,
            }
        }
    }
}

impl<T: Eq> Eq for Node<T> {}

/// Formats the chain as a flat list of payloads, head first.
impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut cur = Some(self);
        while let Some(node) = cur {
            list.entry(&node.data);
            cur = node.next.as_deref();
        }
        list.finish()
    }
}
