//! # Chain Module
//!
//! An owning handle over a [`Node`] chain.
//!
//! A [`Chain`] holds the (possibly absent) head node, keeps a running count
//! of the nodes it owns, and enforces an optional capacity from its
//! [`ChainConfig`]. Nodes are only ever added; a chain never shrinks.

// ------------------------------------------------------------------------------------------------
// Unit tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests;

// ------------------------------------------------------------------------------------------------
// Includes
// ------------------------------------------------------------------------------------------------

use crate::node::Node;
use thiserror::Error;
use tracing::{debug, trace, warn};

// ------------------------------------------------------------------------------------------------
// Configuration
// ------------------------------------------------------------------------------------------------

/// Configuration for a [`Chain`].
///
/// The configuration is validated when passed to [`Chain::with_config`].
///
/// # Example
///
/// ```rust
/// use linkchain::ChainConfig;
///
/// // Unbounded
/// let config = ChainConfig::default();
///
/// // At most 16 nodes, head included
/// let config = ChainConfig {
///     max_len: Some(16),
///     ..ChainConfig::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChainConfig {
    /// Maximum number of nodes the chain may hold, head included.
    ///
    /// Default: `None` (unbounded). Must be ≥ 1 when set.
    pub max_len: Option<usize>,
}

impl ChainConfig {
    /// Validates all configuration parameters.
    fn validate(&self) -> Result<(), ChainError> {
        if self.max_len == Some(0) {
            return Err(ChainError::InvalidConfig("max_len must be >= 1".into()));
        }
        Ok(())
    }
}

// ------------------------------------------------------------------------------------------------
// Error Types
// ------------------------------------------------------------------------------------------------

/// Errors returned by [`Chain`] operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    /// Invalid configuration parameter.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The operation needs a head node but the chain is empty.
    #[error("chain is empty")]
    Empty,

    /// The chain already holds `max_len` nodes.
    #[error("chain capacity exceeded (max_len = {max_len})")]
    CapacityExceeded {
        /// Configured capacity.
        max_len: usize,
    },
}

// ------------------------------------------------------------------------------------------------
// Chain Core
// ------------------------------------------------------------------------------------------------

/// An owned singly-linked chain of [`Node`]s with a tracked length.
#[derive(Debug)]
pub struct Chain<T> {
    /// First node, or `None` for an empty chain.
    head: Option<Box<Node<T>>>,

    /// Number of nodes reachable from `head`.
    len: usize,

    /// Validated configuration the chain was created with.
    config: ChainConfig,
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Chain<T> {
    /// Creates an empty, unbounded chain.
    pub fn new() -> Self {
        debug!("unbounded chain created");

        Self {
            head: None,
            len: 0,
            config: ChainConfig::default(),
        }
    }

    /// Creates an empty chain with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InvalidConfig`] if any configuration parameter
    /// is out of range.
    pub fn with_config(config: ChainConfig) -> Result<Self, ChainError> {
        config.validate()?;

        debug!(max_len = ?config.max_len, "chain created");

        Ok(Self {
            head: None,
            len: 0,
            config,
        })
    }

    /// Appends `data` after the last node, or makes it the head of an
    /// empty chain.
    ///
    /// O(n): the chain is walked from the head on every call.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::CapacityExceeded`] if the chain is full.
    pub fn push_back(&mut self, data: T) -> Result<(), ChainError> {
        self.check_capacity()?;

        if let Some(head) = self.head.as_mut() {
            head.append(data);
        } else {
            self.head = Some(Box::new(Node::new(data, None)));
        }
        self.len += 1;

        trace!(len = self.len, "push_back completed");
        Ok(())
    }

    /// Inserts `data` directly after the head node, keeping the rest of the
    /// chain behind it.
    ///
    /// # Errors
    ///
    /// - [`ChainError::Empty`] if there is no head to insert after.
    /// - [`ChainError::CapacityExceeded`] if the chain is full.
    pub fn insert_after_head(&mut self, data: T) -> Result<(), ChainError> {
        self.check_capacity()?;

        let Some(head) = self.head.as_mut() else {
            warn!("insert_after_head rejected: chain is empty");
            return Err(ChainError::Empty);
        };
        head.insert(data);
        self.len += 1;

        trace!(len = self.len, "insert_after_head completed");
        Ok(())
    }

    /// Returns the head node, if any.
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// Number of nodes in the chain.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the chain holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the configuration the chain was created with.
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Releases ownership of the node chain.
    pub fn into_head(self) -> Option<Box<Node<T>>> {
        self.head
    }

    fn check_capacity(&self) -> Result<(), ChainError> {
        match self.config.max_len {
            Some(max_len) if self.len >= max_len => {
                warn!(max_len, "chain capacity exceeded");
                Err(ChainError::CapacityExceeded { max_len })
            }
            _ => Ok(()),
        }
    }
}
