//! Core `Chain` API tests.
//!
//! Coverage:
//! - Empty chain state
//! - `push_back` builds the chain in order and tracks `len`
//! - `insert_after_head` splices behind the head
//! - `insert_after_head` on an empty chain returns `ChainError::Empty`
//! - `into_head` hands back the owned nodes
//!
//! ## See also
//! - [`tests_limits`] — capacity and configuration validation

#[cfg(test)]
mod tests {
    use crate::chain::{Chain, ChainError};
    use crate::node::Node;
    use tracing_subscriber::EnvFilter;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn values<T: Copy>(head: Option<&Node<T>>) -> Vec<T> {
        let mut out = Vec::new();
        let mut cur = head;
        while let Some(node) = cur {
            out.push(node.data);
            cur = node.next.as_deref();
        }
        out
    }

    #[test]
    fn test_empty_chain() {
        let chain: Chain<i32> = Chain::new();

        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
        assert!(chain.head().is_none());
        assert_eq!(chain.config().max_len, None);
    }

    #[test]
    fn test_push_back_keeps_order() {
        init_tracing();

        let mut chain = Chain::new();
        chain.push_back("foo").unwrap();
        chain.push_back("bar").unwrap();
        chain.push_back("baz").unwrap();

        assert_eq!(chain.len(), 3);
        assert_eq!(values(chain.head()), vec!["foo", "bar", "baz"]);
    }

    /// # Scenario
    /// Repeated inserts after the head push earlier inserts further back.
    ///
    /// # Starting environment
    /// Chain holding only `1`.
    ///
    /// # Actions
    /// 1. `insert_after_head(4)`.
    /// 2. `insert_after_head(2)`.
    ///
    /// # Expected behavior
    /// Chain reads `1 -> 2 -> 4`, `len == 3`.
    #[test]
    fn test_insert_after_head() {
        init_tracing();

        let mut chain = Chain::new();
        chain.push_back(1).unwrap();

        chain.insert_after_head(4).unwrap();
        assert_eq!(chain.len(), 2);

        chain.insert_after_head(2).unwrap();
        assert_eq!(chain.len(), 3);

        assert_eq!(values(chain.head()), vec![1, 2, 4]);
    }

    #[test]
    fn test_insert_after_head_on_empty_chain() {
        init_tracing();

        let mut chain = Chain::new();

        let err = chain.insert_after_head(4).unwrap_err();
        assert_eq!(err, ChainError::Empty);
        assert!(chain.is_empty());
    }

    #[test]
    fn test_into_head_releases_nodes() {
        let mut chain = Chain::new();
        chain.push_back('a').unwrap();
        chain.push_back('b').unwrap();

        let head = chain.into_head().expect("head present");
        assert_eq!(head.data, 'a');
        assert_eq!(values(Some(&*head)), vec!['a', 'b']);
    }
}
