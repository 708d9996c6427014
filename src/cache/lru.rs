//! LRU Recency List Module
//!
//! Arena-backed doubly linked list that keeps cache entries in access order.
//!
//! Nodes live in a `Vec` and link to each other by index, so moving an entry
//! to the back is O(1) and handles stay valid for the lifetime of the list.
//! The list never shrinks: an evicted node is overwritten in place by the
//! entry that replaces it.
//!
//! ```text
//!   head (least recent)                       tail (most recent)
//!     [2] <──> [0] <──> [3] <──> [1]
//! ```

use std::mem;

// == Node Handle ==
/// Stable handle to a node in a `RecencyList`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

// == Recency List ==
/// Entries ordered by recency.
///
/// - Front = Least recently used
/// - Back = Most recently used
#[derive(Debug)]
pub struct RecencyList<K, V> {
    nodes: Vec<Node<K, V>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl<K, V> RecencyList<K, V> {
    // == Constructor ==
    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    // == Length ==
    /// Returns the number of nodes in the list.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // == Front ==
    /// Returns the least recently used node, if any.
    pub fn front(&self) -> Option<NodeId> {
        self.head
    }

    /// Returns the most recently used node, if any.
    #[allow(dead_code)]
    pub fn back(&self) -> Option<NodeId> {
        self.tail
    }

    pub fn key(&self, id: NodeId) -> &K {
        &self.nodes[id.0].key
    }

    pub fn value(&self, id: NodeId) -> &V {
        &self.nodes[id.0].value
    }

    pub fn value_mut(&mut self, id: NodeId) -> &mut V {
        &mut self.nodes[id.0].value
    }

    // == Push Back ==
    /// Appends a new node as the most recently used entry.
    pub fn push_back(&mut self, key: K, value: V) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            key,
            value,
            prev: None,
            next: None,
        });
        self.attach_back(id);
        id
    }

    // == Move To Back ==
    /// Marks a node as most recently used.
    pub fn move_to_back(&mut self, id: NodeId) {
        if self.tail == Some(id) {
            return;
        }
        self.detach(id);
        self.attach_back(id);
    }

    // == Replace ==
    /// Overwrites the key and value stored in `id`, returning the old pair.
    ///
    /// Links are untouched; callers decide where the node goes next.
    pub fn replace(&mut self, id: NodeId, key: K, value: V) -> (K, V) {
        let node = &mut self.nodes[id.0];
        let old_key = mem::replace(&mut node.key, key);
        let old_value = mem::replace(&mut node.value, value);
        (old_key, old_value)
    }

    // == Iter ==
    /// Iterates from least to most recently used.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.nodes.len(),
        }
    }

    fn detach(&mut self, id: NodeId) {
        let (prev, next) = {
            let node = &self.nodes[id.0];
            (node.prev, node.next)
        };

        match prev {
            Some(p) => self.nodes[p.0].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n.0].prev = prev,
            None => self.tail = prev,
        }

        let node = &mut self.nodes[id.0];
        node.prev = None;
        node.next = None;
    }

    fn attach_back(&mut self, id: NodeId) {
        self.nodes[id.0].prev = self.tail;
        self.nodes[id.0].next = None;
        match self.tail {
            Some(t) => self.nodes[t.0].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }

    /// Walks the links in both directions and panics on any inconsistency.
    #[cfg(test)]
    pub fn debug_validate_invariants(&self) {
        if self.nodes.is_empty() {
            assert!(self.head.is_none() && self.tail.is_none());
            return;
        }

        let mut forward = Vec::with_capacity(self.nodes.len());
        let mut cursor = self.head;
        let mut prev = None;
        while let Some(id) = cursor {
            assert_eq!(self.nodes[id.0].prev, prev, "broken prev link at {:?}", id);
            forward.push(id);
            assert!(forward.len() <= self.nodes.len(), "cycle in recency list");
            prev = Some(id);
            cursor = self.nodes[id.0].next;
        }
        assert_eq!(prev, self.tail);
        assert_eq!(forward.len(), self.nodes.len(), "unreachable nodes");
    }
}

// == Iterator ==
/// Front-to-back iterator over a `RecencyList`.
pub struct Iter<'a, K, V> {
    list: &'a RecencyList<K, V>,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = &self.list.nodes[id.0];
        self.cursor = node.next;
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn keys(list: &RecencyList<&'static str, u32>) -> Vec<&'static str> {
        list.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn test_list_new() {
        let list: RecencyList<&str, u32> = RecencyList::with_capacity(4);
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        list.debug_validate_invariants();
    }

    #[test]
    fn test_push_back_orders_oldest_first() {
        let mut list = RecencyList::with_capacity(3);
        let a = list.push_back("a", 1);
        list.push_back("b", 2);
        let c = list.push_back("c", 3);

        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(a));
        assert_eq!(list.back(), Some(c));
        assert_eq!(keys(&list), vec!["a", "b", "c"]);
        list.debug_validate_invariants();
    }

    #[test]
    fn test_move_to_back_from_front() {
        let mut list = RecencyList::with_capacity(3);
        let a = list.push_back("a", 1);
        let b = list.push_back("b", 2);
        list.push_back("c", 3);

        list.move_to_back(a);

        assert_eq!(list.front(), Some(b));
        assert_eq!(list.back(), Some(a));
        assert_eq!(keys(&list), vec!["b", "c", "a"]);
        list.debug_validate_invariants();
    }

    #[test]
    fn test_move_to_back_from_middle() {
        let mut list = RecencyList::with_capacity(3);
        list.push_back("a", 1);
        let b = list.push_back("b", 2);
        list.push_back("c", 3);

        list.move_to_back(b);

        assert_eq!(keys(&list), vec!["a", "c", "b"]);
        list.debug_validate_invariants();
    }

    #[test]
    fn test_move_to_back_when_already_back() {
        let mut list = RecencyList::with_capacity(2);
        list.push_back("a", 1);
        let b = list.push_back("b", 2);

        list.move_to_back(b);
        list.move_to_back(b);

        assert_eq!(keys(&list), vec!["a", "b"]);
        list.debug_validate_invariants();
    }

    #[test]
    fn test_single_node_moves() {
        let mut list = RecencyList::with_capacity(1);
        let a = list.push_back("a", 1);

        list.move_to_back(a);

        assert_eq!(list.front(), Some(a));
        assert_eq!(list.back(), Some(a));
        list.debug_validate_invariants();
    }

    #[test]
    fn test_single_node_replace_and_move() {
        let mut list = RecencyList::with_capacity(1);
        let a = list.push_back("a", 1);

        list.move_to_back(a);
        let old = list.replace(a, "b", 2);
        list.move_to_back(a);

        assert_eq!(old, ("a", 1));
        assert_eq!(list.front(), Some(a));
        assert_eq!(list.back(), Some(a));
        assert_eq!(keys(&list), vec!["b"]);
        list.debug_validate_invariants();
    }

    #[test]
    fn test_replace_keeps_links() {
        let mut list = RecencyList::with_capacity(2);
        let a = list.push_back("a", 1);
        list.push_back("b", 2);

        let old = list.replace(a, "z", 26);

        assert_eq!(old, ("a", 1));
        assert_eq!(*list.key(a), "z");
        assert_eq!(*list.value(a), 26);
        assert_eq!(keys(&list), vec!["z", "b"]);
        list.debug_validate_invariants();
    }

    #[test]
    fn test_value_mut() {
        let mut list = RecencyList::with_capacity(1);
        let a = list.push_back("a", 1);

        *list.value_mut(a) = 10;

        assert_eq!(*list.value(a), 10);
    }

    #[test]
    fn test_order_after_multiple_touches() {
        let mut list = RecencyList::with_capacity(3);
        let a = list.push_back("a", 1);
        let b = list.push_back("b", 2);
        let c = list.push_back("c", 3);

        list.move_to_back(a);
        list.move_to_back(c);
        list.move_to_back(b);

        assert_eq!(keys(&list), vec!["a", "c", "b"]);
        assert_eq!(list.iter().len(), 3);
        list.debug_validate_invariants();
    }
}
