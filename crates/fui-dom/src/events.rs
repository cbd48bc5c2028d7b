//! Event handler slots
//!
//! One handler per (node, event name). Assigning a handler replaces the
//! previous one, like `element.onclick = ...`.

use std::collections::HashMap;

use crate::tree::DomTree;
use crate::NodeId;

/// Single-slot handler storage
#[derive(Debug)]
pub struct HandlerSlots<H> {
    slots: HashMap<NodeId, HashMap<String, H>>,
}

impl<H> Default for HandlerSlots<H> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }
}

impl<H: Clone> HandlerSlots<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a handler, returning the one it replaced
    pub fn set(&mut self, node: NodeId, event: &str, handler: H) -> Option<H> {
        self.slots
            .entry(node)
            .or_default()
            .insert(event.to_string(), handler)
    }

    /// Clone out the handler bound for an event
    pub fn get(&self, node: NodeId, event: &str) -> Option<H> {
        self.slots.get(&node)?.get(event).cloned()
    }

    /// Unbind a handler
    pub fn remove(&mut self, node: NodeId, event: &str) -> Option<H> {
        self.slots.get_mut(&node)?.remove(event)
    }

    pub fn has(&self, node: NodeId, event: &str) -> bool {
        self.slots.get(&node).is_some_and(|s| s.contains_key(event))
    }
}

impl DomTree {
    /// Bubbling path of an event: the target, then each ancestor up to the
    /// document node.
    pub fn propagation_path(&self, target: NodeId) -> Vec<NodeId> {
        let mut path = vec![target];
        let mut current = self.parent(target);
        while let Some(node) = current {
            path.push(node);
            current = self.parent(node);
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_slot_replaces() {
        let mut slots = HandlerSlots::new();
        assert_eq!(slots.set(NodeId(1), "click", "first"), None);
        assert_eq!(slots.set(NodeId(1), "click", "second"), Some("first"));
        assert_eq!(slots.get(NodeId(1), "click"), Some("second"));
        assert_eq!(slots.get(NodeId(1), "submit"), None);
        assert_eq!(slots.remove(NodeId(1), "click"), Some("second"));
        assert!(!slots.has(NodeId(1), "click"));
    }

    #[test]
    fn test_propagation_path() {
        let mut tree = DomTree::new();
        let div = tree.create_child(tree.root(), "div");
        let span = tree.create_child(div, "span");
        assert_eq!(tree.propagation_path(span), vec![span, div, tree.root()]);
    }
}
