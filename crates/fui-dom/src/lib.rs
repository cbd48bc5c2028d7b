//! fui DOM - host document tree
//!
//! Arena-based element tree with the primitives the fluent layer builds on:
//! attributes, class tokens, inline style, property pass-through, selector
//! queries, HTML fragment parsing, form control state and a virtual-clock timer queue.

mod classlist;
mod document;
mod event_loop;
mod events;
mod forms;
mod node;
mod parser;
mod selector;
mod style;
mod tree;

pub use classlist::ClassList;
pub use document::Document;
pub use event_loop::{EventLoop, TimerId};
pub use events::HandlerSlots;
pub use forms::ControlKind;
pub use node::{Attribute, ElementData, Node, NodeData, PropValue};
pub use selector::{AttrSelector, Combinator, Compound, ComplexSelector, SelectorError, SelectorList};
pub use style::InlineStyle;
pub use tree::{DomError, DomResult, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Document node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Raw arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
