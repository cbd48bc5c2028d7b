//! DOM Node
//!
//! Nodes live in the tree arena and link to each other through `NodeId`s.
//! The parent link is a plain lookup, children are owned by position.

use std::collections::HashMap;
use std::fmt;

use crate::forms::ControlKind;
use crate::style::InlineStyle;
use crate::NodeId;

/// DOM Node - Core structure
#[derive(Debug, Clone)]
pub struct Node {
    /// Parent node (None if detached or root)
    pub parent: Option<NodeId>,
    /// Children in document order
    pub children: Vec<NodeId>,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    /// Create a new element node
    pub fn element(tag: &str) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a new text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::with_data(NodeData::Text(content.into()))
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::with_data(NodeData::Document)
    }

    fn with_data(data: NodeData) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            data,
        }
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element
    Element(ElementData),
    /// Literal text
    Text(String),
}

/// Element-specific data
#[derive(Debug, Clone)]
pub struct ElementData {
    /// Lowercase tag name
    pub tag: String,
    /// Attributes in insertion order
    pub attrs: Vec<Attribute>,
    /// Inline style declarations
    pub style: InlineStyle,
    /// Custom (non-reflected) properties
    pub props: HashMap<String, PropValue>,
    /// Current value of a control, once it diverges from its default
    pub value: Option<String>,
    /// Option selectedness, once it diverges from the `selected` attribute
    pub selected: Option<bool>,
    /// Control role, kept in sync with `type` and `multiple`
    pub control: Option<ControlKind>,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        let tag = tag.to_ascii_lowercase();
        let control = ControlKind::classify(&tag, None, false);
        Self {
            tag,
            attrs: Vec::new(),
            style: InlineStyle::new(),
            props: HashMap::new(),
            value: None,
            selected: None,
            control,
        }
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Check if an attribute is present
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|a| a.name == name)
    }

    /// Set an attribute
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let name = name.to_ascii_lowercase();
        let value = value.into();
        match self.attrs.iter_mut().find(|a| a.name == name) {
            Some(attr) => attr.value = value,
            None => self.attrs.push(Attribute { name: name.clone(), value }),
        }
        if name == "type" || name == "multiple" {
            self.refresh_control();
        }
    }

    /// Remove an attribute, returning its old value
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let name = name.to_ascii_lowercase();
        let pos = self.attrs.iter().position(|a| a.name == name)?;
        let removed = self.attrs.remove(pos);
        if name == "type" || name == "multiple" {
            self.refresh_control();
        }
        Some(removed.value)
    }

    fn refresh_control(&mut self) {
        let input_type = self.get_attr("type").map(str::to_owned);
        let multiple = self.has_attr("multiple");
        self.control = ControlKind::classify(&self.tag, input_type.as_deref(), multiple);
    }
}

/// Attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Value assigned through generic property access
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Str(String),
    Bool(bool),
    Number(f64),
    /// Reference to another node (e.g. a control's label)
    Node(NodeId),
}

impl PropValue {
    /// Truthiness, as used for boolean properties
    pub fn truthy(&self) -> bool {
        match self {
            Self::Str(s) => !s.is_empty(),
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Node(_) => true,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<NodeId> {
        match self {
            Self::Node(id) => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) if n.is_finite() && n.fract() == 0.0 => write!(f, "{}", *n as i64),
            Self::Number(n) => write!(f, "{n}"),
            Self::Node(_) => f.write_str("[object HTMLElement]"),
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for PropValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for PropValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<NodeId> for PropValue {
    fn from(value: NodeId) -> Self {
        Self::Node(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_lowercases_tag() {
        let node = Node::element("DIV");
        assert_eq!(node.as_element().map(|e| e.tag.as_str()), Some("div"));
    }

    #[test]
    fn test_set_attr_replaces() {
        let mut elem = ElementData::new("a");
        elem.set_attr("href", "/one");
        elem.set_attr("HREF", "/two");
        assert_eq!(elem.attrs.len(), 1);
        assert_eq!(elem.get_attr("href"), Some("/two"));
    }

    #[test]
    fn test_type_attr_reclassifies() {
        let mut elem = ElementData::new("input");
        assert_eq!(elem.control, Some(ControlKind::TextLike));
        elem.set_attr("type", "date");
        assert_eq!(elem.control, Some(ControlKind::Date));
        elem.remove_attr("type");
        assert_eq!(elem.control, Some(ControlKind::TextLike));
    }

    #[test]
    fn test_prop_value_display() {
        assert_eq!(PropValue::from(3).to_string(), "3");
        assert_eq!(PropValue::from(2.5).to_string(), "2.5");
        assert_eq!(PropValue::from(true).to_string(), "true");
        assert!(!PropValue::from("").truthy());
        assert!(PropValue::from("x").truthy());
    }
}
