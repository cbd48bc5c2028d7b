//! DOM Tree (arena-based allocation)
//!
//! Nodes are never freed: a removed node stays addressable and can be
//! re-attached.

use crate::classlist::ClassList;
use crate::node::{ElementData, Node, NodeData, PropValue};
use crate::selector::SelectorList;
use crate::style::InlineStyle;
use crate::NodeId;

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Node not found
    #[error("Node not found")]
    NotFound,
    /// Inserting a node into itself or its own subtree
    #[error("Hierarchy request error")]
    HierarchyRequest,
    /// Node is not a child of the given parent
    #[error("Node is not a child")]
    NotAChild,
}

/// Properties reflected to a string attribute: (property, attribute)
const REFLECTED: &[(&str, &str)] = &[
    ("id", "id"),
    ("name", "name"),
    ("type", "type"),
    ("className", "class"),
    ("title", "title"),
    ("placeholder", "placeholder"),
    ("href", "href"),
    ("src", "src"),
    ("htmlFor", "for"),
];

/// Properties reflected to a boolean (presence) attribute
const REFLECTED_BOOL: &[(&str, &str)] = &[
    ("multiple", "multiple"),
    ("disabled", "disabled"),
    ("required", "required"),
    ("readOnly", "readonly"),
    ("checked", "checked"),
    ("hidden", "hidden"),
];

pub(crate) const VOID_ELEMENTS: &[&str] = &["area", "br", "col", "hr", "img", "input", "link", "meta", "source", "wbr"];

/// Arena-based DOM tree
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    /// Document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes ever allocated
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(Node::as_element)
    }

    pub(crate) fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id).and_then(Node::as_element_mut)
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    // ------------------------------------------------------------------
    // Creation and structure
    // ------------------------------------------------------------------

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.alloc(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.alloc(Node::text(content))
    }

    /// Create an element and append it as the last child of `parent`
    pub fn create_child(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let child = self.create_element(tag);
        self.link(parent, child, false);
        child
    }

    /// Create an element and insert it as the first child of `parent`
    pub fn create_first_child(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let child = self.create_element(tag);
        self.link(parent, child, true);
        child
    }

    /// Append a child node, moving it from its previous parent
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.check_insert(parent, child)?;
        self.detach(child);
        self.link(parent, child, false);
        Ok(child)
    }

    /// Insert a child node before all existing children
    pub fn prepend_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.check_insert(parent, child)?;
        self.detach(child);
        self.link(parent, child, true);
        Ok(child)
    }

    /// Remove `child` from `parent`
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        if self.get(child).ok_or(DomError::NotFound)?.parent != Some(parent) {
            return Err(DomError::NotAChild);
        }
        self.detach(child);
        Ok(child)
    }

    /// Detach a node from its parent. Returns false if it had none.
    pub fn detach(&mut self, id: NodeId) -> bool {
        let Some(parent) = self.get(id).and_then(|n| n.parent) else {
            return false;
        };
        if let Some(parent_node) = self.get_mut(parent) {
            parent_node.children.retain(|&c| c != id);
        }
        if let Some(node) = self.get_mut(id) {
            node.parent = None;
        }
        true
    }

    /// Detach every child of a node
    pub fn clear_children(&mut self, id: NodeId) {
        let children = self.get_mut(id).map(|n| std::mem::take(&mut n.children)).unwrap_or_default();
        for child in children {
            if let Some(node) = self.get_mut(child) {
                node.parent = None;
            }
        }
    }

    fn check_insert(&self, parent: NodeId, child: NodeId) -> DomResult<()> {
        if self.get(parent).is_none() || self.get(child).is_none() {
            return Err(DomError::NotFound);
        }
        if child == NodeId::ROOT || self.is_inclusive_ancestor(child, parent) {
            tracing::debug!("Rejected insert of {:?} into {:?}", child, parent);
            return Err(DomError::HierarchyRequest);
        }
        Ok(())
    }

    pub(crate) fn link(&mut self, parent: NodeId, child: NodeId, first: bool) {
        if let Some(node) = self.get_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(parent_node) = self.get_mut(parent) {
            if first {
                parent_node.children.insert(0, child);
            } else {
                parent_node.children.push(child);
            }
        }
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Parent node
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Parent, only if it is an element
    pub fn parent_element(&self, id: NodeId) -> Option<NodeId> {
        self.parent(id).filter(|&p| self.is_element(p))
    }

    /// All child nodes
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Child elements, in document order
    pub fn element_children(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|&c| self.is_element(c))
            .collect()
    }

    /// Descendant elements in pre-order (document order), excluding `id`
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            if self.is_element(next) {
                out.push(next);
            }
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// Whether `ancestor` is `id` or one of its ancestors
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// Whether a node is reachable from the document node
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.is_inclusive_ancestor(NodeId::ROOT, id)
    }

    #[inline]
    pub fn is_element(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(Node::is_element)
    }

    /// Lowercase tag name
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|e| e.tag.as_str())
    }

    // ------------------------------------------------------------------
    // Attributes, classes, style
    // ------------------------------------------------------------------

    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).and_then(|e| e.get_attr(&name.to_ascii_lowercase()))
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.element(id).is_some_and(|e| e.has_attr(&name.to_ascii_lowercase()))
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(elem) = self.element_mut(id) {
            elem.set_attr(name, value);
        }
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Option<String> {
        self.element_mut(id).and_then(|e| e.remove_attr(name))
    }

    /// Class tokens parsed from the `class` attribute
    pub fn class_list(&self, id: NodeId) -> ClassList {
        ClassList::from_string(self.get_attribute(id, "class").unwrap_or(""))
    }

    /// Add a class token; re-serializes the `class` attribute
    pub fn add_class(&mut self, id: NodeId, token: &str) {
        let mut list = self.class_list(id);
        if list.add(token) || self.get_attribute(id, "class").is_some() {
            self.set_attribute(id, "class", &list.value());
        }
    }

    /// Remove a class token; re-serializes the `class` attribute
    pub fn remove_class(&mut self, id: NodeId, token: &str) {
        if !self.has_attribute(id, "class") {
            return;
        }
        let mut list = self.class_list(id);
        list.remove(token);
        self.set_attribute(id, "class", &list.value());
    }

    pub fn has_class(&self, id: NodeId, token: &str) -> bool {
        self.class_list(id).contains(token)
    }

    pub fn style(&self, id: NodeId) -> Option<&InlineStyle> {
        self.element(id).map(|e| &e.style)
    }

    pub fn style_property(&self, id: NodeId, property: &str) -> &str {
        self.style(id).map(|s| s.get(property)).unwrap_or("")
    }

    pub fn set_style_property(&mut self, id: NodeId, property: &str, value: &str) {
        if let Some(elem) = self.element_mut(id) {
            elem.style.set(property, value);
        }
    }

    // ------------------------------------------------------------------
    // Content
    // ------------------------------------------------------------------

    /// Concatenated text of the subtree
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.get(id) else { return };
        match &node.data {
            NodeData::Text(text) => out.push_str(text),
            NodeData::Element(_) | NodeData::Document => {
                for &child in &node.children {
                    self.collect_text(child, out);
                }
            }
        }
    }

    /// Replace all children with a single literal text node
    pub fn set_text_content(&mut self, id: NodeId, text: &str) {
        self.clear_children(id);
        if !text.is_empty() {
            let child = self.alloc(Node::text(text));
            self.link(id, child, false);
        }
    }

    /// Replace all children with the nodes parsed from `markup`
    pub fn set_inner_html(&mut self, id: NodeId, markup: &str) {
        self.clear_children(id);
        if !markup.is_empty() {
            self.append_html(id, markup);
        }
    }

    /// Serialize the children of a node
    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        for &child in self.children(id) {
            self.serialize(child, &mut out);
        }
        out
    }

    /// Serialize a node and its subtree
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.serialize(id, &mut out);
        out
    }

    fn serialize(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.get(id) else { return };
        match &node.data {
            NodeData::Text(text) => out.push_str(&escape(text, false)),
            NodeData::Document => {
                for &child in &node.children {
                    self.serialize(child, out);
                }
            }
            NodeData::Element(elem) => {
                out.push('<');
                out.push_str(&elem.tag);
                for attr in &elem.attrs {
                    out.push_str(&format!(" {}=\"{}\"", attr.name, escape(&attr.value, true)));
                }
                if !elem.style.is_empty() {
                    out.push_str(&format!(" style=\"{}\"", escape(&elem.style.css_text(), true)));
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&elem.tag.as_str()) {
                    return;
                }
                for &child in &node.children {
                    self.serialize(child, out);
                }
                out.push_str("</");
                out.push_str(&elem.tag);
                out.push('>');
            }
        }
    }

    // ------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------

    /// Assign a property: reflected names go to attributes, content names
    /// replace content, `value`/`selected` update control state, anything
    /// else is stored as a custom property.
    pub fn set_property(&mut self, id: NodeId, name: &str, value: PropValue) {
        if !self.is_element(id) {
            return;
        }
        match name {
            "textContent" | "innerText" => self.set_text_content(id, &value.to_string()),
            "innerHTML" => self.set_inner_html(id, &value.to_string()),
            "value" => self.set_control_value(id, &value.to_string()),
            "selected" => self.set_option_selected(id, value.truthy()),
            _ => {
                if let Some(&(_, attr)) = REFLECTED.iter().find(|(prop, _)| *prop == name) {
                    self.set_attribute(id, attr, &value.to_string());
                } else if let Some(&(_, attr)) = REFLECTED_BOOL.iter().find(|(prop, _)| *prop == name) {
                    if value.truthy() {
                        self.set_attribute(id, attr, "");
                    } else {
                        self.remove_attribute(id, attr);
                    }
                } else if let Some(elem) = self.element_mut(id) {
                    elem.props.insert(name.to_string(), value);
                }
            }
        }
    }

    /// Read a property back
    pub fn property(&self, id: NodeId, name: &str) -> Option<PropValue> {
        let elem = self.element(id)?;
        match name {
            "tagName" => Some(PropValue::Str(elem.tag.to_ascii_uppercase())),
            "textContent" | "innerText" => Some(PropValue::Str(self.text_content(id))),
            "innerHTML" => Some(PropValue::Str(self.inner_html(id))),
            "value" => Some(PropValue::Str(self.control_value(id))),
            "selected" => Some(PropValue::Bool(self.is_option_selected(id))),
            "type" if elem.tag == "input" => Some(PropValue::Str(
                elem.get_attr("type")
                    .map(str::to_ascii_lowercase)
                    .unwrap_or_else(|| "text".to_string()),
            )),
            _ => {
                if let Some(&(_, attr)) = REFLECTED.iter().find(|(prop, _)| *prop == name) {
                    Some(PropValue::Str(elem.get_attr(attr).unwrap_or("").to_string()))
                } else if let Some(&(_, attr)) = REFLECTED_BOOL.iter().find(|(prop, _)| *prop == name) {
                    Some(PropValue::Bool(elem.has_attr(attr)))
                } else {
                    elem.props.get(name).cloned()
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// First descendant of `scope` matching the selector list
    pub fn query_selector(&self, scope: NodeId, selectors: &SelectorList) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .find(|&id| selectors.matches(self, id))
    }

    /// All descendants of `scope` matching the selector list, in document order
    pub fn query_selector_all(&self, scope: NodeId, selectors: &SelectorList) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&id| selectors.matches(self, id))
            .collect()
    }

    /// Descendant elements with a given tag
    pub fn elements_by_tag_name(&self, scope: NodeId, tag: &str) -> Vec<NodeId> {
        let tag = tag.to_ascii_lowercase();
        self.descendants(scope)
            .into_iter()
            .filter(|&id| self.tag_name(id) == Some(tag.as_str()))
            .collect()
    }

    /// First element in the subtree carrying the given id attribute
    pub fn element_by_id(&self, scope: NodeId, element_id: &str) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .find(|&id| self.get_attribute(id, "id") == Some(element_id))
    }
}

fn escape(text: &str, attribute: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' if !attribute => out.push_str("&lt;"),
            '>' if !attribute => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
