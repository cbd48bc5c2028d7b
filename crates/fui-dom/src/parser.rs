//! HTML fragment parsing
//!
//! Markup is parsed by html5ever into its RcDom and the result is copied
//! into the arena below the element that receives it. The fragment is
//! wrapped in its context element first, so `<option>`s assigned to a
//! `<select>` or `<tr>`s assigned to a `<tbody>` land where a browser
//! would put them.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use crate::tree::{DomTree, VOID_ELEMENTS};
use crate::NodeId;

impl DomTree {
    /// Parse `markup` as content of `parent` and append the resulting
    /// nodes. Returns the top-level nodes created.
    pub fn append_html(&mut self, parent: NodeId, markup: &str) -> Vec<NodeId> {
        let context = self.tag_name(parent).unwrap_or("body").to_string();
        let handles = parse_fragment(&context, markup);

        let mut created = Vec::with_capacity(handles.len());
        for handle in &handles {
            if let Some(id) = self.convert_node(handle, parent) {
                created.push(id);
            }
        }
        tracing::trace!("Parsed {} top-level nodes into <{}>", created.len(), context);
        created
    }

    /// Copy an RcDom node and its subtree under `parent`
    fn convert_node(&mut self, handle: &Handle, parent: NodeId) -> Option<NodeId> {
        match &handle.data {
            RcNodeData::Text { contents } => {
                let id = self.create_text(&contents.borrow());
                self.link(parent, id, false);
                Some(id)
            }
            RcNodeData::Element { name, attrs, .. } => {
                let id = self.create_element(&name.local);
                if let Some(elem) = self.element_mut(id) {
                    for attr in attrs.borrow().iter() {
                        elem.set_attr(&attr.name.local, attr.value.to_string());
                    }
                }
                self.link(parent, id, false);
                for child in handle.children.borrow().iter() {
                    self.convert_node(child, id);
                }
                Some(id)
            }
            // No node kinds for these
            RcNodeData::Document
            | RcNodeData::Doctype { .. }
            | RcNodeData::Comment { .. }
            | RcNodeData::ProcessingInstruction { .. } => None,
        }
    }
}

/// Parse `markup` inside a `<context>` element and return that element's
/// children as html5ever built them.
fn parse_fragment(context: &str, markup: &str) -> Vec<Handle> {
    let chain = context_chain(context);
    let mut source = String::with_capacity(markup.len() + 32);
    for tag in &chain {
        source.push('<');
        source.push_str(tag);
        source.push('>');
    }
    source.push_str(markup);

    let dom = parse_document(RcDom::default(), Default::default()).one(source);

    let Some(body) = child_element(&dom.document, "html").and_then(|html| child_element(&html, "body")) else {
        tracing::warn!("Parsed markup has no <body>");
        return Vec::new();
    };
    let mut scope = body;
    for tag in &chain {
        match child_element(&scope, tag) {
            Some(next) => scope = next,
            None => {
                tracing::debug!("Context <{}> was not kept by the parser", tag);
                break;
            }
        }
    }
    let children = scope.children.borrow().clone();
    children
}

/// Elements to open before the fragment so it parses as content of `tag`
fn context_chain(tag: &str) -> Vec<&str> {
    match tag {
        "html" | "body" | "head" => Vec::new(),
        "caption" | "colgroup" | "thead" | "tbody" | "tfoot" => vec!["table", tag],
        "tr" => vec!["table", "tbody", tag],
        "td" | "th" => vec!["table", "tbody", "tr", tag],
        // Void and template elements keep no parsed children of their own
        "template" => vec!["div"],
        _ if VOID_ELEMENTS.contains(&tag) => vec!["div"],
        _ => vec![tag],
    }
}

fn child_element(handle: &Handle, tag: &str) -> Option<Handle> {
    handle
        .children
        .borrow()
        .iter()
        .find(|child| matches!(&child.data, RcNodeData::Element { name, .. } if &*name.local == tag))
        .cloned()
}
