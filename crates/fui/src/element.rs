//! Element builder
//!
//! Chainable operations on a single node. Every mutating call returns a
//! handle to the same element so calls can be strung together; `create`
//! and `create_at_beginning` return the new child instead.

use std::fmt;
use std::rc::Rc;

use fui_dom::{NodeId, PropValue};

use crate::collection::Elements;
use crate::error::{UiError, UiResult};
use crate::event::Event;
use crate::props::{Create, Props};
use crate::ui::Ui;

/// Handle to one element of a [`Ui`] document
#[derive(Clone)]
pub struct Element {
    ui: Ui,
    id: NodeId,
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && Rc::ptr_eq(&self.ui.inner, &other.ui.inner)
    }
}

impl Eq for Element {}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self
            .ui
            .inner
            .doc
            .try_borrow()
            .ok()
            .and_then(|doc| doc.tree().tag_name(self.id).map(str::to_owned));
        f.debug_struct("Element")
            .field("id", &self.id)
            .field("tag", &tag)
            .finish()
    }
}

impl Element {
    pub(crate) fn new(ui: Ui, id: NodeId) -> Self {
        Self { ui, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn ui(&self) -> &Ui {
        &self.ui
    }

    // ------------------------------------------------------------------
    // Attributes and classes
    // ------------------------------------------------------------------

    /// Set a single attribute
    pub fn attr(&self, name: &str, value: &str) -> Self {
        self.ui.tree_mut().set_attribute(self.id, name, value);
        self.clone()
    }

    /// Add one class, or several separated by spaces
    pub fn class(&self, classes: &str) -> Self {
        let mut tree = self.ui.tree_mut();
        for token in classes.split(' ') {
            tree.add_class(self.id, token);
        }
        drop(tree);
        self.clone()
    }

    /// Remove a single class
    pub fn remove_class(&self, name: &str) -> Self {
        self.ui.tree_mut().remove_class(self.id, name);
        self.clone()
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.ui.tree().get_attribute(self.id, name).map(str::to_owned)
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.ui.tree().has_class(self.id, name)
    }

    /// Raw `class` attribute
    pub fn class_name(&self) -> String {
        self.attribute("class").unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    /// Create a child at the end and return it.
    ///
    /// Accepts `()`, a tag, a [`Props`] or a `(tag, Props)` pair; without a
    /// tag the configured default tag is used. Properties are applied with
    /// [`Element::set_all`] right after creation.
    pub fn create(&self, what: impl Into<Create>) -> Element {
        let Create { tag, props } = what.into();
        let tag = tag.unwrap_or_else(|| self.ui.config().default_tag.clone());
        let id = self.ui.tree_mut().create_child(self.id, &tag);
        let child = self.ui.element(id);
        if let Some(props) = props {
            child.set_all(props);
        }
        child
    }

    /// Create a child in front of all existing children and return it
    pub fn create_at_beginning(&self, tag: &str) -> Element {
        let id = self.ui.tree_mut().create_first_child(self.id, tag);
        self.ui.element(id)
    }

    /// Detach all children and any raw content
    pub fn clear(&self) -> Self {
        let mut tree = self.ui.tree_mut();
        tree.clear_children(self.id);
        tree.set_inner_html(self.id, "");
        drop(tree);
        self.clone()
    }

    /// Call `callback(child, index)` for each current child element
    pub fn each(&self, mut callback: impl FnMut(Element, usize)) -> Self {
        let children = self.ui.tree().element_children(self.id);
        for (index, child) in children.into_iter().enumerate() {
            callback(self.ui.element(child), index);
        }
        self.clone()
    }

    /// Child elements, as a snapshot
    pub fn children(&self) -> Elements {
        let children = self.ui.tree().element_children(self.id);
        Elements::new(children.into_iter().map(|id| self.ui.element(id)).collect())
    }

    /// Parent element
    pub fn parent(&self) -> Option<Element> {
        let parent = self.ui.tree().parent_element(self.id);
        parent.map(|id| self.ui.element(id))
    }

    /// Detach from the parent, if any
    pub fn remove(&self) {
        self.ui.tree_mut().detach(self.id);
    }

    /// Whether the element currently has a parent
    pub fn is_attached(&self) -> bool {
        self.ui.tree().parent(self.id).is_some()
    }

    /// Whether the element is reachable from the document
    pub fn is_connected(&self) -> bool {
        self.ui.tree().is_connected(self.id)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// First descendant matching `selector`, or `NotFound`
    pub fn find(&self, selector: &str) -> UiResult<Element> {
        self.ui
            .query(self.id, selector)
            .map(|id| self.ui.element(id))
            .ok_or_else(|| UiError::NotFound {
                selector: selector.to_string(),
            })
    }

    /// All descendants matching `selector`
    pub fn find_many(&self, selector: &str) -> Elements {
        self.ui.query_all(self.id, selector)
    }

    // ------------------------------------------------------------------
    // Content
    // ------------------------------------------------------------------

    /// Replace content with the nodes parsed from `markup`
    pub fn html(&self, markup: &str) -> Self {
        self.ui.tree_mut().set_inner_html(self.id, markup);
        self.clone()
    }

    /// Replace content with literal text
    pub fn text(&self, content: &str) -> Self {
        self.ui.tree_mut().set_text_content(self.id, content);
        self.clone()
    }

    pub fn text_content(&self) -> String {
        self.ui.tree().text_content(self.id)
    }

    pub fn inner_html(&self) -> String {
        self.ui.tree().inner_html(self.id)
    }

    pub fn outer_html(&self) -> String {
        self.ui.tree().outer_html(self.id)
    }

    pub fn tag_name(&self) -> String {
        self.ui.tree().tag_name(self.id).unwrap_or("").to_string()
    }

    // ------------------------------------------------------------------
    // Style and visibility
    // ------------------------------------------------------------------

    /// Inline style property ("" when unset)
    pub fn style(&self, property: &str) -> String {
        self.ui.tree().style_property(self.id, property).to_string()
    }

    pub fn set_style(&self, property: &str, value: &str) -> Self {
        self.ui.tree_mut().set_style_property(self.id, property, value);
        self.clone()
    }

    /// Remember the current display value and set `display: none`.
    ///
    /// Hiding again before `show` keeps the value remembered by the first
    /// call.
    pub fn hide(&self) -> Self {
        let display = self.style("display");
        let mut saved = self.ui.inner.saved_display.borrow_mut();
        if display != "none" || !saved.contains_key(&self.id) {
            saved.insert(self.id, display);
        }
        drop(saved);
        self.set_style("display", "none")
    }

    /// Restore the display value remembered by `hide`, or clear it.
    /// The remembered value is consumed.
    pub fn show(&self) -> Self {
        let saved = self.ui.inner.saved_display.borrow_mut().remove(&self.id);
        let display = saved.unwrap_or_default();
        self.set_style("display", &display)
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    /// Bind the handler for `event`. Each event name has a single slot:
    /// binding again replaces the previous handler.
    pub fn on(&self, event: &str, handler: impl Fn(&Event) + 'static) -> Self {
        self.ui.bind(self.id, event, Rc::new(handler));
        self.clone()
    }

    /// Unbind the handler for `event`
    pub fn off(&self, event: &str) -> Self {
        self.ui.unbind(self.id, event);
        self.clone()
    }

    // ------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------

    /// Assign one property.
    ///
    /// `text` sets literal text, `html` sets raw markup and `class` is
    /// appended to the class attribute (`className += " " + value`). Any
    /// other key is a plain property assignment.
    pub fn set(&self, key: &str, value: impl Into<PropValue>) -> Self {
        let value = value.into();
        match key {
            "text" => self.ui.tree_mut().set_text_content(self.id, &value.to_string()),
            "html" => self.ui.tree_mut().set_inner_html(self.id, &value.to_string()),
            "class" => {
                let class_name = format!("{} {}", self.class_name(), value);
                self.ui.tree_mut().set_attribute(self.id, "class", &class_name);
            }
            _ => self.ui.tree_mut().set_property(self.id, key, value),
        }
        self.clone()
    }

    /// Assign every property of `props`, in order
    pub fn set_all(&self, props: Props) -> Self {
        for (key, value) in props {
            self.set(&key, value);
        }
        self.clone()
    }

    /// Read a property back
    pub fn property(&self, name: &str) -> Option<PropValue> {
        self.ui.tree().property(self.id, name)
    }

    /// Label element attached by `create_input`, if any
    pub fn label(&self) -> Option<Element> {
        let label = self.property("label").and_then(|value| value.as_node());
        label.map(|id| self.ui.element(id))
    }

    /// Run `callback` with this element, for imperative steps inside a chain
    pub fn with(&self, callback: impl FnOnce(&Element)) -> Self {
        callback(self);
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_chain_returns_same_element() {
        let ui = Ui::new();
        let div = ui.body().create(());
        let same = div.attr("role", "dialog").class("a").remove_class("a").text("x");
        assert_eq!(same, div);
        assert_eq!(div.tag_name(), "div");
        assert_eq!(div.attribute("role").as_deref(), Some("dialog"));
    }

    #[test]
    fn test_class_splits_on_spaces() {
        let ui = Ui::new();
        let div = ui.body().create("div").class("card  wide  card");
        assert!(div.has_class("card"));
        assert!(div.has_class("wide"));
        assert_eq!(div.class_name(), "card wide");
    }

    #[test]
    fn test_create_overloads() {
        let ui = Ui::new();
        let body = ui.body();

        assert_eq!(body.create(()).tag_name(), "div");
        assert_eq!(body.create("span").tag_name(), "span");

        let from_props = body.create(Props::new().text("hello").with("title", "greeting"));
        assert_eq!(from_props.tag_name(), "div");
        assert_eq!(from_props.text_content(), "hello");
        assert_eq!(from_props.attribute("title").as_deref(), Some("greeting"));

        let both = body.create(("input", Props::new().with("type", "date")));
        assert_eq!(both.attribute("type").as_deref(), Some("date"));
        assert_eq!(both.parent(), Some(body));
    }

    #[test]
    fn test_create_at_beginning() {
        let ui = Ui::new();
        let list = ui.body().create("ul");
        let second = list.create("li");
        let first = list.create_at_beginning("li");
        assert_eq!(list.children().to_vec(), vec![first, second]);
    }

    #[test]
    fn test_clear_removes_children_and_markup() {
        let ui = Ui::new();
        let div = ui.body().create("div");
        let child = div.create("p");
        div.html("<b>raw</b>");
        div.create("span");
        div.clear();
        assert_eq!(div.inner_html(), "");
        assert!(div.children().is_empty());
        assert!(!child.is_attached());
    }

    #[test]
    fn test_each_visits_in_order() {
        let ui = Ui::new();
        let list = ui.body().create("ul");
        for label in ["a", "b", "c"] {
            list.create("li").text(label);
        }
        let mut seen = Vec::new();
        list.each(|child, index| seen.push((index, child.text_content())));
        assert_eq!(
            seen,
            vec![(0, "a".to_string()), (1, "b".to_string()), (2, "c".to_string())]
        );
    }

    #[test]
    fn test_each_callback_may_mutate() {
        let ui = Ui::new();
        let list = ui.body().create("ul");
        list.create("li");
        list.create("li");
        list.each(|child, index| {
            child.set("data-index", index as u32).class("item");
        });
        assert_eq!(list.find_many(".item").len(), 2);
    }

    #[test]
    fn test_text_does_not_interpret_markup() {
        let ui = Ui::new();
        let div = ui.body().create("div").text("<script>x</script>");
        assert!(div.find_many("script").is_empty());
        assert_eq!(div.inner_html(), "&lt;script&gt;x&lt;/script&gt;");
        div.html("<i>ok</i>");
        assert_eq!(div.inner_html(), "<i>ok</i>");
    }

    #[test]
    fn test_set_special_keys() {
        let ui = Ui::new();
        let div = ui.body().create("div").class("base");
        div.set("class", "extra");
        assert_eq!(div.class_name(), "base extra");
        assert!(div.has_class("extra"));

        let bare = ui.body().create("div");
        bare.set("class", "only");
        assert_eq!(bare.class_name(), " only");

        div.set("text", "plain").set("html", "<b>bold</b>");
        assert_eq!(div.inner_html(), "<b>bold</b>");
    }

    #[test]
    fn test_set_passes_through_properties() {
        let ui = Ui::new();
        let select = ui.body().create("select");
        select.set_all(Props::new().with("name", "colors").with("multiple", true).with("answer", 42));
        assert_eq!(select.attribute("name").as_deref(), Some("colors"));
        assert_eq!(select.property("multiple"), Some(PropValue::Bool(true)));
        assert_eq!(select.property("answer"), Some(PropValue::Number(42.0)));
    }

    #[test]
    fn test_hide_show_restores_display() {
        let ui = Ui::new();
        for display in ["", "flex", "inline-block"] {
            let div = ui.body().create("div").set_style("display", display);
            div.hide();
            assert_eq!(div.style("display"), "none");
            div.show();
            assert_eq!(div.style("display"), display);
        }
    }

    #[test]
    fn test_double_hide_keeps_first_value() {
        let ui = Ui::new();
        let div = ui.body().create("div").set_style("display", "grid");
        div.hide().hide().show();
        assert_eq!(div.style("display"), "grid");
    }

    #[test]
    fn test_hide_after_show_captures_current_value() {
        let ui = Ui::new();
        let div = ui.body().create("div").set_style("display", "flex");
        div.hide().show();
        assert_eq!(div.style("display"), "flex");

        div.set_style("display", "none");
        div.hide().show();
        assert_eq!(div.style("display"), "none");
        assert!(ui.inner.saved_display.borrow().is_empty());
    }

    #[test]
    fn test_show_without_hide_clears_display() {
        let ui = Ui::new();
        let div = ui.body().create("div").set_style("display", "none");
        div.show();
        assert_eq!(div.style("display"), "");
    }

    #[test]
    fn test_on_replaces_handler() {
        let ui = Ui::new();
        let button = ui.body().create("button");
        let calls = Rc::new(RefCell::new(Vec::new()));

        let log = calls.clone();
        button.on("click", move |_| log.borrow_mut().push("first"));
        let log = calls.clone();
        button.on("click", move |_| log.borrow_mut().push("second"));

        ui.click(&button);
        assert_eq!(*calls.borrow(), vec!["second"]);

        button.off("click");
        assert_eq!(ui.click(&button), 0);
    }

    #[test]
    fn test_with_runs_inline() {
        let ui = Ui::new();
        let mut captured = None;
        let div = ui.body().create("div").with(|el| captured = Some(el.id()));
        assert_eq!(captured, Some(div.id()));
    }

    #[test]
    fn test_find_not_found_carries_selector() {
        let ui = Ui::new();
        let div = ui.body().create("div");
        div.create("span").class("hit");
        assert!(div.find(".hit").is_ok());
        match div.find("p.missing") {
            Err(UiError::NotFound { selector }) => assert_eq!(selector, "p.missing"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_parent_and_remove() {
        let ui = Ui::new();
        let outer = ui.body().create("div");
        let inner = outer.create("div");
        assert_eq!(inner.parent(), Some(outer.clone()));
        inner.remove();
        assert_eq!(inner.parent(), None);
        assert!(outer.children().is_empty());
        assert_eq!(ui.document_element().parent(), None);
    }
}
