//! Tree-level tests for fui-dom
//!
//! Build small documents by hand and check queries, control state and
//! timer ordering together.

use fui_dom::{ControlKind, Document, EventLoop, PropValue, SelectorList};

#[test]
fn test_build_and_query_form() {
    let mut doc = Document::new();
    let body = doc.body();
    let tree = doc.tree_mut();

    let form = tree.create_child(body, "form");
    let field = tree.create_child(form, "div");
    tree.add_class(field, "input-field");
    let input = tree.create_child(field, "input");
    tree.set_property(input, "name", "email".into());
    tree.set_property(input, "value", "a@b.c".into());

    let selectors = SelectorList::parse(".input-field > input[name=email]").unwrap();
    assert_eq!(tree.query_selector(body, &selectors), Some(input));
    assert_eq!(tree.form_controls(form), vec![input]);
    assert_eq!(tree.control_value(input), "a@b.c");
    assert_eq!(tree.control_kind(input), Some(ControlKind::TextLike));
}

#[test]
fn test_multiple_property_reclassifies_select() {
    let mut doc = Document::new();
    let body = doc.body();
    let tree = doc.tree_mut();

    let select = tree.create_child(body, "select");
    assert_eq!(tree.control_kind(select), Some(ControlKind::SingleSelect));
    tree.set_property(select, "multiple", true.into());
    assert_eq!(tree.control_kind(select), Some(ControlKind::MultiSelect));
    assert_eq!(tree.property(select, "multiple"), Some(PropValue::Bool(true)));
}

#[test]
fn test_detached_subtree_is_not_queried() {
    let mut doc = Document::new();
    let body = doc.body();
    let tree = doc.tree_mut();

    let div = tree.create_child(body, "div");
    tree.add_class(div, "popup");
    tree.detach(div);

    let selectors = SelectorList::parse(".popup").unwrap();
    assert_eq!(tree.query_selector(body, &selectors), None);
    assert!(!tree.is_connected(div));
}

#[test]
fn test_timer_chain() {
    let mut event_loop = EventLoop::new();
    let mut fired = Vec::new();
    event_loop.set_timeout(30, 1);

    while let Some((_, step)) = event_loop.pop_due(100) {
        fired.push((event_loop.current_time(), step));
        if step < 3 {
            event_loop.set_timeout(30, step + 1);
        }
    }

    assert_eq!(fired, vec![(30, 1), (60, 2), (90, 3)]);
}
