//! Form controls
//!
//! Control role tagging, control values, option selectedness and form
//! control enumeration.

use crate::tree::DomTree;
use crate::NodeId;

/// How a control's value is extracted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// Inputs holding free text (text, tel, email, ...) and textareas
    TextLike,
    /// `<select multiple>`
    MultiSelect,
    /// `<select>`
    SingleSelect,
    /// `<input type="date">`
    Date,
    /// Any other control (checkbox, button, color, ...)
    Other,
}

impl ControlKind {
    /// Classify an element from its tag and the attributes that affect its role.
    pub fn classify(tag: &str, input_type: Option<&str>, multiple: bool) -> Option<Self> {
        match tag {
            "select" if multiple => Some(Self::MultiSelect),
            "select" => Some(Self::SingleSelect),
            "textarea" => Some(Self::TextLike),
            "button" => Some(Self::Other),
            "input" => {
                let input_type = input_type.map(str::to_ascii_lowercase).unwrap_or_default();
                Some(match input_type.as_str() {
                    "date" => Self::Date,
                    "" | "text" | "tel" | "email" | "password" | "search" | "url" | "number" => {
                        Self::TextLike
                    }
                    _ => Self::Other,
                })
            }
            _ => None,
        }
    }

    #[inline]
    pub fn is_select(self) -> bool {
        matches!(self, Self::MultiSelect | Self::SingleSelect)
    }
}

impl DomTree {
    /// Control role of an element, if it is a control
    pub fn control_kind(&self, id: NodeId) -> Option<ControlKind> {
        self.get(id).and_then(|n| n.as_element()).and_then(|e| e.control)
    }

    /// Name a control is submitted under ("" when unnamed)
    pub fn control_name(&self, id: NodeId) -> &str {
        self.get_attribute(id, "name").unwrap_or("")
    }

    /// Current value of a control, as its `value` property reads
    pub fn control_value(&self, id: NodeId) -> String {
        let Some(elem) = self.get(id).and_then(|n| n.as_element()) else {
            return String::new();
        };
        match elem.tag.as_str() {
            "select" => self.select_value(id),
            "option" => self.option_value(id),
            "textarea" => elem.value.clone().unwrap_or_else(|| self.text_content(id)),
            "input" => elem
                .value
                .clone()
                .or_else(|| elem.get_attr("value").map(str::to_owned))
                .unwrap_or_default(),
            "button" => elem.get_attr("value").unwrap_or("").to_string(),
            _ => elem
                .props
                .get("value")
                .map(|v| v.to_string())
                .unwrap_or_default(),
        }
    }

    /// Assign the `value` property
    pub fn set_control_value(&mut self, id: NodeId, value: &str) {
        match self.tag_name(id) {
            Some("select") => self.select_by_value(id, value),
            Some("option") | Some("button") => self.set_attribute(id, "value", value),
            Some(_) => {
                if let Some(elem) = self.get_mut(id).and_then(|n| n.as_element_mut()) {
                    elem.value = Some(value.to_string());
                }
            }
            None => {}
        }
    }

    // ------------------------------------------------------------------
    // Select and option
    // ------------------------------------------------------------------

    /// Options of a select, in document order (including those in optgroups)
    pub fn options(&self, select: NodeId) -> Vec<NodeId> {
        self.elements_by_tag_name(select, "option")
    }

    /// Value of an option: its value attribute, else its text
    pub fn option_value(&self, option: NodeId) -> String {
        match self.get_attribute(option, "value") {
            Some(value) => value.to_string(),
            None => self.text_content(option).trim().to_string(),
        }
    }

    /// Option selectedness
    pub fn is_option_selected(&self, option: NodeId) -> bool {
        self.get(option)
            .and_then(|n| n.as_element())
            .is_some_and(|e| e.selected.unwrap_or_else(|| e.has_attr("selected")))
    }

    /// Set option selectedness. In a single-select, selecting an option
    /// deselects its siblings.
    pub fn set_option_selected(&mut self, option: NodeId, selected: bool) {
        if self.tag_name(option) != Some("option") {
            return;
        }
        if selected {
            if let Some(select) = self.owner_select(option) {
                if self.control_kind(select) == Some(ControlKind::SingleSelect) {
                    for other in self.options(select) {
                        self.store_selected(other, other == option);
                    }
                    return;
                }
            }
        }
        self.store_selected(option, selected);
    }

    fn store_selected(&mut self, option: NodeId, selected: bool) {
        if let Some(elem) = self.get_mut(option).and_then(|n| n.as_element_mut()) {
            elem.selected = Some(selected);
        }
    }

    /// Select element an option belongs to (parent, or grandparent via optgroup)
    pub fn owner_select(&self, option: NodeId) -> Option<NodeId> {
        let parent = self.parent_element(option)?;
        match self.tag_name(parent) {
            Some("select") => Some(parent),
            Some("optgroup") => self
                .parent_element(parent)
                .filter(|&g| self.tag_name(g) == Some("select")),
            _ => None,
        }
    }

    /// Options currently selected, in document order
    pub fn selected_options(&self, select: NodeId) -> Vec<NodeId> {
        self.options(select)
            .into_iter()
            .filter(|&o| self.is_option_selected(o))
            .collect()
    }

    /// Value of a select: first selected option, or the first option of a
    /// single-select when none is selected
    pub fn select_value(&self, select: NodeId) -> String {
        let options = self.options(select);
        let chosen = options
            .iter()
            .copied()
            .find(|&o| self.is_option_selected(o))
            .or_else(|| {
                (self.control_kind(select) == Some(ControlKind::SingleSelect))
                    .then(|| options.first().copied())
                    .flatten()
            });
        chosen.map(|o| self.option_value(o)).unwrap_or_default()
    }

    fn select_by_value(&mut self, select: NodeId, value: &str) {
        let mut matched = false;
        for option in self.options(select) {
            let hit = !matched && self.option_value(option) == value;
            matched |= hit;
            self.store_selected(option, hit);
        }
    }

    // ------------------------------------------------------------------
    // Forms
    // ------------------------------------------------------------------

    /// Listed controls of a form, in document order
    pub fn form_controls(&self, form: NodeId) -> Vec<NodeId> {
        self.descendants(form)
            .into_iter()
            .filter(|&id| self.control_kind(id).is_some())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select_with(tree: &mut DomTree, multiple: bool, values: &[&str]) -> (NodeId, Vec<NodeId>) {
        let select = tree.create_child(tree.root(), "select");
        if multiple {
            tree.set_attribute(select, "multiple", "");
        }
        let options = values
            .iter()
            .map(|v| {
                let option = tree.create_child(select, "option");
                tree.set_attribute(option, "value", v);
                option
            })
            .collect();
        (select, options)
    }

    #[test]
    fn test_classify() {
        assert_eq!(ControlKind::classify("select", None, true), Some(ControlKind::MultiSelect));
        assert_eq!(ControlKind::classify("input", Some("DATE"), false), Some(ControlKind::Date));
        assert_eq!(ControlKind::classify("input", Some("checkbox"), false), Some(ControlKind::Other));
        assert_eq!(ControlKind::classify("div", None, false), None);
    }

    #[test]
    fn test_single_select_default_and_exclusive() {
        let mut tree = DomTree::new();
        let (select, options) = select_with(&mut tree, false, &["a", "b", "c"]);
        assert_eq!(tree.select_value(select), "a");

        tree.set_option_selected(options[1], true);
        tree.set_option_selected(options[2], true);
        assert_eq!(tree.selected_options(select), vec![options[2]]);
        assert_eq!(tree.control_value(select), "c");
    }

    #[test]
    fn test_multi_select_additive() {
        let mut tree = DomTree::new();
        let (select, options) = select_with(&mut tree, true, &["a", "b", "c"]);
        assert_eq!(tree.select_value(select), "");

        tree.set_option_selected(options[2], true);
        tree.set_option_selected(options[0], true);
        assert_eq!(tree.selected_options(select), vec![options[0], options[2]]);
    }

    #[test]
    fn test_option_value_falls_back_to_text() {
        let mut tree = DomTree::new();
        let select = tree.create_child(tree.root(), "select");
        let option = tree.create_child(select, "option");
        tree.set_text_content(option, "  Red ");
        assert_eq!(tree.option_value(option), "Red");
    }

    #[test]
    fn test_optgroup_options() {
        let mut tree = DomTree::new();
        let select = tree.create_child(tree.root(), "select");
        let group = tree.create_child(select, "optgroup");
        let option = tree.create_child(group, "option");
        assert_eq!(tree.options(select), vec![option]);
        assert_eq!(tree.owner_select(option), Some(select));
    }

    #[test]
    fn test_select_value_assignment() {
        let mut tree = DomTree::new();
        let (select, options) = select_with(&mut tree, false, &["a", "b"]);
        tree.set_control_value(select, "b");
        assert!(tree.is_option_selected(options[1]));
        assert!(!tree.is_option_selected(options[0]));
    }

    #[test]
    fn test_input_and_textarea_values() {
        let mut tree = DomTree::new();
        let input = tree.create_child(tree.root(), "input");
        tree.set_attribute(input, "value", "default");
        assert_eq!(tree.control_value(input), "default");
        tree.set_control_value(input, "typed");
        assert_eq!(tree.control_value(input), "typed");
        assert_eq!(tree.get_attribute(input, "value"), Some("default"));

        let textarea = tree.create_child(tree.root(), "textarea");
        tree.set_text_content(textarea, "body");
        assert_eq!(tree.control_value(textarea), "body");
    }

    #[test]
    fn test_form_controls() {
        let mut tree = DomTree::new();
        let form = tree.create_child(tree.root(), "form");
        let wrapper = tree.create_child(form, "div");
        let input = tree.create_child(wrapper, "input");
        tree.create_child(wrapper, "label");
        let select = tree.create_child(form, "select");
        tree.create_child(select, "option");
        assert_eq!(tree.form_controls(form), vec![input, select]);
    }
}
