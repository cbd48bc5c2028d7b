//! Labeled controls
//!
//! `create_input` builds a container holding an optional label and the
//! control itself, and hands back the control.

use fui_casing::to_kebab_case;
use fui_dom::PropValue;

use crate::element::Element;

/// Kind of control built by [`Element::create_input`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputType {
    #[default]
    Text,
    Phone,
    Select,
    Textarea,
    /// Any other native input type, passed through as-is
    Other(String),
}

impl InputType {
    /// Parse a type token. `phone` and `tel` both mean a telephone input.
    pub fn parse(token: &str) -> Self {
        match token.to_ascii_lowercase().as_str() {
            "" | "text" => Self::Text,
            "phone" | "tel" => Self::Phone,
            "select" => Self::Select,
            "textarea" => Self::Textarea,
            _ => Self::Other(token.to_string()),
        }
    }

    /// Tag of the control element
    pub fn tag(&self) -> &str {
        match self {
            Self::Select => "select",
            Self::Textarea => "textarea",
            _ => "input",
        }
    }

    /// Native `type` attribute, if the control takes one
    pub fn native_type(&self) -> Option<&str> {
        match self {
            Self::Text => Some("text"),
            Self::Phone => Some("tel"),
            Self::Select | Self::Textarea => None,
            Self::Other(token) => Some(token),
        }
    }
}

impl From<&str> for InputType {
    fn from(token: &str) -> Self {
        Self::parse(token)
    }
}

/// Options for [`Element::create_input`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputConfig {
    pub label: Option<String>,
    pub name: Option<String>,
    pub input_type: InputType,
}

impl InputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn input_type(mut self, input_type: impl Into<InputType>) -> Self {
        self.input_type = input_type.into();
        self
    }

    /// Explicit name, else one derived from the label
    pub fn resolved_name(&self) -> Option<String> {
        self.name
            .clone()
            .or_else(|| self.label.as_deref().map(to_kebab_case))
    }
}

impl Element {
    /// Build a labeled control inside a new input-field container and
    /// return the control.
    ///
    /// The label element, when one is created, stays reachable through
    /// [`Element::label`].
    pub fn create_input(&self, config: InputConfig) -> Element {
        let field_class = self.ui().config().input_field_class.clone();
        let container = self.create("div").class(&field_class);

        let label = config
            .label
            .as_deref()
            .map(|text| container.create("label").text(text));

        let control = container.create(config.input_type.tag());
        if let Some(native_type) = config.input_type.native_type() {
            control.set("type", native_type);
        }
        if let Some(name) = config.resolved_name() {
            control.set("name", name);
        }
        if let Some(label) = &label {
            control.set("label", PropValue::Node(label.id()));
        }

        tracing::debug!(
            "Created {} control {:?}",
            config.input_type.tag(),
            control.attribute("name")
        );
        control
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ui;

    #[test]
    fn test_parse_type_tokens() {
        assert_eq!(InputType::parse(""), InputType::Text);
        assert_eq!(InputType::parse("tel"), InputType::Phone);
        assert_eq!(InputType::parse("Phone"), InputType::Phone);
        assert_eq!(InputType::parse("date"), InputType::Other("date".to_string()));
        assert_eq!(InputType::Select.native_type(), None);
        assert_eq!(InputType::Other("email".into()).native_type(), Some("email"));
    }

    #[test]
    fn test_phone_label_derives_name() {
        let ui = Ui::new();
        let form = ui.body().create("form");
        let phone = form.create_input(InputConfig::new().label("Phone Number").input_type("phone"));

        assert_eq!(phone.tag_name(), "input");
        assert_eq!(phone.attribute("name").as_deref(), Some("phone-number"));
        assert_eq!(phone.attribute("type").as_deref(), Some("tel"));

        let container = phone.parent().unwrap();
        assert!(container.has_class("input-field"));
        assert_eq!(container.parent(), Some(form));

        let label = phone.label().unwrap();
        assert_eq!(label.tag_name(), "label");
        assert_eq!(label.text_content(), "Phone Number");
        assert_eq!(label.parent(), Some(container));
    }

    #[test]
    fn test_explicit_name_wins() {
        let ui = Ui::new();
        let input = ui
            .body()
            .create_input(InputConfig::new().label("E-mail Address").name("email"));
        assert_eq!(input.attribute("name").as_deref(), Some("email"));
        assert_eq!(input.attribute("type").as_deref(), Some("text"));
    }

    #[test]
    fn test_select_and_textarea_have_no_type() {
        let ui = Ui::new();
        let body = ui.body();
        let select = body.create_input(InputConfig::new().name("size").input_type("select"));
        let notes = body.create_input(InputConfig::new().name("notes").input_type("textarea"));
        assert_eq!(select.tag_name(), "select");
        assert_eq!(notes.tag_name(), "textarea");
        assert!(select.attribute("type").is_none());
        assert!(notes.attribute("type").is_none());
    }

    #[test]
    fn test_other_type_passes_through() {
        let ui = Ui::new();
        let date = ui
            .body()
            .create_input(InputConfig::new().label("Start Date").input_type("date"));
        assert_eq!(date.attribute("type").as_deref(), Some("date"));
        assert_eq!(date.attribute("name").as_deref(), Some("start-date"));
    }

    #[test]
    fn test_unlabeled_unnamed_control() {
        let ui = Ui::new();
        let input = ui.body().create_input(InputConfig::new());
        assert!(input.attribute("name").is_none());
        assert!(input.label().is_none());
        assert_eq!(input.parent().map(|c| c.children().len()), Some(1));
    }

    #[test]
    fn test_blank_label_gives_empty_name() {
        let ui = Ui::new();
        let input = ui.body().create_input(InputConfig::new().label("   "));
        assert_eq!(input.attribute("name").as_deref(), Some(""));
    }
}
