//! Property bags for `set` and `create`

use fui_dom::PropValue;

/// Ordered key/value assignments applied by `Element::set_all`.
///
/// `text`, `html` and `class` are special keys; see [`crate::Element::set`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    entries: Vec<(String, PropValue)>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an assignment
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// Literal text content
    pub fn text(self, text: impl Into<String>) -> Self {
        self.with("text", PropValue::Str(text.into()))
    }

    /// Raw markup content
    pub fn html(self, markup: impl Into<String>) -> Self {
        self.with("html", PropValue::Str(markup.into()))
    }

    /// Appended onto the class attribute
    pub fn class(self, class: impl Into<String>) -> Self {
        self.with("class", PropValue::Str(class.into()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl IntoIterator for Props {
    type Item = (String, PropValue);
    type IntoIter = std::vec::IntoIter<(String, PropValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Arguments of `Element::create`: an optional tag and optional properties.
///
/// Converts from `()` (default tag), a tag, a [`Props`] (default tag), or a
/// `(tag, Props)` pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Create {
    pub tag: Option<String>,
    pub props: Option<Props>,
}

impl From<()> for Create {
    fn from(_: ()) -> Self {
        Self::default()
    }
}

impl From<&str> for Create {
    fn from(tag: &str) -> Self {
        Self {
            tag: Some(tag.to_string()),
            props: None,
        }
    }
}

impl From<String> for Create {
    fn from(tag: String) -> Self {
        Self {
            tag: Some(tag),
            props: None,
        }
    }
}

impl From<Props> for Create {
    fn from(props: Props) -> Self {
        Self {
            tag: None,
            props: Some(props),
        }
    }
}

impl From<(&str, Props)> for Create {
    fn from((tag, props): (&str, Props)) -> Self {
        Self {
            tag: Some(tag.to_string()),
            props: Some(props),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_order() {
        let props = Props::new().text("hi").with("type", "tel").class("a b");
        let keys: Vec<&str> = props.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["text", "type", "class"]);
    }

    #[test]
    fn test_from_iter() {
        let props: Props = [("name", "email"), ("placeholder", "you@example.com")]
            .into_iter()
            .collect();
        assert_eq!(props.len(), 2);
    }

    #[test]
    fn test_create_overloads() {
        assert_eq!(Create::from(()), Create::default());
        assert_eq!(Create::from("span").tag.as_deref(), Some("span"));

        let from_props = Create::from(Props::new().text("x"));
        assert!(from_props.tag.is_none());
        assert!(from_props.props.is_some());

        let both = Create::from(("a", Props::new()));
        assert_eq!(both.tag.as_deref(), Some("a"));
    }
}
