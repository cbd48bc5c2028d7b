//! Inline style declarations
//!
//! The `style` map of an element. Unset properties read as the empty string,
//! assigning the empty string removes the declaration.

/// Ordered inline style map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<(String, String)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a property value, or "" when unset
    pub fn get(&self, property: &str) -> &str {
        self.declarations
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    /// Set a property; an empty value removes it
    pub fn set(&mut self, property: &str, value: &str) {
        if value.is_empty() {
            self.remove(property);
            return;
        }
        match self.declarations.iter_mut().find(|(name, _)| name == property) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self
                .declarations
                .push((property.to_string(), value.to_string())),
        }
    }

    /// Remove a property
    pub fn remove(&mut self, property: &str) -> bool {
        let before = self.declarations.len();
        self.declarations.retain(|(name, _)| name != property);
        self.declarations.len() != before
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Serialized `style` attribute text
    pub fn css_text(&self) -> String {
        self.declarations
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_reads_empty() {
        let style = InlineStyle::new();
        assert_eq!(style.get("display"), "");
    }

    #[test]
    fn test_set_and_clear() {
        let mut style = InlineStyle::new();
        style.set("display", "flex");
        style.set("right", "10px");
        assert_eq!(style.get("display"), "flex");
        assert_eq!(style.css_text(), "display: flex; right: 10px;");

        style.set("display", "");
        assert_eq!(style.get("display"), "");
        assert_eq!(style.len(), 1);
    }
}
