//! Control and form values
//!
//! Multi-selects read as the list of selected option values and date
//! inputs as a local-midnight timestamp. Everything else reads as its raw
//! string value.

use std::collections::BTreeMap;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use fui_dom::ControlKind;
use serde::Serialize;

use crate::element::Element;
use crate::error::UiResult;

/// Value of a single control
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ControlValue {
    Text(String),
    /// Selected option values, in document order
    List(Vec<String>),
    /// Local midnight of the stored calendar date; `None` when the value
    /// is not a bare `YYYY-MM-DD` date
    Date(Option<DateTime<Local>>),
}

impl ControlValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(values) => Some(values),
            _ => None,
        }
    }

    /// Parsed date. `None` both for non-date values and invalid dates.
    pub fn as_date(&self) -> Option<DateTime<Local>> {
        match self {
            Self::Date(date) => *date,
            _ => None,
        }
    }
}

/// Named control values of a form
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormInputs {
    values: BTreeMap<String, ControlValue>,
}

impl FormInputs {
    pub fn get(&self, name: &str) -> Option<&ControlValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ControlValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render as a JSON object
    pub fn to_json(&self) -> UiResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Interpret a stored date string as local midnight
pub(crate) fn parse_date(value: &str) -> Option<DateTime<Local>> {
    let stamp = format!("{value} 00:00:00");
    let naive = match NaiveDateTime::parse_from_str(&stamp, "%Y-%m-%d %H:%M:%S") {
        Ok(naive) => naive,
        Err(err) => {
            tracing::debug!("Invalid date value {:?}: {}", value, err);
            return None;
        }
    };
    Local.from_local_datetime(&naive).earliest()
}

impl Element {
    /// Current value with type-aware coercion
    pub fn value(&self) -> ControlValue {
        let kind = self.ui().tree().control_kind(self.id());
        match kind {
            Some(ControlKind::MultiSelect) => ControlValue::List(self.selected_values()),
            Some(ControlKind::Date) => {
                let raw = self.ui().tree().control_value(self.id());
                ControlValue::Date(parse_date(&raw))
            }
            _ => ControlValue::Text(self.ui().tree().control_value(self.id())),
        }
    }

    /// Values of every named control below this element, keyed by name.
    /// Unnamed controls are skipped; a later control overwrites an earlier
    /// one with the same name.
    pub fn inputs(&self) -> FormInputs {
        let controls: Vec<(String, Element)> = {
            let tree = self.ui().tree();
            tree.form_controls(self.id())
                .into_iter()
                .map(|id| (tree.control_name(id).to_string(), self.ui().element(id)))
                .filter(|(name, _)| !name.is_empty())
                .collect()
        };

        let mut inputs = FormInputs::default();
        for (name, control) in controls {
            inputs.values.insert(name, control.value());
        }
        tracing::trace!("Collected {} form value(s)", inputs.len());
        inputs
    }

    /// Selected option values. A single-select yields its current value.
    pub fn selected_values(&self) -> Vec<String> {
        let tree = self.ui().tree();
        match tree.control_kind(self.id()) {
            Some(ControlKind::SingleSelect) => vec![tree.select_value(self.id())],
            _ => tree
                .selected_options(self.id())
                .into_iter()
                .map(|option| tree.option_value(option))
                .collect(),
        }
    }

    /// Select the option with the given value
    pub fn set_selected_option(&self, value: &str) -> Self {
        self.set_selected_options([value])
    }

    /// Select every option whose value is listed. Other options keep their
    /// state, except where a single-select deselects natively.
    pub fn set_selected_options<I, S>(&self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let wanted: Vec<String> = values.into_iter().map(|v| v.as_ref().to_string()).collect();
        let mut tree = self.ui().tree_mut();
        for option in tree.options(self.id()) {
            if wanted.contains(&tree.option_value(option)) {
                tree.set_option_selected(option, true);
            }
        }
        drop(tree);
        self.clone()
    }
}
