//! fui - fluent element building over a document tree
//!
//! Chainable construction and mutation of elements, labeled form controls,
//! type-aware value extraction and modal popups with a dismissal policy.
//!
//! # Example
//! ```rust,ignore
//! use fui::{InputConfig, Ui};
//!
//! let ui = Ui::new();
//! let form = ui.body().create("form");
//! let phone = form.create_input(InputConfig::new().label("Phone Number").input_type("phone"));
//! phone.set("value", "555-0100");
//!
//! let inputs = form.inputs();
//! assert_eq!(inputs.get("phone-number").and_then(|v| v.as_text()), Some("555-0100"));
//! ```

mod collection;
mod config;
mod control;
mod element;
mod error;
mod event;
mod popup;
mod props;
mod ui;
mod value;
mod vibrate;

pub use collection::Elements;
pub use config::{UiConfig, VibrateConfig};
pub use control::{InputConfig, InputType};
pub use element::Element;
pub use error::{UiError, UiResult};
pub use event::Event;
pub use popup::{Popup, PopupManager};
pub use props::{Create, Props};
pub use ui::Ui;
pub use value::{ControlValue, FormInputs};

pub use fui_dom::{NodeId, PropValue, TimerId};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
