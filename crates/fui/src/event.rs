//! Events delivered to bound handlers

use std::cell::Cell;
use std::fmt;

use fui_dom::NodeId;

use crate::element::Element;
use crate::ui::Ui;
use crate::value::FormInputs;

/// An event travelling from its target up through its ancestors
pub struct Event {
    ui: Ui,
    name: String,
    target: NodeId,
    current_target: Cell<NodeId>,
    propagation_stopped: Cell<bool>,
}

impl Event {
    pub(crate) fn new(ui: Ui, name: &str, target: NodeId) -> Self {
        Self {
            ui,
            name: name.to_string(),
            target,
            current_target: Cell::new(target),
            propagation_stopped: Cell::new(false),
        }
    }

    /// Event name (`click`, `submit`, ...)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The document the event fired in
    pub fn ui(&self) -> &Ui {
        &self.ui
    }

    /// Element the event was dispatched at
    pub fn target(&self) -> Element {
        self.ui.element(self.target)
    }

    pub fn target_id(&self) -> NodeId {
        self.target
    }

    /// Element whose handler is currently running
    pub fn current_target(&self) -> Element {
        self.ui.element(self.current_target.get())
    }

    pub(crate) fn set_current_target(&self, node: NodeId) {
        self.current_target.set(node);
    }

    /// Stop bubbling after the current handler
    pub fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }

    /// Values of the form this event targets (for `submit` events)
    pub fn inputs(&self) -> FormInputs {
        self.target().inputs()
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("name", &self.name)
            .field("target", &self.target)
            .field("current_target", &self.current_target.get())
            .field("propagation_stopped", &self.propagation_stopped.get())
            .finish()
    }
}
