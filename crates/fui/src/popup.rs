//! Modal popups
//!
//! A popup is a full-screen backing with a content element inside it. A
//! click that lands on the backing itself either removes the popup or, when
//! the popup is not dismissible, shakes the content instead.

use std::cell::Cell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use fui_dom::NodeId;

use crate::element::Element;
use crate::event::Event;
use crate::ui::Ui;

#[derive(Debug)]
pub(crate) struct PopupState {
    dismissible: Cell<bool>,
    buttons: Cell<Option<NodeId>>,
}

/// Entry of the document's popup stack
#[derive(Debug, Clone)]
pub(crate) struct PopupRecord {
    backing: NodeId,
    content: NodeId,
    state: Rc<PopupState>,
}

/// Creates popups inside one container element
#[derive(Debug, Clone)]
pub struct PopupManager {
    container: Element,
    prepend: bool,
}

impl PopupManager {
    /// Manager appending popups to `container`
    pub fn new(container: Element) -> Self {
        Self {
            container,
            prepend: false,
        }
    }

    /// Manager for the element whose id is the configured popup container
    /// id. Without one, popups are prepended to `<body>`.
    pub fn for_document(ui: &Ui) -> Self {
        match ui.get_element_by_id(&ui.config().popup_container_id) {
            Some(container) => Self::new(container),
            None => {
                tracing::debug!(
                    "No #{} container, popups go to <body>",
                    ui.config().popup_container_id
                );
                Self {
                    container: ui.body(),
                    prepend: true,
                }
            }
        }
    }

    pub fn container(&self) -> &Element {
        &self.container
    }

    /// Build a popup, attach it to the container and return it.
    /// New popups are dismissible.
    pub fn create_popup(&self) -> Popup {
        let ui = self.container.ui();
        let config = ui.config();

        let backing = ui.create_element("div").class(&config.popup_backing_class);
        let content = backing.create("div");
        for class in &config.popup_classes {
            content.class(class);
        }

        let attached = if self.prepend {
            ui.tree_mut().prepend_child(self.container.id(), backing.id())
        } else {
            ui.tree_mut().append_child(self.container.id(), backing.id())
        };
        if let Err(err) = attached {
            tracing::warn!("Failed to attach popup to {:?}: {}", self.container, err);
        }

        let record = PopupRecord {
            backing: backing.id(),
            content: content.id(),
            state: Rc::new(PopupState {
                dismissible: Cell::new(true),
                buttons: Cell::new(None),
            }),
        };
        let mut stack = ui.inner.popups.borrow_mut();
        stack.retain(|open| ui.tree().parent(open.backing).is_some());
        stack.push(record.clone());
        drop(stack);

        tracing::debug!("Opened popup {:?}", backing.id());
        Popup::from_record(ui, record).set_dismissible(true)
    }

    /// Popups of this container still attached, oldest first
    pub fn open_popups(&self) -> Vec<Popup> {
        let ui = self.container.ui();
        let records = ui.inner.popups.borrow().clone();
        let tree_parent = |id| ui.tree().parent(id);
        records
            .into_iter()
            .filter(|record| tree_parent(record.backing) == Some(self.container.id()))
            .map(|record| Popup::from_record(ui, record))
            .collect()
    }
}

/// Handle to one popup. Derefs to its content element.
#[derive(Clone)]
pub struct Popup {
    content: Element,
    backing: Element,
    state: Rc<PopupState>,
}

impl PartialEq for Popup {
    fn eq(&self, other: &Self) -> bool {
        self.backing == other.backing
    }
}

impl fmt::Debug for Popup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Popup")
            .field("backing", &self.backing.id())
            .field("content", &self.content.id())
            .field("dismissible", &self.state.dismissible.get())
            .finish()
    }
}

impl Deref for Popup {
    type Target = Element;

    fn deref(&self) -> &Element {
        &self.content
    }
}

impl Popup {
    fn from_record(ui: &Ui, record: PopupRecord) -> Self {
        Self {
            content: ui.element(record.content),
            backing: ui.element(record.backing),
            state: record.state,
        }
    }

    /// The popup body
    pub fn content(&self) -> &Element {
        &self.content
    }

    /// The full-screen scrim behind the content
    pub fn backing(&self) -> &Element {
        &self.backing
    }

    pub fn is_dismissible(&self) -> bool {
        self.state.dismissible.get()
    }

    /// Whether the popup is still attached
    pub fn is_open(&self) -> bool {
        self.backing.is_attached()
    }

    /// Set whether a click on the backing removes the popup. Reinstalls the
    /// backing click handler with the new policy.
    pub fn set_dismissible(&self, dismissible: bool) -> Self {
        self.state.dismissible.set(dismissible);

        let backing = self.backing.id();
        let content = self.content.id();
        let duration = self.content.ui().config().vibrate.dismiss_duration_ms;
        self.backing.on("click", move |event: &Event| {
            if event.target_id() != backing {
                return;
            }
            let ui = event.ui();
            if dismissible {
                tracing::debug!("Dismissed popup {:?}", backing);
                ui.element(backing).remove();
            } else {
                ui.element(content).vibrate(duration);
            }
        });
        self.clone()
    }

    /// Set the title text, creating the title region on first use
    pub fn set_title(&self, title: &str) -> Self {
        let class = &self.content.ui().config().popup_title_class;
        let region = match self.content.find(&format!(".{class}")) {
            Ok(region) => region,
            Err(_) => self.content.create_at_beginning("div").class(class),
        };
        region.text(title);
        self.clone()
    }

    /// Append a button to the button row and return it. The row is created
    /// as the last child of the content on first use.
    pub fn create_button(&self) -> Element {
        let ui = self.content.ui();
        let row = match self.state.buttons.get() {
            Some(id) => ui.element(id),
            None => {
                let row = self.content.create("div").class(&ui.config().popup_buttons_class);
                self.state.buttons.set(Some(row.id()));
                row
            }
        };
        row.create("button")
    }

    /// Detach the popup regardless of its dismissal policy
    pub fn remove(&self) {
        if !self.backing.is_attached() {
            tracing::warn!("Popup {:?} is already removed", self.backing.id());
            return;
        }
        self.backing.remove();
        tracing::debug!("Removed popup {:?}", self.backing.id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_prepends_to_body() {
        let ui = Ui::new();
        let first = ui.body().create("main");
        let popup = ui.create_fullscreen_popup();

        let body_children = ui.body().children();
        assert_eq!(body_children.first(), Some(popup.backing()));
        assert_eq!(body_children.get(1), Some(&first));
        assert!(popup.backing().has_class("fullscreen-popup-backing"));
        assert!(popup.has_class("fullscreen-popup"));
        assert!(popup.has_class("popup"));
        assert_eq!(popup.parent().as_ref(), Some(popup.backing()));
    }

    #[test]
    fn test_container_by_id() {
        let ui = Ui::new();
        let container = ui.body().create("div").attr("id", "popups");
        ui.body().create("main");

        let popup = ui.create_fullscreen_popup();
        assert_eq!(popup.backing().parent(), Some(container.clone()));
        assert_eq!(ui.popups().open_popups(), vec![popup]);
    }

    #[test]
    fn test_injected_container() {
        let ui = Ui::new();
        let layer = ui.body().create("aside");
        let manager = PopupManager::new(layer.clone());
        let a = manager.create_popup();
        let b = manager.create_popup();
        assert_eq!(layer.children().len(), 2);
        assert_eq!(manager.open_popups(), vec![a.clone(), b]);

        a.remove();
        assert!(!a.is_open());
        assert_eq!(manager.open_popups().len(), 1);
    }

    #[test]
    fn test_dismissible_backing_click_removes() {
        let ui = Ui::new();
        let popup = ui.create_fullscreen_popup();
        assert!(popup.is_dismissible());

        ui.click(&popup);
        assert!(popup.is_open());

        ui.click(popup.backing());
        assert!(!popup.is_open());
    }

    #[test]
    fn test_non_dismissible_backing_click_vibrates() {
        let ui = Ui::new();
        let popup = ui.create_fullscreen_popup().set_dismissible(false);

        ui.click(popup.backing());
        assert!(popup.is_open());
        assert!(popup.is_vibrating());
        assert_eq!(popup.style("right"), "10px");

        ui.advance(400);
        assert!(!popup.is_vibrating());
        assert_eq!(popup.style("right"), "");
    }

    #[test]
    fn test_set_dismissible_back_to_true() {
        let ui = Ui::new();
        let popup = ui.create_fullscreen_popup().set_dismissible(false).set_dismissible(true);
        ui.click(popup.backing());
        assert!(!popup.is_open());
    }

    #[test]
    fn test_set_title_upserts() {
        let ui = Ui::new();
        let popup = ui.create_fullscreen_popup();
        popup.create("p").text("body");
        popup.set_title("First").set_title("Second");

        let titles = popup.find_many(".popup-title");
        assert_eq!(titles.len(), 1);
        assert_eq!(titles.first().map(|t| t.text_content()).as_deref(), Some("Second"));
        assert_eq!(popup.children().first(), titles.first());
    }

    #[test]
    fn test_buttons_share_one_row() {
        let ui = Ui::new();
        let popup = ui.create_fullscreen_popup();
        let ok = popup.create_button().text("OK");
        popup.create("p");
        let cancel = popup.create_button().text("Cancel");

        let rows = popup.find_many(".buttons");
        assert_eq!(rows.len(), 1);
        assert_eq!(ok.parent(), cancel.parent());
        assert_eq!(rows.first().map(|r| r.children().len()), Some(2));
    }

    #[test]
    fn test_remove_twice_is_harmless() {
        let ui = Ui::new();
        let popup = ui.create_fullscreen_popup().set_dismissible(false);
        popup.remove();
        popup.remove();
        assert!(!popup.is_open());
        assert!(ui.popups().open_popups().is_empty());
    }
}
