//! Document handle
//!
//! `Ui` owns the document tree, the handler slots and the timer queue. It is
//! single-threaded shared state: clones are cheap handles to the same
//! document. Handlers and timer tasks always run with no borrow held, so they
//! are free to mutate the document.

use std::cell::{Ref, RefCell, RefMut};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use fui_dom::{Document, DomTree, EventLoop, HandlerSlots, NodeId, SelectorList, TimerId};

use crate::collection::Elements;
use crate::config::UiConfig;
use crate::element::Element;
use crate::error::{UiError, UiResult};
use crate::event::Event;
use crate::popup::{Popup, PopupManager, PopupRecord};
use crate::vibrate::Animation;

/// Event handler bound to a node
pub(crate) type Handler = Rc<dyn Fn(&Event)>;

/// Deferred task run by the timer queue
pub(crate) type Task = Box<dyn FnOnce(&Ui)>;

pub(crate) struct UiInner {
    pub(crate) doc: RefCell<Document>,
    pub(crate) handlers: RefCell<HandlerSlots<Handler>>,
    pub(crate) timers: RefCell<EventLoop<Task>>,
    /// In-flight feedback animations, at most one per element
    pub(crate) animations: RefCell<HashMap<NodeId, Animation>>,
    /// Display values remembered by `hide`
    pub(crate) saved_display: RefCell<HashMap<NodeId, String>>,
    /// Popups in creation order
    pub(crate) popups: RefCell<Vec<PopupRecord>>,
    pub(crate) config: UiConfig,
}

/// Handle to a document and its event loop
#[derive(Clone)]
pub struct Ui {
    pub(crate) inner: Rc<UiInner>,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Ui {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Ui");
        if let Ok(doc) = self.inner.doc.try_borrow() {
            s.field("nodes", &doc.tree().len());
        }
        if let Ok(timers) = self.inner.timers.try_borrow() {
            s.field("now", &timers.current_time())
                .field("pending_timers", &timers.pending());
        }
        s.finish_non_exhaustive()
    }
}

impl Ui {
    /// Create an empty document with the default configuration
    pub fn new() -> Self {
        Self::with_config(UiConfig::default())
    }

    /// Create an empty document
    pub fn with_config(config: UiConfig) -> Self {
        Self {
            inner: Rc::new(UiInner {
                doc: RefCell::new(Document::new()),
                handlers: RefCell::new(HandlerSlots::new()),
                timers: RefCell::new(EventLoop::new()),
                animations: RefCell::new(HashMap::new()),
                saved_display: RefCell::new(HashMap::new()),
                popups: RefCell::new(Vec::new()),
                config,
            }),
        }
    }

    pub fn config(&self) -> &UiConfig {
        &self.inner.config
    }

    pub(crate) fn tree(&self) -> Ref<'_, DomTree> {
        Ref::map(self.inner.doc.borrow(), |doc| doc.tree())
    }

    pub(crate) fn tree_mut(&self) -> RefMut<'_, DomTree> {
        RefMut::map(self.inner.doc.borrow_mut(), |doc| doc.tree_mut())
    }

    /// Wrap a node of this document
    pub fn element(&self, id: NodeId) -> Element {
        Element::new(self.clone(), id)
    }

    /// `<body>`
    pub fn body(&self) -> Element {
        let body = self.inner.doc.borrow().body();
        self.element(body)
    }

    /// `<html>`
    pub fn document_element(&self) -> Element {
        let html = self.inner.doc.borrow().document_element();
        self.element(html)
    }

    /// Create a detached element
    pub fn create_element(&self, tag: &str) -> Element {
        let id = self.tree_mut().create_element(tag);
        self.element(id)
    }

    /// Element with the given id attribute, if attached
    pub fn get_element_by_id(&self, id: &str) -> Option<Element> {
        let found = self.inner.doc.borrow().get_element_by_id(id);
        found.map(|node| self.element(node))
    }

    /// First element in the document matching `selector`
    pub fn find(&self, selector: &str) -> UiResult<Element> {
        self.query(NodeId::ROOT, selector)
            .map(|id| self.element(id))
            .ok_or_else(|| UiError::NotFound {
                selector: selector.to_string(),
            })
    }

    /// All elements in the document matching `selector`
    pub fn find_many(&self, selector: &str) -> Elements {
        self.query_all(NodeId::ROOT, selector)
    }

    pub(crate) fn query(&self, scope: NodeId, selector: &str) -> Option<NodeId> {
        let selectors = parse_selector(selector)?;
        self.tree().query_selector(scope, &selectors)
    }

    pub(crate) fn query_all(&self, scope: NodeId, selector: &str) -> Elements {
        let Some(selectors) = parse_selector(selector) else {
            return Elements::default();
        };
        let ids = self.tree().query_selector_all(scope, &selectors);
        Elements::new(ids.into_iter().map(|id| self.element(id)).collect())
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    pub(crate) fn bind(&self, node: NodeId, event: &str, handler: Handler) {
        if self.inner.handlers.borrow_mut().set(node, event, handler).is_some() {
            tracing::trace!("Replaced {} handler on {:?}", event, node);
        }
    }

    pub(crate) fn unbind(&self, node: NodeId, event: &str) {
        self.inner.handlers.borrow_mut().remove(node, event);
    }

    /// Dispatch an event at `target`, bubbling through each ancestor's
    /// handler. Returns how many handlers ran.
    pub fn dispatch(&self, target: &Element, event: &str) -> usize {
        let path = self.tree().propagation_path(target.id());
        let event = Event::new(self.clone(), event, target.id());
        let mut invoked = 0;
        for node in path {
            let handler = self.inner.handlers.borrow().get(node, event.name());
            let Some(handler) = handler else { continue };
            event.set_current_target(node);
            handler(&event);
            invoked += 1;
            if event.is_propagation_stopped() {
                break;
            }
        }
        tracing::trace!("Dispatched {} at {:?} to {} handler(s)", event.name(), target.id(), invoked);
        invoked
    }

    /// Simulate a click on `target`
    pub fn click(&self, target: &Element) -> usize {
        self.dispatch(target, "click")
    }

    /// Simulate submitting `form`
    pub fn submit(&self, form: &Element) -> usize {
        self.dispatch(form, "submit")
    }

    // ------------------------------------------------------------------
    // Timers
    // ------------------------------------------------------------------

    /// Current virtual time (ms)
    pub fn now(&self) -> u64 {
        self.inner.timers.borrow().current_time()
    }

    /// Run `task` once, `delay_ms` from now
    pub fn set_timeout(&self, delay_ms: u64, task: impl FnOnce(&Ui) + 'static) -> TimerId {
        self.inner
            .timers
            .borrow_mut()
            .set_timeout(delay_ms, Box::new(task))
    }

    /// Cancel a pending timer. Returns false if it already ran.
    pub fn clear_timeout(&self, id: TimerId) -> bool {
        self.inner.timers.borrow_mut().clear_timer(id).is_some()
    }

    /// Number of pending timers
    pub fn pending_timers(&self) -> usize {
        self.inner.timers.borrow().pending()
    }

    /// Move the clock forward by `ms`, running every task that falls due,
    /// including tasks scheduled by those tasks.
    pub fn advance(&self, ms: u64) {
        let until = self.now().saturating_add(ms);
        loop {
            let next = self.inner.timers.borrow_mut().pop_due(until);
            match next {
                Some((_, task)) => task(self),
                None => break,
            }
        }
        self.inner.timers.borrow_mut().advance_clock_to(until);
    }

    /// Run timers until none are pending
    pub fn run_until_idle(&self) {
        loop {
            let next = {
                let mut timers = self.inner.timers.borrow_mut();
                match timers.next_due() {
                    Some(due) => timers.pop_due(due),
                    None => None,
                }
            };
            match next {
                Some((_, task)) => task(self),
                None => break,
            }
        }
    }

    // ------------------------------------------------------------------
    // Popups
    // ------------------------------------------------------------------

    /// Popup manager using the configured container, or `<body>` when the
    /// document has none
    pub fn popups(&self) -> PopupManager {
        PopupManager::for_document(self)
    }

    /// Open a popup in the default container
    pub fn create_fullscreen_popup(&self) -> Popup {
        self.popups().create_popup()
    }
}

fn parse_selector(selector: &str) -> Option<SelectorList> {
    match SelectorList::parse(selector) {
        Ok(selectors) => Some(selectors),
        Err(err) => {
            tracing::warn!("Ignoring invalid selector {:?}: {}", selector, err);
            None
        }
    }
}
