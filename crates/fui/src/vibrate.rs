//! Horizontal nudge feedback
//!
//! Alternates the `right` offset between `+offset` and `-offset` every
//! pulse interval, then restores the value captured when the animation
//! started. Each element runs at most one animation: starting another one
//! cancels the first and restores its captured value before capturing again.

use fui_dom::{NodeId, TimerId};

use crate::element::Element;
use crate::ui::Ui;

/// In-flight animation state for one element
#[derive(Debug)]
pub(crate) struct Animation {
    /// Timer of the next pulse
    timer: Option<TimerId>,
    /// `right` value to put back at the end
    restore: String,
}

impl Element {
    /// Shake the element sideways for about `duration_ms`
    pub fn vibrate(&self, duration_ms: u64) -> Self {
        self.stop_vibrating();

        let ui = self.ui();
        let interval = ui.config().vibrate.pulse_interval_ms;
        let end = ui
            .now()
            .saturating_add(duration_ms)
            .saturating_sub(interval);
        let animation = Animation {
            timer: None,
            restore: self.style("right"),
        };
        ui.inner.animations.borrow_mut().insert(self.id(), animation);
        tracing::debug!("Vibrating {:?} for {}ms", self.id(), duration_ms);

        pulse(ui, self.id(), false, end);
        self.clone()
    }

    /// Cancel the running animation, if any, and restore the offset it captured
    pub fn stop_vibrating(&self) -> Self {
        let animation = self.ui().inner.animations.borrow_mut().remove(&self.id());
        if let Some(animation) = animation {
            if let Some(timer) = animation.timer {
                self.ui().clear_timeout(timer);
            }
            self.set_style("right", &animation.restore);
            tracing::trace!("Stopped vibrating {:?}", self.id());
        }
        self.clone()
    }

    pub fn is_vibrating(&self) -> bool {
        self.ui().inner.animations.borrow().contains_key(&self.id())
    }
}

fn pulse(ui: &Ui, node: NodeId, moved_right: bool, end: u64) {
    let settings = ui.config().vibrate;
    let offset = if moved_right {
        format!("-{}px", settings.offset_px)
    } else {
        format!("{}px", settings.offset_px)
    };
    ui.tree_mut().set_style_property(node, "right", &offset);

    if ui.now() >= end {
        let finished = ui.inner.animations.borrow_mut().remove(&node);
        if let Some(animation) = finished {
            ui.tree_mut().set_style_property(node, "right", &animation.restore);
        }
        return;
    }

    let timer = ui.set_timeout(settings.pulse_interval_ms, move |ui| {
        pulse(ui, node, !moved_right, end)
    });
    if let Some(animation) = ui.inner.animations.borrow_mut().get_mut(&node) {
        animation.timer = Some(timer);
    }
}
