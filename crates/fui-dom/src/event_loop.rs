//! Event Loop
//!
//! Timer queue driven by a virtual millisecond clock. The loop only stores
//! tasks; whoever owns it pops due tasks and runs them, so a running task
//! can schedule further tasks on the same loop.

/// Handle to a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Timer<T> {
    id: TimerId,
    due: u64,
    task: T,
}

/// Virtual-clock timer queue
#[derive(Debug)]
pub struct EventLoop<T> {
    timers: Vec<Timer<T>>,
    next_timer_id: u64,
    /// Current timestamp (ms)
    current_time: u64,
}

impl<T> Default for EventLoop<T> {
    fn default() -> Self {
        Self {
            timers: Vec::new(),
            next_timer_id: 1,
            current_time: 0,
        }
    }
}

impl<T> EventLoop<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current time
    pub fn current_time(&self) -> u64 {
        self.current_time
    }

    /// Schedule a task `delay_ms` after the current time
    pub fn set_timeout(&mut self, delay_ms: u64, task: T) -> TimerId {
        let id = TimerId(self.next_timer_id);
        self.next_timer_id += 1;
        self.timers.push(Timer {
            id,
            due: self.current_time.saturating_add(delay_ms),
            task,
        });
        id
    }

    /// Cancel a timer, handing back its task if it was still pending
    pub fn clear_timer(&mut self, id: TimerId) -> Option<T> {
        let pos = self.timers.iter().position(|t| t.id == id)?;
        Some(self.timers.remove(pos).task)
    }

    /// Whether a timer is still pending
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    /// Number of pending timers
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Check if there's pending work
    pub fn has_pending_work(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Due time of the earliest pending timer
    pub fn next_due(&self) -> Option<u64> {
        self.timers.iter().map(|t| t.due).min()
    }

    /// Remove the earliest timer due at or before `until` and move the clock
    /// to its due time. Ties run in scheduling order.
    pub fn pop_due(&mut self, until: u64) -> Option<(TimerId, T)> {
        let pos = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.id))
            .map(|(pos, _)| pos)?;
        let timer = self.timers.remove(pos);
        self.current_time = self.current_time.max(timer.due);
        Some((timer.id, timer.task))
    }

    /// Move the clock forward without running anything
    pub fn advance_clock_to(&mut self, time: u64) {
        self.current_time = self.current_time.max(time);
    }
}
