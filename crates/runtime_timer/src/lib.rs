//! Single-threaded cooperative timers.
//!
//! Deferred callbacks are the only asynchronous primitive a widget uses. Timers
//! are owned by a [`WidgetId`]; when one comes due, the [`EventLoop`] hands it
//! back to the host, which routes it to the owning widget. A cleared timer is
//! removed from the queue and can never fire.

use core_types::{Millis, TimerId, WidgetId};

mod clock;
mod event_loop;
mod queue;

pub use clock::{Clock, SystemClock, VirtualClock};
pub use event_loop::EventLoop;
pub use queue::TimerQueue;

/// The scheduling surface handed to widgets.
pub trait Scheduler {
    fn now(&self) -> Millis;

    /// Arm a one-shot timer due `delay` ms from now.
    fn set_timeout(&mut self, owner: WidgetId, delay: Millis) -> TimerId;

    /// Cancel a pending timer. Returns `false` if it already fired or was
    /// cancelled; calling this is always safe.
    fn clear_timeout(&mut self, id: TimerId) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FiredTimer {
    pub id: TimerId,
    pub owner: WidgetId,
    pub deadline: Millis,
}
