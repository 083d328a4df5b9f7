use crate::clock::Clock;
use crate::queue::TimerQueue;
use crate::{FiredTimer, Scheduler};
use core_types::{Millis, TimerId, WidgetId};

/// Drives a [`TimerQueue`] against a [`Clock`].
///
/// Callbacks run one at a time on the calling thread and receive the loop
/// itself, so they can arm or clear timers while the loop is running.
#[derive(Debug)]
pub struct EventLoop<C> {
    clock: C,
    timers: TimerQueue,
}

impl<C: Clock> EventLoop<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            timers: TimerQueue::new(),
        }
    }

    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.peek_deadline()
    }

    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    pub fn cancel_owned_by(&mut self, owner: WidgetId) -> usize {
        self.timers.cancel_owned_by(owner)
    }

    /// Fire every timer due at or before `until`, then move the clock to `until`.
    ///
    /// Timers armed by a callback fire in the same call if their deadline is
    /// still inside the window. Returns the number of timers fired.
    pub fn run_until<F>(&mut self, until: Millis, mut on_fire: F) -> usize
    where
        F: FnMut(FiredTimer, &mut Self),
    {
        let mut fired = 0;
        while let Some(deadline) = self.timers.peek_deadline()
            && deadline <= until
        {
            self.clock.wait_until(deadline);
            let Some(timer) = self.timers.pop_due(self.clock.now()) else {
                break;
            };
            log::trace!(
                target: "runtime_timer",
                "{} fired at {} for {}",
                timer.id,
                timer.deadline,
                timer.owner
            );
            on_fire(timer, self);
            fired += 1;
        }
        self.clock.wait_until(until);
        fired
    }

    pub fn advance<F>(&mut self, ms: Millis, on_fire: F) -> usize
    where
        F: FnMut(FiredTimer, &mut Self),
    {
        let until = self.clock.now().saturating_add(ms);
        self.run_until(until, on_fire)
    }
}

impl<C: Clock> Scheduler for EventLoop<C> {
    fn now(&self) -> Millis {
        self.clock.now()
    }

    fn set_timeout(&mut self, owner: WidgetId, delay: Millis) -> TimerId {
        let deadline = self.clock.now().saturating_add(delay);
        let id = self.timers.push(owner, deadline);
        log::trace!(target: "runtime_timer", "{id} armed for {owner}, due at {deadline}");
        id
    }

    fn clear_timeout(&mut self, id: TimerId) -> bool {
        let cleared = self.timers.cancel(id);
        if cleared {
            log::trace!(target: "runtime_timer", "{id} cleared");
        }
        cleared
    }
}
