//! Typing-session state machine.
//!
//! Every raw change opens a session if none is open, cancels the pending end
//! timer, and either re-arms it for the configured delay or, with a zero
//! delay, ends the session on the spot. Values are passed in at emission time,
//! so an end signal always reports the text as of the moment it fires.

use crate::config::DelayMs;
use bus::SessionEvent;
use core_types::{TimerId, WidgetId};
use runtime_timer::Scheduler;
use std::iter::Chain;
use std::option;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Idle,
    Active,
}

#[derive(Debug)]
pub struct SessionMachine {
    owner: WidgetId,
    delay: DelayMs,
    state: SessionState,
    /// At most one end timer is pending at any time.
    pending: Option<TimerId>,
}

/// Signals produced by one raw change: at most one start and at most one
/// immediate end, in that order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Emitted {
    pub started: Option<SessionEvent>,
    pub ended: Option<SessionEvent>,
}

impl IntoIterator for Emitted {
    type Item = SessionEvent;
    type IntoIter = Chain<option::IntoIter<SessionEvent>, option::IntoIter<SessionEvent>>;

    fn into_iter(self) -> Self::IntoIter {
        self.started.into_iter().chain(self.ended)
    }
}

impl SessionMachine {
    pub fn new(owner: WidgetId) -> Self {
        Self {
            owner,
            delay: DelayMs::ZERO,
            state: SessionState::Idle,
            pending: None,
        }
    }

    /// Delay used by the next raw change. An already armed timer keeps its deadline.
    pub fn configure(&mut self, delay: DelayMs) {
        if delay != self.delay {
            log::debug!(target: "widget.session", "{}: delay {} -> {}", self.owner, self.delay, delay);
        }
        self.delay = delay;
    }

    pub fn delay(&self) -> DelayMs {
        self.delay
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn pending_timer(&self) -> Option<TimerId> {
        self.pending
    }

    pub fn on_raw_change<S>(&mut self, value: &str, timers: &mut S) -> Emitted
    where
        S: Scheduler + ?Sized,
    {
        let mut emitted = Emitted::default();

        if self.state == SessionState::Idle {
            self.state = SessionState::Active;
            log::debug!(target: "widget.session", "{}: session started", self.owner);
            emitted.started = Some(SessionEvent::Started {
                value: value.to_string(),
            });
        }

        if let Some(prev) = self.pending.take() {
            timers.clear_timeout(prev);
        }

        if self.delay.is_zero() {
            self.state = SessionState::Idle;
            log::debug!(target: "widget.session", "{}: session ended (no delay)", self.owner);
            emitted.ended = Some(SessionEvent::Ended {
                value: value.to_string(),
            });
        } else {
            let id = timers.set_timeout(self.owner, self.delay.as_millis());
            log::trace!(target: "widget.session", "{}: end re-armed as {id}", self.owner);
            self.pending = Some(id);
        }

        emitted
    }

    /// Handle a fired timer. Anything but the pending end timer is ignored.
    pub fn on_timer(&mut self, id: TimerId, value: &str) -> Option<SessionEvent> {
        if self.pending != Some(id) {
            log::trace!(target: "widget.session", "{}: ignoring stale {id}", self.owner);
            return None;
        }
        self.pending = None;
        self.state = SessionState::Idle;
        log::debug!(target: "widget.session", "{}: session ended after {}", self.owner, self.delay);
        Some(SessionEvent::Ended {
            value: value.to_string(),
        })
    }

    /// Teardown: cancel the pending timer and go idle without an end signal.
    pub fn reset<S>(&mut self, timers: &mut S)
    where
        S: Scheduler + ?Sized,
    {
        if let Some(id) = self.pending.take() {
            timers.clear_timeout(id);
        }
        if self.state == SessionState::Active {
            log::debug!(target: "widget.session", "{}: session dropped on reset", self.owner);
        }
        self.state = SessionState::Idle;
    }
}
