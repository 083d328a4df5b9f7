//! Re-dispatch of native control events from the wrapper element.
//!
//! `attach` installs one listener per relayed kind plus a dedicated focus/blur
//! pair and records each id; `detach` drains that record, so nothing installed
//! here outlives it on the control.

use bus::{DomEvent, EventTarget, ListenerId, NativeEventKind, RELAYED_KINDS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelayRoute {
    /// Forward as-is (kind and payload preserved).
    Forward,
    Focus,
    Blur,
}

#[derive(Debug, Default)]
pub struct EventRelay {
    subscriptions: Vec<(ListenerId, RelayRoute)>,
}

impl EventRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the relay listeners. Returns `false` (and installs nothing) if
    /// already attached.
    pub fn attach(&mut self, target: &mut EventTarget) -> bool {
        if self.is_attached() {
            log::warn!(target: "widget.relay", "attach while attached; detach first");
            return false;
        }

        self.subscriptions.reserve(RELAYED_KINDS.len() + 2);
        for kind in RELAYED_KINDS {
            let id = target.add_listener(kind);
            self.subscriptions.push((id, RelayRoute::Forward));
        }
        // Only the non-bubbling focus/blur are observed; focusin/focusout
        // describe the same occurrence and would double the outward event.
        let focus = target.add_listener(NativeEventKind::Focus);
        self.subscriptions.push((focus, RelayRoute::Focus));
        let blur = target.add_listener(NativeEventKind::Blur);
        self.subscriptions.push((blur, RelayRoute::Blur));

        log::debug!(
            target: "widget.relay",
            "attached {} listeners",
            self.subscriptions.len()
        );
        true
    }

    /// Remove every listener `attach` installed. A no-op when detached.
    pub fn detach(&mut self, target: &mut EventTarget) -> usize {
        if !self.is_attached() {
            log::trace!(target: "widget.relay", "detach with nothing attached");
            return 0;
        }
        let removed = self
            .subscriptions
            .drain(..)
            .filter(|(id, _)| target.remove_listener(*id))
            .count();
        log::debug!(target: "widget.relay", "detached {removed} listeners");
        removed
    }

    pub fn is_attached(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    pub fn route(&self, id: ListenerId) -> Option<RelayRoute> {
        self.subscriptions
            .iter()
            .find(|(l, _)| *l == id)
            .map(|(_, route)| *route)
    }

    /// Build the outward copy of `event` for `route`.
    pub fn forward(&self, route: RelayRoute, event: &DomEvent) -> DomEvent {
        let kind = match route {
            RelayRoute::Forward => event.kind,
            RelayRoute::Focus => NativeEventKind::Focus,
            RelayRoute::Blur => NativeEventKind::Blur,
        };
        DomEvent {
            kind,
            ..event.relayed()
        }
    }
}
