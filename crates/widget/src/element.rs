use crate::config::{CLASS_ATTR, DELAY_ATTR, DelayMs, parse_delay};
use crate::lifecycle::{CustomElement, WidgetCtx};
use crate::relay::EventRelay;
use crate::session::{SessionMachine, SessionState};
use bus::{DomEvent, ListenerId, NativeEventKind, OutwardEvent};
use core_types::{TimerId, WidgetId};
use input_core::{TextControl, UserAction};

/// Text input that reports typing sessions and mirrors its inner control's events.
///
/// To outside observers it behaves like the native control itself, plus two
/// derived events: `session-started` and `session-ended`.
#[derive(Debug)]
pub struct SessionInput {
    id: WidgetId,
    control: TextControl,
    session: SessionMachine,
    relay: EventRelay,
    /// Primary `input` listener feeding the session machine; `Some` while connected.
    change_listener: Option<ListenerId>,
}

impl SessionInput {
    pub fn new(id: WidgetId) -> Self {
        Self {
            id,
            control: TextControl::new(),
            session: SessionMachine::new(id),
            relay: EventRelay::new(),
            change_listener: None,
        }
    }

    pub fn value(&self) -> &str {
        self.control.value()
    }

    /// Replace the text without starting or ending a session.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.control.set_value(value);
    }

    pub fn delay(&self) -> DelayMs {
        self.session.delay()
    }

    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    pub fn control(&self) -> &TextControl {
        &self.control
    }

    pub fn is_connected(&self) -> bool {
        self.change_listener.is_some()
    }

    /// Apply a user interaction to the inner control and deliver the native
    /// events it produced.
    pub fn interact(&mut self, action: UserAction, ctx: &mut WidgetCtx<'_>) {
        for event in self.control.apply(action) {
            self.dispatch_native(&event, ctx);
        }
    }

    /// Deliver one native event to the listeners installed on the inner control.
    pub fn dispatch_native(&mut self, event: &DomEvent, ctx: &mut WidgetCtx<'_>) {
        let listeners: Vec<ListenerId> = self
            .control
            .listeners()
            .listeners_for(event.kind)
            .collect();
        for id in listeners {
            if self.change_listener == Some(id) {
                self.on_raw_change(ctx);
            } else if let Some(route) = self.relay.route(id) {
                let relayed = self.relay.forward(route, event);
                ctx.emit(self.id, OutwardEvent::Native(relayed));
            }
        }
    }

    fn on_raw_change(&mut self, ctx: &mut WidgetCtx<'_>) {
        let emitted = self
            .session
            .on_raw_change(self.control.value(), &mut *ctx.scheduler);
        for event in emitted {
            ctx.emit(self.id, OutwardEvent::Session(event));
        }
    }
}

impl CustomElement for SessionInput {
    const OBSERVED_ATTRIBUTES: &'static [&'static str] = &[DELAY_ATTR, CLASS_ATTR];

    fn create(id: WidgetId) -> Self {
        Self::new(id)
    }

    fn connected(&mut self, _ctx: &mut WidgetCtx<'_>) {
        if self.is_connected() {
            log::warn!(target: "widget", "{} connected twice", self.id);
            return;
        }
        // Installed before the relay: session signals precede the relayed `input`.
        let listeners = self.control.listeners_mut();
        self.change_listener = Some(listeners.add_listener(NativeEventKind::Input));
        self.relay.attach(listeners);
        log::debug!(target: "widget", "{} connected", self.id);
    }

    fn disconnected(&mut self, ctx: &mut WidgetCtx<'_>) {
        let listeners = self.control.listeners_mut();
        if let Some(id) = self.change_listener.take() {
            listeners.remove_listener(id);
        }
        self.relay.detach(listeners);
        self.session.reset(&mut *ctx.scheduler);
        log::debug!(target: "widget", "{} disconnected", self.id);
    }

    fn attribute_changed(
        &mut self,
        name: &str,
        _old: Option<&str>,
        new: Option<&str>,
        _ctx: &mut WidgetCtx<'_>,
    ) {
        match name {
            DELAY_ATTR => self.session.configure(parse_delay(new)),
            CLASS_ATTR => match new {
                Some(classes) => self.control.set_class_list(classes),
                None => self.control.clear_class_list(),
            },
            other => log::trace!(target: "widget", "{}: ignoring attribute {other}", self.id),
        }
    }

    fn timer_fired(&mut self, timer: TimerId, ctx: &mut WidgetCtx<'_>) {
        if let Some(event) = self.session.on_timer(timer, self.control.value()) {
            ctx.emit(self.id, OutwardEvent::Session(event));
        }
    }
}
