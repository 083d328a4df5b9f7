#![allow(dead_code)]

use bus::{DomEvent, NativeEventKind, OutwardEvent, RecordingSink};
use core_types::{Millis, WidgetId};
use input_core::UserAction;
use runtime_timer::{EventLoop, Scheduler, VirtualClock};
use widget::{CustomElement, SessionInput, WidgetCtx};

/// One mounted widget on a virtual clock, recording everything it emits.
pub struct Harness {
    pub timers: EventLoop<VirtualClock>,
    pub sink: RecordingSink,
    pub widget: SessionInput,
}

impl Harness {
    pub fn unmounted() -> Self {
        Self {
            timers: EventLoop::new(VirtualClock::new()),
            sink: RecordingSink::new(),
            widget: SessionInput::create(WidgetId(1)),
        }
    }

    pub fn mounted(delay: Option<&str>) -> Self {
        let mut h = Self::unmounted();
        if let Some(delay) = delay {
            h.set_attribute("delay", Some(delay));
        }
        h.connect();
        h
    }

    pub fn set_attribute(&mut self, name: &str, value: Option<&str>) {
        let mut ctx = WidgetCtx::new(&mut self.timers, &mut self.sink);
        self.widget.attribute_changed(name, None, value, &mut ctx);
    }

    pub fn connect(&mut self) {
        let mut ctx = WidgetCtx::new(&mut self.timers, &mut self.sink);
        self.widget.connected(&mut ctx);
    }

    pub fn disconnect(&mut self) {
        let mut ctx = WidgetCtx::new(&mut self.timers, &mut self.sink);
        self.widget.disconnected(&mut ctx);
    }

    pub fn act(&mut self, action: UserAction) {
        let mut ctx = WidgetCtx::new(&mut self.timers, &mut self.sink);
        self.widget.interact(action, &mut ctx);
    }

    /// Deliver a native event as if the inner control had dispatched it.
    pub fn dispatch(&mut self, event: DomEvent) {
        let mut ctx = WidgetCtx::new(&mut self.timers, &mut self.sink);
        self.widget.dispatch_native(&event, &mut ctx);
    }

    /// Type `text` as one burst at the current time.
    pub fn type_text(&mut self, text: &str) {
        self.act(UserAction::typed(text));
    }

    pub fn run_until(&mut self, t: Millis) {
        let widget = &mut self.widget;
        let sink = &mut self.sink;
        self.timers.run_until(t, |timer, timers| {
            let mut ctx = WidgetCtx::new(timers, &mut *sink);
            widget.timer_fired(timer.id, &mut ctx);
        });
    }

    pub fn now(&self) -> Millis {
        self.timers.now()
    }

    /// `(time, event name, value)` for every session event so far.
    pub fn sessions(&self) -> Vec<(Millis, &'static str, String)> {
        self.sink
            .session_events()
            .map(|(at, ev)| (at, ev.name(), ev.value().to_string()))
            .collect()
    }

    pub fn relayed(&self) -> Vec<NativeEventKind> {
        self.sink
            .events
            .iter()
            .filter_map(|env| match &env.event {
                OutwardEvent::Native(ev) => Some(ev.kind),
                OutwardEvent::Session(_) => None,
            })
            .collect()
    }
}
