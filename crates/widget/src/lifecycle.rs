//! Hooks a host component model calls on an element.

use bus::{Envelope, EventSink, OutwardEvent};
use core_types::{TimerId, WidgetId};
use runtime_timer::Scheduler;

/// What an element may touch while a hook runs.
pub struct WidgetCtx<'a> {
    pub scheduler: &'a mut dyn Scheduler,
    pub sink: &'a mut dyn EventSink,
}

impl<'a> WidgetCtx<'a> {
    pub fn new(scheduler: &'a mut dyn Scheduler, sink: &'a mut dyn EventSink) -> Self {
        Self { scheduler, sink }
    }

    /// Dispatch `event` on `target`'s outward surface, stamped with the current time.
    pub fn emit(&mut self, target: WidgetId, event: OutwardEvent) {
        let at = self.scheduler.now();
        log::trace!(target: "widget", "{target} -> {} at {at}", event.name());
        self.sink.dispatch(Envelope { at, target, event });
    }
}

/// Lifecycle contract between an element and its host.
///
/// The host owns registration, attribute storage and timer routing; the
/// element only reacts to these calls.
pub trait CustomElement {
    /// Attribute names whose changes are reported through `attribute_changed`.
    const OBSERVED_ATTRIBUTES: &'static [&'static str];

    fn create(id: WidgetId) -> Self
    where
        Self: Sized;

    /// Mounted into a document.
    fn connected(&mut self, ctx: &mut WidgetCtx<'_>);

    /// Removed from its document.
    fn disconnected(&mut self, ctx: &mut WidgetCtx<'_>);

    /// An observed attribute was set (`new = Some`) or removed (`new = None`).
    fn attribute_changed(
        &mut self,
        name: &str,
        old: Option<&str>,
        new: Option<&str>,
        ctx: &mut WidgetCtx<'_>,
    );

    /// A timer this element armed came due.
    fn timer_fired(&mut self, timer: TimerId, ctx: &mut WidgetCtx<'_>);
}
