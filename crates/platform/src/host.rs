use crate::HostError;
use crate::registry::ElementRegistry;
use bus::EventSink;
use core_types::{Millis, WidgetId};
use runtime_timer::{Clock, EventLoop, Scheduler};
use std::collections::BTreeMap;
use std::sync::Arc;
use widget::{CustomElement, WidgetCtx};

struct Slot<E> {
    tag: Arc<str>,
    attributes: Vec<(Arc<str>, String)>,
    connected: bool,
    element: E,
}

impl<E> Slot<E> {
    fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns the previous value.
    fn set_attr(&mut self, name: &str, value: &str) -> Option<String> {
        match self
            .attributes
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
        {
            Some((_, v)) => Some(std::mem::replace(v, value.to_string())),
            None => {
                self.attributes.push((Arc::from(name), value.to_string()));
                None
            }
        }
    }

    fn remove_attr(&mut self, name: &str) -> Option<String> {
        let pos = self
            .attributes
            .iter()
            .position(|(k, _)| k.eq_ignore_ascii_case(name))?;
        Some(self.attributes.remove(pos).1)
    }
}

/// Owns every element of one kind, the timers they arm, and where their
/// outward events go.
pub struct Host<E, C, S> {
    registry: ElementRegistry,
    event_loop: EventLoop<C>,
    sink: S,
    elements: BTreeMap<WidgetId, Slot<E>>,
    next_id: u32,
}

impl<E, C, S> Host<E, C, S>
where
    E: CustomElement,
    C: Clock,
    S: EventSink,
{
    pub fn new(clock: C, sink: S) -> Self {
        Self {
            registry: ElementRegistry::new(),
            event_loop: EventLoop::new(clock),
            sink,
            elements: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn now(&self) -> Millis {
        self.event_loop.now()
    }

    pub fn pending_timers(&self) -> usize {
        self.event_loop.pending()
    }

    /// Register `tag` for `E`, observing `E::OBSERVED_ATTRIBUTES`.
    pub fn define(&mut self, tag: &str) -> Result<(), HostError> {
        self.registry.define(tag, E::OBSERVED_ATTRIBUTES)
    }

    /// Create a detached element. Nothing is called until it is connected or
    /// an observed attribute is set.
    pub fn create_element(&mut self, tag: &str) -> Result<WidgetId, HostError> {
        let tag = tag.to_ascii_lowercase();
        if !self.registry.is_defined(&tag) {
            return Err(HostError::UnknownTag(tag));
        }
        let id = WidgetId(self.next_id);
        self.next_id += 1;
        self.elements.insert(
            id,
            Slot {
                tag: Arc::from(tag),
                attributes: Vec::new(),
                connected: false,
                element: E::create(id),
            },
        );
        log::debug!(target: "platform.host", "created {id}");
        Ok(id)
    }

    pub fn element(&self, id: WidgetId) -> Option<&E> {
        self.elements.get(&id).map(|slot| &slot.element)
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn is_connected(&self, id: WidgetId) -> bool {
        self.elements.get(&id).is_some_and(|slot| slot.connected)
    }

    pub fn attribute(&self, id: WidgetId, name: &str) -> Result<Option<&str>, HostError> {
        let slot = self.elements.get(&id).ok_or(HostError::UnknownElement(id))?;
        Ok(slot.attr(name))
    }

    /// Set an attribute. Observed names notify the element whether or not it
    /// is connected, including when the value did not change.
    pub fn set_attribute(&mut self, id: WidgetId, name: &str, value: &str) -> Result<(), HostError> {
        let slot = self
            .elements
            .get_mut(&id)
            .ok_or(HostError::UnknownElement(id))?;
        let name = name.to_ascii_lowercase();
        let old = slot.set_attr(&name, value);
        if self.registry.observes(&slot.tag, &name) {
            let mut ctx = WidgetCtx::new(&mut self.event_loop, &mut self.sink);
            slot.element
                .attribute_changed(&name, old.as_deref(), Some(value), &mut ctx);
        }
        Ok(())
    }

    /// Remove an attribute. Returns `false` if it was not present, in which
    /// case the element is not notified.
    pub fn remove_attribute(&mut self, id: WidgetId, name: &str) -> Result<bool, HostError> {
        let slot = self
            .elements
            .get_mut(&id)
            .ok_or(HostError::UnknownElement(id))?;
        let name = name.to_ascii_lowercase();
        let Some(old) = slot.remove_attr(&name) else {
            return Ok(false);
        };
        if self.registry.observes(&slot.tag, &name) {
            let mut ctx = WidgetCtx::new(&mut self.event_loop, &mut self.sink);
            slot.element
                .attribute_changed(&name, Some(old.as_str()), None, &mut ctx);
        }
        Ok(true)
    }

    /// Mount. Returns `false` if the element was already connected.
    pub fn connect(&mut self, id: WidgetId) -> Result<bool, HostError> {
        let slot = self
            .elements
            .get_mut(&id)
            .ok_or(HostError::UnknownElement(id))?;
        if slot.connected {
            return Ok(false);
        }
        slot.connected = true;
        let mut ctx = WidgetCtx::new(&mut self.event_loop, &mut self.sink);
        slot.element.connected(&mut ctx);
        Ok(true)
    }

    /// Unmount. Returns `false` if the element was not connected.
    pub fn disconnect(&mut self, id: WidgetId) -> Result<bool, HostError> {
        let slot = self
            .elements
            .get_mut(&id)
            .ok_or(HostError::UnknownElement(id))?;
        if !slot.connected {
            return Ok(false);
        }
        slot.connected = false;
        let mut ctx = WidgetCtx::new(&mut self.event_loop, &mut self.sink);
        slot.element.disconnected(&mut ctx);
        Ok(true)
    }

    /// Disconnect if needed, drop the element, and cancel anything it left armed.
    pub fn remove_element(&mut self, id: WidgetId) -> Result<(), HostError> {
        self.disconnect(id)?;
        self.elements.remove(&id);
        let dropped = self.event_loop.cancel_owned_by(id);
        if dropped > 0 {
            log::debug!(target: "platform.host", "{id} removed with {dropped} timer(s) pending");
        }
        Ok(())
    }

    /// Run `f` against an element with a live context, e.g. to deliver a user action.
    pub fn with_element<R>(
        &mut self,
        id: WidgetId,
        f: impl FnOnce(&mut E, &mut WidgetCtx<'_>) -> R,
    ) -> Result<R, HostError> {
        let slot = self
            .elements
            .get_mut(&id)
            .ok_or(HostError::UnknownElement(id))?;
        let mut ctx = WidgetCtx::new(&mut self.event_loop, &mut self.sink);
        Ok(f(&mut slot.element, &mut ctx))
    }

    /// Fire every timer due by `until`, routing each to its owner.
    pub fn run_until(&mut self, until: Millis) -> usize {
        let elements = &mut self.elements;
        let sink = &mut self.sink;
        self.event_loop.run_until(until, |timer, event_loop| {
            let Some(slot) = elements.get_mut(&timer.owner) else {
                log::trace!(target: "platform.host", "{} fired for missing {}", timer.id, timer.owner);
                return;
            };
            let mut ctx = WidgetCtx::new(event_loop, &mut *sink);
            slot.element.timer_fired(timer.id, &mut ctx);
        })
    }

    pub fn advance(&mut self, ms: Millis) -> usize {
        let until = self.now().saturating_add(ms);
        self.run_until(until)
    }

    /// Run until no timers remain. Returns the number fired.
    pub fn drain(&mut self) -> usize {
        let mut fired = 0;
        while let Some(deadline) = self.event_loop.next_deadline() {
            fired += self.run_until(deadline);
        }
        fired
    }
}
