use core_types::{Millis, WidgetId};
use std::sync::mpsc::{self, Receiver, Sender};

mod kind;
mod target;

pub use kind::{NativeEventKind, RELAYED_KINDS};
pub use target::{EventTarget, ListenerId};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputType {
    InsertText,
    InsertFromPaste,
    InsertCompositionText,
    DeleteContentBackward,
    DeleteContentForward,
    DeleteByCut,
}

impl InputType {
    pub const fn as_str(self) -> &'static str {
        match self {
            InputType::InsertText => "insertText",
            InputType::InsertFromPaste => "insertFromPaste",
            InputType::InsertCompositionText => "insertCompositionText",
            InputType::DeleteContentBackward => "deleteContentBackward",
            InputType::DeleteContentForward => "deleteContentForward",
            InputType::DeleteByCut => "deleteByCut",
        }
    }
}

/// Kind-specific payload carried by a [`DomEvent`].
#[derive(Clone, Debug, PartialEq)]
pub enum EventDetail {
    None,
    Input {
        data: Option<String>,
        input_type: InputType,
    },
    Key {
        key: String,
        repeat: bool,
        modifiers: Modifiers,
    },
    Pointer {
        x: f32,
        y: f32,
        button: PointerButton,
        click_count: u32,
    },
    Clipboard {
        data: Option<String>,
    },
    Composition {
        data: String,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct DomEvent {
    pub kind: NativeEventKind,
    pub detail: EventDetail,
    pub bubbles: bool,
    pub composed: bool,
}

impl DomEvent {
    /// An event as the native control dispatches it, with the kind's native flags.
    pub fn native(kind: NativeEventKind, detail: EventDetail) -> Self {
        Self {
            kind,
            detail,
            bubbles: kind.bubbles(),
            composed: kind.composed(),
        }
    }

    /// Copy for re-dispatch from an outer element: same kind and payload, but
    /// always bubbling and composed so ancestors outside the component see it.
    pub fn relayed(&self) -> Self {
        Self {
            kind: self.kind,
            detail: self.detail.clone(),
            bubbles: true,
            composed: true,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.as_str()
    }
}

pub const SESSION_STARTED: &str = "session-started";
pub const SESSION_ENDED: &str = "session-ended";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    Started { value: String },
    Ended { value: String },
}

impl SessionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::Started { .. } => SESSION_STARTED,
            SessionEvent::Ended { .. } => SESSION_ENDED,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            SessionEvent::Started { value } | SessionEvent::Ended { value } => value,
        }
    }
}

/// Everything a widget emits on its own event surface.
#[derive(Clone, Debug, PartialEq)]
pub enum OutwardEvent {
    Native(DomEvent),
    Session(SessionEvent),
}

impl OutwardEvent {
    pub fn name(&self) -> &'static str {
        match self {
            OutwardEvent::Native(ev) => ev.name(),
            OutwardEvent::Session(ev) => ev.name(),
        }
    }

    pub fn bubbles(&self) -> bool {
        match self {
            OutwardEvent::Native(ev) => ev.bubbles,
            OutwardEvent::Session(_) => true,
        }
    }

    pub fn composed(&self) -> bool {
        match self {
            OutwardEvent::Native(ev) => ev.composed,
            OutwardEvent::Session(_) => true,
        }
    }

    pub fn as_session(&self) -> Option<&SessionEvent> {
        match self {
            OutwardEvent::Session(ev) => Some(ev),
            OutwardEvent::Native(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Envelope {
    pub at: Millis,
    pub target: WidgetId,
    pub event: OutwardEvent,
}

pub trait EventSink {
    fn dispatch(&mut self, envelope: Envelope);
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<Envelope>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session_events(&self) -> impl Iterator<Item = (Millis, &SessionEvent)> + '_ {
        self.events
            .iter()
            .filter_map(|env| env.event.as_session().map(|ev| (env.at, ev)))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.events.iter().map(|env| env.event.name()).collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for RecordingSink {
    fn dispatch(&mut self, envelope: Envelope) {
        self.events.push(envelope);
    }
}

/// Sink that forwards envelopes over a channel to whoever observes the host.
pub struct ChannelSink {
    tx: Sender<Envelope>,
}

impl ChannelSink {
    pub fn new(tx: Sender<Envelope>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelSink {
    fn dispatch(&mut self, envelope: Envelope) {
        if let Err(err) = self.tx.send(envelope) {
            log::warn!(target: "bus", "observer gone, dropping {}", err.0.event.name());
        }
    }
}

pub fn channel() -> (ChannelSink, Receiver<Envelope>) {
    let (tx, rx) = mpsc::channel();
    (ChannelSink::new(tx), rx)
}
