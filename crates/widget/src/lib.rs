//! # widget
//!
//! A text input element that wraps a native control ([`input_core::TextControl`])
//! and adds debounced typing-session notifications.
//!
//! - [`SessionMachine`] turns raw `input` events into `session-started` /
//!   `session-ended` signals, debounced by the `delay` attribute.
//! - [`EventRelay`] mirrors the control's interaction events on the element so
//!   it can stand in for the native control.
//! - [`SessionInput`] wires both to the host through the [`CustomElement`] hooks.

mod config;
mod element;
mod lifecycle;
mod relay;
mod session;

pub use config::{CLASS_ATTR, DELAY_ATTR, DelayError, DelayMs, parse_delay};
pub use element::SessionInput;
pub use lifecycle::{CustomElement, WidgetCtx};
pub use relay::{EventRelay, RelayRoute};
pub use session::{Emitted, SessionMachine, SessionState};
