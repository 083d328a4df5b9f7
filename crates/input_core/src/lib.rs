//! # input_core
//!
//! The native text-entry control that a widget wraps.
//!
//! [`TextControl`] holds the editable value, caret, selection, class list and
//! the listener arena of the control. User interactions are modelled as
//! [`UserAction`]s; applying one edits the control and yields the native
//! [`bus::DomEvent`] sequence a browser control would dispatch for it.
//!
//! Nothing here knows about sessions, timers or relays. Callers decide which
//! listeners see which events.

mod action;
mod class_list;
mod control;
mod text;

pub use action::{CompositionPhase, PointerAction, UserAction};
pub use class_list::ClassList;
pub use control::TextControl;

pub use text::{
    clamp_to_char_boundary, filter_single_line, next_cursor_boundary, prev_cursor_boundary,
};
