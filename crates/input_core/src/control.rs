//! The native single-line text control.
//!
//! `TextControl` owns the editable value and the listener arena. It never calls
//! listeners itself: [`TextControl::apply`] returns the native events an action
//! produced, and whoever owns the listeners routes each event to them.

use crate::action::{CompositionPhase, PointerAction, UserAction};
use crate::class_list::ClassList;
use crate::text::{
    clamp_to_char_boundary, filter_single_line, next_cursor_boundary, prev_cursor_boundary,
};
use bus::{
    DomEvent, EventDetail, EventTarget, InputType, Modifiers, NativeEventKind, PointerButton,
};
use std::ops::Range;

/// Byte span of in-progress IME text inside the value.
#[derive(Clone, Copy, Debug)]
struct Composition {
    start: usize,
    len: usize,
}

#[derive(Clone, Debug, Default)]
pub struct TextControl {
    value: String,
    /// Byte index, always on a char boundary of `value`.
    caret: usize,
    selection_anchor: Option<usize>,
    focused: bool,
    /// Value as of the last focus or `change` dispatch.
    committed: String,
    composition: Option<Composition>,
    classes: ClassList,
    listeners: EventTarget,
}

impl TextControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        let mut control = Self::new();
        control.set_value(value);
        control
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Programmatic assignment. Dispatches nothing; caret moves to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        let value = filter_single_line(&value).into_owned();
        self.caret = value.len();
        self.selection_anchor = None;
        self.composition = None;
        self.committed.clone_from(&value);
        self.value = value;
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn selection(&self) -> Option<Range<usize>> {
        let anchor = clamp_to_char_boundary(&self.value, self.selection_anchor?);
        let caret = clamp_to_char_boundary(&self.value, self.caret);
        (anchor != caret).then(|| anchor.min(caret)..anchor.max(caret))
    }

    pub fn selected_text(&self) -> &str {
        self.selection().map_or("", |range| &self.value[range])
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_composing(&self) -> bool {
        self.composition.is_some()
    }

    pub fn class_list(&self) -> &ClassList {
        &self.classes
    }

    pub fn set_class_list(&mut self, raw: &str) {
        self.classes.set(raw);
    }

    pub fn clear_class_list(&mut self) {
        self.classes.clear();
    }

    pub fn listeners(&self) -> &EventTarget {
        &self.listeners
    }

    pub fn listeners_mut(&mut self) -> &mut EventTarget {
        &mut self.listeners
    }

    /// Apply a user action and return the native events it dispatched, in order.
    pub fn apply(&mut self, action: UserAction) -> Vec<DomEvent> {
        let mut out = Vec::new();
        match action {
            UserAction::Type(text) => {
                self.composition = None;
                for ch in filter_single_line(&text).chars() {
                    let key = ch.to_string();
                    out.push(key_event(NativeEventKind::KeyDown, &key));
                    out.push(key_event(NativeEventKind::KeyPress, &key));
                    self.replace_selection(&key);
                    out.push(input_event(Some(key.clone()), InputType::InsertText));
                    out.push(key_event(NativeEventKind::KeyUp, &key));
                }
            }
            UserAction::Key(name) => {
                self.composition = None;
                out.push(key_event(NativeEventKind::KeyDown, &name));
                self.press_key(&name, &mut out);
                out.push(key_event(NativeEventKind::KeyUp, &name));
            }
            UserAction::Paste(text) => {
                self.composition = None;
                out.push(clipboard_event(NativeEventKind::Paste, Some(text.clone())));
                let text = filter_single_line(&text);
                if !text.is_empty() {
                    self.replace_selection(&text);
                    out.push(input_event(
                        Some(text.into_owned()),
                        InputType::InsertFromPaste,
                    ));
                }
            }
            UserAction::Cut => {
                self.composition = None;
                let selected = self.selected_text().to_string();
                out.push(clipboard_event(
                    NativeEventKind::Cut,
                    (!selected.is_empty()).then_some(selected),
                ));
                if self.delete_selection() {
                    out.push(input_event(None, InputType::DeleteByCut));
                }
            }
            UserAction::Copy => {
                let selected = self.selected_text().to_string();
                out.push(clipboard_event(
                    NativeEventKind::Copy,
                    (!selected.is_empty()).then_some(selected),
                ));
            }
            UserAction::SelectAll => {
                self.selection_anchor = Some(0);
                self.caret = self.value.len();
            }
            UserAction::Compose(phase) => self.compose(phase, &mut out),
            UserAction::Pointer { action, x, y } => {
                let (kind, click_count) = match action {
                    PointerAction::Enter => (NativeEventKind::MouseEnter, 0),
                    PointerAction::Leave => (NativeEventKind::MouseLeave, 0),
                    PointerAction::Down => (NativeEventKind::MouseDown, 1),
                    PointerAction::Up => (NativeEventKind::MouseUp, 1),
                    PointerAction::Click => (NativeEventKind::Click, 1),
                    PointerAction::DoubleClick => (NativeEventKind::DblClick, 2),
                };
                out.push(DomEvent::native(
                    kind,
                    EventDetail::Pointer {
                        x,
                        y,
                        button: PointerButton::Primary,
                        click_count,
                    },
                ));
            }
            UserAction::Focus => {
                if !self.focused {
                    self.focused = true;
                    self.committed.clone_from(&self.value);
                    out.push(DomEvent::native(NativeEventKind::Focus, EventDetail::None));
                    out.push(DomEvent::native(NativeEventKind::FocusIn, EventDetail::None));
                }
            }
            UserAction::Blur => {
                if self.focused {
                    self.composition = None;
                    self.commit(&mut out);
                    self.focused = false;
                    self.selection_anchor = None;
                    out.push(DomEvent::native(NativeEventKind::Blur, EventDetail::None));
                    out.push(DomEvent::native(NativeEventKind::FocusOut, EventDetail::None));
                }
            }
        }
        out
    }

    fn press_key(&mut self, name: &str, out: &mut Vec<DomEvent>) {
        match name {
            "Backspace" => {
                if self.delete_backward() {
                    out.push(input_event(None, InputType::DeleteContentBackward));
                }
            }
            "Delete" => {
                if self.delete_forward() {
                    out.push(input_event(None, InputType::DeleteContentForward));
                }
            }
            "Enter" => {
                out.push(key_event(NativeEventKind::KeyPress, name));
                self.commit(out);
            }
            "ArrowLeft" => {
                let to = match self.selection() {
                    Some(range) => range.start,
                    None => prev_cursor_boundary(&self.value, self.caret),
                };
                self.collapse_to(to);
            }
            "ArrowRight" => {
                let to = match self.selection() {
                    Some(range) => range.end,
                    None => next_cursor_boundary(&self.value, self.caret),
                };
                self.collapse_to(to);
            }
            "Home" => self.collapse_to(0),
            "End" => self.collapse_to(self.value.len()),
            _ => {}
        }
    }

    fn compose(&mut self, phase: CompositionPhase, out: &mut Vec<DomEvent>) {
        if self.composition.is_none() {
            // A stray update/end opens the composition it belongs to.
            self.delete_selection();
            self.composition = Some(Composition {
                start: clamp_to_char_boundary(&self.value, self.caret),
                len: 0,
            });
            out.push(composition_event(
                NativeEventKind::CompositionStart,
                String::new(),
            ));
        }

        match phase {
            CompositionPhase::Start => {}
            CompositionPhase::Update(text) => {
                let text = filter_single_line(&text).into_owned();
                self.replace_composed(&text);
                out.push(composition_event(
                    NativeEventKind::CompositionUpdate,
                    text.clone(),
                ));
                out.push(input_event(Some(text), InputType::InsertCompositionText));
            }
            CompositionPhase::End(text) => {
                let text = filter_single_line(&text).into_owned();
                if self.replace_composed(&text) {
                    out.push(input_event(
                        Some(text.clone()),
                        InputType::InsertCompositionText,
                    ));
                }
                self.composition = None;
                out.push(composition_event(NativeEventKind::CompositionEnd, text));
            }
        }
    }

    /// Swap the composed span for `text`. Returns `true` if the value changed.
    fn replace_composed(&mut self, text: &str) -> bool {
        let Some(comp) = self.composition else {
            return false;
        };
        let start = clamp_to_char_boundary(&self.value, comp.start);
        let end = clamp_to_char_boundary(&self.value, start + comp.len);
        let changed = self.value[start..end] != *text;
        if changed {
            self.value.replace_range(start..end, text);
        }
        self.caret = start + text.len();
        self.composition = Some(Composition {
            start,
            len: text.len(),
        });
        changed
    }

    fn commit(&mut self, out: &mut Vec<DomEvent>) {
        if self.value != self.committed {
            self.committed.clone_from(&self.value);
            out.push(DomEvent::native(NativeEventKind::Change, EventDetail::None));
        }
    }

    fn replace_selection(&mut self, text: &str) -> bool {
        let removed = self.delete_selection();
        if text.is_empty() {
            return removed;
        }
        let caret = clamp_to_char_boundary(&self.value, self.caret);
        self.value.insert_str(caret, text);
        self.caret = caret + text.len();
        true
    }

    fn delete_selection(&mut self) -> bool {
        let range = self.selection();
        self.selection_anchor = None;
        let Some(range) = range else {
            return false;
        };
        self.caret = range.start;
        self.value.replace_range(range, "");
        true
    }

    fn delete_backward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        let caret = clamp_to_char_boundary(&self.value, self.caret);
        if caret == 0 {
            return false;
        }
        let prev = prev_cursor_boundary(&self.value, caret);
        self.value.replace_range(prev..caret, "");
        self.caret = prev;
        true
    }

    fn delete_forward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        let caret = clamp_to_char_boundary(&self.value, self.caret);
        if caret >= self.value.len() {
            return false;
        }
        let next = next_cursor_boundary(&self.value, caret);
        self.value.replace_range(caret..next, "");
        self.caret = caret;
        true
    }

    fn collapse_to(&mut self, caret: usize) {
        self.caret = clamp_to_char_boundary(&self.value, caret);
        self.selection_anchor = None;
    }
}

fn key_event(kind: NativeEventKind, key: &str) -> DomEvent {
    DomEvent::native(
        kind,
        EventDetail::Key {
            key: key.to_string(),
            repeat: false,
            modifiers: Modifiers::default(),
        },
    )
}

fn input_event(data: Option<String>, input_type: InputType) -> DomEvent {
    DomEvent::native(NativeEventKind::Input, EventDetail::Input { data, input_type })
}

fn clipboard_event(kind: NativeEventKind, data: Option<String>) -> DomEvent {
    DomEvent::native(kind, EventDetail::Clipboard { data })
}

fn composition_event(kind: NativeEventKind, data: String) -> DomEvent {
    DomEvent::native(kind, EventDetail::Composition { data })
}

#[cfg(test)]
mod tests;
