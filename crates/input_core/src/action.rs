/// A user interaction applied to a [`TextControl`](crate::TextControl).
///
/// Each action expands into the native event sequence a real single-line
/// control would dispatch for it.
#[derive(Clone, Debug, PartialEq)]
pub enum UserAction {
    /// Type printable text, one key per character.
    Type(String),
    /// Press and release a named key (`"Backspace"`, `"Enter"`, `"ArrowLeft"`, ...).
    Key(String),
    Paste(String),
    Cut,
    Copy,
    SelectAll,
    Compose(CompositionPhase),
    Pointer {
        action: PointerAction,
        x: f32,
        y: f32,
    },
    Focus,
    Blur,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompositionPhase {
    Start,
    Update(String),
    End(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerAction {
    Enter,
    Leave,
    Down,
    Up,
    Click,
    DoubleClick,
}

impl UserAction {
    pub fn typed(text: impl Into<String>) -> Self {
        UserAction::Type(text.into())
    }

    pub fn key(name: impl Into<String>) -> Self {
        UserAction::Key(name.into())
    }

    pub fn pointer(action: PointerAction) -> Self {
        UserAction::Pointer {
            action,
            x: 0.0,
            y: 0.0,
        }
    }
}
