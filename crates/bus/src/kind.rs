/// Native interaction events a text control can emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NativeEventKind {
    Input,
    Change,
    KeyDown,
    KeyUp,
    KeyPress,
    MouseDown,
    MouseUp,
    MouseEnter,
    MouseLeave,
    Click,
    DblClick,
    Paste,
    Cut,
    Copy,
    CompositionStart,
    CompositionUpdate,
    CompositionEnd,
    Focus,
    Blur,
    FocusIn,
    FocusOut,
}

/// Kinds forwarded one-to-one by a generic relay listener.
///
/// Focus and blur are deliberately absent: they get a dedicated listener pair,
/// and their bubbling twins (`focusin`/`focusout`) are never forwarded.
pub const RELAYED_KINDS: [NativeEventKind; 17] = [
    NativeEventKind::Input,
    NativeEventKind::Change,
    NativeEventKind::KeyDown,
    NativeEventKind::KeyUp,
    NativeEventKind::KeyPress,
    NativeEventKind::MouseDown,
    NativeEventKind::MouseUp,
    NativeEventKind::MouseEnter,
    NativeEventKind::MouseLeave,
    NativeEventKind::Click,
    NativeEventKind::DblClick,
    NativeEventKind::Paste,
    NativeEventKind::Cut,
    NativeEventKind::Copy,
    NativeEventKind::CompositionStart,
    NativeEventKind::CompositionUpdate,
    NativeEventKind::CompositionEnd,
];

impl NativeEventKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            NativeEventKind::Input => "input",
            NativeEventKind::Change => "change",
            NativeEventKind::KeyDown => "keydown",
            NativeEventKind::KeyUp => "keyup",
            NativeEventKind::KeyPress => "keypress",
            NativeEventKind::MouseDown => "mousedown",
            NativeEventKind::MouseUp => "mouseup",
            NativeEventKind::MouseEnter => "mouseenter",
            NativeEventKind::MouseLeave => "mouseleave",
            NativeEventKind::Click => "click",
            NativeEventKind::DblClick => "dblclick",
            NativeEventKind::Paste => "paste",
            NativeEventKind::Cut => "cut",
            NativeEventKind::Copy => "copy",
            NativeEventKind::CompositionStart => "compositionstart",
            NativeEventKind::CompositionUpdate => "compositionupdate",
            NativeEventKind::CompositionEnd => "compositionend",
            NativeEventKind::Focus => "focus",
            NativeEventKind::Blur => "blur",
            NativeEventKind::FocusIn => "focusin",
            NativeEventKind::FocusOut => "focusout",
        }
    }

    /// Whether the native control dispatches this kind as a bubbling event.
    pub const fn bubbles(self) -> bool {
        !matches!(
            self,
            NativeEventKind::Focus
                | NativeEventKind::Blur
                | NativeEventKind::MouseEnter
                | NativeEventKind::MouseLeave
        )
    }

    /// Whether a native dispatch of this kind crosses shadow boundaries.
    pub const fn composed(self) -> bool {
        // `change` is the only kind here that stays inside its tree.
        !matches!(self, NativeEventKind::Change)
    }

    pub fn is_relayed(self) -> bool {
        RELAYED_KINDS.contains(&self)
    }
}
