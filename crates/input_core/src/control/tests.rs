use super::*;
use bus::NativeEventKind as K;

fn kinds(events: &[DomEvent]) -> Vec<NativeEventKind> {
    events.iter().map(|e| e.kind).collect()
}

#[test]
fn typing_emits_key_and_input_per_character() {
    let mut control = TextControl::new();
    let events = control.apply(UserAction::typed("ab"));

    assert_eq!(
        kinds(&events),
        vec![
            K::KeyDown,
            K::KeyPress,
            K::Input,
            K::KeyUp,
            K::KeyDown,
            K::KeyPress,
            K::Input,
            K::KeyUp,
        ]
    );
    assert_eq!(control.value(), "ab");
    assert_eq!(control.caret(), 2);
    assert_eq!(
        events[2].detail,
        EventDetail::Input {
            data: Some("a".to_string()),
            input_type: InputType::InsertText,
        }
    );
}

#[test]
fn typing_drops_newlines() {
    let mut control = TextControl::new();
    let events = control.apply(UserAction::typed("a\nb"));
    assert_eq!(control.value(), "ab");
    assert_eq!(events.iter().filter(|e| e.kind == K::Input).count(), 2);
}

#[test]
fn set_value_strips_newlines_and_moves_caret_to_end() {
    let mut control = TextControl::new();
    control.set_value("pre\nset");

    assert_eq!(control.value(), "preset");
    assert_eq!(control.caret(), 6);
}

#[test]
fn backspace_at_start_emits_no_input() {
    let mut control = TextControl::new();
    let events = control.apply(UserAction::key("Backspace"));
    assert_eq!(kinds(&events), vec![K::KeyDown, K::KeyUp]);
}

#[test]
fn backspace_removes_whole_multibyte_char() {
    let mut control = TextControl::with_value("a€");
    let events = control.apply(UserAction::key("Backspace"));

    assert_eq!(control.value(), "a");
    assert_eq!(kinds(&events), vec![K::KeyDown, K::Input, K::KeyUp]);
}

#[test]
fn caret_keys_move_without_input() {
    let mut control = TextControl::with_value("abc");
    control.apply(UserAction::key("Home"));
    control.apply(UserAction::key("ArrowRight"));
    let events = control.apply(UserAction::key("Delete"));

    assert_eq!(control.value(), "ac");
    assert_eq!(control.caret(), 1);
    assert_eq!(kinds(&events), vec![K::KeyDown, K::Input, K::KeyUp]);
}

#[test]
fn paste_replaces_selection() {
    let mut control = TextControl::with_value("old");
    control.apply(UserAction::SelectAll);
    let events = control.apply(UserAction::Paste("new".to_string()));

    assert_eq!(control.value(), "new");
    assert_eq!(kinds(&events), vec![K::Paste, K::Input]);
}

#[test]
fn cut_carries_selected_text_and_deletes_it() {
    let mut control = TextControl::with_value("snip");
    control.apply(UserAction::SelectAll);
    let events = control.apply(UserAction::Cut);

    assert_eq!(control.value(), "");
    assert_eq!(
        events[0].detail,
        EventDetail::Clipboard {
            data: Some("snip".to_string())
        }
    );
    assert_eq!(kinds(&events), vec![K::Cut, K::Input]);
}

#[test]
fn copy_without_selection_has_no_data() {
    let mut control = TextControl::with_value("text");
    let events = control.apply(UserAction::Copy);
    assert_eq!(events[0].detail, EventDetail::Clipboard { data: None });
    assert_eq!(control.value(), "text");
}

#[test]
fn composition_commits_final_text() {
    let mut control = TextControl::with_value("x");
    let mut events = control.apply(UserAction::Compose(CompositionPhase::Start));
    events.extend(control.apply(UserAction::Compose(CompositionPhase::Update(
        "ni".to_string(),
    ))));
    assert!(control.is_composing());
    events.extend(control.apply(UserAction::Compose(CompositionPhase::End(
        "你".to_string(),
    ))));

    assert_eq!(control.value(), "x你");
    assert!(!control.is_composing());
    assert_eq!(
        kinds(&events),
        vec![
            K::CompositionStart,
            K::CompositionUpdate,
            K::Input,
            K::Input,
            K::CompositionEnd,
        ]
    );
}

#[test]
fn composition_end_without_start_opens_one() {
    let mut control = TextControl::new();
    let events = control.apply(UserAction::Compose(CompositionPhase::End("é".to_string())));
    assert_eq!(
        kinds(&events),
        vec![K::CompositionStart, K::Input, K::CompositionEnd]
    );
    assert_eq!(control.value(), "é");
}

#[test]
fn focus_emits_non_bubbling_and_bubbling_pair_once() {
    let mut control = TextControl::new();
    let events = control.apply(UserAction::Focus);
    assert_eq!(kinds(&events), vec![K::Focus, K::FocusIn]);
    assert!(!events[0].bubbles);
    assert!(events[1].bubbles);

    assert!(control.apply(UserAction::Focus).is_empty());
}

#[test]
fn blur_commits_change_only_when_edited() {
    let mut control = TextControl::new();
    control.apply(UserAction::Focus);
    let events = control.apply(UserAction::Blur);
    assert_eq!(kinds(&events), vec![K::Blur, K::FocusOut]);

    control.apply(UserAction::Focus);
    control.apply(UserAction::typed("z"));
    let events = control.apply(UserAction::Blur);
    assert_eq!(kinds(&events), vec![K::Change, K::Blur, K::FocusOut]);
    assert!(!control.is_focused());
}

#[test]
fn enter_commits_change_once() {
    let mut control = TextControl::new();
    control.apply(UserAction::Focus);
    control.apply(UserAction::typed("q"));

    let first = control.apply(UserAction::key("Enter"));
    assert_eq!(
        kinds(&first),
        vec![K::KeyDown, K::KeyPress, K::Change, K::KeyUp]
    );

    let second = control.apply(UserAction::key("Enter"));
    assert!(!kinds(&second).contains(&K::Change));
}

#[test]
fn pointer_actions_map_to_mouse_events() {
    let mut control = TextControl::new();
    let events = control.apply(UserAction::Pointer {
        action: PointerAction::DoubleClick,
        x: 5.0,
        y: 6.0,
    });
    assert_eq!(kinds(&events), vec![K::DblClick]);
    assert_eq!(
        events[0].detail,
        EventDetail::Pointer {
            x: 5.0,
            y: 6.0,
            button: PointerButton::Primary,
            click_count: 2,
        }
    );
}

#[test]
fn class_list_is_applied_verbatim_and_cleared() {
    let mut control = TextControl::new();
    control.set_class_list("field-error");
    assert_eq!(control.class_list().as_str(), "field-error");

    control.clear_class_list();
    assert_eq!(control.class_list().as_str(), "");
}
