#![no_main]

//! Random interleavings of typing, time, and mount changes must keep sessions
//! paired: started and ended alternate until an unmount drops the open session.

use bus::{RecordingSink, SessionEvent};
use core_types::WidgetId;
use input_core::{CompositionPhase, UserAction};
use libfuzzer_sys::fuzz_target;
use runtime_timer::{EventLoop, Scheduler, VirtualClock};
use widget::{CustomElement, SessionInput, WidgetCtx};

fuzz_target!(|data: &[u8]| {
    let Some((&delay, ops)) = data.split_first() else {
        return;
    };
    let mut timers = EventLoop::new(VirtualClock::new());
    let mut sink = RecordingSink::new();
    let mut widget = SessionInput::create(WidgetId(1));
    let delay = (u32::from(delay) * 4).to_string();
    {
        let mut ctx = WidgetCtx::new(&mut timers, &mut sink);
        widget.attribute_changed("delay", None, Some(delay.as_str()), &mut ctx);
        widget.connected(&mut ctx);
    }

    let mut open = false;
    let mut checked = 0;
    for &op in ops {
        match op % 8 {
            0..=2 => {
                let mut ctx = WidgetCtx::new(&mut timers, &mut sink);
                widget.interact(UserAction::typed(char::from(b'a' + op % 26).to_string()), &mut ctx);
            }
            3 => {
                let mut ctx = WidgetCtx::new(&mut timers, &mut sink);
                widget.interact(UserAction::key("Backspace"), &mut ctx);
            }
            4 => {
                let mut ctx = WidgetCtx::new(&mut timers, &mut sink);
                widget.interact(
                    UserAction::Compose(CompositionPhase::Update("x".repeat(usize::from(op % 3)))),
                    &mut ctx,
                );
            }
            5 => {
                let mut ctx = WidgetCtx::new(&mut timers, &mut sink);
                if widget.is_connected() {
                    widget.disconnected(&mut ctx);
                    check_alternation(&sink, &mut checked, &mut open);
                    open = false;
                } else {
                    widget.connected(&mut ctx);
                }
            }
            _ => {
                let until = timers.now() + u64::from(op);
                timers.run_until(until, |timer, timers| {
                    let mut ctx = WidgetCtx::new(timers, &mut sink);
                    widget.timer_fired(timer.id, &mut ctx);
                });
            }
        }
        check_alternation(&sink, &mut checked, &mut open);
    }
});

fn check_alternation(sink: &RecordingSink, checked: &mut usize, open: &mut bool) {
    for (_, event) in sink.session_events().skip(*checked) {
        match event {
            SessionEvent::Started { .. } => assert!(!*open),
            SessionEvent::Ended { .. } => assert!(*open),
        }
        *open = matches!(event, SessionEvent::Started { .. });
        *checked += 1;
    }
}
