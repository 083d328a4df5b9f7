//! Property tests for the session contract over arbitrary typing timelines.

mod common;

use common::Harness;
use proptest::prelude::*;

/// (gap before the keystroke in ms, typed character)
fn timeline(max_gap: u64) -> impl Strategy<Value = Vec<(u64, char)>> {
    prop::collection::vec((0..=max_gap, prop::char::range('a', 'z')), 1..40)
}

proptest! {
    #[test]
    fn zero_delay_pairs_every_change(steps in timeline(50)) {
        let mut h = Harness::mounted(None);
        let mut expected = Vec::new();
        let mut value = String::new();
        let mut t = 0;

        for (gap, ch) in steps {
            t += gap;
            h.run_until(t);
            h.type_text(&ch.to_string());
            value.push(ch);
            expected.push((t, "session-started", value.clone()));
            expected.push((t, "session-ended", value.clone()));
        }

        prop_assert_eq!(h.sessions(), expected);
    }

    #[test]
    fn tight_burst_collapses_to_one_session(delay in 1u64..1_000, steps in timeline(999)) {
        let mut h = Harness::mounted(Some(delay.to_string().as_str()));
        let mut t = 0;
        let mut value = String::new();

        for (i, (gap, ch)) in steps.iter().enumerate() {
            // every gap stays strictly under the delay
            if i > 0 {
                t += gap % delay;
            }
            h.run_until(t);
            h.type_text(&ch.to_string());
            value.push(*ch);
        }
        h.run_until(t + delay * 2);

        let first = steps[0].1.to_string();
        prop_assert_eq!(
            h.sessions(),
            vec![
                (0, "session-started", first),
                (t + delay, "session-ended", value),
            ]
        );
    }

    #[test]
    fn starts_and_ends_alternate(delay in 0u64..300, steps in timeline(600)) {
        let mut h = Harness::mounted(Some(delay.to_string().as_str()));
        let mut t = 0;
        for (gap, ch) in steps {
            t += gap;
            h.run_until(t);
            h.type_text(&ch.to_string());
        }
        h.run_until(t + delay);

        let names: Vec<_> = h.sessions().into_iter().map(|(_, name, _)| name).collect();
        for (i, name) in names.iter().enumerate() {
            let want = if i % 2 == 0 { "session-started" } else { "session-ended" };
            prop_assert_eq!(*name, want);
        }
        prop_assert_eq!(names.len() % 2, 0);
    }

    #[test]
    fn nothing_ends_after_teardown(
        delay in 1u64..300,
        steps in timeline(200),
        cut in any::<prop::sample::Index>(),
    ) {
        let mut h = Harness::mounted(Some(delay.to_string().as_str()));
        let cut = cut.index(steps.len());
        let mut t = 0;
        for (gap, ch) in &steps[..=cut] {
            t += gap;
            h.run_until(t);
            h.type_text(&ch.to_string());
        }
        h.disconnect();
        let torn_down_at = h.now();
        h.run_until(t + 10 * delay);

        prop_assert!(h
            .sessions()
            .iter()
            .all(|(at, name, _)| *name != "session-ended" || *at <= torn_down_at));
        prop_assert_eq!(h.timers.pending(), 0);
    }
}
