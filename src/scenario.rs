use crate::DEFAULT_TAG;
use bus::{EventDetail, Envelope, EventSink, OutwardEvent};
use core_types::{Millis, WidgetId};
use input_core::{CompositionPhase, PointerAction, UserAction};
use platform::{Host, HostError};
use runtime_timer::Clock;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use widget::SessionInput;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scenario: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("step {index} at {at}ms runs before the previous step at {previous}ms")]
    OutOfOrder {
        index: usize,
        at: Millis,
        previous: Millis,
    },
    #[error(transparent)]
    Host(#[from] HostError),
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub tag: Option<String>,
    /// Applied in name order before mounting.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default = "mount_by_default")]
    pub mount: bool,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
    /// Stop the clock here. Without it every pending timer is run.
    pub until: Option<Millis>,
}

fn mount_by_default() -> bool {
    true
}

#[derive(Clone, Debug, Deserialize)]
pub struct Step {
    #[serde(default)]
    pub at: Millis,
    #[serde(flatten)]
    pub action: Action,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Type { text: String },
    Key { key: String },
    Paste { text: String },
    Cut,
    Copy,
    SelectAll,
    ComposeStart,
    ComposeUpdate { text: String },
    ComposeEnd { text: String },
    Focus,
    Blur,
    PointerDown,
    PointerUp,
    Click,
    DoubleClick,
    PointerEnter,
    PointerLeave,
    SetValue { value: String },
    SetAttribute { name: String, value: String },
    RemoveAttribute { name: String },
    Mount,
    Unmount,
}

impl Action {
    /// The user action this step performs on the inner control, if any.
    pub fn user_action(&self) -> Option<UserAction> {
        let action = match self {
            Action::Type { text } => UserAction::typed(text.as_str()),
            Action::Key { key } => UserAction::key(key.as_str()),
            Action::Paste { text } => UserAction::Paste(text.clone()),
            Action::Cut => UserAction::Cut,
            Action::Copy => UserAction::Copy,
            Action::SelectAll => UserAction::SelectAll,
            Action::ComposeStart => UserAction::Compose(CompositionPhase::Start),
            Action::ComposeUpdate { text } => {
                UserAction::Compose(CompositionPhase::Update(text.clone()))
            }
            Action::ComposeEnd { text } => UserAction::Compose(CompositionPhase::End(text.clone())),
            Action::Focus => UserAction::Focus,
            Action::Blur => UserAction::Blur,
            Action::PointerDown => UserAction::pointer(PointerAction::Down),
            Action::PointerUp => UserAction::pointer(PointerAction::Up),
            Action::Click => UserAction::pointer(PointerAction::Click),
            Action::DoubleClick => UserAction::pointer(PointerAction::DoubleClick),
            Action::PointerEnter => UserAction::pointer(PointerAction::Enter),
            Action::PointerLeave => UserAction::pointer(PointerAction::Leave),
            Action::SetValue { .. }
            | Action::SetAttribute { .. }
            | Action::RemoveAttribute { .. }
            | Action::Mount
            | Action::Unmount => return None,
        };
        Some(action)
    }
}

impl Scenario {
    pub fn from_toml(text: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let text = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn tag(&self) -> &str {
        self.tag.as_deref().unwrap_or(DEFAULT_TAG)
    }

    fn check_order(&self) -> Result<(), ScenarioError> {
        let mut previous = 0;
        for (index, step) in self.steps.iter().enumerate() {
            if step.at < previous {
                return Err(ScenarioError::OutOfOrder {
                    index,
                    at: step.at,
                    previous,
                });
            }
            previous = step.at;
        }
        Ok(())
    }
}

/// Define `tag`, create one element, and replay `scenario` against it.
///
/// Returns the element's id; everything it emitted went to the host's sink.
pub fn run<C, S>(
    scenario: &Scenario,
    host: &mut Host<SessionInput, C, S>,
    tag: &str,
) -> Result<WidgetId, ScenarioError>
where
    C: Clock,
    S: EventSink,
{
    scenario.check_order()?;
    if !host.registry().is_defined(tag) {
        host.define(tag)?;
    }
    let id = host.create_element(tag)?;
    for (name, value) in &scenario.attributes {
        host.set_attribute(id, name, value)?;
    }
    if scenario.mount {
        host.connect(id)?;
    }

    for step in &scenario.steps {
        host.run_until(step.at);
        log::debug!(target: "scenario", "{}ms: {:?}", step.at, step.action);
        apply(host, id, &step.action)?;
    }

    match scenario.until {
        Some(until) => {
            host.run_until(until);
        }
        None => {
            host.drain();
        }
    }
    Ok(id)
}

fn apply<C, S>(
    host: &mut Host<SessionInput, C, S>,
    id: WidgetId,
    action: &Action,
) -> Result<(), ScenarioError>
where
    C: Clock,
    S: EventSink,
{
    if let Some(user) = action.user_action() {
        host.with_element(id, |el, ctx| el.interact(user, ctx))?;
        return Ok(());
    }
    match action {
        Action::SetValue { value } => {
            host.with_element(id, |el, _| el.set_value(value.as_str()))?;
        }
        Action::SetAttribute { name, value } => host.set_attribute(id, name, value)?,
        Action::RemoveAttribute { name } => {
            host.remove_attribute(id, name)?;
        }
        Action::Mount => {
            host.connect(id)?;
        }
        Action::Unmount => {
            host.disconnect(id)?;
        }
        _ => {}
    }
    Ok(())
}

/// One output line for `envelope`. Native relays are skipped unless `native`.
pub fn format_envelope(envelope: &Envelope, native: bool) -> Option<String> {
    let Envelope { at, target, event } = envelope;
    match event {
        OutwardEvent::Session(session) => Some(format!(
            "{at:>6}ms {target} {} {:?}",
            session.name(),
            session.value()
        )),
        OutwardEvent::Native(ev) if native => {
            let detail = match &ev.detail {
                EventDetail::None => String::new(),
                EventDetail::Input { data, input_type } => {
                    format!(" {} {:?}", input_type.as_str(), data.as_deref().unwrap_or(""))
                }
                EventDetail::Key { key, .. } => format!(" {key:?}"),
                EventDetail::Pointer { click_count, .. } => format!(" clicks={click_count}"),
                EventDetail::Clipboard { data } => format!(" {:?}", data.as_deref().unwrap_or("")),
                EventDetail::Composition { data } => format!(" {data:?}"),
            };
            Some(format!("{at:>6}ms {target} {}{detail}", ev.name()))
        }
        OutwardEvent::Native(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bus::RecordingSink;
    use runtime_timer::VirtualClock;

    fn replay(text: &str) -> (Host<SessionInput, VirtualClock, RecordingSink>, WidgetId) {
        let scenario = Scenario::from_toml(text).unwrap();
        let mut host = Host::new(VirtualClock::new(), RecordingSink::new());
        let id = run(&scenario, &mut host, scenario.tag()).unwrap();
        (host, id)
    }

    #[test]
    fn parses_actions_with_and_without_fields() {
        let scenario = Scenario::from_toml(
            r#"
            [[step]]
            at = 5
            action = "type"
            text = "hi"

            [[step]]
            action = "select_all"
            "#,
        )
        .unwrap();
        assert!(scenario.mount);
        assert_eq!(scenario.tag(), DEFAULT_TAG);
        assert_eq!(
            scenario.steps[0].action,
            Action::Type {
                text: "hi".to_string()
            }
        );
        assert_eq!(scenario.steps[1].at, 0);
        assert_eq!(scenario.steps[1].action, Action::SelectAll);
    }

    #[test]
    fn unknown_action_is_a_parse_error() {
        let err = Scenario::from_toml("[[step]]\naction = \"shout\"\n").unwrap_err();
        assert!(matches!(err, ScenarioError::Parse(_)));
    }

    #[test]
    fn steps_must_not_go_back_in_time() {
        let scenario = Scenario::from_toml(
            "[[step]]\nat = 10\naction = \"focus\"\n[[step]]\nat = 5\naction = \"blur\"\n",
        )
        .unwrap();
        let mut host = Host::new(VirtualClock::new(), RecordingSink::new());
        let err = run(&scenario, &mut host, DEFAULT_TAG).unwrap_err();
        assert!(matches!(
            err,
            ScenarioError::OutOfOrder {
                index: 1,
                at: 5,
                previous: 10
            }
        ));
    }

    #[test]
    fn invalid_tag_surfaces_host_error() {
        let scenario = Scenario::from_toml("tag = \"plain\"\n").unwrap();
        let mut host = Host::new(VirtualClock::new(), RecordingSink::new());
        let err = run(&scenario, &mut host, scenario.tag()).unwrap_err();
        assert!(matches!(err, ScenarioError::Host(HostError::InvalidName(_))));
    }

    #[test]
    fn set_value_step_starts_no_session() {
        let (host, id) = replay(
            r#"
            [attributes]
            delay = "100"

            [[step]]
            action = "set_value"
            value = "preset"
            "#,
        );
        assert!(host.sink().events.is_empty());
        assert_eq!(host.element(id).unwrap().value(), "preset");
    }

    #[test]
    fn unmounted_scenario_emits_nothing() {
        let (host, _) = replay(
            r#"
            mount = false

            [[step]]
            action = "type"
            text = "abc"
            "#,
        );
        assert!(host.sink().events.is_empty());
    }

    #[test]
    fn pointer_press_steps_relay_mouse_buttons() {
        let (host, _) = replay(
            r#"
            [[step]]
            action = "pointer_down"

            [[step]]
            action = "pointer_up"

            [[step]]
            action = "click"
            "#,
        );
        assert_eq!(host.sink().names(), vec!["mousedown", "mouseup", "click"]);
    }

    #[test]
    fn formats_session_lines_and_optional_relays() {
        let (host, _) = replay(
            r#"
            [[step]]
            action = "type"
            text = "x"
            "#,
        );
        let lines: Vec<String> = host
            .sink()
            .events
            .iter()
            .filter_map(|env| format_envelope(env, false))
            .collect();
        assert_eq!(
            lines,
            vec![
                "     0ms widget#1 session-started \"x\"".to_string(),
                "     0ms widget#1 session-ended \"x\"".to_string(),
            ]
        );

        let with_native = host
            .sink()
            .events
            .iter()
            .filter_map(|env| format_envelope(env, true))
            .count();
        assert_eq!(with_native, host.sink().events.len());
    }
}
