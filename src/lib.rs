//! Scripted driver for `<session-input>` elements.
//!
//! A scenario file describes attributes, a mount, and a timeline of user
//! actions; [`scenario::run`] replays it against a [`platform::Host`].

pub mod scenario;

pub use scenario::{Action, Scenario, ScenarioError, Step, format_envelope, run};

/// Tag used when neither the scenario nor the command line names one.
pub const DEFAULT_TAG: &str = "session-input";
