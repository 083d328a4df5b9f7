//! A minimal custom-element host.
//!
//! [`Host`] plays the part of a document: it keeps a registry of defined tags,
//! stores attributes for each element, calls the lifecycle hooks, and routes
//! due timers back to the element that armed them.

use core_types::WidgetId;
use thiserror::Error;

mod host;
mod registry;

pub use host::Host;
pub use registry::{ElementRegistry, is_valid_element_name};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("{0:?} is not a valid custom element name")]
    InvalidName(String),
    #[error("<{0}> is already defined")]
    AlreadyDefined(String),
    #[error("no element is defined for <{0}>")]
    UnknownTag(String),
    #[error("{0} does not exist")]
    UnknownElement(WidgetId),
}
