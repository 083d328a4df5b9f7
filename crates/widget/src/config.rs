//! Attribute-driven configuration.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DELAY_ATTR: &str = "delay";
pub const CLASS_ATTR: &str = "class";

/// Quiet period, in milliseconds, before an open session ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DelayMs(pub u32);

impl DelayMs {
    pub const ZERO: DelayMs = DelayMs(0);

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn as_millis(self) -> u64 {
        u64::from(self.0)
    }
}

impl fmt::Display for DelayMs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DelayError {
    #[error("delay is empty")]
    Empty,
    #[error("delay {0:?} is negative")]
    Negative(String),
    #[error("delay {0:?} is not an integer")]
    NotAnInteger(String),
}

impl FromStr for DelayMs {
    type Err = DelayError;

    /// Strict parse: optional surrounding ASCII whitespace, optional `+`,
    /// decimal digits only. Values past `u32::MAX` saturate.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim_ascii();
        if trimmed.is_empty() {
            return Err(DelayError::Empty);
        }
        if trimmed.starts_with('-') {
            return Err(DelayError::Negative(trimmed.to_string()));
        }
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DelayError::NotAnInteger(trimmed.to_string()));
        }
        let value = digits.bytes().fold(0u32, |acc, b| {
            acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
        });
        Ok(DelayMs(value))
    }
}

/// Read the `delay` attribute. Missing or malformed values (negative ones
/// included) mean no debounce.
pub fn parse_delay(raw: Option<&str>) -> DelayMs {
    let Some(raw) = raw else {
        return DelayMs::ZERO;
    };
    match raw.parse::<DelayMs>() {
        Ok(delay) => delay,
        Err(err) => {
            log::debug!(target: "widget.config", "{err}; falling back to 0ms");
            DelayMs::ZERO
        }
    }
}
