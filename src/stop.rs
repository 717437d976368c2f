//! Color stops and their id allocation

use serde::{Deserialize, Serialize};

use crate::color::normalize_hex;
use crate::error::{Error, Result};

/// Upper bound for user-supplied stop positions (percent).
pub const MAX_POSITION: u32 = 100;

/// A single color stop of a gradient.
///
/// `position` is a percentage. Storage order is whatever the caller built;
/// derivation renders stops in list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorStop {
    /// Unique within the owning list
    pub id: String,
    /// `#rrggbb` literal
    pub color: String,
    /// Percent along the gradient line
    pub position: u32,
}

impl ColorStop {
    pub fn new(id: impl Into<String>, color: impl Into<String>, position: u32) -> Self {
        Self {
            id: id.into(),
            color: color.into(),
            position,
        }
    }

    /// `"<color> <position>%"`, the form used inside a gradient function.
    pub fn css(&self) -> String {
        format!("{} {}%", self.color, self.position)
    }
}

/// Partial edit applied by `GradientEngine::update_stop`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopUpdate {
    pub color: Option<String>,
    pub position: Option<u32>,
}

impl StopUpdate {
    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            position: None,
        }
    }

    pub fn position(position: u32) -> Self {
        Self {
            color: None,
            position: Some(position),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.position.is_none()
    }
}

/// Hands out `item_<n>` ids with a monotonically increasing counter.
///
/// The counter never rewinds, so ids stay unique even after the whole list
/// is replaced by a random gradient.
#[derive(Debug, Clone, Default)]
pub struct StopIds {
    issued: u64,
}

impl StopIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> String {
        self.issued += 1;
        format!("item_{}", self.issued)
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u64 {
        self.issued
    }
}

/// Validates a user-supplied position.
pub fn check_position(position: u32) -> Result<u32> {
    if position > MAX_POSITION {
        return Err(Error::InvalidPosition(position));
    }
    Ok(position)
}

/// Parses the CLI stop literal `#rrggbb:position` (position defaults to 0).
pub fn parse_stop_literal(s: &str) -> Result<(String, u32)> {
    let (color, position) = match s.split_once(':') {
        Some((c, p)) => {
            let p = p
                .trim()
                .trim_end_matches('%')
                .parse::<u32>()
                .map_err(|_| Error::InvalidStop(s.to_string()))?;
            (c, p)
        }
        None => (s, 0),
    };
    let color = normalize_hex(color).map_err(|_| Error::InvalidStop(s.to_string()))?;
    Ok((color, check_position(position)?))
}
