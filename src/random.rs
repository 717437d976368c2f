//! Random gradient generator.
//!
//! Draws a rotation in `[0, 360)`, two to five stops with uniformly random
//! `#rrggbb` colors, and lays the stops out according to a [`PositionSpread`].
//! The result is always rendered as a linear gradient.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::HEX_DIGITS;
use crate::gradient::{derive_gradient, GradientType, Rotation};
use crate::stop::{ColorStop, StopIds};

pub const MIN_RANDOM_STOPS: usize = 2;
pub const MAX_RANDOM_STOPS: usize = 5;

/// How generated stops are positioned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PositionSpread {
    /// `i * 100`. Stops past the second land beyond 100% and fall outside
    /// the painted area.
    #[default]
    Verbatim,
    /// `i * 100 / (n - 1)`, spreading stops evenly over 0..=100.
    Normalized,
}

impl PositionSpread {
    pub fn position(self, index: usize, count: usize) -> u32 {
        let index = index as u32;
        match self {
            PositionSpread::Verbatim => index * 100,
            PositionSpread::Normalized => {
                let last = (count.max(2) - 1) as u32;
                index * 100 / last
            }
        }
    }
}

/// Output of [`random_gradient`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RandomGradient {
    pub stops: Vec<ColorStop>,
    pub rotation: Rotation,
}

impl RandomGradient {
    /// Gradient type a random draw is always rendered with.
    pub const GRADIENT_TYPE: GradientType = GradientType::Linear;

    /// The `linear-gradient(...)` value for this draw.
    pub fn css(&self) -> String {
        derive_gradient(&self.stops, Self::GRADIENT_TYPE, self.rotation).unwrap_or_default()
    }
}

/// `#` followed by six characters drawn uniformly from `0-9a-f`.
pub fn random_hex<R: Rng>(rng: &mut R) -> String {
    let mut s = String::with_capacity(7);
    s.push('#');
    for _ in 0..6 {
        s.push(HEX_DIGITS[rng.random_range(0..HEX_DIGITS.len())] as char);
    }
    s
}

pub fn random_gradient<R: Rng>(
    rng: &mut R,
    ids: &mut StopIds,
    spread: PositionSpread,
) -> RandomGradient {
    let rotation = Rotation::saturating(rng.random_range(0..Rotation::MAX));
    let count = rng.random_range(MIN_RANDOM_STOPS..=MAX_RANDOM_STOPS);

    let mut stops: Vec<ColorStop> = (0..count)
        .map(|i| ColorStop {
            id: ids.next_id(),
            color: random_hex(rng),
            position: spread.position(i, count),
        })
        .collect();
    // Ascending by position.
    stops.sort_by_key(|s| s.position);

    log::debug!(
        "random gradient: {} stops, rotation {}, spread {:?}",
        stops.len(),
        rotation,
        spread
    );
    RandomGradient { stops, rotation }
}
