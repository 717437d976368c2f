//! Gradient types, rotation presets and CSS string derivation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::stop::ColorStop;

/// CSS gradient function variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientType {
    #[default]
    Linear,
    Radial,
    Conic,
    RepeatingLinear,
    RepeatingRadial,
    RepeatingConic,
}

impl GradientType {
    /// All variants, in selector order.
    pub const ALL: [GradientType; 6] = [
        GradientType::Linear,
        GradientType::Radial,
        GradientType::Conic,
        GradientType::RepeatingLinear,
        GradientType::RepeatingRadial,
        GradientType::RepeatingConic,
    ];

    /// 1-based position in the selector.
    pub fn id(self) -> u8 {
        match self {
            GradientType::Linear => 1,
            GradientType::Radial => 2,
            GradientType::Conic => 3,
            GradientType::RepeatingLinear => 4,
            GradientType::RepeatingRadial => 5,
            GradientType::RepeatingConic => 6,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            GradientType::Linear => "Linear",
            GradientType::Radial => "Radial",
            GradientType::Conic => "Conic",
            GradientType::RepeatingLinear => "Repeating Linear",
            GradientType::RepeatingRadial => "Repeating Radial",
            GradientType::RepeatingConic => "Repeating Conic",
        }
    }

    /// Short key accepted by [`FromStr`] and used by serde.
    pub fn key(self) -> &'static str {
        match self {
            GradientType::Linear => "linear",
            GradientType::Radial => "radial",
            GradientType::Conic => "conic",
            GradientType::RepeatingLinear => "repeating-linear",
            GradientType::RepeatingRadial => "repeating-radial",
            GradientType::RepeatingConic => "repeating-conic",
        }
    }

    /// Literal CSS function name.
    pub fn css_function(self) -> &'static str {
        match self {
            GradientType::Linear => "linear-gradient",
            GradientType::Radial => "radial-gradient",
            GradientType::Conic => "conic-gradient",
            GradientType::RepeatingLinear => "repeating-linear-gradient",
            GradientType::RepeatingRadial => "repeating-radial-gradient",
            GradientType::RepeatingConic => "repeating-conic-gradient",
        }
    }

    /// Argument prefix carrying the rotation, if this variant uses one.
    fn rotation_prefix(self, rotation: Rotation) -> Option<String> {
        match self {
            GradientType::Linear | GradientType::RepeatingLinear => {
                Some(format!("{}deg, ", rotation.degrees()))
            }
            GradientType::Conic | GradientType::RepeatingConic => {
                Some(format!("from {}deg, ", rotation.degrees()))
            }
            GradientType::Radial | GradientType::RepeatingRadial => None,
        }
    }

    pub fn uses_rotation(self) -> bool {
        !matches!(self, GradientType::Radial | GradientType::RepeatingRadial)
    }
}

impl fmt::Display for GradientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for GradientType {
    type Err = Error;

    /// Accepts the short key (`repeating-conic`) or the CSS function name
    /// (`repeating-conic-gradient`), case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        let key = lower.strip_suffix("-gradient").unwrap_or(&lower);
        GradientType::ALL
            .into_iter()
            .find(|t| t.key() == key)
            .ok_or_else(|| Error::UnknownGradientType(s.to_string()))
    }
}

/// Gradient rotation in whole degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rotation(u32);

impl Rotation {
    pub const MAX: u32 = 360;

    /// Selector presets, 0 to 360 in 45 degree steps.
    pub const PRESETS: [Rotation; 9] = [
        Rotation(0),
        Rotation(45),
        Rotation(90),
        Rotation(135),
        Rotation(180),
        Rotation(225),
        Rotation(270),
        Rotation(315),
        Rotation(360),
    ];

    pub fn new(degrees: u32) -> Result<Self> {
        if degrees > Self::MAX {
            return Err(Error::InvalidRotation(degrees));
        }
        Ok(Rotation(degrees))
    }

    /// Clamps into `0..=360` instead of failing.
    pub fn saturating(degrees: u32) -> Self {
        Rotation(degrees.min(Self::MAX))
    }

    pub fn degrees(self) -> u32 {
        self.0
    }

    pub fn is_preset(self) -> bool {
        Self::PRESETS.contains(&self)
    }

    /// Selector label, e.g. `45°`.
    pub fn label(self) -> String {
        format!("{}°", self.0)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}deg", self.0)
    }
}

/// Stop position presets offered by stop editors (percent).
pub const POSITION_PRESETS: [u32; 11] = [0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100];

/// Derives the CSS `<gradient>` value for a stop list.
///
/// Returns `None` for an empty list. A single stop degenerates to its flat
/// color. Otherwise stops are emitted in list order, not sorted.
pub fn derive_gradient(
    stops: &[ColorStop],
    gradient_type: GradientType,
    rotation: Rotation,
) -> Option<String> {
    match stops {
        [] => None,
        [only] => Some(only.color.clone()),
        _ => {
            let stop_list = stops
                .iter()
                .map(ColorStop::css)
                .collect::<Vec<_>>()
                .join(", ");
            let prefix = gradient_type.rotation_prefix(rotation).unwrap_or_default();
            Some(format!(
                "{}({}{})",
                gradient_type.css_function(),
                prefix,
                stop_list
            ))
        }
    }
}
