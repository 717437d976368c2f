//! Export payload handed to copy/export surfaces.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::gradient::{GradientType, Rotation};
use crate::stop::ColorStop;

/// CSS property the exported declaration targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CssProperty {
    #[default]
    Background,
    BackgroundImage,
}

impl CssProperty {
    pub fn name(self) -> &'static str {
        match self {
            CssProperty::Background => "background",
            CssProperty::BackgroundImage => "background-image",
        }
    }
}

/// Snapshot of a non-empty gradient, ready to be copied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportPayload {
    /// The derived gradient value, identical to the engine's cached string
    pub gradient: String,
    pub stops: Vec<ColorStop>,
    pub gradient_type: GradientType,
    pub rotation: Rotation,
}

impl ExportPayload {
    /// `"<property>: <gradient>;"`
    pub fn declaration(&self, property: CssProperty) -> String {
        format!("{}: {};", property.name(), self.gradient)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for ExportPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.declaration(CssProperty::Background))
    }
}
