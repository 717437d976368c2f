//! gradientforge
//!
//! Builds CSS gradients from an ordered list of color stops, a gradient type
//! and a rotation, and exports the resulting declaration.
//!
//! # Features
//!
//! - **Derivation**: [`derive_gradient`] turns stops, type and rotation into a
//!   CSS `<gradient>` value
//! - **Editing**: [`GradientEngine`] owns the stop list and keeps the derived
//!   string current after every change
//! - **Shuffle**: [`GradientEngine::randomize`] draws a random linear gradient
//! - **Export**: [`GradientEngine::request_copy`] refuses to export an empty
//!   gradient and otherwise hands out an [`ExportPayload`]
//!
//! # Example
//!
//! ```
//! use gradientforge::{EngineConfig, GradientEngine};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut engine = GradientEngine::new(EngineConfig::default())?;
//! engine.add_stop("#ff0000", 0)?;
//! engine.add_stop("#00ff00", 100)?;
//! engine.set_rotation(45)?;
//!
//! let payload = engine.request_copy()?;
//! assert_eq!(
//!     payload.to_string(),
//!     "background: linear-gradient(45deg, #ff0000 0%, #00ff00 100%);"
//! );
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod color;
pub mod engine;
pub mod export;
pub mod gradient;
pub mod logging;
pub mod random;
pub mod stop;

pub use engine::{EngineConfig, GradientEngine};
pub use export::{CssProperty, ExportPayload};
pub use gradient::{derive_gradient, GradientType, Rotation, POSITION_PRESETS};
pub use random::{random_gradient, PositionSpread, RandomGradient};
pub use stop::{ColorStop, StopIds, StopUpdate};
