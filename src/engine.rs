//! Gradient engine: owns the stop list, type and rotation, and keeps the
//! derived CSS string current.
//!
//! Every mutation re-derives the gradient through [`derive_gradient`] and then
//! notifies the registered change handler with the new value. There is no
//! second copy of the state to keep in sync.

use std::fmt;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::color::normalize_hex;
use crate::error::{Error, Result};
use crate::export::ExportPayload;
use crate::gradient::{derive_gradient, GradientType, Rotation};
use crate::random::{random_gradient, PositionSpread, RandomGradient};
use crate::stop::{check_position, ColorStop, StopIds, StopUpdate};

type OnChangeHandler = Arc<dyn Fn(Option<&str>) + Send + Sync>;

/// Configuration for a [`GradientEngine`]
///
/// # Examples
///
/// ```
/// let cfg = gradientforge::EngineConfig::default();
/// assert_eq!(cfg.gradient_type, gradientforge::GradientType::Linear);
/// assert!(cfg.seed.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Initially selected gradient type
    pub gradient_type: GradientType,
    /// Initial rotation in degrees (0-360)
    pub rotation: u32,
    /// How `randomize` positions generated stops
    pub position_spread: PositionSpread,
    /// Seed for the engine's RNG; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            gradient_type: GradientType::Linear,
            rotation: 0,
            position_spread: PositionSpread::Verbatim,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.rotation > Rotation::MAX {
            return Err(Error::ConfigError(format!(
                "rotation {} exceeds {}",
                self.rotation,
                Rotation::MAX
            )));
        }
        Ok(())
    }

    /// Parses a JSON config; missing fields fall back to defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        let cfg: EngineConfig =
            serde_json::from_str(s).map_err(|e| Error::ConfigError(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

/// In-memory gradient editor state.
pub struct GradientEngine {
    stops: Vec<ColorStop>,
    gradient_type: GradientType,
    rotation: Rotation,
    gradient: Option<String>,
    ids: StopIds,
    spread: PositionSpread,
    rng: StdRng,
    on_change: Option<OnChangeHandler>,
}

impl GradientEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        log::debug!(
            "gradient engine created: type={}, rotation={}, spread={:?}, seeded={}",
            config.gradient_type.key(),
            config.rotation,
            config.position_spread,
            config.seed.is_some()
        );
        Ok(Self {
            stops: Vec::new(),
            gradient_type: config.gradient_type,
            rotation: Rotation::new(config.rotation)?,
            gradient: None,
            ids: StopIds::new(),
            spread: config.position_spread,
            rng,
            on_change: None,
        })
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    pub fn stop(&self, id: &str) -> Option<&ColorStop> {
        self.stops.iter().find(|s| s.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn gradient_type(&self) -> GradientType {
        self.gradient_type
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn position_spread(&self) -> PositionSpread {
        self.spread
    }

    /// Last derived gradient value; `None` while the stop list is empty.
    pub fn gradient(&self) -> Option<&str> {
        self.gradient.as_deref()
    }

    /// Appends a stop with a fresh id. Storage is not re-sorted.
    pub fn add_stop(&mut self, color: &str, position: u32) -> Result<ColorStop> {
        let color = normalize_hex(color)?;
        let position = check_position(position)?;
        let stop = ColorStop::new(self.ids.next_id(), color, position);
        log::debug!("add stop {} ({})", stop.id, stop.css());
        self.stops.push(stop.clone());
        self.refresh();
        Ok(stop)
    }

    /// Removes the stop with `id`. Returns `None` and leaves state untouched
    /// when no such stop exists.
    pub fn remove_stop(&mut self, id: &str) -> Option<ColorStop> {
        let Some(idx) = self.stops.iter().position(|s| s.id == id) else {
            log::debug!("remove stop {id}: not found");
            return None;
        };
        let removed = self.stops.remove(idx);
        log::debug!("removed stop {id}");
        self.refresh();
        Some(removed)
    }

    /// Edits the matching stop in place.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when `id` is absent; validation errors for a bad
    /// color or position. Nothing is changed on error.
    pub fn update_stop(&mut self, id: &str, update: StopUpdate) -> Result<ColorStop> {
        let color = update.color.as_deref().map(normalize_hex).transpose()?;
        let position = update.position.map(check_position).transpose()?;

        let stop = self
            .stops
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        if let Some(color) = color {
            stop.color = color;
        }
        if let Some(position) = position {
            stop.position = position;
        }
        let updated = stop.clone();
        log::debug!("updated stop {} ({})", updated.id, updated.css());
        self.refresh();
        Ok(updated)
    }

    /// Removes every stop.
    pub fn clear(&mut self) {
        self.stops.clear();
        self.refresh();
    }

    pub fn set_gradient_type(&mut self, gradient_type: GradientType) {
        self.gradient_type = gradient_type;
        self.refresh();
    }

    pub fn set_rotation(&mut self, degrees: u32) -> Result<()> {
        self.rotation = Rotation::new(degrees)?;
        self.refresh();
        Ok(())
    }

    /// Replaces stops and rotation with a random draw from the engine RNG and
    /// forces the type back to linear.
    pub fn randomize(&mut self) -> RandomGradient {
        let drawn = random_gradient(&mut self.rng, &mut self.ids, self.spread);
        self.apply_random(drawn)
    }

    /// Same as [`randomize`](Self::randomize) with a caller-supplied RNG.
    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R) -> RandomGradient {
        let drawn = random_gradient(rng, &mut self.ids, self.spread);
        self.apply_random(drawn)
    }

    fn apply_random(&mut self, drawn: RandomGradient) -> RandomGradient {
        self.stops = drawn.stops.clone();
        self.rotation = drawn.rotation;
        self.gradient_type = RandomGradient::GRADIENT_TYPE;
        log::info!(
            "randomized gradient: {} stops at {}",
            self.stops.len(),
            self.rotation
        );
        self.refresh();
        drawn
    }

    /// Export gate.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyState`] when there is nothing to export.
    pub fn request_copy(&self) -> Result<ExportPayload> {
        let Some(gradient) = self.gradient.clone() else {
            log::warn!("copy requested with no color stops");
            return Err(Error::EmptyState);
        };
        Ok(ExportPayload {
            gradient,
            stops: self.stops.clone(),
            gradient_type: self.gradient_type,
            rotation: self.rotation,
        })
    }

    /// Register a handler invoked with the new derived value after every
    /// successful mutation. Replaces any previous handler.
    pub fn on_change<F>(&mut self, cb: F)
    where
        F: Fn(Option<&str>) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(cb));
    }

    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }

    fn refresh(&mut self) {
        self.gradient = derive_gradient(&self.stops, self.gradient_type, self.rotation);
        log::trace!("derived gradient: {:?}", self.gradient);
        if let Some(cb) = &self.on_change {
            cb(self.gradient.as_deref());
        }
    }
}

impl Default for GradientEngine {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self {
            stops: Vec::new(),
            gradient_type: config.gradient_type,
            rotation: Rotation::default(),
            gradient: None,
            ids: StopIds::new(),
            spread: config.position_spread,
            rng: StdRng::from_os_rng(),
            on_change: None,
        }
    }
}

impl fmt::Debug for GradientEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GradientEngine")
            .field("stops", &self.stops)
            .field("gradient_type", &self.gradient_type)
            .field("rotation", &self.rotation)
            .field("gradient", &self.gradient)
            .field("spread", &self.spread)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn seeded() -> GradientEngine {
        GradientEngine::new(EngineConfig {
            seed: Some(1),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn default_config_is_valid() {
        let cfg = EngineConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.position_spread, PositionSpread::Verbatim);
    }

    #[test]
    fn config_rejects_rotation_out_of_range() {
        let cfg = EngineConfig {
            rotation: 400,
            ..Default::default()
        };
        assert!(matches!(GradientEngine::new(cfg), Err(Error::ConfigError(_))));
    }

    #[test]
    fn config_from_json_fills_defaults() {
        let cfg = EngineConfig::from_json(r#"{"gradient_type":"conic","seed":9}"#).unwrap();
        assert_eq!(cfg.gradient_type, GradientType::Conic);
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.rotation, 0);
        assert!(EngineConfig::from_json("{not json").is_err());
    }

    #[test]
    fn mutations_recompute_gradient() {
        let mut e = seeded();
        assert_eq!(e.gradient(), None);
        let a = e.add_stop("#FF0000", 0).unwrap();
        assert_eq!(a.color, "#ff0000");
        assert_eq!(e.gradient(), Some("#ff0000"));
        e.add_stop("#00ff00", 100).unwrap();
        e.set_rotation(45).unwrap();
        assert_eq!(
            e.gradient(),
            Some("linear-gradient(45deg, #ff0000 0%, #00ff00 100%)")
        );
        e.update_stop(&a.id, StopUpdate::position(20)).unwrap();
        assert_eq!(
            e.gradient(),
            Some("linear-gradient(45deg, #ff0000 20%, #00ff00 100%)")
        );
        e.set_gradient_type(GradientType::Radial);
        assert_eq!(e.gradient(), Some("radial-gradient(#ff0000 20%, #00ff00 100%)"));
        e.clear();
        assert_eq!(e.gradient(), None);
    }

    #[test]
    fn update_unknown_id_fails_without_change() {
        let mut e = seeded();
        e.add_stop("#123456", 0).unwrap();
        let before = e.gradient().map(str::to_string);
        let err = e.update_stop("item_99", StopUpdate::color("#000000")).unwrap_err();
        assert_eq!(err, Error::NotFound("item_99".into()));
        assert_eq!(e.gradient().map(str::to_string), before);
    }

    #[test]
    fn update_rejects_bad_input_before_lookup() {
        let mut e = seeded();
        let s = e.add_stop("#123456", 0).unwrap();
        assert!(matches!(
            e.update_stop(&s.id, StopUpdate::color("blue")),
            Err(Error::InvalidColor(_))
        ));
        assert_eq!(
            e.update_stop(&s.id, StopUpdate::position(150)),
            Err(Error::InvalidPosition(150))
        );
        assert_eq!(e.stop(&s.id).unwrap().position, 0);
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut e = seeded();
        e.add_stop("#123456", 0).unwrap();
        assert!(e.remove_stop("nope").is_none());
        assert_eq!(e.stops().len(), 1);
    }

    #[test]
    fn randomize_forces_linear() {
        let mut e = seeded();
        e.set_gradient_type(GradientType::RepeatingConic);
        let drawn = e.randomize();
        assert_eq!(e.gradient_type(), GradientType::Linear);
        assert_eq!(e.rotation(), drawn.rotation);
        assert_eq!(e.gradient(), Some(drawn.css().as_str()));
    }

    #[test]
    fn handler_sees_each_successful_mutation() {
        let seen: Arc<Mutex<Vec<Option<String>>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut e = seeded();
        e.on_change(move |g| sink.lock().unwrap().push(g.map(str::to_string)));

        let s = e.add_stop("#000000", 0).unwrap();
        let _ = e.update_stop("missing", StopUpdate::position(5));
        let _ = e.set_rotation(999);
        e.remove_stop(&s.id);

        let seen = seen.lock().unwrap();
        assert_eq!(*seen, vec![Some("#000000".to_string()), None]);
    }

    #[test]
    fn cleared_handler_is_not_called() {
        let count = Arc::new(Mutex::new(0));
        let c = count.clone();
        let mut e = seeded();
        e.on_change(move |_| *c.lock().unwrap() += 1);
        e.add_stop("#000000", 0).unwrap();
        e.clear_on_change();
        e.add_stop("#ffffff", 100).unwrap();
        assert_eq!(*count.lock().unwrap(), 1);
    }
}
