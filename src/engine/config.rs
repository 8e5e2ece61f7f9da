//! Simulation configuration.
//!
//! [`SimulationConfig`] holds everything needed to build a fresh world: the
//! container, its wiggle, and the body population. It can be built in code
//! with the `with_*` methods or loaded from YAML:
//!
//! ```yaml
//! boundary_radius: 30000.0
//! wiggle_magnitude: 4000.0
//! wiggle_speed: 0.5
//! motion_preset: 2        # 0 static, 1 vertical, 2 diagonal, 3 anti-diagonal
//! body_count: 40
//! big_ratio: 0.1          # share of bodies that get `big_radius`
//! small_radius: 1000.0
//! big_radius: 2000.0
//! spawn_area: 500.0       # bodies spawn in [-spawn_area, spawn_area] on each axis
//! gravity: 49.05
//! seed: 7                 # optional, omit for a random layout
//! ```
//!
//! Missing keys fall back to the defaults.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::engine::{error::ConfigError, physics::boundary::MotionPreset};

pub const GRAVITY: f64 = 9.81 * 5.0;
pub const OBJ_MIN_RADIUS: f64 = 1000.0;
pub const CONTAINER_RADIUS: f64 = 30000.0;
pub const CONTAINER_WIGGLE_MAG: f64 = 4000.0;
pub const CONTAINER_WIGGLE_SPEED: f64 = 0.5;
pub const SPAWN_AREA: f64 = 500.0;
pub const RATIO: f64 = 0.10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub boundary_radius: f64,
    pub wiggle_magnitude: f64,
    pub wiggle_speed: f64,
    pub motion_preset: MotionPreset,

    pub body_count: usize,
    pub big_ratio: f64,
    pub small_radius: f64,
    pub big_radius: f64,
    pub spawn_area: f64,

    pub gravity: f64, // added to velocity.y every frame, +y points down
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            boundary_radius: CONTAINER_RADIUS,
            wiggle_magnitude: CONTAINER_WIGGLE_MAG,
            wiggle_speed: CONTAINER_WIGGLE_SPEED,
            motion_preset: MotionPreset::Static,
            body_count: 40,
            big_ratio: RATIO,
            small_radius: OBJ_MIN_RADIUS,
            big_radius: OBJ_MIN_RADIUS * 2.0,
            spawn_area: SPAWN_AREA,
            gravity: GRAVITY,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_boundary(mut self, radius: f64) -> Self {
        self.boundary_radius = radius;
        self
    }

    pub fn with_wiggle(mut self, magnitude: f64, speed: f64) -> Self {
        self.wiggle_magnitude = magnitude;
        self.wiggle_speed = speed;
        self
    }

    pub fn with_motion(mut self, preset: MotionPreset) -> Self {
        self.motion_preset = preset;
        self
    }

    pub fn with_population(mut self, count: usize, big_ratio: f64) -> Self {
        self.body_count = count;
        self.big_ratio = big_ratio;
        self
    }

    pub fn with_radii(mut self, small: f64, big: f64) -> Self {
        self.small_radius = small;
        self.big_radius = big;
        self
    }

    pub fn with_spawn_area(mut self, spawn_area: f64) -> Self {
        self.spawn_area = spawn_area;
        self
    }

    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of bodies that get the big radius.
    pub fn big_count(&self) -> usize {
        (0..self.body_count).filter(|&i| self.is_big(i)).count()
    }

    /// The first `body_count * big_ratio` bodies are big.
    pub fn is_big(&self, index: usize) -> bool {
        (index as f64) < self.body_count as f64 * self.big_ratio
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("boundary_radius", self.boundary_radius)?;
        non_negative("wiggle_magnitude", self.wiggle_magnitude)?;
        finite("wiggle_speed", self.wiggle_speed)?;
        non_negative("small_radius", self.small_radius)?;
        non_negative("big_radius", self.big_radius)?;
        non_negative("spawn_area", self.spawn_area)?;
        finite("gravity", self.gravity)?;

        if !(0.0..=1.0).contains(&self.big_ratio) {
            return Err(ConfigError::InvalidValue {
                field: "big_ratio",
                value: self.big_ratio,
                reason: "must be between 0 and 1",
            });
        }
        Ok(())
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let config: SimulationConfig = serde_yaml::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            value,
            reason: "must be finite",
        })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::InvalidValue {
            field,
            value,
            reason: "must not be negative",
        });
    }
    Ok(())
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(ConfigError::InvalidValue {
            field,
            value,
            reason: "must be greater than zero",
        });
    }
    Ok(())
}

/// Raw values from the control panel of a front end.
///
/// Sizes are slider positions: a container size of 50 maps to
/// [`CONTAINER_RADIUS`] and a body size of 25 maps to [`OBJ_MIN_RADIUS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlSettings {
    pub container_size: f64,
    pub ratio_percent: f64,
    pub quantity: usize,
    pub small_size: f64,
    pub big_size: f64,
    pub motion_type: u8,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            container_size: 50.0,
            ratio_percent: RATIO * 100.0,
            quantity: 40,
            small_size: 25.0,
            big_size: 50.0,
            motion_type: 0,
        }
    }
}

impl ControlSettings {
    pub fn into_config(self) -> Result<SimulationConfig, ConfigError> {
        let config = SimulationConfig::default()
            .with_boundary(self.container_size / 50.0 * CONTAINER_RADIUS)
            .with_population(self.quantity, self.ratio_percent / 100.0)
            .with_radii(
                self.small_size / 25.0 * OBJ_MIN_RADIUS,
                self.big_size / 25.0 * OBJ_MIN_RADIUS,
            )
            .with_motion(MotionPreset::try_from(self.motion_type)?);

        config.validate()?;
        Ok(config)
    }
}
