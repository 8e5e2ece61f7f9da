use std::f64::consts::PI;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::engine::{
    collision::{Collider, ColliderTag},
    error::ConfigError,
};

/// Periodic motion applied to the container center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MotionPreset {
    #[default]
    Static,
    /// Up and down along y
    Vertical,
    /// Both axes in phase
    Diagonal,
    /// x half a period behind y
    AntiDiagonal,
}

impl MotionPreset {
    pub fn index(&self) -> u8 {
        match self {
            MotionPreset::Static => 0,
            MotionPreset::Vertical => 1,
            MotionPreset::Diagonal => 2,
            MotionPreset::AntiDiagonal => 3,
        }
    }
}

impl TryFrom<u8> for MotionPreset {
    type Error = ConfigError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(MotionPreset::Static),
            1 => Ok(MotionPreset::Vertical),
            2 => Ok(MotionPreset::Diagonal),
            3 => Ok(MotionPreset::AntiDiagonal),
            other => Err(ConfigError::UnknownMotionPreset(other)),
        }
    }
}

impl From<MotionPreset> for u8 {
    fn from(preset: MotionPreset) -> Self {
        preset.index()
    }
}

/// The circle every body is kept inside.
#[derive(Debug, Clone)]
pub struct Boundary {
    collider: Collider,
    pub origin: DVec2,
    pub wiggle_magnitude: f64,
    pub wiggle_speed: f64,
    pub motion: MotionPreset,
}

impl Boundary {
    pub fn new(x: f64, y: f64, radius: f64, wiggle_magnitude: f64, wiggle_speed: f64) -> Self {
        Self {
            collider: Collider::new_circle(x, y, radius, ColliderTag::Container),
            origin: DVec2::new(x, y),
            wiggle_magnitude,
            wiggle_speed,
            motion: MotionPreset::Static,
        }
    }

    pub fn with_motion(mut self, motion: MotionPreset) -> Self {
        self.motion = motion;
        self
    }

    pub fn collider(&self) -> &Collider {
        &self.collider
    }

    pub fn position(&self) -> DVec2 {
        self.collider.position
    }

    pub fn radius(&self) -> f64 {
        self.collider.radius()
    }

    /// Center for `frame` under the current preset, computed from the
    /// undisturbed origin.
    pub fn center_at(&self, frame: u64) -> DVec2 {
        let phase = frame as f64 / PI * self.wiggle_speed;
        let offset = phase.sin() * self.wiggle_magnitude;

        match self.motion {
            MotionPreset::Static => self.origin,
            MotionPreset::Vertical => DVec2::new(self.origin.x, self.origin.y - offset),
            MotionPreset::Diagonal => {
                DVec2::new(self.origin.x + offset, self.origin.y + offset)
            }
            MotionPreset::AntiDiagonal => DVec2::new(
                self.origin.x - (PI + phase).sin() * self.wiggle_magnitude,
                self.origin.y - offset,
            ),
        }
    }

    /// Move the container to its position for `frame`.
    pub fn update(&mut self, frame: u64) {
        self.collider.position = self.center_at(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wiggling(motion: MotionPreset) -> Boundary {
        Boundary::new(10.0, -20.0, 30000.0, 4000.0, 0.5).with_motion(motion)
    }

    #[test]
    fn static_preset_stays_at_origin() {
        let mut boundary = wiggling(MotionPreset::Static);
        for frame in [0, 7, 1234] {
            boundary.update(frame);
            assert_eq!(boundary.position(), DVec2::new(10.0, -20.0));
        }
    }

    #[test]
    fn vertical_preset_only_moves_y() {
        let mut boundary = wiggling(MotionPreset::Vertical);
        boundary.update(3);

        let expected = (3.0 / PI * 0.5).sin() * 4000.0;
        assert_eq!(boundary.position().x, 10.0);
        assert_eq!(boundary.position().y, -20.0 - expected);
    }

    #[test]
    fn diagonal_moves_both_axes_in_phase() {
        let mut boundary = wiggling(MotionPreset::Diagonal);
        boundary.update(5);

        let offset = boundary.position() - boundary.origin;
        assert!(offset.x != 0.0);
        assert!((offset.x - offset.y).abs() < 1e-9);
    }

    #[test]
    fn anti_diagonal_moves_axes_in_opposition() {
        let mut boundary = wiggling(MotionPreset::AntiDiagonal);
        boundary.update(5);

        let offset = boundary.position() - boundary.origin;
        assert!(offset.y != 0.0);
        assert!((offset.x + offset.y).abs() < 1e-9);
    }

    #[test]
    fn update_is_a_pure_function_of_frame() {
        let mut boundary = wiggling(MotionPreset::AntiDiagonal);
        boundary.update(42);
        let first = boundary.position();

        boundary.update(43);
        boundary.update(42);
        assert_eq!(boundary.position(), first);
    }

    #[test]
    fn switching_back_to_static_recenters() {
        let mut boundary = wiggling(MotionPreset::Diagonal);
        boundary.update(9);
        assert_ne!(boundary.position(), boundary.origin);

        boundary.motion = MotionPreset::Static;
        boundary.update(10);
        assert_eq!(boundary.position(), boundary.origin);
    }

    #[test]
    fn preset_indices_round_trip() {
        for index in 0..=3u8 {
            let preset = MotionPreset::try_from(index).unwrap();
            assert_eq!(u8::from(preset), index);
        }
        assert!(matches!(
            MotionPreset::try_from(4),
            Err(ConfigError::UnknownMotionPreset(4))
        ));
    }
}
