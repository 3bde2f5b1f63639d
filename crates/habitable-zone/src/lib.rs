//! Habitable Zone Geometry
//!
//! Conservative habitable zone radii from stellar luminosity, an even-angle
//! display layout for planets, and assembly of the diagram scene.
//!
//! Habitable zone distance scales with the square root of luminosity:
//!
//! ```text
//! d_inner = 0.95 · √L      (runaway greenhouse)
//! d_outer = 1.37 · √L      (maximum greenhouse)
//! ```
//!
//! Planet positions are a display convenience only. Index order becomes
//! angular order and the semi-major axis becomes the radial coordinate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod scene;

pub use layout::{layout_planets, PlanetPosition};
pub use scene::{assemble_scene, AxisBounds, Scene, StarMarker, ZoneDisk, ZoneKind};

/// Inner edge coefficient in AU per √L☉ (9 decimal precision)
pub const INNER_HZ_COEFFICIENT: f64 = 0.950000000;

/// Outer edge coefficient in AU per √L☉ (9 decimal precision)
pub const OUTER_HZ_COEFFICIENT: f64 = 1.370000000;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Luminosity must be a positive number of solar luminosities, got {0}")]
    NonPositiveLuminosity(f64),
    #[error("At least one planet is required to lay out a system")]
    NoPlanets,
    #[error("Got {axes} semi-major axes but {labels} labels")]
    LengthMismatch { axes: usize, labels: usize },
    #[error("Semi-major axis of planet {index} must be positive, got {value}")]
    NonPositiveAxis { index: usize, value: f64 },
}

pub type Result<T> = std::result::Result<T, GeometryError>;

/// Inner and outer habitable zone boundaries in AU
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HabitableZone {
    pub inner_radius_au: f64,
    pub outer_radius_au: f64,
}

impl HabitableZone {
    pub fn from_luminosity(luminosity: f64) -> Result<Self> {
        if !luminosity.is_finite() || luminosity <= 0.0 {
            return Err(GeometryError::NonPositiveLuminosity(luminosity));
        }

        let root = luminosity.sqrt();
        Ok(Self {
            inner_radius_au: INNER_HZ_COEFFICIENT * root,
            outer_radius_au: OUTER_HZ_COEFFICIENT * root,
        })
    }

    /// Whether an orbit at this distance falls inside the band
    pub fn contains(&self, semi_major_axis_au: f64) -> bool {
        (self.inner_radius_au..=self.outer_radius_au).contains(&semi_major_axis_au)
    }

    pub fn width_au(&self) -> f64 {
        self.outer_radius_au - self.inner_radius_au
    }
}

pub mod layout {
    use super::*;

    /// Display position of one planet
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct PlanetPosition {
        pub label: String,
        pub semi_major_axis_au: f64,
        pub angle_deg: f64,
        pub x: f64,
        pub y: f64,
    }

    /// Spread planets evenly around a full turn, starting on the +x axis
    pub fn layout_planets<S: AsRef<str>>(axes: &[f64], labels: &[S]) -> Result<Vec<PlanetPosition>> {
        if axes.len() != labels.len() {
            return Err(GeometryError::LengthMismatch {
                axes: axes.len(),
                labels: labels.len(),
            });
        }
        if axes.is_empty() {
            return Err(GeometryError::NoPlanets);
        }
        if let Some((index, &value)) = axes
            .iter()
            .enumerate()
            .find(|(_, a)| !a.is_finite() || **a <= 0.0)
        {
            return Err(GeometryError::NonPositiveAxis { index, value });
        }

        let angle_step = 360.0 / axes.len() as f64;

        Ok(axes
            .iter()
            .zip(labels)
            .enumerate()
            .map(|(i, (&a, label))| {
                let angle_deg = i as f64 * angle_step;
                let theta = angle_deg.to_radians();
                PlanetPosition {
                    label: label.as_ref().to_string(),
                    semi_major_axis_au: a,
                    angle_deg,
                    x: a * theta.cos(),
                    y: a * theta.sin(),
                }
            })
            .collect())
    }
}
