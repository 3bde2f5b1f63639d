//! Diagram scene assembly
//!
//! A [`Scene`] is everything a renderer needs: two zone disks (outer first,
//! inner drawn over it), the star at the origin, labelled planet markers and
//! fixed axis bounds.

use crate::{layout_planets, HabitableZone, PlanetPosition, Result};
use serde::{Deserialize, Serialize};

/// Half-width of the square display window in AU
///
/// Fixed regardless of data scale. Zones or orbits beyond it are clipped.
pub const DISPLAY_BOUND_AU: f64 = 3.0;

/// Radius of the star marker in AU
pub const STAR_MARKER_RADIUS_AU: f64 = 0.03;

/// Horizontal offset of a planet label from its marker in AU
pub const LABEL_OFFSET_AU: f64 = 0.1;

pub const DEFAULT_TITLE: &str = "Exoplanets and Habitable Zone";
pub const AXIS_TITLE: &str = "AU (Astronomical Units)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneKind {
    Outer,
    Inner,
}

impl ZoneKind {
    pub fn legend_label(&self) -> &'static str {
        match self {
            ZoneKind::Outer => "Outer HZ",
            ZoneKind::Inner => "Inner HZ",
        }
    }
}

/// Filled disk centred on the star
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneDisk {
    pub kind: ZoneKind,
    pub radius_au: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarMarker {
    pub radius_au: f64,
}

impl StarMarker {
    pub fn legend_label(&self) -> &'static str {
        "Star"
    }
}

/// Square axis window, identical on x and y
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    pub fn symmetric(half_width: f64) -> Self {
        Self {
            min: -half_width,
            max: half_width,
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.min..=self.max).contains(&x) && (self.min..=self.max).contains(&y)
    }
}

impl Default for AxisBounds {
    fn default() -> Self {
        Self::symmetric(DISPLAY_BOUND_AU)
    }
}

/// Renderable habitable zone diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub title: String,
    pub luminosity: f64,
    pub habitable_zone: HabitableZone,
    /// Draw order: outer then inner
    pub zones: Vec<ZoneDisk>,
    pub star: StarMarker,
    pub planets: Vec<PlanetPosition>,
    pub bounds: AxisBounds,
    pub axis_title: String,
    pub label_offset_au: f64,
}

impl Scene {
    /// Planets whose marker falls outside the display window
    pub fn clipped_planets(&self) -> impl Iterator<Item = &PlanetPosition> {
        self.planets
            .iter()
            .filter(move |p| !self.bounds.contains(p.x, p.y))
    }

    /// Where a planet's label is anchored, if the anchor is inside the window
    pub fn label_position(&self, planet: &PlanetPosition) -> Option<(f64, f64)> {
        let x = planet.x + self.label_offset_au;
        self.bounds.contains(x, planet.y).then_some((x, planet.y))
    }
}

/// Build the diagram for a star of the given luminosity and its planets
pub fn assemble_scene<S: AsRef<str>>(
    title: &str,
    luminosity: f64,
    axes: &[f64],
    labels: &[S],
) -> Result<Scene> {
    let habitable_zone = HabitableZone::from_luminosity(luminosity)?;
    let planets = layout_planets(axes, labels)?;

    let title = match title.trim() {
        "" => DEFAULT_TITLE.to_string(),
        t => t.to_string(),
    };

    Ok(Scene {
        title,
        luminosity,
        habitable_zone,
        zones: vec![
            ZoneDisk {
                kind: ZoneKind::Outer,
                radius_au: habitable_zone.outer_radius_au,
            },
            ZoneDisk {
                kind: ZoneKind::Inner,
                radius_au: habitable_zone.inner_radius_au,
            },
        ],
        star: StarMarker {
            radius_au: STAR_MARKER_RADIUS_AU,
        },
        planets,
        bounds: AxisBounds::default(),
        axis_title: AXIS_TITLE.to_string(),
        label_offset_au: LABEL_OFFSET_AU,
    })
}
