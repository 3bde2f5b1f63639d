//! Star Catalog Library
//!
//! Immutable catalog of exoplanet host stars. Each entry carries the stellar
//! parameters needed for habitable zone plots plus one record per planet.
//!
//! The built-in catalog is authored in the legacy parallel-array shape and
//! normalized by [`loader`] when the catalog is constructed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod loader;

/// Placeholder for planet attributes missing from a catalog entry
pub const UNKNOWN_FIELD: &str = "unknown";

/// Built-in catalog document
const BUILTIN_CATALOG_JSON: &str = include_str!("../data/catalog.json");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("System {system}: {axes} semi-major axes but {labels} planet labels")]
    MisalignedPlanets {
        system: String,
        axes: usize,
        labels: usize,
    },
    #[error("No valid star systems found")]
    Empty,
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// A single planet of a catalog entry
///
/// Only the semi-major axis is numeric. The remaining attributes are kept
/// exactly as catalogued ("-", "<0.1", ">7.3", "1,198.5", ...) and are only
/// ever displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetRecord {
    pub label: String,
    pub semi_major_axis_au: f64,
    pub eccentricity: String,
    pub status: String,
    pub mass: String,
    pub orbital_period_days: String,
}

/// A star system catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarSystem {
    pub name: String,
    /// Solar luminosities
    pub luminosity: f64,
    /// Solar radii
    pub radius: f64,
    /// Kelvin
    pub temperature: f64,
    /// Light years
    pub distance: f64,
    pub planets: Vec<PlanetRecord>,
}

impl StarSystem {
    /// Semi-major axes in catalog order
    pub fn semi_major_axes(&self) -> Vec<f64> {
        self.planets.iter().map(|p| p.semi_major_axis_au).collect()
    }

    /// Planet labels in catalog order
    pub fn planet_labels(&self) -> Vec<String> {
        self.planets.iter().map(|p| p.label.clone()).collect()
    }

    pub fn planet(&self, index: usize) -> Option<&PlanetRecord> {
        self.planets.get(index)
    }
}

/// Ordered, read-only collection of star systems
///
/// Entries are addressed by position, matching the order they were
/// catalogued in. Names are not unique.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    systems: Vec<StarSystem>,
}

impl Catalog {
    pub fn new(systems: Vec<StarSystem>) -> Self {
        Self { systems }
    }

    /// The catalog bundled with the crate
    pub fn builtin() -> Result<Self> {
        let systems = loader::parse_catalog(BUILTIN_CATALOG_JSON)?;
        Ok(Self::new(systems))
    }

    /// Load a catalog document from disk
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let systems = loader::load_catalog(path)?;
        Ok(Self::new(systems))
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&StarSystem> {
        self.systems.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StarSystem> {
        self.systems.iter()
    }

    /// System names in catalog order, as offered in a selection list
    pub fn names(&self) -> Vec<&str> {
        self.systems.iter().map(|s| s.name.as_str()).collect()
    }

    /// Position of the first system with this name (case-insensitive)
    pub fn position_by_name(&self, name: &str) -> Option<usize> {
        let wanted = name.trim();
        self.systems
            .iter()
            .position(|s| s.name.eq_ignore_ascii_case(wanted))
    }

    /// Resolve user text as either a catalog index or a system name
    pub fn resolve(&self, query: &str) -> Option<usize> {
        match query.trim().parse::<usize>() {
            Ok(index) if index < self.systems.len() => Some(index),
            Ok(_) => None,
            Err(_) => self.position_by_name(query),
        }
    }
}
