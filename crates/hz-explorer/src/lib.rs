//! Habitable Zone Explorer
//!
//! Presentation layer between a user and the habitable zone geometry:
//! catalog selection, free-text custom systems, detail text and diagram
//! rendering.
//!
//! ```text
//! selection / custom text ──► Controller ──► assemble_scene ──► Renderer::show
//!                                  │
//!                                  └──► DisplayState (details, planet choices)
//! ```
//!
//! Every action runs synchronously and either completes or fails with an
//! [`ExplorerError`] that leaves the display state untouched.

use habitable_zone::GeometryError;
use star_catalog::CatalogError;
use std::fmt;
use thiserror::Error;

pub mod controller;
pub mod details;
pub mod input;
pub mod render;
pub mod session;

pub use controller::{Controller, DisplayState};
pub use input::CustomInput;
pub use render::{FileRenderer, RecordingRenderer, RenderConfig, Renderer};

/// Which list a missing selection refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    System,
    Planet,
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::System => write!(f, "a planetary system"),
            Selection::Planet => write!(f, "an exoplanet"),
        }
    }
}

/// Free-text field of the custom input form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Luminosity,
    Exoplanets,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputField::Luminosity => write!(f, "luminosity"),
            InputField::Exoplanets => write!(f, "exoplanets"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("Please select {0}.")]
    SelectionMissing(Selection),
    #[error("No planetary system at index {index} (catalog has {len})")]
    UnknownSystem { index: usize, len: usize },
    #[error("No planetary system named {0:?}")]
    SystemNotFound(String),
    #[error("No exoplanet at index {index} (system has {len})")]
    UnknownPlanet { index: usize, len: usize },
    #[error("No exoplanet labelled {0:?}")]
    PlanetNotFound(String),
    #[error("Invalid input. Please enter valid numbers ({field}: {token:?})")]
    InputParse { field: InputField, token: String },
    #[error("Number of exoplanets and labels must match ({axes} exoplanets, {labels} labels)")]
    InputShape { axes: usize, labels: usize },
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Render error: {0}")]
    Render(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExplorerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_messages() {
        assert_eq!(
            ExplorerError::SelectionMissing(Selection::System).to_string(),
            "Please select a planetary system."
        );
        assert_eq!(
            ExplorerError::SelectionMissing(Selection::Planet).to_string(),
            "Please select an exoplanet."
        );
    }

    #[test]
    fn test_geometry_errors_are_transparent() {
        let err: ExplorerError = GeometryError::NoPlanets.into();
        assert_eq!(err.to_string(), GeometryError::NoPlanets.to_string());
    }
}
