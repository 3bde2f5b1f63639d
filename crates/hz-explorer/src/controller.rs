//! Selection, detail and plot dispatch
//!
//! The controller owns the catalog and the renderer, and holds the only
//! mutable state in the program: what the user currently sees.

use crate::details::{format_planet_details, format_system_details};
use crate::input::parse_custom_input;
use crate::render::Renderer;
use crate::{ExplorerError, Result, Selection};
use habitable_zone::scene::DEFAULT_TITLE;
use habitable_zone::{assemble_scene, Scene};
use star_catalog::{Catalog, StarSystem};
use tracing::{debug, info};

/// Text and choices currently on display
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayState {
    pub system_details: String,
    /// Labels offered for planet selection
    pub planet_choices: Vec<String>,
    pub planet_details: String,
    /// Catalog index of the system the choices belong to
    pub current_system: Option<usize>,
}

pub struct Controller<R: Renderer> {
    catalog: Catalog,
    renderer: R,
    display: DisplayState,
}

impl<R: Renderer> Controller<R> {
    pub fn new(catalog: Catalog, renderer: R) -> Self {
        Self {
            catalog,
            renderer,
            display: DisplayState::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn current_system(&self) -> Option<&StarSystem> {
        self.display
            .current_system
            .and_then(|index| self.catalog.get(index))
    }

    /// Show a catalog system: details, planet choices and its diagram
    pub fn select_system(&mut self, selection: Option<usize>) -> Result<Scene> {
        let index = selection.ok_or(ExplorerError::SelectionMissing(Selection::System))?;
        let system = self
            .catalog
            .get(index)
            .ok_or(ExplorerError::UnknownSystem {
                index,
                len: self.catalog.len(),
            })?;

        let scene = assemble_scene(
            &format!("{} ({})", DEFAULT_TITLE, system.name),
            system.luminosity,
            &system.semi_major_axes(),
            &system.planet_labels(),
        )?;

        info!(
            "Selected {} (L={} L☉, {} planets)",
            system.name,
            system.luminosity,
            system.planets.len()
        );

        let display = DisplayState {
            system_details: format_system_details(system),
            planet_choices: system.planet_labels(),
            planet_details: String::new(),
            current_system: Some(index),
        };

        self.renderer.show(&scene)?;
        self.display = display;
        Ok(scene)
    }

    /// Show the details of one planet of the current system
    pub fn select_planet(&mut self, selection: Option<usize>) -> Result<&str> {
        let missing = ExplorerError::SelectionMissing(Selection::Planet);
        let index = selection.ok_or(missing)?;
        let system = self
            .current_system()
            .ok_or(ExplorerError::SelectionMissing(Selection::System))?;
        let planet = system.planet(index).ok_or(ExplorerError::UnknownPlanet {
            index,
            len: system.planets.len(),
        })?;

        debug!("Selected planet {} of {}", planet.label, system.name);

        self.display.planet_details = format_planet_details(planet);
        Ok(&self.display.planet_details)
    }

    /// Plot a transient system typed in by the user
    ///
    /// The catalog and the display state are left as they are.
    pub fn plot_custom(&mut self, luminosity: &str, exoplanets: &str, labels: &str) -> Result<Scene> {
        let input = parse_custom_input(luminosity, exoplanets, labels)?;
        let scene = assemble_scene("", input.luminosity, &input.axes, &input.labels)?;

        info!(
            "Plotting custom system (L={} L☉, {} planets)",
            input.luminosity,
            input.axes.len()
        );

        self.renderer.show(&scene)?;
        Ok(scene)
    }
}
