//! Free-text custom system input
//!
//! The custom form has three fields: a luminosity, a comma-separated list of
//! semi-major axes and a comma-separated list of labels. Numbers are checked
//! before counts, and both before any geometry runs.

use crate::{ExplorerError, InputField, Result};
use tracing::debug;

/// Parsed custom system, used for a single plot and then dropped
#[derive(Debug, Clone, PartialEq)]
pub struct CustomInput {
    pub luminosity: f64,
    pub axes: Vec<f64>,
    pub labels: Vec<String>,
}

fn parse_number(field: InputField, token: &str) -> Result<f64> {
    let trimmed = token.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ExplorerError::InputParse {
            field,
            token: trimmed.to_string(),
        }),
    }
}

/// Luminosity in solar units
///
/// Only the number is checked here; positivity is a geometry concern.
pub fn parse_luminosity(text: &str) -> Result<f64> {
    parse_number(InputField::Luminosity, text)
}

/// Comma-separated semi-major axes in AU
pub fn parse_axes(text: &str) -> Result<Vec<f64>> {
    text.split(',')
        .map(|token| parse_number(InputField::Exoplanets, token))
        .collect()
}

/// Comma-separated planet labels
///
/// Never fails. An empty field yields a single empty label, so the count
/// check still applies.
pub fn parse_labels(text: &str) -> Vec<String> {
    text.split(',').map(|label| label.trim().to_string()).collect()
}

/// Inverse of [`parse_axes`]
pub fn format_axes(axes: &[f64]) -> String {
    axes.iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse all three custom input fields
pub fn parse_custom_input(luminosity: &str, exoplanets: &str, labels: &str) -> Result<CustomInput> {
    let luminosity = parse_luminosity(luminosity)?;
    let axes = parse_axes(exoplanets)?;
    let labels = parse_labels(labels);

    if axes.len() != labels.len() {
        return Err(ExplorerError::InputShape {
            axes: axes.len(),
            labels: labels.len(),
        });
    }

    debug!(
        "Parsed custom system: L={} with {} planets",
        luminosity,
        axes.len()
    );

    Ok(CustomInput {
        luminosity,
        axes,
        labels,
    })
}
