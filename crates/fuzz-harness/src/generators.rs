//! Strategies for property-based testing of habitable zone inputs

use proptest::collection::SizeRange;
use proptest::prelude::*;

// ============================================================================
// Stellar Generators
// ============================================================================

/// Luminosity in solar units, red dwarf to bright F star (1e-4 to 10 L☉)
pub fn luminosity() -> impl Strategy<Value = f64> {
    1.0e-4f64..10.0
}

/// Luminosity outside the physical range (zero or negative)
pub fn non_positive_luminosity() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0f64), -10.0f64..0.0]
}

// ============================================================================
// Planet Generators
// ============================================================================

/// Semi-major axis in AU (0.005 to 50 AU)
pub fn semi_major_axis() -> impl Strategy<Value = f64> {
    0.005f64..50.0
}

/// Planet label without separators or surrounding whitespace
pub fn planet_label() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9.-]{0,11}".prop_map(|s| s.to_string())
}

/// Index-aligned axes and labels for a system with `planets` planets
pub fn planet_system(
    planets: impl Into<SizeRange>,
) -> impl Strategy<Value = (Vec<f64>, Vec<String>)> {
    prop::collection::vec((semi_major_axis(), planet_label()), planets)
        .prop_map(|pairs| pairs.into_iter().unzip())
}

// ============================================================================
// Custom Input Generators
// ============================================================================

/// Free-text custom input as typed into the three entry fields
#[derive(Debug, Clone)]
pub struct CustomInputText {
    pub luminosity: String,
    pub exoplanets: String,
    pub labels: String,
}

/// Well-formed custom input with matching counts
pub fn custom_input() -> impl Strategy<Value = CustomInputText> {
    (luminosity(), planet_system(1..=8)).prop_map(|(l, (axes, labels))| CustomInputText {
        luminosity: l.to_string(),
        exoplanets: join(&axes),
        labels: labels.join(","),
    })
}

/// Custom input whose axis and label counts differ
pub fn mismatched_custom_input() -> impl Strategy<Value = CustomInputText> {
    (
        luminosity(),
        prop::collection::vec(semi_major_axis(), 1..=8),
        prop::collection::vec(planet_label(), 1..=8),
    )
        .prop_filter("counts must differ", |(_, axes, labels)| {
            axes.len() != labels.len()
        })
        .prop_map(|(l, axes, labels)| CustomInputText {
            luminosity: l.to_string(),
            exoplanets: join(&axes),
            labels: labels.join(","),
        })
}

/// Custom input with one axis replaced by a non-numeric token
pub fn malformed_axis_input() -> impl Strategy<Value = (CustomInputText, usize)> {
    (planet_system(1..=8), "[g-z]{1,4}", any::<prop::sample::Index>()).prop_map(
        |((axes, labels), token, bad)| {
            let bad = bad.index(axes.len());
            let tokens: Vec<String> = axes
                .iter()
                .enumerate()
                .map(|(i, a)| if i == bad { token.clone() } else { a.to_string() })
                .collect();
            (
                CustomInputText {
                    luminosity: "1.0".to_string(),
                    exoplanets: tokens.join(","),
                    labels: labels.join(","),
                },
                bad,
            )
        },
    )
}

// ============================================================================
// Utility Functions
// ============================================================================

fn join(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
