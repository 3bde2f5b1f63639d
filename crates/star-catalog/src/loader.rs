//! Catalog loading from JSON documents
//!
//! Catalog documents use the legacy authoring shape: stellar parameters plus
//! parallel per-planet arrays keyed only by position. Loading zips those
//! arrays into [`PlanetRecord`]s.
//!
//! Alignment policy:
//! - the planet count is the number of semi-major axes
//! - labels must match that count, otherwise the entry is skipped
//! - a missing display attribute becomes [`UNKNOWN_FIELD`]
//! - surplus display attributes are dropped

use crate::{CatalogError, PlanetRecord, Result, StarSystem, UNKNOWN_FIELD};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{info, warn};

/// Raw star system as authored in the catalog document
#[derive(Debug, Deserialize)]
struct RawStarSystem {
    name: Option<String>,
    luminosity: Option<f64>,
    radius: Option<f64>,
    temperature: Option<f64>,
    distance: Option<f64>,
    #[serde(default)]
    exoplanets: Vec<f64>,
    #[serde(default)]
    planet_labels: Vec<String>,
    #[serde(default)]
    eccentricity: Vec<String>,
    #[serde(default)]
    status: Vec<String>,
    #[serde(default)]
    mass: Vec<String>,
    #[serde(default)]
    orbital_period: Vec<String>,
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Load a catalog document from a JSON file
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<StarSystem>> {
    let path = path.as_ref();
    info!("Loading star catalog from {:?}", path);

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let raw: Vec<RawStarSystem> = serde_json::from_reader(reader)?;

    normalize(raw)
}

/// Parse a catalog document held in memory
pub fn parse_catalog(json: &str) -> Result<Vec<StarSystem>> {
    let raw: Vec<RawStarSystem> = serde_json::from_str(json)?;
    normalize(raw)
}

fn normalize(raw: Vec<RawStarSystem>) -> Result<Vec<StarSystem>> {
    let mut systems = Vec::with_capacity(raw.len());
    let mut skipped = 0;

    for (i, entry) in raw.into_iter().enumerate() {
        let name = match entry.name.as_deref().map(str::trim) {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => {
                warn!("Catalog entry {} has no name, skipping", i);
                skipped += 1;
                continue;
            }
        };

        let (luminosity, radius, temperature, distance) = match (
            entry.luminosity,
            entry.radius,
            entry.temperature,
            entry.distance,
        ) {
            (Some(l), Some(r), Some(t), Some(d))
                if is_positive(l) && is_positive(r) && is_positive(t) && d.is_finite() && d >= 0.0 =>
            {
                (l, r, t, d)
            }
            _ => {
                warn!("{}: missing or non-physical stellar parameters, skipping", name);
                skipped += 1;
                continue;
            }
        };

        if entry.exoplanets.is_empty() {
            warn!("{}: no planets, skipping", name);
            skipped += 1;
            continue;
        }
        if let Some(axis) = entry.exoplanets.iter().find(|a| !is_positive(**a)) {
            warn!("{}: non-positive semi-major axis {}, skipping", name, axis);
            skipped += 1;
            continue;
        }

        let planets = match zip_planets(&name, entry) {
            Ok(planets) => planets,
            Err(e) => {
                warn!("{}, skipping", e);
                skipped += 1;
                continue;
            }
        };

        systems.push(StarSystem {
            name,
            luminosity,
            radius,
            temperature,
            distance,
            planets,
        });
    }

    info!(
        "Loaded {} star systems ({} skipped)",
        systems.len(),
        skipped
    );

    if systems.is_empty() {
        return Err(CatalogError::Empty);
    }

    Ok(systems)
}

/// Zip the parallel arrays of one entry into planet records
fn zip_planets(name: &str, entry: RawStarSystem) -> Result<Vec<PlanetRecord>> {
    let count = entry.exoplanets.len();

    if entry.planet_labels.len() != count {
        return Err(CatalogError::MisalignedPlanets {
            system: name.to_string(),
            axes: count,
            labels: entry.planet_labels.len(),
        });
    }

    let mut eccentricity = aligned(name, "eccentricity", entry.eccentricity, count);
    let mut status = aligned(name, "status", entry.status, count);
    let mut mass = aligned(name, "mass", entry.mass, count);
    let mut period = aligned(name, "orbital_period", entry.orbital_period, count);

    let planets = entry
        .exoplanets
        .into_iter()
        .zip(entry.planet_labels)
        .enumerate()
        .map(|(i, (axis, label))| PlanetRecord {
            label: label.trim().to_string(),
            semi_major_axis_au: axis,
            eccentricity: std::mem::take(&mut eccentricity[i]),
            status: std::mem::take(&mut status[i]),
            mass: std::mem::take(&mut mass[i]),
            orbital_period_days: std::mem::take(&mut period[i]),
        })
        .collect();

    Ok(planets)
}

/// Pad or truncate a display attribute array to the planet count
fn aligned(name: &str, field: &str, values: Vec<String>, count: usize) -> Vec<String> {
    if values.len() != count {
        warn!(
            "{}: {} has {} entries for {} planets",
            name,
            field,
            values.len(),
            count
        );
    }

    let mut values: Vec<String> = values
        .into_iter()
        .take(count)
        .map(|v| v.trim().to_string())
        .collect();
    values.resize(count, UNKNOWN_FIELD.to_string());
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_catalog() {
        let json = r#"[
            {"name": "Test Star", "luminosity": 0.5, "radius": 0.8, "temperature": 4800, "distance": 12.5,
             "exoplanets": [0.1, 0.4], "planet_labels": ["b", "c"],
             "eccentricity": ["0.01", "-"], "status": ["Inhabitable", "Habitable"],
             "mass": ["1.2", ">3"], "orbital_period": ["3.1", "40.2"]},
            {"name": "No Params"}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let systems = load_catalog(file.path()).unwrap();
        assert_eq!(systems.len(), 1);
        assert_eq!(systems[0].name, "Test Star");
        assert_eq!(systems[0].planets[1].mass, ">3");
        assert_eq!(systems[0].planets[1].status, "Habitable");
    }

    #[test]
    fn test_short_and_long_arrays_are_aligned() {
        let json = r#"[
            {"name": "Ragged", "luminosity": 1.0, "radius": 1.0, "temperature": 5700, "distance": 10,
             "exoplanets": [0.1, 0.2, 0.3], "planet_labels": ["b", "c", "d"],
             "eccentricity": ["0.1"], "status": ["Inhabitable", "Inhabitable", "Inhabitable"],
             "mass": [], "orbital_period": ["1", "2", "3", "4"]}
        ]"#;

        let systems = parse_catalog(json).unwrap();
        let planets = &systems[0].planets;

        assert_eq!(planets.len(), 3);
        assert_eq!(planets[0].eccentricity, "0.1");
        assert_eq!(planets[2].eccentricity, UNKNOWN_FIELD);
        assert!(planets.iter().all(|p| p.mass == UNKNOWN_FIELD));
        assert_eq!(planets[2].orbital_period_days, "3");
    }

    #[test]
    fn test_label_mismatch_is_skipped() {
        let json = r#"[
            {"name": "Broken", "luminosity": 1.0, "radius": 1.0, "temperature": 5700, "distance": 10,
             "exoplanets": [0.1, 0.2], "planet_labels": ["b"]},
            {"name": "Whole", "luminosity": 1.0, "radius": 1.0, "temperature": 5700, "distance": 10,
             "exoplanets": [0.1], "planet_labels": ["b"]}
        ]"#;

        let systems = parse_catalog(json).unwrap();
        assert_eq!(systems.len(), 1);
        assert_eq!(systems[0].name, "Whole");
    }

    #[test]
    fn test_zip_planets_rejects_label_mismatch() {
        let raw: RawStarSystem = serde_json::from_str(
            r#"{"name": "Broken", "exoplanets": [0.1, 0.2], "planet_labels": ["b"]}"#,
        )
        .unwrap();

        let err = zip_planets("Broken", raw).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MisalignedPlanets { axes: 2, labels: 1, .. }
        ));
    }

    #[test]
    fn test_non_physical_entries_are_skipped() {
        let json = r#"[
            {"name": "Dark", "luminosity": 0.0, "radius": 1.0, "temperature": 5700, "distance": 10,
             "exoplanets": [1.0], "planet_labels": ["b"]},
            {"name": "Empty", "luminosity": 1.0, "radius": 1.0, "temperature": 5700, "distance": 10},
            {"name": "Inward", "luminosity": 1.0, "radius": 1.0, "temperature": 5700, "distance": 10,
             "exoplanets": [-1.0], "planet_labels": ["b"]},
            {"name": "Fine", "luminosity": 1.0, "radius": 1.0, "temperature": 5700, "distance": 0,
             "exoplanets": [1.0], "planet_labels": ["b"]}
        ]"#;

        let systems = parse_catalog(json).unwrap();
        assert_eq!(systems.len(), 1);
        assert_eq!(systems[0].name, "Fine");
        assert_eq!(systems[0].planets[0].status, UNKNOWN_FIELD);
    }

    #[test]
    fn test_all_skipped_is_empty_error() {
        let err = parse_catalog(r#"[{"name": "Nothing"}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_catalog("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
