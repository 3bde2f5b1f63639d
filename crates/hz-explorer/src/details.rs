//! Multi-line detail text for the selected system and planet

use habitable_zone::HabitableZone;
use star_catalog::{PlanetRecord, StarSystem};

pub fn format_system_details(system: &StarSystem) -> String {
    format!(
        "Name: {}\n\
         Radius: {} Solar radius\n\
         Temperature: {} K\n\
         Luminosity: {} Solar luminosity\n\
         Distance: {} light years",
        system.name, system.radius, system.temperature, system.luminosity, system.distance
    )
}

pub fn format_planet_details(planet: &PlanetRecord) -> String {
    format!(
        "Planet: {}\n\
         Eccentricity: {}\n\
         Status: {}\n\
         Mass: {}\n\
         Orbital Period: {} days",
        planet.label, planet.eccentricity, planet.status, planet.mass, planet.orbital_period_days
    )
}

/// One line per planet, marking those inside the habitable zone
pub fn format_planet_summary(system: &StarSystem, zone: &HabitableZone) -> String {
    system
        .planets
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let marker = if zone.contains(p.semi_major_axis_au) {
                "  [habitable zone]"
            } else {
                ""
            };
            format!("{:>3}  {:<28} {:>9.4} AU{}", i, p.label, p.semi_major_axis_au, marker)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
