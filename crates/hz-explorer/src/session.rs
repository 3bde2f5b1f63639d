//! Interactive line-oriented session
//!
//! Mirrors the three actions of the desktop form: show a catalog system,
//! show one of its planets, plot custom data. Errors are reported and the
//! session returns to the prompt.

use crate::controller::Controller;
use crate::details::format_planet_summary;
use crate::render::Renderer;
use crate::{ExplorerError, Result};
use std::io::{self, BufRead, Write};
use tracing::debug;

const PROMPT: &str = "hz> ";

const HELP: &str = "\
Commands:
  systems                              list the catalog
  select <index|name>                  show a system and plot it
  planets                              list planets of the selected system
  planet <index|label>                 show details of one planet
  custom <luminosity> <axes> <labels>  plot custom data, e.g. custom 1.7 0.074,1.01 b,h
  help                                 show this message
  quit                                 leave the session";

/// One parsed line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Systems,
    Select(String),
    Planets,
    Planet(String),
    Custom {
        luminosity: String,
        exoplanets: String,
        labels: String,
    },
    Help,
    Quit,
    Unknown(String),
}

fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(at) => (&text[..at], text[at..].trim_start()),
        None => (text, ""),
    }
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        let (word, rest) = split_word(line);
        let rest = rest.trim_end();

        let command = match word.to_ascii_lowercase().as_str() {
            "" => return None,
            "systems" | "list" => Command::Systems,
            "select" | "system" => Command::Select(rest.to_string()),
            "planets" => Command::Planets,
            "planet" => Command::Planet(rest.to_string()),
            "custom" => {
                let (luminosity, rest) = split_word(rest);
                let (exoplanets, labels) = split_word(rest);
                Command::Custom {
                    luminosity: luminosity.to_string(),
                    exoplanets: exoplanets.to_string(),
                    labels: labels.to_string(),
                }
            }
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(word.to_string()),
        };
        Some(command)
    }
}

/// Run the session until `quit` or end of input
pub fn run<R, I, W>(controller: &mut Controller<R>, input: I, mut output: W) -> io::Result<()>
where
    R: Renderer,
    I: BufRead,
    W: Write,
{
    writeln!(output, "Habitable Zone Mapping ({} systems). Type 'help' for commands.", controller.catalog().len())?;
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if let Some(command) = Command::parse(&line) {
            debug!("Session command: {:?}", command);
            if command == Command::Quit {
                break;
            }
            if let Err(err) = execute(controller, command, &mut output) {
                writeln!(output, "Error: {}", err)?;
            }
        }
        write!(output, "{}", PROMPT)?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(())
}

fn execute<R: Renderer, W: Write>(
    controller: &mut Controller<R>,
    command: Command,
    output: &mut W,
) -> Result<()> {
    match command {
        Command::Systems => {
            for (i, system) in controller.catalog().iter().enumerate() {
                writeln!(output, "{:>3}  {}", i, system.name)?;
            }
        }
        Command::Select(query) => {
            let selection = match query.as_str() {
                "" => None,
                q => Some(
                    controller
                        .catalog()
                        .resolve(q)
                        .ok_or_else(|| ExplorerError::SystemNotFound(q.to_string()))?,
                ),
            };
            controller.select_system(selection)?;
            writeln!(output, "{}", controller.display().system_details)?;
            write_planets(controller, output)?;
        }
        Command::Planets => write_planets(controller, output)?,
        Command::Planet(query) => {
            let selection = match query.as_str() {
                "" => None,
                q => Some(planet_index(controller, q)?),
            };
            let details = controller.select_planet(selection)?;
            writeln!(output, "{}", details)?;
        }
        Command::Custom {
            luminosity,
            exoplanets,
            labels,
        } => {
            let scene = controller.plot_custom(&luminosity, &exoplanets, &labels)?;
            writeln!(
                output,
                "Plotted {} planets; habitable zone {:.3}-{:.3} AU",
                scene.planets.len(),
                scene.habitable_zone.inner_radius_au,
                scene.habitable_zone.outer_radius_au
            )?;
        }
        Command::Help => writeln!(output, "{}", HELP)?,
        Command::Quit => {}
        Command::Unknown(word) => {
            writeln!(output, "Unknown command {:?}. Type 'help' for commands.", word)?;
        }
    }
    Ok(())
}

/// Planet choice by list position, falling back to a label match
fn planet_index<R: Renderer>(controller: &Controller<R>, query: &str) -> Result<usize> {
    if let Ok(index) = query.parse::<usize>() {
        return Ok(index);
    }
    controller
        .display()
        .planet_choices
        .iter()
        .position(|label| label.eq_ignore_ascii_case(query))
        .ok_or_else(|| ExplorerError::PlanetNotFound(query.to_string()))
}

fn write_planets<R: Renderer, W: Write>(controller: &Controller<R>, output: &mut W) -> Result<()> {
    let system = controller
        .current_system()
        .ok_or(ExplorerError::SelectionMissing(crate::Selection::System))?;
    let zone = habitable_zone::HabitableZone::from_luminosity(system.luminosity)?;

    writeln!(output, "Exoplanets:")?;
    writeln!(output, "{}", format_planet_summary(system, &zone))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingRenderer;
    use star_catalog::Catalog;

    fn run_script(script: &str) -> (String, Controller<RecordingRenderer>) {
        let mut controller = Controller::new(Catalog::builtin().unwrap(), RecordingRenderer::new());
        let mut output = Vec::new();
        run(&mut controller, script.as_bytes(), &mut output).unwrap();
        (String::from_utf8(output).unwrap(), controller)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("   "), None);
        assert_eq!(Command::parse("SYSTEMS"), Some(Command::Systems));
        assert_eq!(
            Command::parse("select HD 10180"),
            Some(Command::Select("HD 10180".to_string()))
        );
        assert_eq!(
            Command::parse("custom 1.7  0.074,1.01  Kepler b,Kepler h"),
            Some(Command::Custom {
                luminosity: "1.7".to_string(),
                exoplanets: "0.074,1.01".to_string(),
                labels: "Kepler b,Kepler h".to_string(),
            })
        );
        assert_eq!(
            Command::parse("custom"),
            Some(Command::Custom {
                luminosity: String::new(),
                exoplanets: String::new(),
                labels: String::new(),
            })
        );
    }

    #[test]
    fn test_select_then_planet() {
        let (out, controller) = run_script("select Sun\nplanet 2\nquit\n");

        assert!(out.contains("Name: Sun"));
        assert!(out.contains("3.Earth"));
        assert!(out.contains("[habitable zone]"));
        assert!(out.contains("Planet: 3.Earth\nEccentricity: 0.0167"));
        assert_eq!(controller.renderer().scenes.len(), 1);
    }

    #[test]
    fn test_planet_by_label() {
        let (out, _) = run_script("select 2\nplanet 5. trappist-1f\n");
        assert!(out.contains("Planet: 5. TRAPPIST-1f"));
    }

    #[test]
    fn test_unmatched_planet_label() {
        let (out, _) = run_script("select 0\nplanet Vulcan\n");
        assert!(out.contains("Error: No exoplanet labelled \"Vulcan\""));
        assert!(!out.contains("No exoplanet at index"));
    }

    #[test]
    fn test_errors_return_to_prompt() {
        let (out, controller) = run_script("select\nplanet\ncustom 1 1,2,3 a,b\ncustom 1 1,x,3 a,b,c\nselect 0\n");

        assert!(out.contains("Error: Please select a planetary system."));
        assert!(out.contains("Error: Number of exoplanets and labels must match"));
        assert!(out.contains("Error: Invalid input. Please enter valid numbers"));
        // the session kept going and the last command worked
        assert!(out.contains("Name: Sun"));
        assert_eq!(controller.renderer().scenes.len(), 1);
    }

    #[test]
    fn test_custom_plot() {
        let (out, controller) = run_script("custom 1.7 0.074,1.01 b,h\n");
        assert!(out.contains("Plotted 2 planets; habitable zone 1.239-1.786 AU"));
        assert_eq!(controller.renderer().scenes.len(), 1);
    }

    #[test]
    fn test_unknown_system_name() {
        let (out, _) = run_script("select Vulcan\n");
        assert!(out.contains("Error: No planetary system named \"Vulcan\""));
    }

    #[test]
    fn test_quit_stops_reading() {
        let (out, controller) = run_script("quit\nselect 0\n");
        assert!(!out.contains("Name: Sun"));
        assert!(controller.renderer().scenes.is_empty());
    }
}
