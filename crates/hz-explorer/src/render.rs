//! Diagram rendering
//!
//! [`Renderer::show`] is a blocking call that owns the interaction until the
//! diagram is out. The file renderer draws with plotters: SVG by default,
//! PNG when the output path ends in `.png`.

use crate::{ExplorerError, Result};
use chrono::Utc;
use habitable_zone::{AxisBounds, Scene, ZoneKind};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default image edge in pixels
pub const DEFAULT_IMAGE_SIZE: u32 = 800;

/// Vertices used to approximate a disk outline
const DISK_SEGMENTS: usize = 180;

/// Planet marker radius in pixels
const PLANET_MARKER_PX: i32 = 4;

/// Rendering surface for assembled scenes
pub trait Renderer {
    fn show(&mut self, scene: &Scene) -> Result<()>;
}

/// Output settings for the file renderer
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Image path; the extension picks the backend
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("habitable_zone.svg"),
            width: DEFAULT_IMAGE_SIZE,
            height: DEFAULT_IMAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Svg,
    Png,
}

impl ImageFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("png") => ImageFormat::Png,
            _ => ImageFormat::Svg,
        }
    }
}

/// Writes each scene to the configured image file, replacing the last one
#[derive(Debug, Clone, Default)]
pub struct FileRenderer {
    config: RenderConfig,
}

impl FileRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }
}

impl Renderer for FileRenderer {
    fn show(&mut self, scene: &Scene) -> Result<()> {
        let path = &self.config.output;
        let size = (self.config.width, self.config.height);

        for planet in scene.clipped_planets() {
            warn!(
                "{} at {:.3} AU lies outside the ±{} AU window",
                planet.label, planet.semi_major_axis_au, scene.bounds.max
            );
        }

        let drawn = match ImageFormat::from_path(path) {
            ImageFormat::Svg => {
                let root = SVGBackend::new(path, size).into_drawing_area();
                draw_scene(&root, scene).map_err(|e| e.to_string())
            }
            ImageFormat::Png => {
                let root = BitMapBackend::new(path, size).into_drawing_area();
                draw_scene(&root, scene).map_err(|e| e.to_string())
            }
        };
        drawn.map_err(ExplorerError::Render)?;

        info!("Wrote {} ({} planets) to {:?}", scene.title, scene.planets.len(), path);
        Ok(())
    }
}

/// Keeps every scene it is shown
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub scenes: Vec<Scene>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Scene> {
        self.scenes.last()
    }
}

impl Renderer for RecordingRenderer {
    fn show(&mut self, scene: &Scene) -> Result<()> {
        self.scenes.push(scene.clone());
        Ok(())
    }
}

fn zone_color(kind: ZoneKind) -> RGBColor {
    match kind {
        ZoneKind::Outer => GREEN,
        ZoneKind::Inner => BLUE,
    }
}

/// Disk outline in data coordinates, flattened onto the window edges
fn disk_outline(radius: f64, bounds: &AxisBounds) -> Vec<(f64, f64)> {
    (0..DISK_SEGMENTS)
        .map(|i| {
            let theta = std::f64::consts::TAU * i as f64 / DISK_SEGMENTS as f64;
            (
                (radius * theta.cos()).clamp(bounds.min, bounds.max),
                (radius * theta.sin()).clamp(bounds.min, bounds.max),
            )
        })
        .collect()
}

fn draw_scene<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    scene: &Scene,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let bounds = scene.bounds;
    let mut chart = ChartBuilder::on(root)
        .caption(&scene.title, ("sans-serif", 24).into_font().color(&BLACK))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(bounds.min..bounds.max, bounds.min..bounds.max)?;

    chart
        .configure_mesh()
        .x_desc(scene.axis_title.as_str())
        .y_desc(scene.axis_title.as_str())
        .axis_desc_style(("sans-serif", 16))
        .label_style(("sans-serif", 12))
        .draw()?;

    // Outer first so the inner disk sits on top of it
    for zone in &scene.zones {
        let style = zone_color(zone.kind).mix(0.5).filled();
        chart
            .draw_series(std::iter::once(Polygon::new(
                disk_outline(zone.radius_au, &bounds),
                style,
            )))?
            .label(zone.kind.legend_label())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], style));
    }

    chart
        .draw_series(std::iter::once(Polygon::new(
            disk_outline(scene.star.radius_au, &bounds),
            YELLOW.filled(),
        )))?
        .label(scene.star.legend_label())
        .legend(|(x, y)| Circle::new((x + 5, y), 5, YELLOW.filled()));

    let visible: Vec<_> = scene
        .planets
        .iter()
        .filter(|p| bounds.contains(p.x, p.y))
        .collect();

    chart.draw_series(
        visible
            .iter()
            .map(|p| Circle::new((p.x, p.y), PLANET_MARKER_PX, RED.filled())),
    )?;

    let label_style = ("sans-serif", 12)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart.draw_series(visible.iter().filter_map(|p| {
        let anchor = scene.label_position(p)?;
        Some(Text::new(p.label.clone(), anchor, label_style.clone()))
    }))?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.9))
        .border_style(BLACK)
        .label_font(("sans-serif", 14))
        .draw()?;

    root.present()?;
    Ok(())
}

#[derive(Serialize)]
struct SceneExport<'a> {
    generated_at: String,
    scene: &'a Scene,
}

/// Write the scene description as JSON next to (or instead of) the image
pub fn export_scene_json(scene: &Scene, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let export = SceneExport {
        generated_at: Utc::now().to_rfc3339(),
        scene,
    };

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &export)?;

    info!("Wrote scene description to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use habitable_zone::assemble_scene;
    use tempfile::TempDir;

    fn sun_scene() -> Scene {
        assemble_scene(
            "Sun",
            1.0,
            &[0.4, 0.73, 1.0, 1.52, 5.2, 9.5, 19.0, 30.0],
            &["1.Mercury", "2.Venus", "3.Earth", "4.Mars", "5.Jupiter", "6.Saturn", "7.Uranus", "8.Neptune"],
        )
        .unwrap()
    }

    #[test]
    fn test_image_format_from_extension() {
        assert_eq!(ImageFormat::from_path(Path::new("hz.png")), ImageFormat::Png);
        assert_eq!(ImageFormat::from_path(Path::new("hz.PNG")), ImageFormat::Png);
        assert_eq!(ImageFormat::from_path(Path::new("hz.svg")), ImageFormat::Svg);
        assert_eq!(ImageFormat::from_path(Path::new("hz")), ImageFormat::Svg);
    }

    #[test]
    fn test_disk_outline_respects_bounds() {
        let bounds = AxisBounds::symmetric(3.0);
        let outline = disk_outline(4.0, &bounds);
        assert_eq!(outline.len(), DISK_SEGMENTS);
        assert!(outline.iter().all(|&(x, y)| bounds.contains(x, y)));

        let small = disk_outline(1.0, &bounds);
        assert!(small
            .iter()
            .all(|&(x, y)| (x.hypot(y) - 1.0).abs() < 1e-9));
    }

    #[test]
    fn test_svg_render_writes_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("sun.svg");
        let mut renderer = FileRenderer::new(RenderConfig {
            output: output.clone(),
            ..RenderConfig::default()
        });

        renderer.show(&sun_scene()).unwrap();

        let svg = std::fs::read_to_string(&output).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("3.Earth"));
        assert!(svg.contains("Outer HZ"));
        // clipped planets are not drawn
        assert!(!svg.contains("8.Neptune"));
    }

    #[test]
    fn test_png_render_writes_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("custom.png");
        let mut renderer = FileRenderer::new(RenderConfig {
            output: output.clone(),
            width: 400,
            height: 400,
        });

        let scene = assemble_scene("Alpha title", 1.0, &[1.0], &["AAAAAAAAAA"]).unwrap();
        renderer.show(&scene).unwrap();

        let bytes = std::fs::read(&output).unwrap();
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    }

    #[test]
    fn test_edge_label_not_drawn() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("edge.svg");
        let mut renderer = FileRenderer::new(RenderConfig {
            output: output.clone(),
            ..RenderConfig::default()
        });

        let scene = assemble_scene("Edge", 1.0, &[2.95, 1.0], &["edge-b", "inner-c"]).unwrap();
        renderer.show(&scene).unwrap();

        let svg = std::fs::read_to_string(&output).unwrap();
        assert!(svg.contains("inner-c"));
        assert!(!svg.contains("edge-b"));
    }

    #[test]
    fn test_recording_renderer_keeps_scenes() {
        let mut renderer = RecordingRenderer::new();
        renderer.show(&sun_scene()).unwrap();
        assert_eq!(renderer.scenes.len(), 1);
        assert_eq!(renderer.last().unwrap().title, "Sun");
    }

    #[test]
    fn test_export_scene_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scene.json");

        export_scene_json(&sun_scene(), &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(value["generated_at"].is_string());
        assert_eq!(value["scene"]["planets"].as_array().unwrap().len(), 8);
        assert_eq!(value["scene"]["zones"][0]["kind"], "Outer");
    }
}
