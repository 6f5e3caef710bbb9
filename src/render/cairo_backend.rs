use cairo::{Context, Format, ImageSurface, Mesh, MeshCorner};
use glam::DVec3;
use pango::FontDescription;

use crate::error::{StarplotError, StarplotResult};
use crate::render::{Color, FrameRenderer, StarplotFrame};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub wedges_drawn: usize,
    pub labels_drawn: usize,
}

/// Top-down (x/z plane) preview of a starplot frame.
///
/// Wedges are painted as Gouraud-shaded mesh patches so the per-vertex colors
/// come out the way a 3-D backend would interpolate them.
#[derive(Debug)]
pub struct CairoPreviewRenderer {
    surface: ImageSurface,
    clear_color: Color,
    margin_ratio: f64,
    font_size_px: f64,
    last_stats: CairoRenderStats,
}

impl CairoPreviewRenderer {
    pub fn new(width: i32, height: i32) -> StarplotResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(StarplotError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::WHITE,
            margin_ratio: 0.85,
            font_size_px: 11.0,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> StarplotResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    pub fn write_png(&self, writer: &mut impl std::io::Write) -> StarplotResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| StarplotError::Backend(format!("failed to encode png: {err}")))
    }

    fn projection(&self, frame: &StarplotFrame) -> Projection {
        let width = f64::from(self.surface.width());
        let height = f64::from(self.surface.height());
        let extent = if frame.bounding_scale > 0.0 {
            frame.bounding_scale
        } else {
            1.0
        };
        Projection {
            center_x: width / 2.0,
            center_y: height / 2.0,
            pixels_per_unit: width.min(height) / 2.0 * self.margin_ratio / extent,
        }
    }

    fn render_with_context(&mut self, context: &Context, frame: &StarplotFrame) -> StarplotResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        if !frame.visible {
            self.last_stats = stats;
            return Ok(());
        }

        let projection = self.projection(frame);

        for wedge in &frame.wedges {
            let mesh = Mesh::new();
            mesh.begin_patch();
            for (slot, vertex) in wedge.vertices.iter().enumerate() {
                let (x, y) = projection.project(*vertex);
                if slot == 0 {
                    mesh.move_to(x, y);
                } else {
                    mesh.line_to(x, y);
                }
            }
            let corners = [
                MeshCorner::MeshCorner0,
                MeshCorner::MeshCorner1,
                MeshCorner::MeshCorner2,
                MeshCorner::MeshCorner3,
            ];
            for (corner, color) in corners.into_iter().zip(
                wedge
                    .colors
                    .iter()
                    .chain(std::iter::once(&wedge.colors[0])),
            ) {
                mesh.set_corner_color_rgba(corner, color.red, color.green, color.blue, color.alpha);
            }
            mesh.end_patch();

            context
                .set_source(&mesh)
                .map_err(|err| map_backend_error("failed to bind wedge mesh", err))?;
            context
                .paint()
                .map_err(|err| map_backend_error("failed to paint wedge", err))?;
            stats.wedges_drawn += 1;
        }

        for line in &frame.lines {
            let (x1, y1) = projection.project(line.start);
            let (x2, y2) = projection.project(line.end);
            apply_color(context, line.color);
            context.set_line_width((line.stroke_width * projection.pixels_per_unit).max(1.0));
            context.move_to(x1, y1);
            context.line_to(x2, y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke axis line", err))?;
            stats.lines_drawn += 1;
        }

        for label in &frame.labels {
            let layout = pangocairo::functions::create_layout(context);
            let font_description = FontDescription::from_string(&format!(
                "Sans Bold {}",
                self.font_size_px
            ));
            layout.set_font_description(Some(&font_description));
            layout.set_text(&label.text);

            let (text_width, text_height) = layout.pixel_size();
            let (x, y) = projection.project(label.anchor);
            apply_color(context, label.color);
            context.move_to(
                x - f64::from(text_width) / 2.0,
                y - f64::from(text_height) / 2.0,
            );
            pangocairo::functions::show_layout(context, &layout);
            stats.labels_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl FrameRenderer for CairoPreviewRenderer {
    fn render(&mut self, frame: &StarplotFrame) -> StarplotResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

#[derive(Debug, Clone, Copy)]
struct Projection {
    center_x: f64,
    center_y: f64,
    pixels_per_unit: f64,
}

impl Projection {
    /// Looks down the +y axis: chart x goes right, chart z goes up.
    fn project(self, point: DVec3) -> (f64, f64) {
        (
            self.center_x + point.x * self.pixels_per_unit,
            self.center_y - point.z * self.pixels_per_unit,
        )
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> StarplotError {
    StarplotError::Backend(format!("{prefix}: {err}"))
}
