use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{StarplotError, StarplotResult};
use crate::render::{Color, MaterialRef, PrimitiveHandle};

/// Where the axes of a new chart come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AxisSource {
    /// Evenly spaced circular layout with this many axes.
    Count(usize),
    /// World-space axis endpoints, converted to chart-local space on construction.
    WorldPositions(Vec<DVec3>),
}

impl AxisSource {
    #[must_use]
    pub fn axis_count(&self) -> usize {
        match self {
            Self::Count(count) => *count,
            Self::WorldPositions(positions) => positions.len(),
        }
    }
}

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarplotConfig {
    /// Registry name of the root container; must be unique in the scene.
    pub name: String,
    /// Local position of the chart on its parent.
    #[serde(default)]
    pub position: DVec3,
    pub axes: AxisSource,
    #[serde(default = "default_radius")]
    pub radius: f64,
    pub initial_data: Vec<f64>,
    pub axis_max: Vec<f64>,
    #[serde(default)]
    pub parent: Option<PrimitiveHandle>,
    /// Per-axis wedge colors; when absent every axis uses `color`.
    #[serde(default)]
    pub colors: Option<Vec<Color>>,
    #[serde(default = "default_color")]
    pub color: Color,
    /// Optional unit suffix per axis, appended to value labels.
    #[serde(default)]
    pub units: Option<Vec<String>>,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    #[serde(default = "default_axis_line_color")]
    pub axis_line_color: Color,
    #[serde(default = "default_label_color")]
    pub label_color: Color,
    #[serde(default)]
    pub wedge_material: MaterialRef,
    #[serde(default = "default_data_ease_divisor")]
    pub data_ease_divisor: f64,
    #[serde(default = "default_axis_ease_divisor")]
    pub axis_ease_divisor: f64,
}

impl StarplotConfig {
    /// Creates a config using the default circular layout.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        axis_count: usize,
        initial_data: Vec<f64>,
        axis_max: Vec<f64>,
    ) -> Self {
        Self::with_axis_source(name, AxisSource::Count(axis_count), initial_data, axis_max)
    }

    /// Creates a config whose axes end at the given world-space points.
    #[must_use]
    pub fn with_world_axis_positions(
        name: impl Into<String>,
        world_positions: Vec<DVec3>,
        initial_data: Vec<f64>,
        axis_max: Vec<f64>,
    ) -> Self {
        Self::with_axis_source(
            name,
            AxisSource::WorldPositions(world_positions),
            initial_data,
            axis_max,
        )
    }

    fn with_axis_source(
        name: impl Into<String>,
        axes: AxisSource,
        initial_data: Vec<f64>,
        axis_max: Vec<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            position: DVec3::ZERO,
            axes,
            radius: default_radius(),
            initial_data,
            axis_max,
            parent: None,
            colors: None,
            color: default_color(),
            units: None,
            line_width: default_line_width(),
            axis_line_color: default_axis_line_color(),
            label_color: default_label_color(),
            wedge_material: MaterialRef::default(),
            data_ease_divisor: default_data_ease_divisor(),
            axis_ease_divisor: default_axis_ease_divisor(),
        }
    }

    #[must_use]
    pub fn with_position(mut self, position: DVec3) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Parents the chart root to a container already present in the scene.
    #[must_use]
    pub fn with_parent(mut self, parent: PrimitiveHandle) -> Self {
        self.parent = Some(parent);
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = Some(colors);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self.colors = None;
        self
    }

    #[must_use]
    pub fn with_units(mut self, units: Vec<String>) -> Self {
        self.units = Some(units);
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_wedge_material(mut self, material: MaterialRef) -> Self {
        self.wedge_material = material;
        self
    }

    /// Sets the per-call data easing divisor (higher is slower).
    #[must_use]
    pub fn with_data_ease_divisor(mut self, divisor: f64) -> Self {
        self.data_ease_divisor = divisor;
        self
    }

    /// Sets the per-call axis-position easing divisor (higher is slower).
    #[must_use]
    pub fn with_axis_ease_divisor(mut self, divisor: f64) -> Self {
        self.axis_ease_divisor = divisor;
        self
    }

    /// Resolved per-axis colors.
    #[must_use]
    pub fn resolved_colors(&self) -> Vec<Color> {
        self.colors
            .clone()
            .unwrap_or_else(|| vec![self.color; self.axes.axis_count()])
    }

    pub fn to_json_pretty(&self) -> StarplotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| StarplotError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON; omitted styling fields take their defaults.
    pub fn from_json_str(input: &str) -> StarplotResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| StarplotError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_radius() -> f64 {
    1.0
}

fn default_color() -> Color {
    Color::CYAN
}

fn default_line_width() -> f64 {
    0.0025
}

fn default_axis_line_color() -> Color {
    Color::BLACK
}

fn default_label_color() -> Color {
    Color::BLACK
}

fn default_data_ease_divisor() -> f64 {
    30.0
}

fn default_axis_ease_divisor() -> f64 {
    5.0
}
