use glam::{DQuat, DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::{StarplotError, StarplotResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const CYAN: Self = Self::rgb(0.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> StarplotResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(StarplotError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Opaque handle issued by a [`super::SceneBackend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PrimitiveHandle(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    /// Root container every other chart primitive is parented to.
    Container,
    AxisLine,
    WedgeMesh,
    Label,
}

/// Shader/material reference, opaque to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialRef(pub String);

impl Default for MaterialRef {
    fn default() -> Self {
        Self("starplot/wedge".to_owned())
    }
}

/// Local transform applied to a primitive relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalTransform {
    pub translation: DVec3,
    pub rotation: DQuat,
    pub scale: DVec3,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            translation: DVec3::ZERO,
            rotation: DQuat::IDENTITY,
            scale: DVec3::ONE,
        }
    }
}

impl LocalTransform {
    #[must_use]
    pub fn from_translation(translation: DVec3) -> Self {
        Self {
            translation,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: DQuat) -> Self {
        self.rotation = rotation;
        self
    }
}

/// One axis spoke: a segment from the chart origin to the scaled endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLine {
    pub axis_index: usize,
    pub start: DVec3,
    pub end: DVec3,
    pub stroke_width: f64,
    pub color: Color,
}

impl AxisLine {
    pub fn validate(&self) -> StarplotResult<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(StarplotError::InvalidData(
                "axis line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(StarplotError::InvalidData(
                "axis line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Triangle between two neighbouring axis points and the origin.
///
/// Vertex order is `[point on axis i, origin, point on next axis]`; the index
/// list winds them as `[0, 2, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WedgeMesh {
    pub axis_index: usize,
    pub next_index: usize,
    pub vertices: [DVec3; 3],
    pub normals: [DVec3; 3],
    pub uvs: [DVec2; 3],
    pub colors: [Color; 3],
    pub indices: [u32; 3],
}

impl WedgeMesh {
    pub fn validate(&self) -> StarplotResult<()> {
        if self.vertices.iter().any(|vertex| !vertex.is_finite()) {
            return Err(StarplotError::InvalidData(
                "wedge vertices must be finite".to_owned(),
            ));
        }
        for color in self.colors {
            color.validate()?;
        }
        Ok(())
    }

    /// Vertices in index (winding) order.
    #[must_use]
    pub fn wound_vertices(&self) -> [DVec3; 3] {
        self.indices.map(|index| self.vertices[index as usize])
    }
}

/// Value label anchored next to an axis endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub axis_index: usize,
    pub text: String,
    pub anchor: DVec3,
    /// Width hint for the label backdrop, proportional to the text length.
    pub background_width: f64,
    pub background_height: f64,
    pub color: Color,
}

impl AxisLabel {
    pub fn validate(&self) -> StarplotResult<()> {
        if self.text.is_empty() {
            return Err(StarplotError::InvalidData(
                "label text must not be empty".to_owned(),
            ));
        }
        if !self.anchor.is_finite() {
            return Err(StarplotError::InvalidData(
                "label anchor must be finite".to_owned(),
            ));
        }
        self.color.validate()
    }
}
