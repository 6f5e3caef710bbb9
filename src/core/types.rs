use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Read-only view of one radial spoke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub index: usize,
    /// Chart-local direction; the endpoint is `direction * radius`.
    pub direction: DVec3,
    pub max_value: f64,
    pub color: Color,
}

impl Axis {
    #[must_use]
    pub fn endpoint(&self, radius: f64) -> DVec3 {
        self.direction * radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

impl Visibility {
    #[must_use]
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}
