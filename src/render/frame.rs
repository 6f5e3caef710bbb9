use serde::{Deserialize, Serialize};

use crate::core::Placement;
use crate::error::{StarplotError, StarplotResult};
use crate::render::{AxisLabel, AxisLine, WedgeMesh};

/// Backend-agnostic geometry of one starplot draw pass, in chart-local space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarplotFrame {
    pub placement: Placement,
    pub bounding_scale: f64,
    pub visible: bool,
    pub lines: Vec<AxisLine>,
    pub wedges: Vec<WedgeMesh>,
    pub labels: Vec<AxisLabel>,
}

impl StarplotFrame {
    #[must_use]
    pub fn new(placement: Placement, bounding_scale: f64) -> Self {
        Self {
            placement,
            bounding_scale,
            visible: true,
            lines: Vec::new(),
            wedges: Vec::new(),
            labels: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: AxisLine) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_wedge(mut self, wedge: WedgeMesh) -> Self {
        self.wedges.push(wedge);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: AxisLabel) -> Self {
        self.labels.push(label);
        self
    }

    pub fn validate(&self) -> StarplotResult<()> {
        if !self.bounding_scale.is_finite() || self.bounding_scale < 0.0 {
            return Err(StarplotError::InvalidData(
                "frame bounding scale must be finite and >= 0".to_owned(),
            ));
        }

        for line in &self.lines {
            line.validate()?;
        }
        for wedge in &self.wedges {
            wedge.validate()?;
        }
        for label in &self.labels {
            label.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.wedges.is_empty() && self.labels.is_empty()
    }
}
