use std::cmp::Ordering;

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::{StarplotError, StarplotResult};

/// Smallest number of axes a starplot can be built with.
pub const MIN_AXIS_COUNT: usize = 3;

/// Direction of axis 0 in the default circular layout, before rotation.
pub const DEFAULT_AXIS_DIRECTION: DVec3 = DVec3::new(0.0, 0.0, 0.9);

/// Where an axis endpoint comes from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AxisPosition {
    /// Evenly spaced slot of the default circular layout.
    Default,
    /// Caller supplied direction in chart-local space.
    Explicit(DVec3),
}

/// Orders directions clockwise, starting at the +x/-x half-plane boundary.
///
/// Directions with `x >= 0` come first, ordered by descending `z`; directions
/// with `x < 0` follow, ordered by ascending `z`.
#[must_use]
pub fn compare_clockwise(v1: DVec3, v2: DVec3) -> Ordering {
    if v1.x >= 0.0 {
        if v2.x < 0.0 {
            return Ordering::Less;
        }
        v2.z.partial_cmp(&v1.z).unwrap_or(Ordering::Equal)
    } else {
        if v2.x >= 0.0 {
            return Ordering::Greater;
        }
        v1.z.partial_cmp(&v2.z).unwrap_or(Ordering::Equal)
    }
}

/// Direction of slot `index` in the default layout: `DEFAULT_AXIS_DIRECTION`
/// rotated by `360° / axis_count * index` around the vertical axis.
#[must_use]
pub fn default_direction(index: usize, axis_count: usize) -> DVec3 {
    let angle_deg = 360.0 / axis_count as f64 * index as f64;
    DQuat::from_rotation_y(angle_deg.to_radians()) * DEFAULT_AXIS_DIRECTION
}

pub fn validate_axis_count(count: usize) -> StarplotResult<usize> {
    if count < MIN_AXIS_COUNT {
        return Err(StarplotError::InvalidAxisCount { count });
    }
    Ok(count)
}

pub fn validate_radius(radius: f64) -> StarplotResult<f64> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(StarplotError::InvalidRadius(radius));
    }
    Ok(radius)
}

/// Resolved axis directions in chart-local space plus the derived bounding
/// scale.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLayout {
    directions: Vec<DVec3>,
    radius: f64,
    bounding_scale: f64,
}

impl AxisLayout {
    /// Resolves every position and, when at least one default slot was
    /// assigned, re-sorts the whole set clockwise.
    pub fn resolve(positions: &[AxisPosition], radius: f64) -> StarplotResult<Self> {
        let axis_count = validate_axis_count(positions.len())?;
        let radius = validate_radius(radius)?;

        let mut assigned_default = false;
        let mut directions = Vec::with_capacity(axis_count);
        for (index, position) in positions.iter().enumerate() {
            match *position {
                AxisPosition::Default => {
                    assigned_default = true;
                    directions.push(default_direction(index, axis_count));
                }
                AxisPosition::Explicit(direction) => {
                    validate_direction(index, direction)?;
                    directions.push(direction);
                }
            }
        }
        if assigned_default {
            directions.sort_by(|a, b| compare_clockwise(*a, *b));
        }

        let mut layout = Self {
            directions,
            radius,
            bounding_scale: 0.0,
        };
        layout.rebuild();
        Ok(layout)
    }

    /// Default circular layout with `axis_count` evenly spaced axes.
    pub fn circular(axis_count: usize, radius: f64) -> StarplotResult<Self> {
        Self::resolve(&vec![AxisPosition::Default; axis_count], radius)
    }

    /// Recomputes derived state after directions were mutated in place.
    pub fn rebuild(&mut self) {
        self.bounding_scale = self
            .directions
            .iter()
            .map(|direction| (*direction * self.radius).length())
            .fold(0.0, f64::max);
    }

    #[must_use]
    pub fn axis_count(&self) -> usize {
        self.directions.len()
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn directions(&self) -> &[DVec3] {
        &self.directions
    }

    /// Mutable access for in-place easing; call [`AxisLayout::rebuild`] afterwards.
    pub fn directions_mut(&mut self) -> &mut [DVec3] {
        &mut self.directions
    }

    /// Axis endpoint in chart-local space (`direction * radius`).
    #[must_use]
    pub fn endpoint(&self, index: usize) -> DVec3 {
        self.directions[index] * self.radius
    }

    /// Longest endpoint-to-origin distance among all axes.
    #[must_use]
    pub fn bounding_scale(&self) -> f64 {
        self.bounding_scale
    }
}

fn validate_direction(index: usize, direction: DVec3) -> StarplotResult<()> {
    if !direction.is_finite() {
        return Err(StarplotError::InvalidData(format!(
            "axis position {index} must be finite"
        )));
    }
    Ok(())
}
