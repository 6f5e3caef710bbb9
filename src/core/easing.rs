use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{StarplotError, StarplotResult};

/// One-step proportional easing.
///
/// Every call closes `1 / divisor` of the remaining gap. There is no notion of
/// elapsed time: the animation speed follows the rate at which the host calls
/// into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Easer {
    divisor: f64,
}

impl Easer {
    /// Slow ease used for data values.
    pub const DATA: Self = Self { divisor: 30.0 };
    /// Faster ease used for axis direction coordinates.
    pub const AXIS: Self = Self { divisor: 5.0 };

    pub fn new(divisor: f64) -> StarplotResult<Self> {
        if !divisor.is_finite() || divisor < 1.0 {
            return Err(StarplotError::InvalidEaseDivisor(divisor));
        }
        Ok(Self { divisor })
    }

    #[must_use]
    pub fn divisor(self) -> f64 {
        self.divisor
    }

    #[must_use]
    pub fn step(self, current: f64, target: f64) -> f64 {
        ease_step(current, target, self.divisor)
    }

    #[must_use]
    pub fn step_vec(self, current: DVec3, target: DVec3) -> DVec3 {
        DVec3::new(
            self.step(current.x, target.x),
            self.step(current.y, target.y),
            self.step(current.z, target.z),
        )
    }
}

impl TryFrom<f64> for Easer {
    type Error = StarplotError;

    fn try_from(divisor: f64) -> StarplotResult<Self> {
        Self::new(divisor)
    }
}

impl From<Easer> for f64 {
    fn from(easer: Easer) -> Self {
        easer.divisor
    }
}

/// Moves `current` toward `target` by `|current - target| / divisor`.
///
/// Equal inputs (and NaN comparisons) leave `current` untouched.
#[must_use]
pub fn ease_step(current: f64, target: f64, divisor: f64) -> f64 {
    let difference = (current - target).abs() / divisor;
    if current > target {
        current - difference
    } else if current < target {
        current + difference
    } else {
        current
    }
}
