use glam::{DMat4, DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// Local transform of the chart root relative to its parent container.
///
/// Chart-local coordinates exclude the bounding scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub position: DVec3,
    pub rotation: DQuat,
}

impl Default for Placement {
    fn default() -> Self {
        Self::at(DVec3::ZERO)
    }
}

impl Placement {
    #[must_use]
    pub fn at(position: DVec3) -> Self {
        Self {
            position,
            rotation: DQuat::IDENTITY,
        }
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: DQuat) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub fn matrix(&self) -> DMat4 {
        DMat4::from_rotation_translation(self.rotation, self.position)
    }

    /// Converts a world-space point into chart-local space, given the world
    /// transform of the parent container.
    #[must_use]
    pub fn world_to_local(&self, parent_world: DMat4, world: DVec3) -> DVec3 {
        (parent_world * self.matrix())
            .inverse()
            .transform_point3(world)
    }

    #[must_use]
    pub fn local_to_world(&self, parent_world: DMat4, local: DVec3) -> DVec3 {
        (parent_world * self.matrix()).transform_point3(local)
    }
}
