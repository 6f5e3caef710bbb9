use glam::{DQuat, DVec3};
use tracing::{debug, trace};

use crate::error::{StarplotError, StarplotResult};
use crate::render::SceneBackend;

use super::StarplotEngine;
use super::validation::validate_len;

impl<B: SceneBackend> StarplotEngine<B> {
    /// Eases every axis endpoint one step toward the given world positions.
    ///
    /// Returns `false` without touching anything when the local positions
    /// already match the stored axis directions.
    pub fn set_axis_positions(&mut self, world_positions: &[DVec3]) -> StarplotResult<bool> {
        validate_len("axis_positions", self.axis_count(), world_positions.len())?;
        if let Some(index) = world_positions.iter().position(|world| !world.is_finite()) {
            return Err(StarplotError::InvalidData(format!(
                "axis position {index} must be finite"
            )));
        }

        let parent_world = self.parent_world_transform();
        let placement = self.core.presentation.placement;
        let local_positions: Vec<DVec3> = world_positions
            .iter()
            .map(|world| placement.world_to_local(parent_world, *world))
            .collect();

        let directions = self.core.model.layout.directions();
        if local_positions
            .iter()
            .zip(directions)
            .all(|(local, current)| local == current)
        {
            trace!(name = %self.core.name, "axis positions unchanged");
            return Ok(false);
        }

        let easer = self.core.axis_easer;
        for (direction, target) in self
            .core
            .model
            .layout
            .directions_mut()
            .iter_mut()
            .zip(&local_positions)
        {
            *direction = easer.step_vec(*direction, *target);
        }
        self.core.model.layout.rebuild();

        self.sync_axes()?;
        self.sync_wedges()?;
        self.reset_primitive_rotations()?;
        trace!(
            name = %self.core.name,
            bounding_scale = self.bounding_scale(),
            "eased axis positions"
        );
        Ok(true)
    }

    /// Sets the local rotation of the chart root on its parent.
    pub fn set_rotation(&mut self, rotation: DQuat) -> StarplotResult<()> {
        if !rotation.is_finite() {
            return Err(StarplotError::InvalidData(
                "rotation must be finite".to_owned(),
            ));
        }
        self.core.presentation.placement.rotation = rotation;
        self.sync_root()?;
        debug!(name = %self.core.name, ?rotation, "set starplot rotation");
        Ok(())
    }
}
