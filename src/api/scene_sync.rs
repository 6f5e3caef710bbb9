use glam::{DQuat, DVec3};
use tracing::trace;

use crate::error::StarplotResult;
use crate::render::{LocalTransform, SceneBackend};

use super::axis_line_builder::{AXIS_LINE_LIFT, build_axis_lines};
use super::label_builder::build_labels;
use super::primitive_arena::PrimitiveKey;
use super::wedge_mesh_builder::{WEDGE_LIFT, build_wedges};
use super::StarplotEngine;

impl<B: SceneBackend> StarplotEngine<B> {
    /// Pushes the root placement into the scene.
    pub(super) fn sync_root(&mut self) -> StarplotResult<()> {
        let placement = self.core.presentation.placement;
        let transform =
            LocalTransform::from_translation(placement.position).with_rotation(placement.rotation);
        self.backend
            .set_local_transform(self.core.arena.root(), transform)
    }

    /// Creates or updates one line primitive per axis.
    pub(super) fn sync_axes(&mut self) -> StarplotResult<()> {
        let lines = build_axis_lines(
            &self.core.model.layout,
            self.core.presentation.line_width,
            self.core.presentation.axis_line_color,
        );
        let transform = LocalTransform::from_translation(DVec3::new(0.0, AXIS_LINE_LIFT, 0.0));
        for line in &lines {
            let handle = self.core.arena.ensure(
                &mut self.backend,
                &self.core.name,
                PrimitiveKey::Axis(line.axis_index),
            )?;
            self.backend.set_local_transform(handle, transform)?;
            self.backend.submit_axis_line(handle, line)?;
        }
        trace!(name = %self.core.name, count = lines.len(), "synced axis lines");
        Ok(())
    }

    /// Rebuilds the triangle fan and submits every wedge in place.
    pub(super) fn sync_wedges(&mut self) -> StarplotResult<()> {
        let wedges = build_wedges(
            &self.core.model.layout,
            &self.core.model.current_data,
            &self.core.model.axis_max,
            &self.core.presentation.colors,
        )?;
        let transform = LocalTransform::from_translation(DVec3::new(0.0, WEDGE_LIFT, 0.0));
        for wedge in &wedges {
            let handle = self.core.arena.ensure(
                &mut self.backend,
                &self.core.name,
                PrimitiveKey::Wedge(wedge.axis_index),
            )?;
            self.backend.set_local_transform(handle, transform)?;
            self.backend
                .submit_wedge(handle, wedge, &self.core.presentation.wedge_material)?;
        }
        trace!(name = %self.core.name, count = wedges.len(), "synced wedges");
        Ok(())
    }

    /// Refreshes the value label of every axis, creating labels on first use.
    pub(super) fn sync_labels(&mut self) -> StarplotResult<()> {
        let labels = build_labels(
            &self.core.model.layout,
            &self.core.model.current_data,
            self.core.presentation.units.as_deref(),
            self.core.presentation.label_color,
        )?;
        for label in &labels {
            let handle = self.core.arena.ensure(
                &mut self.backend,
                &self.core.name,
                PrimitiveKey::Label(label.axis_index),
            )?;
            self.backend.submit_label(handle, label)?;
        }
        trace!(name = %self.core.name, count = labels.len(), "synced labels");
        Ok(())
    }

    /// Resets the local rotation of every axis and wedge primitive.
    pub(super) fn reset_primitive_rotations(&mut self) -> StarplotResult<()> {
        let axis_count = self.axis_count();
        for (key, lift) in (0..axis_count)
            .map(|index| (PrimitiveKey::Axis(index), AXIS_LINE_LIFT))
            .chain((0..axis_count).map(|index| (PrimitiveKey::Wedge(index), WEDGE_LIFT)))
        {
            if let Some(handle) = self.core.arena.get(key) {
                let transform = LocalTransform::from_translation(DVec3::new(0.0, lift, 0.0))
                    .with_rotation(DQuat::IDENTITY);
                self.backend.set_local_transform(handle, transform)?;
            }
        }
        Ok(())
    }
}
