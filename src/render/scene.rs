use glam::DMat4;

use crate::error::{StarplotError, StarplotResult};
use crate::render::{
    AxisLabel, AxisLine, LocalTransform, MaterialRef, PrimitiveHandle, PrimitiveKind, WedgeMesh,
};

/// Scene-graph capabilities the engine needs from its host.
///
/// The backend owns primitive lifetimes and name-based identity; the engine
/// only keeps the handles it was given. All calls happen on the thread that
/// drives the engine.
pub trait SceneBackend {
    /// Looks up a live primitive by its registry name.
    fn find(&self, name: &str) -> Option<PrimitiveHandle>;

    fn create(
        &mut self,
        name: &str,
        kind: PrimitiveKind,
        parent: Option<PrimitiveHandle>,
    ) -> StarplotResult<PrimitiveHandle>;

    /// Kind of a live primitive; `None` for unknown handles.
    fn kind_of(&self, handle: PrimitiveHandle) -> Option<PrimitiveKind>;

    /// Parent of a live primitive; `None` for roots and unknown handles.
    fn parent_of(&self, handle: PrimitiveHandle) -> Option<PrimitiveHandle>;

    /// Releases a primitive and all of its children.
    fn destroy(&mut self, handle: PrimitiveHandle) -> StarplotResult<()>;

    fn set_enabled(&mut self, handle: PrimitiveHandle, enabled: bool) -> StarplotResult<()>;

    fn set_local_transform(
        &mut self,
        handle: PrimitiveHandle,
        transform: LocalTransform,
    ) -> StarplotResult<()>;

    /// World transform of a primitive; identity for unknown handles.
    fn world_transform(&self, handle: PrimitiveHandle) -> DMat4;

    fn submit_wedge(
        &mut self,
        handle: PrimitiveHandle,
        wedge: &WedgeMesh,
        material: &MaterialRef,
    ) -> StarplotResult<()>;

    fn submit_axis_line(&mut self, handle: PrimitiveHandle, line: &AxisLine) -> StarplotResult<()>;

    fn submit_label(&mut self, handle: PrimitiveHandle, label: &AxisLabel) -> StarplotResult<()>;

    /// Returns the existing primitive named `name`, creating it when absent.
    ///
    /// An existing primitive is only reused when it has the requested kind
    /// and parent; any other owner of the name is a `DuplicateName` error.
    /// The boolean is `true` when a new primitive was created.
    fn create_or_find(
        &mut self,
        name: &str,
        kind: PrimitiveKind,
        parent: Option<PrimitiveHandle>,
    ) -> StarplotResult<(PrimitiveHandle, bool)> {
        if let Some(handle) = self.find(name) {
            if self.kind_of(handle) != Some(kind) || self.parent_of(handle) != parent {
                return Err(StarplotError::DuplicateName(name.to_owned()));
            }
            return Ok((handle, false));
        }
        self.create(name, kind, parent).map(|handle| (handle, true))
    }
}

impl<B: SceneBackend + ?Sized> SceneBackend for &mut B {
    fn find(&self, name: &str) -> Option<PrimitiveHandle> {
        (**self).find(name)
    }

    fn create(
        &mut self,
        name: &str,
        kind: PrimitiveKind,
        parent: Option<PrimitiveHandle>,
    ) -> StarplotResult<PrimitiveHandle> {
        (**self).create(name, kind, parent)
    }

    fn kind_of(&self, handle: PrimitiveHandle) -> Option<PrimitiveKind> {
        (**self).kind_of(handle)
    }

    fn parent_of(&self, handle: PrimitiveHandle) -> Option<PrimitiveHandle> {
        (**self).parent_of(handle)
    }

    fn destroy(&mut self, handle: PrimitiveHandle) -> StarplotResult<()> {
        (**self).destroy(handle)
    }

    fn set_enabled(&mut self, handle: PrimitiveHandle, enabled: bool) -> StarplotResult<()> {
        (**self).set_enabled(handle, enabled)
    }

    fn set_local_transform(
        &mut self,
        handle: PrimitiveHandle,
        transform: LocalTransform,
    ) -> StarplotResult<()> {
        (**self).set_local_transform(handle, transform)
    }

    fn world_transform(&self, handle: PrimitiveHandle) -> DMat4 {
        (**self).world_transform(handle)
    }

    fn submit_wedge(
        &mut self,
        handle: PrimitiveHandle,
        wedge: &WedgeMesh,
        material: &MaterialRef,
    ) -> StarplotResult<()> {
        (**self).submit_wedge(handle, wedge, material)
    }

    fn submit_axis_line(&mut self, handle: PrimitiveHandle, line: &AxisLine) -> StarplotResult<()> {
        (**self).submit_axis_line(handle, line)
    }

    fn submit_label(&mut self, handle: PrimitiveHandle, label: &AxisLabel) -> StarplotResult<()> {
        (**self).submit_label(handle, label)
    }
}
