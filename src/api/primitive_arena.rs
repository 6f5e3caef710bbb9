use serde::{Deserialize, Serialize};

use crate::error::StarplotResult;
use crate::render::{PrimitiveHandle, PrimitiveKind, SceneBackend};

/// Chart-local key of a scene primitive owned by one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKey {
    Root,
    Axis(usize),
    Wedge(usize),
    Label(usize),
}

impl PrimitiveKey {
    #[must_use]
    pub fn kind(self) -> PrimitiveKind {
        match self {
            Self::Root => PrimitiveKind::Container,
            Self::Axis(_) => PrimitiveKind::AxisLine,
            Self::Wedge(_) => PrimitiveKind::WedgeMesh,
            Self::Label(_) => PrimitiveKind::Label,
        }
    }

    /// Name used for create-or-find lookups in the scene registry.
    #[must_use]
    pub fn registry_name(self, chart_name: &str) -> String {
        match self {
            Self::Root => chart_name.to_owned(),
            Self::Axis(index) => format!("{chart_name}_Axis{index}"),
            Self::Wedge(index) => format!("{chart_name}_Triangle{index}"),
            Self::Label(index) => format!("{chart_name}_Axis{index}_label_main"),
        }
    }
}

/// Fixed-size handle slots for every primitive a chart owns.
///
/// Slots start empty and are filled lazily through `ensure`; the backend keeps
/// the primitives alive, the arena only remembers where they are.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct PrimitiveArena {
    root: PrimitiveHandle,
    axes: Vec<Option<PrimitiveHandle>>,
    wedges: Vec<Option<PrimitiveHandle>>,
    labels: Vec<Option<PrimitiveHandle>>,
}

impl PrimitiveArena {
    pub(super) fn new(root: PrimitiveHandle, axis_count: usize) -> Self {
        Self {
            root,
            axes: vec![None; axis_count],
            wedges: vec![None; axis_count],
            labels: vec![None; axis_count],
        }
    }

    pub(super) fn root(&self) -> PrimitiveHandle {
        self.root
    }

    pub(super) fn get(&self, key: PrimitiveKey) -> Option<PrimitiveHandle> {
        match key {
            PrimitiveKey::Root => Some(self.root),
            PrimitiveKey::Axis(index) => self.axes.get(index).copied().flatten(),
            PrimitiveKey::Wedge(index) => self.wedges.get(index).copied().flatten(),
            PrimitiveKey::Label(index) => self.labels.get(index).copied().flatten(),
        }
    }

    /// Returns the handle for `key`, reusing a primitive of the same name when
    /// the registry already has one and creating it otherwise.
    pub(super) fn ensure<B: SceneBackend>(
        &mut self,
        backend: &mut B,
        chart_name: &str,
        key: PrimitiveKey,
    ) -> StarplotResult<PrimitiveHandle> {
        if let Some(handle) = self.get(key) {
            return Ok(handle);
        }
        let (handle, _created) =
            backend.create_or_find(&key.registry_name(chart_name), key.kind(), Some(self.root))?;
        if let Some(slot) = self.slot_mut(key) {
            *slot = Some(handle);
        }
        Ok(handle)
    }

    /// Handles of axis lines and wedges, the primitives toggled by visibility.
    pub(super) fn renderable_handles(&self) -> impl Iterator<Item = PrimitiveHandle> + '_ {
        self.wedges.iter().chain(self.axes.iter()).flatten().copied()
    }

    fn slot_mut(&mut self, key: PrimitiveKey) -> Option<&mut Option<PrimitiveHandle>> {
        match key {
            PrimitiveKey::Root => None,
            PrimitiveKey::Axis(index) => self.axes.get_mut(index),
            PrimitiveKey::Wedge(index) => self.wedges.get_mut(index),
            PrimitiveKey::Label(index) => self.labels.get_mut(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PrimitiveArena, PrimitiveKey};
    use crate::render::{InMemoryScene, PrimitiveKind, SceneBackend};

    #[test]
    fn registry_names_follow_chart_name() {
        assert_eq!(PrimitiveKey::Root.registry_name("stats"), "stats");
        assert_eq!(PrimitiveKey::Axis(2).registry_name("stats"), "stats_Axis2");
        assert_eq!(PrimitiveKey::Wedge(0).registry_name("stats"), "stats_Triangle0");
        assert_eq!(
            PrimitiveKey::Label(4).registry_name("stats"),
            "stats_Axis4_label_main"
        );
    }

    #[test]
    fn ensure_creates_once_and_then_reuses_the_slot() {
        let mut scene = InMemoryScene::default();
        let root = scene
            .create("stats", PrimitiveKind::Container, None)
            .expect("root");
        let mut arena = PrimitiveArena::new(root, 3);

        let first = arena
            .ensure(&mut scene, "stats", PrimitiveKey::Wedge(1))
            .expect("create wedge");
        let second = arena
            .ensure(&mut scene, "stats", PrimitiveKey::Wedge(1))
            .expect("reuse wedge");

        assert_eq!(first, second);
        assert_eq!(arena.get(PrimitiveKey::Wedge(1)), Some(first));
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn ensure_adopts_a_same_named_primitive_already_in_the_scene() {
        let mut scene = InMemoryScene::default();
        let root = scene
            .create("stats", PrimitiveKind::Container, None)
            .expect("root");
        let existing = scene
            .create("stats_Axis0", PrimitiveKind::AxisLine, Some(root))
            .expect("existing axis");
        let mut arena = PrimitiveArena::new(root, 3);

        let handle = arena
            .ensure(&mut scene, "stats", PrimitiveKey::Axis(0))
            .expect("adopt axis");
        assert_eq!(handle, existing);
    }
}
