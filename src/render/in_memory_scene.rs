use glam::DMat4;
use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::error::{StarplotError, StarplotResult};
use crate::render::{
    AxisLabel, AxisLine, LocalTransform, MaterialRef, PrimitiveHandle, PrimitiveKind,
    SceneBackend, WedgeMesh,
};

/// Recorded state of one primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub name: String,
    pub kind: PrimitiveKind,
    pub parent: Option<PrimitiveHandle>,
    pub children: SmallVec<[PrimitiveHandle; 8]>,
    pub enabled: bool,
    pub transform: LocalTransform,
    pub wedge: Option<(WedgeMesh, MaterialRef)>,
    pub line: Option<AxisLine>,
    pub label: Option<AxisLabel>,
    pub submit_count: u64,
}

/// Headless scene registry used by tests and hosts without a scene graph.
///
/// Payloads are validated on submission so tests catch invalid geometry
/// before a real backend is involved.
#[derive(Debug, Default)]
pub struct InMemoryScene {
    nodes: IndexMap<PrimitiveHandle, SceneNode>,
    names: IndexMap<String, PrimitiveHandle>,
    next_id: u64,
}

impl InMemoryScene {
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn node(&self, handle: PrimitiveHandle) -> Option<&SceneNode> {
        self.nodes.get(&handle)
    }

    #[must_use]
    pub fn node_by_name(&self, name: &str) -> Option<&SceneNode> {
        self.names.get(name).and_then(|handle| self.nodes.get(handle))
    }

    /// Live primitives in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = (PrimitiveHandle, &SceneNode)> {
        self.nodes.iter().map(|(handle, node)| (*handle, node))
    }

    pub fn nodes_of_kind(
        &self,
        kind: PrimitiveKind,
    ) -> impl Iterator<Item = (PrimitiveHandle, &SceneNode)> {
        self.nodes().filter(move |(_, node)| node.kind == kind)
    }

    /// Attaches a local transform to a bare container, e.g. a host parent node.
    pub fn create_container(
        &mut self,
        name: &str,
        transform: LocalTransform,
    ) -> StarplotResult<PrimitiveHandle> {
        let handle = self.create(name, PrimitiveKind::Container, None)?;
        self.set_local_transform(handle, transform)?;
        Ok(handle)
    }

    fn node_mut(&mut self, handle: PrimitiveHandle) -> StarplotResult<&mut SceneNode> {
        self.nodes
            .get_mut(&handle)
            .ok_or_else(|| unknown_handle(handle))
    }

    fn collect_subtree(&self, root: PrimitiveHandle, out: &mut Vec<PrimitiveHandle>) {
        out.push(root);
        if let Some(node) = self.nodes.get(&root) {
            for child in &node.children {
                self.collect_subtree(*child, out);
            }
        }
    }
}

impl SceneBackend for InMemoryScene {
    fn find(&self, name: &str) -> Option<PrimitiveHandle> {
        self.names.get(name).copied()
    }

    fn kind_of(&self, handle: PrimitiveHandle) -> Option<PrimitiveKind> {
        self.nodes.get(&handle).map(|node| node.kind)
    }

    fn parent_of(&self, handle: PrimitiveHandle) -> Option<PrimitiveHandle> {
        self.nodes.get(&handle).and_then(|node| node.parent)
    }

    fn create(
        &mut self,
        name: &str,
        kind: PrimitiveKind,
        parent: Option<PrimitiveHandle>,
    ) -> StarplotResult<PrimitiveHandle> {
        if self.names.contains_key(name) {
            return Err(StarplotError::Backend(format!(
                "primitive name `{name}` is already registered"
            )));
        }
        if let Some(parent) = parent {
            if !self.nodes.contains_key(&parent) {
                return Err(unknown_handle(parent));
            }
        }

        self.next_id += 1;
        let handle = PrimitiveHandle(self.next_id);
        self.nodes.insert(
            handle,
            SceneNode {
                name: name.to_owned(),
                kind,
                parent,
                children: SmallVec::new(),
                enabled: true,
                transform: LocalTransform::default(),
                wedge: None,
                line: None,
                label: None,
                submit_count: 0,
            },
        );
        self.names.insert(name.to_owned(), handle);
        if let Some(parent) = parent {
            self.node_mut(parent)?.children.push(handle);
        }
        Ok(handle)
    }

    fn destroy(&mut self, handle: PrimitiveHandle) -> StarplotResult<()> {
        let parent = self
            .nodes
            .get(&handle)
            .ok_or_else(|| unknown_handle(handle))?
            .parent;
        if let Some(parent) = parent.and_then(|parent| self.nodes.get_mut(&parent)) {
            parent.children.retain(|child| *child != handle);
        }

        let mut subtree = Vec::new();
        self.collect_subtree(handle, &mut subtree);
        for handle in subtree {
            if let Some(node) = self.nodes.shift_remove(&handle) {
                self.names.shift_remove(&node.name);
            }
        }
        Ok(())
    }

    fn set_enabled(&mut self, handle: PrimitiveHandle, enabled: bool) -> StarplotResult<()> {
        self.node_mut(handle)?.enabled = enabled;
        Ok(())
    }

    fn set_local_transform(
        &mut self,
        handle: PrimitiveHandle,
        transform: LocalTransform,
    ) -> StarplotResult<()> {
        self.node_mut(handle)?.transform = transform;
        Ok(())
    }

    fn world_transform(&self, handle: PrimitiveHandle) -> DMat4 {
        let mut world = DMat4::IDENTITY;
        let mut cursor = Some(handle);
        while let Some(node) = cursor.and_then(|handle| self.nodes.get(&handle)) {
            let local = DMat4::from_scale_rotation_translation(
                node.transform.scale,
                node.transform.rotation,
                node.transform.translation,
            );
            world = local * world;
            cursor = node.parent;
        }
        world
    }

    fn submit_wedge(
        &mut self,
        handle: PrimitiveHandle,
        wedge: &WedgeMesh,
        material: &MaterialRef,
    ) -> StarplotResult<()> {
        wedge.validate()?;
        let node = self.node_mut(handle)?;
        node.wedge = Some((*wedge, material.clone()));
        node.submit_count += 1;
        Ok(())
    }

    fn submit_axis_line(&mut self, handle: PrimitiveHandle, line: &AxisLine) -> StarplotResult<()> {
        line.validate()?;
        let node = self.node_mut(handle)?;
        node.line = Some(*line);
        node.submit_count += 1;
        Ok(())
    }

    fn submit_label(&mut self, handle: PrimitiveHandle, label: &AxisLabel) -> StarplotResult<()> {
        label.validate()?;
        let node = self.node_mut(handle)?;
        node.label = Some(label.clone());
        node.submit_count += 1;
        Ok(())
    }
}

fn unknown_handle(handle: PrimitiveHandle) -> StarplotError {
    StarplotError::Backend(format!("unknown primitive handle {}", handle.0))
}
