use crate::{
    foundation::core::Transform3D,
    foundation::error::{OrreryError, OrreryResult},
    math::mat4::Mat4,
    scene::light::DirectionalLight,
    scene::node::{GeometryInfo, Node, NodeId},
};

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// An insertion-ordered collection of nodes and directional lights.
///
/// Nodes live in an arena and refer to their parents by [`NodeId`]; paint
/// order is insertion order, with no uniqueness or tree-shape constraint
/// beyond acyclicity. [`Scene::set_parent`] rejects any assignment that
/// would close a cycle, and [`Scene::validate`] re-checks scenes that
/// arrive through deserialization.
pub struct Scene {
    #[serde(default)]
    nodes: Vec<Node>,
    #[serde(default)]
    lights: Vec<DirectionalLight>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a root node with the identity transform and return its id.
    ///
    /// The transform pivot is seeded from `geometry.center`, so rotation and
    /// scale act about the geometry's own middle rather than orbiting the
    /// local origin.
    pub fn spawn(&mut self, name: impl Into<String>, geometry: GeometryInfo) -> NodeId {
        let mut transform = Transform3D::default();
        if let Some(center) = geometry.center {
            transform.pivot = center;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name: name.into(),
            transform,
            geometry,
            parent: None,
        });
        id
    }

    /// Append a node already parented to `parent`.
    pub fn spawn_child(
        &mut self,
        name: impl Into<String>,
        geometry: GeometryInfo,
        parent: NodeId,
    ) -> OrreryResult<NodeId> {
        let id = self.spawn(name, geometry);
        self.set_parent(id, Some(parent))?;
        Ok(id)
    }

    /// Borrow a node.
    pub fn node(&self, id: NodeId) -> OrreryResult<&Node> {
        self.nodes
            .get(id.0)
            .ok_or_else(|| OrreryError::scene(format!("unknown node id {}", id.0)))
    }

    /// Mutably borrow a node.
    pub fn node_mut(&mut self, id: NodeId) -> OrreryResult<&mut Node> {
        self.nodes
            .get_mut(id.0)
            .ok_or_else(|| OrreryError::scene(format!("unknown node id {}", id.0)))
    }

    /// A node's current parent.
    pub fn parent(&self, id: NodeId) -> OrreryResult<Option<NodeId>> {
        Ok(self.node(id)?.parent)
    }

    /// Reparent `child`, or detach it with `None`.
    ///
    /// Fails when either id is unknown, when the child would parent itself,
    /// or when the child already sits on the proposed parent's ancestor
    /// chain (the assignment would close a cycle).
    pub fn set_parent(&mut self, child: NodeId, parent: Option<NodeId>) -> OrreryResult<()> {
        self.node(child)?;
        if let Some(parent_id) = parent {
            self.node(parent_id)?;
            if parent_id == child {
                return Err(OrreryError::scene(format!(
                    "node '{}' cannot be its own parent",
                    self.nodes[child.0].name
                )));
            }
            // Walk from the proposed parent to the root.
            let mut cursor = Some(parent_id);
            let mut hops = 0usize;
            while let Some(id) = cursor {
                if id == child {
                    return Err(OrreryError::scene(format!(
                        "parenting '{}' under '{}' would close a cycle",
                        self.nodes[child.0].name, self.nodes[parent_id.0].name
                    )));
                }
                hops += 1;
                if hops > self.nodes.len() {
                    return Err(OrreryError::scene(
                        "parent chain does not terminate; run validate() on deserialized scenes",
                    ));
                }
                cursor = self.node(id)?.parent;
            }
        }
        self.nodes[child.0].parent = parent;
        Ok(())
    }

    /// All node ids in paint (insertion) order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        (0..self.nodes.len()).map(NodeId).collect()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the scene holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a directional light.
    pub fn add_light(&mut self, light: DirectionalLight) {
        self.lights.push(light);
    }

    /// Lights in insertion order.
    pub fn lights(&self) -> &[DirectionalLight] {
        &self.lights
    }

    /// The node's local transform, recomputed from authored state.
    pub fn local_transform(&self, id: NodeId) -> OrreryResult<Mat4> {
        Ok(self.node(id)?.local_transform())
    }

    /// The node's world transform.
    ///
    /// Equals the product of every ancestor's local transform in
    /// root-to-node order, times the node's own local transform. A node
    /// without a parent has `world == local`. Nothing is cached; each call
    /// recomputes from authored state.
    pub fn world_transform(&self, id: NodeId) -> OrreryResult<Mat4> {
        // Locals in node-to-root order, then reversed for composition.
        let mut chain = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = self.node(current)?;
            chain.push(node.local_transform());
            if chain.len() > self.nodes.len() {
                return Err(OrreryError::scene(format!(
                    "parent chain of '{}' does not terminate",
                    self.nodes[id.0].name
                )));
            }
            cursor = node.parent;
        }
        chain.reverse();
        Ok(Mat4::compose(&chain))
    }

    /// The inverse transpose of the node's world transform, for lighting
    /// normals. Degenerate world transforms yield [`Mat4::ZERO`].
    pub fn normal_matrix(&self, id: NodeId) -> OrreryResult<Mat4> {
        Ok(self.world_transform(id)?.normal_matrix())
    }

    /// Validate scene invariants.
    ///
    /// Checks that every node has a name and finite transform data, that
    /// every parent id is in bounds, that parent chains terminate, and that
    /// every light direction is finite and unit length. Programmatic
    /// construction upholds all of this already; scenes built through
    /// deserialization get their first check here, and the frame pass calls
    /// this before drawing.
    pub fn validate(&self) -> OrreryResult<()> {
        for (index, node) in self.nodes.iter().enumerate() {
            if node.name.trim().is_empty() {
                return Err(OrreryError::validation(format!(
                    "node {index} name must be non-empty"
                )));
            }
            if !node.transform.is_finite() {
                return Err(OrreryError::validation(format!(
                    "node '{}' transform must be finite",
                    node.name
                )));
            }
            if let Some(center) = node.geometry.center
                && !center.is_finite()
            {
                return Err(OrreryError::validation(format!(
                    "node '{}' geometry center must be finite",
                    node.name
                )));
            }
            if let Some(parent) = node.parent
                && parent.0 >= self.nodes.len()
            {
                return Err(OrreryError::scene(format!(
                    "node '{}' parent id {} is out of bounds",
                    node.name, parent.0
                )));
            }
        }

        // Parent ids are all in bounds past this point; walk each chain.
        for start in 0..self.nodes.len() {
            let mut cursor = self.nodes[start].parent;
            let mut hops = 0usize;
            while let Some(id) = cursor {
                hops += 1;
                if hops > self.nodes.len() {
                    return Err(OrreryError::scene(format!(
                        "node '{}' is part of a parent cycle",
                        self.nodes[start].name
                    )));
                }
                cursor = self.nodes[id.0].parent;
            }
        }

        for (index, light) in self.lights.iter().enumerate() {
            if !light.direction.is_finite() {
                return Err(OrreryError::validation(format!(
                    "light {index} direction must be finite"
                )));
            }
            if (light.direction.length() - 1.0).abs() > 1e-3 {
                return Err(OrreryError::validation(format!(
                    "light {index} direction must be unit length"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/graph.rs"]
mod tests;
