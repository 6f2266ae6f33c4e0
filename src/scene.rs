use glam::{EulerRot, Mat4, Vec3};

use crate::geometry::Geometry;

/// Convert a 0xRRGGBB color to linear-ish [0,1] rgb
pub fn rgb(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

/// Surface appearance: flat base color plus a Blinn-Phong shininess exponent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Vec3,
    pub shininess: f32,
}

impl Material {
    pub fn new(color: Vec3, shininess: f32) -> Self {
        Self { color, shininess }
    }

    pub fn from_hex(hex: u32, shininess: f32) -> Self {
        Self::new(rgb(hex), shininess)
    }
}

/// Position + Euler rotation (x = pitch, y = yaw, z = roll, radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
    };

    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_euler(
                EulerRot::YXZ,
                self.rotation.y,
                self.rotation.x,
                self.rotation.z,
            )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Handle to a node inside a `Scene`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Scene graph node: a transform, optionally a mesh, optionally a parent
#[derive(Debug, Clone)]
pub struct Node {
    pub transform: Transform,
    pub geometry: Option<Geometry>,
    pub material: Material,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
    pub parent: Option<NodeId>,
}

impl Node {
    /// Mesh node with default transform and shadow flags off
    pub fn mesh(geometry: Geometry, material: Material) -> Self {
        Self {
            transform: Transform::IDENTITY,
            geometry: Some(geometry),
            material,
            cast_shadow: false,
            receive_shadow: false,
            parent: None,
        }
    }

    /// Empty transform node used to group children
    pub fn group() -> Self {
        Self {
            transform: Transform::IDENTITY,
            geometry: None,
            material: Material::new(Vec3::ONE, 1.0),
            cast_shadow: false,
            receive_shadow: false,
            parent: None,
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.transform.rotation = rotation;
        self
    }

    pub fn child_of(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn casting_shadow(mut self) -> Self {
        self.cast_shadow = true;
        self
    }

    pub fn receiving_shadow(mut self) -> Self {
        self.receive_shadow = true;
        self
    }
}

/// Uniform fill light, no direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: Vec3,
    pub intensity: f32,
}

/// Sun-style light shining from `position` toward the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: Vec3,
    pub intensity: f32,
    pub position: Vec3,
    pub cast_shadow: bool,
}

impl DirectionalLight {
    /// Direction the light travels
    pub fn direction(&self) -> Vec3 {
        (-self.position).normalize()
    }
}

/// Omnidirectional light with a finite range, never shadow-casting here
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub color: Vec3,
    pub intensity: f32,
    pub position: Vec3,
    pub range: f32,
}

/// Retained scene: node arena plus the fixed light rig
///
/// Nodes are never removed; the arena index doubles as the node handle.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: Vec<Node>,
    pub ambient: Option<AmbientLight>,
    pub directional: Option<DirectionalLight>,
    pub point_lights: Vec<PointLight>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, node: Node) -> NodeId {
        if let Some(NodeId(parent)) = node.parent {
            assert!(parent < self.nodes.len(), "parent node must exist");
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Nodes that carry geometry (drawable)
    pub fn meshes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes().filter(|(_, n)| n.geometry.is_some())
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes().count()
    }

    pub fn light_count(&self) -> usize {
        self.ambient.is_some() as usize
            + self.directional.is_some() as usize
            + self.point_lights.len()
    }

    /// Compose the node's transform with its parent chain
    pub fn world_transform(&self, id: NodeId) -> Mat4 {
        let node = self.node(id);
        let local = node.transform.matrix();
        match node.parent {
            Some(parent) => self.world_transform(parent) * local,
            None => local,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_unpacks_hex_channels() {
        let c = rgb(0x1e3a8a);
        assert!((c.x - 0x1e as f32 / 255.0).abs() < 1e-6);
        assert!((c.y - 0x3a as f32 / 255.0).abs() < 1e-6);
        assert!((c.z - 0x8a as f32 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn empty_scene_has_no_objects() {
        let scene = Scene::new();
        assert_eq!(scene.mesh_count(), 0);
        assert_eq!(scene.light_count(), 0);
    }

    #[test]
    fn group_nodes_are_not_meshes() {
        let mut scene = Scene::new();
        let group = scene.add(Node::group());
        scene.add(
            Node::mesh(
                Geometry::Box {
                    width: 1.0,
                    height: 1.0,
                    depth: 1.0,
                },
                Material::from_hex(0xffffff, 1.0),
            )
            .child_of(group),
        );

        assert_eq!(scene.mesh_count(), 1);
        assert_eq!(scene.nodes().count(), 2);
    }

    #[test]
    fn world_transform_composes_parent_chain() {
        let mut scene = Scene::new();
        let group = scene.add(Node::group().at(Vec3::new(1.0, 0.0, 0.0)));
        let child = scene.add(
            Node::mesh(
                Geometry::Plane {
                    width: 1.0,
                    depth: 1.0,
                },
                Material::from_hex(0xffffff, 1.0),
            )
            .at(Vec3::new(0.0, 2.0, 0.0))
            .child_of(group),
        );

        let origin = scene.world_transform(child).transform_point3(Vec3::ZERO);
        assert!((origin - Vec3::new(1.0, 2.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn parent_yaw_rotates_children() {
        let mut scene = Scene::new();
        let group = scene.add(Node::group());
        let child = scene.add(
            Node::mesh(
                Geometry::Box {
                    width: 1.0,
                    height: 1.0,
                    depth: 1.0,
                },
                Material::from_hex(0xffffff, 1.0),
            )
            .at(Vec3::new(0.0, 0.0, 1.0))
            .child_of(group),
        );

        scene.node_mut(group).transform.rotation.y = std::f32::consts::FRAC_PI_2;
        let origin = scene.world_transform(child).transform_point3(Vec3::ZERO);

        // Yaw by 90 degrees swings +Z onto +X
        assert!((origin - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    #[should_panic(expected = "parent node must exist")]
    fn adding_child_of_missing_parent_panics() {
        let mut scene = Scene::new();
        let mut orphan = Node::group();
        orphan.parent = Some(NodeId(42));
        scene.add(orphan);
    }

    #[test]
    fn directional_light_points_at_origin() {
        let light = DirectionalLight {
            color: Vec3::ONE,
            intensity: 1.0,
            position: Vec3::new(5.0, 5.0, 5.0),
            cast_shadow: true,
        };

        let dir = light.direction();
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!(dir.x < 0.0 && dir.y < 0.0 && dir.z < 0.0);
    }
}
