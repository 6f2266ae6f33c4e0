use glam::Vec3;

use crate::camera::PerspectiveCamera;
use crate::geometry::Geometry;
use crate::scene::{
    AmbientLight, DirectionalLight, Material, Node, NodeId, PointLight, Scene,
};
use crate::vehicle::build_vehicle;

/// Yaw added every animation step, radians
pub const SPIN_STEP: f32 = 0.005;
/// Pointer at the window edge maps to this much yaw, radians
pub const POINTER_YAW_RANGE: f32 = 0.5;
/// Pointer at the window edge maps to this much pitch, radians
pub const POINTER_PITCH_RANGE: f32 = 0.2;

pub const GROUND_SIZE: f32 = 20.0;
pub const GROUND_COLOR: u32 = 0x1e3a8a;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// The whole showcase state: scene, camera, vehicle handle and viewport.
///
/// Everything in here is plain CPU state; the GPU renderer only reads it.
/// The event loop calls `step` once per frame and forwards resize and
/// cursor events. Pointer input overwrites the vehicle pose, the spin
/// keeps accumulating on top of it; whichever event arrives last in a
/// frame wins its axis.
pub struct Showcase {
    scene: Scene,
    camera: PerspectiveCamera,
    vehicle: NodeId,
    viewport: Viewport,
}

impl Showcase {
    /// Build the fixed scene: light rig, vehicle, ground plane.
    pub fn new(width: u32, height: u32) -> Self {
        let camera = PerspectiveCamera::new(width as f32 / height as f32);
        let mut scene = Scene::new();

        scene.ambient = Some(AmbientLight {
            color: Vec3::ONE,
            intensity: 0.6,
        });
        scene.directional = Some(DirectionalLight {
            color: Vec3::ONE,
            intensity: 1.0,
            position: Vec3::new(5.0, 5.0, 5.0),
            cast_shadow: true,
        });
        scene.point_lights.push(PointLight {
            color: crate::scene::rgb(0x1e3a8a),
            intensity: 1.0,
            position: Vec3::new(-5.0, 5.0, 5.0),
            range: 100.0,
        });
        scene.point_lights.push(PointLight {
            color: crate::scene::rgb(0x166534),
            intensity: 1.0,
            position: Vec3::new(5.0, 5.0, -5.0),
            range: 100.0,
        });

        let vehicle = build_vehicle(&mut scene);

        scene.add(
            Node::mesh(
                Geometry::Plane {
                    width: GROUND_SIZE,
                    depth: GROUND_SIZE,
                },
                Material::from_hex(GROUND_COLOR, 4.0),
            )
            .at(Vec3::new(0.0, -1.0, 0.0))
            .receiving_shadow(),
        );

        log::info!(
            "showcase ready: {} meshes, {} lights",
            scene.mesh_count(),
            scene.light_count()
        );

        Self {
            scene,
            camera,
            vehicle,
            viewport: Viewport { width, height },
        }
    }

    /// One animation step: constant yaw increment, unbounded, never wraps.
    pub fn step(&mut self) {
        self.scene.node_mut(self.vehicle).transform.rotation.y += SPIN_STEP;
    }

    /// Window resize: recompute camera aspect and remember the viewport.
    /// Idempotent; zero-sized viewports (minimized window) are ignored.
    pub fn handle_resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.viewport = Viewport { width, height };
        self.camera.set_aspect(width as f32 / height as f32);
    }

    /// Pointer moved to (x, y) in physical pixels. Maps the position to
    /// normalized device coordinates and overwrites the vehicle pose:
    /// yaw in [-POINTER_YAW_RANGE, POINTER_YAW_RANGE] left to right,
    /// pitch in [-POINTER_PITCH_RANGE, POINTER_PITCH_RANGE] bottom to top.
    pub fn handle_cursor(&mut self, x: f32, y: f32) {
        let ndc_x = x / self.viewport.width as f32 * 2.0 - 1.0;
        let ndc_y = 1.0 - y / self.viewport.height as f32 * 2.0;

        let rotation = &mut self.scene.node_mut(self.vehicle).transform.rotation;
        rotation.y = ndc_x * POINTER_YAW_RANGE;
        rotation.x = ndc_y * POINTER_PITCH_RANGE;
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn vehicle(&self) -> NodeId {
        self.vehicle
    }

    pub fn vehicle_yaw(&self) -> f32 {
        self.scene.node(self.vehicle).transform.rotation.y
    }

    pub fn vehicle_pitch(&self) -> f32 {
        self.scene.node(self.vehicle).transform.rotation.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn bootstrap_populates_the_full_scene() {
        let showcase = Showcase::new(800, 600);
        let scene = showcase.scene();

        // ground + body + roof + 4 wheels
        assert_eq!(scene.mesh_count(), 7);
        assert_eq!(scene.light_count(), 4);
        assert!(scene.ambient.is_some());
        assert!(scene.directional.is_some());
        assert_eq!(scene.point_lights.len(), 2);
    }

    #[test]
    fn ground_receives_but_never_casts() {
        let showcase = Showcase::new(800, 600);
        let ground: Vec<_> = showcase
            .scene()
            .meshes()
            .filter(|(_, n)| matches!(n.geometry, Some(Geometry::Plane { .. })))
            .collect();

        assert_eq!(ground.len(), 1);
        let (_, node) = ground[0];
        assert!(node.receive_shadow);
        assert!(!node.cast_shadow);
        assert_eq!(node.transform.position.y, -1.0);
    }

    #[test]
    fn step_accumulates_a_constant_yaw() {
        let mut showcase = Showcase::new(800, 600);
        assert_eq!(showcase.vehicle_yaw(), 0.0);

        let mut previous = 0.0;
        for i in 1..=1000 {
            showcase.step();
            let yaw = showcase.vehicle_yaw();
            assert!(yaw > previous, "yaw must grow monotonically");
            assert!((yaw - SPIN_STEP * i as f32).abs() < 1e-3);
            previous = yaw;
        }
    }

    #[test]
    fn resize_sets_exact_aspect_and_viewport() {
        let mut showcase = Showcase::new(800, 600);
        showcase.handle_resize(1920, 1080);

        assert_eq!(showcase.camera().aspect, 1920.0 / 1080.0);
        assert_eq!(
            showcase.viewport(),
            Viewport {
                width: 1920,
                height: 1080
            }
        );
    }

    #[test]
    fn resize_is_idempotent() {
        let mut once = Showcase::new(800, 600);
        once.handle_resize(1024, 768);

        let mut twice = Showcase::new(800, 600);
        twice.handle_resize(1024, 768);
        twice.handle_resize(1024, 768);

        assert_eq!(once.camera().aspect, twice.camera().aspect);
        assert_eq!(once.viewport(), twice.viewport());
    }

    #[test]
    fn resize_ignores_zero_dimensions() {
        let mut showcase = Showcase::new(800, 600);
        showcase.handle_resize(0, 600);
        showcase.handle_resize(800, 0);

        assert_eq!(
            showcase.viewport(),
            Viewport {
                width: 800,
                height: 600
            }
        );
    }

    #[test]
    fn cursor_at_center_zeroes_the_pose() {
        let mut showcase = Showcase::new(800, 600);
        showcase.step();
        showcase.handle_cursor(400.0, 300.0);

        assert!(showcase.vehicle_yaw().abs() < EPS);
        assert!(showcase.vehicle_pitch().abs() < EPS);
    }

    #[test]
    fn cursor_at_top_left_hits_the_range_limits() {
        let mut showcase = Showcase::new(800, 600);
        showcase.handle_cursor(0.0, 0.0);

        assert!((showcase.vehicle_yaw() + POINTER_YAW_RANGE).abs() < EPS);
        assert!((showcase.vehicle_pitch() - POINTER_PITCH_RANGE).abs() < EPS);
    }

    #[test]
    fn cursor_overwrites_then_spin_resumes_on_top() {
        let mut showcase = Showcase::new(800, 600);
        for _ in 0..100 {
            showcase.step();
        }
        showcase.handle_cursor(0.0, 300.0);
        assert!((showcase.vehicle_yaw() + POINTER_YAW_RANGE).abs() < EPS);

        showcase.step();
        assert!((showcase.vehicle_yaw() + POINTER_YAW_RANGE - SPIN_STEP).abs() < EPS);
    }
}
