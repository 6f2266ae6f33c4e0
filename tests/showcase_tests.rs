use rv_showcase::showcase::{Showcase, Viewport, POINTER_PITCH_RANGE, POINTER_YAW_RANGE, SPIN_STEP};

#[cfg(test)]
mod showcase_tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn test_bootstrap_scene_inventory() {
        let showcase = Showcase::new(1280, 720);
        let scene = showcase.scene();

        assert_eq!(scene.mesh_count(), 7, "ground + body + roof + 4 wheels");
        assert_eq!(scene.light_count(), 4);

        let ambient = scene.ambient.expect("ambient light missing");
        assert_eq!(ambient.intensity, 0.6);

        let sun = scene.directional.expect("directional light missing");
        assert!(sun.cast_shadow);
        assert_eq!(sun.position.to_array(), [5.0, 5.0, 5.0]);

        assert_eq!(scene.point_lights.len(), 2);
        assert!(scene.point_lights.iter().all(|l| l.range == 100.0));
    }

    #[test]
    fn test_spin_is_monotonic_and_unbounded() {
        let mut showcase = Showcase::new(1280, 720);

        for _ in 0..10_000 {
            showcase.step();
        }

        // 10k steps of 0.005 rad: well past a full turn, never wrapped.
        // Loose tolerance: f32 accumulation drifts over this many adds.
        let expected = SPIN_STEP * 10_000.0;
        assert!((showcase.vehicle_yaw() - expected).abs() < 0.05);
        assert!(showcase.vehicle_yaw() > std::f32::consts::TAU);
    }

    #[test]
    fn test_resize_updates_camera_and_viewport() {
        let mut showcase = Showcase::new(1280, 720);

        showcase.handle_resize(800, 600);
        assert_eq!(showcase.camera().aspect, 800.0 / 600.0);
        assert_eq!(
            showcase.viewport(),
            Viewport {
                width: 800,
                height: 600
            }
        );

        // Same dimensions again: identical state
        let aspect = showcase.camera().aspect;
        showcase.handle_resize(800, 600);
        assert_eq!(showcase.camera().aspect, aspect);
    }

    #[test]
    fn test_cursor_center_gives_neutral_pose() {
        let mut showcase = Showcase::new(1000, 500);
        showcase.handle_cursor(500.0, 250.0);

        assert!(showcase.vehicle_yaw().abs() < EPS);
        assert!(showcase.vehicle_pitch().abs() < EPS);
    }

    #[test]
    fn test_cursor_corners_give_extreme_pose() {
        let mut showcase = Showcase::new(1000, 500);

        showcase.handle_cursor(0.0, 0.0);
        assert!((showcase.vehicle_yaw() + POINTER_YAW_RANGE).abs() < EPS);
        assert!((showcase.vehicle_pitch() - POINTER_PITCH_RANGE).abs() < EPS);

        showcase.handle_cursor(1000.0, 500.0);
        assert!((showcase.vehicle_yaw() - POINTER_YAW_RANGE).abs() < EPS);
        assert!((showcase.vehicle_pitch() + POINTER_PITCH_RANGE).abs() < EPS);
    }

    #[test]
    fn test_cursor_overwrites_spin() {
        let mut showcase = Showcase::new(1000, 500);

        for _ in 0..500 {
            showcase.step();
        }
        showcase.handle_cursor(750.0, 250.0);

        // Pointer pose replaces the accumulated spin outright
        assert!((showcase.vehicle_yaw() - 0.25).abs() < 1e-5);
        assert!(showcase.vehicle_pitch().abs() < EPS);
    }

    #[test]
    fn test_cursor_mapping_tracks_resize() {
        let mut showcase = Showcase::new(1000, 500);
        showcase.handle_resize(400, 400);

        // Center of the new viewport, not the old one
        showcase.handle_cursor(200.0, 200.0);
        assert!(showcase.vehicle_yaw().abs() < EPS);
        assert!(showcase.vehicle_pitch().abs() < EPS);
    }
}
