use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use crate::geometry::Geometry;
use crate::scene::{Material, Node, NodeId, Scene};

pub const BODY_COLOR: u32 = 0x1e3a8a;
pub const ROOF_COLOR: u32 = 0x166534;
pub const WHEEL_COLOR: u32 = 0x333333;

pub const WHEEL_RADIUS: f32 = 0.4;
pub const WHEEL_WIDTH: f32 = 0.3;
pub const WHEEL_SEGMENTS: u32 = 32;

/// Wheel centers, local to the vehicle group
pub const WHEEL_POSITIONS: [Vec3; 4] = [
    Vec3::new(-1.5, -0.4, 1.5),
    Vec3::new(1.5, -0.4, 1.5),
    Vec3::new(-1.5, -0.4, -1.5),
    Vec3::new(1.5, -0.4, -1.5),
];

/// Assemble the RV out of primitives and parent every part to one group
/// node, so rotating the group spins body, roof and wheels together.
/// Returns the group's handle; that node is what animation and pointer
/// input drive.
pub fn build_vehicle(scene: &mut Scene) -> NodeId {
    let root = scene.add(Node::group());

    // Body
    scene.add(
        Node::mesh(
            Geometry::Box {
                width: 3.0,
                height: 1.5,
                depth: 6.0,
            },
            Material::from_hex(BODY_COLOR, 100.0),
        )
        .child_of(root)
        .casting_shadow(),
    );

    // Roof, set back and above the body
    scene.add(
        Node::mesh(
            Geometry::Box {
                width: 2.5,
                height: 0.5,
                depth: 4.0,
            },
            Material::from_hex(ROOF_COLOR, 100.0),
        )
        .at(Vec3::new(0.0, 1.0, -0.5))
        .child_of(root)
        .casting_shadow(),
    );

    // Wheels, rolled onto their sides
    for position in WHEEL_POSITIONS {
        scene.add(
            Node::mesh(
                Geometry::Cylinder {
                    radius: WHEEL_RADIUS,
                    height: WHEEL_WIDTH,
                    segments: WHEEL_SEGMENTS,
                },
                Material::from_hex(WHEEL_COLOR, 30.0),
            )
            .at(position)
            .rotated(Vec3::new(0.0, 0.0, FRAC_PI_2))
            .child_of(root)
            .casting_shadow(),
        );
    }

    root
}
