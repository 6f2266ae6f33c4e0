use std::f32::consts::TAU;

use crate::types::Vertex;

/// Procedural primitive description, tessellated on demand
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Cylinder {
        radius: f32,
        height: f32,
        segments: u32,
    },
    Plane {
        width: f32,
        depth: f32,
    },
}

/// CPU-side mesh buffers ready for GPU upload
#[derive(Debug, Clone)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Geometry {
    pub fn tessellate(&self) -> MeshData {
        match *self {
            Geometry::Box {
                width,
                height,
                depth,
            } => box_mesh(width, height, depth),
            Geometry::Cylinder {
                radius,
                height,
                segments,
            } => cylinder_mesh(radius, height, segments),
            Geometry::Plane { width, depth } => plane_mesh(width, depth),
        }
    }
}

/// Axis-aligned box centered at the origin
///
/// Each face gets its own vertices so normals stay flat.
fn box_mesh(width: f32, height: f32, depth: f32) -> MeshData {
    let x = width * 0.5;
    let y = height * 0.5;
    let z = depth * 0.5;

    let vertices = vec![
        // Front (+z)
        Vertex::new([-x, -y, z], [0.0, 0.0, 1.0]),
        Vertex::new([x, -y, z], [0.0, 0.0, 1.0]),
        Vertex::new([x, y, z], [0.0, 0.0, 1.0]),
        Vertex::new([-x, y, z], [0.0, 0.0, 1.0]),
        // Back (-z)
        Vertex::new([x, -y, -z], [0.0, 0.0, -1.0]),
        Vertex::new([-x, -y, -z], [0.0, 0.0, -1.0]),
        Vertex::new([-x, y, -z], [0.0, 0.0, -1.0]),
        Vertex::new([x, y, -z], [0.0, 0.0, -1.0]),
        // Top (+y)
        Vertex::new([-x, y, z], [0.0, 1.0, 0.0]),
        Vertex::new([x, y, z], [0.0, 1.0, 0.0]),
        Vertex::new([x, y, -z], [0.0, 1.0, 0.0]),
        Vertex::new([-x, y, -z], [0.0, 1.0, 0.0]),
        // Bottom (-y)
        Vertex::new([-x, -y, -z], [0.0, -1.0, 0.0]),
        Vertex::new([x, -y, -z], [0.0, -1.0, 0.0]),
        Vertex::new([x, -y, z], [0.0, -1.0, 0.0]),
        Vertex::new([-x, -y, z], [0.0, -1.0, 0.0]),
        // Right (+x)
        Vertex::new([x, -y, z], [1.0, 0.0, 0.0]),
        Vertex::new([x, -y, -z], [1.0, 0.0, 0.0]),
        Vertex::new([x, y, -z], [1.0, 0.0, 0.0]),
        Vertex::new([x, y, z], [1.0, 0.0, 0.0]),
        // Left (-x)
        Vertex::new([-x, -y, -z], [-1.0, 0.0, 0.0]),
        Vertex::new([-x, -y, z], [-1.0, 0.0, 0.0]),
        Vertex::new([-x, y, z], [-1.0, 0.0, 0.0]),
        Vertex::new([-x, y, -z], [-1.0, 0.0, 0.0]),
    ];

    let indices = (0..6u32)
        .flat_map(|face| {
            let base = face * 4;
            [base, base + 1, base + 2, base, base + 2, base + 3]
        })
        .collect();

    MeshData { vertices, indices }
}

/// Cylinder along the Y axis, centered at the origin, with flat caps
fn cylinder_mesh(radius: f32, height: f32, segments: u32) -> MeshData {
    let half = height * 0.5;
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    // Side wall: a ring of quads with outward-facing normals
    for i in 0..=segments {
        let angle = i as f32 / segments as f32 * TAU;
        let (sin, cos) = angle.sin_cos();
        let normal = [cos, 0.0, sin];
        vertices.push(Vertex::new([radius * cos, -half, radius * sin], normal));
        vertices.push(Vertex::new([radius * cos, half, radius * sin], normal));
    }
    for i in 0..segments {
        let base = i * 2;
        indices.extend_from_slice(&[base, base + 2, base + 3, base, base + 3, base + 1]);
    }

    // Caps: center vertex fan
    for (y, normal) in [(half, [0.0, 1.0, 0.0]), (-half, [0.0, -1.0, 0.0])] {
        let center = vertices.len() as u32;
        vertices.push(Vertex::new([0.0, y, 0.0], normal));
        for i in 0..=segments {
            let angle = i as f32 / segments as f32 * TAU;
            let (sin, cos) = angle.sin_cos();
            vertices.push(Vertex::new([radius * cos, y, radius * sin], normal));
        }
        for i in 0..segments {
            let a = center + 1 + i;
            let b = center + 2 + i;
            if normal[1] > 0.0 {
                indices.extend_from_slice(&[center, b, a]);
            } else {
                indices.extend_from_slice(&[center, a, b]);
            }
        }
    }

    MeshData { vertices, indices }
}

/// Horizontal plane centered at the origin, double-sided
fn plane_mesh(width: f32, depth: f32) -> MeshData {
    let x = width * 0.5;
    let z = depth * 0.5;

    let vertices = vec![
        // Top (+y)
        Vertex::new([-x, 0.0, -z], [0.0, 1.0, 0.0]),
        Vertex::new([x, 0.0, -z], [0.0, 1.0, 0.0]),
        Vertex::new([x, 0.0, z], [0.0, 1.0, 0.0]),
        Vertex::new([-x, 0.0, z], [0.0, 1.0, 0.0]),
        // Bottom (-y)
        Vertex::new([-x, 0.0, -z], [0.0, -1.0, 0.0]),
        Vertex::new([x, 0.0, -z], [0.0, -1.0, 0.0]),
        Vertex::new([x, 0.0, z], [0.0, -1.0, 0.0]),
        Vertex::new([-x, 0.0, z], [0.0, -1.0, 0.0]),
    ];

    let indices = vec![
        0, 2, 1, 0, 3, 2, // top
        4, 5, 6, 4, 6, 7, // bottom, reversed winding
    ];

    MeshData { vertices, indices }
}
