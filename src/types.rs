/// Mesh vertex: position + normal
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub const fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }
}

/// Per-frame uniform buffer data for GPU
///
/// Layout must match `FrameUniform` in scene.wgsl and shadow.wgsl.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniform {
    pub view_proj: [[f32; 4]; 4],
    pub sun_view_proj: [[f32; 4]; 4],
    /// xyz = camera world position
    pub camera_pos: [f32; 4],
    /// rgb = ambient color, w = intensity
    pub ambient: [f32; 4],
    /// xyz = direction the sun light travels, w = intensity
    pub sun_dir: [f32; 4],
    pub sun_color: [f32; 4],
    /// xyz = position, w = range
    pub point_pos: [[f32; 4]; 2],
    /// rgb = color, w = intensity
    pub point_color: [[f32; 4]; 2],
}

/// Per-object uniform buffer data for GPU
///
/// Bound with a dynamic offset, one 256-byte slot per mesh node.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    /// rgb = base color, w = shininess exponent
    pub color: [f32; 4],
    /// x = 1.0 when the surface samples the shadow map
    pub flags: [f32; 4],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
    }

    #[test]
    fn frame_uniform_matches_wgsl_layout() {
        // 2 mat4 + 4 vec4 + 2x2 vec4
        assert_eq!(std::mem::size_of::<FrameUniform>(), 128 + 64 + 64);
    }

    #[test]
    fn object_uniform_fits_dynamic_slot() {
        assert!(std::mem::size_of::<ObjectUniform>() <= 256);
    }
}
