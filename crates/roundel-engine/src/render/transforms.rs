use bytemuck::{Pod, Zeroable};

/// Vertex-stage uniform carrying the host transform matrices.
///
/// Uniform layout (128 bytes):
///
///  offset   0  model  mat4x4<f32>
///  offset  64  mvp    mat4x4<f32>
///
/// The circle shader binds this at group 1, binding 0 but does not read it:
/// vertices arrive pre-transformed in clip space and pass through the vertex
/// stage untouched. The record stays in the pipeline interface so hosts that
/// do transform their geometry share one binding layout.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Transforms {
    pub model: [[f32; 4]; 4],
    pub mvp: [[f32; 4]; 4],
}

const IDENTITY_MAT4: [[f32; 4]; 4] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

impl Transforms {
    pub const IDENTITY: Self = Self {
        model: IDENTITY_MAT4,
        mvp: IDENTITY_MAT4,
    };
}

impl Default for Transforms {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_128_bytes() {
        assert_eq!(std::mem::size_of::<Transforms>(), 128);
        assert_eq!(std::mem::offset_of!(Transforms, mvp), 64);
    }

    #[test]
    fn default_is_identity() {
        let t = Transforms::default();
        assert_eq!(t.model[0][0], 1.0);
        assert_eq!(t.model[2][1], 0.0);
        assert_eq!(t.model, t.mvp);
    }
}
