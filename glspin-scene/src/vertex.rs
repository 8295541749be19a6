//! Vertex data for the one triangle the demo draws.
//!
//! The vertex type derives `bytemuck::Pod` + `Zeroable` so the buffer
//! upload is a zero-copy `cast_slice`.

use bytemuck::{Pod, Zeroable};

/// A single triangle vertex: a 2D position in clip space.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct TriangleVertex {
    pub position: [f32; 2],
}

impl TriangleVertex {
    /// Components per vertex, for the attribute pointer setup.
    pub const COMPONENTS: i32 = 2;

    /// The 3 vertices of the triangle. Uploaded once, never mutated.
    pub const VERTICES: [TriangleVertex; 3] = [
        TriangleVertex { position: [-0.5, -0.5] }, // bottom-left
        TriangleVertex { position: [0.5, -0.5] },  // bottom-right
        TriangleVertex { position: [0.0, 0.5] },   // top
    ];
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_size() {
        assert_eq!(std::mem::size_of::<TriangleVertex>(), 8);
    }

    #[test]
    fn test_vertices_are_the_fixed_triangle() {
        assert_eq!(TriangleVertex::VERTICES.len(), 3);
        assert_eq!(TriangleVertex::VERTICES[0].position, [-0.5, -0.5]);
        assert_eq!(TriangleVertex::VERTICES[1].position, [0.5, -0.5]);
        assert_eq!(TriangleVertex::VERTICES[2].position, [0.0, 0.5]);
    }

    #[test]
    fn test_vertices_cast_to_bytes() {
        let bytes: &[u8] = bytemuck::cast_slice(&TriangleVertex::VERTICES);
        assert_eq!(bytes.len(), 3 * 2 * std::mem::size_of::<f32>());
        // Round-trip
        let back: &[TriangleVertex] = bytemuck::cast_slice(bytes);
        assert_eq!(back, &TriangleVertex::VERTICES);
    }

    #[test]
    fn test_components_match_position_len() {
        assert_eq!(
            TriangleVertex::COMPONENTS as usize,
            TriangleVertex::VERTICES[0].position.len()
        );
    }
}
