use bytemuck::{Pod, Zeroable};

use super::Palette;

/// Vertex data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

const APEX: [f32; 3] = [0.0, 1.0, 0.0];
const FRONT_LEFT: [f32; 3] = [-1.0, -1.0, 1.0];
const FRONT_RIGHT: [f32; 3] = [1.0, -1.0, 1.0];
const BACK_RIGHT: [f32; 3] = [1.0, -1.0, -1.0];
const BACK_LEFT: [f32; 3] = [-1.0, -1.0, -1.0];

/// Triangle corners: four sides counter-clockwise from outside, then the base split in two.
const FACES: [[f32; 3]; 18] = [
    // Front
    APEX,
    FRONT_LEFT,
    FRONT_RIGHT,
    // Right
    APEX,
    FRONT_RIGHT,
    BACK_RIGHT,
    // Back
    APEX,
    BACK_RIGHT,
    BACK_LEFT,
    // Left
    APEX,
    BACK_LEFT,
    FRONT_LEFT,
    // Base
    FRONT_LEFT,
    BACK_LEFT,
    FRONT_RIGHT,
    BACK_RIGHT,
    FRONT_RIGHT,
    BACK_LEFT,
];

/// Line endpoints: each side face contributes its two slanted edges and its base edge.
const EDGES: [[f32; 3]; 24] = [
    // Front
    APEX,
    FRONT_LEFT,
    APEX,
    FRONT_RIGHT,
    FRONT_LEFT,
    FRONT_RIGHT,
    // Right
    APEX,
    FRONT_RIGHT,
    APEX,
    BACK_RIGHT,
    FRONT_RIGHT,
    BACK_RIGHT,
    // Back
    APEX,
    BACK_RIGHT,
    APEX,
    BACK_LEFT,
    BACK_RIGHT,
    BACK_LEFT,
    // Left
    APEX,
    BACK_LEFT,
    APEX,
    FRONT_LEFT,
    BACK_LEFT,
    FRONT_LEFT,
];

/// Pyramid geometry ready for GPU upload.
///
/// `solid` is a triangle list and `wire` a line list; both are drawn without
/// index buffers.
pub struct PyramidMesh {
    pub solid: Vec<Vertex>,
    pub wire: Vec<Vertex>,
}

impl PyramidMesh {
    pub fn new(palette: Palette) -> Self {
        let paint = |corners: &[[f32; 3]], color: [f32; 3]| {
            corners
                .iter()
                .map(|&position| Vertex { position, color })
                .collect::<Vec<_>>()
        };

        Self {
            solid: paint(&FACES, palette.fill),
            wire: paint(&EDGES, palette.wire),
        }
    }
}

impl Default for PyramidMesh {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}
