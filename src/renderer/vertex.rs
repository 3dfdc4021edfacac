//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// 0xRRGGBB plus alpha to linear-ish RGBA floats
pub fn rgba(hex: u32, alpha: f32) -> [f32; 4] {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    [channel(16), channel(8), channel(0), alpha]
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.53, 0.81, 0.92, 1.0];
    pub const BUNNY_FUR: [f32; 4] = [0.97, 0.97, 0.97, 1.0];
    pub const BUNNY_EAR: [f32; 4] = [1.0, 0.75, 0.8, 1.0];
    pub const BUNNY_EYE: [f32; 4] = [0.1, 0.1, 0.1, 1.0];
    pub const CARROT: [f32; 4] = [1.0, 0.55, 0.1, 1.0];
    pub const CARROT_TOP: [f32; 4] = [0.2, 0.7, 0.2, 1.0];
    pub const ROCK: [f32; 4] = [0.45, 0.45, 0.5, 1.0];
    pub const ROCK_SHADE: [f32; 4] = [0.3, 0.3, 0.35, 1.0];
}
