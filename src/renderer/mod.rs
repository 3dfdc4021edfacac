//! Rendering adapter
//!
//! `draw_list` projects the game state into draw calls every frame; the
//! WebGPU pipeline tessellates and presents them.

pub mod draw_list;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use draw_list::{DrawCommand, SpriteKind};
pub use pipeline::RenderState;
