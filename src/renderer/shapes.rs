//! Shape generation for 2D primitives
//!
//! Sprites are drawn procedurally from axis-aligned quads, so a frame never
//! depends on image assets being loaded.

use super::draw_list::{DrawCommand, SpriteKind};
use super::vertex::{Vertex, colors, rgba};

/// Two triangles covering an axis-aligned rectangle
pub fn quad(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> [Vertex; 6] {
    let (x1, y1) = (x + w, y + h);
    [
        Vertex::new(x, y, color),
        Vertex::new(x1, y, color),
        Vertex::new(x, y1, color),
        Vertex::new(x1, y, color),
        Vertex::new(x1, y1, color),
        Vertex::new(x, y1, color),
    ]
}

/// Push a quad given in fractions of a sprite box
fn part(out: &mut Vec<Vertex>, x: f32, y: f32, w: f32, h: f32, rect: [f32; 4], color: [f32; 4]) {
    out.extend(quad(
        x + rect[0] * w,
        y + rect[1] * h,
        rect[2] * w,
        rect[3] * h,
        color,
    ));
}

/// Bunny: two ears, a round-ish body, and eyes
fn bunny(out: &mut Vec<Vertex>, x: f32, y: f32, w: f32, h: f32) {
    part(out, x, y, w, h, [0.22, 0.0, 0.16, 0.4], colors::BUNNY_FUR);
    part(out, x, y, w, h, [0.62, 0.0, 0.16, 0.4], colors::BUNNY_FUR);
    part(out, x, y, w, h, [0.26, 0.06, 0.08, 0.28], colors::BUNNY_EAR);
    part(out, x, y, w, h, [0.66, 0.06, 0.08, 0.28], colors::BUNNY_EAR);
    part(out, x, y, w, h, [0.12, 0.4, 0.76, 0.6], colors::BUNNY_FUR);
    part(out, x, y, w, h, [0.0, 0.55, 1.0, 0.35], colors::BUNNY_FUR);
    part(out, x, y, w, h, [0.3, 0.52, 0.1, 0.1], colors::BUNNY_EYE);
    part(out, x, y, w, h, [0.6, 0.52, 0.1, 0.1], colors::BUNNY_EYE);
}

/// Carrot: leafy top over a tapering orange root
fn carrot(out: &mut Vec<Vertex>, x: f32, y: f32, w: f32, h: f32) {
    part(out, x, y, w, h, [0.35, 0.0, 0.3, 0.25], colors::CARROT_TOP);
    part(out, x, y, w, h, [0.25, 0.25, 0.5, 0.3], colors::CARROT);
    part(out, x, y, w, h, [0.32, 0.55, 0.36, 0.25], colors::CARROT);
    part(out, x, y, w, h, [0.42, 0.8, 0.16, 0.2], colors::CARROT);
}

/// Rock: stacked slabs with a darker base
fn rock(out: &mut Vec<Vertex>, x: f32, y: f32, w: f32, h: f32) {
    part(out, x, y, w, h, [0.25, 0.1, 0.5, 0.2], colors::ROCK);
    part(out, x, y, w, h, [0.05, 0.3, 0.9, 0.45], colors::ROCK);
    part(out, x, y, w, h, [0.0, 0.75, 1.0, 0.25], colors::ROCK_SHADE);
}

/// Tessellate a draw list into triangle vertices (canvas pixel coordinates)
pub fn tessellate(commands: &[DrawCommand]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(commands.len() * 24);
    for command in commands {
        match *command {
            // Handled by the render pass load op
            DrawCommand::Clear => {}
            DrawCommand::Sprite {
                kind,
                x,
                y,
                width,
                height,
            } => match kind {
                SpriteKind::Bunny => bunny(&mut vertices, x, y, width, height),
                SpriteKind::Carrot => carrot(&mut vertices, x, y, width, height),
                SpriteKind::Rock => rock(&mut vertices, x, y, width, height),
            },
            DrawCommand::Square {
                x,
                y,
                size,
                color,
                alpha,
            } => vertices.extend(quad(x, y, size, size, rgba(color, alpha))),
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_covers_rect() {
        let v = quad(10.0, 20.0, 4.0, 4.0, [1.0; 4]);
        let xs: Vec<f32> = v.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = v.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 14.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 24.0);
    }

    #[test]
    fn test_sprites_stay_inside_their_box() {
        for kind in [SpriteKind::Bunny, SpriteKind::Carrot, SpriteKind::Rock] {
            let verts = tessellate(&[DrawCommand::Sprite {
                kind,
                x: 100.0,
                y: 50.0,
                width: 32.0,
                height: 32.0,
            }]);
            assert!(!verts.is_empty());
            for v in verts {
                assert!(v.position[0] >= 100.0 - 1e-3 && v.position[0] <= 132.0 + 1e-3);
                assert!(v.position[1] >= 50.0 - 1e-3 && v.position[1] <= 82.0 + 1e-3);
            }
        }
    }

    #[test]
    fn test_particle_alpha_is_life() {
        let verts = tessellate(&[
            DrawCommand::Clear,
            DrawCommand::Square {
                x: 0.0,
                y: 0.0,
                size: 4.0,
                color: 0xff0000,
                alpha: 0.25,
            },
        ]);
        assert_eq!(verts.len(), 6);
        assert!(verts.iter().all(|v| v.color == [1.0, 0.0, 0.0, 0.25]));
    }
}
