//! Frame draw list
//!
//! Turns the authoritative game state into an ordered list of draw calls:
//! clear, bunny, items in spawn order, then particles.

use crate::consts::PARTICLE_SIZE;
use crate::settings::Settings;
use crate::sim::{GameState, ItemKind, hop_offset};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Bunny,
    Carrot,
    Rock,
}

impl From<ItemKind> for SpriteKind {
    fn from(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Beneficial => SpriteKind::Carrot,
            ItemKind::Hazardous => SpriteKind::Rock,
        }
    }
}

/// One draw call in canvas pixel coordinates (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole surface to the background color
    Clear,
    Sprite {
        kind: SpriteKind,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    /// Filled square, used for particles
    Square {
        x: f32,
        y: f32,
        size: f32,
        color: u32,
        alpha: f32,
    },
}

/// Build this frame's draw list
pub fn build(state: &GameState, settings: &Settings) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(2 + state.items.len() + state.particles.len());
    commands.push(DrawCommand::Clear);

    let player = &state.player;
    commands.push(DrawCommand::Sprite {
        kind: SpriteKind::Bunny,
        x: player.pos.x,
        y: player.pos.y + hop_offset(state),
        width: player.size.x,
        height: player.size.y,
    });

    commands.extend(state.items.iter().map(|item| DrawCommand::Sprite {
        kind: item.kind.into(),
        x: item.pos.x,
        y: item.pos.y,
        width: item.size.x,
        height: item.size.y,
    }));

    if settings.particles {
        commands.extend(state.particles.iter().map(|p| DrawCommand::Square {
            x: p.pos.x,
            y: p.pos.y,
            size: PARTICLE_SIZE,
            color: p.color,
            alpha: p.life.clamp(0.0, 1.0),
        }));
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Item, Particle, TickInput, start_run, tick};
    use crate::tuning::Tuning;
    use glam::Vec2;

    #[test]
    fn test_idle_frame() {
        let state = GameState::new(1, Tuning::default());
        let commands = build(&state, &Settings::default());
        assert_eq!(
            commands,
            vec![
                DrawCommand::Clear,
                DrawCommand::Sprite {
                    kind: SpriteKind::Bunny,
                    x: 224.0,
                    y: 600.0,
                    width: 32.0,
                    height: 32.0,
                },
            ]
        );
    }

    #[test]
    fn test_running_frame_order_and_hop() {
        let mut state = GameState::new(1, Tuning::default());
        start_run(&mut state);
        for _ in 0..8 {
            tick(&mut state, &TickInput::default());
        }
        state.items.push(Item {
            pos: Vec2::new(10.0, 20.0),
            size: Vec2::splat(32.0),
            kind: ItemKind::Hazardous,
            speed: 3.0,
        });
        state.particles.push(Particle {
            pos: Vec2::new(5.0, 6.0),
            vel: Vec2::ZERO,
            life: 0.4,
            color: 0xffa500,
        });

        let commands = build(&state, &Settings::default());
        assert_eq!(commands.len(), 4);
        assert_eq!(commands[0], DrawCommand::Clear);
        let DrawCommand::Sprite { kind, y, .. } = commands[1] else {
            panic!("expected bunny sprite");
        };
        assert_eq!(kind, SpriteKind::Bunny);
        assert!((y - (600.0 + (1.6f32).sin() * 3.0)).abs() < 1e-4);
        assert!(matches!(
            commands[2],
            DrawCommand::Sprite {
                kind: SpriteKind::Rock,
                ..
            }
        ));
        assert_eq!(
            commands[3],
            DrawCommand::Square {
                x: 5.0,
                y: 6.0,
                size: 4.0,
                color: 0xffa500,
                alpha: 0.4,
            }
        );
    }

    #[test]
    fn test_particles_hidden_by_setting() {
        let mut state = GameState::new(1, Tuning::default());
        state.particles.push(Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            life: 1.0,
            color: 0xff0000,
        });
        let settings = Settings {
            particles: false,
            ..Settings::default()
        };
        assert_eq!(build(&state, &settings).len(), 2);
    }
}
