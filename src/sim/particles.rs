//! Particle bursts: short-lived colored squares with linear fade

use glam::Vec2;
use rand::Rng;

use super::state::Particle;

/// Push a burst of `count` particles at `origin`.
///
/// Each velocity component is drawn uniformly from `[-spread/2, spread/2)`.
pub fn emit<R: Rng>(
    particles: &mut Vec<Particle>,
    rng: &mut R,
    origin: Vec2,
    color: u32,
    count: usize,
    spread: f32,
) {
    particles.reserve(count);
    for _ in 0..count {
        let vel = Vec2::new(
            (rng.random::<f32>() - 0.5) * spread,
            (rng.random::<f32>() - 0.5) * spread,
        );
        particles.push(Particle {
            pos: origin,
            vel,
            life: 1.0,
            color,
        });
    }
}

/// Move every particle, fade it by `decay`, and drop the dead ones
pub fn advance(particles: &mut Vec<Particle>, decay: f32) {
    for particle in particles.iter_mut() {
        particle.pos += particle.vel;
        particle.life -= decay;
    }
    particles.retain(|p| p.life > 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BURST_SIZE, PARTICLE_DECAY, PARTICLE_SPREAD};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn burst() -> Vec<Particle> {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut particles = Vec::new();
        emit(
            &mut particles,
            &mut rng,
            Vec2::new(100.0, 200.0),
            0xffa500,
            BURST_SIZE,
            PARTICLE_SPREAD,
        );
        particles
    }

    #[test]
    fn test_emit_burst() {
        let particles = burst();
        assert_eq!(particles.len(), 8);
        for p in &particles {
            assert_eq!(p.pos, Vec2::new(100.0, 200.0));
            assert_eq!(p.life, 1.0);
            assert_eq!(p.color, 0xffa500);
            assert!(p.vel.x >= -2.0 && p.vel.x < 2.0);
            assert!(p.vel.y >= -2.0 && p.vel.y < 2.0);
        }
    }

    #[test]
    fn test_particles_move_by_velocity() {
        let mut particles = burst();
        let before: Vec<_> = particles.iter().map(|p| (p.pos, p.vel)).collect();
        advance(&mut particles, PARTICLE_DECAY);
        for (p, (pos, vel)) in particles.iter().zip(before) {
            assert_eq!(p.pos, pos + vel);
        }
    }

    #[test]
    fn test_burst_dies_after_twenty_advances() {
        let mut particles = burst();
        for _ in 0..19 {
            advance(&mut particles, PARTICLE_DECAY);
        }
        assert_eq!(particles.len(), 8);
        assert!(particles[0].life > 0.0 && particles[0].life < 0.06);

        advance(&mut particles, PARTICLE_DECAY);
        assert!(particles.is_empty());
    }
}
