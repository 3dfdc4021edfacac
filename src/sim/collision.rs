//! Axis-aligned box overlap between the bunny and falling items

use glam::Vec2;

use super::state::{Item, Player};

/// Axis-aligned bounding box (top-left origin, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap: boxes that only touch along an edge do not collide
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }
}

/// The bunny's collision box, shifted by the current hop offset
pub fn player_box(player: &Player, hop_offset: f32) -> Aabb {
    Aabb::new(player.pos + Vec2::new(0.0, hop_offset), player.size)
}

pub fn item_box(item: &Item) -> Aabb {
    Aabb::new(item.pos, item.size)
}

/// Does this item touch the (hopping) bunny?
pub fn player_hits_item(player: &Player, hop_offset: f32, item: &Item) -> bool {
    player_box(player, hop_offset).overlaps(&item_box(item))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f32, y: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::splat(32.0))
    }

    #[test]
    fn test_overlap() {
        assert!(square(0.0, 0.0).overlaps(&square(16.0, 16.0)));
        assert!(square(16.0, 16.0).overlaps(&square(0.0, 0.0)));
        assert!(square(0.0, 0.0).overlaps(&square(0.0, 0.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        assert!(!square(0.0, 0.0).overlaps(&square(32.0, 0.0)));
        assert!(!square(0.0, 0.0).overlaps(&square(0.0, 32.0)));
        assert!(!square(0.0, 0.0).overlaps(&square(-32.0, 0.0)));
        assert!(!square(0.0, 0.0).overlaps(&square(0.0, -32.0)));
    }

    #[test]
    fn test_hop_offset_moves_player_box() {
        use crate::sim::state::ItemKind;
        use crate::tuning::Tuning;

        let player = Player::new(&Tuning::default());
        // Item bottom edge sits exactly on the bunny's resting top edge (y = 600)
        let item = Item {
            pos: Vec2::new(player.pos.x, 568.0),
            size: Vec2::splat(32.0),
            kind: ItemKind::Hazardous,
            speed: 3.0,
        };
        assert!(!player_hits_item(&player, 0.0, &item));
        // Hopping upward (negative offset) pushes the bunny into the item
        assert!(player_hits_item(&player, -2.0, &item));
        assert!(!player_hits_item(&player, 2.0, &item));
    }
}
