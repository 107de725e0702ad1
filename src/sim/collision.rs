//! Axis-aligned collision and off-screen tests
//!
//! Everything in the play area is a square, so collision is plain AABB
//! overlap. Overlap requires nonzero intersection area: two boxes sharing an
//! edge do NOT collide (strict comparisons throughout).

use glam::Vec2;

/// An axis-aligned bounding square, positioned by its top-left corner
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: f32,
}

impl Aabb {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self { pos, size }
    }

    /// True if the two boxes overlap with nonzero area
    ///
    /// A shared edge (zero-area contact) is a miss.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.pos.x < other.pos.x + other.size
            && self.pos.x + self.size > other.pos.x
            && self.pos.y < other.pos.y + other.size
            && self.pos.y + self.size > other.pos.y
    }

    /// True if the box has fully left the play area through the bottom
    ///
    /// The top edge must be strictly below the bottom of the play area.
    #[inline]
    pub fn past_bottom(&self, play_height: f32) -> bool {
        self.pos.y > play_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_hit() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), 40.0);
        let b = Aabb::new(Vec2::new(30.0, 30.0), 30.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlap_miss() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), 40.0);
        let b = Aabb::new(Vec2::new(100.0, 0.0), 30.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_shared_edge_is_not_a_collision() {
        // b starts exactly where a ends on the x axis - zero intersection area
        let a = Aabb::new(Vec2::new(0.0, 0.0), 40.0);
        let b = Aabb::new(Vec2::new(40.0, 0.0), 30.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));

        // Same on the y axis
        let c = Aabb::new(Vec2::new(0.0, 40.0), 30.0);
        assert!(!a.overlaps(&c));

        // One unit of penetration flips it
        let d = Aabb::new(Vec2::new(39.0, 0.0), 30.0);
        assert!(a.overlaps(&d));
    }

    #[test]
    fn test_past_bottom() {
        let above = Aabb::new(Vec2::new(0.0, 599.0), 30.0);
        assert!(!above.past_bottom(600.0));

        // Top edge exactly at the bottom still counts as on-screen
        let at_edge = Aabb::new(Vec2::new(0.0, 600.0), 30.0);
        assert!(!at_edge.past_bottom(600.0));

        let below = Aabb::new(Vec2::new(0.0, 600.5), 30.0);
        assert!(below.past_bottom(600.0));
    }
}
