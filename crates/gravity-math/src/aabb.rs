use glam::Vec2;

/// Axis-aligned rectangle in world units (y grows downward).
///
/// Invariant: `min.x <= max.x` and `min.y <= max.y`.
/// The constructors enforce this by sorting components.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Create an AABB from two corners. Sorts components so that
    /// min <= max on both axes.
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Create an AABB from its top-left corner and its size.
    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self::new(position, position + size)
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Half-open overlap test on both axes.
    ///
    /// Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Per-axis penetration depth, zero on an axis where the boxes are apart.
    pub fn penetration(&self, other: &Aabb) -> Vec2 {
        let x = self.max.x.min(other.max.x) - self.min.x.max(other.min.x);
        let y = self.max.y.min(other.max.y) - self.min.y.max(other.min.y);
        Vec2::new(x.max(0.0), y.max(0.0))
    }

    /// Area of the intersection rectangle (zero when disjoint or touching).
    pub fn overlap_area(&self, other: &Aabb) -> f32 {
        if !self.overlaps(other) {
            return 0.0;
        }
        let depth = self.penetration(other);
        depth.x * depth.y
    }

    /// Returns true if `other` lies entirely inside this box (edges inclusive).
    pub fn contains(&self, other: &Aabb) -> bool {
        other.min.x >= self.min.x
            && other.max.x <= self.max.x
            && other.min.y >= self.min.y
            && other.max.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::from_position_size(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlaps_overlapping() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlaps_disjoint() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(20.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let right = rect(10.0, 0.0, 10.0, 10.0);
        let below = rect(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_overlap_requires_both_axes() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 30.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_penetration() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(7.0, 4.0, 10.0, 10.0);
        assert_eq!(a.penetration(&b), Vec2::new(3.0, 6.0));
        assert_eq!(a.overlap_area(&b), 18.0);
    }

    #[test]
    fn test_penetration_disjoint_is_zero_on_separated_axis() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(20.0, 4.0, 10.0, 10.0);
        assert_eq!(a.penetration(&b).x, 0.0);
        assert_eq!(a.overlap_area(&b), 0.0);
    }

    #[test]
    fn test_contains() {
        let world = rect(0.0, 0.0, 750.0, 500.0);
        assert!(world.contains(&rect(0.0, 470.0, 30.0, 30.0)));
        assert!(!world.contains(&rect(-1.0, 0.0, 30.0, 30.0)));
        assert!(!world.contains(&rect(740.0, 0.0, 30.0, 30.0)));
    }

    #[test]
    fn test_center() {
        let a = rect(10.0, 20.0, 30.0, 40.0);
        assert_eq!(a.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn test_constructor_auto_sorts() {
        let a = Aabb::new(Vec2::new(10.0, 10.0), Vec2::ZERO);
        assert_eq!(a.min, Vec2::ZERO);
        assert_eq!(a.max, Vec2::new(10.0, 10.0));
    }
}
