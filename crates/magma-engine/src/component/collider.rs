//! Collision shapes.
//!
//! Shapes are data only; there is no collision resolution. Positions are in
//! pixels relative to the owning entity's Transform.

use crate::coords::{Rect, Vec2, clamp_i32};

/// Four-cornered box, corners ordered top-left, top-right, bottom-right,
/// bottom-left.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct BoxCollider {
    corners: [Vec2; 4],
}

impl BoxCollider {
    pub const fn new(corners: [Vec2; 4]) -> Self {
        Self { corners }
    }

    /// Axis-aligned box with top-left corner `origin`.
    pub fn from_rect(origin: Vec2, width: u32, height: u32) -> Self {
        let right = origin + Vec2::new(width, 0);
        let bottom = origin + Vec2::new(0, height);
        Self::new([origin, right, origin + Vec2::new(width, height), bottom])
    }

    #[inline]
    pub fn corners(&self) -> [Vec2; 4] {
        self.corners
    }

    /// Smallest axis-aligned rectangle containing every corner.
    pub fn bounds(&self) -> Rect {
        let min_x = self.corners.iter().map(|c| c.x()).min().unwrap_or(0);
        let min_y = self.corners.iter().map(|c| c.y()).min().unwrap_or(0);
        let max_x = self.corners.iter().map(|c| c.x()).max().unwrap_or(0);
        let max_y = self.corners.iter().map(|c| c.y()).max().unwrap_or(0);
        Rect::new(clamp_i32(min_x), clamp_i32(min_y), max_x - min_x, max_y - min_y)
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CircleCollider {
    diameter: f32,
}

impl CircleCollider {
    pub const fn new(diameter: f32) -> Self {
        Self { diameter }
    }

    #[inline]
    pub fn diameter(&self) -> f32 {
        self.diameter
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.diameter * 0.5
    }

    /// Bounding square, centered on the entity origin.
    pub fn bounds(&self) -> Rect {
        let d = self.diameter.max(0.0).round() as u32;
        let r = clamp_i32(d / 2);
        Rect::new(-r, -r, d, d)
    }
}

/// Axis the capsule's straight section runs along.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum CapsuleOrientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Two half-circles joined by a straight section of `length`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CapsuleCollider {
    center: Vec2,
    orientation: CapsuleOrientation,
    length: f32,
    radius: f32,
}

impl CapsuleCollider {
    pub const fn new(center: Vec2, orientation: CapsuleOrientation, length: f32, radius: f32) -> Self {
        Self { center, orientation, length, radius }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn orientation(&self) -> CapsuleOrientation {
        self.orientation
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn bounds(&self) -> Rect {
        let radius = self.radius.max(0.0);
        let long = (self.length.max(0.0) + 2.0 * radius).round() as u32;
        let short = (2.0 * radius).round() as u32;
        let (w, h) = match self.orientation {
            CapsuleOrientation::Vertical => (short, long),
            CapsuleOrientation::Horizontal => (long, short),
        };
        let cx = clamp_i32(self.center.x());
        let cy = clamp_i32(self.center.y());
        Rect::new(cx - clamp_i32(w / 2), cy - clamp_i32(h / 2), w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_from_rect_orders_corners_clockwise() {
        let b = BoxCollider::from_rect(Vec2::new(2, 3), 10, 4);
        assert_eq!(
            b.corners(),
            [Vec2::new(2, 3), Vec2::new(12, 3), Vec2::new(12, 7), Vec2::new(2, 7)]
        );
        assert_eq!(b.bounds(), Rect::new(2, 3, 10, 4));
    }

    #[test]
    fn circle_bounds_are_centered() {
        let c = CircleCollider::new(10.0);
        assert_eq!(c.radius(), 5.0);
        assert_eq!(c.bounds(), Rect::new(-5, -5, 10, 10));
    }

    #[test]
    fn capsule_bounds_follow_orientation() {
        let v = CapsuleCollider::new(Vec2::new(50, 50), CapsuleOrientation::Vertical, 20.0, 5.0);
        assert_eq!(v.bounds(), Rect::new(45, 35, 10, 30));

        let h = CapsuleCollider::new(Vec2::new(50, 50), CapsuleOrientation::Horizontal, 20.0, 5.0);
        assert_eq!(h.bounds(), Rect::new(35, 45, 30, 10));
    }
}
