use crate::coords::Vec2;

/// Position, rotation and uniform scale of an entity.
///
/// Rotation is stored in degrees, clockwise in screen space (+Y down).
/// A Transform is mandatory for rendering.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    position: Vec2,
    rotation: f32,
    scale: f32,
}

impl Transform {
    pub const fn new(position: Vec2) -> Self {
        Self { position, rotation: 0.0, scale: 1.0 }
    }

    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn move_to(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Adds `offset` to the current position (saturating).
    pub fn move_by(&mut self, offset: Vec2) {
        self.position += offset;
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Rotation in degrees.
    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    #[inline]
    pub fn rotation_radians(&self) -> f32 {
        self.rotation.to_radians()
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(Vec2::zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_identity_at_origin() {
        let t = Transform::default();
        assert_eq!(t.position(), Vec2::zero());
        assert_eq!(t.rotation(), 0.0);
        assert_eq!(t.scale(), 1.0);
    }

    #[test]
    fn move_by_accumulates_offsets() {
        let mut t = Transform::new(Vec2::new(10, 20));
        t.move_by(Vec2::new(5, 1));
        t.move_by(Vec2::new(5, 1));
        assert_eq!(t.position(), Vec2::new(20, 22));
        t.move_to(Vec2::new(1, 1));
        assert_eq!(t.position(), Vec2::new(1, 1));
    }

    #[test]
    fn rotation_is_degrees() {
        let t = Transform::default().with_rotation(180.0);
        assert_eq!(t.rotation(), 180.0);
        assert!((t.rotation_radians() - std::f32::consts::PI).abs() < 1e-6);
    }
}
