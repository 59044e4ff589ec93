use core::ops::{Add, AddAssign};

/// 2D position in whole pixels.
///
/// Coordinates are non-negative. Addition saturates at `u32::MAX` instead of
/// wrapping.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Vec2 {
    x: u32,
    y: u32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    #[inline]
    pub const fn x(self) -> u32 {
        self.x
    }

    #[inline]
    pub const fn y(self) -> u32 {
        self.y
    }

    #[inline]
    pub fn set_x(&mut self, x: u32) {
        self.x = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: u32) {
        self.y = y;
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        *self = *self + rhs;
    }
}

impl From<(u32, u32)> for Vec2 {
    #[inline]
    fn from((x, y): (u32, u32)) -> Self {
        Vec2::new(x, y)
    }
}
