use super::Vec2;

/// Axis-aligned rectangle in physical pixels (top-left origin).
///
/// The origin is signed so shapes may start partially off-screen.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of size `w x h` whose top-left corner is `origin`.
    #[inline]
    pub fn at(origin: Vec2, w: u32, h: u32) -> Self {
        Self::new(clamp_i32(origin.x()), clamp_i32(origin.y()), w, h)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.w == 0 || self.h == 0
    }

    #[inline]
    fn right(self) -> i64 {
        self.x as i64 + self.w as i64
    }

    #[inline]
    fn bottom(self) -> i64 {
        self.y as i64 + self.h as i64
    }

    /// Half-open containment: `[min, max)`.
    #[inline]
    pub fn contains(self, x: i32, y: i32) -> bool {
        x >= self.x && y >= self.y && (x as i64) < self.right() && (y as i64) < self.bottom()
    }

    /// Returns the overlapping area, or `None` when the rectangles only touch
    /// or are disjoint.
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());

        let w = x1 - x0 as i64;
        let h = y1 - y0 as i64;
        if w <= 0 || h <= 0 {
            return None;
        }
        Some(Rect::new(x0, y0, w as u32, h as u32))
    }

    /// Moves the rectangle by `(dx, dy)`, saturating at the `i32` range.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x.saturating_add(dx), self.y.saturating_add(dy), self.w, self.h)
    }
}

#[inline]
pub(crate) fn clamp_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}
