//! Screen-space rectangles.

/// An axis-aligned rectangle in integer screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    /// X position (left edge).
    pub x: i32,
    /// Y position (top edge).
    pub y: i32,
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Returns the right edge (exclusive).
    #[must_use]
    pub const fn right(self) -> i32 {
        self.x + self.w
    }

    /// Returns the bottom edge (exclusive).
    #[must_use]
    pub const fn bottom(self) -> i32 {
        self.y + self.h
    }

    /// Returns true if the point lies within `[x, x+w) x [y, y+h)`.
    ///
    /// Min edges are inclusive, max edges exclusive, so adjacent rectangles
    /// never both contain a shared-edge point.
    #[must_use]
    pub const fn contains(self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Returns this rectangle translated by the given offset.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }
}
