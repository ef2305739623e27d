/// Per-side spacing in cells, used for container padding and tag margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Edges {
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn all(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    pub const fn horizontal(value: i32) -> Self {
        Self::new(0, value, 0, value)
    }

    pub const fn symmetric(vertical: i32, horizontal: i32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub const fn horizontal_total(&self) -> i32 {
        self.left + self.right
    }

    pub const fn vertical_total(&self) -> i32 {
        self.top + self.bottom
    }

    /// Replace negative sides with zero.
    pub fn clamped(self) -> Self {
        Self {
            top: self.top.max(0),
            right: self.right.max(0),
            bottom: self.bottom.max(0),
            left: self.left.max(0),
        }
    }
}
