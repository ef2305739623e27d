use super::Rect;

const INITIAL_LINE_CAPACITY: usize = 5;

/// Scratch rects for the line currently being arranged, indexed by the
/// item's position within that line.
///
/// Slots are overwritten line by line and the pool only ever grows, so a
/// steady-state arrange pass allocates nothing.
#[derive(Debug, Clone)]
pub struct BoundsPool {
    rects: Vec<Rect>,
}

impl Default for BoundsPool {
    fn default() -> Self {
        Self {
            rects: vec![Rect::default(); INITIAL_LINE_CAPACITY],
        }
    }
}

impl BoundsPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capacity(&self) -> usize {
        self.rects.len()
    }

    /// Store `rect` at line position `index`, doubling the pool if needed.
    pub fn set(&mut self, index: usize, rect: Rect) {
        if index >= self.rects.len() {
            let grown = (self.rects.len() * 2).max(index + 1);
            self.rects.resize(grown, Rect::default());
        }
        self.rects[index] = rect;
    }

    /// Read back a slot written earlier in the same line.
    ///
    /// # Panics
    ///
    /// Panics if `index` was never written.
    pub fn get(&self, index: usize) -> Rect {
        self.rects[index]
    }
}
