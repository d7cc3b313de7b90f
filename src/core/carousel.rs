/// Emitted on every carousel transition; the stage recomputes every entity's
/// target transform from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutUpdate {
    pub active: usize,
    pub count: usize,
}

/// Which instrument is centre stage. The index is always in `[0, count)`.
#[derive(Clone, Debug)]
pub struct Carousel {
    index: usize,
    count: usize,
}

impl Carousel {
    /// A carousel over `count` entities starting at index 0. A zero count is
    /// treated as a single slot so the index invariant always holds.
    pub fn new(count: usize) -> Self {
        Self {
            index: 0,
            count: count.max(1),
        }
    }

    #[inline]
    pub fn active(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_active(&self, entity: usize) -> bool {
        entity == self.index
    }

    /// Position of `entity` relative to the active one in carousel order; 0 is active.
    #[inline]
    pub fn rank_of(&self, entity: usize) -> usize {
        (entity % self.count + self.count - self.index) % self.count
    }

    pub fn advance(&mut self) -> LayoutUpdate {
        self.index = (self.index + 1) % self.count;
        self.layout_update()
    }

    /// Bring `target` to centre stage. Returns `None` (and changes nothing)
    /// when `target` is already active or out of range.
    pub fn focus(&mut self, target: usize) -> Option<LayoutUpdate> {
        if target == self.index || target >= self.count {
            return None;
        }
        self.index = target;
        Some(self.layout_update())
    }

    #[inline]
    pub fn layout_update(&self) -> LayoutUpdate {
        LayoutUpdate {
            active: self.index,
            count: self.count,
        }
    }
}
