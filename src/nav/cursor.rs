/// Single-axis focus cursor over a list of `len` elements.
///
/// The index always stays in `[0, len - 1]`. Moving past either end is
/// absorbed rather than wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    len: usize,
}

impl Cursor {
    /// Create a cursor focused on the first element.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Create a cursor focused on `index`, clamped into range.
    pub fn with_index(len: usize, index: usize) -> Self {
        let mut cursor = Self::new(len);
        cursor.set(index);
        cursor
    }

    /// Current index. Always 0 for an empty list; use [`Cursor::selected`]
    /// when the list may be empty.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The focused index, or `None` when there is nothing to focus.
    pub fn selected(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.index)
        }
    }

    /// Whether element `i` is the focused one.
    pub fn is_focused(&self, i: usize) -> bool {
        self.selected() == Some(i)
    }

    pub fn move_left(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.index = (self.index + 1).min(self.last());
    }

    /// Direct selection from a pointer. Out-of-range indices clamp to the
    /// nearest end.
    pub fn set(&mut self, index: usize) {
        self.index = index.min(self.last());
    }

    fn last(&self) -> usize {
        self.len.saturating_sub(1)
    }
}
