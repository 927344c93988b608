use super::Cursor;

/// Dual-axis focus: a category cursor and an item cursor over the items of
/// the focused category.
///
/// Up/Down always reset the item cursor to 0, even when the category cursor
/// is already at a boundary and does not move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCursor {
    item_counts: Vec<usize>,
    category: Cursor,
    item: Cursor,
}

impl GridCursor {
    /// Build a grid from the number of items in each category.
    pub fn new(item_counts: Vec<usize>) -> Self {
        let category = Cursor::new(item_counts.len());
        let item = Cursor::new(item_counts.first().copied().unwrap_or(0));
        Self {
            item_counts,
            category,
            item,
        }
    }

    pub fn category(&self) -> usize {
        self.category.index()
    }

    pub fn item(&self) -> usize {
        self.item.index()
    }

    pub fn category_cursor(&self) -> &Cursor {
        &self.category
    }

    pub fn item_cursor(&self) -> &Cursor {
        &self.item
    }

    /// `(category, item)` of the focused element, or `None` when either
    /// axis is empty.
    pub fn selected(&self) -> Option<(usize, usize)> {
        Some((self.category.selected()?, self.item.selected()?))
    }

    pub fn move_category_up(&mut self) {
        self.category.move_left();
        self.reset_item();
    }

    pub fn move_category_down(&mut self) {
        self.category.move_right();
        self.reset_item();
    }

    pub fn move_item_left(&mut self) {
        self.item.move_left();
    }

    pub fn move_item_right(&mut self) {
        self.item.move_right();
    }

    /// Pointer selection of a category; the item cursor restarts at 0.
    pub fn select_category(&mut self, index: usize) {
        self.category.set(index);
        self.reset_item();
    }

    /// Pointer selection of an item within the focused category.
    pub fn select_item(&mut self, index: usize) {
        self.item.set(index);
    }

    fn reset_item(&mut self) {
        let count = self
            .item_counts
            .get(self.category.index())
            .copied()
            .unwrap_or(0);
        self.item = Cursor::new(count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_origin() {
        let grid = GridCursor::new(vec![5, 5, 5]);
        assert_eq!(grid.selected(), Some((0, 0)));
    }

    #[test]
    fn test_category_down_resets_item() {
        let mut grid = GridCursor::new(vec![5, 5, 5]);
        grid.select_item(3);
        grid.move_category_down();
        assert_eq!(grid.selected(), Some((1, 0)));
    }

    #[test]
    fn test_category_up_at_top_still_resets_item() {
        let mut grid = GridCursor::new(vec![4, 4]);
        grid.move_item_right();
        grid.move_item_right();
        assert_eq!(grid.item(), 2);

        grid.move_category_up();
        assert_eq!(grid.category(), 0);
        assert_eq!(grid.item(), 0);
    }

    #[test]
    fn test_category_down_at_bottom_still_resets_item() {
        let mut grid = GridCursor::new(vec![3, 3]);
        grid.move_category_down();
        grid.move_item_right();
        grid.move_category_down();
        assert_eq!(grid.selected(), Some((1, 0)));
    }

    #[test]
    fn test_item_moves_respect_current_category_length() {
        let mut grid = GridCursor::new(vec![2, 4]);
        for _ in 0..5 {
            grid.move_item_right();
        }
        assert_eq!(grid.item(), 1);

        grid.move_category_down();
        for _ in 0..5 {
            grid.move_item_right();
        }
        assert_eq!(grid.item(), 3);
        assert_eq!(grid.category(), 1);
    }

    #[test]
    fn test_item_moves_do_not_touch_category() {
        let mut grid = GridCursor::new(vec![3, 3, 3]);
        grid.move_category_down();
        grid.move_item_right();
        grid.move_item_left();
        grid.move_item_left();
        assert_eq!(grid.selected(), Some((1, 0)));
    }

    #[test]
    fn test_select_category_clamps_and_resets() {
        let mut grid = GridCursor::new(vec![3, 3, 3]);
        grid.select_item(2);
        grid.select_category(10);
        assert_eq!(grid.selected(), Some((2, 0)));
    }

    #[test]
    fn test_select_item_clamps_without_reset() {
        let mut grid = GridCursor::new(vec![3, 5]);
        grid.select_category(1);
        grid.select_item(9);
        assert_eq!(grid.selected(), Some((1, 4)));
    }

    #[test]
    fn test_no_categories() {
        let mut grid = GridCursor::new(Vec::new());
        grid.move_category_down();
        grid.move_item_right();
        assert_eq!(grid.selected(), None);
    }

    #[test]
    fn test_empty_category_has_no_item() {
        let mut grid = GridCursor::new(vec![2, 0]);
        grid.move_category_down();
        assert_eq!(grid.category(), 1);
        assert_eq!(grid.selected(), None);
        grid.move_category_up();
        assert_eq!(grid.selected(), Some((0, 0)));
    }
}
