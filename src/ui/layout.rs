//! Layout geometry for the news screen
//!
//! Provides:
//! - Horizontal carousel of fixed-size cards
//! - Fixed 2-column grid with row-major ordering
//! - Scroll clamping for both

use ratatui::layout::Rect;

/// Horizontal carousel geometry, all values in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselLayout {
    pub card_width: u16,
    pub card_height: u16,
    /// Gap between cards
    pub spacing: u16,
    /// Blank columns before the first card
    pub leading: u16,
    /// Blank columns after the last card
    pub trailing: u16,
}

impl Default for CarouselLayout {
    fn default() -> Self {
        Self {
            card_width: 30,
            card_height: 6,
            spacing: 2,
            leading: 1,
            trailing: 2,
        }
    }
}

/// A card slot inside the carousel viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselSlot {
    /// Index into the collection
    pub index: usize,
    /// Visible part of the card, in screen coordinates
    pub area: Rect,
}

impl CarouselLayout {
    /// Total scrollable width of `count` cards including padding.
    /// An empty carousel has no content at all.
    pub fn content_width(&self, count: usize) -> u32 {
        if count == 0 {
            return 0;
        }
        let count = count as u32;
        self.leading as u32
            + count * self.card_width as u32
            + (count - 1) * self.spacing as u32
            + self.trailing as u32
    }

    /// Number of cards that fit completely in `viewport_width`
    pub fn fully_visible(&self, viewport_width: u16) -> usize {
        let usable = viewport_width.saturating_sub(self.leading) as usize + self.spacing as usize;
        usable / (self.card_width as usize + self.spacing as usize)
    }

    /// Largest useful scroll offset (in cards)
    pub fn max_offset(&self, count: usize, viewport_width: u16) -> usize {
        if self.content_width(count) <= viewport_width as u32 {
            return 0;
        }
        count.saturating_sub(self.fully_visible(viewport_width).max(1))
    }

    /// Cards visible when the carousel starts at card `offset`, left to right.
    /// The last slot may be narrower than a card when it is cut by the edge.
    pub fn visible_slots(&self, viewport: Rect, offset: usize, count: usize) -> Vec<CarouselSlot> {
        let mut slots = Vec::new();
        if viewport.width == 0 || viewport.height == 0 {
            return slots;
        }

        let height = self.card_height.min(viewport.height);
        let right = viewport.x as u32 + viewport.width as u32;
        let mut x = viewport.x as u32 + self.leading as u32;

        for index in offset..count {
            if x >= right {
                break;
            }
            let width = (self.card_width as u32).min(right - x) as u16;
            slots.push(CarouselSlot {
                index,
                area: Rect {
                    x: x as u16,
                    y: viewport.y,
                    width,
                    height,
                },
            });
            x += self.card_width as u32 + self.spacing as u32;
        }

        slots
    }
}

/// Grid layout configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Number of columns (fixed at 2 for the world grid)
    pub columns: u16,
    pub card_height: u16,
    pub column_gap: u16,
    pub row_gap: u16,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: 2,
            card_height: 9,
            column_gap: 2,
            row_gap: 1,
        }
    }
}

impl GridLayout {
    /// Convert flat index to (row, col) position
    /// Uses row-major ordering:
    /// ```text
    /// Index:  0 1
    ///         2 3
    ///         4 5
    /// ```
    pub fn index_to_position(&self, index: usize) -> (usize, usize) {
        let columns = self.columns.max(1) as usize;
        (index / columns, index % columns)
    }

    /// Number of rows needed for `count` items
    pub fn row_count(&self, count: usize) -> usize {
        count.div_ceil(self.columns.max(1) as usize)
    }

    /// Number of complete rows that fit in `height`
    pub fn visible_rows(&self, height: u16) -> usize {
        (height as usize + self.row_gap as usize) / (self.card_height as usize + self.row_gap as usize)
    }

    /// Largest useful scroll offset (in rows)
    pub fn max_offset(&self, count: usize, height: u16) -> usize {
        self.row_count(count)
            .saturating_sub(self.visible_rows(height).max(1))
    }

    /// Width of one column inside `width`
    pub fn column_width(&self, width: u16) -> u16 {
        let columns = self.columns.max(1);
        width.saturating_sub(self.column_gap * (columns - 1)) / columns
    }

    /// Area of item `index` when the grid is scrolled down by `row_offset` rows.
    /// `None` when the card does not fit completely inside `area`.
    pub fn card_area(&self, area: Rect, index: usize, row_offset: usize) -> Option<Rect> {
        let (row, col) = self.index_to_position(index);
        let visible_row = row.checked_sub(row_offset)?;
        let column_width = self.column_width(area.width);
        if column_width == 0 {
            return None;
        }

        let y = area.y as usize + visible_row * (self.card_height as usize + self.row_gap as usize);
        if y + self.card_height as usize > area.y as usize + area.height as usize {
            return None;
        }
        let x = area.x as usize + col * (column_width as usize + self.column_gap as usize);

        Some(Rect {
            x: x as u16,
            y: y as u16,
            width: column_width,
            height: self.card_height,
        })
    }
}

/// Scroll position clamped to the last laid out content
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    offset: usize,
    max: usize,
}

impl ScrollState {
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.offset = self.offset.saturating_add_signed(delta).min(self.max);
    }

    pub fn scroll_to_start(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_end(&mut self) {
        self.offset = self.max;
    }

    /// Update the bound after a layout pass
    pub fn set_max(&mut self, max: usize) {
        self.max = max;
        self.offset = self.offset.min(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_width() {
        let layout = CarouselLayout::default();
        assert_eq!(layout.content_width(0), 0);
        assert_eq!(layout.content_width(1), 1 + 30 + 2);
        assert_eq!(layout.content_width(2), 1 + 30 + 2 + 30 + 2);
    }

    #[test]
    fn test_visible_slots_order() {
        let layout = CarouselLayout::default();
        let viewport = Rect::new(2, 10, 100, 6);

        let slots = layout.visible_slots(viewport, 0, 2);
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].index, 0);
        assert_eq!(slots[0].area, Rect::new(3, 10, 30, 6));
        assert_eq!(slots[1].index, 1);
        assert_eq!(slots[1].area, Rect::new(35, 10, 30, 6));
    }

    #[test]
    fn test_visible_slots_clipped() {
        let layout = CarouselLayout::default();
        let viewport = Rect::new(0, 0, 50, 6);

        let slots = layout.visible_slots(viewport, 0, 5);
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[1].area.x, 33);
        assert_eq!(slots[1].area.width, 17);
    }

    #[test]
    fn test_visible_slots_empty() {
        let layout = CarouselLayout::default();
        assert!(layout.visible_slots(Rect::new(0, 0, 80, 6), 0, 0).is_empty());
        assert!(layout.visible_slots(Rect::new(0, 0, 0, 6), 0, 3).is_empty());
    }

    #[test]
    fn test_carousel_max_offset() {
        let layout = CarouselLayout::default();
        assert_eq!(layout.fully_visible(80), 2);
        assert_eq!(layout.max_offset(2, 80), 0);
        assert_eq!(layout.max_offset(5, 80), 3);
        assert_eq!(layout.max_offset(5, 10), 4);
        assert_eq!(layout.max_offset(0, 80), 0);
    }

    #[test]
    fn test_index_to_position() {
        let layout = GridLayout::default();
        assert_eq!(layout.index_to_position(0), (0, 0));
        assert_eq!(layout.index_to_position(1), (0, 1));
        assert_eq!(layout.index_to_position(2), (1, 0));
        assert_eq!(layout.index_to_position(3), (1, 1));
    }

    #[test]
    fn test_rows() {
        let layout = GridLayout::default();
        assert_eq!(layout.row_count(0), 0);
        assert_eq!(layout.row_count(3), 2);
        assert_eq!(layout.row_count(4), 2);
        // 9 + 1 + 9 = 19
        assert_eq!(layout.visible_rows(18), 1);
        assert_eq!(layout.visible_rows(19), 2);
        assert_eq!(layout.max_offset(4, 19), 0);
        assert_eq!(layout.max_offset(10, 19), 3);
    }

    #[test]
    fn test_card_area() {
        let layout = GridLayout::default();
        let area = Rect::new(2, 20, 42, 19);

        assert_eq!(layout.column_width(42), 20);
        assert_eq!(layout.card_area(area, 0, 0), Some(Rect::new(2, 20, 20, 9)));
        assert_eq!(layout.card_area(area, 1, 0), Some(Rect::new(24, 20, 20, 9)));
        assert_eq!(layout.card_area(area, 3, 0), Some(Rect::new(24, 30, 20, 9)));
        // Third row does not fit
        assert_eq!(layout.card_area(area, 4, 0), None);
        // Scrolled past
        assert_eq!(layout.card_area(area, 0, 1), None);
        assert_eq!(layout.card_area(area, 2, 1), Some(Rect::new(2, 20, 20, 9)));
    }

    #[test]
    fn test_scroll_state() {
        let mut scroll = ScrollState::default();
        scroll.scroll_by(3);
        assert_eq!(scroll.offset(), 0);

        scroll.set_max(4);
        scroll.scroll_by(3);
        assert_eq!(scroll.offset(), 3);
        scroll.scroll_by(5);
        assert_eq!(scroll.offset(), 4);
        scroll.scroll_by(-10);
        assert_eq!(scroll.offset(), 0);

        scroll.scroll_to_end();
        scroll.set_max(2);
        assert_eq!(scroll.offset(), 2);
        scroll.scroll_to_start();
        assert_eq!(scroll.offset(), 0);
    }
}
