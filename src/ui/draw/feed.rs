//! Top news carousel and world news grid

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::Widget,
    Frame,
};

use crate::assets::AssetStore;
use crate::news::NewsItem;
use crate::ui::layout::{CarouselLayout, GridLayout};
use crate::ui::theme::Theme;
use crate::ui::top_card::TopNewsCard;
use crate::ui::world_card::WorldNewsCard;

/// Draw the visible part of the carousel, left to right
pub(super) fn draw_carousel(
    f: &mut Frame,
    items: &[NewsItem],
    offset: usize,
    layout: &CarouselLayout,
    area: Rect,
    theme: &Theme,
) {
    for slot in layout.visible_slots(area, offset, items.len()) {
        let card = TopNewsCard::new(&items[slot.index], theme);
        if slot.area.width == layout.card_width {
            f.render_widget(card, slot.area);
            continue;
        }

        // Cut by the right edge: render full size off-screen, copy what shows
        let full = Rect::new(0, 0, layout.card_width, slot.area.height);
        let mut scratch = Buffer::empty(full);
        card.render(full, &mut scratch);
        copy_cells(&scratch, f.buffer_mut(), slot.area);
    }
}

/// Copy the top-left `target.width`x`target.height` cells of `src` into `dst` at `target`
fn copy_cells(src: &Buffer, dst: &mut Buffer, target: Rect) {
    for dy in 0..target.height {
        for dx in 0..target.width {
            let from = (src.area.x + dx, src.area.y + dy);
            let to = (target.x + dx, target.y + dy);
            if let (Some(cell), Some(out)) = (src.cell(from), dst.cell_mut(to)) {
                *out = cell.clone();
            }
        }
    }
}

/// Draw the complete rows of the world grid, row-major
pub(super) fn draw_grid(
    f: &mut Frame,
    items: &[NewsItem],
    row_offset: usize,
    layout: &GridLayout,
    area: Rect,
    theme: &Theme,
    assets: &mut AssetStore,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let columns = layout.columns.max(1) as usize;
    let start = row_offset * columns;
    let end = (start + layout.visible_rows(area.height) * columns).min(items.len());
    let under_chip = assets.draws_under_text();

    for (index, item) in items.iter().enumerate().take(end).skip(start) {
        let Some(card_area) = layout.card_area(area, index, row_offset) else {
            continue;
        };

        let protocol = item.image.as_ref().and_then(|reference| {
            let image_area = WorldNewsCard::image_area(card_area, &item.title, under_chip);
            assets.card_image(reference, image_area)
        });
        let mut guard = protocol.as_ref().map(|p| p.lock());

        let card = WorldNewsCard::new(item)
            .chip(theme.chip)
            .image_under_chip(under_chip)
            .image(guard.as_deref_mut());
        f.render_widget(card, card_area);
    }
}
