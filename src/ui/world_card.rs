//! World news card widget
//!
//! A fixed-height panel with:
//! - Optional image filling the panel (cover-cropped upstream)
//! - Rounded text chip anchored bottom-centre with the full title
//!
//! Without an image the panel background is left as it is.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{StatefulWidget, Widget},
};
use ratatui_image::{protocol::StatefulProtocol, Resize, StatefulImage};

use super::text::wrap;
use super::theme::ChipColors;
use crate::news::NewsItem;

/// Columns between card edge and chip
const CHIP_MARGIN_X: u16 = 1;
/// Rows between chip and card bottom
const CHIP_MARGIN_Y: u16 = 1;
/// Columns between chip edge and title
const CHIP_PADDING_X: u16 = 1;

/// World news card widget
pub struct WorldNewsCard<'a> {
    item: &'a NewsItem,
    chip: ChipColors,
    image: Option<&'a mut StatefulProtocol>,
    image_under_chip: bool,
}

impl<'a> WorldNewsCard<'a> {
    pub fn new(item: &'a NewsItem) -> Self {
        Self {
            item,
            chip: ChipColors::default(),
            image: None,
            image_under_chip: true,
        }
    }

    pub fn chip(mut self, chip: ChipColors) -> Self {
        self.chip = chip;
        self
    }

    pub fn image(mut self, image: Option<&'a mut StatefulProtocol>) -> Self {
        self.image = image;
        self
    }

    /// Whether the image may be drawn beneath the chip. Graphics protocols
    /// that paint over cells need the chip rows kept free.
    pub fn image_under_chip(mut self, under: bool) -> Self {
        self.image_under_chip = under;
        self
    }

    /// Title lines inside the chip at `card_width`
    pub fn chip_lines(title: &str, card_width: u16) -> Vec<String> {
        let text_width = card_width.saturating_sub((CHIP_MARGIN_X + CHIP_PADDING_X) * 2);
        wrap(title, text_width as usize)
    }

    /// Chip rectangle inside `card` for a chip with `line_count` lines
    pub fn chip_area(card: Rect, line_count: usize) -> Rect {
        let max_height = card.height.saturating_sub(CHIP_MARGIN_Y);
        let wanted = (line_count as u16).saturating_add(2);
        let height = wanted.min(max_height);
        Rect {
            x: card.x + CHIP_MARGIN_X.min(card.width),
            y: card.y + max_height - height,
            width: card.width.saturating_sub(CHIP_MARGIN_X * 2),
            height,
        }
    }

    /// Area the image is drawn into
    pub fn image_area(card: Rect, title: &str, under_chip: bool) -> Rect {
        if under_chip {
            return card;
        }
        let chip = Self::chip_area(card, Self::chip_lines(title, card.width).len());
        Rect {
            height: chip.y - card.y,
            ..card
        }
    }

    fn render_chip(&self, card: Rect, buf: &mut Buffer) {
        let lines = Self::chip_lines(&self.item.title, card.width);
        let chip = Self::chip_area(card, lines.len());
        if chip.width == 0 || chip.height == 0 {
            return;
        }

        let caps = chip.height >= 3;
        let text_top = if caps { chip.y + 1 } else { chip.y };
        let text_rows = if caps { chip.height - 2 } else { chip.height };

        if caps {
            let bottom = chip.y + chip.height - 1;
            for x in chip.x..chip.x + chip.width {
                if let Some(cell) = buf.cell_mut((x, chip.y)) {
                    cell.set_symbol("▄").set_fg(self.chip.background);
                }
                if let Some(cell) = buf.cell_mut((x, bottom)) {
                    cell.set_symbol("▀").set_fg(self.chip.background);
                }
            }
        }

        let body = Rect {
            y: text_top,
            height: text_rows,
            ..chip
        };
        let style = Style::default()
            .fg(self.chip.text)
            .bg(self.chip.background)
            .add_modifier(Modifier::BOLD);
        buf.set_style(body, Style::default().bg(self.chip.background));
        for x in body.x..body.x + body.width {
            for y in body.y..body.y + body.height {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(" ");
                }
            }
        }

        let text_x = chip.x + CHIP_PADDING_X.min(chip.width);
        let text_width = chip.width.saturating_sub(CHIP_PADDING_X * 2) as usize;
        for (i, line) in lines.iter().take(text_rows as usize).enumerate() {
            buf.set_stringn(text_x, text_top + i as u16, line, text_width, style);
        }
    }
}

impl Widget for WorldNewsCard<'_> {
    fn render(mut self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        if let Some(protocol) = self.image.take() {
            let image_area = Self::image_area(area, &self.item.title, self.image_under_chip);
            if image_area.height > 0 {
                let image = StatefulImage::new(None).resize(Resize::Fit(None));
                StatefulWidget::render(image, image_area, buf, protocol);
            }
        }

        self.render_chip(area, buf);
    }
}
