//! Top news card widget
//!
//! Renders one item as a fixed-size colored panel:
//! - Title (bold, at most 2 lines, ellipsis when cut) anchored top
//! - Date anchored bottom
//!
//! Images are never drawn on this card.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use super::text::{truncate, wrap, wrap_clamped};
use super::theme::Theme;
use crate::news::NewsItem;

/// Maximum title lines on a top card
pub const TITLE_MAX_LINES: usize = 2;

const PADDING_X: u16 = 2;
const PADDING_Y: u16 = 1;

/// Top news card widget
pub struct TopNewsCard<'a> {
    item: &'a NewsItem,
    theme: &'a Theme,
}

impl<'a> TopNewsCard<'a> {
    pub fn new(item: &'a NewsItem, theme: &'a Theme) -> Self {
        Self { item, theme }
    }

    /// Title lines as they will appear at `card_width`
    pub fn title_lines(&self, card_width: u16) -> Vec<String> {
        let width = card_width.saturating_sub(PADDING_X * 2) as usize;
        wrap_clamped(&self.item.title, width, TITLE_MAX_LINES)
    }
}

impl Widget for TopNewsCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let bg = self.theme.primary;
        buf.set_style(area, Style::default().bg(bg));

        let inner_width = area.width.saturating_sub(PADDING_X * 2);
        if inner_width == 0 {
            return;
        }

        // A squeezed card gives up its vertical padding before any title row
        let wanted = wrap(&self.item.title, inner_width as usize)
            .len()
            .min(TITLE_MAX_LINES) as u16;
        let padding_y = if area.height >= PADDING_Y * 2 + wanted + 1 {
            PADDING_Y
        } else {
            0
        };
        let inner_height = area.height - padding_y * 2;

        let x = area.x + PADDING_X;
        let top = area.y + padding_y;
        let bottom = top + inner_height - 1;

        // Date owns the last inner row when there are two or more
        let title_rows = if inner_height > 1 {
            inner_height - 1
        } else {
            inner_height
        } as usize;
        let lines = wrap_clamped(
            &self.item.title,
            inner_width as usize,
            title_rows.min(TITLE_MAX_LINES),
        );
        let title_style = Style::default()
            .fg(self.theme.on_primary)
            .bg(bg)
            .add_modifier(Modifier::BOLD);
        for (i, line) in lines.iter().enumerate() {
            buf.set_string(x, top + i as u16, line, title_style);
        }

        if inner_height > 1 || self.item.title.is_empty() {
            let date_style = Style::default()
                .fg(self.theme.on_primary_muted)
                .bg(bg)
                .add_modifier(Modifier::BOLD);
            buf.set_string(
                x,
                bottom,
                truncate(&self.item.date, inner_width as usize),
                date_style,
            );
        }
    }
}
