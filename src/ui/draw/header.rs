//! Search field, category tabs and section headings

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::SearchQuery;
use crate::ui::theme::Theme;

pub const SEARCH_PLACEHOLDER: &str = "Buscar";
const SEARCH_ICON: &str = "⌕ ";

/// Category labels; only the first is ever shown as active
pub const TABS: [&str; 3] = ["Noticias", "Eventos", "Clima"];
const TAB_GAP: &str = "   ";

/// Draw the rounded search field
pub(super) fn draw_search_bar(f: &mut Frame, query: &SearchQuery, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.background));

    // Room for text after the icon, keeping one cell for the cursor
    let text_width = (area.width.saturating_sub(2) as usize)
        .saturating_sub(SEARCH_ICON.width())
        .saturating_sub(1);
    let visible = visible_tail(query.value(), text_width);

    let icon = Span::styled(SEARCH_ICON, Style::default().fg(theme.muted));
    let line = if query.value().is_empty() {
        Line::from(vec![
            icon,
            Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(theme.muted)),
        ])
    } else {
        Line::from(vec![
            icon,
            Span::styled(visible, Style::default().fg(theme.foreground)),
        ])
    };

    f.render_widget(Paragraph::new(line).block(block), area);

    if area.width > 2 && area.height > 2 {
        // +1 for the border on the left side of the block
        let cursor_x = area.x + 1 + (SEARCH_ICON.width() + visible.width()) as u16;
        let cursor_x = cursor_x.min(area.x + area.width - 2);
        f.set_cursor_position((cursor_x, area.y + 1));
    }
}

/// Longest suffix of `s` that fits in `max_width` columns
fn visible_tail(s: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = s.len();
    for (i, c) in s.char_indices().rev() {
        width += c.width().unwrap_or(0);
        if width > max_width {
            break;
        }
        start = i;
    }
    &s[start..]
}

/// Draw the inert category row and the underline below the first label
pub(super) fn draw_tabs(f: &mut Frame, tabs_area: Rect, underline_area: Rect, theme: &Theme) {
    let mut spans = Vec::with_capacity(TABS.len() * 2);
    for (i, label) in TABS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(TAB_GAP));
        }
        let style = if i == 0 {
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted)
        };
        spans.push(Span::styled(*label, style));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.background)),
        tabs_area,
    );

    let underline = "━".repeat(TABS[0].width());
    f.render_widget(
        Paragraph::new(underline).style(Style::default().fg(theme.primary).bg(theme.background)),
        underline_area,
    );
}

pub(super) fn draw_heading(f: &mut Frame, text: &str, area: Rect, theme: &Theme) {
    let style = Style::default()
        .fg(theme.foreground)
        .bg(theme.background)
        .add_modifier(Modifier::BOLD);
    f.render_widget(Paragraph::new(text).style(style), area);
}
