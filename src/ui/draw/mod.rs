//! Drawing functions for the TUI
//!
//! The screen is one page, split by section:
//! - `header` - Search field, category tabs, section headings
//! - `feed` - Top news carousel and world news grid

mod feed;
mod header;

use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    style::Style,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::App;
use crate::assets::AssetStore;
use crate::ui::theme::Theme;

use feed::{draw_carousel, draw_grid};
use header::{draw_heading, draw_search_bar, draw_tabs};

/// Section heading above the carousel
pub const LATEST_HEADING: &str = "Últimas noticias";
/// Section heading above the grid
pub const WORLD_HEADING: &str = "Alrededor del mundo";

/// Main draw function
pub fn draw(f: &mut Frame, app: &mut App, assets: &mut AssetStore) {
    let area = f.area();
    let padding = app.config().appearance.horizontal_padding;
    let page = area.inner(Margin {
        horizontal: padding.min(area.width / 4),
        vertical: 0,
    });

    let carousel = app.config().carousel_layout();
    let grid = app.config().grid_layout();
    let chunks = Layout::vertical([
        Constraint::Length(3),                    // Search bar
        Constraint::Length(1),                    //
        Constraint::Length(1),                    // Tabs
        Constraint::Length(1),                    // Tab underline
        Constraint::Length(1),                    //
        Constraint::Length(1),                    // Latest heading
        Constraint::Length(carousel.card_height), // Carousel
        Constraint::Length(1),                    //
        Constraint::Length(1),                    // World heading
        Constraint::Min(0),                       // Grid
        Constraint::Length(1),                    // Status bar
    ])
    .split(page);

    // Clamp scroll positions to this frame before anything reads them
    {
        let news = app.news();
        let carousel_max = carousel.max_offset(news.top_news().len(), chunks[6].width);
        let grid_max = grid.max_offset(news.world_news().len(), chunks[9].height);
        let page_rows = grid.visible_rows(chunks[9].height);
        app.update_bounds(carousel_max, grid_max, page_rows);
    }

    let app = &*app;
    let theme = app.theme();
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    draw_search_bar(f, app.query(), chunks[0], theme);
    draw_tabs(f, chunks[2], chunks[3], theme);
    draw_heading(f, LATEST_HEADING, chunks[5], theme);
    draw_carousel(
        f,
        app.news().top_news(),
        app.carousel_offset(),
        &carousel,
        chunks[6],
        theme,
    );
    draw_heading(f, WORLD_HEADING, chunks[8], theme);
    draw_grid(
        f,
        app.news().world_news(),
        app.grid_offset(),
        &grid,
        chunks[9],
        theme,
        assets,
    );
    draw_status_bar(f, chunks[10], theme);
}

/// Draw the key hints
fn draw_status_bar(f: &mut Frame, area: Rect, theme: &Theme) {
    let status = "Esc: salir | ←→: últimas noticias | ↑↓ PgUp PgDn: mundo | Ctrl+U: borrar";
    let status_bar =
        Paragraph::new(status).style(Style::default().fg(theme.muted).bg(theme.background));
    f.render_widget(status_bar, area);
}
