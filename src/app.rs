use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

use crate::config::Config;
use crate::news::NewsRepository;
use crate::ui::layout::ScrollState;
use crate::ui::theme::Theme;

/// Grid rows moved per PageUp/PageDown when the viewport is unknown
const DEFAULT_PAGE_ROWS: usize = 2;

/// What the event loop should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The search field's value. Single writer, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    value: String,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole value
    pub fn edit(&mut self, new_value: impl Into<String>) {
        self.value = new_value.into();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn reset(&mut self) {
        self.value.clear();
    }
}

/// Application state
pub struct App {
    /// Current search text
    query: SearchQuery,
    /// Source of both collections
    news: Box<dyn NewsRepository>,
    /// Carousel position, in cards
    carousel: ScrollState,
    /// Grid position, in rows
    grid: ScrollState,
    /// Complete grid rows visible in the last frame
    grid_page_rows: usize,
    /// Configuration
    config: Config,
    /// Theme resolved from config
    theme: Theme,
}

impl App {
    pub fn new(news: Box<dyn NewsRepository>, config: Config) -> Self {
        let theme = config.resolve_theme();
        Self {
            query: SearchQuery::new(),
            news,
            carousel: ScrollState::default(),
            grid: ScrollState::default(),
            grid_page_rows: DEFAULT_PAGE_ROWS,
            config,
            theme,
        }
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn news(&self) -> &dyn NewsRepository {
        self.news.as_ref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn carousel_offset(&self) -> usize {
        self.carousel.offset()
    }

    pub fn grid_offset(&self) -> usize {
        self.grid.offset()
    }

    /// Record the scroll bounds found while laying out a frame
    pub fn update_bounds(&mut self, carousel_max: usize, grid_max: usize, grid_page_rows: usize) {
        self.carousel.set_max(carousel_max);
        self.grid.set_max(grid_max);
        self.grid_page_rows = grid_page_rows.max(1);
    }

    /// Apply a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.kind != KeyEventKind::Press {
            return Flow::Continue;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('c') if ctrl => return Flow::Quit,
            KeyCode::Char('u') if ctrl => self.query.reset(),
            KeyCode::Char(c) if !ctrl => {
                let mut value = self.query.value().to_string();
                value.push(c);
                self.query.edit(value);
            }
            KeyCode::Backspace => {
                let mut value = self.query.value().to_string();
                value.pop();
                self.query.edit(value);
            }
            KeyCode::Left => self.carousel.scroll_by(-1),
            KeyCode::Right => self.carousel.scroll_by(1),
            KeyCode::Up => self.grid.scroll_by(-1),
            KeyCode::Down => self.grid.scroll_by(1),
            KeyCode::PageUp => self.grid.scroll_by(-(self.grid_page_rows as isize)),
            KeyCode::PageDown => self.grid.scroll_by(self.grid_page_rows as isize),
            KeyCode::Home => self.grid.scroll_to_start(),
            KeyCode::End => self.grid.scroll_to_end(),
            _ => {}
        }
        Flow::Continue
    }

    /// Apply a mouse event; only the wheel does anything
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.grid.scroll_by(-1),
            MouseEventKind::ScrollDown => self.grid.scroll_by(1),
            MouseEventKind::ScrollLeft => self.carousel.scroll_by(-1),
            MouseEventKind::ScrollRight => self.carousel.scroll_by(1),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::SampleNews;

    fn app() -> App {
        App::new(Box::new(SampleNews::new()), Config::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            assert_eq!(app.handle_key(key(KeyCode::Char(c))), Flow::Continue);
        }
    }

    #[test]
    fn test_query_edit_replaces() {
        let mut query = SearchQuery::new();
        assert_eq!(query.value(), "");

        for value in ["a", "", "  espacios  ", "Últimas noticias", "日本語", "a\tb"] {
            query.edit(value);
            assert_eq!(query.value(), value);
        }

        query.reset();
        assert_eq!(query.value(), "");
    }

    #[test]
    fn test_typing_round_trip() {
        let mut app = app();
        assert_eq!(app.query().value(), "");

        type_str(&mut app, "Marte ñandú q");
        assert_eq!(app.query().value(), "Marte ñandú q");
    }

    #[test]
    fn test_backspace_and_clear() {
        let mut app = app();
        type_str(&mut app, "clima");

        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.query().value(), "clim");

        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(app.query().value(), "");

        // Backspace on empty stays empty
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.query().value(), "");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert_eq!(app.handle_key(key(KeyCode::Esc)), Flow::Quit);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Flow::Quit
        );
        // Plain 'q' is text
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Flow::Continue);
        assert_eq!(app.query().value(), "q");
    }

    #[test]
    fn test_release_ignored() {
        let mut app = app();
        let mut release = key(KeyCode::Char('x'));
        release.kind = KeyEventKind::Release;
        app.handle_key(release);
        assert_eq!(app.query().value(), "");
    }

    #[test]
    fn test_scrolling_clamped() {
        let mut app = app();
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.carousel_offset(), 0);
        assert_eq!(app.grid_offset(), 0);

        app.update_bounds(1, 3, 2);
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.carousel_offset(), 1);

        app.handle_key(key(KeyCode::PageDown));
        assert_eq!(app.grid_offset(), 2);
        app.handle_key(key(KeyCode::End));
        assert_eq!(app.grid_offset(), 3);
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.grid_offset(), 2);
        app.handle_key(key(KeyCode::Home));
        assert_eq!(app.grid_offset(), 0);

        // Scrolling never touches the query
        assert_eq!(app.query().value(), "");
    }

    #[test]
    fn test_mouse_wheel() {
        let mut app = app();
        app.update_bounds(2, 2, 1);
        let wheel = |kind| MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };

        app.handle_mouse(wheel(MouseEventKind::ScrollDown));
        app.handle_mouse(wheel(MouseEventKind::ScrollRight));
        assert_eq!(app.grid_offset(), 1);
        assert_eq!(app.carousel_offset(), 1);

        app.handle_mouse(wheel(MouseEventKind::ScrollUp));
        app.handle_mouse(wheel(MouseEventKind::ScrollLeft));
        assert_eq!(app.grid_offset(), 0);
        assert_eq!(app.carousel_offset(), 0);
    }
}
