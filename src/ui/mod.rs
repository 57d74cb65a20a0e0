//! UI module - handles all TUI rendering
//!
//! Structure:
//! - `draw/` - Screen composition (header, carousel, grid, status)
//! - `theme.rs` - Color themes and presets
//! - `layout.rs` - Carousel and grid geometry
//! - `text.rs` - Wrapping and truncation
//! - `top_card.rs` - Top news card widget
//! - `world_card.rs` - World news card widget

mod draw;
pub mod layout;
pub mod text;
pub mod theme;
pub mod top_card;
pub mod world_card;


// Re-export main draw function
pub use draw::draw;
