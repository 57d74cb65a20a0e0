//! News items and the repositories that provide them.
//!
//! The screen never owns literal data; it asks a `NewsRepository` for the two
//! ordered collections. `SampleNews` is the built-in set, `FileNews` reads the
//! same shape from a JSON document.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Date shown when an item does not carry one
pub const DEFAULT_DATE: &str = "febrero 08 • 2024";

/// Opaque handle to an image asset
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single news record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    #[serde(default = "default_date")]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

fn default_date() -> String {
    DEFAULT_DATE.to_string()
}

impl NewsItem {
    /// Create an item with the default date and no image
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: default_date(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.image = Some(image);
        self
    }
}

/// Source of the two ordered collections shown on the screen
pub trait NewsRepository {
    /// Items for the horizontal carousel, left to right
    fn top_news(&self) -> &[NewsItem];
    /// Items for the world grid, row-major
    fn world_news(&self) -> &[NewsItem];
}

/// Built-in sample collections
#[derive(Debug, Clone)]
pub struct SampleNews {
    top: Vec<NewsItem>,
    world: Vec<NewsItem>,
}

impl Default for SampleNews {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleNews {
    pub fn new() -> Self {
        let president = "El presidente de EE.UU. no muestra signos de arrepentimiento...";
        let cleopatra = "Bañarse en la piscina del desierto de Cleopatra";

        Self {
            top: vec![NewsItem::new(president), NewsItem::new(cleopatra)],
            world: vec![
                NewsItem::new(president).with_image(ImageRef::new("trump")),
                NewsItem::new(cleopatra).with_image(ImageRef::new("cleopatra")),
                NewsItem::new("Gigantes tecnológicos").with_image(ImageRef::new("intel")),
                NewsItem::new("El rover de Marte envía nuevas imágenes")
                    .with_image(ImageRef::new("marte")),
            ],
        }
    }
}

impl NewsRepository for SampleNews {
    fn top_news(&self) -> &[NewsItem] {
        &self.top
    }

    fn world_news(&self) -> &[NewsItem] {
        &self.world
    }
}

/// Collections loaded from a JSON file
///
/// ```json
/// {
///   "top":   [{ "title": "..." }],
///   "world": [{ "title": "...", "date": "...", "image": "marte" }]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNews {
    top: Vec<NewsItem>,
    world: Vec<NewsItem>,
}

impl FileNews {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read news from {}", path.display()))?;
        let news = Self::from_json(&content)
            .with_context(|| format!("Failed to parse news from {}", path.display()))?;
        tracing::info!(
            "Loaded {} top and {} world items from {}",
            news.top.len(),
            news.world.len(),
            path.display()
        );
        Ok(news)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

impl NewsRepository for FileNews {
    fn top_news(&self) -> &[NewsItem] {
        &self.top
    }

    fn world_news(&self) -> &[NewsItem] {
        &self.world
    }
}
