//! Image asset resolution and terminal graphics support.
//!
//! Supports:
//! - Kitty graphics protocol (kitty terminal)
//! - Sixel graphics (foot, mlterm, xterm)
//! - iTerm2 protocol (iTerm2, WezTerm)
//! - Half-block cells when nothing better is available
//!
//! A reference that cannot be resolved is not an error for the screen: the
//! card is drawn as if it had no image.

use image::imageops::FilterType;
use image::DynamicImage;
use parking_lot::Mutex;
use ratatui::layout::Rect;
use ratatui_image::picker::{Picker, ProtocolType};
use ratatui_image::protocol::StatefulProtocol;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use crate::news::ImageRef;

/// Width SVG assets are rasterized to, in pixels
const SVG_RASTER_WIDTH: f32 = 640.0;

/// Extensions tried in the override directory, in order
const EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "svg"];

/// Assets compiled into the binary
const BUNDLED: &[(&str, &[u8])] = &[
    ("trump", include_bytes!("../assets/trump.svg")),
    ("cleopatra", include_bytes!("../assets/cleopatra.svg")),
    ("intel", include_bytes!("../assets/intel.svg")),
    ("marte", include_bytes!("../assets/marte.svg")),
];

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(String),
    #[error("failed to read asset: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("failed to parse svg: {0}")]
    Svg(#[from] usvg::Error),
    #[error("cannot allocate {width}x{height} raster")]
    Raster { width: u32, height: u32 },
}

/// Turns an image reference into pixels
pub trait AssetResolver {
    fn resolve(&self, reference: &ImageRef) -> Result<DynamicImage, AssetError>;
}

/// Resolver over an optional override directory and the bundled assets
#[derive(Debug, Clone, Default)]
pub struct BundledAssets {
    override_dir: Option<PathBuf>,
}

impl BundledAssets {
    pub fn new(override_dir: Option<PathBuf>) -> Self {
        Self { override_dir }
    }

    fn find_override(&self, name: &str) -> Option<PathBuf> {
        let dir = self.override_dir.as_ref()?;
        EXTENSIONS
            .iter()
            .map(|ext| dir.join(format!("{}.{}", name, ext)))
            .find(|path| path.is_file())
    }
}

impl AssetResolver for BundledAssets {
    fn resolve(&self, reference: &ImageRef) -> Result<DynamicImage, AssetError> {
        let name = reference.as_str();
        // References are names, never paths
        if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
            return Err(AssetError::NotFound(name.to_string()));
        }

        if let Some(path) = self.find_override(name) {
            tracing::debug!("Loading asset {} from {}", name, path.display());
            return load_file(&path);
        }

        BUNDLED
            .iter()
            .find(|(bundled, _)| *bundled == name)
            .ok_or_else(|| AssetError::NotFound(name.to_string()))
            .and_then(|(_, data)| decode(data))
    }
}

/// Load an image file from disk
pub fn load_file(path: &Path) -> Result<DynamicImage, AssetError> {
    let data = std::fs::read(path)?;
    decode(&data)
}

/// Decode raster or SVG data
pub fn decode(data: &[u8]) -> Result<DynamicImage, AssetError> {
    if is_svg(data) {
        rasterize_svg(data)
    } else {
        Ok(image::load_from_memory(data)?)
    }
}

fn is_svg(data: &[u8]) -> bool {
    let head = &data[..data.len().min(512)];
    let head = String::from_utf8_lossy(head);
    let head = head.trim_start();
    head.starts_with("<svg") || (head.starts_with("<?xml") && head.contains("<svg"))
}

fn rasterize_svg(data: &[u8]) -> Result<DynamicImage, AssetError> {
    let tree = usvg::Tree::from_data(data, &usvg::Options::default())?;
    let size = tree.size();
    let scale = (SVG_RASTER_WIDTH / size.width()).max(1.0);
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;

    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(AssetError::Raster { width, height })?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    let mut rgba = image::RgbaImage::new(width, height);
    for (src, dst) in pixmap.pixels().iter().zip(rgba.pixels_mut()) {
        let c = src.demultiply();
        *dst = image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    Ok(DynamicImage::ImageRgba8(rgba))
}

/// Scale and crop `image` so it covers `width`x`height` pixels exactly
pub fn cover_crop(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    image.resize_to_fill(width.max(1), height.max(1), FilterType::Triangle)
}

type ProtocolKey = (ImageRef, u16, u16);

/// Asset store - resolves references and caches graphics protocols.
/// Must be created before entering raw mode when querying the terminal.
pub struct AssetStore {
    /// The picker determines the graphics protocol and font size
    picker: Option<Picker>,
    resolver: Box<dyn AssetResolver>,
    /// Decoded images by reference; `None` marks a failed resolution
    images: HashMap<ImageRef, Option<Arc<DynamicImage>>>,
    /// Encoded protocols by reference and card size in cells
    protocols: HashMap<ProtocolKey, Arc<Mutex<StatefulProtocol>>>,
}

impl AssetStore {
    pub fn new(resolver: Box<dyn AssetResolver>, picker: Option<Picker>) -> Self {
        Self {
            picker,
            resolver,
            images: HashMap::new(),
            protocols: HashMap::new(),
        }
    }

    /// Create a store by querying the terminal for a graphics protocol.
    /// MUST be called before entering raw mode / alternate screen.
    pub fn detect(resolver: Box<dyn AssetResolver>, halfblocks_fallback: bool) -> Self {
        let picker = match Picker::from_query_stdio() {
            Ok(p) => {
                tracing::info!("Graphics protocol detected: {:?}", p.protocol_type());
                Some(p)
            }
            Err(e) if halfblocks_fallback => {
                tracing::info!("No graphics protocol available ({}), using half blocks", e);
                Some(Picker::from_fontsize((8, 16)))
            }
            Err(e) => {
                tracing::info!("No graphics protocol available: {}", e);
                None
            }
        };
        Self::new(resolver, picker)
    }

    /// Store that never draws images
    pub fn disabled() -> Self {
        Self::new(Box::new(BundledAssets::default()), None)
    }

    pub fn supports_graphics(&self) -> bool {
        self.picker.is_some()
    }

    /// Whether images live in cells that text can be drawn over
    pub fn draws_under_text(&self) -> bool {
        self.picker
            .as_ref()
            .is_some_and(|p| matches!(p.protocol_type(), ProtocolType::Halfblocks))
    }

    /// Protocol for `reference` cover-cropped to `area`, if it can be shown
    pub fn card_image(
        &mut self,
        reference: &ImageRef,
        area: Rect,
    ) -> Option<Arc<Mutex<StatefulProtocol>>> {
        if area.width == 0 || area.height == 0 {
            return None;
        }
        let key = (reference.clone(), area.width, area.height);
        if let Some(cached) = self.protocols.get(&key) {
            return Some(cached.clone());
        }

        let (font_w, font_h) = self.picker.as_ref()?.font_size();
        let image = self.image(reference)?;

        let cover = cover_crop(
            &image,
            area.width as u32 * font_w as u32,
            area.height as u32 * font_h as u32,
        );
        let picker = self.picker.as_mut()?;
        let protocol = Arc::new(Mutex::new(picker.new_resize_protocol(cover)));
        self.protocols.insert(key, protocol.clone());
        Some(protocol)
    }

    fn image(&mut self, reference: &ImageRef) -> Option<Arc<DynamicImage>> {
        if let Some(cached) = self.images.get(reference) {
            return cached.clone();
        }

        let resolved = match self.resolver.resolve(reference) {
            Ok(image) => Some(Arc::new(image)),
            Err(e) => {
                tracing::debug!("Failed to load image {}: {}", reference, e);
                None
            }
        };
        self.images.insert(reference.clone(), resolved.clone());
        resolved
    }

    /// Drop encoded protocols (sizes change on resize)
    pub fn clear_protocols(&mut self) {
        self.protocols.clear();
    }
}
