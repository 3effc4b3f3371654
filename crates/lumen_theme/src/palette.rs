//! Color palettes
//!
//! A palette maps semantic color keys to packed `0xRRGGBBAA` values for one
//! [`Style`]. Palettes are built once from the compiled-in literals and are
//! never mutated; switching styles swaps which palette is active.

use lumen_core::Color;
use rustc_hash::FxHashMap;

use crate::style::Style;

/// Semantic color keys defined by every built-in palette
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorKey {
    /// Navigation bar background
    NavBackground,
    /// Brand color
    Theme,
    Text,
    /// Root background of a screen
    ViewControllerBackground,
    Background,
}

impl ColorKey {
    pub const ALL: [ColorKey; 5] = [
        ColorKey::NavBackground,
        ColorKey::Theme,
        ColorKey::Text,
        ColorKey::ViewControllerBackground,
        ColorKey::Background,
    ];

    /// Palette key string
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NavBackground => "navBgColor",
            Self::Theme => "theme",
            Self::Text => "text",
            Self::ViewControllerBackground => "viewControllerBackground",
            Self::Background => "background",
        }
    }
}

impl AsRef<str> for ColorKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Immutable key to packed-color mapping for one style
#[derive(Clone, Debug)]
pub struct ColorPalette {
    style: Style,
    entries: FxHashMap<&'static str, u32>,
}

impl ColorPalette {
    /// Build the palette from the style's compiled-in literal
    pub fn for_style(style: Style) -> Self {
        Self {
            style,
            entries: style.palette_entries().iter().copied().collect(),
        }
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// Packed `0xRRGGBBAA` value for a key
    pub fn lookup(&self, key: &str) -> Option<u32> {
        self.entries.get(key).copied()
    }

    /// Decoded color for a key
    pub fn color(&self, key: &str) -> Option<Color> {
        self.lookup(key).map(Color::from_rgba_hex)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All keys, sorted
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.entries.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One palette per built-in style
#[derive(Clone, Debug)]
pub struct PaletteBundle {
    light: ColorPalette,
    dark: ColorPalette,
}

impl PaletteBundle {
    pub fn new() -> Self {
        Self {
            light: ColorPalette::for_style(Style::Light),
            dark: ColorPalette::for_style(Style::Dark),
        }
    }

    pub fn for_style(&self, style: Style) -> &ColorPalette {
        match style {
            Style::Light => &self.light,
            Style::Dark => &self.dark,
        }
    }
}

impl Default for PaletteBundle {
    fn default() -> Self {
        Self::new()
    }
}
