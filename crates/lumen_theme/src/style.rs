//! Appearance styles

use std::fmt::{Display, Formatter};

use serde::Deserialize;

use crate::themes;

/// Global appearance style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Light,
    Dark,
}

impl Style {
    /// Every built-in style
    pub const ALL: [Style; 2] = [Style::Light, Style::Dark];

    /// The other style
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Stable id, matching the config spelling
    pub fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Raw value used by toolkit bridges (`Light = 0`, `Dark = 1`)
    pub fn as_raw(self) -> u8 {
        match self {
            Self::Light => 0,
            Self::Dark => 1,
        }
    }

    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Light),
            1 => Some(Self::Dark),
            _ => None,
        }
    }

    /// Compiled-in palette literal for this style
    pub fn palette_entries(self) -> &'static [(&'static str, u32)] {
        match self {
            Self::Light => themes::LIGHT,
            Self::Dark => themes::DARK,
        }
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
