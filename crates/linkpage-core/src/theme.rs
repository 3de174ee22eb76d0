//! Page theme
//!
//! A theme is a fixed set of named color roles. Every role holds a
//! [`HexColor`], which can only be built from a valid `#rgb` or `#rrggbb`
//! string, so an invalid color is rejected before it reaches a store.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}){1,2}$").expect("hex color pattern is valid")
});

/// A validated hex color such as `#FFE566` or `#fff`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Validate and wrap a color string
    pub fn parse(value: &str) -> Result<Self, StoreError> {
        if HEX_COLOR.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(StoreError::InvalidColor {
                value: value.to_string(),
            })
        }
    }

    /// Wrap a color literal that is known to be valid
    pub(crate) fn from_known(value: &str) -> Self {
        debug_assert!(HEX_COLOR.is_match(value), "invalid built-in color {value}");
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return this color scaled towards black, always in `#rrggbb` form.
    ///
    /// `factor` is clamped to `0.0..=1.0`; `1.0` keeps the color unchanged.
    pub fn darken(&self, factor: f32) -> HexColor {
        let factor = factor.clamp(0.0, 1.0);
        let [r, g, b] = self.channels();
        let scale = |c: u8| (c as f32 * factor).round() as u8;
        HexColor(format!("#{:02x}{:02x}{:02x}", scale(r), scale(g), scale(b)))
    }

    fn channels(&self) -> [u8; 3] {
        let digits = &self.0[1..];
        let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).unwrap_or(0);
        if digits.len() == 3 {
            [0, 1, 2].map(|i| nibble(i) * 17)
        } else {
            [0, 2, 4].map(|i| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0))
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for HexColor {
    type Error = StoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl FromStr for HexColor {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Named color roles of a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeColor {
    Background,
    Primary,
    Secondary,
    Tertiary,
    Highlight,
    Text,
    LogoBackground,
}

impl ThemeColor {
    /// All roles, in menu order
    pub const ALL: [ThemeColor; 7] = [
        ThemeColor::Background,
        ThemeColor::Primary,
        ThemeColor::Secondary,
        ThemeColor::Tertiary,
        ThemeColor::Highlight,
        ThemeColor::Text,
        ThemeColor::LogoBackground,
    ];

    /// Key used in the persisted document
    pub fn key(self) -> &'static str {
        match self {
            ThemeColor::Background => "bg_color",
            ThemeColor::Primary => "primary_color",
            ThemeColor::Secondary => "secondary_color",
            ThemeColor::Tertiary => "tertiary_color",
            ThemeColor::Highlight => "highlight_color",
            ThemeColor::Text => "text_color",
            ThemeColor::LogoBackground => "logo_bg",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            ThemeColor::Background => "Background Color",
            ThemeColor::Primary => "Primary Color",
            ThemeColor::Secondary => "Secondary Color",
            ThemeColor::Tertiary => "Tertiary Color",
            ThemeColor::Highlight => "Highlight Color",
            ThemeColor::Text => "Text Color",
            ThemeColor::LogoBackground => "Logo Background Color",
        }
    }
}

impl FromStr for ThemeColor {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeColor::ALL
            .into_iter()
            .find(|role| role.key() == s)
            .ok_or_else(|| StoreError::UnknownField {
                entity: "theme",
                name: s.to_string(),
            })
    }
}

/// Color roles used by the rendered page
///
/// Roles missing from a persisted theme take their default color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub bg_color: HexColor,
    pub primary_color: HexColor,
    pub secondary_color: HexColor,
    pub tertiary_color: HexColor,
    pub highlight_color: HexColor,
    pub text_color: HexColor,
    pub logo_bg: HexColor,
}

impl Theme {
    pub fn get(&self, role: ThemeColor) -> &HexColor {
        match role {
            ThemeColor::Background => &self.bg_color,
            ThemeColor::Primary => &self.primary_color,
            ThemeColor::Secondary => &self.secondary_color,
            ThemeColor::Tertiary => &self.tertiary_color,
            ThemeColor::Highlight => &self.highlight_color,
            ThemeColor::Text => &self.text_color,
            ThemeColor::LogoBackground => &self.logo_bg,
        }
    }

    pub fn set(&mut self, role: ThemeColor, color: HexColor) {
        let slot = match role {
            ThemeColor::Background => &mut self.bg_color,
            ThemeColor::Primary => &mut self.primary_color,
            ThemeColor::Secondary => &mut self.secondary_color,
            ThemeColor::Tertiary => &mut self.tertiary_color,
            ThemeColor::Highlight => &mut self.highlight_color,
            ThemeColor::Text => &mut self.text_color,
            ThemeColor::LogoBackground => &mut self.logo_bg,
        };
        *slot = color;
    }
}

impl Default for Theme {
    fn default() -> Self {
        crate::defaults::theme()
    }
}
