//! Data models for linkpage
//!
//! Defines the link record, its visual style, the page configuration and
//! the closed sets of fields that can be updated on each of them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::theme::Theme;

/// Icon used when a link is added without one
pub const DEFAULT_ICON: &str = "🔗";

/// Visual variant of a rendered link
///
/// Unrecognized names are kept verbatim so they survive a load/save cycle
/// and reach the page as a modifier class. Styles are built from names with
/// `LinkStyle::from`, so a built-in name always maps to its built-in variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LinkStyle {
    #[default]
    Default,
    Primary,
    Secondary,
    Tertiary,
    Highlight,
    Custom(CustomStyle),
}

/// Name of a style outside the built-in set
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomStyle(String);

impl CustomStyle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl LinkStyle {
    /// The built-in variants, in menu order
    pub const BUILT_IN: [LinkStyle; 5] = [
        LinkStyle::Default,
        LinkStyle::Primary,
        LinkStyle::Secondary,
        LinkStyle::Tertiary,
        LinkStyle::Highlight,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            LinkStyle::Default => "default",
            LinkStyle::Primary => "primary",
            LinkStyle::Secondary => "secondary",
            LinkStyle::Tertiary => "tertiary",
            LinkStyle::Highlight => "highlight",
            LinkStyle::Custom(name) => name.as_str(),
        }
    }

    /// CSS modifier class, `None` for the base appearance
    pub fn modifier_class(&self) -> Option<&str> {
        match self {
            LinkStyle::Default => None,
            other => Some(other.as_str()),
        }
    }
}

impl From<String> for LinkStyle {
    fn from(s: String) -> Self {
        match s.as_str() {
            "default" => LinkStyle::Default,
            "primary" => LinkStyle::Primary,
            "secondary" => LinkStyle::Secondary,
            "tertiary" => LinkStyle::Tertiary,
            "highlight" => LinkStyle::Highlight,
            _ => LinkStyle::Custom(CustomStyle(s)),
        }
    }
}

impl From<&str> for LinkStyle {
    fn from(s: &str) -> Self {
        LinkStyle::from(s.to_string())
    }
}

impl From<LinkStyle> for String {
    fn from(style: LinkStyle) -> Self {
        match style {
            LinkStyle::Custom(name) => name.0,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for LinkStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the page's link list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Display text
    pub title: String,
    /// Destination
    pub url: String,
    /// Short glyph shown before the title
    #[serde(default = "default_icon")]
    pub icon: String,
    /// Visual variant
    #[serde(default)]
    pub style: LinkStyle,
    /// Optional overlay label (e.g. "Nuevo")
    #[serde(default)]
    pub badge: Option<String>,
    /// Disabled links are kept but not rendered
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Identifier, unique within a store
    pub id: String,
}

impl Link {
    /// Badge text if it is present and non-empty
    pub fn visible_badge(&self) -> Option<&str> {
        self.badge.as_deref().filter(|b| !b.is_empty())
    }

    fn apply(&mut self, update: &LinkUpdate) {
        match update {
            LinkUpdate::Title(v) => self.title = v.clone(),
            LinkUpdate::Url(v) => self.url = v.clone(),
            LinkUpdate::Icon(v) => self.icon = v.clone(),
            LinkUpdate::Style(v) => self.style = v.clone(),
            LinkUpdate::Badge(v) => self.badge = v.clone(),
            LinkUpdate::Enabled(v) => self.enabled = *v,
        }
    }

    pub(crate) fn apply_all(&mut self, updates: &[LinkUpdate]) {
        for update in updates {
            self.apply(update);
        }
    }
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

fn default_enabled() -> bool {
    true
}

/// Request to add a link; unset options fall back to the store defaults
#[derive(Debug, Clone, PartialEq)]
pub struct NewLink {
    pub title: String,
    pub url: String,
    pub icon: String,
    pub style: LinkStyle,
    pub badge: Option<String>,
    pub enabled: bool,
    /// Explicit id, inserted verbatim
    pub id: Option<String>,
}

impl NewLink {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            icon: default_icon(),
            style: LinkStyle::Default,
            badge: None,
            enabled: true,
            id: None,
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn style(mut self, style: LinkStyle) -> Self {
        self.style = style;
        self
    }

    pub fn badge(mut self, badge: Option<String>) -> Self {
        self.badge = badge;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Updatable link fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkField {
    Title,
    Url,
    Icon,
    Style,
    Badge,
    Enabled,
}

impl LinkField {
    pub const ALL: [LinkField; 6] = [
        LinkField::Title,
        LinkField::Url,
        LinkField::Icon,
        LinkField::Style,
        LinkField::Badge,
        LinkField::Enabled,
    ];

    pub fn key(self) -> &'static str {
        match self {
            LinkField::Title => "title",
            LinkField::Url => "url",
            LinkField::Icon => "icon",
            LinkField::Style => "style",
            LinkField::Badge => "badge",
            LinkField::Enabled => "enabled",
        }
    }

    /// Build a typed update from a text value.
    ///
    /// An empty badge or the literal `none` clears the badge.
    pub fn with_value(self, value: &str) -> Result<LinkUpdate, StoreError> {
        Ok(match self {
            LinkField::Title => LinkUpdate::Title(value.to_string()),
            LinkField::Url => LinkUpdate::Url(value.to_string()),
            LinkField::Icon => LinkUpdate::Icon(value.to_string()),
            LinkField::Style => LinkUpdate::Style(LinkStyle::from(value)),
            LinkField::Badge => {
                if value.is_empty() || value.eq_ignore_ascii_case("none") {
                    LinkUpdate::Badge(None)
                } else {
                    LinkUpdate::Badge(Some(value.to_string()))
                }
            }
            LinkField::Enabled => match value.to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => LinkUpdate::Enabled(true),
                "false" | "0" | "no" | "off" => LinkUpdate::Enabled(false),
                _ => {
                    return Err(StoreError::InvalidValue {
                        field: "enabled",
                        value: value.to_string(),
                    })
                }
            },
        })
    }
}

impl FromStr for LinkField {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LinkField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| StoreError::UnknownField {
                entity: "link",
                name: s.to_string(),
            })
    }
}

/// A single typed change to a link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkUpdate {
    Title(String),
    Url(String),
    Icon(String),
    Style(LinkStyle),
    Badge(Option<String>),
    Enabled(bool),
}

impl LinkUpdate {
    /// Parse a `field`, `value` pair, rejecting unknown field names
    pub fn parse(field: &str, value: &str) -> Result<Self, StoreError> {
        field.parse::<LinkField>()?.with_value(value)
    }
}

/// Page-level settings and theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Heading shown above the links
    pub title: String,
    pub description: String,
    /// Text under the logo; also the document title
    pub logo_text: String,
    pub footer: String,
    pub theme: Theme,
    /// Where the rendered page is written
    pub output_file: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        crate::defaults::page_config(crate::defaults::current_year())
    }
}

impl PageConfig {
    pub fn get(&self, field: ConfigField) -> &str {
        match field {
            ConfigField::Title => &self.title,
            ConfigField::Description => &self.description,
            ConfigField::LogoText => &self.logo_text,
            ConfigField::Footer => &self.footer,
            ConfigField::OutputFile => &self.output_file,
        }
    }

    pub(crate) fn apply(&mut self, update: &ConfigUpdate) {
        let slot = match update.field {
            ConfigField::Title => &mut self.title,
            ConfigField::Description => &mut self.description,
            ConfigField::LogoText => &mut self.logo_text,
            ConfigField::Footer => &mut self.footer,
            ConfigField::OutputFile => &mut self.output_file,
        };
        *slot = update.value.clone();
    }
}

/// Updatable page settings. The theme is changed through `update_theme` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    Title,
    Description,
    LogoText,
    Footer,
    OutputFile,
}

impl ConfigField {
    pub const ALL: [ConfigField; 5] = [
        ConfigField::Title,
        ConfigField::Description,
        ConfigField::LogoText,
        ConfigField::Footer,
        ConfigField::OutputFile,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ConfigField::Title => "title",
            ConfigField::Description => "description",
            ConfigField::LogoText => "logo_text",
            ConfigField::Footer => "footer",
            ConfigField::OutputFile => "output_file",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConfigField::Title => "Title",
            ConfigField::Description => "Description",
            ConfigField::LogoText => "Logo Text",
            ConfigField::Footer => "Footer",
            ConfigField::OutputFile => "Output Filename",
        }
    }
}

impl FromStr for ConfigField {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| StoreError::UnknownField {
                entity: "config",
                name: s.to_string(),
            })
    }
}

/// A single change to the page configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigUpdate {
    pub field: ConfigField,
    pub value: String,
}

impl ConfigUpdate {
    pub fn new(field: ConfigField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    /// Parse a `field`, `value` pair, rejecting unknown field names
    pub fn parse(field: &str, value: &str) -> Result<Self, StoreError> {
        Ok(Self::new(field.parse()?, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_link() -> Link {
        Link {
            title: "Discord".to_string(),
            url: "https://discord.gg/example".to_string(),
            icon: "💬".to_string(),
            style: LinkStyle::Default,
            badge: None,
            enabled: true,
            id: "discord".to_string(),
        }
    }

    #[test]
    fn test_style_from_string() {
        assert_eq!(LinkStyle::from("primary"), LinkStyle::Primary);
        assert_eq!(LinkStyle::from("highlight"), LinkStyle::Highlight);
        assert_eq!(LinkStyle::from("neon").as_str(), "neon");
        assert!(matches!(LinkStyle::from("neon"), LinkStyle::Custom(_)));
    }

    #[test]
    fn test_built_in_names_never_become_custom() {
        for style in LinkStyle::BUILT_IN {
            let parsed = LinkStyle::from(style.as_str());
            assert_eq!(parsed, style);
            assert!(!matches!(parsed, LinkStyle::Custom(_)));
        }
    }

    #[test]
    fn test_style_modifier_class() {
        assert_eq!(LinkStyle::Default.modifier_class(), None);
        assert_eq!(LinkStyle::Tertiary.modifier_class(), Some("tertiary"));
        assert_eq!(LinkStyle::from("neon").modifier_class(), Some("neon"));
    }

    #[test]
    fn test_link_serialization_key_order() {
        let json = serde_json::to_string(&sample_link()).unwrap();
        assert_eq!(
            json,
            r#"{"title":"Discord","url":"https://discord.gg/example","icon":"💬","style":"default","badge":null,"enabled":true,"id":"discord"}"#
        );
    }

    #[test]
    fn test_link_deserialize_fills_defaults() {
        let link: Link =
            serde_json::from_str(r#"{"title":"A","url":"https://a.example","id":"a"}"#).unwrap();
        assert_eq!(link.icon, DEFAULT_ICON);
        assert_eq!(link.style, LinkStyle::Default);
        assert!(link.badge.is_none());
        assert!(link.enabled);
    }

    #[test]
    fn test_custom_style_survives_serialization() {
        let mut link = sample_link();
        link.style = LinkStyle::from("neon");
        let json = serde_json::to_string(&link).unwrap();
        assert!(json.contains(r#""style":"neon""#));
        let back: Link = serde_json::from_str(&json).unwrap();
        assert_eq!(back, link);
    }

    #[test]
    fn test_visible_badge() {
        let mut link = sample_link();
        assert_eq!(link.visible_badge(), None);
        link.badge = Some(String::new());
        assert_eq!(link.visible_badge(), None);
        link.badge = Some("Nuevo".to_string());
        assert_eq!(link.visible_badge(), Some("Nuevo"));
    }

    #[test]
    fn test_link_update_parse() {
        assert_eq!(
            LinkUpdate::parse("title", "Hola").unwrap(),
            LinkUpdate::Title("Hola".to_string())
        );
        assert_eq!(
            LinkUpdate::parse("badge", "none").unwrap(),
            LinkUpdate::Badge(None)
        );
        assert_eq!(
            LinkUpdate::parse("enabled", "No").unwrap(),
            LinkUpdate::Enabled(false)
        );
        assert!(matches!(
            LinkUpdate::parse("colour", "red"),
            Err(StoreError::UnknownField { .. })
        ));
        assert!(matches!(
            LinkUpdate::parse("enabled", "maybe"),
            Err(StoreError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_apply_all() {
        let mut link = sample_link();
        link.apply_all(&[
            LinkUpdate::Style(LinkStyle::Primary),
            LinkUpdate::Badge(Some("Nuevo".to_string())),
            LinkUpdate::Enabled(false),
        ]);
        assert_eq!(link.style, LinkStyle::Primary);
        assert_eq!(link.badge.as_deref(), Some("Nuevo"));
        assert!(!link.enabled);
        assert_eq!(link.title, "Discord");
    }

    #[test]
    fn test_new_link_builder() {
        let new = NewLink::new("Blog", "https://blog.example")
            .icon("📝")
            .style(LinkStyle::Secondary)
            .badge(Some("Beta".to_string()))
            .enabled(false)
            .id("blog");
        assert_eq!(new.icon, "📝");
        assert_eq!(new.style, LinkStyle::Secondary);
        assert_eq!(new.id.as_deref(), Some("blog"));
        assert!(!new.enabled);
    }

    #[test]
    fn test_config_field_rejects_theme() {
        assert!(matches!(
            ConfigUpdate::parse("theme", "{}"),
            Err(StoreError::UnknownField { .. })
        ));
        let update = ConfigUpdate::parse("logo_text", "GDL").unwrap();
        assert_eq!(update.field, ConfigField::LogoText);
    }

    #[test]
    fn test_page_config_partial_deserialize() {
        let config: PageConfig = serde_json::from_str(r#"{"title":"Custom"}"#).unwrap();
        assert_eq!(config.title, "Custom");
        assert_eq!(config.output_file, "index.html");
        assert_eq!(config.theme, Theme::default());
    }
}
