//! Built-in defaults
//!
//! Every call returns a freshly owned value, so two stores never share
//! configuration state.

use chrono::Datelike;

use crate::models::{Link, LinkStyle, PageConfig};
use crate::theme::{HexColor, Theme};

/// The year used for footers built right now
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Default theme colors
pub fn theme() -> Theme {
    let color = HexColor::from_known;
    Theme {
        bg_color: color("#FFE566"),
        primary_color: color("#D83B3B"),
        secondary_color: color("#4391C1"),
        tertiary_color: color("#4D9457"),
        highlight_color: color("#EFCA2F"),
        text_color: color("#000000"),
        logo_bg: color("#4D9457"),
    }
}

/// Default page configuration, with `year` baked into the footer
pub fn page_config(year: i32) -> PageConfig {
    PageConfig {
        title: "print(\"Hola Pythonistas GDL!\")".to_string(),
        description: "Comunidad de desarrolladores Python en Guadalajara. Comparte conocimiento, \
                      haz networking y crece profesionalmente."
            .to_string(),
        logo_text: "Pythonistas GDL".to_string(),
        footer: format!("© {year} Pythonistas GDL - Comunidad de Python en Guadalajara"),
        theme: theme(),
        output_file: "index.html".to_string(),
    }
}

/// Seed links for a store without a persisted document
pub fn links() -> Vec<Link> {
    const PAGE: &str = "https://pythonistas-gdl.org";

    let seed = |id: &str, title: &str, url: &str, icon: &str, style: LinkStyle| Link {
        title: title.to_string(),
        url: url.to_string(),
        icon: icon.to_string(),
        style,
        badge: None,
        enabled: true,
        id: id.to_string(),
    };

    let mut event = seed("evento", "Próximo Evento: TBD", PAGE, "📅", LinkStyle::Primary);
    event.badge = Some("Nuevo".to_string());

    vec![
        event,
        seed(
            "registro",
            "Registrate: pythonistas-gdl.org",
            PAGE,
            "🎟️",
            LinkStyle::Highlight,
        ),
        seed(
            "poetry",
            "Poetry: Package Manager por Daniel Delgado",
            PAGE,
            "👨‍💻",
            LinkStyle::Secondary,
        ),
        seed(
            "comunidad",
            "Conoce Pythonistas GDL - Únete a la comunidad",
            PAGE,
            "🐍",
            LinkStyle::Tertiary,
        ),
        seed(
            "facebook",
            "Síguenos en Facebook",
            "https://www.facebook.com/PythonistasGdl/",
            "📘",
            LinkStyle::Default,
        ),
        seed(
            "instagram",
            "Instagram",
            "https://www.instagram.com/pythonistas_gdl/",
            "📷",
            LinkStyle::Default,
        ),
        seed(
            "twitter",
            "Twitter/X",
            "https://x.com/pythonistas_gdl/",
            "🐦",
            LinkStyle::Default,
        ),
        seed(
            "youtube",
            "YouTube",
            "https://www.youtube.com/@PythonistasGDL",
            "🎬",
            LinkStyle::Default,
        ),
        seed(
            "tiktok",
            "TikTok",
            "https://www.tiktok.com/@pythonistas_gdl",
            "🎵",
            LinkStyle::Default,
        ),
        seed(
            "linkedin",
            "LinkedIn",
            "https://www.linkedin.com/groups/13193010/",
            "💼",
            LinkStyle::Default,
        ),
        seed(
            "discord",
            "Discord",
            "https://discord.gg/HcvW3r2Wfu",
            "💬",
            LinkStyle::Default,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_has_eleven_unique_links() {
        let links = links();
        assert_eq!(links.len(), 11);
        let ids: HashSet<_> = links.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids.len(), 11);
        assert_eq!(links[0].id, "evento");
        assert_eq!(links[0].badge.as_deref(), Some("Nuevo"));
        assert_eq!(links[10].id, "discord");
        assert!(links.iter().all(|l| l.enabled));
    }

    #[test]
    fn test_page_config_footer_year() {
        let config = page_config(2031);
        assert!(config.footer.starts_with("© 2031 "));
        assert_eq!(config.output_file, "index.html");
    }

    #[test]
    fn test_factory_values_are_independent() {
        let mut a = page_config(2024);
        let b = page_config(2024);
        a.title.push_str(" changed");
        a.theme.bg_color = HexColor::parse("#000").unwrap();
        assert_ne!(a, b);
        assert_eq!(b.theme, theme());
    }
}
