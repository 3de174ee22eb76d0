//! Page rendering
//!
//! Turns a page configuration and its ordered links into one self-contained
//! HTML document. Styles are inlined; the only external reference is the web
//! font stylesheet. Rendering is pure: no clock, no randomness, no I/O.

use std::fmt::Write;

use crate::models::{Link, PageConfig};
use crate::theme::{HexColor, Theme};

/// Stylesheet for the Poppins web font
pub const FONT_STYLESHEET: &str =
    "https://fonts.googleapis.com/css2?family=Poppins:wght@400;600&display=swap";

/// Scale applied to a variant color for its hover state
const HOVER_SHADE: f32 = 0.85;

/// Render the full page for `config` and `links`
///
/// Only enabled links are emitted, in the given order.
pub fn render(config: &PageConfig, links: &[Link]) -> String {
    let theme = &config.theme;
    let mut html = String::with_capacity(8 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    let _ = writeln!(html, "    <title>{}</title>", escape_text(&config.logo_text));
    let _ = writeln!(
        html,
        "    <link href=\"{}\" rel=\"stylesheet\">",
        escape_attr(FONT_STYLESHEET)
    );
    html.push_str("    <style>\n");
    html.push_str(&stylesheet(theme));
    html.push_str("    </style>\n</head>\n<body>\n");

    html.push_str("    <div class=\"snake-decoration\">\n");
    html.push_str(&snake_svg(theme, "100%", "100%", 8));
    html.push_str("    </div>\n\n");

    html.push_str("    <div class=\"container\">\n");
    html.push_str("        <div class=\"profile\">\n");
    html.push_str("            <div class=\"logo\">\n");
    html.push_str(&snake_svg(theme, "80", "80", 16));
    let _ = writeln!(
        html,
        "                <div class=\"logo-text\">{}</div>",
        escape_text(&config.logo_text)
    );
    html.push_str("            </div>\n");
    let _ = writeln!(html, "            <h1>{}</h1>", escape_text(&config.title));
    let _ = writeln!(
        html,
        "            <p class=\"description\">{}</p>",
        escape_text(&config.description)
    );
    html.push_str("        </div>\n\n");

    html.push_str("        <div class=\"links\">\n");
    for link in links.iter().filter(|l| l.enabled) {
        html.push_str(&render_link(link));
    }
    html.push_str("        </div>\n\n");

    html.push_str("        <div class=\"footer\">\n");
    let _ = writeln!(html, "            {}", escape_text(&config.footer));
    html.push_str("        </div>\n    </div>\n</body>\n</html>\n");

    html
}

/// Markup for a single link element
fn render_link(link: &Link) -> String {
    let class = match link.style.modifier_class() {
        Some(modifier) => format!("link {}", modifier),
        None => "link".to_string(),
    };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "            <a href=\"{}\" class=\"{}\" id=\"{}\">",
        escape_attr(&link.url),
        escape_attr(&class),
        escape_attr(&link.id)
    );
    let _ = writeln!(
        out,
        "                <div class=\"link-icon\">{}</div>",
        escape_text(&link.icon)
    );
    let _ = writeln!(out, "                {}", escape_text(&link.title));
    if let Some(badge) = link.visible_badge() {
        let _ = writeln!(
            out,
            "                <span class=\"badge\">{}</span>",
            escape_text(badge)
        );
    }
    out.push_str("            </a>\n");
    out
}

fn snake_svg(theme: &Theme, width: &str, height: &str, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let logo = theme.logo_bg.as_str();
    let eye = theme.primary_color.as_str();
    format!(
        "{pad}<svg width=\"{width}\" height=\"{height}\" viewBox=\"0 0 100 100\">\n\
         {pad}    <path d=\"M50,15 C70,15 80,25 80,40 C80,55 70,65 50,65 C30,65 20,55 20,40 C20,25 30,15 50,15 Z\" fill=\"{logo}\" />\n\
         {pad}    <path d=\"M35,40 Q50,20 65,40\" stroke=\"black\" stroke-width=\"4\" fill=\"none\" />\n\
         {pad}    <circle cx=\"35\" cy=\"40\" r=\"5\" fill=\"{eye}\" />\n\
         {pad}    <circle cx=\"65\" cy=\"40\" r=\"5\" fill=\"{eye}\" />\n\
         {pad}</svg>\n"
    )
}

/// CSS rules for one colored variant and its hover state
fn variant_rules(name: &str, color: &HexColor, foreground: &str) -> String {
    let hover = color.darken(HOVER_SHADE);
    format!(
        "        .link.{name} {{\n\
         \x20           background-color: {color};\n\
         \x20           border-color: {color};\n\
         \x20           color: {foreground};\n\
         \x20       }}\n\n\
         \x20       .link.{name}:hover {{\n\
         \x20           background-color: {hover};\n\
         \x20           border-color: {hover};\n\
         \x20           color: {foreground};\n\
         \x20       }}\n\n"
    )
}

fn stylesheet(theme: &Theme) -> String {
    let bg = theme.bg_color.as_str();
    let text = theme.text_color.as_str();
    let primary = theme.primary_color.as_str();

    let mut css = format!(
        r#"        * {{
            margin: 0;
            padding: 0;
            box-sizing: border-box;
            font-family: 'Poppins', sans-serif;
        }}

        body {{
            background-color: {bg};
            display: flex;
            flex-direction: column;
            align-items: center;
            padding: 2rem 1rem;
            min-height: 100vh;
        }}

        .container {{
            max-width: 600px;
            width: 100%;
        }}

        .profile {{
            display: flex;
            flex-direction: column;
            align-items: center;
            margin-bottom: 2rem;
        }}

        .logo {{
            width: 120px;
            height: 120px;
            border-radius: 50%;
            background-color: {bg};
            display: flex;
            justify-content: center;
            align-items: center;
            margin-bottom: 1rem;
            position: relative;
            overflow: hidden;
            border: 3px solid {text};
        }}

        .logo-text {{
            position: absolute;
            bottom: 0;
            background-color: rgba(0, 0, 0, 0.7);
            color: white;
            width: 100%;
            text-align: center;
            padding: 4px;
            font-size: 12px;
        }}

        h1 {{
            font-size: 1.8rem;
            margin-bottom: 0.5rem;
            text-align: center;
            color: {text};
        }}

        .description {{
            text-align: center;
            margin-bottom: 2rem;
            max-width: 500px;
            color: {text};
        }}

        .links {{
            display: flex;
            flex-direction: column;
            gap: 1rem;
            width: 100%;
        }}

        .link {{
            display: flex;
            align-items: center;
            justify-content: center;
            position: relative;
            background-color: white;
            border: 2px solid {text};
            border-radius: 25px;
            padding: 12px;
            text-decoration: none;
            color: {text};
            font-size: 1.1rem;
            font-weight: 600;
            transition: transform 0.2s, background-color 0.2s, color 0.2s;
            width: 100%;
        }}

        .link:hover {{
            transform: scale(1.05);
            box-shadow: 0 5px 10px rgba(0, 0, 0, 0.2);
        }}

"#
    );

    css.push_str(&variant_rules("primary", &theme.primary_color, "white"));
    css.push_str(&variant_rules("secondary", &theme.secondary_color, "white"));
    css.push_str(&variant_rules("tertiary", &theme.tertiary_color, "white"));
    css.push_str(&variant_rules("highlight", &theme.highlight_color, text));

    let _ = write!(
        css,
        r#"        .link-icon {{
            width: 24px;
            height: 24px;
            margin-right: 10px;
            display: flex;
            justify-content: center;
            align-items: center;
            font-size: 1rem;
        }}

        .badge {{
            position: absolute;
            top: -8px;
            right: -8px;
            background-color: {primary};
            color: white;
            font-size: 0.7rem;
            padding: 4px 8px;
            border-radius: 10px;
            border: 1px solid white;
        }}

        .footer {{
            margin-top: 3rem;
            text-align: center;
            font-size: 0.8rem;
            opacity: 0.7;
            color: {text};
        }}

        .snake-decoration {{
            position: absolute;
            top: 10px;
            right: 10px;
            width: 150px;
            height: 150px;
            opacity: 0.1;
            z-index: -1;
        }}

        @media (max-width: 600px) {{
            h1 {{
                font-size: 1.5rem;
            }}

            .link {{
                font-size: 1rem;
                padding: 10px;
            }}

            .snake-decoration {{
                width: 100px;
                height: 100px;
            }}
        }}
"#
    );

    css
}

/// Escape text placed between tags
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text placed inside a double-quoted attribute
pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
