//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use linkpage_core::{Link, PageConfig, Theme, ThemeColor};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Check if output is in JSON mode
    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }

    /// Print a single link
    pub fn print_link(&self, link: &Link) {
        match self.format {
            OutputFormat::Human => {
                println!("ID:      {}", link.id);
                println!("Title:   {}", link.title);
                println!("URL:     {}", link.url);
                println!("Icon:    {}", link.icon);
                println!("Style:   {}", link.style);
                if let Some(badge) = link.visible_badge() {
                    println!("Badge:   {}", badge);
                }
                println!("Enabled: {}", if link.enabled { "yes" } else { "no" });
            }
            OutputFormat::Json => {
                println!("{}", to_json(link));
            }
            OutputFormat::Quiet => {
                println!("{}", link.id);
            }
        }
    }

    /// Print a numbered list of links in page order
    pub fn print_links(&self, links: &[Link]) {
        match self.format {
            OutputFormat::Human => {
                if links.is_empty() {
                    println!("No links found.");
                    return;
                }
                for (i, link) in links.iter().enumerate() {
                    println!("{}", link_line(i + 1, link));
                }
                println!("\n{} link(s)", links.len());
            }
            OutputFormat::Json => {
                println!("{}", to_json(&links));
            }
            OutputFormat::Quiet => {
                for link in links {
                    println!("{}", link.id);
                }
            }
        }
    }

    /// Print theme colors
    pub fn print_theme(&self, theme: &Theme) {
        match self.format {
            OutputFormat::Human => {
                for role in ThemeColor::ALL {
                    println!("{:<16} {}", role.key(), theme.get(role));
                }
            }
            OutputFormat::Json => {
                println!("{}", to_json(theme));
            }
            OutputFormat::Quiet => {
                for role in ThemeColor::ALL {
                    println!("{}", theme.get(role));
                }
            }
        }
    }

    /// Print page configuration (without the theme)
    pub fn print_page(&self, config: &PageConfig) {
        match self.format {
            OutputFormat::Human => {
                println!("title:       {}", config.title);
                println!("description: {}", config.description);
                println!("logo_text:   {}", config.logo_text);
                println!("footer:      {}", config.footer);
                println!("output_file: {}", config.output_file);
            }
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "title": config.title,
                        "description": config.description,
                        "logo_text": config.logo_text,
                        "footer": config.footer,
                        "output_file": config.output_file
                    })
                );
            }
            OutputFormat::Quiet => {
                println!("{}", config.output_file);
            }
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Check if we should prompt for confirmation
    pub fn should_prompt(&self) -> bool {
        self.format == OutputFormat::Human
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print a warning to stderr (suppressed in quiet mode)
    pub fn warn(&self, msg: &str) {
        if self.format != OutputFormat::Quiet {
            eprintln!("⚠ {}", msg);
        }
    }
}

/// One numbered line with an enabled marker
pub fn link_line(number: usize, link: &Link) -> String {
    let status = if link.enabled { "✅" } else { "❌" };
    format!(
        "{}. [{}] {} (ID: {})",
        number,
        status,
        truncate(&link.title, 50),
        link.id
    )
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

/// Truncate a string to max characters, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
