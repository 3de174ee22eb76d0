//! linkpage CLI
//!
//! Command-line interface for linkpage - manage a link-in-bio page and
//! render it to static HTML.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use linkpage_core::{Config, LinkStore};

mod commands;
mod menu;
mod output;
mod prompt;

use commands::link::AddOptions;
use menu::Menu;
use output::{Output, OutputFormat};
use prompt::Prompter;

#[derive(Parser)]
#[command(name = "linkpage")]
#[command(about = "linkpage - Manage a link-in-bio page and render it to HTML")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// State file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    state: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu (default)
    Menu,
    /// Manage links
    Link {
        #[command(subcommand)]
        command: LinkCommands,
    },
    /// Show or set theme colors
    Theme {
        #[command(subcommand)]
        command: Option<ThemeCommands>,
    },
    /// Show or set page settings (title, description, logo text, footer, output file)
    Page {
        #[command(subcommand)]
        command: Option<PageCommands>,
    },
    /// Show or set application configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
    /// Render the page to its output file
    Generate {
        /// Open the generated page in the browser
        #[arg(long)]
        open: bool,
    },
    /// Show status (state file, link counts, output file)
    Status,
}

#[derive(Subcommand)]
enum LinkCommands {
    /// Add a new link
    Add {
        /// Link title
        title: String,
        /// Link URL
        url: String,
        /// Emoji icon
        #[arg(short, long)]
        icon: Option<String>,
        /// Style: default, primary, secondary, tertiary, highlight or a custom class
        #[arg(short, long)]
        style: Option<String>,
        /// Badge text
        #[arg(short, long)]
        badge: Option<String>,
        /// Explicit ID (derived from the title when omitted)
        #[arg(long)]
        id: Option<String>,
        /// Add the link disabled
        #[arg(long)]
        disabled: bool,
    },
    /// List all links
    #[command(alias = "ls")]
    List,
    /// Show link details
    Show {
        /// Link ID
        id: String,
    },
    /// Set one field of a link
    Set {
        /// Link ID
        id: String,
        /// Field (title, url, icon, style, badge, enabled)
        field: String,
        /// New value
        value: String,
    },
    /// Enable a link
    Enable {
        /// Link ID
        id: String,
    },
    /// Disable a link
    Disable {
        /// Link ID
        id: String,
    },
    /// Delete a link
    #[command(alias = "rm")]
    Delete {
        /// Link ID
        id: String,
    },
    /// Reorder links; every link ID must be listed once
    Reorder {
        /// Link IDs in the new order
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

#[derive(Subcommand)]
enum ThemeCommands {
    /// Show theme colors
    Show,
    /// Set a theme color
    Set {
        /// Color role (bg_color, primary_color, secondary_color, tertiary_color,
        /// highlight_color, text_color, logo_bg)
        role: String,
        /// Hex color (#rgb or #rrggbb)
        value: String,
    },
}

#[derive(Subcommand)]
enum PageCommands {
    /// Show page settings
    Show,
    /// Set a page setting
    Set {
        /// Field (title, description, logo_text, footer, output_file)
        field: String,
        /// New value
        value: String,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (state_file, log_file)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() -> Result<()> {
    let Cli {
        json,
        quiet,
        state,
        config: config_path,
        command,
    } = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(json, quiet));

    // Config commands work on the config file itself
    if let Some(Commands::Config { command }) = &command {
        return handle_config_command(command.clone(), config_path.as_ref(), &output);
    }

    let config = Config::load_with_cli_override(config_path.as_ref())
        .context("Failed to load configuration")?;
    init_logging(&config);

    let state = state.unwrap_or_else(|| config.state_file.clone());
    let mut store = LinkStore::load(&state);

    let command = command.unwrap_or(Commands::Menu);
    if !matches!(command, Commands::Menu) {
        commands::report_origin(&store, &state, &output);
    }

    match command {
        Commands::Menu => run_menu(store, state),
        Commands::Link { command } => handle_link_command(command, &mut store, &state, &output),
        Commands::Theme { command } => match command {
            Some(ThemeCommands::Show) | None => commands::theme::show(&store, &output),
            Some(ThemeCommands::Set { role, value }) => {
                commands::theme::set(&mut store, &state, &role, &value, &output)
            }
        },
        Commands::Page { command } => match command {
            Some(PageCommands::Show) | None => commands::page::show(&store, &output),
            Some(PageCommands::Set { field, value }) => {
                commands::page::set(&mut store, &state, &field, &value, &output)
            }
        },
        Commands::Generate { open } => {
            commands::generate::run(&store, Path::new("."), open, &output)
        }
        Commands::Status => commands::status::show(&store, &state, &output),
        Commands::Config { .. } => unreachable!(), // Handled above
    }
}

fn handle_link_command(
    command: LinkCommands,
    store: &mut LinkStore,
    state: &Path,
    output: &Output,
) -> Result<()> {
    match command {
        LinkCommands::Add {
            title,
            url,
            icon,
            style,
            badge,
            id,
            disabled,
        } => {
            let options = AddOptions {
                icon,
                style,
                badge,
                id,
                disabled,
            };
            commands::link::add(store, state, title, url, options, output)
        }
        LinkCommands::List => commands::link::list(store, output),
        LinkCommands::Show { id } => commands::link::show(store, &id, output),
        LinkCommands::Set { id, field, value } => {
            commands::link::set(store, state, &id, &field, &value, output)
        }
        LinkCommands::Enable { id } => commands::link::set_enabled(store, state, &id, true, output),
        LinkCommands::Disable { id } => {
            commands::link::set_enabled(store, state, &id, false, output)
        }
        LinkCommands::Delete { id } => commands::link::delete(store, state, &id, output),
        LinkCommands::Reorder { ids } => commands::link::reorder(store, state, &ids, output),
    }
}

fn handle_config_command(
    command: Option<ConfigCommands>,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(config_path, output),
        Some(ConfigCommands::Set { key, value }) => {
            commands::config::set(key, value, config_path, output)
        }
    }
}

/// Run the interactive menu on stdin/stdout
fn run_menu(store: LinkStore, state: PathBuf) -> Result<()> {
    let stdin = io::stdin();
    let prompt = Prompter::new(stdin.lock(), io::stdout());
    let mut menu = Menu::new(store, state, PathBuf::from("."), prompt);

    menu.greet()?;
    menu.run()
}

/// Initialize logging when LINKPAGE_LOG is set
///
/// Logs go to the configured log file, or to stderr when none is set.
fn init_logging(config: &Config) {
    // Only log if LINKPAGE_LOG is set
    let Ok(log_level) = std::env::var("LINKPAGE_LOG") else {
        return;
    };

    let env_filter = EnvFilter::new(format!(
        "linkpage_core={},linkpage={}",
        log_level, log_level
    ));

    match &config.log_file {
        Some(log_path) => {
            let log_file = match File::create(log_path) {
                Ok(f) => f,
                Err(e) => {
                    eprintln!("Warning: Could not create log file {:?}: {}", log_path, e);
                    return;
                }
            };

            // Ignore error if already initialized
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(log_file)
                .try_init();

            info!("Logging initialized to {:?}", log_path);
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(io::stderr)
                .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["linkpage"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_link_add_options() {
        let cli = Cli::try_parse_from([
            "linkpage",
            "link",
            "add",
            "Blog",
            "https://blog.example",
            "--style",
            "primary",
            "--disabled",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Link {
                command:
                    LinkCommands::Add {
                        title,
                        style,
                        disabled,
                        badge,
                        ..
                    },
            }) => {
                assert_eq!(title, "Blog");
                assert_eq!(style.as_deref(), Some("primary"));
                assert!(disabled);
                assert!(badge.is_none());
            }
            _ => panic!("expected link add"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["linkpage", "link", "ls", "--json", "--state", "/tmp/s.json"])
                .unwrap();
        assert!(cli.json);
        assert_eq!(cli.state, Some(PathBuf::from("/tmp/s.json")));
    }

    #[test]
    fn test_reorder_requires_ids() {
        assert!(Cli::try_parse_from(["linkpage", "link", "reorder"]).is_err());
    }
}
