//! Interactive menu
//!
//! A numbered menu over a `LinkStore`. Every prompt goes through a
//! [`Prompter`], so the whole session can be scripted in tests.
//!
//! Invalid input aborts the current action and returns to the menu. When
//! input ends the menu stops and offers a final save; if input has already
//! ended at that point the store is saved.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, warn};

use linkpage_core::models::DEFAULT_ICON;
use linkpage_core::{
    ConfigField, ConfigUpdate, LinkStore, LinkStyle, LinkUpdate, NewLink, StoreError, StoreOrigin,
    ThemeColor,
};

use crate::commands::{generate, save_store};
use crate::output::link_line;
use crate::prompt::{is_end_of_input, Prompter};

const APP_NAME: &str = "Pythonistas GDL Linktr.ee Manager";

/// Menu labels for `LinkStyle::BUILT_IN`, in the same order
const STYLE_LABELS: [&str; 5] = [
    "Default (white)",
    "Primary (red)",
    "Secondary (blue)",
    "Tertiary (green)",
    "Highlight (yellow)",
];

/// Interactive menu session
pub struct Menu<R, W> {
    store: LinkStore,
    state: PathBuf,
    /// Directory the generated page is written into
    base_dir: PathBuf,
    prompt: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(store: LinkStore, state: PathBuf, base_dir: PathBuf, prompt: Prompter<R, W>) -> Self {
        Self {
            store,
            state,
            base_dir,
            prompt,
        }
    }

    pub fn store(&self) -> &LinkStore {
        &self.store
    }

    /// Print the welcome line and how the store was loaded
    pub fn greet(&mut self) -> Result<()> {
        self.prompt.say(format!("Welcome to {}!", APP_NAME))?;
        match self.store.origin().clone() {
            StoreOrigin::File => Ok(()),
            StoreOrigin::Defaults => self
                .prompt
                .say("No config file found. Using default configuration."),
            StoreOrigin::Recovered { reason } => {
                self.prompt
                    .say(format!("Error loading config file: {}", reason))?;
                self.prompt.say("Using default configuration instead.")
            }
        }
    }

    /// Run the menu until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;

            let choice = match self.prompt.ask("\nEnter your choice (0-10): ") {
                Ok(choice) => choice,
                Err(e) if is_end_of_input(&e) => {
                    self.prompt.say("\nEOF detected. Exiting...")?;
                    break;
                }
                Err(e) => return Err(e),
            };

            let result = match choice.trim() {
                "0" => break,
                "1" => self.view_links(),
                "2" => self.add_link(),
                "3" => self.update_link(),
                "4" => self.reorder_links(),
                "5" => self.toggle_link(),
                "6" => self.delete_link(),
                "7" => self.update_theme(),
                "8" => self.update_config(),
                "9" => self.generate(),
                "10" => self.save(),
                _ => self.prompt.say("Invalid choice. Please try again."),
            };

            if let Err(e) = result {
                if is_end_of_input(&e) {
                    self.prompt.say("\nEOF detected. Returning to menu...")?;
                } else {
                    warn!("Menu action failed: {:#}", e);
                    self.prompt.say(format!("Error: {}", e))?;
                }
            }
        }

        self.final_save()?;
        self.prompt
            .say(format!("Thank you for using {}!", APP_NAME))
    }

    fn print_menu(&mut self) -> Result<()> {
        self.prompt.say(format!("\n===== {} =====", APP_NAME))?;
        for line in [
            "1. View all links",
            "2. Add new link",
            "3. Update existing link",
            "4. Reorder links",
            "5. Enable/disable link",
            "6. Delete link",
            "7. Update theme colors",
            "8. Update basic configuration",
            "9. Generate HTML",
            "10. Save configuration",
            "0. Exit",
        ] {
            self.prompt.say(line)?;
        }
        Ok(())
    }

    fn final_save(&mut self) -> Result<()> {
        match self
            .prompt
            .ask_yes_no("\nSave configuration before exiting? (y/n): ")
        {
            Ok(true) => self.save_quietly(),
            Ok(false) => Ok(()),
            Err(e) if is_end_of_input(&e) => {
                self.prompt
                    .say("\nEOF detected. Saving configuration and exiting...")?;
                self.save_quietly()
            }
            Err(e) => Err(e),
        }
    }

    // ==================== Actions ====================

    fn view_links(&mut self) -> Result<()> {
        self.prompt.say("\n--- Current Links ---")?;
        let lines: Vec<String> = self
            .store
            .links()
            .iter()
            .enumerate()
            .map(|(i, link)| link_line(i + 1, link))
            .collect();
        for line in lines {
            self.prompt.say(line)?;
        }
        Ok(())
    }

    fn add_link(&mut self) -> Result<()> {
        self.prompt.say("\n--- Add New Link ---")?;

        let title = self.prompt.ask("Enter link title: ")?;
        if title.is_empty() {
            return self.prompt.say("Title cannot be empty. Returning to menu.");
        }
        let url = self.prompt.ask("Enter URL: ")?;
        if url.is_empty() {
            return self.prompt.say("URL cannot be empty. Returning to menu.");
        }
        let icon = self
            .prompt
            .ask(&format!("Enter emoji icon (default {}): ", DEFAULT_ICON))?;

        self.print_style_choices()?;
        let choice = self.prompt.ask("Enter style choice (1-5): ")?;
        let style = style_choice(&choice).unwrap_or_default();

        let badge = self
            .prompt
            .ask("Enter badge text (leave empty for none): ")?;

        let mut new_link = NewLink::new(title, url)
            .style(style)
            .badge(Some(badge).filter(|b| !b.is_empty()));
        if !icon.is_empty() {
            new_link = new_link.icon(icon);
        }

        let title = self.store.add(new_link).title.clone();
        self.prompt.say(format!("Added new link: {}", title))
    }

    fn update_link(&mut self) -> Result<()> {
        self.prompt.say("\n--- Update Link ---")?;
        self.print_numbered_links()?;

        let Some(idx) = self.select_link("\nEnter the number of the link to update: ")? else {
            return Ok(());
        };
        let current = self.store.links()[idx].clone();

        self.prompt
            .say("\nEnter new values (leave empty to keep current):")?;
        let title = self.prompt.ask_with_default("Title", &current.title)?;
        let url = self.prompt.ask_with_default("URL", &current.url)?;
        let icon = self.prompt.ask_with_default("Icon", &current.icon)?;

        self.print_style_choices()?;
        self.prompt.say(format!("Current: {}", current.style))?;
        let choice = self
            .prompt
            .ask("Enter style choice (1-5, leave empty to keep current): ")?;
        let style = style_choice(&choice).unwrap_or_else(|| current.style.clone());

        let shown_badge = current.badge.as_deref().unwrap_or("None");
        let answer = self.prompt.ask(&format!("Badge text [{}]: ", shown_badge))?;
        let badge = if answer.is_empty() {
            current.badge.clone()
        } else if answer.eq_ignore_ascii_case("none") {
            None
        } else {
            Some(answer)
        };

        self.store.update_at(
            idx,
            &[
                LinkUpdate::Title(title.clone()),
                LinkUpdate::Url(url),
                LinkUpdate::Icon(icon),
                LinkUpdate::Style(style),
                LinkUpdate::Badge(badge),
            ],
        );
        self.prompt.say(format!("Updated link: {}", title))
    }

    fn reorder_links(&mut self) -> Result<()> {
        self.prompt.say("\n--- Reorder Links ---")?;
        self.print_numbered_links()?;

        self.prompt
            .say("\nEnter the new order as a comma-separated list of numbers.")?;
        self.prompt.say(
            "Example: 3,1,2 would move the third item to first, first to second, etc.",
        )?;

        let answer = self.prompt.ask("New order: ")?;
        let Some(numbers) = parse_order(&answer) else {
            return self.prompt.say("Invalid input. Returning to menu.");
        };

        let count = self.store.len();
        if numbers.iter().any(|&n| n == 0 || n > count) {
            return self.prompt.say(format!(
                "Invalid input: numbers must be between 1 and {}",
                count
            ));
        }

        let ids: Vec<String> = numbers
            .iter()
            .map(|&n| self.store.links()[n - 1].id.clone())
            .collect();
        match self.store.reorder(&ids) {
            Ok(()) => self.prompt.say("Links reordered successfully"),
            Err(e) => self.prompt.say(format!("Error: {}", e)),
        }
    }

    fn toggle_link(&mut self) -> Result<()> {
        self.prompt.say("\n--- Enable/Disable Link ---")?;
        let lines: Vec<String> = self
            .store
            .links()
            .iter()
            .enumerate()
            .map(|(i, link)| {
                let status = if link.enabled { "Enabled" } else { "Disabled" };
                format!("{}. {} - {} (ID: {})", i + 1, link.title, status, link.id)
            })
            .collect();
        for line in lines {
            self.prompt.say(line)?;
        }

        let Some(idx) = self.select_link("\nEnter the number of the link to toggle: ")? else {
            return Ok(());
        };
        let link = &self.store.links()[idx];
        let (title, enabled) = (link.title.clone(), link.enabled);

        self.store.update_at(idx, &[LinkUpdate::Enabled(!enabled)]);
        let verb = if enabled { "Disabled" } else { "Enabled" };
        self.prompt.say(format!("{} link: {}", verb, title))
    }

    fn delete_link(&mut self) -> Result<()> {
        self.prompt.say("\n--- Delete Link ---")?;
        self.print_numbered_links()?;

        let Some(idx) = self.select_link("\nEnter the number of the link to delete: ")? else {
            return Ok(());
        };
        let title = self.store.links()[idx].title.clone();

        let question = format!("Are you sure you want to delete '{}'? (y/n): ", title);
        if self.prompt.ask_yes_no(&question)? {
            if let Some(link) = self.store.delete_at(idx) {
                self.prompt.say(format!("Deleted link with ID: {}", link.id))?;
            }
        }
        Ok(())
    }

    fn update_theme(&mut self) -> Result<()> {
        self.prompt.say("\n--- Update Theme Colors ---")?;
        let lines: Vec<String> = ThemeColor::ALL
            .iter()
            .enumerate()
            .map(|(i, role)| {
                format!("{}. {} [{}]", i + 1, role.label(), self.store.theme().get(*role))
            })
            .collect();
        for line in lines {
            self.prompt.say(line)?;
        }

        let Some(n) = self
            .prompt
            .ask_number("\nEnter the number of the color to update (1-7): ")?
        else {
            return self.prompt.say("Invalid input. Returning to menu.");
        };
        let Some(role) = n.checked_sub(1).and_then(|i| ThemeColor::ALL.get(i).copied()) else {
            return self.prompt.say("Invalid selection.");
        };

        let value = self.prompt.ask(&format!(
            "Enter new {} (hex format, e.g. #FFE566): ",
            role.key()
        ))?;
        match self.store.update_theme(&[(role, value.trim())]) {
            Ok(()) => self.prompt.say("Theme updated"),
            Err(StoreError::InvalidColor { .. }) => self
                .prompt
                .say("Invalid color format. Please use hex format (e.g. #FFE566)"),
            Err(e) => Err(e.into()),
        }
    }

    fn update_config(&mut self) -> Result<()> {
        self.prompt.say("\n--- Update Basic Configuration ---")?;
        let lines: Vec<String> = ConfigField::ALL
            .iter()
            .enumerate()
            .map(|(i, field)| match field {
                // Long values are shown only when selected
                ConfigField::Description | ConfigField::Footer => {
                    format!("{}. {}", i + 1, field.label())
                }
                _ => format!(
                    "{}. {} [{}]",
                    i + 1,
                    field.label(),
                    self.store.config().get(*field)
                ),
            })
            .collect();
        for line in lines {
            self.prompt.say(line)?;
        }

        let Some(n) = self
            .prompt
            .ask_number("\nEnter the number of the setting to update (1-5): ")?
        else {
            return self.prompt.say("Invalid input. Returning to menu.");
        };
        let Some(field) = n.checked_sub(1).and_then(|i| ConfigField::ALL.get(i).copied()) else {
            return self.prompt.say("Invalid selection.");
        };

        if matches!(field, ConfigField::Description | ConfigField::Footer) {
            let current = self.store.config().get(field).to_string();
            self.prompt
                .say(format!("Current {}: {}", field.key(), current))?;
        }
        let value = self.prompt.ask(&format!("Enter new {}: ", field.key()))?;

        if !value.is_empty() {
            self.store
                .update_config(&[ConfigUpdate::new(field, value)]);
            self.prompt.say("Configuration updated")?;
        }
        Ok(())
    }

    fn generate(&mut self) -> Result<()> {
        self.prompt.say("\n--- Generating HTML ---")?;
        generate::write_page(&self.store, &self.base_dir)?;
        let output_file = self.store.config().output_file.clone();
        self.prompt
            .say(format!("HTML file generated as {}", output_file))
    }

    fn save(&mut self) -> Result<()> {
        self.prompt.say("\n--- Saving Configuration ---")?;
        self.save_quietly()
    }

    fn save_quietly(&mut self) -> Result<()> {
        save_store(&self.store, &self.state)?;
        debug!("Menu saved store to {:?}", self.state);
        self.prompt
            .say(format!("Configuration saved to {}", self.state.display()))
    }

    // ==================== Helpers ====================

    fn print_numbered_links(&mut self) -> Result<()> {
        let lines: Vec<String> = self
            .store
            .list_ids()
            .iter()
            .enumerate()
            .map(|(i, (id, title))| format!("{}. {} (ID: {})", i + 1, title, id))
            .collect();
        for line in lines {
            self.prompt.say(line)?;
        }
        Ok(())
    }

    fn print_style_choices(&mut self) -> Result<()> {
        self.prompt.say("\nSelect style:")?;
        for (i, label) in STYLE_LABELS.iter().enumerate() {
            self.prompt.say(format!("{}. {}", i + 1, label))?;
        }
        Ok(())
    }

    /// Ask for a 1-based link number; reports invalid answers itself
    fn select_link(&mut self, question: &str) -> Result<Option<usize>> {
        match self.prompt.ask_number(question)? {
            Some(n) if (1..=self.store.len()).contains(&n) => Ok(Some(n - 1)),
            Some(_) => {
                self.prompt.say("Invalid selection.")?;
                Ok(None)
            }
            None => {
                self.prompt.say("Invalid input. Returning to menu.")?;
                Ok(None)
            }
        }
    }
}

/// Map a menu answer ("1" to "5") to a built-in style
fn style_choice(answer: &str) -> Option<LinkStyle> {
    let n: usize = answer.trim().parse().ok()?;
    LinkStyle::BUILT_IN.get(n.checked_sub(1)?).cloned()
}

/// Parse "3, 1,2" into `[3, 1, 2]`; `None` if any entry is not a number
fn parse_order(answer: &str) -> Option<Vec<usize>> {
    answer
        .split(',')
        .map(|part| part.trim().parse().ok())
        .collect()
}
