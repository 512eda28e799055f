//! Main menu for pincmd
//!
//! Uses inquire for clean, reliable terminal interaction.

use anyhow::{anyhow, Result};
use inquire::{Select, Text};
use std::io::{self, IsTerminal};

use super::display::pin_choice;
use super::ui::{clear_screen, minimal_render_config, prompt_coordinate, select, FormResult};
use super::{run_add, run_delete, run_list, run_show, run_stats, Store};

/// Menu options with type-safe variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Add,
    List,
    Show,
    Delete,
    Stats,
    Quit,
}

impl MenuOption {
    const ALL: &'static [MenuOption] = &[
        MenuOption::Add,
        MenuOption::List,
        MenuOption::Show,
        MenuOption::Delete,
        MenuOption::Stats,
        MenuOption::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuOption::Add => "Add",
            MenuOption::List => "List",
            MenuOption::Show => "Show",
            MenuOption::Delete => "Delete",
            MenuOption::Stats => "Stats",
            MenuOption::Quit => "Quit",
        }
    }

    fn from_label(s: &str) -> Option<MenuOption> {
        MenuOption::ALL.iter().find(|opt| opt.label() == s).copied()
    }
}

/// Run the interactive main menu
pub fn run_menu(store: &mut Store) -> Result<()> {
    // TTY check: interactive menu requires a terminal
    if !io::stdin().is_terminal() {
        return Err(anyhow!(
            "Interactive menu requires a terminal. Use subcommands for non-interactive use:\n  \
            pincmd add <lat> <lng> --label <text>\n  \
            pincmd list\n  \
            pincmd stats\n  \
            Run 'pincmd --help' for all options."
        ));
    }

    let menu_labels: Vec<&str> = MenuOption::ALL.iter().map(|opt| opt.label()).collect();

    loop {
        let _ = clear_screen();

        let selection = Select::new("pincmd", menu_labels.clone())
            .with_render_config(minimal_render_config())
            .with_page_size(menu_labels.len())
            .with_vim_mode(true)
            .prompt_skippable();

        // Ctrl+C or terminal trouble: exit quietly
        let selection = match selection {
            Ok(sel) => sel,
            Err(_) => return Ok(()),
        };

        let Some(choice_label) = selection else {
            return Ok(());
        };

        let Some(choice) = MenuOption::from_label(choice_label) else {
            continue;
        };

        if choice == MenuOption::Quit {
            return Ok(());
        }

        let _ = clear_screen();

        if let Err(e) = execute_command(store, choice) {
            eprintln!("\nError: {}", e);
        }
        wait_for_continue();
    }
}

fn execute_command(store: &mut Store, choice: MenuOption) -> Result<()> {
    match choice {
        MenuOption::Add => {
            let FormResult::Value(lat) = prompt_coordinate("lat")? else {
                return Ok(());
            };
            let FormResult::Value(lng) = prompt_coordinate("lng")? else {
                return Ok(());
            };
            run_add(store, lat, lng, None)
        }
        MenuOption::List => run_list(store, false),
        MenuOption::Show => match pick_pin(store, "show")? {
            Some(id) => run_show(store, &id),
            None => Ok(()),
        },
        MenuOption::Delete => match pick_pin(store, "delete")? {
            Some(id) => run_delete(store, &id, false),
            None => Ok(()),
        },
        MenuOption::Stats => run_stats(store),
        MenuOption::Quit => Ok(()),
    }
}

/// Choose a pin from the recency-ordered list, returning its id
fn pick_pin(store: &Store, prompt: &str) -> Result<Option<String>> {
    let pins: Vec<_> = store.list_sorted_by_recency().collect();
    if pins.is_empty() {
        println!("No pins yet");
        return Ok(None);
    }

    let options: Vec<String> = pins.iter().map(|p| pin_choice(p)).collect();
    let index = select(prompt, &options)?;
    Ok(index.and_then(|i| pins.get(i)).map(|p| p.id.clone()))
}

/// Wait for user to press enter to continue
fn wait_for_continue() {
    println!();
    let _ = Text::new("[enter]")
        .with_render_config(minimal_render_config())
        .prompt_skippable();
}
