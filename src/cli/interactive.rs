//! Interactive prompts using dialoguer

use crate::bundle::Layout;
use console::style;
use dialoguer::{theme::ColorfulTheme, Password, Select};
use std::io::{IsTerminal, Read};

/// Ask which layout to produce
pub fn prompt_layout() -> anyhow::Result<Layout> {
    let items: Vec<String> = Layout::ALL
        .iter()
        .map(|layout| layout.description().to_string())
        .collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select an output layout")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(Layout::ALL[selection])
}

/// Ask for the archive password; an empty answer means no password
pub fn prompt_archive_password() -> anyhow::Result<String> {
    let pwd = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("P12 Password (empty for none)")
        .allow_empty_password(true)
        .interact()?;
    Ok(pwd)
}

/// Read the whole bundle from standard input
pub fn read_stdin_bundle() -> std::io::Result<String> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprintln!(
            "{}",
            style("No file given. Paste certificate data (Ctrl+D to finish):").cyan()
        );
    }

    let mut data = String::new();
    stdin.read_to_string(&mut data)?;
    Ok(data)
}
