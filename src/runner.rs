//! One invocation: read the bundle, pick a layout, write the files
//!
//! The core (parse → label → plan) runs to completion before anything is
//! written, so a bad bundle never leaves partial output behind.

use crate::bundle::{self, Layout};
use crate::cli::{interactive, Cli};
use crate::config::{self, Settings};
use crate::output;
use crate::utils::progress;
use anyhow::Context;
use console::style;

/// Run cert-sculpt with parsed arguments
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let settings = config::load_config(cli.config.as_deref())?;
    tracing::debug!("Loaded settings: {:?}", settings);

    let raw = read_input(cli)?;

    let parsed = bundle::parse_bundle(&raw).context("Could not read the bundle")?;
    let label = bundle::resolve_label(&raw, parsed.leaf.common_name());

    let root = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| settings.output.root.clone());
    let dir = output::destination(&root, &label);

    progress::print_heading(&format!("Target Folder: {}", dir.display()));
    progress::print_info(&format!(
        "{} certificate(s) and a private key found",
        parsed.chain.len()
    ));

    let layout = choose_layout(cli, &settings)?;
    let passphrase = match layout {
        Layout::Archive => archive_password(cli)?,
        _ => None,
    };

    let plan = bundle::emit(&parsed, layout, passphrase.as_deref())
        .with_context(|| format!("Could not build the {} layout", layout))?;

    let written = output::write_plan(&plan, &dir)?;
    for path in &written {
        progress::print_pass(&path.display().to_string());
    }

    let shown = dir.canonicalize().unwrap_or(dir);
    println!(
        "\n{} Done! Files created in: {}",
        style("[+]").green().bold(),
        shown.display()
    );
    tracing::info!("Wrote {} file(s) with layout {}", written.len(), layout);

    Ok(())
}

fn read_input(cli: &Cli) -> anyhow::Result<String> {
    match cli.input_path() {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read bundle from {}", path.display())),
        None => interactive::read_stdin_bundle().context("Failed to read bundle from stdin"),
    }
}

fn choose_layout(cli: &Cli, settings: &Settings) -> anyhow::Result<Layout> {
    if let Some(layout) = cli.layout.or(settings.default_layout) {
        return Ok(layout);
    }

    if cli.is_interactive() {
        interactive::prompt_layout()
    } else {
        anyhow::bail!("No layout selected (use --layout or set default_layout in the config)");
    }
}

fn archive_password(cli: &Cli) -> anyhow::Result<Option<String>> {
    if let Some(pwd) = &cli.password {
        return Ok(Some(pwd.clone()));
    }

    if cli.is_interactive() {
        let pwd = interactive::prompt_archive_password()?;
        Ok(Some(pwd).filter(|p| !p.is_empty()))
    } else {
        progress::print_warning("No --password given, writing the archive with an empty password");
        Ok(None)
    }
}
