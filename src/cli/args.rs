//! CLI argument definitions using clap

use crate::bundle::Layout;
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cert-sculpt")]
#[command(version)]
#[command(
    about = "Split a PEM key + certificate bundle into the file layouts servers expect",
    long_about = None
)]
pub struct Cli {
    /// Bundle file to read ('-' or omitted reads standard input)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output layout (prompted for when omitted)
    #[arg(short, long, value_enum)]
    pub layout: Option<Layout>,

    /// Password for the archive layout (empty for none)
    #[arg(short, long)]
    pub password: Option<String>,

    /// Directory to create the per-label folder in
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Never prompt; fail if a required choice is missing
    #[arg(long)]
    pub non_interactive: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Input path, or `None` when the bundle comes from standard input
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }

    /// Whether prompts may be shown
    pub fn is_interactive(&self) -> bool {
        !self.non_interactive && std::io::stderr().is_terminal()
    }
}
