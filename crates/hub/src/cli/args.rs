//! Clap argument definitions for the `hub` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "hub")]
#[command(about = "Learning hub - browse, render and search markdown topics")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Silence all log output
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Supported `hub` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Create a commented .hub.toml in the current directory
    Init(InitCommand),

    /// List topics grouped as in the sidebar
    Topics(TopicsCommand),

    /// Search topic sections
    Search(SearchCommand),

    /// Print a topic's markdown
    Show(ShowCommand),

    /// Render a topic to a standalone HTML page
    Render(RenderCommand),

    /// Search interactively, one query per line
    Browse,

    /// Show or change display preferences
    Prefs(PrefsCommand),

    /// Show configuration, topic availability and index statistics
    Status,
}

/// Arguments for `hub init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `hub topics`.
#[derive(Args, Debug, Clone)]
pub struct TopicsCommand {
    /// Only list topics whose title contains this text
    #[arg(short = 'f', long)]
    pub filter: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `hub search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Query terms
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Maximum results to return [default: from config, 10]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `hub show`.
#[derive(Args, Debug, Clone)]
pub struct ShowCommand {
    /// Topic id, alias, or subtopic reference (topic#section)
    pub topic: String,

    /// Print markdown without highlighting
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for `hub render`.
#[derive(Args, Debug, Clone)]
pub struct RenderCommand {
    /// Topic id, alias, or subtopic reference
    pub topic: String,

    /// Write the page to a file instead of stdout
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `hub prefs`.
#[derive(Args, Debug, Clone)]
pub struct PrefsCommand {
    /// Switch between dark and light themes
    #[arg(long)]
    pub toggle_theme: bool,

    /// Increase the font size one step
    #[arg(long, conflicts_with = "font_smaller")]
    pub font_bigger: bool,

    /// Decrease the font size one step
    #[arg(long)]
    pub font_smaller: bool,
}

impl PrefsCommand {
    /// Returns true if any change was requested.
    pub fn changes_anything(&self) -> bool {
        self.toggle_theme || self.font_bigger || self.font_smaller
    }

    /// Font size delta requested on the command line.
    pub fn font_delta(&self) -> i8 {
        match (self.font_bigger, self.font_smaller) {
            (true, false) => 1,
            (false, true) => -1,
            _ => 0,
        }
    }
}
