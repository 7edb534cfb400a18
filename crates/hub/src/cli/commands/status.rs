//! Implementation of `hub status`.

use std::{collections::HashMap, process::ExitCode};

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use hub_config::{ConfigWarning, discover_config_file};
use hub_highlight::Highlighter;
use hub_index::{SearchIndex, TopicCatalog};

use crate::cli::{
    context::{CommandContext, load_preferences},
    output::{dim, subheader, warning},
};

/// Shows the config file, effective settings, topics with availability and section counts,
/// and warnings.
pub async fn run(ctx: &mut CommandContext) -> ExitCode {
    let Some(config_path) = discover_config_file(&ctx.cwd) else {
        println!("{}", dim("No configuration file found."));
        println!();
        println!("Run {} to create a configuration file.", subheader("hub init"));
        return ExitCode::SUCCESS;
    };

    println!("{}", subheader("Config file:"));
    println!("   {}", config_path.display());
    println!();

    let content_dir = &ctx.config.site.content_dir;
    println!("{}", subheader("Content directory:"));
    if content_dir.is_dir() {
        println!("   {}", content_dir.display());
    } else {
        println!("   {} {}", content_dir.display(), warning("[missing]"));
    }
    println!();

    println!("{}", subheader("Effective settings:"));
    match ctx.config.settings_to_toml() {
        Ok(toml) => {
            let highlighter = Highlighter::for_theme(load_preferences().theme);
            print!("{}", highlighter.highlight_toml(&toml));
        }
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    }
    println!();

    if !ctx.config.topics.is_empty() {
        let session = match ctx.search_session().await {
            Ok(s) => s,
            Err(code) => return code,
        };
        let index = session.index();
        println!("{}", subheader("Topics:"));
        println!("{}", topic_table(session.catalog(), &index));
        println!(
            "   {}",
            dim(&format!(
                "{} sections indexed from {} topics",
                index.len(),
                index.topic_count()
            ))
        );
        println!();
    }

    let warnings = ctx.config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in &warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();
    print_hints(&warnings);

    ExitCode::FAILURE
}

/// Builds the per-topic table.
fn topic_table(catalog: &TopicCatalog, index: &SearchIndex) -> Table {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for section in index.sections() {
        *counts.entry(section.topic_id.as_str()).or_default() += 1;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Id", "Title", "Group", "Available", "Sections"]);
    for topic in catalog.topics() {
        let available = if catalog.exists(&topic.id) { "yes" } else { "no" };
        table.add_row(vec![
            Cell::new(&topic.id),
            Cell::new(&topic.title),
            Cell::new(topic.group.as_deref().unwrap_or("")),
            Cell::new(available),
            Cell::new(counts.get(topic.id.as_str()).copied().unwrap_or(0)),
        ]);
    }
    table
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    for w in warnings {
        match w {
            ConfigWarning::NoTopicsDefined => {
                println!("{}", dim("Hint: add [[topic]] entries to .hub.toml"));
            }
            ConfigWarning::ContentDirMissing { .. } => {
                println!("{}", dim("Hint: set [site] content_dir to the folder holding your .md files"));
            }
            _ => {}
        }
    }
}
