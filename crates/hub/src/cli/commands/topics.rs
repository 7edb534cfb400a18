//! Implementation of `hub topics`.

use std::process::ExitCode;

use hub_index::{TopicCatalog, group_topics};
use serde::Serialize;

use crate::cli::{
    args::TopicsCommand,
    context::CommandContext,
    output::{dim, header, print_json, warning},
};

/// JSON shape of one listed topic.
#[derive(Serialize)]
struct JsonTopic<'a> {
    /// Topic id.
    id: &'a str,
    /// Display title.
    title: &'a str,
    /// Sidebar group.
    group: Option<&'a str>,
    /// Whether the topic's content file exists.
    available: bool,
}

/// Lists topics in sidebar order, grouped by label.
pub fn run(ctx: &mut CommandContext, cmd: &TopicsCommand) -> ExitCode {
    let catalog = match ctx.catalog() {
        Ok(c) => c,
        Err(code) => return code,
    };
    let topics = catalog.filter(cmd.filter.as_deref().unwrap_or(""));

    if cmd.json {
        let listed: Vec<_> = topics
            .iter()
            .map(|t| JsonTopic {
                id: &t.id,
                title: &t.title,
                group: t.group.as_deref(),
                available: catalog.exists(&t.id),
            })
            .collect();
        return print_json(&listed);
    }

    if topics.is_empty() {
        match &cmd.filter {
            Some(term) => println!("{}", dim(&format!("No topics match '{term}'."))),
            None => println!("{}", dim("No topics configured.")),
        }
        return ExitCode::SUCCESS;
    }

    for group in group_topics(topics) {
        println!("{}", header(group.label.unwrap_or("Topics")));
        for topic in group.topics {
            println!("   {}", format_topic_line(&catalog, &topic.id, &topic.title));
        }
        println!();
    }

    ExitCode::SUCCESS
}

/// Formats a topic with its id and an availability marker.
fn format_topic_line(catalog: &TopicCatalog, id: &str, title: &str) -> String {
    let mut line = format!("{title} {}", dim(&format!("({id})")));
    if !catalog.exists(id) {
        line.push(' ');
        line.push_str(&warning("[coming soon]"));
    }
    line
}
