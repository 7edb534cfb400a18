//! Implementation of `hub show`.

use std::process::ExitCode;

use hub_document::{Section, find_by_slug};
use hub_highlight::Highlighter;
use hub_index::{NAV_TITLE_MAX, TopicCatalog, truncate_title};

use crate::cli::{
    args::ShowCommand,
    context::{CommandContext, load_preferences, resolve_or_failure},
    output::{dim, header, rule},
};

/// Prints a topic, or one of its sections, followed by previous/next navigation.
pub fn run(ctx: &mut CommandContext, cmd: &ShowCommand) -> ExitCode {
    let catalog = match ctx.catalog() {
        Ok(c) => c,
        Err(code) => return code,
    };
    let reference = match resolve_or_failure(&catalog, &cmd.topic) {
        Ok(r) => r,
        Err(code) => return code,
    };
    let document = match ctx.load_document(&reference) {
        Ok(d) => d,
        Err(code) => return code,
    };

    let markdown = match &reference.section {
        None => document.markdown.clone(),
        Some(part) => {
            let sections = document.sections();
            match find_section(&sections, part) {
                Some(section) => section.content.clone(),
                None => {
                    eprintln!(
                        "error: no section '{part}' in topic '{}'",
                        reference.topic.id
                    );
                    return ExitCode::FAILURE;
                }
            }
        }
    };

    if cmd.raw {
        print!("{markdown}");
        if !markdown.ends_with('\n') {
            println!();
        }
        return ExitCode::SUCCESS;
    }

    let prefs = load_preferences();
    println!("{}", header(&reference.topic.title));
    println!("{}", rule(40));
    print!("{}", Highlighter::for_theme(prefs.theme).highlight_markdown(&markdown));
    println!();
    println!("{}", rule(40));
    println!("{}", navigation_line(&catalog, &reference.topic.id));

    ExitCode::SUCCESS
}

/// Finds a section by heading slug, or by its number within the topic.
fn find_section<'a>(sections: &'a [Section], part: &str) -> Option<&'a Section> {
    find_by_slug(sections, part).or_else(|| {
        let index: usize = part.parse().ok()?;
        sections.iter().find(|s| s.section_index == index)
    })
}

/// Formats the previous/next topic line.
fn navigation_line(catalog: &TopicCatalog, topic_id: &str) -> String {
    let (prev, next) = catalog.neighbors(topic_id);
    let prev = prev.map_or_else(String::new, |t| {
        format!("<- {} ({})", truncate_title(&t.title, NAV_TITLE_MAX), t.id)
    });
    let next = next.map_or_else(String::new, |t| {
        format!("{} ({}) ->", truncate_title(&t.title, NAV_TITLE_MAX), t.id)
    });
    dim(format!("{prev}    {next}").trim())
}

#[cfg(test)]
mod tests {
    use hub_document::segment;

    use super::*;

    #[test]
    fn test_find_section_by_slug_or_number() {
        let sections = segment("t", "T", "# Overview\na\n# Token Handling\nb");
        assert_eq!(
            find_section(&sections, "token-handling").map(|s| s.section_index),
            Some(2)
        );
        assert_eq!(
            find_section(&sections, "1").map(|s| s.section_title.as_str()),
            Some("Overview")
        );
        assert!(find_section(&sections, "7").is_none());
        assert!(find_section(&sections, "missing").is_none());
    }
}
