//! Implementation of `hub render`.

use std::{fs, process::ExitCode};

use hub_document::page_html;

use crate::cli::{
    args::RenderCommand,
    context::{CommandContext, load_preferences, resolve_or_failure},
};

/// Renders a topic to a standalone HTML page styled by the saved preferences.
pub fn run(ctx: &mut CommandContext, cmd: &RenderCommand) -> ExitCode {
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

    let rendered = document.render();
    if let Some(section) = &reference.section
        && section.parse::<usize>().is_err()
        && !rendered.headings.iter().any(|h| &h.slug == section)
    {
        eprintln!(
            "warning: no heading '{section}' in topic '{}'",
            reference.topic.id
        );
    }

    let page = page_html(&document.title, &rendered.html, &load_preferences());

    match &cmd.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &page) {
                eprintln!("error: failed to write {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
            println!("Wrote {}", path.display());
        }
        None => print!("{page}"),
    }
    ExitCode::SUCCESS
}
