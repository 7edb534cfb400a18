//! Implementation of `hub browse`.
//!
//! Every line typed is an input event for the debounced search session. Results are printed
//! whenever a search settles; an empty line shows the topic list again.

use std::{
    io::{self, Write},
    process::ExitCode,
};

use hub_index::{SearchOutcome, TopicCatalog};
use tokio::io::{AsyncBufReadExt, BufReader, stdin};
use tracing::debug;

use crate::cli::{
    context::CommandContext,
    output::{dim, header, print_results},
};

/// Runs the interactive search prompt until end of input.
pub async fn run(ctx: &mut CommandContext) -> ExitCode {
    let session = match ctx.search_session().await {
        Ok(s) => s,
        Err(code) => return code,
    };
    let catalog = session.catalog();
    let mut outcomes = session.subscribe();
    let mut lines = BufReader::new(stdin()).lines();
    // True while an input has been sent and its outcome not yet printed.
    let mut awaiting = false;

    print_topic_list(catalog);
    prompt();

    loop {
        tokio::select! {
            line = lines.next_line() => match line {
                Ok(Some(line)) => {
                    session.input(&line);
                    awaiting = true;
                }
                Ok(None) => break,
                Err(e) => {
                    eprintln!("error: failed to read input: {e}");
                    return ExitCode::FAILURE;
                }
            },
            changed = outcomes.changed() => {
                if changed.is_err() {
                    break;
                }
                awaiting = false;
                print_outcome(&outcomes.borrow_and_update(), catalog);
                prompt();
            }
        }
    }

    if awaiting && outcomes.changed().await.is_ok() {
        print_outcome(&outcomes.borrow_and_update(), catalog);
    }
    println!();
    ExitCode::SUCCESS
}

/// Prints a settled search outcome.
fn print_outcome(outcome: &SearchOutcome, catalog: &TopicCatalog) {
    println!();
    match outcome {
        SearchOutcome::Cleared => print_topic_list(catalog),
        SearchOutcome::Results { query, results } => print_results(query, results),
    }
}

/// Prints topic titles, grouped.
fn print_topic_list(catalog: &TopicCatalog) {
    for group in catalog.groups() {
        println!("{}", header(group.label.unwrap_or("Topics")));
        for topic in group.topics {
            println!("   {}", topic.title);
        }
    }
}

/// Prints the input prompt.
fn prompt() {
    print!("{} ", dim("search>"));
    if let Err(error) = io::stdout().flush() {
        debug!(%error, "failed to flush prompt");
    }
}
