//! Implementation of `hub search`.

use std::process::ExitCode;

use hub_index::{SearchParams, search};

use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::{print_results, print_results_json},
};

/// Builds the index and prints ranked sections for the query.
pub async fn run(ctx: &mut CommandContext, cmd: &SearchCommand) -> ExitCode {
    let session = match ctx.search_session().await {
        Ok(s) => s,
        Err(code) => return code,
    };

    let query = cmd.query.join(" ");
    let mut params = SearchParams::from(&ctx.config.search);
    if let Some(limit) = cmd.limit {
        params.limit = limit;
    }
    let results = search(&session.index(), &query, &params);

    if cmd.json {
        return print_results_json(&query, &results);
    }
    print_results(&query, &results);
    ExitCode::SUCCESS
}
