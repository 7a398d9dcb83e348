//! `issues` command: list project issues of every state.

use crate::client::{AppContext, CliError, CliResult};
use crate::output::render_issues;

pub(crate) async fn handle_issues(ctx: &AppContext) -> CliResult<()> {
    let (owner, repo) = ctx.project()?;
    let issues = ctx
        .client
        .issues(owner, repo)
        .await
        .map_err(CliError::from_client)?;
    tracing::debug!(count = issues.len(), "received project issues");
    render_issues(&issues, ctx.output)
}
