//! `releases` command: list published project releases.

use crate::client::{AppContext, CliError, CliResult};
use crate::output::render_releases;

pub(crate) async fn handle_releases(ctx: &AppContext) -> CliResult<()> {
    let (owner, repo) = ctx.project()?;
    let releases = ctx
        .client
        .releases(owner, repo)
        .await
        .map_err(CliError::from_client)?;
    tracing::debug!(count = releases.len(), "received project releases");
    render_releases(&releases, ctx.output)
}
