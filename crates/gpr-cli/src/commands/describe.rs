//! `describe` command: show project metadata and description.

use crate::client::{AppContext, CliError, CliResult};
use crate::output::render_repository;

pub(crate) async fn handle_describe(ctx: &AppContext) -> CliResult<()> {
    let (owner, repo) = ctx.project()?;
    let repository = ctx
        .client
        .repository(owner, repo)
        .await
        .map_err(CliError::from_client)?;
    render_repository(&repository, ctx.output)
}
