//! `files` command: list the project tree at a given ref.

use crate::cli::FilesArgs;
use crate::client::{AppContext, CliError, CliResult};
use crate::output::render_tree;

pub(crate) async fn handle_files(ctx: &AppContext, args: FilesArgs) -> CliResult<()> {
    let (owner, repo) = ctx.project()?;
    let sha = args.sha.trim();
    if sha.is_empty() {
        return Err(CliError::validation(
            "--sha must be a branch name, tag, or commit SHA",
        ));
    }

    let tree = ctx
        .client
        .tree(owner, repo, sha, args.recursive)
        .await
        .map_err(CliError::from_client)?;
    render_tree(repo, &tree, args.recursive, ctx.output)
}
