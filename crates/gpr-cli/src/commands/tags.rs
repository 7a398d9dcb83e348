//! `tags` command: list project tags.

use crate::client::{AppContext, CliError, CliResult};
use crate::output::render_tags;

pub(crate) async fn handle_tags(ctx: &AppContext) -> CliResult<()> {
    let (owner, repo) = ctx.project()?;
    let tags = ctx
        .client
        .tags(owner, repo)
        .await
        .map_err(CliError::from_client)?;
    tracing::debug!(count = tags.len(), "received project tags");
    render_tags(&tags, ctx.output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::context_for;
    use httpmock::MockServer;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn tags_request_expected_path() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/repos/owner/project/tags");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([{
                    "name": "v1.2.3",
                    "commit": {"sha": "abc", "date": "2023-11-05T07:30:00+08:00"}
                }]));
        });

        let ctx = context_for(&server);
        handle_tags(&ctx).await.expect("tags should succeed");
        mock.assert();
    }
}
