//! `milestones` command: list project milestones.

use crate::client::{AppContext, CliError, CliResult};
use crate::output::render_milestones;

pub(crate) async fn handle_milestones(ctx: &AppContext) -> CliResult<()> {
    let (owner, repo) = ctx.project()?;
    let milestones = ctx
        .client
        .milestones(owner, repo)
        .await
        .map_err(CliError::from_client)?;
    tracing::debug!(count = milestones.len(), "received project milestones");
    render_milestones(&milestones, ctx.output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::context_for;
    use httpmock::MockServer;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn milestones_request_expected_path() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/repos/owner/project/milestones");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([{
                    "id": 3,
                    "state": "open",
                    "title": "v1.0",
                    "created_at": "2024-01-10T09:00:00+03:00",
                    "due_on": "2024-06-01T00:00:00+03:00",
                    "open_issues": 2,
                    "closed_issues": 7
                }]));
        });

        let ctx = context_for(&server);
        handle_milestones(&ctx)
            .await
            .expect("milestones should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn milestones_surface_server_failures() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/repos/owner/project/milestones");
            then.status(404)
                .header("content-type", "application/json")
                .json_body(json!({"message": "Not Found Project"}));
        });

        let ctx = context_for(&server);
        let err = handle_milestones(&ctx)
            .await
            .expect_err("missing project should fail");
        assert!(matches!(&err, CliError::Failure(_)));
        assert!(err.display_message().contains("Not Found Project"));
    }
}
