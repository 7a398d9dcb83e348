//! Command handlers, one module per remote resource.

pub(crate) mod describe;
pub(crate) mod files;
pub(crate) mod issues;
pub(crate) mod milestones;
pub(crate) mod releases;
pub(crate) mod tags;

#[cfg(test)]
pub(crate) mod testing {
    use httpmock::MockServer;

    use crate::cli::OutputFormat;
    use crate::client::AppContext;

    /// Context pointing at a mock server, with project coordinates set.
    pub(crate) fn context_for(server: &MockServer) -> AppContext {
        AppContext {
            client: gpr_client::GiteeClient::builder()
                .gateway(server.base_url().parse().expect("valid URL"))
                .build()
                .expect("client should build"),
            owner: Some("owner".to_string()),
            repo: Some("project".to_string()),
            output: OutputFormat::Table,
        }
    }
}
