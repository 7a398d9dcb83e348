//! Application context and CLI-level error types.

use std::time::Duration;

use anyhow::anyhow;
use gpr_client::GiteeClient;

use crate::cli::{Cli, OutputFormat};

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    /// Map a client error onto the CLI error taxonomy. Rate-limit failures
    /// get an actionable hint; everything else passes through unchanged.
    pub(crate) fn from_client(error: gpr_client::Error) -> Self {
        match error {
            gpr_client::Error::RateLimited { reset_secs } => {
                let resets = reset_secs
                    .map_or_else(String::new, |secs| format!(" (counter resets in {secs}s)"));
                Self::failure(anyhow!(
                    "rate limit exceeded{resets}; unauthenticated clients get 60 requests/hour, \
                     pass --token or set GITEE_TOKEN to raise the limit"
                ))
            }
            other => Self::failure(other),
        }
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

/// Application context passed to command handlers.
pub(crate) struct AppContext {
    pub(crate) client: GiteeClient,
    pub(crate) owner: Option<String>,
    pub(crate) repo: Option<String>,
    pub(crate) output: OutputFormat,
}

impl AppContext {
    /// Construct the configured API client and capture the project
    /// coordinates from the parsed arguments.
    pub(crate) fn from_cli(cli: &Cli) -> CliResult<Self> {
        let mut builder = GiteeClient::builder()
            .gateway(cli.gateway.clone())
            .timeout(Duration::from_secs(cli.timeout));
        if let Some(token) = &cli.token {
            builder = builder.token(token.clone());
        }
        let client = builder
            .build()
            .map_err(|err| CliError::failure(anyhow!("failed to build API client: {err}")))?;

        Ok(Self {
            client,
            owner: cli.owner.clone(),
            repo: cli.repo.clone(),
            output: cli.output,
        })
    }

    /// Owner and repository are required by every command.
    pub(crate) fn project(&self) -> CliResult<(&str, &str)> {
        let owner = self
            .owner
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                CliError::validation("owner is required (pass --owner or set GITEE_OWNER)")
            })?;
        let repo = self
            .repo
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                CliError::validation("repository is required (pass --repo or set GITEE_PROJECT)")
            })?;
        Ok((owner, repo))
    }
}
