//! Argument parsing and command dispatch for the `gpr` binary.

use clap::{Args, Parser, Subcommand, ValueEnum};
use url::Url;

use crate::client::{AppContext, CliResult};
use crate::commands::{describe, files, issues, milestones, releases, tags};
use crate::telemetry;

/// Parses CLI arguments, executes the requested command, and returns the
/// process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();
    telemetry::init_logging(cli.verbose);

    let command_name = command_label(&cli.command);
    tracing::debug!(command = command_name, gateway = %cli.gateway, "dispatching command");

    match dispatch(cli).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

async fn dispatch(cli: Cli) -> CliResult<()> {
    let ctx = AppContext::from_cli(&cli)?;

    match cli.command {
        Command::Files(args) => files::handle_files(&ctx, args).await,
        Command::Issues => issues::handle_issues(&ctx).await,
        Command::Milestones => milestones::handle_milestones(&ctx).await,
        Command::Releases => releases::handle_releases(&ctx).await,
        Command::Tags => tags::handle_tags(&ctx).await,
        Command::Describe => describe::handle_describe(&ctx).await,
    }
}

#[derive(Parser)]
#[command(
    name = "gpr",
    about = "GPReplicator: client for Gitee project artifacts (files, issues, milestones, releases, tags, description)",
    version
)]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "GITEE_GATEWAY",
        value_parser = parse_url,
        default_value = gpr_client::DEFAULT_GATEWAY,
        help = "API gateway of the Gitee service"
    )]
    pub(crate) gateway: Url,
    #[arg(
        long,
        global = true,
        env = "GITEE_TOKEN",
        hide_env_values = true,
        help = "OAuth access token; unauthenticated requests are limited to 60 per hour"
    )]
    pub(crate) token: Option<String>,
    #[arg(
        long,
        global = true,
        env = "GITEE_OWNER",
        help = "Project owner (space name) on the Gitee service"
    )]
    pub(crate) owner: Option<String>,
    #[arg(
        long,
        global = true,
        env = "GITEE_PROJECT",
        help = "Repository name on the Gitee service"
    )]
    pub(crate) repo: Option<String>,
    #[arg(
        long,
        global = true,
        env = "GITEE_HTTP_TIMEOUT_SECS",
        default_value_t = gpr_client::DEFAULT_TIMEOUT_SECS,
        help = "Request timeout in seconds"
    )]
    pub(crate) timeout: u64,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format: human-readable summary or pass-through JSON"
    )]
    pub(crate) output: OutputFormat,
    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Raise log verbosity (-v debug, -vv trace); RUST_LOG overrides"
    )]
    pub(crate) verbose: u8,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// List the project tree files.
    Files(FilesArgs),
    /// List project issues of every state.
    Issues,
    /// List project milestones.
    Milestones,
    /// List published project releases.
    Releases,
    /// List project tags.
    Tags,
    /// Show project metadata and description.
    Describe,
}

#[derive(Args)]
pub(crate) struct FilesArgs {
    #[arg(
        long,
        env = "GITEE_SHA",
        help = "Branch name, tag, or commit SHA whose tree to list"
    )]
    pub(crate) sha: String,
    #[arg(long, help = "Expand the tree into every directory")]
    pub(crate) recursive: bool,
}

/// Output format shared by every subcommand.
#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable summary lines.
    #[default]
    Table,
    /// Pretty-printed pass-through JSON.
    Json,
}

const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Files(_) => "files",
        Command::Issues => "issues",
        Command::Milestones => "milestones",
        Command::Releases => "releases",
        Command::Tags => "tags",
        Command::Describe => "describe",
    }
}

fn parse_url(input: &str) -> Result<Url, String> {
    input
        .parse::<Url>()
        .map_err(|err| format!("invalid URL '{input}': {err}"))
}
