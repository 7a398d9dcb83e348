#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::redundant_pub_crate)]

//! Command-line client for Gitee project artifacts (GPReplicator).
//!
//! Layout:
//! - `cli.rs`: argument parsing and command dispatch
//! - `commands/`: command handlers, one per remote resource
//! - `client.rs`: application context and CLI error types
//! - `output.rs`: renderers and formatting helpers
//! - `telemetry.rs`: logging bootstrap
//! - `main.rs`: thin entrypoint delegating to `run()`

pub(crate) mod cli;
pub(crate) mod client;
pub(crate) mod commands;
pub(crate) mod output;
pub(crate) mod telemetry;

pub use cli::run;
