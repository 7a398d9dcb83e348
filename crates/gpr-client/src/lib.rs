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
//! Async client for the Gitee REST API v5 surface.
//!
//! [`GiteeClient`] exposes one method per remote resource (tree, issues,
//! milestones, releases, tags, repository metadata) and performs exactly one
//! HTTP request per call. Authentication uses the `access_token` query
//! parameter understood by the v5 gateway.

mod client;
mod error;

pub use client::{DEFAULT_GATEWAY, DEFAULT_TIMEOUT_SECS, GiteeClient, GiteeClientBuilder};
pub use error::Error;
