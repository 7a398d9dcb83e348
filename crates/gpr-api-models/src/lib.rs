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
//! Shared DTOs for the Gitee REST API v5 payloads consumed by GPReplicator.
//!
//! Only the fields the CLI renders are modelled; everything else the server
//! sends is preserved in a flattened map so JSON output stays a faithful
//! pass-through of the remote response.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Error body returned by Gitee on failed requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    /// Human-readable message supplied by the server.
    pub message: String,
}

/// Response of `GET /repos/{owner}/{repo}/git/trees/{sha}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TreeResponse {
    /// SHA of the tree object that was resolved.
    pub sha: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// API URL of the tree object.
    pub url: Option<String>,
    #[serde(default)]
    /// Whether the listing was truncated by the server.
    pub truncated: bool,
    #[serde(default)]
    /// Entries of the tree, one per file or directory.
    pub tree: Vec<TreeEntry>,
    #[serde(flatten)]
    /// Fields not modelled locally, kept for pass-through output.
    pub extra: Map<String, Value>,
}

/// Single entry of a git tree listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TreeEntry {
    /// Path of the entry relative to the repository root.
    pub path: String,
    #[serde(rename = "type")]
    /// Object type: `blob` for files, `tree` for directories.
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// POSIX mode string reported by the server.
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// SHA of the referenced object.
    pub sha: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Size in bytes; absent for directories.
    pub size: Option<u64>,
    #[serde(flatten)]
    /// Fields not modelled locally, kept for pass-through output.
    pub extra: Map<String, Value>,
}

impl TreeEntry {
    /// Whether the entry refers to a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == "tree"
    }
}

/// Issue of a project, from `GET /repos/{owner}/{repo}/issues`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Issue {
    /// Numeric identifier of the issue.
    pub id: u64,
    /// Issue state, e.g. `open`, `progressing`, `closed`, `rejected`.
    pub state: String,
    /// Issue title.
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Issue category assigned by the service, e.g. `task` or `bug`.
    pub issue_type: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<FixedOffset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Milestone the issue is assigned to, when any.
    pub milestone: Option<MilestoneRef>,
    #[serde(flatten)]
    /// Fields not modelled locally, kept for pass-through output.
    pub extra: Map<String, Value>,
}

/// Milestone reference embedded in an [`Issue`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MilestoneRef {
    /// Title of the referenced milestone.
    pub title: String,
    #[serde(flatten)]
    /// Fields not modelled locally, kept for pass-through output.
    pub extra: Map<String, Value>,
}

/// Milestone of a project, from `GET /repos/{owner}/{repo}/milestones`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Milestone {
    /// Numeric identifier of the milestone.
    pub id: u64,
    /// Milestone state, e.g. `open` or `closed`.
    pub state: String,
    /// Milestone title.
    pub title: String,
    /// Creation timestamp.
    pub created_at: DateTime<FixedOffset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Deadline timestamp, when set.
    pub due_on: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    /// Count of open issues assigned to the milestone.
    pub open_issues: u64,
    #[serde(default)]
    /// Count of closed issues assigned to the milestone.
    pub closed_issues: u64,
    #[serde(flatten)]
    /// Fields not modelled locally, kept for pass-through output.
    pub extra: Map<String, Value>,
}

/// Published release, from `GET /repos/{owner}/{repo}/releases`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Release {
    /// Numeric identifier of the release.
    pub id: u64,
    /// Git tag the release was published from.
    pub tag_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Display name of the release.
    pub name: Option<String>,
    #[serde(default)]
    /// Whether the release is marked as a pre-release.
    pub prerelease: bool,
    /// Creation timestamp.
    pub created_at: DateTime<FixedOffset>,
    #[serde(flatten)]
    /// Fields not modelled locally, kept for pass-through output.
    pub extra: Map<String, Value>,
}

/// Git tag, from `GET /repos/{owner}/{repo}/tags`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TagInfo {
    /// Tag name.
    pub name: String,
    /// Commit the tag points at.
    pub commit: TagCommit,
    #[serde(flatten)]
    /// Fields not modelled locally, kept for pass-through output.
    pub extra: Map<String, Value>,
}

/// Commit reference embedded in a [`TagInfo`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TagCommit {
    /// SHA of the tagged commit.
    pub sha: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Commit timestamp, when reported.
    pub date: Option<DateTime<FixedOffset>>,
    #[serde(flatten)]
    /// Fields not modelled locally, kept for pass-through output.
    pub extra: Map<String, Value>,
}

/// Project metadata, from `GET /repos/{owner}/{repo}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Repository {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// `owner/repo` path of the project.
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Display name of the project.
    pub human_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Free-form project description.
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Project homepage URL.
    pub homepage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Default branch name.
    pub default_branch: Option<String>,
    #[serde(default)]
    /// Whether the repository is private.
    pub private: bool,
    #[serde(default)]
    /// Fork count.
    pub forks_count: u64,
    #[serde(default)]
    /// Star count.
    pub stargazers_count: u64,
    #[serde(default)]
    /// Watcher count.
    pub watchers_count: u64,
    #[serde(default)]
    /// Count of open issues.
    pub open_issues_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// License identifier, when the service reports one.
    pub license: Option<String>,
    #[serde(flatten)]
    /// Fields not modelled locally, kept for pass-through output.
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tree_entry_distinguishes_directories() {
        let entry: TreeEntry = serde_json::from_value(json!({
            "path": "docs",
            "type": "tree",
            "sha": "abc"
        }))
        .expect("tree entry should parse");
        assert!(entry.is_dir());
        assert_eq!(entry.size, None);

        let blob: TreeEntry = serde_json::from_value(json!({
            "path": "README.md",
            "type": "blob",
            "size": 120
        }))
        .expect("blob entry should parse");
        assert!(!blob.is_dir());
        assert_eq!(blob.size, Some(120));
    }

    #[test]
    fn issue_parses_optional_milestone() {
        let issue: Issue = serde_json::from_value(json!({
            "id": 7,
            "state": "open",
            "title": "Broken link",
            "issue_type": "task",
            "created_at": "2024-03-01T10:15:00+08:00",
            "milestone": {"title": "v1.0", "id": 3}
        }))
        .expect("issue should parse");
        assert_eq!(
            issue.milestone.as_ref().map(|m| m.title.as_str()),
            Some("v1.0")
        );

        let bare: Issue = serde_json::from_value(json!({
            "id": 8,
            "state": "closed",
            "title": "No milestone",
            "created_at": "2024-03-02T10:15:00+08:00",
            "milestone": null
        }))
        .expect("issue without milestone should parse");
        assert!(bare.milestone.is_none());
    }

    #[test]
    fn unknown_fields_survive_round_trip() {
        let payload = json!({
            "id": 1,
            "tag_name": "v0.2.0",
            "name": "Second cut",
            "prerelease": true,
            "created_at": "2024-01-15T09:00:00+03:00",
            "target_commitish": "master",
            "assets": [{"name": "bundle.tar.gz"}]
        });

        let release: Release =
            serde_json::from_value(payload.clone()).expect("release should parse");
        assert!(release.prerelease);
        assert_eq!(release.extra.get("target_commitish"), Some(&json!("master")));

        let back = serde_json::to_value(&release).expect("release should serialize");
        assert_eq!(back.get("assets"), payload.get("assets"));
    }

    #[test]
    fn repository_defaults_counts_to_zero() {
        let repo: Repository = serde_json::from_value(json!({
            "full_name": "owner/project",
            "default_branch": "master"
        }))
        .expect("repository should parse");
        assert_eq!(repo.forks_count, 0);
        assert_eq!(repo.open_issues_count, 0);
        assert!(!repo.private);
        assert!(repo.description.is_none());
    }
}
