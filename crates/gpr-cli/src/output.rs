//! Output renderers and formatting helpers for CLI commands.

use anyhow::anyhow;
use chrono::{DateTime, FixedOffset};
use gpr_api_models::{Issue, Milestone, Release, Repository, TagInfo, TreeEntry, TreeResponse};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::client::{CliError, CliResult};

pub(crate) fn render_tree(
    repo: &str,
    tree: &TreeResponse,
    recursive: bool,
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(tree),
        OutputFormat::Table => {
            let lines = tree_lines(&tree.tree);
            let heading = if recursive {
                "List of all project files"
            } else {
                "List of project files in root directory"
            };
            println!("{heading} [{}]:", lines.len());
            println!(". {repo} repository");
            for line in &lines {
                println!("{line}");
            }
            if tree.truncated {
                println!("note: listing truncated by the server");
            }
            Ok(())
        }
    }
}

pub(crate) fn render_issues(issues: &[Issue], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(issues),
        OutputFormat::Table => print_lines(&issues_summary(issues)),
    }
}

pub(crate) fn render_milestones(milestones: &[Milestone], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(milestones),
        OutputFormat::Table => print_lines(&milestones_summary(milestones)),
    }
}

pub(crate) fn render_releases(releases: &[Release], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(releases),
        OutputFormat::Table => print_lines(&releases_summary(releases)),
    }
}

pub(crate) fn render_tags(tags: &[TagInfo], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(tags),
        OutputFormat::Table => print_lines(&tags_summary(tags)),
    }
}

/// Summary of a collection: a count heading followed by sorted lines, or a
/// notice when the collection is empty.
fn collection_summary<T>(
    items: &[T],
    label: &str,
    line: impl Fn(&T) -> String,
) -> Vec<String> {
    if items.is_empty() {
        return vec![format!("There are no project {label}")];
    }
    let mut lines = vec![format!("List of all project {label} [{}]:", items.len())];
    lines.extend(sorted(items.iter().map(line)));
    lines
}

pub(crate) fn issues_summary(issues: &[Issue]) -> Vec<String> {
    collection_summary(issues, "issues", issue_line)
}

pub(crate) fn milestones_summary(milestones: &[Milestone]) -> Vec<String> {
    collection_summary(milestones, "milestones", milestone_line)
}

pub(crate) fn releases_summary(releases: &[Release]) -> Vec<String> {
    collection_summary(releases, "releases", release_line)
}

pub(crate) fn tags_summary(tags: &[TagInfo]) -> Vec<String> {
    collection_summary(tags, "tags", tag_line)
}

fn print_lines(lines: &[String]) -> CliResult<()> {
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

pub(crate) fn render_repository(repository: &Repository, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(repository),
        OutputFormat::Table => {
            if let Some(full_name) = &repository.full_name {
                println!("project: {full_name}");
            }
            if let Some(human_name) = &repository.human_name {
                println!("name: {human_name}");
            }
            println!(
                "description: {}",
                repository.description.as_deref().unwrap_or("<none>")
            );
            if let Some(homepage) = &repository.homepage {
                if !homepage.is_empty() {
                    println!("homepage: {homepage}");
                }
            }
            if let Some(branch) = &repository.default_branch {
                println!("default branch: {branch}");
            }
            println!(
                "visibility: {}",
                if repository.private { "private" } else { "public" }
            );
            println!(
                "forks/stars/watchers: {}/{}/{}",
                repository.forks_count, repository.stargazers_count, repository.watchers_count
            );
            println!("open issues: {}", repository.open_issues_count);
            if let Some(license) = &repository.license {
                println!("license: {license}");
            }
            Ok(())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))?;
    println!("{text}");
    Ok(())
}

/// Summary lines for tree entries, sorted, directories suffixed with `/`.
pub(crate) fn tree_lines(entries: &[TreeEntry]) -> Vec<String> {
    sorted(entries.iter().map(|entry| {
        format!(
            "|-> {}{}",
            entry.path,
            if entry.is_dir() { "/" } else { "" }
        )
    }))
}

pub(crate) fn issue_line(issue: &Issue) -> String {
    let milestone = issue
        .milestone
        .as_ref()
        .map_or_else(String::new, |m| format!(" Milestone: [{}]", m.title));
    format!(
        "State: [{}] Type: [{}] Created: [{}] Title: [{}]{milestone}",
        issue.state,
        issue.issue_type.as_deref().unwrap_or("-"),
        date_only(&issue.created_at),
        issue.title
    )
}

pub(crate) fn milestone_line(milestone: &Milestone) -> String {
    format!(
        "State: [{}] Created: [{}] Deadline: [{}] Title: [{}] Open/Closed issues: [{}/{}]",
        milestone.state,
        date_only(&milestone.created_at),
        milestone
            .due_on
            .as_ref()
            .map_or_else(|| "-".to_string(), date_only),
        milestone.title,
        milestone.open_issues,
        milestone.closed_issues
    )
}

pub(crate) fn release_line(release: &Release) -> String {
    format!(
        "Created: [{}] Tag: [{}] Release name: [{}]{}",
        date_only(&release.created_at),
        release.tag_name,
        release.name.as_deref().unwrap_or("-"),
        if release.prerelease {
            " [pre-release]"
        } else {
            ""
        }
    )
}

pub(crate) fn tag_line(tag: &TagInfo) -> String {
    format!(
        "Created: [{}] Name: [{}]",
        tag.commit
            .date
            .as_ref()
            .map_or_else(|| "-".to_string(), date_only),
        tag.name
    )
}

fn date_only(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}

fn sorted(lines: impl Iterator<Item = String>) -> Vec<String> {
    let mut collected: Vec<String> = lines.collect();
    collected.sort();
    collected
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn issue(state: &str, title: &str, milestone: Option<&str>) -> Issue {
        serde_json::from_value(json!({
            "id": 1,
            "state": state,
            "title": title,
            "issue_type": "task",
            "created_at": "2024-03-01T10:15:00+08:00",
            "milestone": milestone.map(|title| json!({"title": title})),
        }))
        .expect("issue should parse")
    }

    #[test]
    fn tree_lines_are_sorted_and_mark_directories() {
        let entries: Vec<TreeEntry> = serde_json::from_value(json!([
            {"path": "src", "type": "tree"},
            {"path": "README.md", "type": "blob", "size": 10},
            {"path": "Cargo.toml", "type": "blob", "size": 20}
        ]))
        .expect("entries should parse");

        assert_eq!(
            tree_lines(&entries),
            vec!["|-> Cargo.toml", "|-> README.md", "|-> src/"]
        );
    }

    #[test]
    fn issue_line_includes_milestone_when_assigned() {
        let with = issue_line(&issue("open", "Broken link", Some("v1.0")));
        assert_eq!(
            with,
            "State: [open] Type: [task] Created: [2024-03-01] Title: [Broken link] Milestone: [v1.0]"
        );

        let without = issue_line(&issue("closed", "No milestone", None));
        assert!(!without.contains("Milestone"));
    }

    #[test]
    fn milestone_line_shows_dash_for_missing_deadline() {
        let milestone: Milestone = serde_json::from_value(json!({
            "id": 3,
            "state": "open",
            "title": "v1.0",
            "created_at": "2024-01-10T09:00:00+03:00",
            "due_on": null,
            "open_issues": 4,
            "closed_issues": 9
        }))
        .expect("milestone should parse");

        assert_eq!(
            milestone_line(&milestone),
            "State: [open] Created: [2024-01-10] Deadline: [-] Title: [v1.0] Open/Closed issues: [4/9]"
        );
    }

    #[test]
    fn release_line_marks_prereleases() {
        let release: Release = serde_json::from_value(json!({
            "id": 5,
            "tag_name": "v0.9.0",
            "name": "Preview",
            "prerelease": true,
            "created_at": "2024-02-20T12:00:00+03:00"
        }))
        .expect("release should parse");

        assert_eq!(
            release_line(&release),
            "Created: [2024-02-20] Tag: [v0.9.0] Release name: [Preview] [pre-release]"
        );
    }

    #[test]
    fn empty_collections_produce_notices() {
        assert_eq!(issues_summary(&[]), ["There are no project issues"]);
        assert_eq!(milestones_summary(&[]), ["There are no project milestones"]);
        assert_eq!(releases_summary(&[]), ["There are no project releases"]);
        assert_eq!(tags_summary(&[]), ["There are no project tags"]);
    }

    #[test]
    fn issues_summary_counts_and_sorts() {
        let issues = vec![
            issue("open", "Second", None),
            issue("closed", "First", None),
        ];
        let lines = issues_summary(&issues);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "List of all project issues [2]:");
        assert!(lines[1].starts_with("State: [closed]"));
        assert!(lines[2].starts_with("State: [open]"));
    }

    #[test]
    fn tag_line_uses_commit_date() {
        let tag: TagInfo = serde_json::from_value(json!({
            "name": "v1.2.3",
            "commit": {"sha": "abc", "date": "2023-11-05T07:30:00+08:00"}
        }))
        .expect("tag should parse");

        assert_eq!(tag_line(&tag), "Created: [2023-11-05] Name: [v1.2.3]");
    }
}
