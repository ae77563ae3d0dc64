use std::io::Write;

use crate::error_handling::Result;
use crate::github::GitHubClient;
use crate::models::CommitEntry;

pub fn handle_command<W: Write>(
    client: &GitHubClient,
    username: &str,
    repo: &str,
    branch: &str,
    out: &mut W,
) -> Result<()> {
    let commits = client.list_commits(username, repo, branch)?;
    render_commits(repo, branch, &commits, out)?;
    Ok(())
}

/// Commits are printed in API order, newest first
pub fn render_commits<W: Write>(
    repo: &str,
    branch: &str,
    commits: &[CommitEntry],
    out: &mut W,
) -> std::io::Result<()> {
    if commits.is_empty() {
        return writeln!(out, "{repo} has no commits");
    }

    writeln!(out, "{repo} has {} commits on '{branch}':", commits.len())?;
    for (number, entry) in commits.iter().enumerate() {
        writeln!(
            out,
            "{}- {} : {}",
            number + 1,
            entry.author_name(),
            entry.commit.message
        )?;
    }
    Ok(())
}
