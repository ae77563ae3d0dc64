use std::io::Write;

use tracing::debug;

use crate::error_handling::Result;
use crate::github::GitHubClient;
use crate::models::Repository;
use crate::search::RepositorySearch;

pub fn handle_list<W: Write>(client: &GitHubClient, username: &str, out: &mut W) -> Result<()> {
    let repos = client.list_repos(username)?;
    render_list(username, &repos, out)?;
    Ok(())
}

pub fn handle_search<W: Write>(
    client: &GitHubClient,
    username: &str,
    keyword: &str,
    out: &mut W,
) -> Result<()> {
    let repos = client.list_repos(username)?;
    render_search(username, keyword, &repos, out)?;
    Ok(())
}

pub fn render_list<W: Write>(
    username: &str,
    repos: &[Repository],
    out: &mut W,
) -> std::io::Result<()> {
    if repos.is_empty() {
        return writeln!(out, "{username} has no public repositories");
    }

    writeln!(out, "Repositories of {username}:")?;
    for repo in repos {
        writeln!(out, "{repo}")?;
    }
    Ok(())
}

pub fn render_search<W: Write>(
    username: &str,
    keyword: &str,
    repos: &[Repository],
    out: &mut W,
) -> std::io::Result<()> {
    if repos.is_empty() {
        return writeln!(out, "{username} has no public repositories");
    }

    let matches = RepositorySearch::new(keyword).filter(repos);
    debug!("{} of {} repositories match '{}'", matches.len(), repos.len(), keyword);

    if matches.is_empty() {
        return writeln!(out, "No repositories of {username} match '{keyword}'");
    }

    writeln!(out, "Repositories of {username} matching '{keyword}':")?;
    for repo in matches {
        writeln!(out, "{repo}")?;
    }
    Ok(())
}
