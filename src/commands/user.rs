use std::io::Write;

use crate::error_handling::Result;
use crate::github::GitHubClient;
use crate::models::User;

const NOT_AVAILABLE: &str = "N/A";

pub fn handle_command<W: Write>(client: &GitHubClient, username: &str, out: &mut W) -> Result<()> {
    // An empty 200 body has nothing to show
    if let Some(user) = client.get_user(username)? {
        render_user(&user, out)?;
    }
    Ok(())
}

pub fn render_user<W: Write>(user: &User, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "GitHub user: {}", user.login)?;
    writeln!(out, "Name: {}", user.name.as_deref().unwrap_or(NOT_AVAILABLE))?;
    writeln!(out, "Bio: {}", user.bio.as_deref().unwrap_or(NOT_AVAILABLE))?;
    writeln!(out, "Public Repos: {}", user.public_repos)
}
