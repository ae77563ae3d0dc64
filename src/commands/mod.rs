pub mod commits;
pub mod repos;
pub mod user;

use std::io::Write;

use tracing::debug;

use crate::error_handling::Result;
use crate::github::GitHubClient;
use crate::models::Operation;

/// Run one operation against the API and render the result to `out`
pub fn execute<W: Write>(operation: &Operation, client: &GitHubClient, out: &mut W) -> Result<()> {
    debug!("Executing: {}", operation);

    match operation {
        Operation::GetUser { username } => user::handle_command(client, username, out),
        Operation::ListRepos { username } => repos::handle_list(client, username, out),
        Operation::SearchRepos { username, keyword } => {
            repos::handle_search(client, username, keyword, out)
        }
        Operation::GetCommits {
            username,
            repo,
            branch,
        } => commits::handle_command(client, username, repo, branch, out),
    }?;

    out.flush()?;
    Ok(())
}
