use clap::{ArgAction, Parser, Subcommand};

use crate::models::{Operation, DEFAULT_BRANCH};

#[derive(Parser, Debug)]
#[command(name = "gitpeek")]
#[command(about = "Look up GitHub users, repositories and commit histories")]
#[command(version)]
#[command(
    long_about = "Look up GitHub users, repositories and commit histories.\n\nAuthenticates with the token in GIT_API_TOKEN (or GITHUB_TOKEN). Only the first page of repository and commit listings is fetched."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Root of the GitHub REST API
    #[arg(long, global = true, env = "GITPEEK_API_URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "GITPEEK_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get GitHub user details
    User {
        /// GitHub username
        username: String,
    },
    /// List user repositories
    Repos {
        /// GitHub username
        username: String,
    },
    /// List the commits of a repository
    Commits {
        /// GitHub username
        username: String,
        /// Name of the repository
        repo: String,
        /// Branch to list commits from
        #[arg(long, default_value = DEFAULT_BRANCH)]
        branch: String,
    },
    /// Search a user's repositories by keyword
    Search {
        /// Owner of the repositories
        username: String,
        /// Partial name of the repository
        keyword: String,
    },
}

impl Cli {
    /// The operation to run, or `None` when no subcommand was given
    #[must_use]
    pub fn into_operation(self) -> Option<Operation> {
        self.command.map(Operation::from)
    }

    /// Log filter implied by `-v` flags
    #[must_use]
    pub const fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "gitpeek=debug",
            _ => "trace",
        }
    }
}

impl From<Commands> for Operation {
    fn from(command: Commands) -> Self {
        match command {
            Commands::User { username } => Self::GetUser { username },
            Commands::Repos { username } => Self::ListRepos { username },
            Commands::Commits {
                username,
                repo,
                branch,
            } => Self::GetCommits {
                username,
                repo,
                branch,
            },
            Commands::Search { username, keyword } => Self::SearchRepos { username, keyword },
        }
    }
}
