use serde::Deserialize;
use std::fmt;

use crate::error_handling::{GitPeekError, Result};

/// Branch used for commit listings when none is given
pub const DEFAULT_BRANCH: &str = "main";

/// One action the tool performs per invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    GetUser {
        username: String,
    },
    ListRepos {
        username: String,
    },
    SearchRepos {
        username: String,
        keyword: String,
    },
    GetCommits {
        username: String,
        repo: String,
        branch: String,
    },
}

impl Operation {
    /// Reject blank parameters before any request is made
    pub fn validate(&self) -> Result<()> {
        let params: Vec<(&str, &str)> = match self {
            Self::GetUser { username } | Self::ListRepos { username } => {
                vec![("username", username.as_str())]
            }
            Self::SearchRepos { username, keyword } => {
                vec![("username", username.as_str()), ("keyword", keyword.as_str())]
            }
            Self::GetCommits {
                username,
                repo,
                branch,
            } => vec![
                ("username", username.as_str()),
                ("repo", repo.as_str()),
                ("branch", branch.as_str()),
            ],
        };

        for (name, value) in params {
            if value.trim().is_empty() {
                return Err(GitPeekError::Usage(format!("'{name}' cannot be empty")));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GetUser { username } => write!(f, "user {username}"),
            Self::ListRepos { username } => write!(f, "repos {username}"),
            Self::SearchRepos { username, keyword } => write!(f, "search {username} {keyword}"),
            Self::GetCommits {
                username,
                repo,
                branch,
            } => write!(f, "commits {username}/{repo}@{branch}"),
        }
    }
}

/// User profile from `/users/{username}`
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub public_repos: u64,
}

/// Repository entry from `/users/{username}/repos`
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
    pub html_url: String,
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {} ({})", self.name, self.html_url)
    }
}

/// Commit entry from `/repos/{owner}/{repo}/commits`
#[derive(Debug, Clone, Deserialize)]
pub struct CommitEntry {
    pub commit: CommitDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitDetail {
    // GitHub sends null here for some imported commits
    pub author: Option<CommitAuthor>,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitAuthor {
    pub name: String,
}

impl CommitEntry {
    #[must_use]
    pub fn author_name(&self) -> &str {
        self.commit
            .author
            .as_ref()
            .map_or("unknown", |author| author.name.as_str())
    }
}

/// Body the API sends alongside a non-200 status
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}
