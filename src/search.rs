use crate::models::Repository;

/// Case-insensitive substring match on repository names
pub struct RepositorySearch {
    needle: String,
}

impl RepositorySearch {
    #[must_use]
    pub fn new(keyword: &str) -> Self {
        Self {
            needle: keyword.to_lowercase(),
        }
    }

    #[must_use]
    pub fn matches(&self, repo: &Repository) -> bool {
        repo.name.to_lowercase().contains(&self.needle)
    }

    /// Matching repositories, in the order given
    #[must_use]
    pub fn filter<'a>(&self, repositories: &'a [Repository]) -> Vec<&'a Repository> {
        repositories.iter().filter(|repo| self.matches(repo)).collect()
    }
}
