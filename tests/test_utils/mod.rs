#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A `gitpeek` invocation isolated from the developer's own token,
/// settings file and `.env`
pub struct Sandbox {
    pub home: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().unwrap(),
        }
    }

    pub fn config_home(&self) -> PathBuf {
        self.home.path().join(".config")
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("gitpeek").unwrap();
        cmd.current_dir(self.home.path())
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env_remove("GIT_API_TOKEN")
            .env_remove("GITHUB_TOKEN")
            .env_remove("GITPEEK_API_URL")
            .env_remove("GITPEEK_TIMEOUT")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Command pointed at a mock API server
    pub fn command_for(&self, server: &mockito::Server) -> Command {
        let mut cmd = self.command();
        cmd.arg("--api-url").arg(server.url());
        cmd
    }

    pub fn write_settings(&self, json: &str) {
        let dir = self.config_home().join("gitpeek");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.json"), json).unwrap();
    }

    pub fn write_dotenv(&self, contents: &str) {
        fs::write(self.home.path().join(".env"), contents).unwrap();
    }
}

pub fn repo_json(names: &[&str]) -> String {
    let items: Vec<serde_json::Value> = names
        .iter()
        .map(|name| {
            serde_json::json!({
                "name": name,
                "html_url": format!("https://github.com/octocat/{name}"),
                "private": false
            })
        })
        .collect();
    serde_json::Value::Array(items).to_string()
}

pub fn commit_json(commits: &[(&str, &str)]) -> String {
    let items: Vec<serde_json::Value> = commits
        .iter()
        .map(|(author, message)| {
            serde_json::json!({
                "sha": "abc123",
                "commit": {
                    "author": { "name": author, "email": "x@example.com" },
                    "message": message
                }
            })
        })
        .collect();
    serde_json::Value::Array(items).to_string()
}
