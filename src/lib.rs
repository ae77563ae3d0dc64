pub mod cli;
pub mod commands;
pub mod config;
pub mod error_handling;
pub mod github;
pub mod models;
pub mod search;
pub mod ui;

pub use error_handling::{GitPeekError, Result};
pub use models::*;
