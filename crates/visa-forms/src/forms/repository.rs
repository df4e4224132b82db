use serde::{Deserialize, Serialize};
use std::fmt;

use super::answers::AnswersTree;

/// Opaque user or session identifier the saved answers are keyed by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Storage abstraction for persisted wizard answers.
pub trait AnswersRepository: Send + Sync {
    /// Replace whatever was saved for `user`.
    fn save(&self, user: &UserId, answers: AnswersTree) -> Result<(), RepositoryError>;
    fn fetch(&self, user: &UserId) -> Result<Option<AnswersTree>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("answers not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
