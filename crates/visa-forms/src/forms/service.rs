use std::sync::Arc;

use tracing::{debug, warn};

use super::answers::AnswersTree;
use super::descriptor::FieldDescriptor;
use super::i129f::{FieldMapper, MappingOutcome};
use super::repository::{AnswersRepository, RepositoryError, UserId};

/// Service composing the answers repository and a shared mapper.
pub struct FormService<R> {
    repository: Arc<R>,
    mapper: Arc<FieldMapper>,
}

impl<R> FormService<R>
where
    R: AnswersRepository + 'static,
{
    pub fn new(repository: Arc<R>, mapper: Arc<FieldMapper>) -> Self {
        Self { repository, mapper }
    }

    pub fn mapper(&self) -> &FieldMapper {
        &self.mapper
    }

    pub fn save_answers(
        &self,
        user: &UserId,
        answers: AnswersTree,
    ) -> Result<(), FormServiceError> {
        self.repository.save(user, answers)?;
        debug!(user = %user, "stored answers");
        Ok(())
    }

    /// Map the answers saved for `user`.
    pub fn field_assignments(&self, user: &UserId) -> Result<MappingOutcome, FormServiceError> {
        let answers = self
            .repository
            .fetch(user)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(self.map(&answers))
    }

    pub fn map(&self, answers: &AnswersTree) -> MappingOutcome {
        let outcome = self.mapper.map_with_report(answers);
        if !outcome.rejected_overrides.is_empty() {
            warn!(
                rejected = outcome.rejected_overrides.len(),
                "dropped overrides outside the template"
            );
        }
        outcome
    }

    pub fn catalogue(&self) -> Vec<FieldDescriptor> {
        FieldMapper::catalogue()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FormServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
