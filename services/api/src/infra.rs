use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;
use visa_forms::error::AppError;
use visa_forms::forms::{
    AnswersRepository, AnswersTree, FieldMapper, RepositoryError, TemplateInventory, UserId,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAnswersRepository {
    records: Arc<Mutex<HashMap<UserId, AnswersTree>>>,
}

impl AnswersRepository for InMemoryAnswersRepository {
    fn save(&self, user: &UserId, answers: AnswersTree) -> Result<(), RepositoryError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("answers mutex poisoned".to_string()))?;
        guard.insert(user.clone(), answers);
        Ok(())
    }

    fn fetch(&self, user: &UserId) -> Result<Option<AnswersTree>, RepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("answers mutex poisoned".to_string()))?;
        Ok(guard.get(user).cloned())
    }
}

/// Mapper bound to the template inventory at `template_fields`, if one is configured.
pub(crate) fn build_mapper(template_fields: Option<&Path>) -> Result<FieldMapper, AppError> {
    match template_fields {
        Some(path) => {
            let inventory = TemplateInventory::from_path(path)?;
            let mapper = FieldMapper::with_template(inventory);
            if let Some(profile) = mapper.profile() {
                let missing = profile.missing_from(&FieldMapper::catalogue());
                info!(
                    template = %path.display(),
                    fields = profile.inventory().len(),
                    missing = missing.len(),
                    "bound mapper to template inventory"
                );
            }
            Ok(mapper)
        }
        None => Ok(FieldMapper::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_round_trips_answers_per_user() {
        let repository = InMemoryAnswersRepository::default();
        let user = UserId::from("user-1");
        assert!(repository.fetch(&user).expect("fetch").is_none());

        repository
            .save(&user, AnswersTree::new(serde_json::json!({ "petitioner": {} })))
            .expect("save");
        assert!(repository.fetch(&user).expect("fetch").is_some());
        assert!(repository
            .fetch(&UserId::from("user-2"))
            .expect("fetch")
            .is_none());
    }

    #[test]
    fn missing_template_file_is_reported() {
        let error = build_mapper(Some(Path::new("./no-such-inventory.csv")))
            .expect_err("expected template error");
        assert!(matches!(error, AppError::Template(_)));
    }

    #[test]
    fn no_template_builds_unbound_mapper() {
        let mapper = build_mapper(None).expect("mapper");
        assert!(mapper.profile().is_none());
    }
}
