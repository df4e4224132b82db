use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::answers::AnswersTree;
use super::descriptor::DescriptorKind;
use super::repository::{AnswersRepository, RepositoryError, UserId};
use super::service::{FormService, FormServiceError};

/// Router exposing answer storage and I-129F mapping endpoints.
pub fn forms_router<R>(service: Arc<FormService<R>>) -> Router
where
    R: AnswersRepository + 'static,
{
    Router::new()
        .route("/api/v1/answers/:user_id", put(save_answers_handler::<R>))
        .route(
            "/api/v1/answers/:user_id/i129f",
            get(saved_assignments_handler::<R>),
        )
        .route("/api/v1/forms/i129f/map", post(map_handler::<R>))
        .route("/api/v1/forms/i129f/fields", get(catalogue_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Serialize)]
struct CatalogueEntry {
    kind: DescriptorKind,
    names: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
struct CatalogueView {
    template_bound: bool,
    fields: Vec<CatalogueEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing_from_template: Vec<&'static str>,
}

pub(crate) async fn save_answers_handler<R>(
    State(service): State<Arc<FormService<R>>>,
    Path(user_id): Path<String>,
    axum::Json(answers): axum::Json<AnswersTree>,
) -> Response
where
    R: AnswersRepository + 'static,
{
    match service.save_answers(&UserId(user_id), answers) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn saved_assignments_handler<R>(
    State(service): State<Arc<FormService<R>>>,
    Path(user_id): Path<String>,
) -> Response
where
    R: AnswersRepository + 'static,
{
    match service.field_assignments(&UserId(user_id)) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn map_handler<R>(
    State(service): State<Arc<FormService<R>>>,
    axum::Json(answers): axum::Json<AnswersTree>,
) -> Response
where
    R: AnswersRepository + 'static,
{
    let outcome = service.map(&answers);
    (StatusCode::OK, axum::Json(outcome)).into_response()
}

pub(crate) async fn catalogue_handler<R>(State(service): State<Arc<FormService<R>>>) -> Response
where
    R: AnswersRepository + 'static,
{
    let catalogue = service.catalogue();
    let missing_from_template = service
        .mapper()
        .profile()
        .map(|profile| profile.missing_from(&catalogue))
        .unwrap_or_default();

    let view = CatalogueView {
        template_bound: service.mapper().profile().is_some(),
        fields: catalogue
            .iter()
            .map(|descriptor| CatalogueEntry {
                kind: descriptor.kind(),
                names: descriptor.physical_names(),
            })
            .collect(),
        missing_from_template,
    };
    (StatusCode::OK, axum::Json(view)).into_response()
}

fn error_response(error: FormServiceError) -> Response {
    let status = match &error {
        FormServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        FormServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
