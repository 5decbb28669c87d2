use axum::{Json, extract::Path};

use crate::errors::{Error, ErrorDto};
use crate::models::education::LearningTopic;
use crate::services::education_catalog;

pub static EDUCATION_TAG: &str = "education";

/// GET /api/education/topics
/// List SolarEd learning topics in display order
#[utoipa::path(
    get,
    path = "/api/education/topics",
    tag = EDUCATION_TAG,
    responses(
        (status = 200, description = "All learning topics", body = Vec<LearningTopic>)
    )
)]
pub async fn list_topics() -> Json<&'static [LearningTopic]> {
    Json(education_catalog::topics())
}

/// GET /api/education/topics/{id}
#[utoipa::path(
    get,
    path = "/api/education/topics/{id}",
    tag = EDUCATION_TAG,
    params(
        ("id" = String, Path, description = "Topic id, e.g. `financing`")
    ),
    responses(
        (status = 200, description = "Learning topic", body = LearningTopic),
        (status = 404, description = "Unknown topic", body = ErrorDto)
    )
)]
pub async fn get_topic(Path(id): Path<String>) -> Result<Json<&'static LearningTopic>, Error> {
    education_catalog::find_topic(&id)
        .map(Json)
        .ok_or_else(|| Error::NotFound(format!("topic {}", id)))
}
