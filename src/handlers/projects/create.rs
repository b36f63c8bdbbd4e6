use axum::{body::Bytes, extract::State, http::StatusCode, Json};

use crate::app::AppState;
use crate::database::models::{NewProject, Project};
use crate::error::ApiError;

/// POST /projects - insert a project, returning it with its assigned id.
///
/// The body is decoded as JSON regardless of `Content-Type`. Shape is the
/// only check: `title` must be a string, everything else is optional.
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    let input: NewProject = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!("Rejected project payload: {}", e);
        ApiError::bad_request("Invalid request payload")
    })?;

    let project = state.store.create(input).await?;
    tracing::info!("Created project {}", project.id);

    Ok((StatusCode::CREATED, Json(project)))
}
