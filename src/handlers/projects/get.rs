use axum::{
    extract::{Path, State},
    Json,
};

use super::parse_project_id;
use crate::app::AppState;
use crate::database::models::Project;
use crate::error::ApiError;

/// GET /projects/:id - show a single project
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Project>, ApiError> {
    let id = parse_project_id(&id)?;
    let project = state.store.get(id).await?;
    Ok(Json(project))
}
