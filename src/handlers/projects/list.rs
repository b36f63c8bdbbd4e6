use axum::{extract::State, Json};

use crate::app::AppState;
use crate::database::models::Project;
use crate::error::ApiError;

/// GET /projects - every project; an empty table yields `[]`
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = state.store.list().await?;
    Ok(Json(projects))
}
