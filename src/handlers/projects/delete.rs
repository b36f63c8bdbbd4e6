use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use super::parse_project_id;
use crate::app::AppState;
use crate::error::ApiError;

/// DELETE /projects/:id - hard delete; 404 when nothing was removed
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_project_id(&id)?;
    state.store.delete(id).await?;
    tracing::info!("Deleted project {}", id);

    Ok(StatusCode::NO_CONTENT)
}
