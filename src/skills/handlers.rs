use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{auth::AuthUser, error::ApiError, state::AppState};

use super::dto::{CreateSkillRequest, DeleteResponse, ListParams, UpdateSkillRequest};
use super::repo::Skill;

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/skills", get(list_skills))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/skills", post(create_skill))
        .route("/skills/:id", put(update_skill).delete(delete_skill))
}

#[instrument(skip(state))]
pub async fn list_skills(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Skill>>, ApiError> {
    let skills =
        Skill::list_by_user(&state.db, user_id, params.q.as_deref(), params.level).await?;
    Ok(Json(skills))
}

#[instrument(skip(state, payload))]
pub async fn create_skill(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateSkillRequest>,
) -> Result<(StatusCode, Json<Skill>), ApiError> {
    let name = payload.name.trim();
    if name.is_empty() {
        warn!("create skill with blank name");
        return Err(ApiError::Validation("Skill name is required".into()));
    }

    let skill = Skill::create(&state.db, user_id, name, payload.level).await?;
    info!(skill_id = %skill.id, %user_id, "skill created");
    Ok((StatusCode::CREATED, Json(skill)))
}

#[instrument(skip(state, payload))]
pub async fn update_skill(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSkillRequest>,
) -> Result<Json<Skill>, ApiError> {
    let name = match payload.name.as_deref().map(str::trim) {
        Some("") => {
            warn!(%id, "update skill with blank name");
            return Err(ApiError::Validation("Skill name is required".into()));
        }
        other => other,
    };

    let skill = Skill::update(&state.db, user_id, id, name, payload.level)
        .await?
        .ok_or_else(|| ApiError::NotFound("Skill not found".into()))?;

    info!(skill_id = %skill.id, %user_id, "skill updated");
    Ok(Json(skill))
}

#[instrument(skip(state))]
pub async fn delete_skill(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError> {
    if !Skill::delete(&state.db, user_id, id).await? {
        return Err(ApiError::NotFound("Skill not found".into()));
    }
    info!(skill_id = %id, %user_id, "skill deleted");
    Ok(Json(DeleteResponse { message: "Deleted" }))
}
