use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::database::activity_directory::ActivityListing;
use crate::models::MessageResponse;
use crate::services::signup_service;
use crate::web::error::ApiError;
use crate::web::AppState;

#[derive(Debug, Deserialize, Default)]
pub struct SignupQuery {
    pub email: Option<String>,
}

pub async fn list_activities_handler(State(state): State<AppState>) -> Json<ActivityListing> {
    Json(signup_service::list_activities(&state.directory).await)
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let email = query.email.unwrap_or_default();
    let message = signup_service::signup(&state.directory, &activity_name, &email).await?;
    Ok(Json(MessageResponse { message }))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let email = query.email.unwrap_or_default();
    let message = signup_service::unregister(&state.directory, &activity_name, &email).await?;
    Ok(Json(MessageResponse { message }))
}
