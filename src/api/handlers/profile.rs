//! Profile registry handlers.

use axum::{Json, extract::Query};
use serde::Deserialize;

use crate::domain::{ApiResponse, ProfileInfo, ProfileListResponse, lookup, registry};
use crate::error::{AppError, Result};

/// Query parameters for profile lookup.
#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    /// Profile code to look up.
    pub code: String,
}

/// List all registered profiles.
pub async fn list_profiles() -> Json<ApiResponse<ProfileListResponse>> {
    let profiles = registry().iter().map(ProfileInfo::from).collect();
    Json(ApiResponse::success(ProfileListResponse { profiles }))
}

/// Get a single profile by code.
pub async fn get_profile(
    Query(query): Query<ProfileQuery>,
) -> Result<Json<ApiResponse<ProfileInfo>>> {
    let code = query.code.trim().to_ascii_uppercase();
    let profile = lookup(&code).ok_or(AppError::UnsupportedProfile(code))?;

    Ok(Json(ApiResponse::success(ProfileInfo::from(profile))))
}
