//! Identifier generation and validation handlers.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::api::state::AppState;
use crate::domain::{
    ApiResponse, IdentifierResponse, ValidateRequest, ValidateResponse, ValidationVerdict,
};
use crate::error::Result;

/// Query parameters for identifier generation.
#[derive(Debug, Deserialize)]
pub struct GenerateQuery {
    /// Profile code to generate under. Random profile when absent.
    pub profile: Option<String>,

    /// Number of identifiers to generate (default: 1).
    #[serde(default = "default_count")]
    pub count: u32,
}

const fn default_count() -> u32 {
    1
}

/// Generate identifiers.
pub async fn generate(
    State(state): State<AppState>,
    Query(query): Query<GenerateQuery>,
) -> Result<Json<ApiResponse<IdentifierResponse>>> {
    let ids = state
        .generator
        .generate_batch(query.profile.as_deref(), query.count)?;

    Ok(Json(ApiResponse::success(IdentifierResponse::new(&ids))))
}

/// Validate a candidate identifier.
pub async fn validate(
    State(state): State<AppState>,
    Json(request): Json<ValidateRequest>,
) -> Json<ApiResponse<ValidateResponse>> {
    let response = match state.generator.validate(&request.identifier) {
        ValidationVerdict::Valid { profile_code } => ValidateResponse {
            valid: true,
            profile: Some(profile_code),
            reason: None,
        },
        ValidationVerdict::Invalid(reason) => ValidateResponse {
            valid: false,
            profile: None,
            reason: Some(reason.to_string()),
        },
    };

    Json(ApiResponse::success(response))
}
