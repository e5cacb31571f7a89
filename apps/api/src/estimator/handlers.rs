use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::currency::format_salary;
use crate::errors::AppError;
use crate::estimator::model::{CandidateProfile, Prediction};
use crate::estimator::tables;
use crate::state::AppState;

/// POST /api/v1/salary/estimate
///
/// Malformed bodies are rejected by the JSON extractor before this runs;
/// the estimator itself never fails (unmatched keys fall back to defaults).
pub async fn handle_estimate(
    State(state): State<AppState>,
    Json(profile): Json<CandidateProfile>,
) -> Result<Json<Prediction>, AppError> {
    let prediction = state.estimator.estimate(&profile).await?;
    info!(
        role = %profile.role,
        location = %profile.location,
        estimate = %format_salary(prediction.point_estimate, &prediction.currency),
        "salary estimate computed"
    );
    Ok(Json(prediction))
}

#[derive(Debug, Serialize)]
pub struct IndustryRoles {
    pub industry: &'static str,
    pub roles: Vec<&'static str>,
}

/// Enumerable reference-table keys, for populating form dropdowns.
#[derive(Debug, Serialize)]
pub struct ReferenceResponse {
    pub industries: Vec<IndustryRoles>,
    pub locations: Vec<&'static str>,
    pub education_levels: Vec<&'static str>,
}

pub fn build_reference_response() -> ReferenceResponse {
    ReferenceResponse {
        industries: tables::industries()
            .into_iter()
            .map(|industry| IndustryRoles {
                industry,
                roles: tables::roles_for(industry),
            })
            .collect(),
        locations: tables::locations(),
        education_levels: tables::education_levels(),
    }
}

/// GET /api/v1/salary/reference
pub async fn handle_reference() -> Json<ReferenceResponse> {
    Json(build_reference_response())
}
