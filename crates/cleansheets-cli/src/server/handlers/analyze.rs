//! Cell-analysis handler.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use cleansheets::{CellInput, CleanSheets, Issue, OpenRouterProvider};

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Request body for cell analysis.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Cells to analyze.
    #[serde(default)]
    pub data: Vec<CellInput>,
}

/// Successful analysis response.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// Always true on success.
    pub success: bool,
    /// Confident issues, in model order.
    pub issues: Vec<Issue>,
}

/// POST /api/analyze - Analyze a batch of cells.
///
/// A missing, malformed, or empty body is one and the same client error; the
/// extractor collapses all of them into `None` or an empty batch.
pub async fn analyze(
    State(state): State<AppState>,
    body: Option<Json<AnalyzeRequest>>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Some(Json(request)) = body else {
        return Err(ApiError::BadRequest("No data provided".to_string()));
    };

    if request.data.is_empty() {
        return Err(ApiError::BadRequest("No data provided".to_string()));
    }

    println!("Analyzing {} cells", request.data.len());

    // Without a pinned provider, the API key is read per request, not at
    // startup.
    let sheets = match &state.provider {
        Some(provider) => CleanSheets::from_arc(provider.clone()),
        None => {
            let provider = OpenRouterProvider::from_env_with_config(state.config.clone())
                .map_err(|_| ApiError::Internal("API key not configured".to_string()))?;
            CleanSheets::new(provider)
        }
    };

    let issues = sheets.analyze(&request.data).await?;

    println!("Issues found: {}", issues.len());

    Ok(Json(AnalyzeResponse {
        success: true,
        issues,
    }))
}

/// OPTIONS /api/analyze - CORS preflight.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Any other method on /api/analyze.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
