use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::report::{self, ReportError};
use crate::server::app::AppState;

/// Generates a report from the posted state document. The response carries
/// the preview markup inline plus a time-limited link to download the
/// document itself. Only an unparseable or rootless document fails;
/// everything else degrades to fallback labels inside the report.
pub async fn create_report(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let html = report::generate_html_from_value(payload).map_err(|err| {
        let status = match err {
            ReportError::MalformedInput(_) => {
                warn!("rejected state document: {err}");
                StatusCode::BAD_REQUEST
            }
            ReportError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({"error": err.to_string()})))
    })?;

    let filename = report::report_filename();
    let token = state
        .store
        .store(&filename, "text/html; charset=utf-8", html.clone().into_bytes());
    info!(%token, %filename, "report generated");

    Ok(Json(json!({
        "html_preview": html,
        "download_url": format!("/downloads/{token}"),
    })))
}
