/// HTTP surface for the editorial compliance core.
///
/// Endpoints:
/// - `POST /api/check-brand-guidelines`: check drafted sections against the
///   style guide, returning per-section reports for the editorial UI
/// - `GET  /api/seen/{category}`: the stored seen-URL list (fail-open)
/// - `PUT  /api/seen/{category}`: replace the stored list
/// - `POST /api/seen/{category}`: merge newly surfaced URLs in front
///
/// Seen-store write failures surface as HTTP 500 — losing seen-state would
/// resurface duplicate content, so the operator must be told.
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use brand_guidelines::checker::Checker;
use brand_guidelines::model::{CheckReport, SectionContent};
use url_tracking::error::TrackingError;
use url_tracking::store::SeenStore;

#[derive(Clone)]
pub struct AppState {
    pub checker: Arc<Checker>,
    pub seen: Arc<SeenStore>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/check-brand-guidelines", post(check_brand_guidelines))
        .route(
            "/api/seen/{category}",
            get(get_seen).put(replace_seen).post(append_seen),
        )
        .with_state(state)
}

// --- Brand check ---

#[derive(Debug, Deserialize)]
struct CheckRequest {
    sections: Vec<SectionContent>,
}

#[derive(Debug, Serialize)]
struct SectionReport {
    section_type: &'static str,
    report: CheckReport,
}

#[derive(Debug, Serialize)]
struct CheckResponse {
    passed: bool,
    total_issues: usize,
    total_warnings: usize,
    sections: Vec<SectionReport>,
}

async fn check_brand_guidelines(
    State(state): State<AppState>,
    Json(request): Json<CheckRequest>,
) -> Json<CheckResponse> {
    let sections: Vec<SectionReport> = request
        .sections
        .iter()
        .map(|section| SectionReport {
            section_type: section.kind(),
            report: state.checker.check_section(section),
        })
        .collect();

    let total_issues = sections.iter().map(|s| s.report.total_issues).sum();
    let total_warnings = sections.iter().map(|s| s.report.total_warnings).sum();
    let passed = sections.iter().all(|s| s.report.passed);

    info!(
        sections = sections.len(),
        total_issues, total_warnings, passed, "brand check complete"
    );

    Json(CheckResponse {
        passed,
        total_issues,
        total_warnings,
        sections,
    })
}

// --- Seen store ---

#[derive(Debug, Serialize)]
struct SeenResponse {
    category: String,
    urls: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SeenUpdate {
    urls: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

type WriteError = (StatusCode, Json<ErrorResponse>);

async fn get_seen(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Json<SeenResponse> {
    let urls = state.seen.load(&category);
    Json(SeenResponse { category, urls })
}

async fn replace_seen(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Json(update): Json<SeenUpdate>,
) -> Result<Json<SeenResponse>, WriteError> {
    state
        .seen
        .save(&category, &update.urls)
        .map_err(write_error)?;
    let urls = state.seen.load(&category);
    info!(category = %category, count = urls.len(), "seen list replaced");
    Ok(Json(SeenResponse { category, urls }))
}

async fn append_seen(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Json(update): Json<SeenUpdate>,
) -> Result<Json<SeenResponse>, WriteError> {
    state
        .seen
        .append(&category, &update.urls)
        .map_err(write_error)?;
    let urls = state.seen.load(&category);
    info!(category = %category, count = urls.len(), "seen list appended");
    Ok(Json(SeenResponse { category, urls }))
}

fn write_error(e: TrackingError) -> WriteError {
    tracing::error!(error = %e, "seen store write failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(dir: &std::path::Path) -> AppState {
        AppState {
            checker: Arc::new(Checker::with_builtin_rules()),
            seen: Arc::new(SeenStore::new(dir)),
        }
    }

    #[tokio::test]
    async fn test_check_endpoint_aggregates_sections() {
        let dir = tempfile::tempdir().unwrap();
        let state = state(dir.path());

        let request = CheckRequest {
            sections: vec![
                SectionContent::News {
                    title: "Venue permits update".to_string(),
                    short_version: "New rules for outdoor events.".to_string(),
                    whats_happening: "We are an insurance company watching this closely."
                        .to_string(),
                    why_it_matters: String::new(),
                },
                SectionContent::Trend {
                    title: "Seating the wedding party".to_string(),
                    subtitle: "Mixed tables are in.".to_string(),
                    content: "Seat the bridal party with family.".to_string(),
                    cta: "Read More".to_string(),
                },
            ],
        };

        let Json(response) = check_brand_guidelines(State(state), Json(request)).await;
        assert!(!response.passed);
        assert_eq!(response.total_issues, 1);
        assert_eq!(response.total_warnings, 1);
        assert_eq!(response.sections[0].section_type, "news");
        assert_eq!(response.sections[1].section_type, "trend");
        assert!(response.sections[1].report.passed);
    }

    #[tokio::test]
    async fn test_seen_round_trip_over_handlers() {
        let dir = tempfile::tempdir().unwrap();
        let state = state(dir.path());

        let update = SeenUpdate {
            urls: vec!["https://A.com/x?utm_source=nl".to_string()],
        };
        replace_seen(
            State(state.clone()),
            Path("news".to_string()),
            Json(update),
        )
        .await
        .unwrap();

        let Json(response) = get_seen(State(state), Path("news".to_string())).await;
        assert_eq!(response.urls, vec!["https://a.com/x".to_string()]);
    }
}
