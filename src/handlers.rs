use crate::errors::AppError;
use crate::models::DashboardSummary;
use crate::state::AppState;
use crate::ui::dashboard::{render_dashboard, DashboardPage, Notice};
use crate::ui::landing::{particles, render_landing};
use crate::ui::upload::render_upload;
use crate::ui::verify::{display_id, render_verify, verified_on};
use crate::view::{HistoryWindow, UploadPhase, UPLOAD_FAILED};
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use chrono::Local;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Instant;
use tokio::time::sleep;
use tracing::{error, info, warn};

pub const REPORT_FILENAME: &str = "C-Trace_Executive_Report.pdf";

#[derive(Debug, Default, Deserialize)]
pub struct ResetForm {
    #[serde(default)]
    pub confirmed: String,
    pub range: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UploadForm {
    #[serde(default)]
    pub text: String,
}

pub async fn index() -> Html<String> {
    let particles = particles(&mut rand::thread_rng());
    Html(render_landing(&particles))
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let param = |key: &str| query.get(key).map(String::as_str);
    let summary = fetch_summary(&state).await;

    if summary.is_none() && is_set(param("refresh")) {
        info!("refresh failed; keeping the current page");
        return StatusCode::NO_CONTENT.into_response();
    }

    let host = headers.get(header::HOST).and_then(|value| value.to_str().ok());
    let verify_url = state.config.verify_url(host);
    let page = DashboardPage {
        summary: summary.as_ref(),
        window: HistoryWindow::parse(param("range")),
        show_verify: is_set(param("verify")),
        verify_url: &verify_url,
        notice: Notice::parse(param("notice")),
    };
    Html(render_dashboard(&page)).into_response()
}

fn is_set(value: Option<&str>) -> bool {
    matches!(value, Some("1" | "true"))
}

async fn fetch_summary(state: &AppState) -> Option<DashboardSummary> {
    let started = Instant::now();
    let result = {
        let _read = state.gate.read().await;
        state.api.dashboard().await
    };

    let remaining = state.config.loading_delay.saturating_sub(started.elapsed());
    if !remaining.is_zero() {
        sleep(remaining).await;
    }

    match result {
        Ok(summary) => Some(summary),
        Err(err) => {
            warn!("failed to fetch dashboard data: {err}");
            None
        }
    }
}

pub async fn reset(State(state): State<AppState>, Form(form): Form<ResetForm>) -> Redirect {
    if form.confirmed != "true" {
        info!("reset not confirmed; leaving data untouched");
        return Redirect::to("/dashboard");
    }

    let result = {
        let _write = state.gate.write().await;
        state.api.reset().await
    };

    match result {
        Ok(()) => {
            info!("dashboard data reset");
            let window = HistoryWindow::parse(form.range.as_deref());
            Redirect::to(&refresh_location(window))
        }
        Err(err) => {
            error!("failed to reset data: {err}");
            notice_redirect(Notice::ResetFailed)
        }
    }
}

pub async fn report(State(state): State<AppState>) -> Result<Response, AppError> {
    match state.api.report().await {
        Ok(bytes) => {
            let response = axum::http::Response::builder()
                .header(header::CONTENT_TYPE, "application/pdf")
                .header(
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{REPORT_FILENAME}\""),
                )
                .body(axum::body::Body::from(bytes))?;
            Ok(response)
        }
        Err(err) => {
            error!("failed to download report: {err}");
            Ok(notice_redirect(Notice::ReportFailed).into_response())
        }
    }
}

pub async fn upload_page() -> Html<String> {
    Html(render_upload(&UploadPhase::Idle, ""))
}

pub async fn upload(State(state): State<AppState>, Form(form): Form<UploadForm>) -> Html<String> {
    let phase = submit_upload(&state, &form.text).await;
    Html(render_upload(&phase, &form.text))
}

async fn submit_upload(state: &AppState, text: &str) -> UploadPhase {
    if text.trim().is_empty() {
        return UploadPhase::Idle;
    }

    sleep(state.config.upload_delay).await;

    match state.api.upload(text).await {
        Ok(result) => {
            info!(
                "classified upload as {} ({}): {:.2} kg CO2e",
                result.category, result.scope, result.total_emission
            );
            UploadPhase::Showing(result)
        }
        Err(err) => {
            error!("failed to process upload: {err}");
            UploadPhase::Failed(UPLOAD_FAILED.to_string())
        }
    }
}

pub async fn verify(State(state): State<AppState>) -> Html<String> {
    let summary = match state.api.dashboard().await {
        Ok(summary) => Some(summary),
        Err(err) => {
            error!("verification failed: {err}");
            None
        }
    };

    let id = display_id(&mut rand::thread_rng());
    Html(render_verify(summary.as_ref(), &id, &verified_on(Local::now())))
}

fn refresh_location(window: HistoryWindow) -> String {
    if window == HistoryWindow::default() {
        "/dashboard?refresh=1".to_string()
    } else {
        format!("/dashboard?range={}&refresh=1", window.key())
    }
}

fn notice_redirect(notice: Notice) -> Redirect {
    Redirect::to(&format!("/dashboard?notice={}", notice.key()))
}
