//! Axum route handlers for the upload flow.

use axum::{
    extract::{Multipart, State},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use axum_extra::extract::CookieJar;

use crate::errors::AppError;
use crate::session::ensure_session;
use crate::state::AppState;
use crate::store::StoredAnalysis;
use crate::upload::form::read_upload_form;
use crate::upload::view::{render_upload_page, UploadPage};

/// GET /upload
pub async fn handle_upload_form(State(state): State<AppState>) -> Html<String> {
    Html(render_upload_page(&UploadPage::new(state.config.max_upload_mb())))
}

/// POST /upload
///
/// Success stores the result for the session and redirects (303) to /results.
/// Any failure re-renders the form with an inline message and stays on /upload.
pub async fn handle_upload_submit(
    State(state): State<AppState>,
    jar: CookieJar,
    multipart: Multipart,
) -> Response {
    let (jar, session) = ensure_session(jar);
    let mut page = UploadPage::new(state.config.max_upload_mb());

    let form = match read_upload_form(multipart, page.limit_mb).await {
        Ok(form) => form,
        Err(e) => {
            let e = AppError::from(e);
            page.error = Some(e.to_string());
            return (e.status(), jar, Html(render_upload_page(&page))).into_response();
        }
    };
    page.job_description = form.job_description.clone();
    page.analysis_mode = form.analysis_mode;

    let mut flow = state.upload_flow();
    match flow.submit(session, form).await {
        Ok(_) => (jar, Redirect::to("/results")).into_response(),
        Err(e) => {
            page.error = flow.error_message().map(String::from);
            (e.status(), jar, Html(render_upload_page(&page))).into_response()
        }
    }
}

/// POST /api/v1/analyses
///
/// Same multipart form as the HTML flow; returns the stored entry as JSON.
/// Unlike the form, an unknown `analysisMode` is rejected rather than defaulted.
pub async fn handle_create_analysis(
    State(state): State<AppState>,
    jar: CookieJar,
    multipart: Multipart,
) -> Result<(CookieJar, Json<StoredAnalysis>), AppError> {
    let (jar, session) = ensure_session(jar);
    let form = read_upload_form(multipart, state.config.max_upload_mb()).await?;
    if let Some(mode) = &form.unrecognised_mode {
        return Err(AppError::Validation(format!(
            "unknown analysisMode '{mode}', expected one of Quick, Detailed, Optimize"
        )));
    }
    let entry = state.upload_flow().submit(session, form).await?;
    Ok((jar, Json(entry)))
}
