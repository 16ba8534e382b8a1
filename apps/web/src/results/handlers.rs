//! Axum route handlers for the results views.

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use axum_extra::extract::CookieJar;

use crate::errors::AppError;
use crate::results::presenter::{present, ActiveView, ResultsOutcome, ResultsQuery};
use crate::results::view::render_results_page;
use crate::session::current_session;
use crate::state::AppState;
use crate::store::StoredAnalysis;

/// GET /results?view=overview|professional|keywords|ai
///
/// Redirects (303) to /upload when the session has no stored analysis.
pub async fn handle_results(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<ResultsQuery>,
) -> Result<Response, AppError> {
    let view = ActiveView::from_query(query.view.as_deref());

    match present(state.store.as_ref(), current_session(&jar), view).await? {
        ResultsOutcome::RedirectToUpload => Ok(Redirect::to("/upload").into_response()),
        ResultsOutcome::Render(page) => Ok(Html(render_results_page(&page)).into_response()),
    }
}

/// GET /api/v1/results
///
/// The session's stored analysis, or 404 when there is none.
pub async fn handle_get_results(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<StoredAnalysis>, AppError> {
    let not_found = || AppError::NotFound("No analysis stored for this session".to_string());

    let session = current_session(&jar).ok_or_else(not_found)?;
    let entry = state.store.get(session).await?.ok_or_else(not_found)?;
    Ok(Json(entry))
}
