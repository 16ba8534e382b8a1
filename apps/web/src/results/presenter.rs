//! Results presenter: turns the session's stored analysis into a page model,
//! or tells the caller to send the user back to the upload form.
//!
//! The store is passed in explicitly; the presenter only ever reads it, so
//! switching between views cannot change what was stored.

use serde::Deserialize;

use crate::errors::AppError;
use crate::store::{ResultStore, SessionId, StoredAnalysis};

/// Which of the four result views is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveView {
    #[default]
    Overview,
    Professional,
    Keywords,
    Ai,
}

impl ActiveView {
    pub const ALL: [ActiveView; 4] = [
        ActiveView::Overview,
        ActiveView::Professional,
        ActiveView::Keywords,
        ActiveView::Ai,
    ];

    /// Query-string value.
    pub fn id(&self) -> &'static str {
        match self {
            ActiveView::Overview => "overview",
            ActiveView::Professional => "professional",
            ActiveView::Keywords => "keywords",
            ActiveView::Ai => "ai",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActiveView::Overview => "Overview",
            ActiveView::Professional => "Professional Suggestions",
            ActiveView::Keywords => "Keyword Analysis",
            ActiveView::Ai => "AI Improvements",
        }
    }

    /// Unknown or missing values fall back to Overview.
    pub fn from_query(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return ActiveView::default();
        };
        ActiveView::ALL
            .into_iter()
            .find(|view| view.id().eq_ignore_ascii_case(raw.trim()))
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub struct ResultsQuery {
    pub view: Option<String>,
}

/// Visual severity band for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Favorable,
    Caution,
    // Below the mock generator's floor of 60, so never produced today.
    Unfavorable,
}

impl ScoreBand {
    pub fn for_score(score: u8) -> Self {
        if score >= 80 {
            ScoreBand::Favorable
        } else if score >= 60 {
            ScoreBand::Caution
        } else {
            ScoreBand::Unfavorable
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreBand::Favorable => "score-favorable",
            ScoreBand::Caution => "score-caution",
            ScoreBand::Unfavorable => "score-unfavorable",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsPage {
    pub entry: StoredAnalysis,
    pub view: ActiveView,
    pub band: ScoreBand,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsOutcome {
    /// Nothing stored for this session yet.
    RedirectToUpload,
    Render(Box<ResultsPage>),
}

pub async fn present(
    store: &dyn ResultStore,
    session: Option<SessionId>,
    view: ActiveView,
) -> Result<ResultsOutcome, AppError> {
    let Some(session) = session else {
        return Ok(ResultsOutcome::RedirectToUpload);
    };
    let Some(entry) = store.get(session).await? else {
        return Ok(ResultsOutcome::RedirectToUpload);
    };

    Ok(ResultsOutcome::Render(Box::new(ResultsPage {
        band: ScoreBand::for_score(entry.result.score),
        entry,
        view,
    })))
}
