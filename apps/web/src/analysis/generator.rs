//! Analysis generation: pluggable, trait-based seam between the upload flow
//! and whatever produces an `AnalysisResult`.
//!
//! Default: `MockAnalysisGenerator` (randomized score, static templates,
//! simulated latency). A real backend implements `AnalysisGenerator` and is
//! swapped in at startup without touching the upload flow or the results views.
//!
//! `AppState` holds an `Arc<dyn AnalysisGenerator>`.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use tracing::debug;

use crate::analysis::templates;
use crate::config::SuggestionRange;
use crate::errors::AppError;
use crate::models::analysis::{
    AiImprovements, AnalysisResult, KeywordAnalysis, ProfessionalSuggestions, SectionKeywords,
    SentenceRestructure, SpecificChange, WordChoice,
};
use crate::models::upload::UploadRequest;

/// Lowest score the mock ever produces (inclusive).
pub const MOCK_SCORE_FLOOR: u8 = 60;
/// Upper bound on mock scores (exclusive).
pub const MOCK_SCORE_CEILING: u8 = 100;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Produces an analysis for a validated upload. Implementations may suspend;
/// an `Err` sends the user back to the upload form with a retry message.
#[async_trait]
pub trait AnalysisGenerator: Send + Sync {
    async fn generate(&self, request: &UploadRequest) -> Result<AnalysisResult, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// MockAnalysisGenerator
// ────────────────────────────────────────────────────────────────────────────

/// Fabricates a result after a fixed delay. Never reads the file bytes and
/// never fails.
pub struct MockAnalysisGenerator {
    delay: Duration,
    suggestion_range: SuggestionRange,
}

impl MockAnalysisGenerator {
    pub fn new(delay: Duration, suggestion_range: SuggestionRange) -> Self {
        Self {
            delay,
            suggestion_range,
        }
    }
}

#[async_trait]
impl AnalysisGenerator for MockAnalysisGenerator {
    async fn generate(&self, request: &UploadRequest) -> Result<AnalysisResult, AppError> {
        tokio::time::sleep(self.delay).await;

        // ThreadRng is !Send, so it must not live across the await above.
        let result = build_mock_result(request, self.suggestion_range, &mut rand::thread_rng());
        debug!(
            "Mock analysis for '{}': score={} suggestions={}",
            request.file.name,
            result.score,
            result.suggestions.len()
        );
        Ok(result)
    }
}

/// Assembles a mock result from the templates. Only the score and the
/// suggestion count are random; the mode name and the presence of a job
/// description are the only inputs that change the text.
pub fn build_mock_result<R: Rng + ?Sized>(
    request: &UploadRequest,
    suggestion_range: SuggestionRange,
    rng: &mut R,
) -> AnalysisResult {
    let score = rng.gen_range(MOCK_SCORE_FLOOR..MOCK_SCORE_CEILING);

    let max = suggestion_range.max.min(templates::SUGGESTIONS.len());
    let min = suggestion_range.min.min(max);
    let suggestion_count = rng.gen_range(min..=max);

    AnalysisResult {
        score,
        analysis: compose_analysis(request),
        suggestions: owned(&templates::SUGGESTIONS[..suggestion_count]),
        professional_suggestions: ProfessionalSuggestions {
            structure: owned(templates::STRUCTURE),
            formatting: owned(templates::FORMATTING),
            content: owned(templates::CONTENT),
            language: owned(templates::LANGUAGE),
            sections: owned(templates::SECTIONS),
        },
        keyword_analysis: KeywordAnalysis {
            found_keywords: owned(templates::FOUND_KEYWORDS),
            missing_keywords: owned(templates::MISSING_KEYWORDS),
            keyword_density: templates::KEYWORD_DENSITY,
            section_mapping: templates::SECTION_MAPPING
                .iter()
                .map(|(section, keywords)| SectionKeywords {
                    section: section.to_string(),
                    keywords: owned(keywords),
                })
                .collect(),
            industry_comparison: templates::INDUSTRY_COMPARISON.to_string(),
        },
        ai_improvements: AiImprovements {
            specific_changes: templates::SPECIFIC_CHANGES
                .iter()
                .map(|(location, current, improved, reason)| SpecificChange {
                    location: location.to_string(),
                    current: current.to_string(),
                    improved: improved.to_string(),
                    reason: reason.to_string(),
                })
                .collect(),
            word_choices: templates::WORD_CHOICES
                .iter()
                .map(|(weak, strong, context)| WordChoice {
                    weak: weak.to_string(),
                    strong: strong.to_string(),
                    context: context.to_string(),
                })
                .collect(),
            sentence_restructuring: templates::SENTENCE_RESTRUCTURING
                .iter()
                .map(|(original, improved, section)| SentenceRestructure {
                    original: original.to_string(),
                    improved: improved.to_string(),
                    section: section.to_string(),
                })
                .collect(),
            quantifiable_achievements: owned(templates::QUANTIFIABLE_ACHIEVEMENTS),
        },
    }
}

fn compose_analysis(request: &UploadRequest) -> String {
    let clause = if request.has_job_description() {
        templates::JOB_DESCRIPTION_MATCHED
    } else {
        templates::JOB_DESCRIPTION_MISSING
    };
    templates::ANALYSIS_TEMPLATE
        .replace("{mode}", &request.analysis_mode.as_str().to_lowercase())
        .replace("{job_description_clause}", clause)
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
