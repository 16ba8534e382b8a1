use serde::{Deserialize, Serialize};

/// Full analysis record handed from the upload flow to the results views.
///
/// Field names serialize in camelCase so the stored JSON matches what the
/// results API returns to browser clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub score: u8, // 0 – 100
    pub analysis: String,
    pub suggestions: Vec<String>,
    pub professional_suggestions: ProfessionalSuggestions,
    pub keyword_analysis: KeywordAnalysis,
    pub ai_improvements: AiImprovements,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessionalSuggestions {
    pub structure: Vec<String>,
    pub formatting: Vec<String>,
    pub content: Vec<String>,
    pub language: Vec<String>,
    pub sections: Vec<String>,
}

impl ProfessionalSuggestions {
    /// Categories in display order, keyed by their serialized name.
    pub fn categories(&self) -> [(&'static str, &[String]); 5] {
        [
            ("structure", &self.structure),
            ("formatting", &self.formatting),
            ("content", &self.content),
            ("language", &self.language),
            ("sections", &self.sections),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysis {
    pub found_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub keyword_density: f64, // percent
    /// In resume order, top to bottom.
    pub section_mapping: Vec<SectionKeywords>,
    pub industry_comparison: String,
}

/// Keywords found in one resume section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionKeywords {
    pub section: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiImprovements {
    pub specific_changes: Vec<SpecificChange>,
    pub word_choices: Vec<WordChoice>,
    pub sentence_restructuring: Vec<SentenceRestructure>,
    pub quantifiable_achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecificChange {
    pub location: String,
    pub current: String,
    pub improved: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordChoice {
    pub weak: String,
    pub strong: String,
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceRestructure {
    pub original: String,
    pub improved: String,
    pub section: String,
}
