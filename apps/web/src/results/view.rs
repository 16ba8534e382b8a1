use crate::models::analysis::{
    AiImprovements, AnalysisResult, KeywordAnalysis, ProfessionalSuggestions,
};
use crate::pages::layout::{html_escape, render_page};
use crate::results::presenter::{ActiveView, ResultsPage};

pub fn render_results_page(page: &ResultsPage) -> String {
    let result = &page.entry.result;

    let tabs: String = ActiveView::ALL
        .iter()
        .map(|view| {
            let (class, current) = if *view == page.view {
                ("tab active", r#" aria-current="page""#)
            } else {
                ("tab", "")
            };
            format!(
                r#"<a href="/results?view={id}" class="{class}"{current}>{label}</a>"#,
                id = view.id(),
                label = view.label(),
            )
        })
        .collect();

    let content = match page.view {
        ActiveView::Overview => render_overview(result),
        ActiveView::Professional => render_professional(&result.professional_suggestions),
        ActiveView::Keywords => render_keywords(&result.keyword_analysis),
        ActiveView::Ai => render_ai(&result.ai_improvements),
    };

    let body = format!(
        r#"<section class="results-header">
        <a href="/upload" class="back-link">Back to Upload</a>
        <h1>Resume Analysis Results</h1>
        <p class="file-name">{file_name}</p>
        <div class="score {band}">
            <span class="score-value">{score}/100</span>
            <div class="score-bar"><div class="score-fill" style="width: {score}%"></div></div>
        </div>
    </section>
    <nav class="tabs" data-active="{active}">{tabs}</nav>
    <section class="results-content">
{content}
    </section>
    <section class="actions">
        <a href="/upload" class="button primary">Analyze Another Resume</a>
        <button type="button" onclick="window.print()">Print Analysis</button>
    </section>"#,
        file_name = html_escape(&page.entry.file_name),
        band = page.band.css_class(),
        score = result.score,
        active = page.view.id(),
    );
    render_page("Results", "/results", &body)
}

fn list_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", html_escape(item)))
        .collect()
}

fn render_overview(result: &AnalysisResult) -> String {
    format!(
        r#"<h2>Analysis Summary</h2>
        <p class="analysis">{}</p>
        <h2>Key Suggestions</h2>
        <ul class="suggestions">{}</ul>"#,
        html_escape(&result.analysis),
        list_items(&result.suggestions)
    )
}

fn render_professional(suggestions: &ProfessionalSuggestions) -> String {
    let categories: String = suggestions
        .categories()
        .iter()
        .map(|(category, items)| {
            let heading = match *category {
                "sections" => "Section Completeness".to_string(),
                other => capitalize(other),
            };
            format!(
                r#"<div class="category"><h3>{heading}</h3><ul>{}</ul></div>"#,
                list_items(items)
            )
        })
        .collect();
    format!("<h2>Professional Suggestions</h2>\n{categories}")
}

fn render_keywords(keywords: &KeywordAnalysis) -> String {
    let tags = |items: &[String], class: &str| -> String {
        items
            .iter()
            .map(|k| {
                format!(
                    r#"<span class="keyword {class}"><strong>{}</strong></span>"#,
                    html_escape(k)
                )
            })
            .collect()
    };
    let mapping: String = keywords
        .section_mapping
        .iter()
        .map(|entry| {
            format!(
                "<p>{}: <strong>{}</strong></p>",
                html_escape(&entry.section),
                html_escape(&entry.keywords.join(", "))
            )
        })
        .collect();

    format!(
        r#"<h2>Keyword Analysis</h2>
        <h3>Found Keywords</h3>
        <div class="keywords found">{found}</div>
        <h3>Missing Keywords</h3>
        <div class="keywords missing">{missing}</div>
        <h3>Keyword Density: {density}%</h3>
        <p>{comparison}</p>
        <h3>Section Mapping</h3>
        {mapping}"#,
        found = tags(&keywords.found_keywords, "found"),
        missing = tags(&keywords.missing_keywords, "missing"),
        density = keywords.keyword_density,
        comparison = html_escape(&keywords.industry_comparison),
    )
}

fn render_ai(ai: &AiImprovements) -> String {
    let changes: String = ai
        .specific_changes
        .iter()
        .map(|c| {
            format!(
                r#"<div class="change"><h4>{}</h4><p class="current">"{}"</p><p class="improved">"{}"</p><p><strong>Why:</strong> {}</p></div>"#,
                html_escape(&c.location),
                html_escape(&c.current),
                html_escape(&c.improved),
                html_escape(&c.reason)
            )
        })
        .collect();
    let words: String = ai
        .word_choices
        .iter()
        .map(|w| {
            format!(
                r#"<div class="word-choice"><strong>{}</strong> &rarr; <strong>{}</strong><p>{}</p></div>"#,
                html_escape(&w.weak),
                html_escape(&w.strong),
                html_escape(&w.context)
            )
        })
        .collect();
    let sentences: String = ai
        .sentence_restructuring
        .iter()
        .map(|s| {
            format!(
                r#"<div class="restructure"><h4>{}</h4><p class="original">"{}"</p><p class="improved">"{}"</p></div>"#,
                html_escape(&s.section),
                html_escape(&s.original),
                html_escape(&s.improved)
            )
        })
        .collect();

    format!(
        r#"<h2>AI Improvements</h2>
        <h3>Specific Location-Based Changes</h3>
        {changes}
        <h3>Enhanced Word Choices</h3>
        {words}
        <h3>Sentence Restructuring Examples</h3>
        {sentences}
        <h3>Focus on Quantifiable Achievements</h3>
        <ul>{achievements}</ul>"#,
        achievements = list_items(&ai.quantifiable_achievements),
    )
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
