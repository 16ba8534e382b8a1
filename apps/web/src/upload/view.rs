use crate::models::upload::AnalysisMode;
use crate::pages::content::UPLOAD_INFO_CARDS;
use crate::pages::home::render_feature_cards;
use crate::pages::layout::{html_escape, render_page};
use crate::upload::form::{FIELD_ANALYSIS_MODE, FIELD_FILE, FIELD_JOB_DESCRIPTION};

/// What the upload form shows. A re-rendered form keeps the user's job
/// description and mode; the file input always starts empty.
#[derive(Debug, Clone)]
pub struct UploadPage {
    pub job_description: String,
    pub analysis_mode: AnalysisMode,
    pub error: Option<String>,
    pub limit_mb: u64,
}

impl UploadPage {
    pub fn new(limit_mb: u64) -> Self {
        Self {
            job_description: String::new(),
            analysis_mode: AnalysisMode::default(),
            error: None,
            limit_mb,
        }
    }
}

pub fn render_upload_page(page: &UploadPage) -> String {
    let modes: String = AnalysisMode::ALL
        .iter()
        .map(|mode| {
            let checked = if *mode == page.analysis_mode { " checked" } else { "" };
            format!(
                r#"<label class="mode-option"><input type="radio" name="{FIELD_ANALYSIS_MODE}" value="{value}"{checked}> <strong>{value}</strong> <span>{tagline}</span></label>"#,
                value = mode.as_str(),
                tagline = mode.tagline(),
            )
        })
        .collect();

    let error = page
        .error
        .as_deref()
        .map(|msg| format!(r#"<div class="form-error" role="alert">{}</div>"#, html_escape(msg)))
        .unwrap_or_default();

    let body = format!(
        r#"<section class="upload">
        <h1>Upload Your Resume</h1>
        <p>Get instant AI-powered analysis and personalized recommendations to optimize your resume for ATS success.</p>
        <form method="post" action="/upload" enctype="multipart/form-data">
            <label for="{FIELD_FILE}">Resume File (PDF only) *</label>
            <div class="dropzone">
                <input type="file" id="{FIELD_FILE}" name="{FIELD_FILE}" accept=".pdf,application/pdf" required>
                <p>Drag and drop your PDF here, or click to browse</p>
                <p>Maximum file size: {limit_mb}MB</p>
            </div>
            <label for="{FIELD_JOB_DESCRIPTION}">Job description (optional)</label>
            <textarea id="{FIELD_JOB_DESCRIPTION}" name="{FIELD_JOB_DESCRIPTION}" rows="3" placeholder="Paste the job description here to get targeted analysis and recommendations...">{job_description}</textarea>
            <fieldset>
                <legend>Analysis Mode *</legend>
                {modes}
            </fieldset>
            {error}
            <button type="submit">Analyze</button>
        </form>
    </section>
    <section class="info-cards">{cards}</section>"#,
        limit_mb = page.limit_mb,
        job_description = html_escape(&page.job_description),
        cards = render_feature_cards(UPLOAD_INFO_CARDS),
    );
    render_page("Upload", "/upload", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_checks_quick_and_shows_no_error() {
        let html = render_upload_page(&UploadPage::new(10));
        assert!(html.contains(r#"value="Quick" checked"#));
        assert!(!html.contains(r#"value="Detailed" checked"#));
        assert!(!html.contains("form-error"));
        assert!(html.contains("Maximum file size: 10MB"));
    }

    #[test]
    fn test_rerendered_form_keeps_input_and_shows_error() {
        let page = UploadPage {
            job_description: "Rust <backend> role".to_string(),
            analysis_mode: AnalysisMode::Optimize,
            error: Some("Please upload a PDF file only.".to_string()),
            limit_mb: 10,
        };
        let html = render_upload_page(&page);
        assert!(html.contains(r#"value="Optimize" checked"#));
        assert!(html.contains("Rust &lt;backend&gt; role</textarea>"));
        assert!(html.contains("Please upload a PDF file only."));
    }

    #[test]
    fn test_upload_link_is_active() {
        let html = render_upload_page(&UploadPage::new(10));
        assert!(html.contains(r#"<a href="/upload" class="nav-link active""#));
    }
}
