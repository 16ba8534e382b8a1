use crate::pages::content::{Feature, HOME_FEATURES, HOW_IT_WORKS};
use crate::pages::layout::{html_escape, render_page, SITE_NAME};

pub fn render_home() -> String {
    let body = format!(
        r#"<section class="hero">
        <h1>Optimize Your Resume for <span class="highlight">ATS Success</span></h1>
        <p>Get instant AI-powered analysis and recommendations to make your resume stand out to both ATS systems and hiring managers.</p>
        <a href="/upload" class="button primary">Analyze My Resume</a>
        <a href="/about" class="button secondary">Learn More</a>
    </section>
    <section class="features">
        <h2>Why Choose {SITE_NAME}?</h2>
        <p>Our cutting-edge AI technology helps you create resumes that pass ATS filters and impress hiring managers.</p>
        {features}
    </section>
    <section class="how-it-works">
        <h2>How It Works</h2>
        <p>Get professional resume analysis in three simple steps.</p>
        {steps}
    </section>
    <section class="cta">
        <h2>Ready to Boost Your Resume?</h2>
        <p>Join thousands of job seekers who have improved their resume scores and landed their dream jobs.</p>
        <a href="/upload" class="button primary">Get Started Now</a>
    </section>"#,
        features = render_feature_cards(HOME_FEATURES),
        steps = HOW_IT_WORKS
            .iter()
            .map(|s| format!(
                r#"<div class="step"><span class="step-number">{}</span><h3>{}</h3><p>{}</p></div>"#,
                s.step,
                html_escape(s.title),
                html_escape(s.description)
            ))
            .collect::<String>(),
    );
    render_page("Home", "/", &body)
}

pub(crate) fn render_feature_cards(features: &[Feature]) -> String {
    features
        .iter()
        .map(|f| {
            format!(
                r#"<div class="feature"><h3>{}</h3><p>{}</p></div>"#,
                html_escape(f.title),
                html_escape(f.description)
            )
        })
        .collect()
}
