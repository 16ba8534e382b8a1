use crate::pages::content::{
    ABOUT_FEATURES, ANALYSIS_TIERS, HOW_OUR_AI_WORKS, KEY_BENEFITS, STATS,
};
use crate::pages::home::render_feature_cards;
use crate::pages::layout::{html_escape, render_page, SITE_NAME};

pub fn render_about() -> String {
    let stats: String = STATS
        .iter()
        .map(|s| {
            format!(
                r#"<div class="stat"><strong>{}</strong><span>{}</span></div>"#,
                html_escape(s.number),
                html_escape(s.label)
            )
        })
        .collect();

    let tiers: String = ANALYSIS_TIERS
        .iter()
        .map(|tier| {
            let items: String = tier
                .features
                .iter()
                .map(|f| format!("<li>{}</li>", html_escape(f)))
                .collect();
            format!(
                r#"<div class="tier"><h3>{}</h3><p>{}</p><ul>{items}</ul></div>"#,
                html_escape(tier.name),
                html_escape(tier.description)
            )
        })
        .collect();

    let how_it_works: String = HOW_OUR_AI_WORKS
        .iter()
        .map(|(heading, text)| {
            format!(
                "<li><strong>{}:</strong> <p>{}</p></li>",
                html_escape(heading),
                html_escape(text)
            )
        })
        .collect();

    let benefits: String = KEY_BENEFITS
        .iter()
        .map(|b| format!("<li>{}</li>", html_escape(b)))
        .collect();

    let body = format!(
        r#"<section class="hero">
        <h1>About {SITE_NAME}</h1>
        <p>We're revolutionizing the job search process with AI-powered resume optimization that helps candidates stand out in today's competitive market.</p>
    </section>
    <section class="mission">
        <h2>Our Mission</h2>
        <p>To democratize access to professional resume optimization by providing cutting-edge AI technology that levels the playing field for all job seekers, regardless of their background or resources.</p>
        <blockquote>"Every talented professional deserves a resume that showcases their true potential. Our AI technology ensures that your skills and experience get the attention they deserve."</blockquote>
    </section>
    <section class="stats">{stats}</section>
    <section class="features">
        <h2>Why Choose {SITE_NAME}?</h2>
        <p>Our platform combines years of recruitment expertise with cutting-edge AI technology to deliver unparalleled resume optimization.</p>
        {features}
    </section>
    <section class="analysis-options">
        <h2>Analysis Options</h2>
        <p>Choose the level of analysis that best fits your needs and timeline.</p>
        {tiers}
    </section>
    <section class="technology">
        <h2>Powered by Advanced AI</h2>
        <p>Our technology stack combines natural language processing, machine learning, and industry expertise.</p>
        <h3>How Our AI Works</h3>
        <ul>{how_it_works}</ul>
        <h4>Key Benefits</h4>
        <ul>{benefits}</ul>
    </section>
    <section class="cta">
        <h2>Ready to Optimize Your Resume?</h2>
        <p>Join thousands of professionals who have improved their job search success with {SITE_NAME}.</p>
        <a href="/upload" class="button primary">Start Your Analysis Now</a>
    </section>"#,
        features = render_feature_cards(ABOUT_FEATURES),
    );
    render_page("About", "/about", &body)
}
