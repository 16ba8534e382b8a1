//! Navigation shell shared by every HTML view: document head, header with
//! route-aware links, and the footer.

pub const SITE_NAME: &str = "RE-SCAN ATS";

/// Header links in display order.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/upload", "Upload"),
    ("/results", "Results"),
    ("/about", "About"),
];

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Wraps a page body in the shared document, highlighting the link whose
/// path equals `active_path`.
pub fn render_page(title: &str, active_path: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | {site}</title>
</head>
<body>
    {header}
    <main>
{body}
    </main>
    {footer}
</body>
</html>"#,
        title = html_escape(title),
        site = SITE_NAME,
        header = render_header(active_path),
        body = body,
        footer = render_footer(),
    )
}

fn render_header(active_path: &str) -> String {
    let links: String = NAV_LINKS
        .iter()
        .map(|(path, label)| {
            if *path == active_path {
                format!(
                    r#"<a href="{path}" class="nav-link active" aria-current="page">{label}</a>"#
                )
            } else {
                format!(r#"<a href="{path}" class="nav-link">{label}</a>"#)
            }
        })
        .collect::<Vec<_>>()
        .join("\n            ");

    format!(
        r#"<header class="site-header">
        <a href="/" class="logo">{SITE_NAME}</a>
        <nav>
            {links}
        </nav>
    </header>"#
    )
}

fn render_footer() -> String {
    r#"<footer class="site-footer">
        <p>Created by <span class="author">Leavitt Nathan</span> &mdash; <span class="tagline">AI Engineer &amp; Business Technology Enthusiast</span></p>
        <a href="https://www.linkedin.com/in/leavitt-nathan-b88489347" target="_blank" rel="noopener noreferrer" aria-label="Visit Leavitt Nathan's LinkedIn profile">LinkedIn</a>
        <a href="mailto:leavittnathan008@gmail.com" aria-label="Send email to Leavitt Nathan">Email</a>
    </footer>"#
        .to_string()
}
