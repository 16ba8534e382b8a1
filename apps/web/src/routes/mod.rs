pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::pages::handlers as pages;
use crate::results::handlers as results;
use crate::state::AppState;
use crate::upload::handlers as upload;

/// Headroom above the file limit for the other form parts and multipart framing.
const MULTIPART_OVERHEAD_BYTES: u64 = 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(
        usize::try_from(state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES)
            .unwrap_or(usize::MAX),
    );

    Router::new()
        .route("/health", get(health::health_handler))
        // Static views
        .route("/", get(pages::handle_home))
        .route("/about", get(pages::handle_about))
        // Upload flow
        .route(
            "/upload",
            get(upload::handle_upload_form)
                .post(upload::handle_upload_submit)
                .layer(upload_limit),
        )
        .route(
            "/api/v1/analyses",
            post(upload::handle_create_analysis).layer(upload_limit),
        )
        // Results
        .route("/results", get(results::handle_results))
        .route("/api/v1/results", get(results::handle_get_results))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::analysis::generator::MockAnalysisGenerator;
    use crate::config::Config;
    use crate::store::InMemoryResultStore;
    use crate::upload::flow::InFlightSubmissions;

    const BOUNDARY: &str = "rescan-test-boundary";

    fn test_app(max_upload_bytes: u64) -> Router {
        let config = Config {
            analysis_delay: Duration::ZERO,
            max_upload_bytes,
            ..Config::default()
        };
        let state = AppState {
            generator: Arc::new(MockAnalysisGenerator::new(
                config.analysis_delay,
                config.suggestion_range,
            )),
            store: Arc::new(InMemoryResultStore::new(config.session_ttl)),
            in_flight: InFlightSubmissions::default(),
            config,
        };
        build_router(state)
    }

    struct FilePart<'a> {
        name: &'a str,
        content_type: &'a str,
        size: usize,
    }

    fn multipart_body(file: Option<FilePart<'_>>, job_description: &str, mode: &str) -> Vec<u8> {
        let mut body = Vec::new();
        if let Some(file) = file {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                    file.name, file.content_type
                )
                .as_bytes(),
            );
            body.extend(std::iter::repeat(b'x').take(file.size));
            body.extend_from_slice(b"\r\n");
        }
        for (name, value) in [("jobDescription", job_description), ("analysisMode", mode)] {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn upload_request(uri: &str, body: Vec<u8>, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            );
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::from(body)).unwrap()
    }

    fn get_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn session_cookie(response: &Response) -> String {
        response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .expect("response should set the session cookie")
            .to_string()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn resume_pdf(size: usize) -> Option<FilePart<'static>> {
        Some(FilePart {
            name: "resume.pdf",
            content_type: "application/pdf",
            size,
        })
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_app(10 * 1024 * 1024)
            .oneshot(get_request("/health", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["store"], "memory");
    }

    #[tokio::test]
    async fn test_static_pages_render() {
        let app = test_app(10 * 1024 * 1024);
        let pages = [
            ("/", "How It Works"),
            ("/about", "Our Mission"),
            ("/upload", "Upload Your Resume"),
        ];
        for (path, marker) in pages {
            let response = app.clone().oneshot(get_request(path, None)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "GET {path}");
            assert!(body_text(response).await.contains(marker), "GET {path}");
        }
    }

    #[tokio::test]
    async fn test_results_without_session_redirects_to_upload() {
        let response = test_app(10 * 1024 * 1024)
            .oneshot(get_request("/results", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/upload");
        assert!(body_text(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_quick_upload_then_results() {
        let app = test_app(10 * 1024 * 1024);

        let response = app
            .clone()
            .oneshot(upload_request(
                "/upload",
                multipart_body(resume_pdf(2 * 1024 * 1024), "", "Quick"),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/results");
        let cookie = session_cookie(&response);

        let response = app
            .clone()
            .oneshot(get_request("/results", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("resume.pdf"));
        assert!(html.contains("with quick analysis completed"));
        assert!(html.contains("Consider adding a job description"));

        let response = app
            .oneshot(get_request("/api/v1/results", Some(&cookie)))
            .await
            .unwrap();
        let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
        let score = json["result"]["score"].as_u64().unwrap();
        assert!((60..100).contains(&score));
        assert_eq!(json["fileName"], "resume.pdf");
        let suggestions = json["result"]["suggestions"].as_array().unwrap().len();
        assert!((3..=6).contains(&suggestions));
    }

    #[tokio::test]
    async fn test_docx_upload_is_rejected_without_storing() {
        let app = test_app(10 * 1024 * 1024);
        let docx = FilePart {
            name: "resume.docx",
            content_type: "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            size: 1024,
        };

        let response = app
            .clone()
            .oneshot(upload_request("/upload", multipart_body(Some(docx), "", "Quick"), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers().get(header::LOCATION).is_none());
        let cookie = session_cookie(&response);
        let html = body_text(response).await;
        assert!(html.contains("Please upload a PDF file only."));
        assert!(html.contains("Upload Your Resume"));

        let response = app
            .oneshot(get_request("/api/v1/results", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_missing_file_is_rejected() {
        let response = test_app(10 * 1024 * 1024)
            .oneshot(upload_request("/upload", multipart_body(None, "", "Detailed"), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = body_text(response).await;
        assert!(html.contains("Please upload a PDF file."));
        assert!(html.contains(r#"value="Detailed" checked"#));
    }

    #[tokio::test]
    async fn test_oversized_pdf_is_rejected() {
        let limit = 1024 * 1024;
        let body = multipart_body(resume_pdf(limit as usize + 1), "", "Quick");
        let response = test_app(limit)
            .oneshot(upload_request("/upload", body, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = body_text(response).await;
        assert!(html.contains("File size must be less than 1MB."));
        assert!(html.contains("Maximum file size: 1MB"));
    }

    #[tokio::test]
    async fn test_body_over_transport_limit_reports_size_message() {
        let limit = 10 * 1024 * 1024;
        let file_size = (limit + MULTIPART_OVERHEAD_BYTES) as usize + 1024 * 1024;
        let response = test_app(limit)
            .oneshot(upload_request(
                "/upload",
                multipart_body(resume_pdf(file_size), "", "Quick"),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers().get(header::LOCATION).is_none());
        let html = body_text(response).await;
        assert!(html.contains("File size must be less than 10MB."));
    }

    #[tokio::test]
    async fn test_api_body_over_transport_limit_is_upload_rejection() {
        let limit = 1024 * 1024;
        let file_size = (limit + MULTIPART_OVERHEAD_BYTES) as usize + 1024;
        let response = test_app(limit)
            .oneshot(upload_request(
                "/api/v1/analyses",
                multipart_body(resume_pdf(file_size), "", "Quick"),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["error"]["code"], "UPLOAD_REJECTED");
        assert_eq!(json["error"]["message"], "File size must be less than 1MB.");
    }

    #[tokio::test]
    async fn test_job_description_changes_analysis_text() {
        let response = test_app(10 * 1024 * 1024)
            .oneshot(upload_request(
                "/api/v1/analyses",
                multipart_body(
                    resume_pdf(512),
                    "Senior backend engineer, Rust and Postgres",
                    "Optimize",
                ),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
        let analysis = json["result"]["analysis"].as_str().unwrap();
        assert!(analysis.contains("Job description matching has been incorporated"));
        assert!(analysis.contains("optimize"));
        assert!(!analysis.contains("Consider adding a job description"));
    }

    #[tokio::test]
    async fn test_api_rejects_unknown_mode() {
        let response = test_app(10 * 1024 * 1024)
            .oneshot(upload_request(
                "/api/v1/analyses",
                multipart_body(resume_pdf(512), "", "Thorough"),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_switching_views_does_not_change_stored_result() {
        let app = test_app(10 * 1024 * 1024);
        let response = app
            .clone()
            .oneshot(upload_request("/upload", multipart_body(resume_pdf(100), "", "Quick"), None))
            .await
            .unwrap();
        let cookie = session_cookie(&response);

        let before = body_text(
            app.clone()
                .oneshot(get_request("/api/v1/results", Some(&cookie)))
                .await
                .unwrap(),
        )
        .await;

        for view in ["overview", "professional", "keywords", "ai", "unknown"] {
            let response = app
                .clone()
                .oneshot(get_request(&format!("/results?view={view}"), Some(&cookie)))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "view={view}");
        }

        let after = body_text(
            app.oneshot(get_request("/api/v1/results", Some(&cookie)))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_resubmission_overwrites_previous_result() {
        let app = test_app(10 * 1024 * 1024);
        let response = app
            .clone()
            .oneshot(upload_request("/upload", multipart_body(resume_pdf(100), "", "Quick"), None))
            .await
            .unwrap();
        let cookie = session_cookie(&response);

        let second = FilePart {
            name: "updated.pdf",
            content_type: "application/pdf",
            size: 100,
        };
        let response = app
            .clone()
            .oneshot(upload_request(
                "/upload",
                multipart_body(Some(second), "", "Detailed"),
                Some(&cookie),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let response = app
            .oneshot(get_request("/results?view=overview", Some(&cookie)))
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(html.contains("updated.pdf"));
        assert!(html.contains("with detailed analysis completed"));
    }
}
