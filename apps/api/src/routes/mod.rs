pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::matching::handlers as matching;
use crate::parsing::handlers as parsing;
use crate::state::AppState;

/// Headroom for multipart framing on top of the file size limit.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD;

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/parse-resume",
            post(parsing::handle_parse_resume).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/job-matches", post(matching::handle_job_matches))
        .route("/api/job-analysis", post(matching::handle_job_analysis))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::catalogue::StaticJobProvider;
    use crate::config::Config;
    use crate::matching::classifier::SkillClassifier;
    use crate::matching::jitter::NoJitter;
    use crate::models::job::JobPosting;
    use crate::parsing::MockResumeParser;

    fn test_state(jobs: Vec<JobPosting>, rank_by_computed_score: bool) -> AppState {
        AppState {
            config: Config {
                rank_by_computed_score,
                max_upload_bytes: 1024,
                ..Config::default()
            },
            jobs: Arc::new(StaticJobProvider::new(jobs).unwrap()),
            parser: Arc::new(MockResumeParser),
            classifier: Arc::new(SkillClassifier::default()),
            jitter: Arc::new(NoJitter),
        }
    }

    fn builtin_state() -> AppState {
        AppState {
            jobs: Arc::new(StaticJobProvider::builtin()),
            ..test_state(vec![], false)
        }
    }

    fn job(id: &str, score: f64, skills: &[&str]) -> JobPosting {
        JobPosting {
            id: id.to_string(),
            match_score: score,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn multipart_request(field: &str, content_type: &str, payload: &[u8]) -> Request<Body> {
        let boundary = "X-RESUME-BOUNDARY";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"cv.pdf\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(payload);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        Request::post("/api/parse-resume")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(builtin_state());
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_job_matches_ranks_builtin_catalogue() {
        let app = build_router(builtin_state());
        let (status, body) =
            post_json(app, "/api/job-matches", json!({ "resumeData": { "skills": ["React"] } }))
                .await;

        assert_eq!(status, StatusCode::OK);
        let ids: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|j| j["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["job-1", "job-2", "job-3", "job-4", "job-5", "job-6"]);
        assert_eq!(body[0]["salaryRange"], "$130,000 - $160,000");
    }

    #[tokio::test]
    async fn test_job_matches_keeps_catalogue_order_on_ties() {
        let app = build_router(test_state(
            vec![job("C", 0.5, &[]), job("A", 0.9, &[]), job("B", 0.9, &[])],
            false,
        ));
        let (_, body) = post_json(app, "/api/job-matches", json!({ "resumeData": {} })).await;
        let ids: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|j| j["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_job_matches_by_computed_score() {
        let app = build_router(test_state(
            vec![job("static-best", 0.99, &["Go"]), job("skill-fit", 0.10, &["React"])],
            true,
        ));
        let (_, body) = post_json(
            app,
            "/api/job-matches",
            json!({ "resumeData": { "skills": ["react"] } }),
        )
        .await;
        assert_eq!(body[0]["id"], "skill-fit");
        assert_eq!(body[0]["matchScore"], 1.0);
        assert_eq!(body[1]["matchScore"], 0.0);
    }

    #[tokio::test]
    async fn test_job_matches_empty_catalogue() {
        let app = build_router(test_state(vec![], false));
        let (status, body) = post_json(app, "/api/job-matches", json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_job_analysis_breakdown() {
        let app = build_router(test_state(
            vec![job("j", 0.8, &["react", "NODE.JS", "Docker"])],
            false,
        ));
        let (status, body) = post_json(
            app,
            "/api/job-analysis",
            json!({ "jobId": "j", "resumeData": { "skills": ["React", "Node.JS"] } }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let score = body["matchScore"].as_f64().unwrap();
        assert!((score - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(body["matchBand"], "fair");
        assert_eq!(body["skillAnalysis"].as_array().unwrap().len(), 3);
        assert_eq!(body["matchedSkills"][0]["name"], "react");
        assert_eq!(body["matchedSkills"][0]["importance"], "high");
        assert_eq!(body["matchedSkills"][1]["name"], "NODE.JS");
        assert_eq!(body["unmatchedSkills"][0]["name"], "Docker");
        assert_eq!(body["unmatchedSkills"][0]["importance"], "low");
        assert_eq!(body["unmatchedSkills"][0]["label"], "Preferred");
    }

    #[tokio::test]
    async fn test_job_analysis_null_skills_degrade_to_no_match() {
        let app = build_router(test_state(vec![job("j", 0.8, &["React"])], false));
        let (status, body) = post_json(
            app,
            "/api/job-analysis",
            json!({ "jobId": "j", "resumeData": { "skills": null } }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matchedSkills"], json!([]));
        assert_eq!(body["unmatchedSkills"][0]["matched"], false);
    }

    #[tokio::test]
    async fn test_job_analysis_unknown_job_is_404() {
        let app = build_router(builtin_state());
        let (status, body) =
            post_json(app, "/api/job-analysis", json!({ "jobId": "job-99" })).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_parse_resume_with_mock_parser() {
        let app = build_router(builtin_state());
        let response = app
            .oneshot(multipart_request("resume", crate::parsing::PDF, b"%PDF-1.4"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["name"], "Alex Johnson");
        assert_eq!(body["completenessScore"], 75);
    }

    #[tokio::test]
    async fn test_parse_resume_rejects_wrong_type() {
        let app = build_router(builtin_state());
        let response = app
            .oneshot(multipart_request("resume", "text/plain", b"hello"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_parse_resume_requires_resume_field() {
        let app = build_router(builtin_state());
        let response = app
            .oneshot(multipart_request("file", crate::parsing::PDF, b"%PDF"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_parse_resume_rejects_oversized_file() {
        let app = build_router(builtin_state());
        let response = app
            .oneshot(multipart_request("resume", crate::parsing::PDF, &[b'x'; 2048]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_parse_resume_body_over_route_limit_is_413() {
        let app = build_router(builtin_state());
        let response = app
            .oneshot(multipart_request(
                "resume",
                crate::parsing::PDF,
                &vec![b'x'; 200 * 1024],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
        assert_eq!(body["error"]["message"], "Maximum file size is 1024 bytes");
    }

    #[tokio::test]
    async fn test_job_analysis_missing_job_id_uses_error_envelope() {
        let app = build_router(builtin_state());
        let (status, body) = post_json(
            app,
            "/api/job-analysis",
            json!({ "resumeData": { "skills": ["React"] } }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"].as_str().unwrap().contains("jobId"));
    }

    #[tokio::test]
    async fn test_job_matches_malformed_json_uses_error_envelope() {
        let app = build_router(builtin_state());
        let request = Request::post("/api/job-matches")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{ not json"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
