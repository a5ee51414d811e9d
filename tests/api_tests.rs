mod common;

use common::{StubGenerator, app};
use tenant_rights_backend::message::{ChatResponse, ErrorBody, StatusResponse};

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use tower::util::ServiceExt;

fn chat_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .header("origin", "http://localhost:5173")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_bytes(response: Response) -> axum::body::Bytes {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_chat_endpoint() {
    let stub = StubGenerator::replying("No, written notice is required.");
    let app = app(stub.clone(), Some("test-key"));

    let response = app
        .oneshot(chat_request(
            r#"{"message": "Can my landlord evict me without notice?"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let chat_resp: ChatResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(chat_resp.response, "No, written notice is required.");
    assert_eq!(stub.calls(), 1);
}

#[tokio::test]
async fn test_prompt_carries_persona_and_question() {
    let stub = StubGenerator::replying("ok");
    let app = app(stub.clone(), Some("test-key"));

    for question in ["Is my deposit refundable?", "What about rent increases?"] {
        let body = serde_json::json!({ "message": question }).to_string();
        let response = app.clone().oneshot(chat_request(&body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let prompts = stub.prompts();
    assert_eq!(prompts.len(), 2);
    for (prompt, question) in prompts.iter().zip(["Is my deposit refundable?", "What about rent increases?"]) {
        assert!(prompt.contains("California tenant rights"));
        assert!(prompt.contains("consult a lawyer"));
        assert!(prompt.contains(&format!("User question: {question}")));
        assert!(prompt.ends_with("Your response:"));
    }
}

#[tokio::test]
async fn test_empty_message_is_rejected() {
    let stub = StubGenerator::replying("unused");
    let app = app(stub.clone(), Some("test-key"));

    for body in [r#"{"message": ""}"#, r#"{"message": "   "}"#] {
        let response = app.clone().oneshot(chat_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let err: ErrorBody = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(!err.detail.is_empty());
    }

    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let stub = StubGenerator::replying("unused");
    let app = app(stub.clone(), Some("test-key"));

    for body in ["{}", r#"{"message": 42}"#, "not json"] {
        let response = app.clone().oneshot(chat_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        let err: ErrorBody = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(!err.detail.is_empty());
    }

    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn test_missing_credential_is_configuration_error() {
    let stub = StubGenerator::replying("unused");
    let app = app(stub.clone(), None);

    let response = app.oneshot(chat_request(r#"{"message": "test"}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let err: ErrorBody = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(err.detail.contains("Configuration error"));
    assert!(err.detail.contains("GOOGLE_API_KEY"));
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn test_provider_failure_is_server_error() {
    let stub = StubGenerator::failing(429);
    let app = app(stub.clone(), Some("secret-key-123"));

    let response = app.oneshot(chat_request(r#"{"message": "test"}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    let err: ErrorBody = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(err.detail.starts_with("Error processing request:"));
    assert!(err.detail.contains("Quota exceeded"));
    assert!(!err.detail.contains("secret-key-123"));
    assert_eq!(stub.calls(), 1);
}

#[tokio::test]
async fn test_root_reports_ok_without_credential() {
    let app = app(StubGenerator::replying("unused"), None);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header("origin", "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let status: StatusResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(status.status, "ok");
    assert!(status.message.contains("is running"));
}

#[tokio::test]
async fn test_preflight_without_credential() {
    let stub = StubGenerator::replying("unused");
    let app = app(stub.clone(), None);

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/chat")
                .header("origin", "http://localhost:5173")
                .header("access-control-request-method", "POST")
                .header("access-control-request-headers", "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers().clone();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST, OPTIONS");
    assert_eq!(headers.get_all(header::ACCESS_CONTROL_ALLOW_METHODS).iter().count(), 1);
    assert!(body_bytes(response).await.is_empty());
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn test_chat_response_carries_cors_headers() {
    let app = app(StubGenerator::replying("answer"), Some("test-key"));

    let response = app
        .oneshot(chat_request(r#"{"message": "hello"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST, OPTIONS");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "*");
}
