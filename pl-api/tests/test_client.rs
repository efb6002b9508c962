//! Integration tests for the reqwest-backed client against a local listener.

mod common;

use pl_api::{EnquiryApi, Transport, ApiRequest};
use pl_core::error::PlError;
use pl_models::{EnquiryDraft, PropertyRef};

#[tokio::test]
async fn list_sends_auth_header_and_parses_envelope() {
    let server = common::serve_once(
        "200 OK",
        r#"{"data":[{"enquiry_id":"a","read":false},{"enquiry_id":"b","read":true}]}"#,
    )
    .await;
    let client = common::client_for(&server.api_url);

    let resp = client.list_enquiries("tok-123").await.unwrap();
    let list = resp.into_data().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].enquiry_id, "a");
    assert!(list[1].read);

    let raw = server.request.await.unwrap();
    assert!(raw.starts_with("GET /api/enquiries HTTP/1.1"));
    assert!(raw.to_ascii_lowercase().contains("authorization: tok-123"));
}

#[tokio::test]
async fn request_without_session_still_fires() {
    let server = common::serve_once("200 OK", r#"{"data":[]}"#).await;
    let client = common::client_for(&server.api_url);

    let resp = client.list_enquiries("").await.unwrap();
    assert!(resp.into_data().unwrap().is_empty());

    let raw = server.request.await.unwrap().to_ascii_lowercase();
    assert!(raw.contains("authorization:"));
}

#[tokio::test]
async fn create_posts_merged_body() {
    let server = common::serve_once(
        "201 Created",
        r#"{"status":200,"data":{"enquiry_id":"new","message":"Hi","userTo":"owner-1"}}"#,
    )
    .await;
    let client = common::client_for(&server.api_url);

    let draft = EnquiryDraft::new("Hi");
    let property = PropertyRef::new("p-1").with_name("Loft").with_owner("owner-1");
    let resp = client.create_enquiry("tok", &draft, &property).await.unwrap();
    assert!(resp.is_success());
    assert_eq!(resp.into_data().unwrap().enquiry_id, "new");

    let raw = server.request.await.unwrap();
    assert!(raw.starts_with("POST /api/enquiries HTTP/1.1"));
    let body = raw.split("\r\n\r\n").nth(1).unwrap();
    let json: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(json["property"]["property_id"], "p-1");
    assert_eq!(json["property"]["name"], "Loft");
    assert_eq!(json["userTo"], "owner-1");
    assert_eq!(json["message"], "Hi");
}

#[tokio::test]
async fn error_status_carries_json_payload() {
    let server = common::serve_once(
        "404 Not Found",
        r#"{"status":404,"message":"Enquiry not found"}"#,
    )
    .await;
    let client = common::client_for(&server.api_url);

    let err = client.delete_enquiry("tok", "missing").await.unwrap_err();
    match &err {
        PlError::ServerError { status, message, payload } => {
            assert_eq!(*status, 404);
            assert_eq!(message, "Enquiry not found");
            assert_eq!(payload.as_ref().unwrap()["status"], 404);
        }
        other => panic!("expected ServerError, got {other:?}"),
    }
    assert!(err.payload().is_some());

    let raw = server.request.await.unwrap();
    assert!(raw.starts_with("DELETE /api/enquiries/missing HTTP/1.1"));
}

#[tokio::test]
async fn error_status_without_json_has_no_payload() {
    let server = common::serve_once("502 Bad Gateway", "upstream down").await;
    let client = common::client_for(&server.api_url);

    let err = client
        .execute(ApiRequest::get("/enquiries", "tok"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(502));
    assert!(err.payload().is_none());
    assert!(err.to_string().contains("upstream down"));
    let _ = server.request.await;
}

#[tokio::test]
async fn empty_body_is_null() {
    let server = common::serve_once("200 OK", "").await;
    let client = common::client_for(&server.api_url);

    let resp = client.delete_enquiry("tok", "e-1").await.unwrap();
    assert!(resp.is_none());
    let _ = server.request.await;
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = common::client_for(&format!("http://{addr}/api"));
    let err = client.list_enquiries("tok").await.unwrap_err();
    assert!(err.is_transport(), "unexpected error: {err:?}");
    assert!(err.payload().is_none());
}
