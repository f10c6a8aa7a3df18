//! API integration tests
//!
//! Tests for the report generation endpoint and download links

use anyhow::Result;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use chrono::Duration;
use serde_json::{json, Value};
use statedoc::server::app::create_app;
use statedoc::storage::ArtifactStore;

async fn setup_test_server() -> Result<TestServer> {
    setup_test_server_with_store(ArtifactStore::with_default_ttl()).await
}

async fn setup_test_server_with_store(store: ArtifactStore) -> Result<TestServer> {
    let app = create_app(store, Some("*")).await?;
    let server = TestServer::new(app)?;

    Ok(server)
}

fn sample_state() -> Value {
    json!({
        "values": {
            "root_module": {
                "resources": [
                    {"type": "virtual-private-network",
                     "values": {"id": "vpc-1", "cidr_block": "10.0.0.0/16",
                                "tags": {"Name": "core"}}},
                    {"type": "subnet",
                     "values": {"id": "subnet-1", "vpc_id": "vpc-1",
                                "cidr_block": "10.0.1.0/24",
                                "availability_zone": "eu-west-1a",
                                "tags": {"Name": "public-a"}}},
                    {"type": "route-table",
                     "values": {"id": "rtb-1", "vpc_id": "vpc-1",
                                "tags": {"Name": "rtb-pub"}}},
                    {"type": "route-table-association",
                     "values": {"subnet_id": "subnet-1", "route_table_id": "rtb-1"}}
                ],
                "child_modules": [
                    {"resources": [
                        {"type": "compute-instance",
                         "values": {"id": "i-123", "instance_type": "t3.micro",
                                    "availability_zone": "eu-west-1a",
                                    "tags": {"Name": "web-1"}}}
                    ]}
                ]
            }
        }
    })
}

#[tokio::test]
async fn test_health_endpoint() -> Result<()> {
    let server = setup_test_server().await?;

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["service"], "statedoc");
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());

    Ok(())
}

#[tokio::test]
async fn test_report_generation_round_trip() -> Result<()> {
    let server = setup_test_server().await?;

    let response = server.post("/api/v1/reports").json(&sample_state()).await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    let preview = body["html_preview"].as_str().expect("preview present");
    assert!(preview.contains("Infrastructure Technical Report"));
    assert!(preview.contains("Virtual Private Network (VPC)"));
    assert!(preview.contains("rtb-pub"));
    // compute instance found inside a child module
    assert!(preview.contains("i-123"));

    let download_url = body["download_url"].as_str().expect("download url present");
    assert!(download_url.starts_with("/downloads/"));

    let response = server.get(download_url).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let disposition = response
        .headers()
        .get("content-disposition")
        .expect("disposition header")
        .to_str()?;
    assert!(disposition.contains("infrastructure-report-"));
    assert_eq!(response.text(), *preview);

    Ok(())
}

#[tokio::test]
async fn test_empty_root_module_yields_boilerplate_report() -> Result<()> {
    let server = setup_test_server().await?;

    let response = server
        .post("/api/v1/reports")
        .json(&json!({"values": {"root_module": {}}}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    let preview = body["html_preview"].as_str().expect("preview present");
    assert!(preview.contains("Infrastructure Technical Report"));
    assert!(!preview.contains("<table"));

    Ok(())
}

#[tokio::test]
async fn test_rootless_document_is_rejected() -> Result<()> {
    let server = setup_test_server().await?;

    let response = server
        .post("/api/v1/reports")
        .json(&json!({"invalid": "data"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(body["error"].is_string());

    Ok(())
}

#[tokio::test]
async fn test_non_json_body_is_a_client_error() -> Result<()> {
    let server = setup_test_server().await?;

    let response = server.post("/api/v1/reports").text("not json at all").await;

    assert!(response.status_code().is_client_error());

    Ok(())
}

#[tokio::test]
async fn test_unknown_download_token_is_not_found() -> Result<()> {
    let server = setup_test_server().await?;

    let response = server
        .get("/downloads/00000000-0000-0000-0000-000000000000")
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_expired_download_link_is_not_found() -> Result<()> {
    let server = setup_test_server_with_store(ArtifactStore::new(Duration::seconds(-1))).await?;

    let response = server.post("/api/v1/reports").json(&sample_state()).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    let download_url = body["download_url"].as_str().expect("download url present");

    let response = server.get(download_url).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_cors_headers() -> Result<()> {
    let server = setup_test_server().await?;

    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("http://localhost:3001"),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    // CORS headers should be present
    let headers = response.headers();
    assert!(headers.get("access-control-allow-origin").is_some());

    Ok(())
}
