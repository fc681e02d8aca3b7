//! Upload tests against a local `tiny_http` stub standing in for the image host.

use std::io::{Read, Write};
use std::path::PathBuf;
use std::thread::JoinHandle;

use pretty_assertions::assert_eq;
use pravo_config::UploadConfig;
use pravo_relay::{ImageRelay, RelayError};
use tempfile::TempDir;

struct CapturedRequest {
    method: String,
    url: String,
    content_type: String,
    body: Vec<u8>,
}

/// Serve exactly one request with the given status and body, then stop.
fn serve_once(status: u16, body: &'static str) -> (String, JoinHandle<CapturedRequest>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("stub should bind");
    let port = server
        .server_addr()
        .to_ip()
        .map(|a| a.port())
        .expect("stub should have a port");

    let handle = std::thread::spawn(move || {
        let mut request = server.recv().expect("stub should receive a request");
        let mut captured = Vec::new();
        request
            .as_reader()
            .read_to_end(&mut captured)
            .expect("body should read");
        let content_type = request
            .headers()
            .iter()
            .find(|h| h.field.equiv("Content-Type"))
            .map(|h| h.value.as_str().to_string())
            .unwrap_or_default();
        let method = request.method().as_str().to_string();
        let url = request.url().to_string();

        let header = tiny_http::Header::from_bytes("Content-Type", "application/json")
            .expect("header should build");
        let response = tiny_http::Response::from_string(body)
            .with_status_code(status)
            .with_header(header);
        request.respond(response).expect("stub should respond");

        CapturedRequest {
            method,
            url,
            content_type,
            body: captured,
        }
    });

    (format!("http://127.0.0.1:{port}"), handle)
}

fn relay_for(endpoint: &str) -> ImageRelay {
    ImageRelay::new(&UploadConfig {
        cloud_name: "lviv".into(),
        upload_preset: "ml_default".into(),
        endpoint: endpoint.into(),
        ..Default::default()
    })
    .expect("relay should build")
}

fn write_photo(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("photo.jpg");
    let mut file = std::fs::File::create(&path).unwrap();
    // JPEG SOI marker plus filler; the host never decodes it here.
    file.write_all(&[0xFF, 0xD8, 0xFF, 0xE0, b'p', b'r', b'a', b'v', b'o'])
        .unwrap();
    path
}

#[tokio::test]
async fn upload_returns_secure_url_on_success() {
    let (endpoint, handle) = serve_once(
        200,
        r#"{"secure_url": "https://res.cloudinary.com/lviv/image/upload/v1/photo.jpg"}"#,
    );
    let dir = TempDir::new().unwrap();
    let photo = write_photo(&dir);

    let url = relay_for(&endpoint).upload(&photo).await;
    assert_eq!(
        url.as_deref(),
        Some("https://res.cloudinary.com/lviv/image/upload/v1/photo.jpg")
    );

    let captured = handle.join().unwrap();
    assert_eq!(captured.method, "POST");
    assert_eq!(captured.url, "/lviv/image/upload");
    assert!(captured.content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&captured.body);
    assert!(body.contains("name=\"file\"; filename=\"upload.jpg\""));
    assert!(body.contains("Content-Type: image/jpeg"));
    assert!(body.contains("name=\"upload_preset\""));
    assert!(body.contains("ml_default"));
    assert!(body.contains("name=\"cloud_name\""));
    assert!(body.contains("lviv"));
}

#[tokio::test]
async fn non_success_status_yields_none() {
    let (endpoint, handle) = serve_once(400, r#"{"error": {"message": "Upload preset not found"}}"#);
    let dir = TempDir::new().unwrap();
    let photo = write_photo(&dir);

    let relay = relay_for(&endpoint);
    assert!(relay.upload(&photo).await.is_none());
    handle.join().unwrap();
}

#[tokio::test]
async fn non_success_status_keeps_provider_message() {
    let (endpoint, handle) = serve_once(401, r#"{"error": {"message": "Unknown API key"}}"#);
    let dir = TempDir::new().unwrap();
    let photo = write_photo(&dir);

    let err = relay_for(&endpoint).try_upload(&photo).await.unwrap_err();
    match err {
        RelayError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Unknown API key");
        }
        other => panic!("unexpected error: {other}"),
    }
    handle.join().unwrap();
}

#[tokio::test]
async fn success_without_secure_url_yields_none() {
    let (endpoint, handle) = serve_once(200, r#"{"public_id": "photo"}"#);
    let dir = TempDir::new().unwrap();
    let photo = write_photo(&dir);

    assert!(relay_for(&endpoint).upload(&photo).await.is_none());
    handle.join().unwrap();
}

#[tokio::test]
async fn unreachable_endpoint_yields_none() {
    // Bind then drop a listener so the port is known to be closed.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let dir = TempDir::new().unwrap();
    let photo = write_photo(&dir);

    let relay = relay_for(&format!("http://127.0.0.1:{port}"));
    assert!(relay.upload(&photo).await.is_none());
    assert!(matches!(
        relay.try_upload(&photo).await,
        Err(RelayError::Http(_))
    ));
}
