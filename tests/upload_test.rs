//! Integration tests for multipart image upload.

mod common;

use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pawfeed::core::endpoint::Endpoint;
use pawfeed::core::http::ApiClient;
use pawfeed::core::request::RequestBuilder;
use pawfeed::core::upload::{image_part, prepare_image};
use pawfeed::error::NetworkError;

use common::fixtures::{make_test_api, make_test_api_config, make_test_image};
use common::logger::TestLogger;

fn count(haystack: &[u8], needle: &[u8]) -> usize {
    haystack.windows(needle.len()).filter(|w| *w == needle).count()
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    count(haystack, needle) > 0
}

fn boundary_of(request: &wiremock::Request) -> String {
    let content_type = request
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .expect("content-type header");
    content_type
        .split("boundary=")
        .nth(1)
        .expect("boundary parameter")
        .trim_matches('"')
        .to_string()
}

async fn mount_upload(server: &MockServer, status: u16, reply: &str) {
    mount_upload_times(server, status, reply, 1).await;
}

async fn mount_upload_times(server: &MockServer, status: u16, reply: &str, times: u64) {
    Mock::given(method("PUT"))
        .and(path("/api/image/upload"))
        .and(header_exists("content-type"))
        .respond_with(ResponseTemplate::new(status).set_body_string(reply))
        .expect(times)
        .mount(server)
        .await;
}

#[tokio::test]
async fn upload_sends_single_jpeg_part_and_returns_url() {
    let log = TestLogger::new("upload_sends_single_jpeg_part_and_returns_url");
    log.phase("setup");

    let server = MockServer::start().await;
    mount_upload(&server, 200, "https://cdn.example.com/img/abc.jpg").await;

    log.phase("execute");
    let url = make_test_api(&server.uri())
        .upload_image(&make_test_image(10, 10))
        .await
        .expect("upload");

    log.phase("verify");
    assert_eq!(url, "https://cdn.example.com/img/abc.jpg");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];

    let content_type = request
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .expect("content-type header");
    assert!(content_type.starts_with("multipart/form-data; boundary="));
    let boundary = content_type
        .split("boundary=")
        .nth(1)
        .expect("boundary parameter")
        .trim_matches('"');

    let body = &request.body;
    let delimiter = format!("--{boundary}");
    // One opening delimiter plus the closing `--boundary--`.
    assert_eq!(count(body, delimiter.as_bytes()), 2);
    assert!(body.starts_with(format!("{delimiter}\r\n").as_bytes()));
    assert!(contains(body, format!("{delimiter}--").as_bytes()));

    assert_eq!(count(body, b"filename="), 1);
    assert!(contains(body, b"name=\"file\""));
    assert!(contains(body, b"filename=\"image.jpg\""));
    assert!(contains(body, b"Content-Type: image/jpeg"));
    assert!(contains(body, &[0xFF, 0xD8, 0xFF]));
    log.finish_ok();
}

#[tokio::test]
async fn large_image_is_shrunk_before_upload() {
    let server = MockServer::start().await;
    mount_upload(&server, 200, "https://cdn.example.com/img/big.jpg").await;

    make_test_api(&server.uri())
        .upload_image(&make_test_image(1200, 900))
        .await
        .expect("upload");

    let requests = server.received_requests().await.unwrap();
    let body = &requests[0].body;
    let jpeg_start = body
        .windows(3)
        .position(|w| w == [0xFF, 0xD8, 0xFF])
        .expect("jpeg payload");
    let jpeg_end = body
        .windows(2)
        .rposition(|w| w == [0xFF, 0xD9])
        .expect("jpeg end marker");
    let decoded = image::load_from_memory(&body[jpeg_start..jpeg_end + 2]).expect("decodes");
    assert_eq!((decoded.width(), decoded.height()), (300, 225));
}

#[tokio::test]
async fn rejected_upload_is_server_error() {
    let server = MockServer::start().await;
    mount_upload(&server, 413, "image too large").await;

    let err = make_test_api(&server.uri())
        .upload_image(&make_test_image(10, 10))
        .await
        .unwrap_err();

    match err {
        NetworkError::Server { status, message } => {
            assert_eq!(status, 413);
            assert_eq!(message.as_deref(), Some("image too large"));
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn each_upload_uses_a_fresh_boundary() {
    let server = MockServer::start().await;
    mount_upload_times(&server, 200, "https://cdn.example.com/img/x.jpg", 2).await;

    let api = make_test_api(&server.uri());
    let image = make_test_image(10, 10);
    api.upload_image(&image).await.expect("first upload");
    api.upload_image(&image).await.expect("second upload");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    let first = boundary_of(&requests[0]);
    let second = boundary_of(&requests[1]);
    assert_ne!(first, second);
    assert!(count(&requests[1].body, format!("--{second}").as_bytes()) == 2);
}

#[tokio::test]
async fn caller_content_type_does_not_duplicate_multipart_header() {
    let server = MockServer::start().await;
    mount_upload(&server, 200, "https://cdn.example.com/img/y.jpg").await;

    let config = make_test_api_config(&server.uri());
    let jpeg = prepare_image(&make_test_image(10, 10)).unwrap();
    let request = RequestBuilder::endpoint(&config, Endpoint::UploadImage)
        .multipart_file(image_part(jpeg))
        .header("Content-Type", "text/plain")
        .build()
        .unwrap();
    let url = ApiClient::new(config)
        .unwrap()
        .send_text(request)
        .await
        .expect("upload");
    assert_eq!(url, "https://cdn.example.com/img/y.jpg");

    let requests = server.received_requests().await.unwrap();
    let content_types: Vec<_> = requests[0].headers.get_all("content-type").iter().collect();
    assert_eq!(content_types.len(), 1);
    assert!(
        content_types[0]
            .to_str()
            .unwrap()
            .starts_with("multipart/form-data; boundary=")
    );
}
