//! `RestApi` against a local HTTP server serving canned responses.

use larek_data::{Api, FetchClient, FetchError, PostMethod, RestApi};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;

/// Serve `status` with `content_type` and `body` to every connection.
///
/// Returns the server origin and a channel yielding each raw request.
async fn serve(
    status: &'static str,
    content_type: &'static str,
    body: &'static str,
) -> (String, mpsc::UnboundedReceiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let origin = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let request = read_request(&mut stream).await;
            let _ = tx.send(request);

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                content_type,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });

    (origin, rx)
}

async fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

#[tokio::test]
async fn test_get_returns_json() {
    let (origin, mut requests) = serve(
        "200 OK",
        "application/json",
        r#"{"total":1,"items":[{"id":"1"}]}"#,
    )
    .await;
    let api = RestApi::new(format!("{}/api/weblarek", origin));

    let body = api.get("/product/").await.unwrap();
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["id"], "1");

    let request = requests.recv().await.unwrap().to_lowercase();
    assert!(request.starts_with("get /api/weblarek/product/ http/1.1"));
    assert!(request.contains("accept: application/json"));
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let (origin, mut requests) =
        serve("200 OK", "application/json", r#"{"id":"order-1","total":750}"#).await;
    let api = RestApi::new(origin);

    let result = api
        .post("/order/", json!({ "items": ["1"], "total": 750 }), PostMethod::Post)
        .await
        .unwrap();
    assert_eq!(result["id"], "order-1");

    let request = requests.recv().await.unwrap();
    assert!(request.starts_with("POST /order/ HTTP/1.1"));
    assert!(request.to_lowercase().contains("content-type: application/json"));
    assert!(request.ends_with(r#"{"items":["1"],"total":750}"#));
}

#[tokio::test]
async fn test_server_error_message() {
    let (origin, _requests) =
        serve("500 Internal Server Error", "application/json", r#"{"error":"boom"}"#).await;
    let api = RestApi::new(origin);

    match api.get("/product/").await {
        Err(FetchError::HttpError { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_body_is_parse_error() {
    let (origin, _requests) = serve("200 OK", "text/html", "<html>maintenance</html>").await;
    let api = RestApi::new(origin);

    let err = api.get("/product/").await.unwrap_err();
    assert!(matches!(err, FetchError::ParseError(_)));
}

#[tokio::test]
async fn test_response_headers_collected() {
    let (origin, _requests) = serve("404 Not Found", "text/plain", "missing").await;
    let client = FetchClient::new().with_base_url(origin);

    let response = client.get("/nothing/").send().await.unwrap();
    assert_eq!(response.status, 404);
    assert_eq!(response.header("Content-Type"), Some("text/plain"));
    assert_eq!(response.text().unwrap(), "missing");

    match response.error_for_status() {
        Err(err) => assert_eq!(err.to_string(), "HTTP 404: missing"),
        Ok(_) => panic!("404 accepted as success"),
    }
}

#[tokio::test]
async fn test_refused_connection_is_request_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = RestApi::new(format!("http://{}", addr));
    let err = api.get("/product/").await.unwrap_err();
    assert!(matches!(err, FetchError::RequestError(_)), "got {:?}", err);
}
