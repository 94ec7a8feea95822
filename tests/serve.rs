//! Runs the server on a real socket and talks plain HTTP/1.1 to it.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

use smart_market_api::app::{build_router, serve};
use smart_market_api::config::Config;
use smart_market_api::state::AppState;

#[tokio::test]
async fn test_serves_health_and_shuts_down() {
    let config = Config::from_lookup(|_| None).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(serve(
        listener,
        build_router(AppState::new(), &config),
        async {
            let _ = stop_rx.await;
        },
    ));

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();
    let raw = String::from_utf8(raw).unwrap();

    assert!(raw.starts_with("HTTP/1.1 200 OK"), "{raw}");
    let body = raw.split("\r\n\r\n").nth(1).unwrap();
    let json: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(json, serde_json::json!({"status": "ok"}));

    stop_tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}
