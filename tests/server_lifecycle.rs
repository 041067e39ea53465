//! Serve the registered application over TCP and shut it down.

use std::time::Duration;

use route_registry::config::AppConfig;
use route_registry::lifecycle::startup::build_application;
use route_registry::{HttpServer, Shutdown};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

#[tokio::test]
async fn test_serve_and_graceful_shutdown() {
    let config = AppConfig::default();
    let (app, report) = build_application(&config).unwrap();
    assert!(report.is_clean());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(app, &config.server);
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /api/v1/health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    assert!(response.starts_with("HTTP/1.1 200 OK"), "{}", response);
    assert!(response.contains("\"status\":\"ok\""));

    shutdown.trigger();
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not stop")
        .unwrap()
        .unwrap();
}
