//! One-shot HTTP responders for exercising the fetcher without the network.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Accept a single connection on an ephemeral port, answer it with
/// `HTTP/1.1 {status_line}` and `body`, and hand back the raw request head.
pub(crate) async fn serve_once(
    status_line: &'static str,
    body: &'static str,
) -> (String, JoinHandle<String>) {
    serve_once_with(status_line, &[], body).await
}

/// Like [`serve_once`], with extra response header lines. The listener is
/// dropped after the first connection, so any follow-up request is refused.
pub(crate) async fn serve_once_with(
    status_line: &'static str,
    headers: &[&str],
    body: &'static str,
) -> (String, JoinHandle<String>) {
    let extra: String = headers.iter().map(|h| format!("{}\r\n", h)).collect();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut head = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
            if head.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }

        let resp = format!(
            "HTTP/1.1 {}\r\n{}Content-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            extra,
            body.len(),
            body
        );
        socket.write_all(resp.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;

        String::from_utf8_lossy(&head).into_owned()
    });

    (format!("http://{}", addr), handle)
}

/// Base URL of a local port nothing is listening on.
pub(crate) fn refused_addr() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Accept one connection and never answer it.
pub(crate) async fn serve_silent() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(std::time::Duration::from_secs(30)).await;
    });

    format!("http://{}", addr)
}
