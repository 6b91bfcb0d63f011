// Server loop module
// Accepts connections until the shutdown future resolves, then drains them

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use super::connection::{accept_connection, ConnectionTracker};
use crate::config::AppState;
use crate::logger;

/// Run the accept loop
///
/// Once `shutdown` resolves the listener is closed and the loop waits for
/// accepted connections to finish, for at most `performance.read_timeout`
/// seconds. Whatever is still open after that is left to be cancelled with
/// the runtime.
pub async fn run_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: impl Future<Output = ()>,
) {
    let connections = Arc::new(ConnectionTracker::new());
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &connections);
                    }
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }

            () = &mut shutdown => break,
        }
    }

    drop(listener);
    logger::log_server_stopped(connections.active());

    let limit = Duration::from_secs(state.config.performance.read_timeout);
    if !connections.wait_idle(limit).await {
        logger::log_warning(&format!(
            "{} connection(s) still open after {}s drain, closing",
            connections.active(),
            limit.as_secs()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::data::Dataset;
    use crate::server::create_listener;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    async fn request(addr: std::net::SocketAddr, path: &str) -> String {
        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        let req = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
        stream.write_all(req.as_bytes()).await.unwrap();
        let mut buf = String::new();
        stream.read_to_string(&mut buf).await.unwrap();
        buf
    }

    #[tokio::test]
    async fn test_serves_until_shutdown() {
        let mut config = Config::defaults();
        config.logging.access_log = false;
        let state = Arc::new(AppState::new(&config, Dataset::seeded()));

        let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();

        let server = tokio::spawn(run_server_loop(listener, state, async {
            let _ = rx.await;
        }));

        let response = request(addr, "/api/users/2").await;
        assert!(response.starts_with("HTTP/1.1 200 OK"));
        assert!(response.contains("access-control-allow-origin: *"));
        assert!(response.contains(r#""name":"Jane Smith""#));

        let response = request(addr, "/nope").await;
        assert!(response.starts_with("HTTP/1.1 404 Not Found"));
        assert!(response.contains(r#"{"success":false,"message":"Route not found"}"#));

        tx.send(()).unwrap();
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_shutdown_waits_for_in_flight_request() {
        let mut config = Config::defaults();
        config.logging.access_log = false;
        let state = Arc::new(AppState::new(&config, Dataset::seeded()));

        let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();

        let server = tokio::spawn(run_server_loop(listener, state, async {
            let _ = rx.await;
        }));

        // Half a request, then shut down while it is still being read
        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        stream.write_all(b"GET /api/posts/3 HTTP/1.1\r\n").await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        tx.send(()).unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!server.is_finished());

        stream
            .write_all(b"Host: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        assert!(response.starts_with("HTTP/1.1 200 OK"));
        assert!(response.contains(r#""title":"API Development""#));

        tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .unwrap()
            .unwrap();
    }
}
