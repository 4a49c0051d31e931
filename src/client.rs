//! Remote data access, abstracting over the real HTTP client and test doubles

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[async_trait]
pub trait DataProvider: Send + Sync {
    /// GET `route` on the configured server and return the body as text
    async fn get_data(&self, route: &str) -> Result<String, FetchError>;
}

/// Plain HTTP client for `http://{server}:{port}`
///
/// The body is returned as-is; status codes and headers are not inspected.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self {
            http,
            base_url: base_url(config),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, route: &str) -> String {
        format!("{}{}", self.base_url, route)
    }
}

#[async_trait]
impl DataProvider for HttpClient {
    async fn get_data(&self, route: &str) -> Result<String, FetchError> {
        let url = self.url_for(route);
        debug!("FETCH: GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Body {
                url: url.clone(),
                source,
            })?;

        debug!("FETCH: {} -> {} ({} bytes)", url, status, body.len());
        Ok(body)
    }
}

/// `http://{server}:{port}` with no trailing slash; routes carry their own
pub fn base_url(config: &Config) -> String {
    format!("http://{}:{}", config.server, config.port)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    fn config_for(server: &str, port: u16) -> Config {
        Config {
            server: server.to_string(),
            port: port.to_string(),
            ..Config::default()
        }
    }

    /// Serve one canned HTTP response and report the request line received
    async fn serve_once(status_line: &'static str, body: &'static str) -> (u16, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let n = socket.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();
            let request_line = request.lines().next().unwrap_or_default().to_string();
            let _ = tx.send(request_line);

            let response = format!(
                "{}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        (port, rx)
    }

    #[test]
    fn test_base_url_from_config() {
        let config = Config::default();
        assert_eq!(base_url(&config), "http://localhost:8080");
    }

    #[test]
    fn test_url_for_appends_route_verbatim() {
        let client = HttpClient::new(&config_for("books.local", 9000)).unwrap();

        assert_eq!(client.base_url(), "http://books.local:9000");
        assert_eq!(client.url_for("/accounts/1200"), "http://books.local:9000/accounts/1200");
        assert_eq!(client.url_for(""), "http://books.local:9000");
    }

    #[tokio::test]
    async fn test_get_data_returns_body_text() {
        let (port, request_rx) = serve_once("HTTP/1.1 200 OK", "[]").await;
        let client = HttpClient::new(&config_for("127.0.0.1", port)).unwrap();

        let body = client.get_data("/transactions").await.unwrap();

        assert_eq!(body, "[]");
        let request_line = request_rx.await.unwrap();
        assert_eq!(request_line, "GET /transactions HTTP/1.1");
    }

    #[tokio::test]
    async fn test_get_data_ignores_status_code() {
        let (port, _request_rx) = serve_once("HTTP/1.1 404 Not Found", "no such route").await;
        let client = HttpClient::new(&config_for("127.0.0.1", port)).unwrap();

        let body = client.get_data("/missing").await.unwrap();

        assert_eq!(body, "no such route");
    }

    #[tokio::test]
    async fn test_get_data_connection_refused_is_request_error() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = HttpClient::new(&config_for("127.0.0.1", port)).unwrap();

        let result = client.get_data("/").await;

        match result {
            Err(FetchError::Request { url, .. }) => {
                assert_eq!(url, format!("http://127.0.0.1:{}/", port));
            }
            other => panic!("Expected request error, got {:?}", other),
        }
    }
}
