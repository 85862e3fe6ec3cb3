//! # API crate — the remote members document
//!
//! The dashboard has exactly one remote collaborator: a static JSON document
//! listing every user, fetched with a single unauthenticated `GET`. This crate
//! implements [`store::UserSource`] on top of `reqwest` so the same code runs in
//! the browser (fetch API) and on desktop (hyper).
//!
//! ## Modules
//!
//! | Item | Target | Purpose |
//! |------|--------|---------|
//! | [`HttpUserSource`] | all | `GET` the endpoint, map non-2xx and transport failures to [`store::SourceError`], decode the body. |
//! | [`decode_users`] | all | Parse a members document into records. |
//! | [`config`] | native | `ADMIN_USERS_ENDPOINT` override via `dotenvy`. |
//!
//! There is no pagination, filtering or sorting on the remote side; everything
//! after the fetch happens in [`store::UserList`].

use store::config::SourceConfig;
use store::{SourceError, UserRecord, UserSource};

#[cfg(not(target_arch = "wasm32"))]
pub mod config;

pub use store::config::DEFAULT_ENDPOINT;

/// Fetches the members document over HTTP.
#[derive(Clone, Debug)]
pub struct HttpUserSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpUserSource {
    /// A source for `endpoint` with no request timeout.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, SourceError> {
        Self::build(endpoint.into(), 0)
    }

    /// A source configured from the `[source]` section.
    pub fn from_config(config: &SourceConfig) -> Result<Self, SourceError> {
        Self::build(config.endpoint.clone(), config.timeout_secs)
    }

    #[cfg_attr(target_arch = "wasm32", allow(unused_variables))]
    fn build(endpoint: String, timeout_secs: u64) -> Result<Self, SourceError> {
        let builder = reqwest::Client::builder();
        // Browser fetch has no per-request timeout knob.
        #[cfg(not(target_arch = "wasm32"))]
        let builder = if timeout_secs > 0 {
            builder.timeout(std::time::Duration::from_secs(timeout_secs))
        } else {
            builder
        };
        let client = builder
            .build()
            .map_err(|e| SourceError::Transport(e.to_string()))?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl UserSource for HttpUserSource {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, SourceError> {
        tracing::info!("Fetching users from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Members endpoint returned {}", status);
            return Err(SourceError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;
        let users = decode_users(&body)?;

        tracing::info!("Fetched {} users", users.len());
        Ok(users)
    }
}

/// Parse a members document: a JSON array of `{id, name, email, role}` objects.
pub fn decode_users(body: &str) -> Result<Vec<UserRecord>, SourceError> {
    serde_json::from_str(body).map_err(|e| SourceError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const MEMBERS: &str = r#"[
        {"id": "1", "name": "Aaron Miles", "email": "aaron@mailinator.com", "role": "member"},
        {"id": "2", "name": "Aishwarya Naik", "email": "aishwarya@mailinator.com", "role": "admin"}
    ]"#;

    /// Answer a single request with a canned response and return its URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{addr}/members.json")
    }

    #[test]
    fn test_decode_members() {
        let users = decode_users(MEMBERS).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].name, "Aishwarya Naik");
    }

    #[test]
    fn test_decode_rejects_non_array() {
        let err = decode_users(r#"{"users": []}"#).unwrap_err();
        assert!(matches!(err, SourceError::Decode(_)));
    }

    #[test]
    fn test_from_config_keeps_endpoint() {
        let config = SourceConfig::default();
        let source = HttpUserSource::from_config(&config).unwrap();
        assert_eq!(source.endpoint(), DEFAULT_ENDPOINT);
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let url = serve_once("200 OK", MEMBERS).await;
        let source = HttpUserSource::new(url).unwrap();

        let users = source.fetch_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, "1");
    }

    #[tokio::test]
    async fn test_fetch_non_2xx_is_status_error() {
        let url = serve_once("404 Not Found", "[]").await;
        let source = HttpUserSource::new(url).unwrap();

        let err = source.fetch_users().await.unwrap_err();
        assert_eq!(err, SourceError::Status { status: 404 });
    }

    #[tokio::test]
    async fn test_fetch_bad_body_is_decode_error() {
        let url = serve_once("200 OK", "<html>oops</html>").await;
        let source = HttpUserSource::new(url).unwrap();

        let err = source.fetch_users().await.unwrap_err();
        assert!(matches!(err, SourceError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = HttpUserSource::new(format!("http://{addr}/members.json")).unwrap();
        let err = source.fetch_users().await.unwrap_err();
        assert!(matches!(err, SourceError::Transport(_)));
    }

    #[tokio::test]
    async fn test_load_through_user_list() {
        let url = serve_once("200 OK", MEMBERS).await;
        let source = HttpUserSource::new(url).unwrap();
        let mut list = store::UserList::new(1);

        list.load(&source).await;
        assert_eq!(list.load_state(), &store::LoadState::Loaded);
        assert_eq!(list.page().len(), 1);
        assert_eq!(list.pager().page_count(), 2);
    }
}
