//! Test helper module for running repositories against a scripted backend
//!
//! Each test starts its own local HTTP server on an ephemeral port. The
//! server answers requests with the scripted responses in order and records
//! what it received, so assertions can check the exact method, path and body
//! that went over the wire.

use std::collections::VecDeque;
use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use tiny_http::{Header, Response, Server};

use crate::config::ClientConfig;
use crate::http_repositories::HttpRepositories;
use crate::repository::customer::customer_repository::CustomerRepositoryImpl;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap_or(serde_json::Value::Null)
    }
}

#[derive(Debug, Clone)]
pub struct ScriptedResponse {
    pub status: u16,
    pub body: String,
}

impl ScriptedResponse {
    pub fn json(status: u16, value: serde_json::Value) -> Self {
        Self {
            status,
            body: value.to_string(),
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

/// A local backend that replays a fixed script of responses
///
/// The server thread is unblocked and joined on drop, so a test that makes
/// fewer requests than scripted still shuts down cleanly.
pub struct MockBackend {
    server: Arc<Server>,
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    worker: Option<JoinHandle<()>>,
}

impl MockBackend {
    pub fn start(script: Vec<ScriptedResponse>) -> Self {
        let server = Arc::new(Server::http("127.0.0.1:0").unwrap());
        let port = server.server_addr().to_ip().unwrap().port();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let worker = {
            let server = server.clone();
            let requests = requests.clone();
            std::thread::spawn(move || {
                let mut script: VecDeque<ScriptedResponse> = script.into();
                while let Some(reply) = script.pop_front() {
                    let mut request = match server.recv() {
                        Ok(request) => request,
                        Err(_) => break,
                    };

                    let mut body = String::new();
                    let _ = request.as_reader().read_to_string(&mut body);
                    requests.lock().unwrap().push(RecordedRequest {
                        method: request.method().to_string(),
                        path: request.url().to_string(),
                        body,
                    });

                    let content_type =
                        Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap();
                    let response = Response::from_string(reply.body)
                        .with_status_code(reply.status)
                        .with_header(content_type);
                    let _ = request.respond(response);
                }
            })
        };

        Self {
            server,
            base_url: format!("http://127.0.0.1:{port}"),
            requests,
            worker: Some(worker),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Requests received so far, in arrival order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// A customer repository pointed at this backend
    pub fn customer_repository(&self) -> Arc<CustomerRepositoryImpl> {
        let config = ClientConfig::new(&self.base_url, Duration::from_secs(5)).unwrap();
        HttpRepositories::new(config).unwrap().create_customer_repository()
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_backend_records_requests() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let backend = MockBackend::start(vec![ScriptedResponse::text(200, "pong")]);

        let client = reqwest::Client::new();
        let response = client
            .post(format!("{}/ping", backend.base_url()))
            .body("hello")
            .send()
            .await?;
        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(response.text().await?, "pong");

        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/ping");
        assert_eq!(requests[0].body, "hello");
        Ok(())
    }

    #[test]
    fn test_unused_script_shuts_down() {
        let backend = MockBackend::start(vec![ScriptedResponse::text(200, "never sent")]);
        assert!(backend.requests().is_empty());
        drop(backend);
    }
}
