use std::collections::HashMap;

pub use clubsport_shared::protocol::HttpMethod;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::VecDeque;

// =========================================================
// HTTP interface abstraction
// =========================================================

/// Transport-level failure: no HTTP response was received.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("transport error: {0}")]
pub struct TransportError(pub String);

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(url: &str, method: HttpMethod) -> Self {
        Self {
            url: url.to_string(),
            method,
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body.to_string());
        self
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP transport used by the API gateway.
///
/// `?Send` because the browser fetch futures are not `Send`.
#[async_trait::async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError>;
}

// =========================================================
// Native client (reqwest)
// =========================================================

#[cfg(feature = "native")]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

#[cfg(feature = "native")]
impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[cfg(feature = "native")]
#[async_trait::async_trait(?Send)]
impl HttpClient for ReqwestHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match req.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &req.url);
        for (k, v) in req.headers {
            builder = builder.header(k, v);
        }
        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let resp = builder
            .send()
            .await
            .map_err(|e| TransportError(format!("Reqwest Error: {}", e)))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| TransportError(format!("Reqwest Body Error: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}

// =========================================================
// Test tool: MockHttpClient
// =========================================================

#[cfg(test)]
enum MockReply {
    Response(u16, String),
    Unreachable,
}

/// Scripted transport for tests.
///
/// Replies are queued per `(METHOD, url)`; the last one stays in place once the
/// queue is drained, so a single `mock_response` answers every call.
#[cfg(test)]
pub struct MockHttpClient {
    replies: RefCell<HashMap<(String, String), VecDeque<MockReply>>>,
    // (Method, URL, Headers, Body)
    pub requests: RefCell<Vec<(String, String, HashMap<String, String>, Option<String>)>>,
}

#[cfg(test)]
impl MockHttpClient {
    pub fn new() -> Self {
        Self {
            replies: RefCell::new(HashMap::new()),
            requests: RefCell::new(Vec::new()),
        }
    }

    fn push(&self, method: HttpMethod, url: &str, reply: MockReply) {
        self.replies
            .borrow_mut()
            .entry((method.as_str().to_string(), url.to_string()))
            .or_default()
            .push_back(reply);
    }

    pub fn mock_response(&self, method: HttpMethod, url: &str, status: u16, body: serde_json::Value) {
        self.push(method, url, MockReply::Response(status, body.to_string()));
    }

    pub fn mock_raw(&self, method: HttpMethod, url: &str, status: u16, body: &str) {
        self.push(method, url, MockReply::Response(status, body.to_string()));
    }

    pub fn mock_unreachable(&self, method: HttpMethod, url: &str) {
        self.push(method, url, MockReply::Unreachable);
    }

    /// Number of recorded calls matching method and URL.
    pub fn count(&self, method: HttpMethod, url: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.0 == method.as_str() && r.1 == url)
            .count()
    }
}

#[cfg(test)]
#[async_trait::async_trait(?Send)]
impl HttpClient for MockHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = req.method.as_str().to_string();
        self.requests.borrow_mut().push((
            method.clone(),
            req.url.clone(),
            req.headers.clone(),
            req.body.clone(),
        ));

        let mut replies = self.replies.borrow_mut();
        let queue = match replies.get_mut(&(method, req.url.clone())) {
            Some(q) if !q.is_empty() => q,
            _ => {
                return Ok(HttpResponse {
                    status: 404,
                    body: r#"{"detail":"Not Found"}"#.to_string(),
                });
            }
        };
        let reply = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().map(|r| match r {
                MockReply::Response(s, b) => MockReply::Response(*s, b.clone()),
                MockReply::Unreachable => MockReply::Unreachable,
            })
        };

        match reply {
            Some(MockReply::Response(status, body)) => Ok(HttpResponse { status, body }),
            _ => Err(TransportError(format!("unreachable: {}", req.url))),
        }
    }
}
