//! Browser transport for the API gateway
//!
//! Implements `clubsport::HttpClient` on top of `gloo-net` (window `fetch`).

use clubsport::{HttpClient, HttpMethod, HttpRequest, HttpResponse, TransportError};
use gloo_net::http::{Request, RequestBuilder};

/// `fetch`-backed client. Stateless, so it is freely copied into components.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

fn builder(method: HttpMethod, url: &str) -> RequestBuilder {
    match method {
        HttpMethod::Get => Request::get(url),
        HttpMethod::Post => Request::post(url),
        HttpMethod::Put => Request::put(url),
        HttpMethod::Patch => Request::patch(url),
        HttpMethod::Delete => Request::delete(url),
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = builder(req.method, &req.url);
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError(format!("request build failed: {}", e)))?;

        let resp = request
            .send()
            .await
            .map_err(|e| TransportError(format!("network error: {}", e)))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| TransportError(format!("response body unreadable: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}
