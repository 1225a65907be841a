//! Browser transport backed by `gloo-net`.
//!
//! Client-side (hydrate): real `fetch` calls.
//! Server-side (SSR) and native builds: every send fails with a fixed message
//! since the API is only reachable from the browser.

#![allow(clippy::unused_async)]

use super::gateway::{Gateway, HttpRequest, HttpResponse, Transport};
use crate::config::ClientConfig;

/// Zero-sized handle; the browser owns the connection pool.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

/// Gateway type provided to screens through context.
pub type ApiClient = Gateway<FetchTransport>;

/// Build the browser gateway for the configured API origin.
pub fn api_client(config: &ClientConfig) -> ApiClient {
    Gateway::new(config.api_base_url.clone(), FetchTransport)
}

impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        #[cfg(feature = "hydrate")]
        {
            use super::gateway::Method;
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let outgoing = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| e.to_string())?;

            let response = outgoing.send().await.map_err(|e| e.to_string())?;
            let status = response.status();
            let status_text = response.status_text();
            let body = response.text().await.map_err(|e| e.to_string())?;
            Ok(HttpResponse { status, status_text, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err("not available on server".to_owned())
        }
    }
}
