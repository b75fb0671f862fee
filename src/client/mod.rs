//! HTTP client for page and media fetches.

use reqwest::{header, Client, RequestBuilder, Response};

use crate::error::{Error, Result};

/// HTTP client carrying the header policy for every outbound request.
///
/// The cookie header is resolved once at start-up and held here for the
/// duration of the run; there is no ambient cookie state.
pub struct PageClient {
    client: Client,
    cookie_header: Option<String>,
}

impl PageClient {
    /// Build a client with the given User-Agent and optional Cookie
    /// header value.
    pub fn new(user_agent: &str, cookie_header: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Network(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            cookie_header,
        })
    }

    /// Attach the Cookie header when one is configured.
    fn apply_headers(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.cookie_header {
            Some(cookie) => request.header(header::COOKIE, cookie),
            None => request,
        }
    }

    /// Fetch the target page and return the full decoded body as text.
    ///
    /// No retry, no explicit timeout; redirects follow reqwest's
    /// default policy.
    pub async fn fetch_page(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);

        let response = self
            .apply_headers(self.client.get(url))
            .send()
            .await
            .map_err(|e| Error::Network(format!("GET {}: {}", url, e)))?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(Error::HttpStatus {
                status,
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }

    /// Fetch a media URL for streaming consumption.
    ///
    /// Returns the response so the caller can pipe `bytes_stream` to
    /// disk chunk by chunk.
    pub async fn fetch_media(&self, url: &str) -> Result<Response> {
        tracing::debug!("GET {} (streaming)", url);

        let response = self
            .apply_headers(self.client.get(url))
            .send()
            .await
            .map_err(|e| Error::Network(format!("GET {}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(Error::Download(format!(
                "HTTP {} fetching {}",
                response.status(),
                url
            )));
        }

        Ok(response)
    }
}
