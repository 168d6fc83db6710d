use crate::error::{BinSolverError, Result};
use crate::types::{ErrorResponse, PackRequest, PackResponse};
use log::debug;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};

/// Production origin of the BinSolver API
pub const DEFAULT_BASE_URL: &str = "https://api.binsolver.com";

/// Header carrying the API key on every request
pub const API_KEY_HEADER: &str = "x-api-key";

const FALLBACK_PACK_ERROR: &str = "Unknown error occurred during packing";

/// HTTP client for the BinSolver 3D bin packing REST API
///
/// The client holds no mutable state; it can be cloned cheaply and used from
/// multiple tasks with any number of calls in flight.
#[derive(Debug, Clone)]
pub struct BinSolverClient {
    client: Client,
    base_url: Url,
    api_key: String,
    headers: HeaderMap,
}

impl BinSolverClient {
    /// Create a client for the production API
    ///
    /// # Example
    ///
    /// ```no_run
    /// use binsolver_sdk::BinSolverClient;
    ///
    /// let client = BinSolverClient::new("your-api-key");
    /// ```
    pub fn new(api_key: impl Into<String>) -> Self {
        // The constant is a valid URL; parsing it cannot fail.
        let base_url = Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid");

        Self {
            client: Client::new(),
            base_url,
            api_key: api_key.into(),
            headers: HeaderMap::new(),
        }
    }

    /// Override the base URL, e.g. to point at a staging deployment or a
    /// local mock server in tests
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Result<Self> {
        self.base_url = Url::parse(base_url.as_ref())
            .map_err(|e| BinSolverError::InvalidUrl(e.to_string()))?;
        Ok(self)
    }

    /// Replace the underlying reqwest client
    ///
    /// This allows you to configure timeouts, proxies, etc.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Add a default header sent with every request
    ///
    /// The API key header is applied after these, so it cannot be displaced.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| BinSolverError::InvalidUrl(e.to_string()))?;

        // Insert the key after the extra headers so it always wins.
        let mut headers = self.headers.clone();
        let key = HeaderValue::from_str(&self.api_key).map_err(|_| {
            BinSolverError::InvalidRequest("API key is not a valid header value".to_string())
        })?;
        headers.insert(API_KEY_HEADER, key);

        Ok(self.client.request(method, url).headers(headers))
    }

    /// Check the health of the API server
    ///
    /// Returns `Ok(true)` iff the server answered with a success status; any
    /// other status folds into `Ok(false)` rather than an error, so health
    /// can be polled without an error-handling path. Transport failures
    /// still propagate.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use binsolver_sdk::BinSolverClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = BinSolverClient::new("your-api-key");
    /// let is_healthy = client.health().await?;
    /// println!("Server healthy: {}", is_healthy);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn health(&self) -> Result<bool> {
        let response = self.request(Method::GET, "/health")?.send().await?;

        debug!("GET /health -> {}", response.status());
        Ok(response.status().is_success())
    }

    /// Pack items into bins
    ///
    /// Issues exactly one `POST /pack` call. On success the response body is
    /// returned as-is; the client does not validate its contents. On a
    /// non-success status the server's error body is parsed best-effort and
    /// the call fails with [`BinSolverError::Api`] whose display is the
    /// server's message, or a fixed fallback when no message was readable.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use binsolver_sdk::{BinSolverClient, BinInput, ItemInput, Objective, PackRequest};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = BinSolverClient::new("your-api-key");
    ///
    /// let request = PackRequest {
    ///     bins: vec![BinInput::new(10.0, 10.0, 10.0).with_id("box")],
    ///     items: vec![ItemInput::new(5.0, 5.0, 5.0, 1)],
    ///     objective: Objective::MinBins,
    /// };
    ///
    /// let response = client.pack(request).await?;
    /// println!("Bins used: {}", response.stats.bins_used);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn pack(&self, request: PackRequest) -> Result<PackResponse> {
        let response = self
            .request(Method::POST, "/pack")?
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        debug!("POST /pack -> {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(pack_failure(status, &body));
        }

        let pack_response: PackResponse = response
            .json()
            .await
            .map_err(|e| BinSolverError::Parse(e.to_string()))?;

        Ok(pack_response)
    }
}

/// Translate a non-success pack response into an error
///
/// The body is interpreted as the known error schema when possible; a body
/// that does not parse, or parses without a message, falls back to a fixed
/// message. The parse attempt itself never fails the translation.
fn pack_failure(status: StatusCode, body: &str) -> BinSolverError {
    let detail = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|r| r.error);

    let code = detail.as_ref().and_then(|d| d.code.clone());
    let message = detail
        .and_then(|d| d.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| FALLBACK_PACK_ERROR.to_string());

    BinSolverError::Api {
        status: status.as_u16(),
        code,
        message,
    }
}
