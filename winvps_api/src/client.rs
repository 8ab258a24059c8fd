//! HTTP client for the WinVPS REST API.
//!
//! Every call goes through the same three steps: [`Client::build_request`]
//! turns a method, path and optional body into a `reqwest::Request`, the
//! executor sends it and classifies the status, and the response envelope is
//! unwrapped into the caller's type. The per-resource methods live in
//! `endpoints`.

use std::time::Duration;

use reqwest::{
    header::{HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT},
    Method, Request, RequestBuilder, Response,
};
use serde::de::{DeserializeOwned, IgnoredAny};
use url::Url;

use crate::{
    query::RequestOptions,
    types::{decode_envelope, Paginated, Pagination},
    validation::Payload,
    Error,
};

const DEFAULT_BASE_URL: &str = "https://winvps.fozzy.com";
const API_PATH: &str = "/api/v2/";
const DEFAULT_USER_AGENT: &str = "winvps-rs";
const API_KEY_HEADER: &str = "API-KEY";
const JSON: &str = "application/json";

/// Request timeout for all API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Overrides applied when constructing a [`Client`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root. Any path is replaced with the versioned `/api/v2/` prefix.
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP client for the WinVPS API.
///
/// Holds one pooled `reqwest::Client` and is read-only after construction,
/// so a single instance can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    /// API root including the versioned path, always ending in `/`.
    base_url: Url,
    api_key: HeaderValue,
    user_agent: HeaderValue,
}

impl Client {
    /// Creates a new client pointing at the production API.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self, Error> {
        Self::with_config(api_key, ClientConfig::default().with_base_url(base_url))
    }

    pub fn with_config(api_key: &str, config: ClientConfig) -> Result<Self, Error> {
        let base_url = api_root(&config.base_url)?;

        let mut api_key = HeaderValue::from_str(api_key).map_err(|_| Error::InvalidApiKey)?;
        api_key.set_sensitive(true);
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| Error::InvalidUserAgent(config.user_agent.clone()))?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::HttpClient(e)
            })?;

        Ok(Self {
            http,
            base_url,
            api_key,
            user_agent,
        })
    }

    /// The versioned API root requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn get_url(&self, path: &[&str], options: Option<&RequestOptions>) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(path);
        Ok(match options {
            Some(options) => options.add_to_url(&url),
            None => url,
        })
    }

    /// Builds an outbound request without a body.
    ///
    /// `path` is split into segments, each percent-escaped on its own, so a
    /// machine name can never reach another endpoint.
    pub(crate) fn build_request(
        &self,
        method: Method,
        path: &[&str],
        options: Option<&RequestOptions>,
    ) -> Result<Request, Error> {
        finish_request(self.request_builder(method, path, options)?)
    }

    /// Builds an outbound request carrying `body` as JSON.
    ///
    /// The body is validated before anything is encoded. It is only attached
    /// to POST and PUT.
    pub(crate) fn build_json_request<B: Payload>(
        &self,
        method: Method,
        path: &[&str],
        body: &B,
        options: Option<&RequestOptions>,
    ) -> Result<Request, Error> {
        let body = encode_body(body)?;
        let attach = method == Method::POST || method == Method::PUT;
        let builder = self.request_builder(method, path, options)?;
        finish_request(if attach { builder.body(body) } else { builder })
    }

    fn request_builder(
        &self,
        method: Method,
        path: &[&str],
        options: Option<&RequestOptions>,
    ) -> Result<RequestBuilder, Error> {
        let url = self.get_url(path, options)?;
        let mut builder = self
            .http
            .request(method.clone(), url)
            .header(ACCEPT, JSON)
            .header(API_KEY_HEADER, self.api_key.clone())
            .header(USER_AGENT, self.user_agent.clone());
        if method == Method::POST || method == Method::PUT {
            builder = builder.header(CONTENT_TYPE, JSON);
        }
        Ok(builder)
    }

    /// Sends a request and fails on any status outside the success set.
    async fn send(&self, request: Request) -> Result<Response, Error> {
        let method = request.method().clone();
        let url = request.url().clone();
        tracing::debug!("{} {}", method, url);

        let resp = self.http.execute(request).await.map_err(|e| {
            tracing::error!("Failed to send {} {}: {}", method, url, e);
            Error::Transport(e)
        })?;

        let status = resp.status().as_u16();
        if is_success(status) {
            return Ok(resp);
        }

        let body = resp.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;
        let err = error_from_body(status, &body);
        tracing::error!("{} {} failed: {}", method, url, err);
        Err(err)
    }

    /// Sends a request and unwraps `data` as `T` along with the pagination cursor.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: Request,
    ) -> Result<(T, Pagination), Error> {
        let resp = self.send(request).await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        let envelope = decode_envelope::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&String::from_utf8_lossy(&body));
            tracing::error!("Failed to parse response: {} | body: {}", e, snippet);
            Error::Decode {
                status,
                detail: e.to_string(),
            }
        })?;

        match envelope.data {
            Some(data) => Ok((data, envelope.pagination)),
            None => {
                tracing::warn!("Response with status {} carried no data", status);
                Err(Error::MissingData { status })
            }
        }
    }

    /// Sends a request whose response body is irrelevant.
    pub(crate) async fn execute_empty(&self, request: Request) -> Result<(), Error> {
        self.send(request).await?;
        Ok(())
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &[&str]) -> Result<T, Error> {
        let request = self.build_request(Method::GET, path, None)?;
        let (data, _) = self.execute(request).await?;
        Ok(data)
    }

    pub(crate) async fn list<T: DeserializeOwned>(
        &self,
        path: &[&str],
        options: Option<&RequestOptions>,
    ) -> Result<Paginated<T>, Error> {
        let request = self.build_request(Method::GET, path, options)?;
        let (data, pagination) = self.execute(request).await?;
        Ok(Paginated { data, pagination })
    }

    /// Fetches every page of a list endpoint, `limit` items at a time.
    pub(crate) async fn list_all<T: DeserializeOwned>(
        &self,
        path: &[&str],
        limit: Option<i64>,
    ) -> Result<Vec<T>, Error> {
        let mut options = RequestOptions { limit, page: Some(1) };
        let mut items = Vec::new();
        loop {
            let page = self.list::<T>(path, Some(&options)).await?;
            items.extend(page.data);
            let requested = options.page.unwrap_or(1);
            match page.pagination.next_page() {
                // A server that ignores `page` would otherwise loop forever.
                Some(next) if next > requested => options = options.with_page(next),
                _ => break,
            }
        }
        Ok(items)
    }

    /// Sends a JSON body with POST or PUT. The body is validated first.
    pub(crate) async fn send_json<T, B>(&self, method: Method, path: &[&str], body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Payload,
    {
        let request = self.build_json_request(method, path, body, None)?;
        let (data, _) = self.execute(request).await?;
        Ok(data)
    }

    pub(crate) async fn post<T: DeserializeOwned>(&self, path: &[&str]) -> Result<T, Error> {
        let request = self.build_request(Method::POST, path, None)?;
        let (data, _) = self.execute(request).await?;
        Ok(data)
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &[&str]) -> Result<T, Error> {
        let request = self.build_request(Method::DELETE, path, None)?;
        let (data, _) = self.execute(request).await?;
        Ok(data)
    }
}

fn api_root(base_url: &str) -> Result<Url, Error> {
    let mut url = Url::parse(base_url).map_err(|e| {
        tracing::error!("Invalid base URL {}: {}", base_url, e);
        Error::InvalidBaseUrl(format!("{}: {}", base_url, e))
    })?;
    if url.cannot_be_a_base() {
        return Err(Error::InvalidBaseUrl(base_url.to_string()));
    }
    url.set_path(API_PATH);
    url.set_query(None);
    Ok(url)
}

/// Validates then serializes a request body.
fn encode_body<B: Payload>(body: &B) -> Result<Vec<u8>, Error> {
    if let Err(e) = body.validate() {
        tracing::warn!("Request payload rejected: {}", e);
        return Err(e.into());
    }
    serde_json::to_vec(body).map_err(Error::Serialization)
}

fn finish_request(builder: RequestBuilder) -> Result<Request, Error> {
    builder.build().map_err(|e| {
        tracing::error!("Failed to build request: {}", e);
        Error::InvalidRequest(e)
    })
}

fn is_success(status: u16) -> bool {
    matches!(status, 200 | 201 | 202 | 204 | 304)
}

fn error_from_body(status: u16, body: &[u8]) -> Error {
    if body.is_empty() {
        return Error::EmptyResponse { status };
    }
    let message = decode_envelope::<IgnoredAny>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| truncate_body(&String::from_utf8_lossy(body)));
    Error::Api { status, message }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
