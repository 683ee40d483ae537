//! JobLink admin API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Client as HttpClient, Method, StatusCode, Url};
use serde_json::Value;

use super::api::{AuthApi, ListingApi, ModerationApi};
use super::models::{AuthResponse, Credentials, DashboardStats, Payload, RecordList};
use super::retry::RetryPolicy;
use super::session::Session;
use crate::config::DEFAULT_API_HOST;
use crate::error::{ApiError, ConfigError, Error, Result};

/// Path prefix for every admin endpoint
const ADMIN_PREFIX: &str = "admin";

/// Default per-request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport options for [`JobLinkClient`]
#[derive(Debug, Clone, Copy)]
pub struct ClientOptions {
    pub timeout: Duration,
    pub retry: RetryPolicy,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            retry: RetryPolicy::none(),
        }
    }
}

/// Body attached to an outgoing request
enum RequestBody {
    None,
    Empty,
    Json(Value),
}

/// JobLink admin API client.
///
/// Holds no mutable state. The session is fixed at construction; use
/// [`JobLinkClient::with_session`] to issue calls under a rotated token.
#[derive(Debug, Clone)]
pub struct JobLinkClient {
    http: HttpClient,
    base_url: Url,
    session: Session,
    retry: RetryPolicy,
}

impl JobLinkClient {
    /// Create a client against the default backend origin
    #[allow(dead_code)]
    pub fn new(session: Session) -> Result<Self> {
        Self::with_host(session, None, ClientOptions::default())
    }

    /// Create a client against a custom backend origin.
    ///
    /// `api_host` is the origin only (e.g. `http://localhost:8080`); the
    /// `/admin` prefix is appended here.
    pub fn with_host(
        session: Session,
        api_host: Option<&str>,
        options: ClientOptions,
    ) -> Result<Self> {
        let host = api_host.unwrap_or(DEFAULT_API_HOST);
        let base_url = admin_base_url(host)?;

        let http = HttpClient::builder()
            .timeout(options.timeout)
            .user_agent(concat!("joblink-admin/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            session,
            retry: options.retry,
        })
    }

    /// Same connection pool and options, different session
    #[allow(dead_code)]
    pub fn with_session(&self, session: Session) -> Self {
        Self {
            session,
            ..self.clone()
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the URL for an admin endpoint, encoding each path segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ConfigError::Invalid(format!("Invalid API host: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issue a GET, retrying network failures according to the retry policy
    async fn get(&self, segments: &[&str]) -> Result<Value> {
        let url = self.endpoint(segments)?;
        let mut attempt = 0;

        loop {
            match self
                .send(Method::GET, url.clone(), RequestBody::None, true)
                .await
            {
                Err(Error::Api(ApiError::Network(msg))) if attempt < self.retry.max_retries => {
                    let delay = self.retry.delay_for(attempt);
                    attempt += 1;
                    warn!(
                        "GET {} failed ({}); attempt {}/{}, retrying in {:?}",
                        url,
                        msg,
                        attempt,
                        self.retry.max_attempts(),
                        delay
                    );
                    tokio::time::sleep(delay).await;
                }
                other => return other,
            }
        }
    }

    /// Send a single request and decode the response body
    async fn send(
        &self,
        method: Method,
        url: Url,
        body: RequestBody,
        authorize: bool,
    ) -> Result<Value> {
        debug!("{} {}", method, url);

        let mut request = self.http.request(method.clone(), url.clone());

        let mut sent_token = false;
        if authorize {
            match self.session.authorization_header() {
                Some(header) => {
                    let mut value = HeaderValue::from_str(&header).map_err(|_| {
                        ConfigError::Invalid(
                            "Admin token contains characters not allowed in an HTTP header"
                                .to_string(),
                        )
                    })?;
                    value.set_sensitive(true);
                    request = request.header(AUTHORIZATION, value);
                    sent_token = true;
                }
                None => debug!("No admin token in session; {} {} sent unauthenticated", method, url),
            }
        }

        request = match body {
            RequestBody::None => request,
            RequestBody::Empty => request.body(Vec::<u8>::new()),
            RequestBody::Json(value) => request.json(&value),
        };

        let response = request.send().await.map_err(request_error)?;
        let status = response.status();
        let text = response.text().await.map_err(ApiError::from)?;

        debug!("{} {} -> {}", method, url, status);

        if status.is_success() {
            Ok(decode_body(&text))
        } else {
            Err(classify_failure(status, text, sent_token).into())
        }
    }
}

/// Parse the `{host}/admin` base URL
fn admin_base_url(host: &str) -> Result<Url> {
    let raw = format!("{}/{}", host.trim_end_matches('/'), ADMIN_PREFIX);
    let url = Url::parse(&raw)
        .map_err(|e| ConfigError::Invalid(format!("Invalid API host '{}': {}", host, e)))?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid(format!("Invalid API host '{}'", host)).into());
    }
    Ok(url)
}

/// Failures raised before anything reaches the wire are local, not network
fn request_error(err: reqwest::Error) -> Error {
    if err.is_builder() {
        ConfigError::Invalid(format!("Could not build request: {}", err)).into()
    } else {
        ApiError::from(err).into()
    }
}

/// Decode a success body without reshaping it.
///
/// A zero-length body becomes `null`; bodies that are not JSON are kept as a
/// string.
fn decode_body(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Map a non-success status to a typed error, preserving the backend body
fn classify_failure(status: StatusCode, body: String, sent_token: bool) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED if sent_token => ApiError::AuthExpired,
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => {
            if body.trim().is_empty() {
                ApiError::NotFound("Resource not found".to_string())
            } else {
                ApiError::NotFound(body)
            }
        }
        s if s.is_server_error() => ApiError::ServerError {
            status: s.as_u16(),
            body,
        },
        s => ApiError::Rejected {
            status: s.as_u16(),
            body,
        },
    }
}

#[async_trait]
impl AuthApi for JobLinkClient {
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthResponse> {
        let url = self.endpoint(&["authenticate"])?;
        let body = serde_json::to_value(credentials)?;
        let value = self
            .send(Method::POST, url, RequestBody::Json(body), false)
            .await?;
        Ok(AuthResponse::from(value))
    }
}

#[async_trait]
impl ListingApi for JobLinkClient {
    async fn dashboard_stats(&self) -> Result<DashboardStats> {
        Ok(DashboardStats::from(self.get(&["dashboard"]).await?))
    }

    async fn list_job_seekers(&self) -> Result<RecordList> {
        Ok(RecordList::from(self.get(&["jobseekers"]).await?))
    }

    async fn list_recruiters(&self) -> Result<RecordList> {
        Ok(RecordList::from(self.get(&["recruiters"]).await?))
    }
}

#[async_trait]
impl ModerationApi for JobLinkClient {
    async fn delete_job_seeker(&self, id: &str) -> Result<Payload> {
        let url = self.endpoint(&["jobseekers", id])?;
        let value = self
            .send(Method::DELETE, url, RequestBody::None, true)
            .await?;
        Ok(Payload::from(value))
    }

    async fn delete_recruiter(&self, id: &str) -> Result<Payload> {
        let url = self.endpoint(&["recruiters", id])?;
        let value = self
            .send(Method::DELETE, url, RequestBody::None, true)
            .await?;
        Ok(Payload::from(value))
    }

    async fn verify_recruiter(&self, id: &str) -> Result<Payload> {
        let url = self.endpoint(&["recruiters", id, "verify"])?;
        let value = self
            .send(Method::PUT, url, RequestBody::Empty, true)
            .await?;
        Ok(Payload::from(value))
    }

    async fn unverify_recruiter(&self, id: &str) -> Result<Payload> {
        let url = self.endpoint(&["recruiters", id, "unverify"])?;
        let value = self
            .send(Method::PUT, url, RequestBody::Empty, true)
            .await?;
        Ok(Payload::from(value))
    }
}
