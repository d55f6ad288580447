use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::content::ContentService;
use crate::error::{Error, Result};
use crate::matches::MatchService;
use crate::ranked::RankedService;
use crate::status::StatusService;
use crate::Region;

/// Per-request modifier, applied after all default headers so it can
/// override any of them.
pub type RequestOption = Box<dyn Fn(ureq::Request) -> ureq::Request>;

/// Client for the Valorant API.
///
/// Construction and the `with_*` builders are the only mutation points;
/// service calls read the configuration but never change it, so a `&Client`
/// can be shared freely across threads.
pub struct Client {
    agent: ureq::Agent,
    base_url: String,
    user_agent: String,
    timeout: Option<Duration>,
    token: Option<String>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a client against the default (na) region with a default
    /// agent and user agent.
    pub fn new() -> Self {
        Client {
            agent: ureq::AgentBuilder::new().build(),
            base_url: Region::default().base_url(),
            user_agent: crate::DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            token: None,
        }
    }

    /// Creates a client that issues requests through a pre-configured agent.
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Client { agent, ..Self::new() }
    }

    /// Creates a client from an environment-derived [`Config`]: region plus
    /// auth token.
    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .with_region(config.region)
            .with_auth_token(config.api_key.clone())
    }

    /// Attaches an API token, sent as `X-Riot-Token` on every subsequent
    /// request.
    ///
    /// The agent is rebuilt around the token-injecting middleware; an agent
    /// supplied via [`Client::with_agent`] is replaced.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self.rebuild_agent();
        self
    }

    /// Selects the region, rewriting the base URL for all subsequent
    /// requests.
    pub fn with_region(mut self, region: Region) -> Self {
        self.base_url = region.base_url();
        self
    }

    /// Overrides the base URL directly. Must end with a trailing slash.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the user agent sent with every request.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets a per-call deadline. A transport failure observed after the
    /// deadline has elapsed is reported as [`Error::Timeout`] instead of the
    /// raw transport error.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self.rebuild_agent();
        self
    }

    fn rebuild_agent(&mut self) {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(token) = &self.token {
            builder = builder.middleware(AuthToken {
                token: token.clone(),
            });
        }
        self.agent = builder.build();
    }

    pub fn content(&self) -> ContentService<'_> {
        ContentService::new(self)
    }

    pub fn matches(&self) -> MatchService<'_> {
        MatchService::new(self)
    }

    pub fn ranked(&self) -> RankedService<'_> {
        RankedService::new(self)
    }

    pub fn status(&self) -> StatusService<'_> {
        StatusService::new(self)
    }

    /// Builds a request for a path relative to the base URL (no leading
    /// slash). A body, when given, is JSON-encoded and sets the JSON
    /// content type.
    pub fn new_request<B: Serialize>(
        &self,
        method: &str,
        path: &str,
        body: Option<&B>,
    ) -> Result<PreparedRequest> {
        self.new_request_with_options(method, path, body, &[])
    }

    /// Like [`Client::new_request`], additionally applying per-request
    /// modifiers last.
    pub fn new_request_with_options<B: Serialize>(
        &self,
        method: &str,
        path: &str,
        body: Option<&B>,
        opts: &[RequestOption],
    ) -> Result<PreparedRequest> {
        if !self.base_url.ends_with('/') {
            return Err(Error::BaseUrl(self.base_url.clone()));
        }

        let url = format!("{}{}", self.base_url, path);
        let mut request = self.agent.request(method, &url);

        let body = match body {
            Some(value) => {
                request = request.set("Content-Type", "application/json");
                Some(serde_json::to_string(value).map_err(Error::Serialize)?)
            }
            None => None,
        };

        request = request.set("User-Agent", &self.user_agent);

        for opt in opts {
            request = opt(request);
        }

        Ok(PreparedRequest { request, body })
    }

    /// GET request with no body, the shape every service method uses.
    pub(crate) fn get(&self, path: &str) -> Result<PreparedRequest> {
        self.new_request("GET", path, None::<&()>)
    }

    /// Executes a request and classifies the outcome without touching the
    /// body: statuses in [200, 299] are success, everything else becomes an
    /// [`Error::Api`] built from the error envelope when one decodes.
    pub fn bare_send(&self, prepared: PreparedRequest) -> Result<ureq::Response> {
        let started = Instant::now();
        let PreparedRequest { request, body } = prepared;

        let result = match body {
            Some(body) => request.send_string(&body),
            None => request.call(),
        };

        match result {
            Ok(response) if (200..300).contains(&response.status()) => Ok(response),
            Ok(response) => Err(error_from_response(response)),
            Err(ureq::Error::Status(_, response)) => Err(error_from_response(response)),
            Err(ureq::Error::Transport(transport)) => {
                Err(self.transport_error(transport, started))
            }
        }
    }

    /// Executes a request and decodes a JSON body into `T`.
    ///
    /// An empty 2xx body is legal and yields `Ok(None)`.
    pub fn send<T: DeserializeOwned>(&self, prepared: PreparedRequest) -> Result<Option<T>> {
        let response = self.bare_send(prepared)?;
        let body = response.into_string().map_err(Error::Body)?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&body).map(Some).map_err(Error::Decode)
    }

    fn transport_error(&self, transport: ureq::Transport, started: Instant) -> Error {
        if transport.kind() == ureq::ErrorKind::InvalidUrl {
            return Error::Url(transport.to_string());
        }
        // An already-elapsed deadline supersedes the raw transport failure
        // it caused.
        match self.timeout {
            Some(timeout) if started.elapsed() >= timeout => Error::Timeout(timeout),
            _ => Error::Transport(transport.to_string()),
        }
    }
}

/// A request ready to send, with its JSON body held separately until
/// execution.
#[derive(Debug)]
pub struct PreparedRequest {
    request: ureq::Request,
    body: Option<String>,
}

impl PreparedRequest {
    /// Appends query parameters. Option structs hand over exactly their
    /// non-default fields, so default options append nothing.
    pub(crate) fn query(mut self, pairs: Vec<(&'static str, String)>) -> Self {
        for (key, value) in pairs {
            self.request = self.request.query(key, &value);
        }
        self
    }
}

/// Sets `X-Riot-Token` on every outgoing request.
struct AuthToken {
    token: String,
}

impl ureq::Middleware for AuthToken {
    fn handle(
        &self,
        request: ureq::Request,
        next: ureq::MiddlewareNext,
    ) -> std::result::Result<ureq::Response, ureq::Error> {
        next.handle(request.set("X-Riot-Token", &self.token))
    }
}

/// Riot error envelope: `{"status": {"message": ..., "status_code": ...}}`.
#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    status: ErrorStatus,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorStatus {
    #[serde(default)]
    message: String,
}

/// Best-effort mapping of a non-2xx response to [`Error::Api`]. A missing or
/// undecodable body still yields the HTTP status, with an empty message.
fn error_from_response(response: ureq::Response) -> Error {
    let status_code = response.status();
    let envelope = response
        .into_string()
        .ok()
        .and_then(|body| serde_json::from_str::<ErrorEnvelope>(&body).ok())
        .unwrap_or_default();

    Error::Api {
        status_code,
        message: envelope.status.message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_requires_trailing_slash() {
        let client = Client::new().with_base_url("https://na.api.riotgames.com/val");
        let err = client.get("status/v1/platform-data").unwrap_err();
        assert!(matches!(err, Error::BaseUrl(_)));
    }

    /// Binds a listener on an ephemeral port and drops it, leaving an
    /// address that refuses connections.
    fn dead_base_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}/val/", addr)
    }

    #[test]
    fn connection_failure_is_a_transport_error() {
        let client = Client::new().with_base_url(dead_base_url());
        let prepared = client.get("status/v1/platform-data").unwrap();
        let err = client.bare_send(prepared).unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }

    #[test]
    fn elapsed_deadline_supersedes_transport_error() {
        let client = Client::new()
            .with_base_url(dead_base_url())
            .with_timeout(Duration::from_nanos(1));
        let prepared = client.get("status/v1/platform-data").unwrap();
        let err = client.bare_send(prepared).unwrap_err();
        assert!(matches!(err, Error::Timeout(_)));
    }

    #[test]
    fn envelope_parses_riot_error_body() {
        let envelope: ErrorEnvelope =
            serde_json::from_str(r#"{"status":{"message":"not found","status_code":404}}"#)
                .unwrap();
        assert_eq!(envelope.status.message, "not found");
    }

    #[test]
    fn envelope_tolerates_unknown_shape() {
        let envelope: ErrorEnvelope = serde_json::from_str(r#"{"error":"nope"}"#).unwrap();
        assert_eq!(envelope.status.message, "");
    }
}
