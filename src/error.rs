use std::io;
use std::time::Duration;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by API calls.
///
/// Every layer hands its error to the immediate caller; nothing is retried
/// or logged inside the library.
#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("base URL must end with a trailing slash: {0:?}")]
    BaseUrl(String),

    #[error("invalid request URL: {0}")]
    Url(String),

    #[error("failed to encode request body: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("request exceeded the configured {0:?} deadline")]
    Timeout(Duration),

    /// Non-2xx response, with the message from the Riot error envelope when
    /// the body carried one.
    #[error("API error: {status_code} {message}")]
    Api { status_code: u16, message: String },

    #[error("failed to read response body: {0}")]
    Body(#[source] io::Error),

    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}
