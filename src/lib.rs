//! Client library for the Riot Valorant REST API.
//!
//! The [`Client`] holds the base URL, user agent and auth token; per-resource
//! services are reached through its accessors and share the client by
//! reference:
//!
//! ```no_run
//! use valorant_api::{Client, Region};
//!
//! fn main() -> valorant_api::Result<()> {
//!     let client = Client::new()
//!         .with_region(Region::Eu)
//!         .with_auth_token("RGAPI-...");
//!
//!     let status = client.status().platform_data()?;
//!     if let Some(status) = status {
//!         println!("{}: {} open incidents", status.name, status.incidents.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Every call is a single independent round trip: the library performs no
//! retries, rate limiting or caching. Errors are returned to the caller,
//! never logged or swallowed.

use std::fmt;
use std::str::FromStr;

mod client;
mod config;
mod error;

pub mod content;
pub mod matches;
pub mod ranked;
pub mod status;

pub use client::{Client, PreparedRequest, RequestOption};
pub use config::Config;
pub use error::{Error, Result};

// [`RequestOption`] and [`Client::bare_send`] speak ureq types directly.
pub use ureq;

/// Crate version, used in the default user agent.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub(crate) const DEFAULT_USER_AGENT: &str =
    concat!("valorant-api/", env!("CARGO_PKG_VERSION"));

/// Geographic shard selecting the API host.
///
/// Exactly one region is active per client; selecting one rewrites the base
/// URL for all subsequent requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Region {
    Ap,
    Br,
    Eu,
    Kr,
    Latam,
    #[default]
    Na,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Ap => "ap",
            Region::Br => "br",
            Region::Eu => "eu",
            Region::Kr => "kr",
            Region::Latam => "latam",
            Region::Na => "na",
        }
    }

    /// Base URL for the region, always with a trailing slash.
    pub(crate) fn base_url(&self) -> String {
        format!("https://{}.api.riotgames.com/val/", self.as_str())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ap" => Ok(Region::Ap),
            "br" => Ok(Region::Br),
            "eu" => Ok(Region::Eu),
            "kr" => Ok(Region::Kr),
            "latam" => Ok(Region::Latam),
            "na" => Ok(Region::Na),
            other => Err(Error::Config(format!("unknown region: {:?}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_region_is_na() {
        assert_eq!(Region::default(), Region::Na);
        assert_eq!(Region::default().base_url(), "https://na.api.riotgames.com/val/");
    }

    #[test]
    fn region_base_urls_share_path_shape() {
        let na = Region::Na.base_url();
        let eu = Region::Eu.base_url();
        assert_ne!(na, eu);
        assert!(eu.starts_with("https://eu."));
        // Same namespace and trailing slash on every host.
        assert!(na.ends_with(".api.riotgames.com/val/"));
        assert!(eu.ends_with(".api.riotgames.com/val/"));
    }

    #[test]
    fn region_parses_from_str() {
        assert_eq!("latam".parse::<Region>().unwrap(), Region::Latam);
        assert_eq!("kr".parse::<Region>().unwrap(), Region::Kr);
        assert!(matches!(
            "euw1".parse::<Region>(),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn region_displays_as_wire_value() {
        assert_eq!(Region::Latam.to_string(), "latam");
    }
}
