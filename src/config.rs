use std::env;

use crate::error::{Error, Result};
use crate::Region;

/// API key and region resolved from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub region: Region,
}

impl Config {
    /// Reads `RIOT_API_KEY` (required) and `RIOT_REGION` (optional, defaults
    /// to na), loading a `.env` file first when one is present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = env::var("RIOT_API_KEY")
            .map_err(|_| Error::Config("RIOT_API_KEY not set".to_string()))?;

        let region = match env::var("RIOT_REGION") {
            Ok(value) => value.parse()?,
            Err(_) => Region::default(),
        };

        Ok(Config { api_key, region })
    }
}
