//! HTTP fetcher
//!
//! Thin JSON transport over reqwest. No retry, no backoff, and no request
//! timeout: a stalled transport stalls the run.

use crate::{PokedexError, Result};
use serde::de::DeserializeOwned;

/// JSON fetch capability shared by the orchestrator and all resolvers
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    /// Builds a fetcher with a configured HTTP client
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("pokedex-crawler/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .brotli(true)
            .build()?;
        Ok(Self { client })
    }

    /// GETs a URL and decodes the JSON body into `T`.
    ///
    /// A transport error, non-2xx status, or undecodable body is returned as
    /// a typed error; callers propagate it and the run aborts.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| PokedexError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| PokedexError::Decode {
                url: url.to_string(),
                source,
            })
    }
}
