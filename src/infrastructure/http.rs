// SPDX-License-Identifier: MPL-2.0
//! Remote byte fetch via `reqwest`.

use crate::application::port::http::RemoteFetch;
use crate::config::Config;
use crate::error::{Error, NetworkError, Result};

/// [`RemoteFetch`] backed by a shared `reqwest` client.
///
/// The client is configured once from [`Config`]: user agent and a
/// bounded redirect policy. Timeouts are left to reqwest's defaults;
/// this layer defines none of its own.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Builds a fetcher from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the underlying client cannot be
    /// constructed (e.g. no TLS backend available).
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(config.redirect_limit()))
            .user_agent(config.user_agent())
            .build()
            .map_err(|e| Error::Config(e.to_string()))?;
        Ok(Self { client })
    }
}

impl RemoteFetch for HttpFetcher {
    async fn get(&self, url: &str) -> std::result::Result<Vec<u8>, NetworkError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| NetworkError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| NetworkError::Transport(e.to_string()))?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_default_config() {
        let fetcher = HttpFetcher::new(&Config::default());
        assert!(fetcher.is_ok());
    }

    #[test]
    fn builds_with_custom_settings() {
        let config = Config {
            user_agent: Some("TestViewer/1.0".to_string()),
            redirect_limit: Some(0),
        };
        assert!(HttpFetcher::new(&config).is_ok());
    }
}
