use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;

use super::error::FetchError;

/// Thin wrapper over `reqwest::Client` for JSON GET requests.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client })
    }

    /// GET `url` and decode the body as JSON.
    ///
    /// Non-2xx responses are errors; the body is not inspected.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_send(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| FetchError::Decode {
            url: url.to_string(),
            source: e,
        })
    }
}
