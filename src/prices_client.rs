use crate::prices_model::{ItemMapping, LatestPrices, LatestPricesResponse};
use anyhow::{Context, Result};
use async_trait::async_trait;
use mockall::automock;
use reqwest_middleware::{ClientWithMiddleware, RequestBuilder};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use tracing::{event, Level};

pub const DEFAULT_BASE_URL: &str = "https://prices.runescape.wiki/api/v1/osrs";

#[derive(Debug, Clone)]
pub struct PricesClient {
    pub client: ClientWithMiddleware,
    pub base_url: String,
}

impl PricesClient {
    pub fn new(client: ClientWithMiddleware, base_url: &str) -> Self {
        PricesClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    async fn make_api_call<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
        let resp = request.send().await.context("Failed to send request")?;

        let status = resp.status();
        let body = resp.text().await.context("Failed to get response body")?;

        if !status.is_success() {
            anyhow::bail!("API request failed. Status: {}, Body: {}", status, body);
        }

        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| {
            anyhow::anyhow!(
                "Error decoding response at '{}': '{}'. Response body was: '{}'",
                e.path(),
                e.inner(),
                body
            )
        })
    }
}

#[automock]
#[async_trait]
pub trait PricesClientTrait: Send + Sync + Debug {
    /// Latest high/low trade prices, keyed by stringified item id.
    async fn get_latest_prices(&self) -> Result<LatestPrices>;

    /// Item metadata including alchemy values.
    async fn get_item_mapping(&self) -> Result<Vec<ItemMapping>>;
}

#[async_trait]
impl PricesClientTrait for PricesClient {
    async fn get_latest_prices(&self) -> Result<LatestPrices> {
        let url = self.url("latest");
        event!(Level::DEBUG, "Fetching latest prices from {}", url);

        let response: LatestPricesResponse = Self::make_api_call(self.client.get(&url))
            .await
            .with_context(|| format!("Error fetching data from {}", url))?;
        Ok(response.data)
    }

    async fn get_item_mapping(&self) -> Result<Vec<ItemMapping>> {
        let url = self.url("mapping");
        event!(Level::DEBUG, "Fetching item mapping from {}", url);

        Self::make_api_call(self.client.get(&url))
            .await
            .with_context(|| format!("Error fetching data from {}", url))
    }
}
