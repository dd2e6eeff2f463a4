use crate::prices_client::PricesClientTrait;
use crate::prices_model::{ItemMapping, LatestPrices};
use anyhow::{Context, Result};
use tracing::{event, Level};

#[derive(Debug, Clone)]
pub struct MarketSnapshot {
    pub prices: LatestPrices,
    pub mapping: Vec<ItemMapping>,
}

/// Downloads prices, then the item mapping. The first failure aborts the run,
/// so the mapping is never requested when the prices are unavailable.
pub async fn fetch_market_snapshot(client: &dyn PricesClientTrait) -> Result<MarketSnapshot> {
    let prices = client
        .get_latest_prices()
        .await
        .context("Failed to fetch latest prices")?;
    event!(Level::INFO, "Fetched {} price entries", prices.len());

    let mapping = client
        .get_item_mapping()
        .await
        .context("Failed to fetch item mapping")?;
    event!(Level::INFO, "Fetched mapping for {} items", mapping.len());

    Ok(MarketSnapshot { prices, mapping })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prices_client::MockPricesClientTrait;
    use crate::prices_model::{ItemId, PriceEntry};
    use anyhow::anyhow;
    use mockall::Sequence;
    use std::collections::HashMap;
    use tracing_test::traced_test;

    #[tokio::test]
    #[traced_test]
    async fn fetches_prices_before_mapping() -> Result<()> {
        let mut mock_client = MockPricesClientTrait::new();
        let mut seq = Sequence::new();

        mock_client
            .expect_get_latest_prices()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| {
                Ok(HashMap::from([(
                    "1".to_string(),
                    PriceEntry {
                        high: Some(100),
                        ..Default::default()
                    },
                )]))
            });
        mock_client
            .expect_get_item_mapping()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| {
                Ok(vec![ItemMapping {
                    id: Some(ItemId(1)),
                    name: Some("Item".to_string()),
                    highalch: Some(150),
                    value: Some(5),
                    ..Default::default()
                }])
            });

        let snapshot = fetch_market_snapshot(&mock_client).await?;

        assert_eq!(snapshot.prices.len(), 1);
        assert_eq!(snapshot.mapping.len(), 1);
        Ok(())
    }

    #[tokio::test]
    #[traced_test]
    async fn price_failure_skips_mapping_request() {
        let mut mock_client = MockPricesClientTrait::new();

        mock_client
            .expect_get_latest_prices()
            .times(1)
            .returning(|| Err(anyhow!("API request failed. Status: 500 Internal Server Error")));
        mock_client.expect_get_item_mapping().times(0);

        let err = fetch_market_snapshot(&mock_client).await.unwrap_err();

        assert!(format!("{:#}", err).contains("Failed to fetch latest prices"));
    }

    #[tokio::test]
    #[traced_test]
    async fn mapping_failure_aborts() {
        let mut mock_client = MockPricesClientTrait::new();

        mock_client
            .expect_get_latest_prices()
            .returning(|| Ok(HashMap::new()));
        mock_client
            .expect_get_item_mapping()
            .returning(|| Err(anyhow!("connection refused")));

        let err = fetch_market_snapshot(&mock_client).await.unwrap_err();

        assert!(format!("{:#}", err).contains("Failed to fetch item mapping"));
    }
}
