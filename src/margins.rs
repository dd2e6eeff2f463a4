use crate::prices_model::{AlchMargin, ItemId, ItemMapping, LatestPrices, PriceSwing};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use tracing::{event, Level};

/// Treats absent and zero the same way: both mean "no usable value".
fn non_zero(value: Option<i64>) -> Option<i64> {
    value.filter(|v| *v != 0)
}

/// Joins item metadata with the latest prices and returns every item whose
/// high-alchemy value and instant-buy price are known, best margin first.
///
/// Items with a zero `value` are not tradeable and are skipped, as are items
/// without a price entry or without a `high` price.
pub fn calculate_alch_margins(prices: &LatestPrices, mapping: &[ItemMapping]) -> Vec<AlchMargin> {
    let margins = mapping
        .iter()
        .filter_map(|item| {
            let item_id = item.id.filter(|id| id.0 != 0)?;
            let high_alch = non_zero(item.highalch)?;
            non_zero(item.value)?;

            let buy_price = non_zero(prices.get(&item_id.to_string())?.high)?;

            Some(AlchMargin {
                item_id,
                name: item.name.clone().unwrap_or_else(|| "Unknown".to_string()),
                high_alch,
                buy_price,
                alch_margin: high_alch - buy_price,
            })
        })
        .sorted_by_key(|m| Reverse(m.alch_margin))
        .collect_vec();

    event!(
        Level::DEBUG,
        "Calculated alch margins for {} of {} mapped items",
        margins.len(),
        mapping.len()
    );

    margins
}

/// Percentage difference between the high and low price of every entry,
/// biggest swing first. Needs no item metadata.
pub fn calculate_price_swings(prices: &LatestPrices) -> Vec<PriceSwing> {
    let swings = prices
        .iter()
        .filter_map(|(key, entry)| {
            let item_id = ItemId(key.parse().ok()?);
            let high = non_zero(entry.high)?;
            let low = non_zero(entry.low)?;

            Some(PriceSwing {
                item_id,
                high,
                low,
                percentage_diff: (high - low) as f64 / low as f64 * 100.0,
            })
        })
        .sorted_by_key(|s| Reverse(OrderedFloat(s.percentage_diff)))
        .collect_vec();

    event!(
        Level::DEBUG,
        "Calculated price swings for {} of {} price entries",
        swings.len(),
        prices.len()
    );

    swings
}
