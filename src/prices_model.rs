use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub i64);

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The `latest` endpoint keys its entries by the stringified item id.
pub type LatestPrices = HashMap<String, PriceEntry>;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Data<T> {
    pub data: T,
}

pub type LatestPricesResponse = Data<LatestPrices>;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceEntry {
    pub high: Option<i64>,
    pub high_time: Option<i64>,
    pub low: Option<i64>,
    pub low_time: Option<i64>,
}

/// One element of the `mapping` endpoint.
///
/// All fields are optional on the wire; incomplete entries are filtered out
/// later instead of failing the decode of the whole array.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct ItemMapping {
    pub id: Option<ItemId>,
    pub name: Option<String>,
    pub highalch: Option<i64>,
    pub lowalch: Option<i64>,
    pub value: Option<i64>,
    pub limit: Option<i64>,
    pub members: Option<bool>,
    pub examine: Option<String>,
    pub icon: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AlchMargin {
    pub item_id: ItemId,
    pub name: String,
    pub high_alch: i64,
    pub buy_price: i64,
    pub alch_margin: i64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PriceSwing {
    pub item_id: ItemId,
    pub high: i64,
    pub low: i64,
    pub percentage_diff: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_latest_response_with_nulls() -> anyhow::Result<()> {
        let body = r#"{"data":{"2":{"high":150,"highTime":1700000000,"low":null,"lowTime":null},"6":{}}}"#;
        let resp: LatestPricesResponse = serde_json::from_str(body)?;

        assert_eq!(
            resp.data.get("2"),
            Some(&PriceEntry {
                high: Some(150),
                high_time: Some(1700000000),
                low: None,
                low_time: None,
            })
        );
        assert_eq!(resp.data.get("6"), Some(&PriceEntry::default()));
        Ok(())
    }

    #[test]
    fn decodes_mapping_entry_with_missing_fields() -> anyhow::Result<()> {
        let body = r#"[{"id":4151,"name":"Abyssal whip","highalch":72000,"value":120001,"members":true,"limit":70},{"name":"broken"}]"#;
        let mapping: Vec<ItemMapping> = serde_json::from_str(body)?;

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping[0].id, Some(ItemId(4151)));
        assert_eq!(mapping[0].members, Some(true));
        assert_eq!(mapping[1].id, None);
        assert_eq!(mapping[1].highalch, None);
        Ok(())
    }
}
