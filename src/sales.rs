use serde::Deserialize;
use serde_with::{serde_as, DefaultOnError};

/// Defines the JSON format for one sale in a sales record.
///
/// A field holding a value of the wrong type is treated as missing.
#[serde_as]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct SaleRecord {
    #[serde_as(as = "DefaultOnError")]
    #[serde(rename = "Product", default)]
    pub product: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(rename = "Quantity", default)]
    pub quantity: Option<f64>,
}

impl SaleRecord {
    #[must_use]
    pub fn new(product: &str, quantity: f64) -> Self {
        Self {
            product: Some(product.to_string()),
            quantity: Some(quantity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sale_record_reads_capitalised_keys() {
        let record: SaleRecord =
            serde_json::from_str(r#"{"SALE_ID": 1, "Product": "Apple", "Quantity": 4}"#).unwrap();
        assert_eq!(record, SaleRecord::new("Apple", 4.0));
    }

    #[test]
    fn sale_record_tolerates_missing_quantity() {
        let record: SaleRecord = serde_json::from_str(r#"{"Product": "Apple"}"#).unwrap();
        assert_eq!(record.product.as_deref(), Some("Apple"));
        assert_eq!(record.quantity, None);
    }

    #[test]
    fn sale_record_treats_string_quantity_as_missing() {
        let record: SaleRecord =
            serde_json::from_str(r#"{"Product": "Apple", "Quantity": "four"}"#).unwrap();
        assert_eq!(record.product.as_deref(), Some("Apple"));
        assert_eq!(record.quantity, None);
    }
}
