use serde::{Deserialize, Serialize};

/// One discount-code redemption.
///
/// Every field is optional. Identity (partner, transaction, currency) is held
/// by the client instead. `Some(0.0)` and `Some(false)` are present values and
/// are serialized; only `None` is omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedemptionRecord {
    /// Member identifier on the partner's side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
    /// Total order value after discounts.
    #[serde(
        default,
        deserialize_with = "amount::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub order_total: Option<f64>,
    /// Discount applied to items by the redeemed code.
    #[serde(
        rename = "itemsUNiDAYSDiscount",
        default,
        deserialize_with = "amount::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub items_unidays_discount: Option<f64>,
    /// The redeemed discount code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Tax on items.
    #[serde(
        default,
        deserialize_with = "amount::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub items_tax: Option<f64>,
    /// Shipping cost before shipping discount.
    #[serde(
        default,
        deserialize_with = "amount::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub shipping_gross: Option<f64>,
    /// Discount applied to shipping.
    #[serde(
        default,
        deserialize_with = "amount::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub shipping_discount: Option<f64>,
    /// Item total before any discount.
    #[serde(
        default,
        deserialize_with = "amount::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub items_gross: Option<f64>,
    /// Discounts from other sources.
    #[serde(
        default,
        deserialize_with = "amount::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub items_other_discount: Option<f64>,
    /// Percentage discount granted by the code.
    #[serde(
        rename = "UNiDAYSDiscountPercentage",
        default,
        deserialize_with = "amount::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub unidays_discount_percentage: Option<f64>,
    /// Whether the customer is new to the merchant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_customer: Option<bool>,
}

/// Amounts arrive as JSON numbers or numeric strings.
mod amount {
    use redemption_canonical::parse_amount;
    use serde::de::{self, Deserializer};
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Raw::Number(value)) => Ok(Some(value)),
            Some(Raw::Text(text)) => parse_amount(&text).map(Some).map_err(de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_merchant_json_shape() {
        let record: RedemptionRecord = serde_json::from_value(json!({
            "memberId": "memberId",
            "orderTotal": 209.0,
            "itemsUNiDAYSDiscount": "13",
            "code": "ABC123",
            "UNiDAYSDiscountPercentage": 10,
            "newCustomer": false
        }))
        .unwrap();

        assert_eq!(record.member_id.as_deref(), Some("memberId"));
        assert_eq!(record.order_total, Some(209.0));
        assert_eq!(record.items_unidays_discount, Some(13.0));
        assert_eq!(record.unidays_discount_percentage, Some(10.0));
        assert_eq!(record.new_customer, Some(false));
        assert_eq!(record.items_tax, None);
    }

    #[test]
    fn null_amount_is_absent() {
        let record: RedemptionRecord =
            serde_json::from_value(json!({ "orderTotal": null })).unwrap();
        assert_eq!(record.order_total, None);
    }

    #[test]
    fn non_numeric_amount_is_rejected() {
        let result: Result<RedemptionRecord, _> =
            serde_json::from_value(json!({ "orderTotal": "lots" }));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("'lots' is not a number"));

        let truncated: Result<RedemptionRecord, _> =
            serde_json::from_value(json!({ "itemsTax": "12abc" }));
        assert!(truncated.is_err());
    }
}
