use redemption_canonical::{encode_number, encode_string, sign, SigningKey};

use crate::errors::ClientError;
use crate::record::RedemptionRecord;

/// Identity fields bound to a client for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingIdentity {
    partner_id: String,
    transaction_id: String,
    currency: String,
}

impl TrackingIdentity {
    /// Validates that every identity field is non-empty.
    pub fn new(
        partner_id: impl Into<String>,
        transaction_id: impl Into<String>,
        currency: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let partner_id = require("partnerId", partner_id.into())?;
        let transaction_id = require("transactionId", transaction_id.into())?;
        let currency = require("currency", currency.into())?;
        Ok(Self {
            partner_id,
            transaction_id,
            currency,
        })
    }

    /// Partner identifier.
    pub fn partner_id(&self) -> &str {
        &self.partner_id
    }

    /// Transaction identifier.
    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }

    /// ISO currency code.
    pub fn currency(&self) -> &str {
        &self.currency
    }
}

fn require(name: &'static str, value: String) -> Result<String, ClientError> {
    if value.is_empty() {
        return Err(ClientError::InvalidArgument(name));
    }
    Ok(value)
}

/// Accumulates `Key=Value` segments after the leading `?`.
struct QueryWriter {
    buf: String,
}

impl QueryWriter {
    fn new() -> Self {
        Self {
            buf: String::from("?"),
        }
    }

    fn push(&mut self, key: &str, encoded: &str) {
        if self.buf.len() > 1 {
            self.buf.push('&');
        }
        self.buf.push_str(key);
        self.buf.push('=');
        self.buf.push_str(encoded);
    }

    fn string(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.push(key, &encode_string(value));
        }
    }

    fn amount(&mut self, key: &'static str, value: Option<f64>) -> Result<(), ClientError> {
        if let Some(value) = value {
            let encoded = encode_number(value).map_err(|source| ClientError::Encoding {
                field: key,
                source,
            })?;
            self.push(key, &encoded);
        }
        Ok(())
    }

    fn flag(&mut self, key: &str, value: Option<bool>) {
        if let Some(value) = value {
            self.push(key, if value { "true" } else { "false" });
        }
    }

    fn finish(self) -> String {
        self.buf
    }
}

/// Serializes identity and record into the canonical query string.
///
/// Field order is fixed by the tracking protocol; the result always starts
/// with `?` and is the exact payload that gets signed.
pub fn to_query_string(
    identity: &TrackingIdentity,
    record: &RedemptionRecord,
) -> Result<String, ClientError> {
    let mut query = QueryWriter::new();
    query.string("PartnerId", Some(identity.partner_id.as_str()));
    query.string("TransactionId", Some(identity.transaction_id.as_str()));
    query.string("Currency", Some(identity.currency.as_str()));
    query.string("MemberId", record.member_id.as_deref());
    query.amount("OrderTotal", record.order_total)?;
    query.amount("ItemsUNiDAYSDiscount", record.items_unidays_discount)?;
    query.string("Code", record.code.as_deref());
    query.amount("ItemsTax", record.items_tax)?;
    query.amount("ShippingGross", record.shipping_gross)?;
    query.amount("ShippingDiscount", record.shipping_discount)?;
    query.amount("ItemsGross", record.items_gross)?;
    query.amount("ItemsOtherDiscount", record.items_other_discount)?;
    query.amount(
        "UNiDAYSDiscountPercentage",
        record.unidays_discount_percentage,
    )?;
    query.flag("NewCustomer", record.new_customer);
    Ok(query.finish())
}

/// Appends `&Signature=...` computed over the whole query, `?` included.
pub fn sign_query_string(query: &str, key: &SigningKey) -> String {
    let signature = sign(query.as_bytes(), key);
    format!("{query}&Signature={}", encode_string(signature.as_str()))
}
