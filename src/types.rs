//! Payload type definitions for the Fawry gateway operations.
//!
//! Each operation accepts a typed record that serializes to the gateway's
//! camelCase JSON shape and knows how to validate itself. Validation runs before
//! signing or any network activity, so a malformed payload never produces a
//! partial request.
//!
//! Monetary amounts are kept as strings. The gateway signs and compares the
//! exact textual representation the merchant sends (e.g. `"100.00"`), so parsing
//! them into a numeric type and re-rendering would risk a signature mismatch.

use crate::errors::{FawryError, Result};
use serde::{Deserialize, Serialize};

/// Payment methods accepted by the charge endpoint.
pub const PAYMENT_METHODS: [&str; 3] = ["CARD", "PAYATFAWRY", "MWALLET"];

/// A single line item within a charge.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChargeItem {
    /// Merchant-side item identifier
    #[serde(rename = "itemId")]
    pub item_id: String,

    /// Human-readable item description
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub description: String,

    /// Unit price, as the exact string the merchant wants signed and billed
    pub price: String,

    /// Number of units
    pub quantity: u32,
}

/// A charge request payload.
///
/// Covers all three charge flavors: card-token payment (`CARD`), reference-number
/// generation for payment at an outlet (`PAYATFAWRY`), and mobile wallet
/// (`MWALLET`). Only `CARD` requires a card token.
///
/// # Examples
///
/// ```
/// use fawry_rs::types::Charge;
///
/// let charge = Charge {
///     merchant_code: "MERCH001".to_string(),
///     merchant_ref_num: "REF-100".to_string(),
///     customer_profile_id: "CUST-7".to_string(),
///     payment_method: "CARD".to_string(),
///     amount: "100.00".to_string(),
///     card_token: "tok_abc".to_string(),
///     ..Default::default()
/// };
///
/// assert!(charge.validate().is_ok());
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Charge {
    /// Merchant identifier issued by the gateway
    #[serde(rename = "merchantCode")]
    pub merchant_code: String,

    /// Merchant-side unique reference for this transaction
    #[serde(rename = "merchantRefNum")]
    pub merchant_ref_num: String,

    /// Merchant-side customer identifier
    #[serde(rename = "customerProfileId")]
    pub customer_profile_id: String,

    /// Customer mobile number
    #[serde(rename = "customerMobile", skip_serializing_if = "String::is_empty", default)]
    pub customer_mobile: String,

    /// Customer e-mail address
    #[serde(rename = "customerEmail", skip_serializing_if = "String::is_empty", default)]
    pub customer_email: String,

    /// One of [`PAYMENT_METHODS`]
    #[serde(rename = "paymentMethod")]
    pub payment_method: String,

    /// Charge amount, as the exact string to sign (e.g. "100.00")
    pub amount: String,

    /// ISO currency code, e.g. "EGP"
    #[serde(rename = "currencyCode", skip_serializing_if = "String::is_empty", default)]
    pub currency_code: String,

    /// Saved-card token; required for the `CARD` payment method, empty otherwise.
    /// An empty token still contributes an empty segment to the signature.
    #[serde(rename = "cardToken", skip_serializing_if = "String::is_empty", default)]
    pub card_token: String,

    /// Free-text order description
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub description: String,

    /// Order line items
    #[serde(rename = "chargeItems", skip_serializing_if = "Vec::is_empty", default)]
    pub charge_items: Vec<ChargeItem>,
}

impl Charge {
    /// Checks the structural rules the gateway enforces on charge requests.
    pub fn validate(&self) -> Result<()> {
        require(&self.merchant_code, "merchantCode")?;
        require(&self.merchant_ref_num, "merchantRefNum")?;
        require(&self.customer_profile_id, "customerProfileId")?;
        require(&self.payment_method, "paymentMethod")?;
        require(&self.amount, "amount")?;
        require_amount(&self.amount, "amount")?;

        if !PAYMENT_METHODS.contains(&self.payment_method.as_str()) {
            return Err(FawryError::Validation(format!(
                "paymentMethod must be one of {:?}, got {:?}",
                PAYMENT_METHODS, self.payment_method
            )));
        }

        if self.payment_method == "CARD" && self.card_token.is_empty() {
            return Err(FawryError::Validation(
                "cardToken is required when paymentMethod is CARD".to_string(),
            ));
        }

        for item in &self.charge_items {
            require(&item.item_id, "chargeItems.itemId")?;
            require_amount(&item.price, "chargeItems.price")?;
        }

        Ok(())
    }
}

/// A refund request payload.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Refund {
    /// Merchant identifier issued by the gateway
    #[serde(rename = "merchantCode")]
    pub merchant_code: String,

    /// Gateway-issued reference number of the transaction to refund
    #[serde(rename = "referenceNumber")]
    pub reference_number: String,

    /// Amount to refund, as the exact string to sign
    #[serde(rename = "refundAmount")]
    pub refund_amount: String,

    /// Refund reason. May be empty; an empty reason still contributes an empty
    /// segment to the signature.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub reason: String,
}

impl Refund {
    /// Checks the structural rules the gateway enforces on refund requests.
    pub fn validate(&self) -> Result<()> {
        require(&self.merchant_code, "merchantCode")?;
        require(&self.reference_number, "referenceNumber")?;
        require(&self.refund_amount, "refundAmount")?;
        require_amount(&self.refund_amount, "refundAmount")?;
        Ok(())
    }
}

/// A payment-status query payload.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Status {
    /// Merchant identifier issued by the gateway
    #[serde(rename = "merchantCode")]
    pub merchant_code: String,

    /// Merchant-side reference of the transaction to look up
    #[serde(rename = "merchantRefNum")]
    pub merchant_ref_num: String,
}

impl Status {
    /// Checks the structural rules the gateway enforces on status queries.
    pub fn validate(&self) -> Result<()> {
        require(&self.merchant_code, "merchantCode")?;
        require(&self.merchant_ref_num, "merchantRefNum")?;
        Ok(())
    }
}

fn require(value: &str, field: &str) -> Result<()> {
    if value.is_empty() {
        return Err(FawryError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

fn require_amount(value: &str, field: &str) -> Result<()> {
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(()),
        _ => Err(FawryError::Validation(format!(
            "{} must be a non-negative decimal, got {:?}",
            field, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn card_charge() -> Charge {
        Charge {
            merchant_code: "MERCH001".to_string(),
            merchant_ref_num: "REF-100".to_string(),
            customer_profile_id: "CUST-7".to_string(),
            payment_method: "CARD".to_string(),
            amount: "100.00".to_string(),
            card_token: "tok_abc".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_card_charge() {
        assert!(card_charge().validate().is_ok());
    }

    #[test]
    fn test_charge_missing_merchant_code() {
        let mut charge = card_charge();
        charge.merchant_code.clear();
        let err = charge.validate().unwrap_err();
        assert!(err.to_string().contains("merchantCode"));
    }

    #[test]
    fn test_charge_bad_payment_method() {
        let mut charge = card_charge();
        charge.payment_method = "BITCOIN".to_string();
        assert!(charge.validate().is_err());
    }

    #[test]
    fn test_card_charge_requires_token() {
        let mut charge = card_charge();
        charge.card_token.clear();
        let err = charge.validate().unwrap_err();
        assert!(err.to_string().contains("cardToken"));
    }

    #[test]
    fn test_payatfawry_charge_without_token() {
        let mut charge = card_charge();
        charge.payment_method = "PAYATFAWRY".to_string();
        charge.card_token.clear();
        assert!(charge.validate().is_ok());
    }

    #[test]
    fn test_charge_bad_amount() {
        let mut charge = card_charge();
        charge.amount = "ten pounds".to_string();
        assert!(charge.validate().is_err());

        charge.amount = "-5.00".to_string();
        assert!(charge.validate().is_err());
    }

    #[test]
    fn test_charge_item_rules() {
        let mut charge = card_charge();
        charge.charge_items.push(ChargeItem {
            item_id: String::new(),
            description: String::new(),
            price: "10.00".to_string(),
            quantity: 1,
        });
        assert!(charge.validate().is_err());

        charge.charge_items[0].item_id = "SKU-1".to_string();
        assert!(charge.validate().is_ok());
    }

    #[test]
    fn test_charge_json_shape() {
        let value = serde_json::to_value(card_charge()).unwrap();
        assert_eq!(
            value,
            json!({
                "merchantCode": "MERCH001",
                "merchantRefNum": "REF-100",
                "customerProfileId": "CUST-7",
                "paymentMethod": "CARD",
                "amount": "100.00",
                "cardToken": "tok_abc",
            })
        );
    }

    #[test]
    fn test_empty_optional_fields_skipped() {
        let value = serde_json::to_value(card_charge()).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("customerMobile"));
        assert!(!obj.contains_key("currencyCode"));
        assert!(!obj.contains_key("chargeItems"));
    }

    #[test]
    fn test_valid_refund() {
        let refund = Refund {
            merchant_code: "MERCH001".to_string(),
            reference_number: "9900123".to_string(),
            refund_amount: "50.00".to_string(),
            reason: "duplicate charge".to_string(),
        };
        assert!(refund.validate().is_ok());
    }

    #[test]
    fn test_refund_reason_optional() {
        let refund = Refund {
            merchant_code: "MERCH001".to_string(),
            reference_number: "9900123".to_string(),
            refund_amount: "50.00".to_string(),
            reason: String::new(),
        };
        assert!(refund.validate().is_ok());
    }

    #[test]
    fn test_refund_missing_reference() {
        let refund = Refund {
            merchant_code: "MERCH001".to_string(),
            ..Default::default()
        };
        assert!(refund.validate().is_err());
    }

    #[test]
    fn test_status_validation() {
        let status = Status {
            merchant_code: "M1".to_string(),
            merchant_ref_num: "R1".to_string(),
        };
        assert!(status.validate().is_ok());

        let empty = Status::default();
        assert!(matches!(
            empty.validate().unwrap_err(),
            FawryError::Validation(_)
        ));
    }
}
