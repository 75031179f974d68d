use serde::Serialize;
use serde_json::Value;

use crate::error::VariantFamily;
use crate::types::{User, UtcDateTime};
use crate::value::{
    expect_object, get_integer, get_list, get_object, get_object_or_none, get_string,
    get_string_or_none, get_timestamp, FromTelegramResult,
};
use crate::ParseError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invoice {
    pub title: String,
    pub description: String,
    pub start_parameter: String,
    pub currency: String,
    pub total_amount: i64,
}

impl FromTelegramResult for Invoice {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            title: get_string(raw, "title")?,
            description: get_string(raw, "description")?,
            start_parameter: get_string(raw, "start_parameter")?,
            currency: get_string(raw, "currency")?,
            total_amount: get_integer(raw, "total_amount")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShippingAddress {
    pub country_code: String,
    pub state: String,
    pub city: String,
    pub street_line1: String,
    pub street_line2: String,
    pub post_code: String,
}

impl FromTelegramResult for ShippingAddress {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            country_code: get_string(raw, "country_code")?,
            state: get_string(raw, "state")?,
            city: get_string(raw, "city")?,
            street_line1: get_string(raw, "street_line1")?,
            street_line2: get_string(raw, "street_line2")?,
            post_code: get_string(raw, "post_code")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<ShippingAddress>,
}

impl FromTelegramResult for OrderInfo {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            name: get_string_or_none(raw, "name")?,
            phone_number: get_string_or_none(raw, "phone_number")?,
            email: get_string_or_none(raw, "email")?,
            shipping_address: get_object_or_none(raw, "shipping_address")?,
        })
    }
}

/// Amounts are in the smallest units of the currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuccessfulPayment {
    pub currency: String,
    pub total_amount: i64,
    pub invoice_payload: String,
    pub telegram_payment_charge_id: String,
    pub provider_payment_charge_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_option_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_info: Option<OrderInfo>,
}

impl FromTelegramResult for SuccessfulPayment {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            currency: get_string(raw, "currency")?,
            total_amount: get_integer(raw, "total_amount")?,
            invoice_payload: get_string(raw, "invoice_payload")?,
            telegram_payment_charge_id: get_string(raw, "telegram_payment_charge_id")?,
            provider_payment_charge_id: get_string(raw, "provider_payment_charge_id")?,
            shipping_option_id: get_string_or_none(raw, "shipping_option_id")?,
            order_info: get_object_or_none(raw, "order_info")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShippingQuery {
    pub id: String,
    pub from: User,
    pub invoice_payload: String,
    pub shipping_address: ShippingAddress,
}

impl FromTelegramResult for ShippingQuery {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            id: get_string(raw, "id")?,
            from: get_object(raw, "from")?,
            invoice_payload: get_string(raw, "invoice_payload")?,
            shipping_address: get_object(raw, "shipping_address")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreCheckoutQuery {
    pub id: String,
    pub from: User,
    pub currency: String,
    pub total_amount: i64,
    pub invoice_payload: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_option_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_info: Option<OrderInfo>,
}

impl FromTelegramResult for PreCheckoutQuery {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            id: get_string(raw, "id")?,
            from: get_object(raw, "from")?,
            currency: get_string(raw, "currency")?,
            total_amount: get_integer(raw, "total_amount")?,
            invoice_payload: get_string(raw, "invoice_payload")?,
            shipping_option_id: get_string_or_none(raw, "shipping_option_id")?,
            order_info: get_object_or_none(raw, "order_info")?,
        })
    }
}

/// State of a Telegram Stars withdrawal, selected by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum RevenueWithdrawalState {
    #[serde(rename = "pending")]
    Pending(RevenueWithdrawalStatePending),
    #[serde(rename = "succeeded")]
    Succeeded(RevenueWithdrawalStateSucceeded),
    #[serde(rename = "failed")]
    Failed(RevenueWithdrawalStateFailed),
}

impl RevenueWithdrawalState {
    pub const DISCRIMINATORS: [&'static str; 3] = [
        RevenueWithdrawalStatePending::TYPE,
        RevenueWithdrawalStateSucceeded::TYPE,
        RevenueWithdrawalStateFailed::TYPE,
    ];

    pub fn state_type(&self) -> &'static str {
        match self {
            Self::Pending(_) => RevenueWithdrawalStatePending::TYPE,
            Self::Succeeded(_) => RevenueWithdrawalStateSucceeded::TYPE,
            Self::Failed(_) => RevenueWithdrawalStateFailed::TYPE,
        }
    }
}

impl FromTelegramResult for RevenueWithdrawalState {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let state_type = get_string(expect_object(value)?, "type")?;
        match state_type.as_str() {
            RevenueWithdrawalStatePending::TYPE => {
                RevenueWithdrawalStatePending::from_telegram_result(value).map(Self::Pending)
            }
            RevenueWithdrawalStateSucceeded::TYPE => {
                RevenueWithdrawalStateSucceeded::from_telegram_result(value).map(Self::Succeeded)
            }
            RevenueWithdrawalStateFailed::TYPE => {
                RevenueWithdrawalStateFailed::from_telegram_result(value).map(Self::Failed)
            }
            _ => Err(ParseError::unknown_variant(
                VariantFamily::RevenueWithdrawalState,
                state_type,
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RevenueWithdrawalStatePending {}

impl RevenueWithdrawalStatePending {
    pub const TYPE: &'static str = "pending";
}

impl FromTelegramResult for RevenueWithdrawalStatePending {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        expect_object(value)?;
        Ok(Self {})
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevenueWithdrawalStateSucceeded {
    pub date: UtcDateTime,
    pub url: String,
}

impl RevenueWithdrawalStateSucceeded {
    pub const TYPE: &'static str = "succeeded";
}

impl FromTelegramResult for RevenueWithdrawalStateSucceeded {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            date: get_timestamp(raw, "date")?,
            url: get_string(raw, "url")?,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RevenueWithdrawalStateFailed {}

impl RevenueWithdrawalStateFailed {
    pub const TYPE: &'static str = "failed";
}

impl FromTelegramResult for RevenueWithdrawalStateFailed {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        expect_object(value)?;
        Ok(Self {})
    }
}

/// Counterparty of a Telegram Stars transaction, selected by `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum TransactionPartner {
    #[serde(rename = "fragment")]
    Fragment(TransactionPartnerFragment),
    #[serde(rename = "user")]
    User(TransactionPartnerUser),
    #[serde(rename = "other")]
    Other(TransactionPartnerOther),
}

impl TransactionPartner {
    pub const DISCRIMINATORS: [&'static str; 3] = [
        TransactionPartnerFragment::TYPE,
        TransactionPartnerUser::TYPE,
        TransactionPartnerOther::TYPE,
    ];

    pub fn partner_type(&self) -> &'static str {
        match self {
            Self::Fragment(_) => TransactionPartnerFragment::TYPE,
            Self::User(_) => TransactionPartnerUser::TYPE,
            Self::Other(_) => TransactionPartnerOther::TYPE,
        }
    }
}

impl FromTelegramResult for TransactionPartner {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let partner_type = get_string(expect_object(value)?, "type")?;
        match partner_type.as_str() {
            TransactionPartnerFragment::TYPE => {
                TransactionPartnerFragment::from_telegram_result(value).map(Self::Fragment)
            }
            TransactionPartnerUser::TYPE => {
                TransactionPartnerUser::from_telegram_result(value).map(Self::User)
            }
            TransactionPartnerOther::TYPE => {
                TransactionPartnerOther::from_telegram_result(value).map(Self::Other)
            }
            _ => Err(ParseError::unknown_variant(
                VariantFamily::TransactionPartner,
                partner_type,
            )),
        }
    }
}

/// Withdrawal to Fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionPartnerFragment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub withdrawal_state: Option<RevenueWithdrawalState>,
}

impl TransactionPartnerFragment {
    pub const TYPE: &'static str = "fragment";
}

impl FromTelegramResult for TransactionPartnerFragment {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            withdrawal_state: get_object_or_none(raw, "withdrawal_state")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionPartnerUser {
    pub user: User,
}

impl TransactionPartnerUser {
    pub const TYPE: &'static str = "user";
}

impl FromTelegramResult for TransactionPartnerUser {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            user: get_object(raw, "user")?,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TransactionPartnerOther {}

impl TransactionPartnerOther {
    pub const TYPE: &'static str = "other";
}

impl FromTelegramResult for TransactionPartnerOther {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        expect_object(value)?;
        Ok(Self {})
    }
}

/// A Telegram Stars transaction. Incoming ones carry `source`, outgoing
/// ones `receiver`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarTransaction {
    pub id: String,
    pub amount: i64,
    pub date: UtcDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<TransactionPartner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<TransactionPartner>,
}

impl FromTelegramResult for StarTransaction {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            id: get_string(raw, "id")?,
            amount: get_integer(raw, "amount")?,
            date: get_timestamp(raw, "date")?,
            source: get_object_or_none(raw, "source")?,
            receiver: get_object_or_none(raw, "receiver")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarTransactions {
    pub transactions: Vec<StarTransaction>,
}

impl FromTelegramResult for StarTransactions {
    fn from_telegram_result(value: &Value) -> Result<Self, ParseError> {
        let raw = expect_object(value)?;
        Ok(Self {
            transactions: get_list(raw, "transactions")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn each_withdrawal_state_dispatches() {
        let pending = RevenueWithdrawalState::from_telegram_result(&json!({ "type": "pending" }))
            .expect("pending");
        assert!(matches!(pending, RevenueWithdrawalState::Pending(_)));

        let succeeded = RevenueWithdrawalState::from_telegram_result(&json!({
            "type": "succeeded",
            "date": 12_431_326,
            "url": "https://example.com/test",
        }))
        .expect("succeeded");
        let RevenueWithdrawalState::Succeeded(state) = succeeded else {
            panic!("expected succeeded state");
        };
        assert_eq!(state.url, "https://example.com/test");
        assert_eq!(state.date.unix_timestamp(), 12_431_326);

        let failed = RevenueWithdrawalState::from_telegram_result(&json!({ "type": "failed" }))
            .expect("failed");
        assert_eq!(failed.state_type(), "failed");
    }

    #[test]
    fn unknown_withdrawal_state() {
        let error = RevenueWithdrawalState::from_telegram_result(&json!({ "type": "invalid" }))
            .expect_err("invalid type");

        assert_eq!(
            error.to_string(),
            "Unknown revenue withdrawal state type. Got \"invalid\"."
        );
    }

    #[test]
    fn star_transaction_with_fragment_receiver() {
        let transactions = StarTransactions::from_telegram_result(&json!({
            "transactions": [{
                "id": "t1",
                "amount": 500,
                "date": 1_700_000_000,
                "receiver": {
                    "type": "fragment",
                    "withdrawal_state": { "type": "pending" },
                },
            }],
        }))
        .expect("valid transactions");

        let receiver = transactions.transactions[0]
            .receiver
            .as_ref()
            .expect("receiver present");
        assert_eq!(receiver.partner_type(), "fragment");
        assert!(transactions.transactions[0].source.is_none());
    }
}
