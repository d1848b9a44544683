//! Payment and payment-method models

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Days since the most recent payment after which a member counts as overdue
pub const OVERDUE_AFTER_DAYS: i64 = 35;

/// Payment record status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Success,
    Failed,
    #[default]
    Pending,
    Refunded,
}

/// Payment record. Append-only from the dashboard's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    pub member_id: i64,
    /// Amount in currency units, 2dp
    pub amount: Decimal,
    pub payment_date: NaiveDate,
    /// Free-text method label ("card", "cash", ...)
    pub payment_method: String,
    pub status: PaymentStatus,
    pub notes: Option<String>,
}

/// Record payment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCreate {
    pub amount: Decimal,
    pub payment_date: NaiveDate,
    pub payment_method: String,
    pub notes: Option<String>,
}

/// Next due date: most recent payment date plus one month
pub fn next_due(payments: &[Payment]) -> Option<NaiveDate> {
    latest_payment_date(payments).and_then(|d| d.checked_add_months(Months::new(1)))
}

/// Whether the member is overdue as of `today`
pub fn is_overdue(payments: &[Payment], today: NaiveDate) -> bool {
    match latest_payment_date(payments) {
        Some(latest) => (today - latest).num_days() > OVERDUE_AFTER_DAYS,
        None => false,
    }
}

fn latest_payment_date(payments: &[Payment]) -> Option<NaiveDate> {
    payments.iter().map(|p| p.payment_date).max()
}

/// Card brand on file
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Visa,
    Mastercard,
    Amex,
    Discover,
    Other,
}

/// Payment method on file (zero-or-one per member).
///
/// Replaced wholesale on update; there is no partial-field update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub card_type: CardType,
    pub last_four: String,
    pub expiry_month: u8,
    pub expiry_year: u16,
    pub cardholder_name: String,
    pub billing_zip: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(date: NaiveDate) -> Payment {
        Payment {
            id: 1,
            member_id: 1,
            amount: Decimal::from(50),
            payment_date: date,
            payment_method: "card".to_string(),
            status: PaymentStatus::Success,
            notes: None,
        }
    }

    #[test]
    fn test_next_due_is_one_month_after_latest() {
        let payments = vec![
            payment(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()),
            payment(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()),
        ];
        assert_eq!(
            next_due(&payments),
            Some(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap())
        );
    }

    #[test]
    fn test_next_due_empty() {
        assert_eq!(next_due(&[]), None);
    }

    #[test]
    fn test_overdue_boundary() {
        let payments = vec![payment(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())];
        // 35 days out is still on time, 36 is overdue
        let on_time = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();
        let late = NaiveDate::from_ymd_opt(2024, 2, 6).unwrap();
        assert!(!is_overdue(&payments, on_time));
        assert!(is_overdue(&payments, late));
    }

    #[test]
    fn test_no_payments_is_not_overdue() {
        assert!(!is_overdue(&[], NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
    }
}
