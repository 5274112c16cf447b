//! Shared primitive types used across the entire simulator.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A stable, unique identifier for a simulated customer.
pub type CustomerId = String;

/// A stable, unique identifier for a single transaction.
pub type TxnId = String;

/// Scenario id carried on every transaction. 0 = not fraudulent.
pub const SCENARIO_NONE: u8 = 0;

/// One emitted transaction record.
///
/// The shape is identical for baseline and fraudulent transactions:
/// every row carries its customer id, and fraud is encoded by the
/// `txn_fraud` flag (0/1) plus the originating `txn_fraud_scenario`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub txn_id: TxnId,
    pub customer_id: CustomerId,
    pub txn_timestamp: NaiveDateTime,
    pub txn_date: NaiveDate,
    pub txn_value: f64,
    pub txn_fraud: u8,
    pub txn_fraud_scenario: u8,
}

/// Seconds in one civil day.
pub(crate) const SECS_PER_DAY: i64 = 86_400;

/// Round a currency value to 2 decimal places.
pub(crate) fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
