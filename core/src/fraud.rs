//! Fraud scenario generator.
//!
//! Produces one labeled anomalous sequence per call, keyed by
//! (customer id, scenario number, date):
//!   1. Unusual large transactions scattered over a number of days.
//!   2. Large transactions in quick succession with escalating amounts.
//!   3. A small bait transaction, then quick successions of one large
//!      fixed amount.
//!
//! Each call is one-shot: no state persists between sequences beyond
//! the generator's own random stream.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::{
    error::{SimError, SimResult},
    id::IdGenerator,
    rng::SimRng,
    types::{round_cents, Transaction, SECS_PER_DAY},
};

/// The "nice number" pool shared by all scenarios: 500..2000 step 500,
/// exclusive of 2000.
const VALUE_CHOICES: [f64; 3] = [500.0, 1000.0, 1500.0];

/// Scenario 1 compromise length, uniform in [5, 14) days.
const COMPROMISED_DAYS_MIN: u64 = 5;
const COMPROMISED_DAYS_SPAN: u64 = 9;
/// Scenarios 2/3 burst length, uniform in [5, 10) transactions.
const BURST_TXNS_MIN: u64 = 5;
const BURST_TXNS_SPAN: u64 = 5;
/// Scenarios 2/3 step bound: (uniform [1, 5) minutes) in seconds.
const INTERVAL_MINUTES_MIN: u64 = 1;
const INTERVAL_MINUTES_SPAN: u64 = 4;
/// Scenario 3 bait value, uniform in [5, 10).
const BAIT_VALUE_LOW: f64 = 5.0;
const BAIT_VALUE_HIGH: f64 = 10.0;

pub struct FraudTxnGenerator {
    ids: IdGenerator,
    rng: SimRng,
}

impl FraudTxnGenerator {
    /// Build with an ambient entropy-seeded stream.
    pub fn new() -> Self {
        Self::with_rng(SimRng::from_entropy())
    }

    /// Build with an explicit stream, for reproducible runs.
    pub fn with_rng(rng: SimRng) -> Self {
        Self {
            ids: IdGenerator::default(),
            rng,
        }
    }

    /// Generate one fraudulent sequence for the given customer and
    /// date. Fails on a scenario number outside 1..=3 with no partial
    /// output.
    pub fn generate_fraudulent_txns(
        &mut self,
        customer_id: &str,
        scenario: u8,
        date: NaiveDate,
    ) -> SimResult<Vec<Transaction>> {
        // Shared setup: a random second-of-day anchor and one value
        // increment for the whole sequence.
        let start_time = self.rng.next_u64_below(SECS_PER_DAY as u64) as i64;
        let increment = VALUE_CHOICES[self.rng.next_u64_below(3) as usize];

        let txns = match scenario {
            1 => self.scattered_large(customer_id, date),
            2 | 3 => self.rapid_fire(customer_id, date, start_time, increment, scenario),
            _ => return Err(SimError::InvalidScenario { scenario }),
        };

        log::debug!(
            "fraud scenario {scenario} for {customer_id}: {} txns from {date}",
            txns.len()
        );
        Ok(txns)
    }

    /// Scenario 1: 1-2 large transactions per day across consecutive
    /// compromised days, each at an independent random time with an
    /// independently chosen value.
    fn scattered_large(&mut self, customer_id: &str, date: NaiveDate) -> Vec<Transaction> {
        let compromised_days =
            COMPROMISED_DAYS_MIN + self.rng.next_u64_below(COMPROMISED_DAYS_SPAN);

        let mut txns = Vec::new();
        for day in 0..compromised_days {
            let day_start = (date + Duration::days(day as i64)).and_time(NaiveTime::MIN);
            let txns_today = 1 + self.rng.next_u64_below(2);
            for _ in 0..txns_today {
                let at = day_start
                    + Duration::seconds(self.rng.next_u64_below(SECS_PER_DAY as u64) as i64);
                let value = VALUE_CHOICES[self.rng.next_u64_below(3) as usize];
                txns.push(self.fraud_txn(customer_id, at, value, 1));
            }
        }
        txns
    }

    /// Scenarios 2 and 3: a burst anchored at `start_time`, each step
    /// advancing by an independent uniform [1, bound) seconds so the
    /// sequence is strictly increasing in time. Scenario 2 escalates
    /// values arithmetically; scenario 3 opens with a small bait value
    /// and then repeats the fixed increment.
    fn rapid_fire(
        &mut self,
        customer_id: &str,
        date: NaiveDate,
        start_time: i64,
        increment: f64,
        scenario: u8,
    ) -> Vec<Transaction> {
        let num_txns = BURST_TXNS_MIN + self.rng.next_u64_below(BURST_TXNS_SPAN);
        let interval_secs =
            (INTERVAL_MINUTES_MIN + self.rng.next_u64_below(INTERVAL_MINUTES_SPAN)) * 60;
        let anchor = date.and_time(NaiveTime::MIN) + Duration::seconds(start_time);

        let mut offset_secs = 0i64;
        let mut txns = Vec::with_capacity(num_txns as usize);
        for i in 0..num_txns {
            if i > 0 {
                offset_secs += (1 + self.rng.next_u64_below(interval_secs - 1)) as i64;
            }
            let value = match (scenario, i) {
                (2, _) => (i + 1) as f64 * increment,
                (_, 0) => self.rng.uniform(BAIT_VALUE_LOW, BAIT_VALUE_HIGH),
                _ => increment,
            };
            txns.push(self.fraud_txn(
                customer_id,
                anchor + Duration::seconds(offset_secs),
                value,
                scenario,
            ));
        }
        txns
    }

    fn fraud_txn(
        &self,
        customer_id: &str,
        txn_timestamp: NaiveDateTime,
        txn_value: f64,
        scenario: u8,
    ) -> Transaction {
        Transaction {
            txn_id: self.ids.generate("t_", ""),
            customer_id: customer_id.to_string(),
            txn_timestamp,
            txn_date: txn_timestamp.date(),
            txn_value: round_cents(txn_value),
            txn_fraud: 1,
            txn_fraud_scenario: scenario,
        }
    }
}

impl Default for FraudTxnGenerator {
    fn default() -> Self {
        Self::new()
    }
}
