//! Customer transaction generator.
//!
//! Each simulated customer owns a sampled profile and an independent
//! random stream, and produces baseline (non-fraudulent) transactions:
//! single draws, single stamped transactions, and day-batched histories
//! whose daily counts follow the profile's Poisson rate.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::{
    id::IdGenerator,
    rng::SimRng,
    types::{round_cents, CustomerId, Transaction, SCENARIO_NONE, SECS_PER_DAY},
};

/// Probability that a single value draw is a big-ticket item.
const BIG_TICKET_PROBA: f64 = 0.005;
/// Big-ticket draws target 10x the profile mean at the same scale.
const BIG_TICKET_MULTIPLIER: f64 = 10.0;
/// Time of day revolves around noon with a wide spread, so activity
/// concentrates in daytime hours (grocery, gas, other shopping).
const MIDDAY_SECS: f64 = 43_200.0;
const TIME_OF_DAY_STD_SECS: f64 = 20_000.0;

/// Concrete spending parameters for one customer, sampled once from a
/// segment's ranges and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    /// Sampled arithmetic mean of transaction values.
    pub txn_mean: f64,
    /// Log-space location; draws realize `txn_mean` on average.
    pub txn_mu: f64,
    /// Log-space scale.
    pub txn_sigma: f64,
    /// Expected transactions per day (Poisson rate).
    pub txn_lambda: f64,
}

pub struct Customer {
    customer_id: CustomerId,
    profile: CustomerProfile,
    ids: IdGenerator,
    rng: SimRng,
}

impl Customer {
    /// Build with an ambient entropy-seeded stream.
    pub fn new(customer_id: impl Into<CustomerId>, profile: CustomerProfile) -> Self {
        Self::with_rng(customer_id, profile, SimRng::from_entropy())
    }

    /// Build with an explicit stream, for reproducible runs.
    pub fn with_rng(
        customer_id: impl Into<CustomerId>,
        profile: CustomerProfile,
        rng: SimRng,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            profile,
            ids: IdGenerator::default(),
            rng,
        }
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn profile(&self) -> &CustomerProfile {
        &self.profile
    }

    /// One value draw plus whether it was the big-ticket branch.
    fn draw_value(&mut self) -> (f64, bool) {
        let big = self.rng.chance(BIG_TICKET_PROBA);
        let location = if big {
            self.profile.txn_mu + BIG_TICKET_MULTIPLIER.ln()
        } else {
            self.profile.txn_mu
        };
        let value = round_cents(self.rng.lognormal(location, self.profile.txn_sigma));
        (value, big)
    }

    /// Generate a single transaction value following the profile.
    /// A fixed 0.5% of draws are big-ticket items at 10x magnitude.
    pub fn generate_txn_value(&mut self) -> f64 {
        self.draw_value().0
    }

    /// Generate one transaction stamped at the given instant.
    pub fn generate_current_txn(&mut self, now: NaiveDateTime) -> Transaction {
        Transaction {
            txn_id: self.ids.generate("t_", ""),
            customer_id: self.customer_id.clone(),
            txn_timestamp: now,
            txn_date: now.date(),
            txn_value: self.generate_txn_value(),
            txn_fraud: 0,
            txn_fraud_scenario: SCENARIO_NONE,
        }
    }

    /// Generate the customer's transactions for `num_days` consecutive
    /// days starting at `start_date`.
    ///
    /// Per day the count is Poisson(txn_lambda); each transaction's
    /// second-of-day is Normal(noon, 20000s), and draws landing outside
    /// [0, 86400) are discarded rather than clamped, which shaves the
    /// effective count slightly below the Poisson draw. Within a day,
    /// output keeps generation order; days are emitted in order.
    pub fn generate_batch_txns(&mut self, start_date: NaiveDate, num_days: u32) -> Vec<Transaction> {
        let midnight = start_date.and_time(NaiveTime::MIN);
        let mut batch = Vec::new();

        for day in 0..num_days {
            let planned = self.rng.poisson(self.profile.txn_lambda);
            for _ in 0..planned {
                let secs = self.rng.normal(MIDDAY_SECS, TIME_OF_DAY_STD_SECS) as i64;
                if !(0..SECS_PER_DAY).contains(&secs) {
                    continue;
                }
                let txn_timestamp =
                    midnight + Duration::days(i64::from(day)) + Duration::seconds(secs);
                batch.push(Transaction {
                    txn_id: self.ids.generate("t_", ""),
                    customer_id: self.customer_id.clone(),
                    txn_timestamp,
                    txn_date: txn_timestamp.date(),
                    txn_value: self.generate_txn_value(),
                    txn_fraud: 0,
                    txn_fraud_scenario: SCENARIO_NONE,
                });
            }
        }

        log::debug!(
            "customer {}: {} txns over {} days",
            self.customer_id,
            batch.len(),
            num_days
        );
        batch
    }
}
