//! Dataset assembly — the orchestrator over both generators.
//!
//! Builds a complete labeled training set: baseline histories for a
//! population of customers sampled from the segment catalog, with
//! fraud episodes spliced in at a configurable rate.
//!
//! STREAM LAYOUT (fixed, never reordered):
//!   0  — control: profile sampling, episode scheduling
//!   1  — fraud sequence generation
//!   2+ — one stream per customer, in onboarding order
//! Customer k always draws from stream 2+k, so growing the population
//! never perturbs existing customers' histories.

use chrono::{Duration, NaiveDate};

use crate::{
    catalog::SegmentCatalog,
    customer::Customer,
    error::SimResult,
    fraud::FraudTxnGenerator,
    rng::SimRng,
    types::Transaction,
};

const CONTROL_STREAM: u64 = 0;
const FRAUD_STREAM: u64 = 1;
const CUSTOMER_STREAM_BASE: u64 = 2;

#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// Customers onboarded per catalog segment.
    pub customers_per_segment: usize,
    /// First day of every baseline history.
    pub start_date: NaiveDate,
    /// Length of every baseline history in days.
    pub num_days: u32,
    /// Probability that a customer receives one fraud episode.
    pub fraud_rate: f64,
}

/// A fully assembled labeled dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All transactions, sorted by (customer_id, timestamp).
    pub transactions: Vec<Transaction>,
    pub customer_count: usize,
    pub fraud_episode_count: usize,
}

impl Dataset {
    pub fn fraud_txn_count(&self) -> usize {
        self.transactions.iter().filter(|t| t.txn_fraud == 1).count()
    }
}

/// Generate a complete dataset. Identical (catalog, config, seed)
/// inputs produce identical transaction sequences (ids excepted — they
/// are opaque and random by contract).
pub fn generate_dataset(
    catalog: &SegmentCatalog,
    config: &DatasetConfig,
    master_seed: u64,
) -> SimResult<Dataset> {
    let mut control = SimRng::derive_stream(master_seed, CONTROL_STREAM);
    let mut fraud_gen =
        FraudTxnGenerator::with_rng(SimRng::derive_stream(master_seed, FRAUD_STREAM));

    let mut transactions = Vec::new();
    let mut customer_count: usize = 0;
    let mut fraud_episode_count = 0;

    for name in catalog.names() {
        for index in 0..config.customers_per_segment {
            let profile = catalog.sample_customer_profile(name, &mut control)?;
            let customer_id = format!("c_{name}_{index:04}");
            let stream = CUSTOMER_STREAM_BASE + customer_count as u64;
            let mut customer = Customer::with_rng(
                customer_id.clone(),
                profile,
                SimRng::derive_stream(master_seed, stream),
            );
            transactions.extend(customer.generate_batch_txns(config.start_date, config.num_days));
            customer_count += 1;

            if control.chance(config.fraud_rate) {
                let scenario = 1 + control.next_u64_below(3) as u8;
                let day = control.next_u64_below(u64::from(config.num_days.max(1))) as i64;
                let date = config.start_date + Duration::days(day);
                transactions.extend(fraud_gen.generate_fraudulent_txns(
                    &customer_id,
                    scenario,
                    date,
                )?);
                fraud_episode_count += 1;
            }
        }
    }

    transactions.sort_by(|a, b| {
        a.customer_id
            .cmp(&b.customer_id)
            .then(a.txn_timestamp.cmp(&b.txn_timestamp))
    });

    log::info!(
        "dataset: {} customers, {} txns, {} fraud episodes",
        customer_count,
        transactions.len(),
        fraud_episode_count
    );

    Ok(Dataset {
        transactions,
        customer_count,
        fraud_episode_count,
    })
}
