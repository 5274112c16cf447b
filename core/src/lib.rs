//! synthtxn-core — synthetic consumer transaction histories with
//! labeled fraud injection.
//!
//! The library produces training/testing data for fraud-detection
//! experimentation: a segment catalog samples per-customer spending
//! profiles, customers generate baseline histories (log-normal values,
//! Poisson daily counts, daytime-centered timing, rare big-ticket
//! draws), and a fraud generator splices one of three labeled
//! anomalous sequences into a chosen date range.
//!
//! The core performs no I/O; writers live in the companion runner.

pub mod catalog;
pub mod customer;
pub mod dataset;
pub mod error;
pub mod fraud;
pub mod id;
pub mod params;
pub mod rng;
pub mod types;

pub use catalog::{rows_from_columns, GroupProfile, SegmentCatalog, SegmentColumns};
pub use customer::{Customer, CustomerProfile};
pub use dataset::{generate_dataset, Dataset, DatasetConfig};
pub use error::{SimError, SimResult};
pub use fraud::FraudTxnGenerator;
pub use id::IdGenerator;
pub use params::lognormal_params;
pub use rng::SimRng;
pub use types::Transaction;
