//! Segment catalog — validates and indexes group-level spending profiles.
//!
//! Input arrives column-oriented (six parallel arrays, one entry per
//! segment), the shape configuration files naturally take. The catalog
//! reshapes it row-oriented and keys it by segment name for O(1) lookup.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    customer::CustomerProfile,
    error::{SimError, SimResult},
    params::lognormal_params,
    rng::SimRng,
    types::round_cents,
};

/// Column-oriented catalog input. All six vectors must have one entry
/// per segment; anything missing or mistyped fails deserialization with
/// a descriptive error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentColumns {
    pub name: Vec<String>,
    pub txn_mean_low: Vec<f64>,
    pub txn_mean_high: Vec<f64>,
    pub txn_cv_low: Vec<f64>,
    pub txn_cv_high: Vec<f64>,
    pub txn_lambda: Vec<f64>,
}

impl Default for SegmentColumns {
    /// The five canonical spending bands.
    fn default() -> Self {
        Self {
            name: ["low", "low-middle", "middle", "high-middle", "high"]
                .map(String::from)
                .to_vec(),
            txn_mean_low: vec![5.0, 20.0, 40.0, 60.0, 80.0],
            txn_mean_high: vec![20.0, 40.0, 60.0, 80.0, 100.0],
            txn_cv_low: vec![0.3, 0.4, 0.5, 0.6, 0.7],
            txn_cv_high: vec![0.4, 0.5, 0.6, 0.7, 0.8],
            txn_lambda: vec![0.25, 0.5, 1.0, 1.5, 2.0],
        }
    }
}

/// Row-oriented per-segment profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupProfile {
    pub txn_mean_low: f64,
    pub txn_mean_high: f64,
    pub txn_cv_low: f64,
    pub txn_cv_high: f64,
    pub txn_lambda: f64,
}

/// Reshape a column-oriented JSON object (parallel arrays) into rows
/// keyed by the values of `key_field`.
///
/// ```text
/// {"name": ["A", "B"], "x": [1, 2]}  ->  {"A": {"x": 1}, "B": {"x": 2}}
/// ```
///
/// Pure and schema-independent. Errors on non-object input, a missing
/// or non-array field, length mismatches, non-string keys, and
/// duplicate keys.
pub fn rows_from_columns(columns: &Value, key_field: &str) -> SimResult<HashMap<String, Value>> {
    let invalid = |reason: String| SimError::InvalidCatalog { reason };

    let object = columns
        .as_object()
        .ok_or_else(|| invalid("column input must be a JSON object".into()))?;
    let keys = object
        .get(key_field)
        .and_then(Value::as_array)
        .ok_or_else(|| invalid(format!("key field '{key_field}' missing or not an array")))?;

    let mut rows: HashMap<String, Value> = HashMap::with_capacity(keys.len());
    for (i, key) in keys.iter().enumerate() {
        let key = key
            .as_str()
            .ok_or_else(|| invalid(format!("key field '{key_field}' entry {i} is not a string")))?;

        let mut row = serde_json::Map::with_capacity(object.len() - 1);
        for (field, values) in object {
            if field == key_field {
                continue;
            }
            let values = values
                .as_array()
                .ok_or_else(|| invalid(format!("field '{field}' is not an array")))?;
            if values.len() != keys.len() {
                return Err(invalid(format!(
                    "field '{field}' has {} entries, expected {}",
                    values.len(),
                    keys.len()
                )));
            }
            row.insert(field.clone(), values[i].clone());
        }

        if rows.insert(key.to_string(), Value::Object(row)).is_some() {
            return Err(invalid(format!("duplicate key '{key}'")));
        }
    }
    Ok(rows)
}

/// Validated, name-keyed collection of group profiles.
#[derive(Debug, Clone)]
pub struct SegmentCatalog {
    segments: HashMap<String, GroupProfile>,
}

impl SegmentCatalog {
    /// Build from a typed column record.
    pub fn from_columns(columns: &SegmentColumns) -> SimResult<Self> {
        let value = serde_json::to_value(columns)?;
        let rows = rows_from_columns(&value, "name")?;

        let mut segments = HashMap::with_capacity(rows.len());
        for (name, row) in rows {
            let profile: GroupProfile = serde_json::from_value(row)?;
            Self::check_profile(&name, &profile)?;
            segments.insert(name, profile);
        }
        Ok(Self { segments })
    }

    /// Build from raw JSON, validating field presence and types first.
    pub fn from_value(value: &Value) -> SimResult<Self> {
        let columns: SegmentColumns = serde_json::from_value(value.clone())?;
        Self::from_columns(&columns)
    }

    fn check_profile(name: &str, profile: &GroupProfile) -> SimResult<()> {
        let invalid = |reason: String| SimError::InvalidCatalog { reason };
        if profile.txn_mean_low <= 0.0 {
            return Err(invalid(format!(
                "segment '{name}': txn_mean_low must be positive"
            )));
        }
        if profile.txn_mean_low > profile.txn_mean_high {
            return Err(invalid(format!("segment '{name}': mean range inverted")));
        }
        if profile.txn_cv_low < 0.0 || profile.txn_cv_low > profile.txn_cv_high {
            return Err(invalid(format!("segment '{name}': cv range invalid")));
        }
        if profile.txn_lambda < 0.0 {
            return Err(invalid(format!(
                "segment '{name}': txn_lambda must be >= 0"
            )));
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&GroupProfile> {
        self.segments.get(name)
    }

    /// Segment names in sorted order, for deterministic iteration.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.segments.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Sample a concrete customer profile from the named segment.
    ///
    /// Mean and cv are drawn uniformly within the segment's ranges
    /// (rounded to 2 dp), then converted to log-space parameters. Every
    /// call draws independently — no memoization.
    pub fn sample_customer_profile(
        &self,
        name: &str,
        rng: &mut SimRng,
    ) -> SimResult<CustomerProfile> {
        let profile = self.segments.get(name).ok_or_else(|| SimError::UnknownSegment {
            name: name.to_string(),
        })?;

        let txn_mean = round_cents(rng.uniform(profile.txn_mean_low, profile.txn_mean_high));
        let txn_cv = round_cents(rng.uniform(profile.txn_cv_low, profile.txn_cv_high));
        let (txn_mu, txn_sigma) = lognormal_params(txn_mean, txn_cv)?;

        Ok(CustomerProfile {
            txn_mean,
            txn_mu,
            txn_sigma,
            txn_lambda: profile.txn_lambda,
        })
    }
}
