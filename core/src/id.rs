//! Opaque identifier generation.
//!
//! Ids are uuid4 hex truncated to a fixed length, with optional prefix
//! and suffix on top. Uniqueness is probabilistic (10 hex chars give a
//! ~2^40 space); callers needing guaranteed global uniqueness must add
//! their own collision check downstream.

use uuid::Uuid;

pub const DEFAULT_ID_LENGTH: usize = 10;

/// Generator of fixed-length opaque string identifiers.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    id_length: usize,
}

impl IdGenerator {
    pub fn new(id_length: usize) -> Self {
        Self { id_length }
    }

    /// Generate one id. Total length is `prefix + id_length + suffix`.
    pub fn generate(&self, prefix: &str, suffix: &str) -> String {
        let hex = Uuid::new_v4().simple().to_string();
        format!("{prefix}{}{suffix}", &hex[..self.id_length])
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ID_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn length_contract_holds() {
        let ids = IdGenerator::default();
        assert_eq!(ids.generate("", "").len(), 10);
        assert_eq!(ids.generate("t_", "").len(), 12);
        assert_eq!(ids.generate("t_", "-x").len(), 14);
        assert_eq!(IdGenerator::new(6).generate("", "").len(), 6);
    }

    #[test]
    fn prefix_and_suffix_are_preserved() {
        let id = IdGenerator::default().generate("t_", "-eu");
        assert!(id.starts_with("t_"), "missing prefix: {id}");
        assert!(id.ends_with("-eu"), "missing suffix: {id}");
    }

    #[test]
    fn no_collisions_across_ten_thousand_ids() {
        let ids = IdGenerator::default();
        let drawn: HashSet<String> = (0..10_000).map(|_| ids.generate("t_", "")).collect();
        assert_eq!(drawn.len(), 10_000, "duplicate ids generated");
    }
}
