use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid segment catalog: {reason}")]
    InvalidCatalog { reason: String },

    #[error("Segment '{name}' not found in catalog")]
    UnknownSegment { name: String },

    #[error("Log-normal mean must be positive, got {mean}")]
    NonPositiveMean { mean: f64 },

    #[error("Invalid fraud scenario {scenario}: choose 1, 2 or 3")]
    InvalidScenario { scenario: u8 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type SimResult<T> = Result<T, SimError>;
