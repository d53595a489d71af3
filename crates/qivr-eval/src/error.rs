use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("unknown benchmark: {0}")]
    UnknownBenchmark(String),

    #[error("invalid benchmark '{key}': {reason}")]
    InvalidBenchmark { key: String, reason: String },

    #[error("pain score {0} is outside range [0, 10]")]
    PainOutOfRange(f64),

    #[error("overlay_version {found} is newer than this build supports ({supported})")]
    UnsupportedOverlayVersion { found: u64, supported: u32 },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
