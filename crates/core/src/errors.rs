use thiserror::Error;

/// Unified error type for the finance-insights-core library.
///
/// Only boundary operations fail: parsing a snapshot, a preset or a report
/// mode, loading settings, and fingerprinting inputs for memoization.
/// Derivations themselves never return errors.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Parameters ──────────────────────────────────────────────────
    #[error("Unsupported window preset '{0}': expected one of all, 3, 5, 10")]
    InvalidPreset(String),

    #[error("Unsupported report mode '{0}': expected yearly or total")]
    InvalidReportMode(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    // ── Snapshot contract ───────────────────────────────────────────
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<bincode::Error> for CoreError {
    fn from(e: bincode::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
