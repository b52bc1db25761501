//! Domain-level errors
//!
//! Queries never fail: "not found" and "no common ancestor" are `None`.
//! Errors only cover structural misuse and settings loading.

use thiserror::Error;

use crate::domain::entities::VampireId;

/// Errors raised while mutating a genealogy or loading its settings.
#[derive(Error, Debug)]
pub enum GenealogyError {
    #[error("unknown vampire: {0}")]
    UnknownVampire(VampireId),

    #[error("cycle detected: {child} is an ancestor of {creator}")]
    CycleDetected {
        creator: VampireId,
        child: VampireId,
    },

    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result type for genealogy operations.
pub type GenealogyResult<T> = Result<T, GenealogyError>;
