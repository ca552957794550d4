/*
 * Error Module
 *
 * Error taxonomy for the flocking core and its configuration layer.
 * The per-tick code never surfaces these to the renderer: degenerate
 * vectors and empty neighbour sets are absorbed as zero adjustments,
 * while configuration problems are reported before the first tick.
 */

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlockError {
    /// A zero-length vector was asked for a direction.
    #[error("cannot take the direction of a zero-length vector")]
    DegenerateVector,

    /// A mean was requested over no agents.
    #[error("cannot average over an empty neighbour set")]
    EmptyNeighborSet,

    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl FlockError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        FlockError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FlockError>;
