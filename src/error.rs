use thiserror::Error;

/// Errors returned by the oscillator-network algorithms in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Input slice is empty (no data points / no oscillators).
    #[error("empty input")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Requested cluster count is incompatible with the dataset.
    #[error("invalid cluster count: requested {requested}, but dataset has {n_items} items")]
    InvalidClusterCount {
        /// Requested number of clusters.
        requested: usize,
        /// Number of items in the dataset.
        n_items: usize,
    },

    /// Points in a dataset have inconsistent dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// A topology's structural requirement is violated (e.g. a grid topology
    /// over a non-square oscillator count).
    #[error("topology {topology} cannot be built over {size} oscillators")]
    InvalidTopology {
        /// Topology kind name.
        topology: &'static str,
        /// Offending network size.
        size: usize,
    },

    /// Too few points for a neighborhood computation.
    #[error("not enough points: need more than {required}, found {found}")]
    NotEnoughPoints {
        /// Minimum number of points required.
        required: usize,
        /// Number of points supplied.
        found: usize,
    },

    /// A trained feature map does not cover the dataset it claims to summarize.
    #[error("feature map captured {captured} points, expected {expected}")]
    MapMismatch {
        /// Points captured across all map units.
        captured: usize,
        /// Points in the dataset.
        expected: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
