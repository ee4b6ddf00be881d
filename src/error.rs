use std::collections::TryReserveError;

/// Errors reported by table construction and growth.
///
/// A missing key is not an error; lookups and removals report it as `None`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    #[error("table capacity must be greater than zero")]
    ZeroCapacity,

    #[error("grow factor must be a finite number greater than 1.0 (got {0})")]
    InvalidGrowFactor(f64),

    #[error("failed to allocate {capacity} slots")]
    Allocation {
        capacity: usize,
        #[source]
        source: TryReserveError,
    },
}
