use thiserror::Error;

/// Unified error type for `walras` operations.
#[derive(Debug, Error)]
pub enum EquilibriumError {
    /// Raised when an economy parameter lies outside its admissible range.
    #[error("parameter `{name}` is invalid: {value} ({reason})")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The value that was supplied.
        value: f64,
        /// Short description of the violated requirement.
        reason: &'static str,
    },

    /// Raised when demand is evaluated at a price that is not strictly positive and finite.
    #[error("price of good 1 must be strictly positive and finite, found {price}")]
    InvalidPrice { price: f64 },

    /// Raised when sweep options cannot produce a usable grid.
    #[error("invalid sweep grid: {reason}")]
    InvalidGrid { reason: &'static str },

    /// Raised when an equilibrium is requested but tâtonnement exhausted its budget.
    #[error(
        "tâtonnement did not clear the market after {iterations} iterations; excess demand {excess_demand}"
    )]
    DidNotConverge {
        /// Number of price updates performed before termination.
        iterations: usize,
        /// Excess demand for good 1 at the last price.
        excess_demand: f64,
    },
}

impl EquilibriumError {
    /// Helper to format an [`InvalidParameter`](EquilibriumError::InvalidParameter) error.
    pub fn invalid_parameter(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }

    /// Helper to raise when a price violates the positivity precondition.
    pub fn invalid_price(price: f64) -> Self {
        Self::InvalidPrice { price }
    }

    /// Helper to reject sweep options that cannot produce a grid.
    pub fn invalid_grid(reason: &'static str) -> Self {
        Self::InvalidGrid { reason }
    }
}

/// Type alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, EquilibriumError>;
