//! Diagnostic enumerations over a fixed grid: Pareto-improving allocations and the excess-demand curve.

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::economy::{Agent, Economy};
use crate::error::{EquilibriumError, Result};

/// Grid resolution and price range used by the sweeps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepOptions {
    /// Number of evenly spaced points per axis, endpoints included.
    pub grid_points: usize,
    /// Lowest price sampled by [`Economy::excess_demand_curve`].
    pub price_min: f64,
    /// Highest price sampled by [`Economy::excess_demand_curve`].
    pub price_max: f64,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            grid_points: 76,
            price_min: 0.5,
            price_max: 2.5,
        }
    }
}

impl SweepOptions {
    pub fn with_grid_points(mut self, grid_points: usize) -> Self {
        self.grid_points = grid_points;
        self
    }

    pub fn with_price_range(mut self, price_min: f64, price_max: f64) -> Self {
        self.price_min = price_min;
        self.price_max = price_max;
        self
    }

    fn validate_grid(&self) -> Result<()> {
        if self.grid_points < 2 {
            return Err(EquilibriumError::invalid_grid(
                "at least two grid points are required",
            ));
        }
        Ok(())
    }

    fn validate_prices(&self) -> Result<()> {
        self.validate_grid()?;
        if !(self.price_min.is_finite() && self.price_max.is_finite()) {
            return Err(EquilibriumError::invalid_grid("price bounds must be finite"));
        }
        if self.price_min <= 0.0 {
            return Err(EquilibriumError::invalid_grid("price_min must be positive"));
        }
        if self.price_max < self.price_min {
            return Err(EquilibriumError::invalid_grid(
                "price_max must not be below price_min",
            ));
        }
        Ok(())
    }

    /// The `k`-th of `grid_points` evenly spaced points on `[0, 1]`.
    fn unit_point(&self, k: usize) -> f64 {
        k as f64 / (self.grid_points - 1) as f64
    }
}

/// Allocations for agent A that leave both agents at least as well off as their endowment.
///
/// Agent B receives the complement `(1 - x1a, 1 - x2a)`. Entries follow the
/// enumeration order: `x1a` ascending, then `x2a` ascending.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParetoSet {
    x1a: DVector<f64>,
    x2a: DVector<f64>,
}

impl ParetoSet {
    pub fn x1a(&self) -> &DVector<f64> {
        &self.x1a
    }

    pub fn x2a(&self) -> &DVector<f64> {
        &self.x2a
    }

    pub fn len(&self) -> usize {
        self.x1a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x1a.is_empty()
    }

    /// Iterates over `(x1a, x2a)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x1a.iter().copied().zip(self.x2a.iter().copied())
    }

    /// Whether the exact allocation `(x1a, x2a)` was retained.
    #[allow(clippy::float_cmp)]
    pub fn contains(&self, x1a: f64, x2a: f64) -> bool {
        self.iter().any(|(a, b)| a == x1a && b == x2a)
    }
}

/// Excess demand sampled at evenly spaced prices, in ascending price order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExcessDemandCurve {
    prices: DVector<f64>,
    eps1: DVector<f64>,
    eps2: DVector<f64>,
}

impl ExcessDemandCurve {
    pub fn prices(&self) -> &DVector<f64> {
        &self.prices
    }

    pub fn eps1(&self) -> &DVector<f64> {
        &self.eps1
    }

    pub fn eps2(&self) -> &DVector<f64> {
        &self.eps2
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Iterates over `(price, eps1, eps2)` samples.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.prices
            .iter()
            .zip(self.eps1.iter())
            .zip(self.eps2.iter())
            .map(|((p, e1), e2)| (*p, *e1, *e2))
    }

    /// Returns the first pair of adjacent prices between which `eps1` changes sign.
    ///
    /// A sample where `eps1` is exactly zero yields a degenerate bracket at that price.
    pub fn sign_change(&self) -> Option<(f64, f64)> {
        let n = self.len();
        for i in 0..n {
            if self.eps1[i] == 0.0 {
                return Some((self.prices[i], self.prices[i]));
            }
            if i + 1 < n && self.eps1[i].signum() != self.eps1[i + 1].signum() {
                return Some((self.prices[i], self.prices[i + 1]));
            }
        }
        None
    }
}

impl Economy {
    /// Enumerates grid allocations that weakly improve on both endowment utilities.
    pub fn pareto_improvements(&self, options: &SweepOptions) -> Result<ParetoSet> {
        options.validate_grid()?;

        let baseline_a = self.endowment_utility(Agent::A);
        let baseline_b = self.endowment_utility(Agent::B);

        let mut x1a_kept = Vec::new();
        let mut x2a_kept = Vec::new();
        for i in 0..options.grid_points {
            let x1a = options.unit_point(i);
            for j in 0..options.grid_points {
                let x2a = options.unit_point(j);
                let x1b = 1.0 - x1a;
                let x2b = 1.0 - x2a;

                if self.utility(Agent::A, x1a, x2a) >= baseline_a
                    && self.utility(Agent::B, x1b, x2b) >= baseline_b
                {
                    x1a_kept.push(x1a);
                    x2a_kept.push(x2a);
                }
            }
        }

        log::debug!(
            "{} of {} grid allocations improve on the endowment",
            x1a_kept.len(),
            options.grid_points * options.grid_points
        );

        Ok(ParetoSet {
            x1a: DVector::from_vec(x1a_kept),
            x2a: DVector::from_vec(x2a_kept),
        })
    }

    /// Samples aggregate excess demand at evenly spaced prices in `[price_min, price_max]`.
    pub fn excess_demand_curve(&self, options: &SweepOptions) -> Result<ExcessDemandCurve> {
        options.validate_prices()?;

        let n = options.grid_points;
        let span = options.price_max - options.price_min;
        let mut prices = DVector::zeros(n);
        let mut eps1 = DVector::zeros(n);
        let mut eps2 = DVector::zeros(n);

        for i in 0..n {
            let price = options.price_min + span * options.unit_point(i);
            let excess = self.excess_demand(price)?;
            prices[i] = price;
            eps1[i] = excess.eps1;
            eps2[i] = excess.eps2;
        }

        Ok(ExcessDemandCurve { prices, eps1, eps2 })
    }
}
