//! Demand-side primitives: Marshallian demand and aggregate excess demand.

use serde::{Deserialize, Serialize};

use crate::economy::{check_price, Agent, Bundle, Economy};
use crate::error::Result;

/// Aggregate demand minus aggregate endowment for each good.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExcessDemand {
    /// Excess demand for good 1.
    pub eps1: f64,
    /// Excess demand for good 2 (the numeraire).
    pub eps2: f64,
}

impl Economy {
    /// Computes the utility-maximizing bundle of `agent` at price `p1`.
    ///
    /// Cobb-Douglas preferences spend the share `e` of wealth on good 1 and the
    /// rest on good 2. Fails with [`InvalidPrice`](crate::error::EquilibriumError::InvalidPrice)
    /// unless `p1` is strictly positive and finite.
    pub fn demand(&self, agent: Agent, p1: f64) -> Result<Bundle> {
        let wealth = self.wealth(agent, p1)?;
        let e = self.exponent(agent);
        Ok(Bundle::new(e * wealth / p1, (1.0 - e) * wealth))
    }

    /// Sums both agents' demand and subtracts the unit supply of each good.
    pub fn excess_demand(&self, p1: f64) -> Result<ExcessDemand> {
        check_price(p1)?;
        let a = self.demand(Agent::A, p1)?;
        let b = self.demand(Agent::B, p1)?;

        let eps1 = a.x1 - self.w1a() + b.x1 - (1.0 - self.w1a());
        let eps2 = a.x2 - self.w2a() + b.x2 - (1.0 - self.w2a());
        Ok(ExcessDemand { eps1, eps2 })
    }

    /// Value of aggregate excess demand, `p1 * eps1 + eps2`.
    ///
    /// Every agent exhausts its budget, so this is zero up to rounding.
    pub fn walras_residual(&self, p1: f64) -> Result<f64> {
        let excess = self.excess_demand(p1)?;
        Ok(p1 * excess.eps1 + excess.eps2)
    }
}
