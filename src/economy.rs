//! Parameters of the two-good, two-agent exchange economy and Cobb-Douglas preferences.

use serde::{Deserialize, Serialize};

use crate::error::{EquilibriumError, Result};

/// One of the two consumers in the economy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Agent {
    /// Agent A, with exponent `alpha` and endowment `(w1a, w2a)`.
    A,
    /// Agent B, holding the complement of A's endowment.
    B,
}

impl Agent {
    /// Both agents in a fixed order.
    pub const ALL: [Agent; 2] = [Agent::A, Agent::B];
}

/// Quantities of good 1 and good 2 held or demanded by an agent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    pub x1: f64,
    pub x2: f64,
}

impl Bundle {
    pub fn new(x1: f64, x2: f64) -> Self {
        Self { x1, x2 }
    }

    /// Market value of the bundle with good 2 as numeraire.
    pub fn value(&self, p1: f64) -> f64 {
        p1 * self.x1 + self.x2
    }
}

/// Immutable description of the exchange economy.
///
/// The economy holds one unit of each good in total. Agent A owns `(w1a, w2a)`
/// and agent B owns the remainder.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EconomyParams")]
pub struct Economy {
    alpha: f64,
    beta: f64,
    w1a: f64,
    w2a: f64,
}

/// Unvalidated wire form of [`Economy`]; deserialization goes through [`Economy::new`].
#[derive(Deserialize)]
struct EconomyParams {
    alpha: f64,
    beta: f64,
    w1a: f64,
    w2a: f64,
}

impl TryFrom<EconomyParams> for Economy {
    type Error = EquilibriumError;

    fn try_from(params: EconomyParams) -> Result<Self> {
        Economy::new(params.alpha, params.beta, params.w1a, params.w2a)
    }
}

impl Default for Economy {
    fn default() -> Self {
        Self {
            alpha: 1.0 / 3.0,
            beta: 2.0 / 3.0,
            w1a: 0.8,
            w2a: 0.3,
        }
    }
}

impl Economy {
    /// Creates an economy after checking that every parameter is finite and in `[0, 1]`.
    ///
    /// A zero exponent is accepted here; the strict market-clearing search rejects it.
    pub fn new(alpha: f64, beta: f64, w1a: f64, w2a: f64) -> Result<Self> {
        check_unit_interval("alpha", alpha)?;
        check_unit_interval("beta", beta)?;
        check_unit_interval("w1a", w1a)?;
        check_unit_interval("w2a", w2a)?;
        Ok(Self {
            alpha,
            beta,
            w1a,
            w2a,
        })
    }

    /// Cobb-Douglas exponent on good 1 for agent A.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Cobb-Douglas exponent on good 1 for agent B.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Agent A's endowment of good 1.
    pub fn w1a(&self) -> f64 {
        self.w1a
    }

    /// Agent A's endowment of good 2.
    pub fn w2a(&self) -> f64 {
        self.w2a
    }

    /// Exponent on good 1 in the given agent's utility.
    pub fn exponent(&self, agent: Agent) -> f64 {
        match agent {
            Agent::A => self.alpha,
            Agent::B => self.beta,
        }
    }

    /// Bundle the agent owns before trade.
    pub fn endowment(&self, agent: Agent) -> Bundle {
        match agent {
            Agent::A => Bundle::new(self.w1a, self.w2a),
            Agent::B => Bundle::new(1.0 - self.w1a, 1.0 - self.w2a),
        }
    }

    /// Evaluates `x1^e * x2^(1 - e)` for the agent's exponent `e`.
    pub fn utility(&self, agent: Agent, x1: f64, x2: f64) -> f64 {
        let e = self.exponent(agent);
        x1.powf(e) * x2.powf(1.0 - e)
    }

    /// Utility the agent obtains by consuming its own endowment.
    pub fn endowment_utility(&self, agent: Agent) -> f64 {
        let endowment = self.endowment(agent);
        self.utility(agent, endowment.x1, endowment.x2)
    }

    /// Value of the agent's endowment at price `p1` for good 1.
    pub fn wealth(&self, agent: Agent, p1: f64) -> Result<f64> {
        check_price(p1)?;
        Ok(self.endowment(agent).value(p1))
    }
}

fn check_unit_interval(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(EquilibriumError::invalid_parameter(
            name,
            value,
            "must be finite",
        ));
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(EquilibriumError::invalid_parameter(
            name,
            value,
            "must lie in [0, 1]",
        ));
    }
    Ok(())
}

/// Rejects prices at which demand is undefined.
pub(crate) fn check_price(p1: f64) -> Result<()> {
    if p1.is_finite() && p1 > 0.0 {
        Ok(())
    } else {
        Err(EquilibriumError::invalid_price(p1))
    }
}
