//! Walrasian tâtonnement: the price of good 1 moves with its excess demand until the market clears.

use serde::{Deserialize, Serialize};

use crate::economy::{check_price, Agent, Bundle, Economy};
use crate::error::{EquilibriumError, Result};
use crate::solving::{
    Status, TatonnementOptions, TatonnementStep, TatonnementSummary, TraceSink,
    MARKET_CLEARING_TOLERANCE, PRICE_STEP,
};

/// Competitive equilibrium of the economy: clearing price and the resulting allocation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Equilibrium {
    /// Market-clearing price of good 1 (good 2 is the numeraire).
    pub price: f64,
    /// Bundle demanded by agent A at `price`.
    pub allocation_a: Bundle,
    /// Bundle demanded by agent B at `price`.
    pub allocation_b: Bundle,
    pub utility_a: f64,
    pub utility_b: f64,
    /// Diagnostics from the price search.
    pub search: TatonnementSummary,
}

impl Equilibrium {
    pub fn allocation(&self, agent: Agent) -> Bundle {
        match agent {
            Agent::A => self.allocation_a,
            Agent::B => self.allocation_b,
        }
    }

    pub fn utility(&self, agent: Agent) -> f64 {
        match agent {
            Agent::A => self.utility_a,
            Agent::B => self.utility_b,
        }
    }
}

impl Economy {
    /// Searches for the market-clearing price starting from `initial_price`.
    ///
    /// See [`market_clearing_price_traced`](Self::market_clearing_price_traced).
    pub fn market_clearing_price(
        &self,
        initial_price: f64,
        options: &TatonnementOptions,
    ) -> Result<TatonnementSummary> {
        self.market_clearing_price_traced(initial_price, options, &mut ())
    }

    /// Runs the tâtonnement process, reporting evaluations to `sink`.
    ///
    /// Each iteration evaluates `eps1` at the current price and stops once
    /// `|eps1| < MARKET_CLEARING_TOLERANCE` or `max_iterations` updates have been
    /// applied. Otherwise the price moves by `PRICE_STEP * eps1 / alpha`.
    /// Running out of iterations is not an error: the summary carries
    /// [`Status::MaxIterations`] and the last price. An update that would make
    /// the price non-positive or non-finite stops the search with
    /// [`Status::Diverged`] and the last admissible price.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` when `options.strict` is set and `alpha == 0`.
    /// - `InvalidPrice` when the initial price is not strictly positive and finite.
    pub fn market_clearing_price_traced<S>(
        &self,
        initial_price: f64,
        options: &TatonnementOptions,
        sink: &mut S,
    ) -> Result<TatonnementSummary>
    where
        S: TraceSink + ?Sized,
    {
        let alpha = self.alpha();
        if options.strict && alpha == 0.0 {
            return Err(EquilibriumError::invalid_parameter(
                "alpha",
                alpha,
                "price update divides by alpha",
            ));
        }
        check_price(initial_price)?;

        let mut price = initial_price;
        let mut iteration = 0usize;

        loop {
            let excess_demand = self.excess_demand(price)?;
            let step = TatonnementStep {
                iteration,
                price,
                excess_demand,
            };

            let converged = excess_demand.eps1.abs() < MARKET_CLEARING_TOLERANCE;
            if converged || iteration >= options.max_iterations {
                sink.record(&step);
                let status = if converged {
                    log::debug!(
                        "market cleared at p1 = {price:.8} after {iteration} iterations"
                    );
                    Status::Converged
                } else {
                    log::warn!(
                        "tâtonnement stopped after {iteration} iterations without clearing the market \
                         (p1 = {price:.8}, excess demand {:.3e})",
                        excess_demand.eps1
                    );
                    Status::MaxIterations
                };
                return Ok(TatonnementSummary {
                    price,
                    excess_demand,
                    iterations: iteration,
                    status,
                });
            }

            let next = price + PRICE_STEP * excess_demand.eps1 / alpha;
            if check_price(next).is_err() {
                sink.record(&step);
                log::warn!(
                    "tâtonnement diverged after {iteration} iterations: update from p1 = {price:.8} \
                     gives p1 = {next}"
                );
                return Ok(TatonnementSummary {
                    price,
                    excess_demand,
                    iterations: iteration,
                    status: Status::Diverged,
                });
            }

            if options.should_trace(iteration) {
                sink.record(&step);
            }

            price = next;
            iteration += 1;
        }
    }

    /// Solves for the equilibrium and evaluates the allocation it supports.
    ///
    /// Unlike [`market_clearing_price`](Self::market_clearing_price), exhausting
    /// the iteration budget or diverging is reported as
    /// [`DidNotConverge`](EquilibriumError::DidNotConverge).
    pub fn equilibrium(
        &self,
        initial_price: f64,
        options: &TatonnementOptions,
    ) -> Result<Equilibrium> {
        let search = self.market_clearing_price(initial_price, options)?;
        if !search.is_converged() {
            return Err(EquilibriumError::DidNotConverge {
                iterations: search.iterations,
                excess_demand: search.excess_demand.eps1,
            });
        }

        let price = search.price;
        let allocation_a = self.demand(Agent::A, price)?;
        let allocation_b = self.demand(Agent::B, price)?;

        Ok(Equilibrium {
            price,
            allocation_a,
            allocation_b,
            utility_a: self.utility(Agent::A, allocation_a.x1, allocation_a.x2),
            utility_b: self.utility(Agent::B, allocation_b.x1, allocation_b.x2),
            search,
        })
    }
}
