//! Walrasian tâtonnement for a two-good, two-agent Cobb-Douglas exchange economy.
//!
//! The economy holds one unit of each good, split between agents A and B.
//! Good 2 is the numeraire, so a single price `p1` determines both agents'
//! demand. This crate offers tools to
//!
//! - describe the economy and evaluate Cobb-Douglas utility (`economy` module),
//! - compute Marshallian demand and aggregate excess demand (`demand` module),
//! - configure and observe the price-adjustment process (`solving` module),
//! - search for the market-clearing price (`equilibrium` module), and
//! - enumerate Pareto-improving allocations and sample the excess-demand
//!   curve (`sweep` module).
//!
//! # Quick start
//!
//! ```no_run
//! use walras::{Economy, LogTrace, TatonnementOptions};
//!
//! let economy = Economy::new(1.0 / 3.0, 2.0 / 3.0, 0.8, 0.3).expect("valid parameters");
//! let options = TatonnementOptions::default();
//!
//! let summary = economy
//!     .market_clearing_price_traced(1.5, &options, &mut LogTrace::default())
//!     .expect("positive price");
//! if summary.is_converged() {
//!     println!("p1 = {:.8} after {} iterations", summary.price, summary.iterations);
//! }
//! ```
//!
//! The price update `p1 += 0.5 * eps1 / alpha` is a heuristic tailored to this
//! utility family and is not guaranteed to converge for every parameterization.

pub mod demand;
pub mod economy;
pub mod equilibrium;
pub mod error;
pub mod solving;
pub mod sweep;

pub use demand::ExcessDemand;
pub use economy::{Agent, Bundle, Economy};
pub use equilibrium::Equilibrium;
pub use error::{EquilibriumError, Result};
pub use solving::{
    LogTrace, Status, TatonnementOptions, TatonnementStep, TatonnementSummary, TraceSink,
    MARKET_CLEARING_TOLERANCE, PRICE_STEP,
};
pub use sweep::{ExcessDemandCurve, ParetoSet, SweepOptions};
