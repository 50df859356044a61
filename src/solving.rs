//! Tâtonnement solver configuration, diagnostics and trace sinks.

use serde::{Deserialize, Serialize};

use crate::demand::ExcessDemand;

/// Absolute tolerance on excess demand for good 1 at which the market clears.
pub const MARKET_CLEARING_TOLERANCE: f64 = 1e-8;

/// Fixed step factor applied to the excess-demand price update.
pub const PRICE_STEP: f64 = 0.5;

/// Configuration for the tâtonnement price adjustment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TatonnementOptions {
    /// Maximum number of price updates before giving up.
    pub max_iterations: usize,
    /// Reject `alpha == 0` explicitly instead of dividing by it.
    pub strict: bool,
    /// Report every `trace_stride`-th evaluation to the trace sink (0 behaves as 1).
    pub trace_stride: usize,
}

impl Default for TatonnementOptions {
    fn default() -> Self {
        Self {
            max_iterations: 500,
            strict: true,
            trace_stride: 1,
        }
    }
}

impl TatonnementOptions {
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_trace_stride(mut self, stride: usize) -> Self {
        self.trace_stride = stride;
        self
    }

    pub(crate) fn should_trace(&self, iteration: usize) -> bool {
        iteration % self.trace_stride.max(1) == 0
    }
}

/// Indicates how the search terminated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// `|eps1|` fell below [`MARKET_CLEARING_TOLERANCE`].
    Converged,
    /// The iteration budget ran out first.
    MaxIterations,
    /// The next update would leave the admissible price range; the last valid price is kept.
    Diverged,
}

/// Outcome of a tâtonnement run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TatonnementSummary {
    /// Final price estimate for good 1.
    pub price: f64,
    /// Excess demand evaluated at `price`.
    pub excess_demand: ExcessDemand,
    /// Number of price updates performed.
    pub iterations: usize,
    pub status: Status,
}

impl TatonnementSummary {
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}

/// A single evaluation of the price-adjustment loop.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TatonnementStep {
    /// Number of updates applied before this evaluation.
    pub iteration: usize,
    pub price: f64,
    pub excess_demand: ExcessDemand,
}

/// Receives per-iteration diagnostics from the solver.
///
/// Closures taking `&TatonnementStep` implement this trait, and `()` is a
/// sink that discards everything.
pub trait TraceSink {
    fn record(&mut self, step: &TatonnementStep);
}

impl<F> TraceSink for F
where
    F: FnMut(&TatonnementStep),
{
    fn record(&mut self, step: &TatonnementStep) {
        self(step)
    }
}

impl TraceSink for () {
    fn record(&mut self, _step: &TatonnementStep) {}
}

/// Trace sink that writes progress through the `log` facade.
///
/// It reports the first few evaluations, then every `every`-th one, eliding
/// the rest with a single `...` line.
#[derive(Clone, Debug)]
pub struct LogTrace {
    head: usize,
    every: usize,
    elided: bool,
}

impl Default for LogTrace {
    fn default() -> Self {
        Self {
            head: 5,
            every: 25,
            elided: false,
        }
    }
}

impl LogTrace {
    pub fn new(head: usize, every: usize) -> Self {
        Self {
            head,
            every: every.max(1),
            elided: false,
        }
    }

    fn is_reported(&self, iteration: usize) -> bool {
        iteration < self.head || iteration % self.every == 0
    }
}

impl TraceSink for LogTrace {
    fn record(&mut self, step: &TatonnementStep) {
        if self.is_reported(step.iteration) {
            log::debug!(
                "{:3}: p1 = {:12.8} -> excess demand -> {:14.8}",
                step.iteration,
                step.price,
                step.excess_demand.eps1
            );
        } else if !self.elided {
            log::debug!("   ...");
            self.elided = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_search() {
        let options = TatonnementOptions::default();
        assert_eq!(options.max_iterations, 500);
        assert!(options.strict);
        assert!(options.should_trace(7));
    }

    #[test]
    fn zero_stride_traces_everything() {
        let options = TatonnementOptions::default().with_trace_stride(0);
        assert!(options.should_trace(3));
        let options = options.with_trace_stride(4);
        assert!(options.should_trace(8));
        assert!(!options.should_trace(9));
    }

    #[test]
    fn log_trace_reports_head_and_stride() {
        let trace = LogTrace::default();
        assert!(trace.is_reported(0));
        assert!(trace.is_reported(4));
        assert!(!trace.is_reported(5));
        assert!(trace.is_reported(25));
        assert!(!trace.is_reported(26));
    }
}
