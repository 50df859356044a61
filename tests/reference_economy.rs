use approx::assert_relative_eq;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Beta, Distribution};
use walras::{
    Agent, Economy, Status, SweepOptions, TatonnementOptions, TatonnementSummary,
    MARKET_CLEARING_TOLERANCE,
};

/// Draws economies with interior exponents and endowments from a fixed seed.
fn random_economies(count: usize, seed: u64) -> Vec<Economy> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let exponents = Beta::new(2.0, 2.0).unwrap();
    (0..count)
        .map(|_| {
            let alpha = exponents.sample(&mut rng);
            let beta = exponents.sample(&mut rng);
            let w1a = rng.gen_range(0.05..0.95);
            let w2a = rng.gen_range(0.05..0.95);
            Economy::new(alpha, beta, w1a, w2a).unwrap()
        })
        .collect()
}

/// The returned price is a fixed point of the search from the reference starting guess.
#[test]
fn reference_search_returns_fixed_point() {
    let economy = Economy::default();
    let summary = economy
        .market_clearing_price(1.5, &TatonnementOptions::default())
        .unwrap();
    assert_eq!(summary.status, Status::Converged);
    assert!(summary.iterations < 500);

    let recheck = economy.excess_demand(summary.price).unwrap();
    assert!(recheck.eps1.abs() < MARKET_CLEARING_TOLERANCE);

    // Restarting at the solution needs no further updates.
    let restart = economy
        .market_clearing_price(summary.price, &TatonnementOptions::default())
        .unwrap();
    assert_eq!(restart.iterations, 0);
    assert_eq!(restart.price, summary.price);
}

#[test]
fn exhausted_budget_is_reported_not_raised() {
    let economy = Economy::default();
    let options = TatonnementOptions::default().with_max_iterations(0);
    let summary = economy.market_clearing_price(1.5, &options).unwrap();
    assert!(!summary.is_converged());
    assert_eq!(summary.price, 1.5);
}

/// Walras' law: the value of aggregate excess demand is zero at every sampled price.
#[test]
fn walras_law_holds_on_price_grid() {
    let economy = Economy::default();
    let curve = economy.excess_demand_curve(&SweepOptions::default()).unwrap();
    for (price, eps1, eps2) in curve.iter() {
        assert_relative_eq!(eps2, -price * eps1, epsilon = 1e-12);
    }
}

#[test]
fn demand_is_non_negative_for_random_economies() {
    for economy in random_economies(200, 11) {
        for p1 in [0.05, 0.5, 1.0, 4.0, 25.0] {
            for agent in Agent::ALL {
                let bundle = economy.demand(agent, p1).unwrap();
                assert!(bundle.x1 >= 0.0 && bundle.x2 >= 0.0);
            }
            assert_relative_eq!(economy.walras_residual(p1).unwrap(), 0.0, epsilon = 1e-10);
        }
    }
}

#[test]
fn sweeps_are_deterministic() {
    let economy = Economy::default();
    let options = SweepOptions::default();

    let first = economy.pareto_improvements(&options).unwrap();
    let second = economy.pareto_improvements(&options).unwrap();
    assert_eq!(first, second);

    let first = economy.excess_demand_curve(&options).unwrap();
    let second = economy.excess_demand_curve(&options).unwrap();
    assert_eq!(first, second);
}

/// The reference endowment (0.8, 0.3) is off the 1/75 grid, so it need not appear in the set.
#[test]
fn pareto_grid_skips_off_grid_endowment() {
    let economy = Economy::default();
    let set = economy.pareto_improvements(&SweepOptions::default()).unwrap();
    assert!(!set.contains(0.8, 0.3));
    assert!(set.iter().all(|(x1a, _)| x1a > 0.0));
}

#[test]
fn summary_serializes_to_json() {
    let economy = Economy::default();
    let summary = economy
        .market_clearing_price(1.5, &TatonnementOptions::default())
        .unwrap();
    let json = serde_json::to_string(&summary).unwrap();
    assert!(json.contains("\"Converged\""));
    let restored: TatonnementSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.iterations, summary.iterations);

    let json = serde_json::to_string(&economy).unwrap();
    let restored: Economy = serde_json::from_str(&json).unwrap();
    assert_relative_eq!(restored.alpha(), economy.alpha(), epsilon = 1e-15);
    assert_relative_eq!(restored.w2a(), economy.w2a(), epsilon = 1e-15);
}
