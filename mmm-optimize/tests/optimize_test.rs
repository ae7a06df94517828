//! Budget optimizer tests: budget equality, symmetry, bounds,
//! infeasibility, and preference for the stronger channel.

use std::collections::BTreeMap;

use mmm_core::models::{Convergence, SpendBounds};
use mmm_core::params::Saturation;
use mmm_optimize::{BudgetOptimizer, ResponseCurve};

fn hill_curve(name: &str, k: f64, s: f64, beta: f64) -> ResponseCurve {
    ResponseCurve {
        name: name.to_string(),
        saturation: Saturation::Hill { k, s },
        beta,
    }
}

#[test]
fn allocation_sums_to_budget() {
    let curves = vec![
        hill_curve("tv", 40_000.0, 1.2, 2.0),
        hill_curve("digital", 15_000.0, 0.9, 1.4),
        hill_curve("search", 8_000.0, 1.0, 3.1),
    ];
    let budget = 100_000.0;
    let allocation = BudgetOptimizer::new()
        .optimize(&curves, budget, &BTreeMap::new())
        .unwrap();

    assert!((allocation.total() - budget).abs() / budget < 1e-6);
    for (_, &spend) in allocation.spend.iter() {
        assert!(spend >= 0.0);
        assert!(spend <= budget + 1e-6);
    }
}

#[test]
fn identical_channels_split_equally() {
    let curves = vec![
        hill_curve("a", 10_000.0, 1.0, 1.0),
        hill_curve("b", 10_000.0, 1.0, 1.0),
    ];
    let allocation = BudgetOptimizer::new()
        .optimize(&curves, 50_000.0, &BTreeMap::new())
        .unwrap();

    let a = allocation.spend_for("a").unwrap();
    let b = allocation.spend_for("b").unwrap();
    assert!((a - b).abs() < 1e-6);
    assert!((a - 25_000.0).abs() < 1e-3);
}

#[test]
fn stronger_channel_gets_more_budget() {
    // Same curve shape, triple the weight.
    let curves = vec![
        hill_curve("weak", 10_000.0, 1.0, 1.0),
        hill_curve("strong", 10_000.0, 1.0, 3.0),
    ];
    let allocation = BudgetOptimizer::new()
        .optimize(&curves, 20_000.0, &BTreeMap::new())
        .unwrap();

    assert!(allocation.spend_for("strong").unwrap() > allocation.spend_for("weak").unwrap());
}

#[test]
fn upper_bound_is_respected() {
    let curves = vec![
        hill_curve("capped", 5_000.0, 1.0, 10.0),
        hill_curve("open", 5_000.0, 1.0, 1.0),
    ];
    let mut bounds = BTreeMap::new();
    bounds.insert("capped".to_string(), SpendBounds::new(0.0, 2_000.0));

    let allocation = BudgetOptimizer::new()
        .optimize(&curves, 30_000.0, &bounds)
        .unwrap();

    assert!(allocation.spend_for("capped").unwrap() <= 2_000.0 + 1e-6);
    assert!((allocation.total() - 30_000.0).abs() < 1e-3);
}

#[test]
fn infeasible_upper_bounds_error() {
    let curves = vec![
        hill_curve("a", 1_000.0, 1.0, 1.0),
        hill_curve("b", 1_000.0, 1.0, 1.0),
    ];
    let mut bounds = BTreeMap::new();
    bounds.insert("a".to_string(), SpendBounds::new(0.0, 100.0));
    bounds.insert("b".to_string(), SpendBounds::new(0.0, 100.0));

    let err = BudgetOptimizer::new()
        .optimize(&curves, 10_000.0, &bounds)
        .unwrap_err();
    assert!(matches!(
        err,
        mmm_core::errors::OptimizeError::Infeasible { .. }
    ));
}

#[test]
fn infeasible_lower_bounds_error() {
    let curves = vec![hill_curve("a", 1_000.0, 1.0, 1.0)];
    let mut bounds = BTreeMap::new();
    bounds.insert("a".to_string(), SpendBounds::new(5_000.0, 10_000.0));

    let err = BudgetOptimizer::new()
        .optimize(&curves, 1_000.0, &bounds)
        .unwrap_err();
    assert!(matches!(
        err,
        mmm_core::errors::OptimizeError::Infeasible { .. }
    ));
}

#[test]
fn invalid_bounds_error() {
    let curves = vec![hill_curve("a", 1_000.0, 1.0, 1.0)];
    let mut bounds = BTreeMap::new();
    bounds.insert("a".to_string(), SpendBounds::new(500.0, 100.0));

    let err = BudgetOptimizer::new()
        .optimize(&curves, 1_000.0, &bounds)
        .unwrap_err();
    assert!(matches!(
        err,
        mmm_core::errors::OptimizeError::InvalidBounds { .. }
    ));
}

#[test]
fn no_channels_error() {
    let err = BudgetOptimizer::new()
        .optimize(&[], 1_000.0, &BTreeMap::new())
        .unwrap_err();
    assert!(matches!(err, mmm_core::errors::OptimizeError::NoChannels));
}

#[test]
fn non_positive_budget_error() {
    let curves = vec![hill_curve("a", 1_000.0, 1.0, 1.0)];
    for budget in [0.0, -5.0, f64::NAN] {
        let err = BudgetOptimizer::new()
            .optimize(&curves, budget, &BTreeMap::new())
            .unwrap_err();
        assert!(matches!(
            err,
            mmm_core::errors::OptimizeError::InvalidBudget { .. }
        ));
    }
}

#[test]
fn iteration_limit_still_returns_feasible_allocation() {
    // One iteration cannot converge on an asymmetric problem, but the
    // returned allocation must still satisfy the budget constraint.
    let curves = vec![
        hill_curve("a", 50_000.0, 2.0, 1.0),
        hill_curve("b", 1_000.0, 0.8, 4.0),
    ];
    let allocation = BudgetOptimizer::with_limits(1, 1e-15)
        .optimize(&curves, 60_000.0, &BTreeMap::new())
        .unwrap();

    assert!(!allocation.convergence.is_converged());
    assert!((allocation.total() - 60_000.0).abs() / 60_000.0 < 1e-6);
}

#[test]
fn step_exhaustion_reports_converged_with_iterations_spent() {
    // Very steep curves: the first gradient step overshoots the interior
    // optimum and loses objective, so no move is ever accepted. With a
    // tolerance above the halved step the run exits on step exhaustion
    // at iteration 1 and returns the uniform start unchanged.
    let curves = vec![hill_curve("a", 0.5, 8.0, 1.0), hill_curve("b", 1.1, 8.0, 1.0)];
    let allocation = BudgetOptimizer::with_limits(100, 0.6)
        .optimize(&curves, 2.0, &BTreeMap::new())
        .unwrap();

    assert_eq!(allocation.convergence, Convergence::Converged { iterations: 1 });
    assert!((allocation.spend_for("a").unwrap() - 1.0).abs() < 1e-9);
    assert!((allocation.spend_for("b").unwrap() - 1.0).abs() < 1e-9);
}

#[test]
fn mixed_curve_kinds_optimize() {
    let curves = vec![
        hill_curve("tv", 20_000.0, 1.1, 1.5),
        ResponseCurve {
            name: "digital".to_string(),
            saturation: Saturation::MichaelisMenten {
                vmax: 2.0,
                km: 12_000.0,
            },
            beta: 1.0,
        },
        ResponseCurve {
            name: "search".to_string(),
            saturation: Saturation::Logistic {
                l: 1.0,
                k: 1e-4,
                x0: 5_000.0,
            },
            beta: 2.0,
        },
    ];
    let allocation = BudgetOptimizer::new()
        .optimize(&curves, 80_000.0, &BTreeMap::new())
        .unwrap();
    assert!((allocation.total() - 80_000.0).abs() / 80_000.0 < 1e-6);
    assert!(allocation.expected_effect > 0.0);
}
