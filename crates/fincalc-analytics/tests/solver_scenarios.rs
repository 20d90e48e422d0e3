//! End-to-end solver scenarios, including the execution guard.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use fincalc_analytics::prelude::*;
use fincalc_analytics::solve::MULTIPLE_ROOTS_WARNING;
use fincalc_core::{BondTerms, CashFlow, CashFlowSeries, Date};

fn series(flows: &[(f64, &str)]) -> CashFlowSeries {
    CashFlowSeries::new(
        flows
            .iter()
            .map(|&(amount, date)| CashFlow::new(amount, Date::parse(date).unwrap()))
            .collect(),
    )
    .unwrap()
}

fn auto() -> Arc<dyn RootStrategy> {
    strategy_for(SolverCapability::detect(), SolverPreference::Auto)
}

#[test]
fn discount_bond_yields_above_coupon() {
    let terms = BondTerms::new(1000.0, 0.05, 10.0, 2).unwrap();

    for strategy in [auto(), strategy_for(SolverCapability::detect(), SolverPreference::Bisection)] {
        let outcome = yield_to_maturity(strategy.as_ref(), &terms, 950.0, &CancelFlag::new()).unwrap();
        assert!(outcome.rate > 0.05, "{} gave {}", strategy.name(), outcome.rate);
        assert!((price_at_yield(&terms, outcome.rate) - 950.0).abs() < 1e-3);
    }
}

#[test]
fn one_year_xirr_is_ten_percent() {
    let flows = series(&[(-10_000.0, "2024-01-01"), (11_000.0, "2025-01-01")]);

    let outcome = xirr(auto().as_ref(), &flows, 0.1, &CancelFlag::new()).unwrap();

    assert!((outcome.rate - 0.10).abs() <= 0.02);
}

#[test]
fn xirr_without_outflow_has_no_solution() {
    let flows = series(&[(1_000.0, "2024-01-01"), (2_000.0, "2025-01-01")]);

    let err = xirr(auto().as_ref(), &flows, 0.1, &CancelFlag::new()).unwrap_err();

    assert!(matches!(err, AnalyticsError::NoSolution { .. }));
    assert!(err.is_client_error());
}

#[test]
fn explain_reports_method_and_iterations() {
    let flows = series(&[
        (-10_000.0, "2024-01-01"),
        (2_500.0, "2024-06-30"),
        (3_000.0, "2025-01-15"),
        (6_000.0, "2025-12-31"),
    ]);

    let bisection = explain_xirr(&BisectionStrategy, &flows, 0.1, &CancelFlag::new()).unwrap();
    assert_eq!(bisection.method, SolverMethod::Bisection);
    assert!(bisection.iterations > 0 && bisection.iterations <= 100);
    assert!(bisection.warnings.is_empty());

    let fast = explain_xirr(auto().as_ref(), &flows, 0.1, &CancelFlag::new()).unwrap();
    assert!((fast.rate - bisection.rate).abs() < 1e-6);
}

#[test]
fn explain_warns_on_multiple_roots() {
    let flows = series(&[
        (8_000.0, "2021-01-01"),
        (-12_400.0, "2022-01-01"),
        (3_000.0, "2023-01-01"),
    ]);

    let outcome = explain_xirr(auto().as_ref(), &flows, 0.1, &CancelFlag::new()).unwrap();

    assert!((outcome.rate - 0.25).abs() < 1e-6);
    assert_eq!(outcome.warnings, vec![MULTIPLE_ROOTS_WARNING]);
}

#[tokio::test]
async fn guarded_xirr_matches_direct_call() {
    let flows = series(&[(-10_000.0, "2024-01-01"), (11_000.0, "2025-01-01")]);
    let strategy = auto();
    let direct = xirr(strategy.as_ref(), &flows, 0.1, &CancelFlag::new()).unwrap();

    let guard = ExecutionGuard::default();
    let guarded = {
        let strategy = strategy.clone();
        let flows = flows.clone();
        guard
            .run(move |cancel| xirr(strategy.as_ref(), &flows, 0.1, &cancel))
            .await
            .unwrap()
    };

    assert_eq!(direct, guarded);
}

#[tokio::test]
async fn guard_timeout_stops_slow_valuation() {
    struct Slow {
        calls: Arc<AtomicU32>,
    }

    impl Valuation for Slow {
        fn residual(&self, rate: f64) -> f64 {
            self.calls.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(Duration::from_millis(5));
            0.1 - rate
        }
        fn label(&self) -> &'static str {
            "npv"
        }
        fn no_root_message(&self) -> &'static str {
            "none"
        }
    }

    let calls = Arc::new(AtomicU32::new(0));
    let slow = Slow {
        calls: calls.clone(),
    };

    let guard = ExecutionGuard::new(Duration::from_millis(30));
    let err = guard
        .run(move |cancel| {
            find_rate(
                &BisectionStrategy,
                &slow,
                Bracket::XIRR_NARROW,
                0.1,
                Exhaustion::NoSolution("none"),
                &cancel,
            )
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AnalyticsError::SolverTimeout { .. }));

    // At most the evaluation in flight at the deadline completes afterwards
    tokio::time::sleep(Duration::from_millis(50)).await;
    let settled = calls.load(Ordering::SeqCst);
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(calls.load(Ordering::SeqCst), settled);
    assert!(settled < 100);
}
