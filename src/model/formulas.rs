// src/model/formulas.rs

//! Closed-form inventory formulas.
//!
//! All functions are pure: the same inputs always give the same outputs.
//! Inputs are assumed non-negative and finite; `ProductParameters::validate`
//! guards that at the boundary.

use crate::error::{CalcResult, InventoryError};

/// Calculates the Economic Order Quantity.
///
/// Formula: EOQ = sqrt((2 * D * S) / H)
///
/// # Arguments
/// * `annual_demand` - Units sold per year (D).
/// * `ordering_cost` - Fixed cost per order (S).
/// * `holding_cost` - Cost of holding one unit for a year (H). Must be > 0.
///
/// Zero demand or zero ordering cost gives an EOQ of 0, which is valid.
/// A result that overflows to infinity is an `OutOfRange` error.
pub fn compute_eoq(annual_demand: f64, ordering_cost: f64, holding_cost: f64) -> CalcResult<f64> {
    if holding_cost <= 0.0 {
        return Err(InventoryError::divisor("holding_cost", holding_cost));
    }
    let eoq = ((2.0 * annual_demand * ordering_cost) / holding_cost).sqrt();
    InventoryError::finite("eoq", eoq)
}

/// Calculates total annual inventory cost and the number of orders per year.
///
/// Formula:
/// - Orders = D / Q
/// - TotalCost = Orders * S + (Q / 2) * H
///
/// Returns `(total_cost, order_frequency)`. Fails when `eoq` is not positive
/// or not finite, and when either result overflows.
pub fn compute_total_cost(
    annual_demand: f64,
    ordering_cost: f64,
    holding_cost: f64,
    eoq: f64,
) -> CalcResult<(f64, f64)> {
    if eoq <= 0.0 {
        return Err(InventoryError::divisor("eoq", eoq));
    }
    if !eoq.is_finite() {
        return Err(InventoryError::input("eoq", eoq));
    }
    let order_frequency = InventoryError::finite("order_frequency", annual_demand / eoq)?;
    let total_cost = InventoryError::finite(
        "total_cost",
        (order_frequency * ordering_cost) + ((eoq / 2.0) * holding_cost),
    )?;
    Ok((total_cost, order_frequency))
}

/// Calculates the Reorder Point: demand expected during the lead time.
///
/// Formula: ROP = WeeklyDemand * LeadTimeWeeks
pub fn compute_rop(weekly_demand: f64, lead_time_weeks: f64) -> f64 {
    weekly_demand * lead_time_weeks
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn eoq_matches_textbook_example() {
        let eoq = compute_eoq(1000.0, 50_000.0, 2_000.0).unwrap();
        assert!((eoq - 223.61).abs() < 1e-2, "eoq = {eoq}");
    }

    #[test]
    fn eoq_rejects_zero_holding_cost() {
        let err = compute_eoq(1000.0, 50_000.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            InventoryError::InvalidDivisor { name: "holding_cost", .. }
        ));
    }

    #[test]
    fn eoq_rejects_negative_holding_cost() {
        let err = compute_eoq(1000.0, 50_000.0, -2_000.0).unwrap_err();
        assert!(matches!(
            err,
            InventoryError::InvalidDivisor { name: "holding_cost", .. }
        ));
    }

    #[test]
    fn eoq_overflow_is_an_error() {
        let err = compute_eoq(1000.0, 50_000.0, 1e-320).unwrap_err();
        assert!(matches!(err, InventoryError::OutOfRange { name: "eoq", .. }));

        let err = compute_eoq(1e200, 1e200, 2_000.0).unwrap_err();
        assert!(matches!(err, InventoryError::OutOfRange { name: "eoq", .. }));
    }

    #[test]
    fn total_cost_rejects_infinite_eoq() {
        let err = compute_total_cost(1000.0, 50_000.0, 2_000.0, f64::INFINITY).unwrap_err();
        assert!(matches!(err, InventoryError::InvalidInput { field: "eoq", .. }));
    }

    #[test]
    fn total_cost_overflow_is_an_error() {
        let err = compute_total_cost(1000.0, 50_000.0, f64::MAX, 1e10).unwrap_err();
        assert!(matches!(
            err,
            InventoryError::OutOfRange { name: "total_cost", .. }
        ));
    }

    #[test]
    fn eoq_is_zero_without_demand_or_ordering_cost() {
        assert_eq!(compute_eoq(0.0, 50_000.0, 2_000.0).unwrap(), 0.0);
        assert_eq!(compute_eoq(1000.0, 0.0, 2_000.0).unwrap(), 0.0);
    }

    #[test]
    fn total_cost_balances_ordering_and_holding_at_eoq() {
        let (d, s, h) = (1000.0, 50_000.0, 2_000.0);
        let eoq = compute_eoq(d, s, h).unwrap();
        let (total, orders) = compute_total_cost(d, s, h, eoq).unwrap();

        assert!((orders - d / eoq).abs() < 1e-9);
        // At the optimum both cost halves are equal.
        let ordering_part = orders * s;
        let holding_part = eoq / 2.0 * h;
        assert!((ordering_part - holding_part).abs() < 1e-6);
        assert!((total - (ordering_part + holding_part)).abs() < 1e-6);
    }

    #[test]
    fn total_cost_rejects_zero_eoq() {
        let err = compute_total_cost(0.0, 50_000.0, 2_000.0, 0.0).unwrap_err();
        assert!(matches!(err, InventoryError::InvalidDivisor { name: "eoq", .. }));
    }

    #[test]
    fn total_cost_rejects_negative_eoq() {
        let err = compute_total_cost(1000.0, 50_000.0, 2_000.0, -5.0).unwrap_err();
        assert!(matches!(err, InventoryError::InvalidDivisor { name: "eoq", .. }));
    }

    #[test]
    fn rop_is_demand_times_lead_time() {
        assert_eq!(compute_rop(50.0, 2.0), 100.0);
        assert_eq!(compute_rop(0.0, 3.0), 0.0);
    }

    proptest! {
        #[test]
        fn eoq_follows_formula_and_is_non_negative(
            d in 0.0f64..1e6,
            s in 0.0f64..1e6,
            h in 0.01f64..1e5,
        ) {
            let eoq = compute_eoq(d, s, h).unwrap();
            prop_assert!(eoq >= 0.0);
            let expected = (2.0 * d * s / h).sqrt();
            prop_assert!((eoq - expected).abs() <= 1e-9 * expected.max(1.0));
        }

        #[test]
        fn non_positive_holding_cost_always_fails(
            d in 0.0f64..1e6,
            s in 0.0f64..1e6,
            h in -1e5f64..=0.0,
        ) {
            let failed_on_divisor = matches!(
                compute_eoq(d, s, h),
                Err(InventoryError::InvalidDivisor { name: "holding_cost", .. })
            );
            prop_assert!(failed_on_divisor);
        }

        #[test]
        fn non_positive_eoq_always_fails(
            d in 0.0f64..1e6,
            s in 0.0f64..1e6,
            h in 0.01f64..1e5,
            q in -1e4f64..=0.0,
        ) {
            let failed_on_divisor = matches!(
                compute_total_cost(d, s, h, q),
                Err(InventoryError::InvalidDivisor { name: "eoq", .. })
            );
            prop_assert!(failed_on_divisor);
        }

        #[test]
        fn formulas_are_idempotent(
            d in 0.0f64..1e6,
            s in 0.0f64..1e6,
            h in 0.01f64..1e5,
            q in 0.01f64..1e4,
        ) {
            prop_assert_eq!(compute_eoq(d, s, h).unwrap(), compute_eoq(d, s, h).unwrap());
            prop_assert_eq!(
                compute_total_cost(d, s, h, q).unwrap(),
                compute_total_cost(d, s, h, q).unwrap()
            );
            prop_assert_eq!(compute_rop(d, h), compute_rop(d, h));
        }
    }
}
