// src/simulation/engine.rs

use crate::error::{CalcResult, InventoryError};
use crate::model::formulas::{compute_eoq, compute_rop, compute_total_cost};
use crate::model::product::{FishType, ProductParameters};
use crate::simulation::config::{CalendarConfig, ProductCatalog};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Everything computed for one product.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryResult {
    pub eoq: f64,
    pub total_cost: f64,
    /// Orders placed per year.
    pub order_frequency: f64,
    pub reorder_point: f64,
    pub annual_purchase_cost: f64,
    /// Operating days between two orders.
    pub order_cycle_days: f64,
    pub weekly_stock_series: Vec<f64>,
}

/// The outcome of one product; `Err` is shown as "undefined" downstream.
#[derive(Debug)]
pub struct ProductRun {
    pub product: FishType,
    pub outcome: CalcResult<InventoryResult>,
}

impl ProductRun {
    pub fn result(&self) -> Option<&InventoryResult> {
        self.outcome.as_ref().ok()
    }
}

// Serialized row of the stock chart export.
#[derive(Debug, Clone, Serialize)]
pub struct StockRecord {
    pub week: usize,
    pub product: String,
    pub stock: f64,
}

/// One slice of the cost pie chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostShare {
    pub product: FishType,
    pub total_cost: f64,
    pub share: f64,
}

/// Simulates stock on hand week by week.
///
/// Stock starts at one full batch (`eoq`). Each week the demand is taken out,
/// and if the level has fallen to the reorder point or below a new batch
/// arrives in the same week. Lead time only enters through `rop`.
///
/// The level is not clamped: with demand larger than the batch it can go
/// negative, which reads as unmet demand.
pub fn simulate_weekly_stock(eoq: f64, rop: f64, weekly_demand: f64, week_count: usize) -> Vec<f64> {
    let mut stock = eoq;
    let mut series = Vec::with_capacity(week_count);

    for _ in 0..week_count {
        stock -= weekly_demand;
        if stock <= rop {
            stock += eoq;
        }
        series.push(stock);
    }

    series
}

/// Runs the formulas and the stock simulation for a single product.
pub fn evaluate(params: &ProductParameters, calendar: &CalendarConfig) -> CalcResult<InventoryResult> {
    params.validate()?;

    let eoq = compute_eoq(params.annual_demand, params.ordering_cost, params.holding_cost)?;
    let (total_cost, order_frequency) = compute_total_cost(
        params.annual_demand,
        params.ordering_cost,
        params.holding_cost,
        eoq,
    )?;
    let reorder_point = InventoryError::finite(
        "reorder_point",
        compute_rop(params.weekly_demand, params.lead_time_weeks),
    )?;
    let annual_purchase_cost = InventoryError::finite(
        "annual_purchase_cost",
        params.annual_demand * params.unit_cost,
    )?;
    let order_cycle_days = InventoryError::finite(
        "order_cycle_days",
        calendar.operating_days_per_year() / order_frequency,
    )?;
    let weekly_stock_series =
        simulate_weekly_stock(eoq, reorder_point, params.weekly_demand, calendar.week_count);

    Ok(InventoryResult {
        eoq,
        total_cost,
        order_frequency,
        reorder_point,
        annual_purchase_cost,
        order_cycle_days,
        weekly_stock_series,
    })
}

/// Evaluates every product in the catalog, one after the other.
///
/// A failing product does not stop the others.
pub fn run_catalog(catalog: &ProductCatalog, calendar: &CalendarConfig) -> Vec<ProductRun> {
    info!(weeks = calendar.week_count, "evaluating product catalog");

    catalog
        .iter()
        .map(|(product, params)| {
            let outcome = evaluate(&params, calendar);
            match &outcome {
                Ok(result) => debug!(
                    %product,
                    eoq = result.eoq,
                    rop = result.reorder_point,
                    total_cost = result.total_cost,
                    "product evaluated"
                ),
                Err(e) => warn!(%product, error = %e, "product left undefined"),
            }
            ProductRun { product, outcome }
        })
        .collect()
}

/// Flattens the stock series of all defined products into chart rows.
pub fn stock_records(runs: &[ProductRun]) -> Vec<StockRecord> {
    let mut records = Vec::new();
    for run in runs {
        if let Some(result) = run.result() {
            for (i, stock) in result.weekly_stock_series.iter().enumerate() {
                records.push(StockRecord {
                    week: i + 1,
                    product: run.product.to_string(),
                    stock: *stock,
                });
            }
        }
    }
    records
}

/// Splits the summed total cost across the defined products.
///
/// Shares are all zero when nothing costs anything.
pub fn cost_shares(runs: &[ProductRun]) -> Vec<CostShare> {
    let defined: Vec<(FishType, f64)> = runs
        .iter()
        .filter_map(|run| run.result().map(|r| (run.product, r.total_cost)))
        .collect();
    let sum: f64 = defined.iter().map(|(_, cost)| cost).sum();

    defined
        .into_iter()
        .map(|(product, total_cost)| CostShare {
            product,
            total_cost,
            share: if sum > 0.0 { total_cost / sum } else { 0.0 },
        })
        .collect()
}
