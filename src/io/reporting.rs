// src/io/reporting.rs

use crate::error::CalcResult;
use crate::simulation::engine::{CostShare, ProductRun, StockRecord};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::info;

// A row of the results export. Undefined products leave the numbers empty.
#[derive(Debug, Serialize)]
struct ResultRow {
    product: String,
    eoq: Option<f64>,
    total_cost: Option<f64>,
    order_frequency: Option<f64>,
    reorder_point: Option<f64>,
    annual_purchase_cost: Option<f64>,
    order_cycle_days: Option<f64>,
    error: Option<String>,
}

impl From<&ProductRun> for ResultRow {
    fn from(run: &ProductRun) -> Self {
        let result = run.result();
        Self {
            product: run.product.to_string(),
            eoq: result.map(|r| r.eoq),
            total_cost: result.map(|r| r.total_cost),
            order_frequency: result.map(|r| r.order_frequency),
            reorder_point: result.map(|r| r.reorder_point),
            annual_purchase_cost: result.map(|r| r.annual_purchase_cost),
            order_cycle_days: result.map(|r| r.order_cycle_days),
            error: run.outcome.as_ref().err().map(|e| e.to_string()),
        }
    }
}

/// Writes one row per product to `file_path`.
pub fn write_results(file_path: &Path, runs: &[ProductRun]) -> CalcResult<()> {
    let file = std::fs::File::create(file_path)?;
    write_results_to(file, runs)?;
    info!(rows = runs.len(), path = %file_path.display(), "exported results");
    Ok(())
}

pub fn write_results_to<W: Write>(writer: W, runs: &[ProductRun]) -> CalcResult<()> {
    write_rows(writer, runs.iter().map(ResultRow::from))
}

/// Writes the weekly stock chart data in long format (`week,product,stock`).
pub fn write_stock_series(file_path: &Path, data: &[StockRecord]) -> CalcResult<()> {
    let file = std::fs::File::create(file_path)?;
    write_rows(file, data.iter())?;
    info!(rows = data.len(), path = %file_path.display(), "exported stock series");
    Ok(())
}

/// Writes the cost pie chart data.
pub fn write_cost_shares(file_path: &Path, data: &[CostShare]) -> CalcResult<()> {
    let file = std::fs::File::create(file_path)?;
    write_rows(file, data.iter())?;
    info!(rows = data.len(), path = %file_path.display(), "exported cost shares");
    Ok(())
}

fn write_rows<W, T, I>(writer: W, rows: I) -> CalcResult<()>
where
    W: Write,
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Renders the results as a plain-text table with two decimals.
pub fn render_table(runs: &[ProductRun]) -> String {
    let mut out = format!(
        "{:<8} {:>12} {:>16} {:>10} {:>10} {:>18} {:>10}\n",
        "Product", "EOQ", "Total cost", "Orders/yr", "ROP", "Purchase cost", "Cycle (d)"
    );

    for run in runs {
        let line = match run.result() {
            Some(r) => format!(
                "{:<8} {:>12.2} {:>16.2} {:>10.2} {:>10.2} {:>18.2} {:>10.2}\n",
                run.product.to_string(),
                r.eoq,
                r.total_cost,
                r.order_frequency,
                r.reorder_point,
                r.annual_purchase_cost,
                r.order_cycle_days
            ),
            None => format!("{:<8} {:>12}\n", run.product.to_string(), "undefined"),
        };
        out.push_str(&line);
    }
    out
}
