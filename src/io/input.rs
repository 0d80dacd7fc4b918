// src/io/input.rs

use crate::error::CalcResult;
use crate::model::product::{FishType, ProductParameters};
use crate::simulation::config::{CalendarConfig, ProductCatalog};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;

// One line of the parameter file. `weekly_demand` may be left blank.
#[derive(Debug, Deserialize)]
struct ParameterRow {
    product: String,
    annual_demand: f64,
    weekly_demand: Option<f64>,
    ordering_cost: f64,
    holding_cost: f64,
    lead_time_weeks: f64,
    unit_cost: f64,
}

/// Reads product parameters from a CSV file.
///
/// Expected header:
/// `product,annual_demand,weekly_demand,ordering_cost,holding_cost,lead_time_weeks,unit_cost`
///
/// Products missing from the file keep all-zero inputs.
pub fn read_product_parameters(path: &Path, calendar: &CalendarConfig) -> CalcResult<ProductCatalog> {
    let file = std::fs::File::open(path)?;
    read_product_parameters_from(file, calendar)
}

pub fn read_product_parameters_from<R: Read>(
    reader: R,
    calendar: &CalendarConfig,
) -> CalcResult<ProductCatalog> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut catalog = ProductCatalog::empty();

    for row in rdr.deserialize() {
        let row: ParameterRow = row?;
        let product: FishType = row.product.parse()?;
        let params = ProductParameters {
            annual_demand: row.annual_demand,
            weekly_demand: row
                .weekly_demand
                .unwrap_or_else(|| calendar.weekly_demand(row.annual_demand)),
            ordering_cost: row.ordering_cost,
            holding_cost: row.holding_cost,
            lead_time_weeks: row.lead_time_weeks,
            unit_cost: row.unit_cost,
        };
        debug!(%product, ?params, "loaded parameters");
        catalog.set(product, params);
    }

    Ok(catalog)
}
