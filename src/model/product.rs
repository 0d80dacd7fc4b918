// src/model/product.rs

use crate::error::{CalcResult, InventoryError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The three fish types the shop keeps in stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FishType {
    Tuna,
    Kerapu,
    Hiu,
}

impl FishType {
    /// Display order used for tables and exports.
    pub const ALL: [FishType; 3] = [FishType::Tuna, FishType::Kerapu, FishType::Hiu];
}

impl fmt::Display for FishType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FishType::Tuna => "Tuna",
            FishType::Kerapu => "Kerapu",
            FishType::Hiu => "Hiu",
        };
        f.write_str(name)
    }
}

impl FromStr for FishType {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tuna" => Ok(FishType::Tuna),
            "kerapu" | "grouper" => Ok(FishType::Kerapu),
            "hiu" | "shark" => Ok(FishType::Hiu),
            _ => Err(InventoryError::UnknownProduct(s.to_string())),
        }
    }
}

/// Inputs for one product. Costs are in IDR, demand in units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProductParameters {
    pub annual_demand: f64,
    pub weekly_demand: f64,
    /// Fixed cost per order placed.
    pub ordering_cost: f64,
    /// Cost of holding one unit for one year.
    pub holding_cost: f64,
    pub lead_time_weeks: f64,
    /// Purchase price of one unit.
    pub unit_cost: f64,
}

impl ProductParameters {
    /// Rejects negative or non-finite values.
    ///
    /// A zero holding cost passes here; it is the EOQ formula that refuses it.
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("annual_demand", self.annual_demand),
            ("weekly_demand", self.weekly_demand),
            ("ordering_cost", self.ordering_cost),
            ("holding_cost", self.holding_cost),
            ("lead_time_weeks", self.lead_time_weeks),
            ("unit_cost", self.unit_cost),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(InventoryError::input(field, value));
            }
        }
        Ok(())
    }
}
