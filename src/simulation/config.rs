// src/simulation/config.rs

use crate::error::{CalcResult, InventoryError};
use crate::model::product::{FishType, ProductParameters};

/// Calendar settings shared by every product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarConfig {
    pub days_per_week: u32,
    pub weeks_per_year: u32,
    /// Length of the stock simulation.
    pub week_count: usize,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            days_per_week: 7,
            weeks_per_year: 52,
            week_count: 52,
        }
    }
}

impl CalendarConfig {
    pub fn validate(&self) -> CalcResult<()> {
        if !(1..=7).contains(&self.days_per_week) {
            return Err(InventoryError::input(
                "days_per_week",
                self.days_per_week as f64,
            ));
        }
        if self.weeks_per_year == 0 {
            return Err(InventoryError::input("weeks_per_year", 0.0));
        }
        if self.week_count == 0 {
            return Err(InventoryError::input("week_count", 0.0));
        }
        Ok(())
    }

    pub fn operating_days_per_year(&self) -> f64 {
        f64::from(self.days_per_week) * f64::from(self.weeks_per_year)
    }

    /// Spreads annual demand evenly over the working weeks.
    pub fn weekly_demand(&self, annual_demand: f64) -> f64 {
        annual_demand / f64::from(self.weeks_per_year)
    }
}

/// One parameter set per fish type, kept in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCatalog {
    entries: Vec<(FishType, ProductParameters)>,
}

impl ProductCatalog {
    /// A catalog where every product has all-zero inputs, like a fresh form.
    pub fn empty() -> Self {
        Self {
            entries: FishType::ALL
                .iter()
                .map(|&fish| (fish, ProductParameters::default()))
                .collect(),
        }
    }

    /// Demo inputs used when no parameter file is given.
    pub fn demo(calendar: &CalendarConfig) -> Self {
        let mut catalog = Self::empty();
        // (annual demand, ordering cost, holding cost, lead time, unit cost)
        let rows = [
            (FishType::Tuna, 1_000.0, 50_000.0, 2_000.0, 2.0, 75_000.0),
            (FishType::Kerapu, 800.0, 40_000.0, 1_500.0, 1.0, 60_000.0),
            (FishType::Hiu, 500.0, 60_000.0, 2_500.0, 3.0, 90_000.0),
        ];
        for (fish, annual, ordering, holding, lead, unit) in rows {
            catalog.set(
                fish,
                ProductParameters {
                    annual_demand: annual,
                    weekly_demand: calendar.weekly_demand(annual),
                    ordering_cost: ordering,
                    holding_cost: holding,
                    lead_time_weeks: lead,
                    unit_cost: unit,
                },
            );
        }
        catalog
    }

    pub fn set(&mut self, fish: FishType, params: ProductParameters) {
        if let Some(entry) = self.entries.iter_mut().find(|(f, _)| *f == fish) {
            entry.1 = params;
        }
    }

    #[cfg(test)]
    pub fn get(&self, fish: FishType) -> Option<&ProductParameters> {
        self.entries.iter().find(|(f, _)| *f == fish).map(|(_, p)| p)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FishType, ProductParameters)> + '_ {
        self.entries.iter().copied()
    }
}
