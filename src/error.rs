// src/error.rs

use thiserror::Error;

/// Result type used by the formulas, the simulation and the CSV layer.
pub type CalcResult<T> = Result<T, InventoryError>;

/// Everything that can go wrong while turning product inputs into results.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// A formula's divisor was zero or negative.
    #[error("invalid divisor: {name} must be > 0 (got {value})")]
    InvalidDivisor { name: &'static str, value: f64 },

    /// An input was negative or not a finite number.
    #[error("invalid input: {field} = {value}")]
    InvalidInput { field: &'static str, value: f64 },

    /// A formula overflowed to infinity or NaN on finite inputs.
    #[error("{name} is out of range ({value})")]
    OutOfRange { name: &'static str, value: f64 },

    /// A parameter file named a product we do not stock.
    #[error("unknown product '{0}'")]
    UnknownProduct(String),

    /// Bad command line.
    #[error("usage: {0}")]
    Usage(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl InventoryError {
    pub fn divisor(name: &'static str, value: f64) -> Self {
        Self::InvalidDivisor { name, value }
    }

    pub fn input(field: &'static str, value: f64) -> Self {
        Self::InvalidInput { field, value }
    }

    pub fn out_of_range(name: &'static str, value: f64) -> Self {
        Self::OutOfRange { name, value }
    }

    /// Passes `value` through unless it is infinite or NaN.
    pub fn finite(name: &'static str, value: f64) -> CalcResult<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::out_of_range(name, value))
        }
    }

    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }
}
