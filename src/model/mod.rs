pub mod formulas;
pub mod product;
