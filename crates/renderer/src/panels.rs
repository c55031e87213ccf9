//! Panel view builders

pub mod explanation;
pub mod multi_prediction;
pub mod prediction;
pub mod stock_analysis;
