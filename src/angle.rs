//! Angles stored without a rounding error and their sexagesimal representation

mod consts;
pub mod dms;
mod exact;

pub use exact::ExactDegree;
