//! Farmer-facing advisories and economic profiles for a breed record.

mod economics;
mod rules;

pub use economics::{EconomicProfile, FarmerType, MaintenanceCost, MilkValue};
pub use rules::recommendations;
