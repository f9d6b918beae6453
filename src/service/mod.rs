pub mod heading;
pub mod lookup;

#[cfg(test)]
pub mod fake;

pub use lookup::{Health, LookupError, VehicleService};
