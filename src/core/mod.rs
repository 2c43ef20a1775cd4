pub mod coffee;
pub mod wiring;

pub use crate::domain::ports::{Heater, Pump, Transcript};
pub use crate::utils::error::Result;
