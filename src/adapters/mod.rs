// Adapters layer: concrete heaters and pumps behind the domain ports.

pub mod heater;
pub mod pump;

pub use heater::{ElectricHeater, InductionHeater};
pub use pump::{RotaryPump, Thermosiphon};
