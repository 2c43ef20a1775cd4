use crate::adapters::{ElectricHeater, Thermosiphon};
use crate::core::coffee::CoffeeMaker;
use crate::domain::ports::Heater;
use std::sync::Arc;

/// Builds the object graph by hand. The pump and the maker share one heater.
pub fn coffee_maker() -> CoffeeMaker {
    let heater: Arc<dyn Heater> = Arc::new(ElectricHeater::new());
    let pump = Arc::new(Thermosiphon::new(Arc::clone(&heater)));
    CoffeeMaker::new(heater, pump)
}
