use crate::domain::ports::Heater;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Default)]
pub struct ElectricHeater {
    heating: AtomicBool,
}

impl ElectricHeater {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Heater for ElectricHeater {
    fn on(&self) {
        tracing::debug!("electric heater switched on");
        self.heating.store(true, Ordering::SeqCst);
    }

    fn off(&self) {
        self.heating.store(false, Ordering::SeqCst);
    }

    fn is_hot(&self) -> bool {
        self.heating.load(Ordering::SeqCst)
    }

    fn name(&self) -> &str {
        "electric"
    }
}

/// Heats only while a compatible pot sits on the plate.
#[derive(Debug)]
pub struct InductionHeater {
    heating: AtomicBool,
    pot_present: bool,
}

impl InductionHeater {
    pub fn new() -> Self {
        Self::with_pot(true)
    }

    pub fn with_pot(pot_present: bool) -> Self {
        Self {
            heating: AtomicBool::new(false),
            pot_present,
        }
    }
}

impl Default for InductionHeater {
    fn default() -> Self {
        Self::new()
    }
}

impl Heater for InductionHeater {
    fn on(&self) {
        if !self.pot_present {
            tracing::warn!("induction heater switched on without a pot");
        }
        self.heating.store(self.pot_present, Ordering::SeqCst);
    }

    fn off(&self) {
        self.heating.store(false, Ordering::SeqCst);
    }

    fn is_hot(&self) -> bool {
        self.heating.load(Ordering::SeqCst)
    }

    fn name(&self) -> &str {
        "induction"
    }
}
