use crate::domain::ports::{Heater, Pump, Transcript};
use crate::utils::error::{Result, ShowcaseError};
use crate::utils::validation::validate_range;
use std::sync::Arc;

pub const HEATING_LINE: &str = "~ ~ ~ heating ~ ~ ~";
pub const COFFEE_LINE: &str = " [_]P coffee! [_]P ";
pub const MAX_CUPS: u32 = 12;

pub struct CoffeeMaker {
    heater: Arc<dyn Heater>,
    pump: Arc<dyn Pump>,
    cups: u32,
}

impl CoffeeMaker {
    pub fn new(heater: Arc<dyn Heater>, pump: Arc<dyn Pump>) -> Self {
        Self {
            heater,
            pump,
            cups: 1,
        }
    }

    pub fn with_cups(mut self, cups: u32) -> Result<Self> {
        validate_range("cups", cups, 1, MAX_CUPS)?;
        self.cups = cups;
        Ok(self)
    }

    pub fn heater(&self) -> &Arc<dyn Heater> {
        &self.heater
    }

    pub fn pump(&self) -> &Arc<dyn Pump> {
        &self.pump
    }

    pub fn cups(&self) -> u32 {
        self.cups
    }

    pub fn brew(&self) -> Result<Transcript> {
        tracing::debug!(
            "brewing {} cup(s) with {} heater and {} pump",
            self.cups,
            self.heater.name(),
            self.pump.name()
        );

        let mut transcript = Transcript::new();
        self.heater.on();
        transcript.push(HEATING_LINE);

        if !self.heater.is_hot() {
            self.heater.off();
            return Err(ShowcaseError::Brew {
                message: format!("{} heater did not heat up", self.heater.name()),
            });
        }

        for _ in 0..self.cups {
            self.pump.pump(&mut transcript);
            transcript.push(COFFEE_LINE);
        }

        self.heater.off();
        Ok(transcript)
    }
}

impl std::fmt::Debug for CoffeeMaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoffeeMaker")
            .field("heater", &self.heater.name())
            .field("pump", &self.pump.name())
            .field("cups", &self.cups)
            .finish()
    }
}
