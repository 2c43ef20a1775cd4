use crate::domain::ports::{Heater, Pump, Transcript};
use std::sync::Arc;

pub const PUMPING_LINE: &str = "=> => pumping => =>";

/// Moves water only once the shared heater is hot.
pub struct Thermosiphon {
    heater: Arc<dyn Heater>,
}

impl Thermosiphon {
    pub fn new(heater: Arc<dyn Heater>) -> Self {
        Self { heater }
    }
}

impl Pump for Thermosiphon {
    fn pump(&self, transcript: &mut Transcript) {
        if self.heater.is_hot() {
            transcript.push(PUMPING_LINE);
        } else {
            tracing::debug!("thermosiphon idle: {} heater is cold", self.heater.name());
        }
    }

    fn name(&self) -> &str {
        "thermosiphon"
    }
}

#[derive(Debug, Default)]
pub struct RotaryPump;

impl Pump for RotaryPump {
    fn pump(&self, transcript: &mut Transcript) {
        transcript.push(PUMPING_LINE);
    }

    fn name(&self) -> &str {
        "rotary"
    }
}
