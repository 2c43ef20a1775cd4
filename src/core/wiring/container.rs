//! Named component container.
//!
//! Factories are registered by name when the program starts. Resolving a
//! component runs its factory once and caches the result, so every consumer
//! of `heater()` sees the same instance. Factories receive the container and
//! pull their own dependencies from it by name. A factory that asks for the
//! role it is building fails with `CircularDependency` instead of recursing.

use crate::adapters::{ElectricHeater, InductionHeater, RotaryPump, Thermosiphon};
use crate::core::coffee::CoffeeMaker;
use crate::domain::ports::{Heater, Pump};
use crate::utils::error::{Result, ShowcaseError};
use std::cell::{Cell, OnceCell};
use std::collections::BTreeMap;
use std::sync::Arc;

pub type HeaterFactory = Box<dyn Fn(&ComponentContainer) -> Result<Arc<dyn Heater>>>;
pub type PumpFactory = Box<dyn Fn(&ComponentContainer) -> Result<Arc<dyn Pump>>>;

pub const DEFAULT_HEATER: &str = "electric";
pub const DEFAULT_PUMP: &str = "thermosiphon";

pub struct ComponentContainer {
    heaters: BTreeMap<String, HeaterFactory>,
    pumps: BTreeMap<String, PumpFactory>,
    heater_choice: String,
    pump_choice: String,
    heater: OnceCell<Arc<dyn Heater>>,
    pump: OnceCell<Arc<dyn Pump>>,
    resolving_heater: Cell<bool>,
    resolving_pump: Cell<bool>,
}

impl ComponentContainer {
    pub fn new() -> Self {
        Self {
            heaters: BTreeMap::new(),
            pumps: BTreeMap::new(),
            heater_choice: DEFAULT_HEATER.to_string(),
            pump_choice: DEFAULT_PUMP.to_string(),
            heater: OnceCell::new(),
            pump: OnceCell::new(),
            resolving_heater: Cell::new(false),
            resolving_pump: Cell::new(false),
        }
    }

    /// Container with every heater and pump this crate ships.
    pub fn with_builtin_components() -> Self {
        let mut container = Self::new();
        container.register_heater("electric", |_| Ok(Arc::new(ElectricHeater::new())));
        container.register_heater("induction", |_| Ok(Arc::new(InductionHeater::new())));
        container.register_pump("thermosiphon", |c| Ok(Arc::new(Thermosiphon::new(c.heater()?))));
        container.register_pump("rotary", |_| Ok(Arc::new(RotaryPump)));
        container
    }

    pub fn register_heater<F>(&mut self, name: &str, factory: F) -> &mut Self
    where
        F: Fn(&ComponentContainer) -> Result<Arc<dyn Heater>> + 'static,
    {
        tracing::debug!("registering heater '{}'", name);
        self.heaters.insert(name.to_string(), Box::new(factory));
        self
    }

    pub fn register_pump<F>(&mut self, name: &str, factory: F) -> &mut Self
    where
        F: Fn(&ComponentContainer) -> Result<Arc<dyn Pump>> + 'static,
    {
        tracing::debug!("registering pump '{}'", name);
        self.pumps.insert(name.to_string(), Box::new(factory));
        self
    }

    /// Fails with `UnknownComponent` unless both names have a factory.
    pub fn ensure_registered(&self, heater: &str, pump: &str) -> Result<()> {
        if !self.heaters.contains_key(heater) {
            return Err(unknown("heater", heater));
        }
        if !self.pumps.contains_key(pump) {
            return Err(unknown("pump", pump));
        }
        Ok(())
    }

    /// Chooses which registered heater and pump to resolve.
    pub fn select(mut self, heater: &str, pump: &str) -> Result<Self> {
        self.ensure_registered(heater, pump)?;
        self.heater_choice = heater.to_string();
        self.pump_choice = pump.to_string();
        self.heater = OnceCell::new();
        self.pump = OnceCell::new();
        Ok(self)
    }

    pub fn heater_kinds(&self) -> Vec<&str> {
        self.heaters.keys().map(String::as_str).collect()
    }

    pub fn pump_kinds(&self) -> Vec<&str> {
        self.pumps.keys().map(String::as_str).collect()
    }

    pub fn heater(&self) -> Result<Arc<dyn Heater>> {
        if let Some(heater) = self.heater.get() {
            return Ok(Arc::clone(heater));
        }
        let factory = self
            .heaters
            .get(&self.heater_choice)
            .ok_or_else(|| unknown("heater", &self.heater_choice))?;
        if self.resolving_heater.replace(true) {
            return Err(circular("heater", &self.heater_choice));
        }
        let heater = factory(self);
        self.resolving_heater.set(false);
        let heater = heater?;
        tracing::debug!("resolved heater '{}'", self.heater_choice);
        Ok(Arc::clone(self.heater.get_or_init(|| heater)))
    }

    pub fn pump(&self) -> Result<Arc<dyn Pump>> {
        if let Some(pump) = self.pump.get() {
            return Ok(Arc::clone(pump));
        }
        let factory = self
            .pumps
            .get(&self.pump_choice)
            .ok_or_else(|| unknown("pump", &self.pump_choice))?;
        if self.resolving_pump.replace(true) {
            return Err(circular("pump", &self.pump_choice));
        }
        let pump = factory(self);
        self.resolving_pump.set(false);
        let pump = pump?;
        tracing::debug!("resolved pump '{}'", self.pump_choice);
        Ok(Arc::clone(self.pump.get_or_init(|| pump)))
    }

    pub fn coffee_maker(&self) -> Result<CoffeeMaker> {
        Ok(CoffeeMaker::new(self.heater()?, self.pump()?))
    }
}

impl Default for ComponentContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ComponentContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentContainer")
            .field("heaters", &self.heater_kinds())
            .field("pumps", &self.pump_kinds())
            .field("heater_choice", &self.heater_choice)
            .field("pump_choice", &self.pump_choice)
            .finish()
    }
}

fn unknown(role: &str, name: &str) -> ShowcaseError {
    ShowcaseError::UnknownComponent {
        role: role.to_string(),
        name: name.to_string(),
    }
}

fn circular(role: &str, name: &str) -> ShowcaseError {
    ShowcaseError::CircularDependency {
        role: role.to_string(),
        name: name.to_string(),
    }
}
