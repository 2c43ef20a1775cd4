//! Provider catalog.
//!
//! Providers are registered explicitly when the catalog is built; lookups
//! walk them in registration order.

use crate::adapters::{ElectricHeater, InductionHeater, RotaryPump, Thermosiphon};
use crate::core::coffee::CoffeeMaker;
use crate::domain::ports::Heater;
use crate::utils::error::{Result, ShowcaseError};
use std::sync::Arc;

pub trait CoffeeMakerProvider: Send + Sync {
    fn name(&self) -> &str;
    fn create(&self) -> Result<CoffeeMaker>;
}

/// Electric heater feeding a thermosiphon.
pub struct StandardProvider;

impl CoffeeMakerProvider for StandardProvider {
    fn name(&self) -> &str {
        "standard"
    }

    fn create(&self) -> Result<CoffeeMaker> {
        let heater: Arc<dyn Heater> = Arc::new(ElectricHeater::new());
        let pump = Arc::new(Thermosiphon::new(Arc::clone(&heater)));
        Ok(CoffeeMaker::new(heater, pump))
    }
}

/// Induction heater with a rotary pump, two cups at a time.
pub struct EspressoProvider;

impl CoffeeMakerProvider for EspressoProvider {
    fn name(&self) -> &str {
        "espresso"
    }

    fn create(&self) -> Result<CoffeeMaker> {
        CoffeeMaker::new(Arc::new(InductionHeater::new()), Arc::new(RotaryPump)).with_cups(2)
    }
}

#[derive(Default)]
pub struct PluginCatalog {
    providers: Vec<Box<dyn CoffeeMakerProvider>>,
}

impl PluginCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        Self::new()
            .with(StandardProvider)
            .with(EspressoProvider)
    }

    pub fn with<P: CoffeeMakerProvider + 'static>(mut self, provider: P) -> Self {
        self.register(provider);
        self
    }

    pub fn register<P: CoffeeMakerProvider + 'static>(&mut self, provider: P) {
        tracing::debug!("registering provider '{}'", provider.name());
        self.providers.push(Box::new(provider));
    }

    pub fn names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn find_first(&self) -> Result<CoffeeMaker> {
        let provider = self
            .providers
            .first()
            .ok_or_else(|| ShowcaseError::UnknownComponent {
                role: "provider".to_string(),
                name: "<any>".to_string(),
            })?;
        tracing::debug!("using first provider '{}'", provider.name());
        provider.create()
    }

    pub fn find(&self, name: &str) -> Result<CoffeeMaker> {
        self.providers
            .iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| ShowcaseError::UnknownComponent {
                role: "provider".to_string(),
                name: name.to_string(),
            })?
            .create()
    }
}
