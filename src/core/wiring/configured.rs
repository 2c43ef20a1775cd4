use crate::config::wiring_config::WiringConfig;
use crate::core::coffee::CoffeeMaker;
use crate::core::wiring::container::ComponentContainer;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Builds the maker described by a wiring file, resolving kinds through the
/// built-in container.
pub fn coffee_maker(config: &WiringConfig) -> Result<CoffeeMaker> {
    config.validate()?;
    tracing::debug!(
        "wiring from config: heater={}, pump={}, cups={}",
        config.heater.kind,
        config.pump.kind,
        config.cups()
    );
    ComponentContainer::with_builtin_components()
        .select(&config.heater.kind, &config.pump.kind)?
        .coffee_maker()?
        .with_cups(config.cups())
}
