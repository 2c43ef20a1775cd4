//! Four ways of assembling the same coffee maker.

pub mod configured;
pub mod container;
pub mod manual;
pub mod plugins;

use crate::config::wiring_config::WiringConfig;
use crate::core::coffee::CoffeeMaker;
use crate::utils::error::Result;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum WiringStyle {
    /// Construct every part by hand
    #[default]
    Manual,
    /// Resolve named singletons from a component container
    Container,
    /// Read the parts from a TOML wiring file
    Config,
    /// Ask the first registered provider
    Plugins,
}

impl WiringStyle {
    pub const ALL: [WiringStyle; 4] = [
        WiringStyle::Manual,
        WiringStyle::Container,
        WiringStyle::Config,
        WiringStyle::Plugins,
    ];
}

impl fmt::Display for WiringStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WiringStyle::Manual => "manual",
            WiringStyle::Container => "container",
            WiringStyle::Config => "config",
            WiringStyle::Plugins => "plugins",
        };
        f.write_str(name)
    }
}

/// Builds a maker in the given style. `wiring_file` is only read by
/// [`WiringStyle::Config`]; without it the default wiring is used.
pub fn build(style: WiringStyle, wiring_file: Option<&Path>) -> Result<CoffeeMaker> {
    tracing::debug!("building coffee maker with {} wiring", style);
    match style {
        WiringStyle::Manual => Ok(manual::coffee_maker()),
        WiringStyle::Container => container::ComponentContainer::with_builtin_components().coffee_maker(),
        WiringStyle::Config => {
            let config = match wiring_file {
                Some(path) => WiringConfig::from_file(path)?,
                None => WiringConfig::default(),
            };
            configured::coffee_maker(&config)
        }
        WiringStyle::Plugins => plugins::PluginCatalog::builtin().find_first(),
    }
}
