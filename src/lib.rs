pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::app::demos::{DemoContext, DemoKind};
pub use crate::config::wiring_config::WiringConfig;
pub use crate::core::coffee::CoffeeMaker;
pub use crate::core::wiring::WiringStyle;
pub use crate::utils::error::{Result, ShowcaseError};
