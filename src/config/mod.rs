pub mod wiring_config;

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use crate::app::demos::{DemoContext, DemoKind};
    use crate::core::wiring::WiringStyle;
    use crate::utils::error::{Result, ShowcaseError};
    use crate::utils::validation::Validate;
    use clap::Parser;
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "lang-showcase")]
    #[command(about = "Value objects, exhaustive matching and coffee maker wiring, printed to the console")]
    pub struct CliConfig {
        /// Demo to run; runs every demo when omitted
        #[arg(long, value_enum)]
        pub demo: Option<DemoKind>,

        /// How the coffee demo assembles its coffee maker
        #[arg(long, value_enum, default_value_t = WiringStyle::Manual)]
        pub wiring: WiringStyle,

        /// TOML wiring file for `--wiring config`
        #[arg(long)]
        pub wiring_file: Option<PathBuf>,

        /// Emit logs as JSON lines
        #[arg(long)]
        pub json_logs: bool,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        pub fn demo_context(&self) -> DemoContext {
            DemoContext {
                wiring: self.wiring,
                wiring_file: self.wiring_file.clone(),
            }
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if self.wiring_file.is_some() && self.wiring != WiringStyle::Config {
                return Err(ShowcaseError::ConfigError {
                    message: format!(
                        "--wiring-file only applies to --wiring config, not --wiring {}",
                        self.wiring
                    ),
                });
            }
            if let Some(path) = &self.wiring_file {
                if !path.is_file() {
                    return Err(ShowcaseError::ConfigError {
                        message: format!("wiring file {} does not exist", path.display()),
                    });
                }
            }
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_defaults() {
            let config = CliConfig::parse_from(["lang-showcase"]);
            assert_eq!(config.demo, None);
            assert_eq!(config.wiring, WiringStyle::Manual);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_parse_demo_and_wiring() {
            let config =
                CliConfig::parse_from(["lang-showcase", "--demo", "text-blocks", "--wiring", "plugins"]);
            assert_eq!(config.demo, Some(DemoKind::TextBlocks));
            assert_eq!(config.demo_context().wiring, WiringStyle::Plugins);
        }

        #[test]
        fn test_wiring_file_needs_config_style() {
            let config = CliConfig::parse_from([
                "lang-showcase",
                "--wiring",
                "manual",
                "--wiring-file",
                "wiring.toml",
            ]);
            assert!(config.validate().is_err());
        }
    }
}
