use crate::core::coffee::MAX_CUPS;
use crate::core::wiring::container::{ComponentContainer, DEFAULT_HEATER, DEFAULT_PUMP};
use crate::utils::error::{Result, ShowcaseError};
use crate::utils::validation::{validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// Coffee maker wiring read from a TOML file:
///
/// ```toml
/// [heater]
/// kind = "electric"
///
/// [pump]
/// kind = "thermosiphon"
///
/// [maker]
/// cups = 2
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WiringConfig {
    pub heater: ComponentConfig,
    pub pump: ComponentConfig,
    pub maker: Option<MakerConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentConfig {
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MakerConfig {
    pub cups: Option<u32>,
}

impl Default for WiringConfig {
    fn default() -> Self {
        Self {
            heater: ComponentConfig {
                kind: DEFAULT_HEATER.to_string(),
            },
            pump: ComponentConfig {
                kind: DEFAULT_PUMP.to_string(),
            },
            maker: None,
        }
    }
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env pattern is a valid regex"))
}

impl WiringConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("loading wiring from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| ShowcaseError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed)?)
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn cups(&self) -> u32 {
        self.maker.as_ref().and_then(|m| m.cups).unwrap_or(1)
    }
}

impl Validate for WiringConfig {
    /// Kinds are checked against the built-in container, the same catalog
    /// `configured::coffee_maker` resolves them from.
    fn validate(&self) -> Result<()> {
        ComponentContainer::with_builtin_components()
            .ensure_registered(&self.heater.kind, &self.pump.kind)?;
        validate_range("maker.cups", self.cups(), 1, MAX_CUPS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_wiring() {
        let config = WiringConfig::from_toml_str(
            r#"
[heater]
kind = "induction"

[pump]
kind = "rotary"

[maker]
cups = 3
"#,
        )
        .unwrap();

        assert_eq!(config.heater.kind, "induction");
        assert_eq!(config.pump.kind, "rotary");
        assert_eq!(config.cups(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SHOWCASE_TEST_HEATER", "electric");

        let config = WiringConfig::from_toml_str(
            r#"
[heater]
kind = "${SHOWCASE_TEST_HEATER}"

[pump]
kind = "thermosiphon"
"#,
        )
        .unwrap();
        assert_eq!(config.heater.kind, "electric");
        assert_eq!(config.cups(), 1);

        std::env::remove_var("SHOWCASE_TEST_HEATER");
    }

    #[test]
    fn test_unset_variable_fails_validation() {
        let config = WiringConfig::from_toml_str(
            r#"
[heater]
kind = "${SHOWCASE_TEST_UNSET_HEATER}"

[pump]
kind = "thermosiphon"
"#,
        )
        .unwrap();
        assert_eq!(config.heater.kind, "${SHOWCASE_TEST_UNSET_HEATER}");
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ShowcaseError::UnknownComponent { ref role, .. } if role == "heater"));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = WiringConfig::default();
        config.pump.kind = "piston".to_string();
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ShowcaseError::UnknownComponent { ref role, ref name } if role == "pump" && name == "piston")
        );
        assert_eq!(err.exit_code(), 3);

        let mut config = WiringConfig::default();
        config.maker = Some(MakerConfig { cups: Some(0) });
        assert!(matches!(
            config.validate().unwrap_err(),
            ShowcaseError::InvalidArgument { .. }
        ));
    }

    #[test]
    fn test_missing_section_is_parse_error() {
        let err = WiringConfig::from_toml_str("[heater]\nkind = \"electric\"\n").unwrap_err();
        assert!(matches!(err, ShowcaseError::ConfigParse(_)));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[heater]\nkind = \"electric\"\n\n[pump]\nkind = \"rotary\"\n")
            .unwrap();

        let config = WiringConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.pump.kind, "rotary");
    }
}
