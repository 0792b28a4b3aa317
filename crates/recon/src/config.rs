use serde::Deserialize;

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// A check job: which report files to reconcile against which reference
/// table. Paths are resolved relative to the config file by the caller.
#[derive(Debug, Deserialize)]
pub struct CheckConfig {
    pub name: String,
    #[serde(default)]
    pub reports: ReportsConfig,
    pub reference: ReferenceConfig,
    /// Operator-entered fallback VIN, used when neither report carries one.
    #[serde(default)]
    pub manual_vin: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReportsConfig {
    /// Path to the Carfax-style report record (JSON).
    #[serde(default)]
    pub carfax: Option<String>,
    /// Path to the Manheim-style report record (JSON).
    #[serde(default)]
    pub manheim: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReferenceConfig {
    /// Path to the pre-classified reference spreadsheet (CSV/TSV or Excel).
    pub file: String,
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl CheckConfig {
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: CheckConfig =
            toml::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Validation("name must not be empty".into()));
        }

        if self.reference.file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "reference.file must not be empty".into(),
            ));
        }

        let has_manual = self
            .manual_vin
            .as_deref()
            .is_some_and(|v| !v.trim().is_empty());
        if self.reports.carfax.is_none() && self.reports.manheim.is_none() && !has_manual {
            return Err(ConfigError::Validation(
                "at least one report file or a manual_vin is required".into(),
            ));
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
