//! User settings for finboard
//!
//! Manages display preferences and the upstream data contract (the sign
//! convention the API uses for credit balances).

use serde::{Deserialize, Serialize};

use super::paths::FinboardPaths;
use crate::error::FinboardError;
use crate::models::CreditBalanceSign;

/// Language of the short month labels shown on the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MonthLabels {
    /// Spanish (default, "Ene", "Feb", ...)
    #[default]
    Es,
    /// English ("Jan", "Feb", ...)
    En,
}

const MONTHS_ES: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

impl MonthLabels {
    /// Short label for a zero-based month index
    pub fn short(&self, month0: u32) -> &'static str {
        let table = match self {
            Self::Es => &MONTHS_ES,
            Self::En => &MONTHS_EN,
        };
        table.get(month0 as usize).copied().unwrap_or("???")
    }
}

/// User settings for finboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Month label language for the cash-flow chart
    #[serde(default)]
    pub month_labels: MonthLabels,

    /// How the API signs credit account balances
    #[serde(default)]
    pub credit_balance_sign: CreditBalanceSign,

    /// Number of transactions in the dashboard's recent list
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Default page size for transaction listings
    #[serde(default = "default_per_page")]
    pub per_page: usize,

    /// Width of the bars in the terminal chart
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_recent_limit() -> usize {
    10
}

fn default_per_page() -> usize {
    15
}

fn default_chart_width() -> usize {
    30
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            month_labels: MonthLabels::default(),
            credit_balance_sign: CreditBalanceSign::default(),
            recent_limit: default_recent_limit(),
            per_page: default_per_page(),
            chart_width: default_chart_width(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FinboardPaths) -> Result<Self, FinboardError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FinboardError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FinboardError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            log::debug!("Loaded settings from {}", settings_path.display());
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinboardPaths) -> Result<(), FinboardError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FinboardError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            FinboardError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Format an amount with the configured currency symbol
    pub fn format_money(&self, amount: crate::models::Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}
