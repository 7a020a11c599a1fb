//! Console configuration

use bookloan_common::{
    Catalog, LoanError, Result, DEFAULT_LATE_FEE_PER_DAY, DEFAULT_PROCESSING_DELAY_MS,
};
use bookloan_rules::LoanRulesConfig;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Upper bound accepted for `BOOKLOAN_LATE_FEE_PER_DAY`
pub const MAX_LATE_FEE_PER_DAY: Decimal = dec!(1000000);

/// Console configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// Simulated checkout time per book
    pub processing_delay_ms: u64,
    /// Late fee per overdue day
    pub late_fee_per_day: Decimal,
    /// Overdue days applied to the summary
    pub days_late: i32,
    /// JSON catalog to load instead of the built-in one
    pub catalog_path: Option<PathBuf>,
    /// Print the loan report after the summary
    pub show_report: bool,
    /// List descriptions and loan periods instead of the short catalog
    pub detailed_catalog: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: DEFAULT_PROCESSING_DELAY_MS,
            late_fee_per_day: DEFAULT_LATE_FEE_PER_DAY,
            days_late: 0,
            catalog_path: None,
            show_report: false,
            detailed_catalog: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from `.env` and the process environment
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from a variable lookup, starting from defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = parse_var(&lookup, "BOOKLOAN_PROCESSING_DELAY_MS")? {
            cfg.processing_delay_ms = v;
        }
        if let Some(v) = parse_var::<Decimal, _>(&lookup, "BOOKLOAN_LATE_FEE_PER_DAY")? {
            if v < Decimal::ZERO || v > MAX_LATE_FEE_PER_DAY {
                return Err(LoanError::Config(format!(
                    "BOOKLOAN_LATE_FEE_PER_DAY: must be between 0 and {}, got {}",
                    MAX_LATE_FEE_PER_DAY, v
                )));
            }
            cfg.late_fee_per_day = v;
        }
        if let Some(v) = parse_var(&lookup, "BOOKLOAN_DAYS_LATE")? {
            cfg.days_late = v;
        }
        if let Some(path) = lookup("BOOKLOAN_CATALOG_PATH").filter(|p| !p.trim().is_empty()) {
            cfg.catalog_path = Some(PathBuf::from(path.trim()));
        }
        if let Some(raw) = lookup("BOOKLOAN_SHOW_REPORT") {
            cfg.show_report = parse_flag("BOOKLOAN_SHOW_REPORT", &raw)?;
        }
        if let Some(raw) = lookup("BOOKLOAN_DETAILED_CATALOG") {
            cfg.detailed_catalog = parse_flag("BOOKLOAN_DETAILED_CATALOG", &raw)?;
        }

        Ok(cfg)
    }

    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }

    pub fn rules_config(&self) -> LoanRulesConfig {
        LoanRulesConfig {
            processing_delay: self.processing_delay(),
            late_fee_per_day: self.late_fee_per_day,
        }
    }

    /// Configured catalog file, or the built-in catalog
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::from_json_file(path),
            None => Ok(Catalog::seeded()),
        }
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| LoanError::Config(format!("{}: invalid value '{}': {}", key, raw, e))),
        None => Ok(None),
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(LoanError::Config(format!(
            "{}: expected a boolean, got '{}'",
            key, raw
        ))),
    }
}
