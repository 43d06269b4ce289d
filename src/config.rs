use std::fmt;
use std::str::FromStr;

use crate::domain::error::ConfigError;

/// Environment variable selecting how finished test reports are emitted.
pub const REPORT_FORMAT_ENV: &str = "SOFTASSERT_REPORT";

/// Output format for finished test reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// `--- FAIL:` blocks on stderr.
    #[default]
    Text,
    /// One JSON line per finished test on stderr.
    Json,
    /// Nothing is emitted.
    Silent,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Silent => "silent",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "silent" | "off" | "none" => Ok(Self::Silent),
            _ => Err(ConfigError::UnknownReportFormat {
                value: value.to_string(),
            }),
        }
    }
}

/// Settings shared by every [`crate::TestContext`] created from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportConfig {
    pub format: ReportFormat,
}

impl ReportConfig {
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Reads [`REPORT_FORMAT_ENV`]. Unset, blank and unknown values fall back
    /// to the default format.
    pub fn from_env() -> Self {
        Self::from_env_strict().unwrap_or_default()
    }

    /// Like [`ReportConfig::from_env`], but unknown values are an error.
    pub fn from_env_strict() -> Result<Self, ConfigError> {
        Self::from_value(std::env::var(REPORT_FORMAT_ENV).ok().as_deref())
    }

    fn from_value(raw: Option<&str>) -> Result<Self, ConfigError> {
        match raw.filter(|value| !value.trim().is_empty()) {
            Some(value) => Ok(Self::new(value.parse()?)),
            None => Ok(Self::default()),
        }
    }
}
