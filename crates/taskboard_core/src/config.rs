//! Board configuration.
//!
//! # Responsibility
//! - Carry input rules for the project form and logging settings.
//! - Reject internally inconsistent settings before the board is built.
//!
//! # Invariants
//! - `people_min` is positive and not above `people_max`.
//! - Length bounds, when both set, are not inverted.

use crate::logging::default_log_level;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Validation bounds applied by the project form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRules {
    pub title_max_length: Option<usize>,
    pub description_min_length: usize,
    pub description_max_length: Option<usize>,
    pub people_min: u32,
    pub people_max: u32,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            title_max_length: None,
            description_min_length: 5,
            description_max_length: None,
            people_min: 1,
            people_max: 5,
        }
    }
}

impl FormRules {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.people_min == 0 {
            return Err(ConfigError::NonPositivePeopleMin);
        }
        if self.people_min > self.people_max {
            return Err(ConfigError::InvertedPeopleRange {
                min: self.people_min,
                max: self.people_max,
            });
        }
        if let Some(max) = self.description_max_length {
            if self.description_min_length > max {
                return Err(ConfigError::InvertedDescriptionLength {
                    min: self.description_min_length,
                    max,
                });
            }
        }
        if self.title_max_length == Some(0) {
            return Err(ConfigError::ZeroTitleMaxLength);
        }
        Ok(())
    }
}

/// Logging backend settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// One of `trace|debug|info|warn|error`.
    pub level: String,
    /// Absolute directory for rolling log files. `None` leaves logging off.
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

/// Top-level board configuration, built in code by the host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardConfig {
    pub form: FormRules,
    pub logging: LoggingConfig,
}

impl BoardConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.form.validate()
    }
}

/// Inconsistent configuration values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NonPositivePeopleMin,
    InvertedPeopleRange { min: u32, max: u32 },
    InvertedDescriptionLength { min: usize, max: usize },
    ZeroTitleMaxLength,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositivePeopleMin => write!(f, "people_min must be at least 1"),
            Self::InvertedPeopleRange { min, max } => {
                write!(f, "people_min ({min}) must be <= people_max ({max})")
            }
            Self::InvertedDescriptionLength { min, max } => write!(
                f,
                "description_min_length ({min}) must be <= description_max_length ({max})"
            ),
            Self::ZeroTitleMaxLength => write!(f, "title_max_length must be at least 1"),
        }
    }
}

impl Error for ConfigError {}
