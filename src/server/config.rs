use std::{sync::Arc, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DB_TIMEOUT_SECS: u64 = 3;
const DEFAULT_MEMBER_STATUSES: &str =
    "Active,Pre-Alumnus,Alumnus,Co-op,Transferred,Expelled,Inactive,Out of Contact";

pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Deadline applied to every individual database call.
    pub db_timeout: Duration,
    pub statuses: StatusTaxonomy,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let port = match lookup("APP_PORT") {
            Some(value) => parse_var("APP_PORT", value)?,
            None => DEFAULT_PORT,
        };

        let db_timeout_secs = match lookup("DB_TIMEOUT_SECS") {
            Some(value) => parse_var("DB_TIMEOUT_SECS", value)?,
            None => DEFAULT_DB_TIMEOUT_SECS,
        };

        let statuses = StatusTaxonomy::parse(
            &lookup("MEMBER_STATUSES").unwrap_or_else(|| DEFAULT_MEMBER_STATUSES.to_string()),
        )?;

        let run_migrations = match lookup("RUN_MIGRATIONS") {
            Some(value) => parse_var("RUN_MIGRATIONS", value)?,
            None => true,
        };

        Ok(Self {
            database_url,
            port,
            db_timeout: Duration::from_secs(db_timeout_secs),
            statuses,
            run_migrations,
        })
    }
}

fn parse_var<T>(name: &str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
            value,
        })
}

/// Allow-list of member status labels, loaded from configuration.
///
/// Cheap to clone; every clone shares the same label list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTaxonomy {
    labels: Arc<[String]>,
}

impl StatusTaxonomy {
    /// Parses a comma-separated label list.
    ///
    /// Labels are trimmed, empty entries dropped and duplicates removed keeping the
    /// first occurrence.
    ///
    /// # Returns
    /// - `Ok(StatusTaxonomy)` - At least one label remained
    /// - `Err(ConfigError::EmptyStatusList)` - No labels after cleanup
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let mut labels: Vec<String> = Vec::new();
        for label in raw.split(',').map(str::trim).filter(|l| !l.is_empty()) {
            if !labels.iter().any(|existing| existing == label) {
                labels.push(label.to_string());
            }
        }

        if labels.is_empty() {
            return Err(ConfigError::EmptyStatusList);
        }

        Ok(Self {
            labels: labels.into(),
        })
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Rejects labels outside the taxonomy with a 400 response.
    pub fn validate(&self, label: &str) -> Result<(), AppError> {
        if self.contains(label) {
            Ok(())
        } else {
            Err(AppError::BadRequest(format!(
                "Invalid status '{}'; expected one of: {}",
                label,
                self.labels.join(", ")
            )))
        }
    }
}

impl Default for StatusTaxonomy {
    fn default() -> Self {
        let labels: Vec<String> = DEFAULT_MEMBER_STATUSES
            .split(',')
            .map(str::to_string)
            .collect();
        Self {
            labels: labels.into(),
        }
    }
}
