#![deny(missing_docs)]
//! This crate provides a typed utility for determining what environment we are in at runtime

use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// The environment variable that selects the runtime environment
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// The current environment the application is running in
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Production environment
    Production,
    /// Dev and or staging environment
    Develop,
    /// The server is running on localhost
    Local,
}

/// An error which can occur when constructing an [Environment]
#[derive(Debug, Error)]
pub enum BizdeskEnvErr {
    /// the ENVIRONMENT variable was missing or not unicode
    #[error("could not read {ENVIRONMENT_VAR}: {0}")]
    VarErr(#[from] std::env::VarError),
    /// the input string value was not recognized as a valid env
    #[error("{0}")]
    InvalidValue(#[from] UnknownValue),
}

impl Environment {
    /// Attempt to construct a new version of [Environment] from the environment variables
    #[tracing::instrument(err, level = tracing::Level::TRACE)]
    pub fn new_from_env() -> Result<Self, BizdeskEnvErr> {
        let v = std::env::var(ENVIRONMENT_VAR)?;
        Ok(Self::from_str(&v)?)
    }

    /// attempt to create a new [Environment] falling back to production if we fail to construct
    pub fn new_or_prod() -> Self {
        Self::new_from_env().unwrap_or(Environment::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "prod"),
            Environment::Develop => write!(f, "dev"),
            Environment::Local => write!(f, "local"),
        }
    }
}

/// Represents a value which cannot be converted into an [Environment]
#[derive(Debug, Error)]
#[error("Could not convert {0} into an environment value")]
pub struct UnknownValue(String);

impl FromStr for Environment {
    type Err = UnknownValue;

    fn from_str(environment: &str) -> Result<Self, UnknownValue> {
        match environment {
            "prod" => Ok(Environment::Production),
            "dev" => Ok(Environment::Develop),
            "local" => Ok(Environment::Local),
            s => Err(UnknownValue(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_values() {
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Develop);
        assert_eq!("local".parse::<Environment>().unwrap(), Environment::Local);
    }

    #[test]
    fn display_round_trips() {
        for env in [
            Environment::Production,
            Environment::Develop,
            Environment::Local,
        ] {
            assert_eq!(env.to_string().parse::<Environment>().unwrap(), env);
        }
    }

    #[test]
    fn rejects_unknown_values() {
        assert!("staging".parse::<Environment>().is_err());
    }
}
