//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, EnvError> {
    env::var(name).map_err(|_| EnvError::MissingEnv(name))
}

/// Get an environment variable, falling back to `default` when unset.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    get_env(name).unwrap_or_else(|_| default.to_string())
}

/// Get and parse an environment variable, falling back to `default` when unset.
pub fn get_env_parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T, EnvError> {
    match get_env(name) {
        Ok(val) => val.trim().parse::<T>().map_err(|_| EnvError::WrongFormat(name)),
        Err(_) => Ok(default),
    }
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum EnvError {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl std::fmt::Display for EnvError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for EnvError {}
// endregion: --- Error
