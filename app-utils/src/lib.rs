use std::env::{self, VarError};

use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, registry, EnvFilter};

/// Loads `.env` from the working directory or its parents. A missing file is fine, a malformed one
/// is not.
pub fn load_env() -> Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => {
            debug!(path = %path.display(), "loaded environment file");
            Ok(())
        }
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(err).context("could not load .env file"),
    }
}

/// Reads an environment variable, treating an unset variable as `None`.
pub fn env_var(name: &str) -> Result<Option<String>> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(err) => Err(err).with_context(|| format!("could not read environment variable {name}")),
    }
}

pub fn env_var_or(name: &str, default: &str) -> Result<String> {
    Ok(env_var(name)?.unwrap_or_else(|| default.to_owned()))
}

pub fn init_tracing() -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()
        .context("invalid RUST_LOG filter")?;

    registry()
        .with(fmt::layer().event_format(format().pretty()).with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .context("could not install tracing subscriber")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_variable_falls_back_to_default() {
        let name = "APP_UTILS_TEST_SURELY_UNSET";
        assert_eq!(env_var(name).unwrap(), None);
        assert_eq!(env_var_or(name, "text").unwrap(), "text");
    }

    #[test]
    fn set_variable_is_read() {
        let name = "APP_UTILS_TEST_SET";
        env::set_var(name, "csv");
        assert_eq!(env_var(name).unwrap().as_deref(), Some("csv"));
        assert_eq!(env_var_or(name, "text").unwrap(), "csv");
    }
}
