//! Common types and utilities shared across CLI commands.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use tracing::debug;

use prefstore::app::{AppConfig, PrefsApp};
use prefstore::PrefValue;

use crate::error::CliError;

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Application identifier that scopes the preference store
    #[arg(long, global = true, default_value = "io.prefstore.cli")]
    pub app: String,

    /// Explicit store name (defaults to the application identifier)
    #[arg(long, global = true)]
    pub name: Option<String>,

    /// Bind to the named store as-is instead of the default one
    #[arg(long, global = true)]
    pub no_default_store: bool,

    /// Override the storage root directory
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Perform the preference bootstrap for the current invocation.
///
/// This is the process's startup hook: it translates the CLI flags into an
/// [`AppConfig`] and starts the application, nothing more.
pub fn bootstrap(opts: &GlobalOpts) -> Result<PrefsApp, CliError> {
    let mut config =
        AppConfig::new(&opts.app).with_use_default_store(!opts.no_default_store);

    if let Some(name) = &opts.name {
        config = config.with_store_name(name);
    }
    if let Some(root) = &opts.root {
        config = config.with_storage_root(root);
    }

    debug!(app_id = %opts.app, "bootstrapping preference store");
    PrefsApp::start(config).map_err(CliError::from)
}

/// Stored type selection for `set --type`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ValueType {
    /// Boolean (`true` or `false`)
    Bool,
    /// 64-bit integer
    Int,
    /// 64-bit float
    Float,
    /// UTF-8 string
    String,
}

/// Parse a raw CLI value into a store value.
///
/// With an explicit type the value must parse as that type. Without one the
/// type is inferred: boolean, then integer, then float, then string.
pub fn parse_value(raw: &str, value_type: Option<ValueType>) -> Result<PrefValue, CliError> {
    match value_type {
        Some(ValueType::Bool) => raw
            .parse::<bool>()
            .map(PrefValue::Bool)
            .map_err(|_| CliError::Config(format!("'{}' is not a boolean", raw))),
        Some(ValueType::Int) => raw
            .parse::<i64>()
            .map(PrefValue::Int)
            .map_err(|_| CliError::Config(format!("'{}' is not an integer", raw))),
        Some(ValueType::Float) => raw
            .parse::<f64>()
            .map(PrefValue::Float)
            .map_err(|_| CliError::Config(format!("'{}' is not a float", raw))),
        Some(ValueType::String) => Ok(PrefValue::String(raw.to_string())),
        None => Ok(infer_value(raw)),
    }
}

fn infer_value(raw: &str) -> PrefValue {
    if let Ok(b) = raw.parse::<bool>() {
        return PrefValue::Bool(b);
    }
    if let Ok(i) = raw.parse::<i64>() {
        return PrefValue::Int(i);
    }
    if let Ok(x) = raw.parse::<f64>() {
        return PrefValue::Float(x);
    }
    PrefValue::String(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_bool_int_float_string() {
        assert_eq!(parse_value("true", None).unwrap(), PrefValue::Bool(true));
        assert_eq!(parse_value("42", None).unwrap(), PrefValue::Int(42));
        assert_eq!(parse_value("-1.5", None).unwrap(), PrefValue::Float(-1.5));
        assert_eq!(
            parse_value("hello", None).unwrap(),
            PrefValue::String("hello".to_string())
        );
    }

    #[test]
    fn test_explicit_type_forces_string() {
        assert_eq!(
            parse_value("42", Some(ValueType::String)).unwrap(),
            PrefValue::String("42".to_string())
        );
    }

    #[test]
    fn test_explicit_type_rejects_mismatch() {
        let err = parse_value("hello", Some(ValueType::Int)).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_integer_preferred_over_float() {
        assert_eq!(parse_value("7", None).unwrap(), PrefValue::Int(7));
        assert_eq!(parse_value("7.0", None).unwrap(), PrefValue::Float(7.0));
    }
}
