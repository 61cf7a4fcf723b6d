use std::path::PathBuf;

/// All domain errors for runcfg.
///
/// Each variant provides enough context to fix the offending file or
/// variable without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum RunConfigError {
    #[error(
        "Malformed environment config file: {path}\n\n  \
         {detail}\n\n  \
         The file must contain a single JSON object, e.g.:\n    \
         {{ \"baseUrl\": \"https://staging.example.com\" }}"
    )]
    MalformedFile { path: PathBuf, detail: String },

    #[error(
        "Missing required key \"{key}\" in {path}. Please ensure it is defined.\n\n  \
         Solutions:\n    \
         → Add \"{key}\" to the file\n    \
         → Or delete the file and supply CYPRESS_LOGIN_URL instead"
    )]
    MissingRequiredKey { path: PathBuf, key: String },

    #[error("Invalid value for \"{key}\" in {path}: expected {expected}")]
    InvalidKeyType {
        path: PathBuf,
        key: String,
        expected: String,
    },

    #[error(
        "Key '{key}' not found in the resolved configuration\n\n  \
         Available keys: {available}"
    )]
    KeyNotFound { key: String, available: String },

    #[error(
        "No base URL resolved for environment '{env}'\n\n  \
         Solutions:\n    \
         → Create {path} with a \"baseUrl\" key\n    \
         → Or export CYPRESS_LOGIN_URL"
    )]
    BaseUrlUnresolved { env: String, path: PathBuf },

    #[error("Invalid definition '{raw}': expected KEY=VALUE")]
    InvalidDefinition { raw: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RunConfigError>;
