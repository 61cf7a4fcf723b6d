use std::path::Path;

use serde_json::{Map, Value};

use crate::core::errors::{Result, RunConfigError};

/// Key every environment file must define.
pub const BASE_URL_KEY: &str = "baseUrl";

/// Parsed contents of an `env.<name>.json` file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileConfig {
    pub values: Map<String, Value>,
}

impl FileConfig {
    /// Parse and validate the raw content of the file at `path`.
    ///
    /// # Errors
    ///
    /// - `MalformedFile` if the content is not JSON or not a JSON object.
    /// - `MissingRequiredKey` if `baseUrl` is absent, null, or empty.
    /// - `InvalidKeyType` if `baseUrl` is not a string.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| RunConfigError::MalformedFile {
                path: path.to_path_buf(),
                detail: e.to_string(),
            })?;

        let values = match value {
            Value::Object(values) => values,
            other => {
                return Err(RunConfigError::MalformedFile {
                    path: path.to_path_buf(),
                    detail: format!("expected a JSON object, found {}", kind_of(&other)),
                });
            }
        };

        match values.get(BASE_URL_KEY) {
            None | Some(Value::Null) => return Err(missing_base_url(path)),
            Some(Value::String(s)) if s.is_empty() => return Err(missing_base_url(path)),
            Some(Value::String(_)) => {}
            Some(_) => {
                return Err(RunConfigError::InvalidKeyType {
                    path: path.to_path_buf(),
                    key: BASE_URL_KEY.to_string(),
                    expected: "a string".to_string(),
                });
            }
        }

        Ok(Self { values })
    }

    /// The validated `baseUrl`, if this layer has one.
    ///
    /// Always `Some` for a parsed file; `None` for the empty layer.
    pub fn base_url(&self) -> Option<&str> {
        self.values.get(BASE_URL_KEY).and_then(Value::as_str)
    }
}

fn missing_base_url(path: &Path) -> RunConfigError {
    RunConfigError::MissingRequiredKey {
        path: path.to_path_buf(),
        key: BASE_URL_KEY.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
