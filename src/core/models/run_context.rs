use serde::Serialize;
use serde_json::{Map, Value};

/// Configuration context carried from setup into test execution.
///
/// `env` is the generic key/value map test specs look values up in;
/// `base_url` is the dedicated slot the runner navigates relative to.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunContext {
    pub base_url: Option<String>,
    pub env: Map<String, Value>,
    pub spec_pattern: String,
}

impl RunContext {
    pub fn new(spec_pattern: impl Into<String>) -> Self {
        Self {
            base_url: None,
            env: Map::new(),
            spec_pattern: spec_pattern.into(),
        }
    }

    /// Seed a value into the configuration map before resolution.
    pub fn define(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Look up a resolved value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.env.get(key)
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// All keys of the configuration map, sorted.
    pub fn keys(&self) -> Vec<&str> {
        self.env.keys().map(String::as_str).collect()
    }
}
