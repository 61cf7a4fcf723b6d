use std::fmt;

use serde_json::{Map, Value};

use crate::config::settings::RunVar;
use crate::core::models::file_config::BASE_URL_KEY;
use crate::core::traits::env_source::EnvSource;

pub const USERNAME_KEY: &str = "username";
pub const PASSWORD_KEY: &str = "password";

/// Highest-precedence layer, built from CI-injected secrets.
///
/// A field is `Some` only when its variable is set. An empty string
/// still counts as set.
#[derive(Clone, Default, PartialEq)]
pub struct SecretOverlay {
    pub base_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl SecretOverlay {
    /// Read the three secret variables from `env`.
    pub fn from_env(env: &dyn EnvSource) -> Self {
        Self {
            base_url: env.var(RunVar::LoginUrl.as_str()),
            username: env.var(RunVar::Username.as_str()),
            password: env.var(RunVar::Password.as_str()),
        }
    }

    /// Variables that contributed a value, in overlay order.
    pub fn present_vars(&self) -> Vec<RunVar> {
        RunVar::SECRETS
            .into_iter()
            .zip([&self.base_url, &self.username, &self.password])
            .filter(|(_, field)| field.is_some())
            .map(|(var, _)| var)
            .collect()
    }

    /// The overlay as a merge layer. Absent fields contribute no key.
    pub fn to_layer(&self) -> Map<String, Value> {
        let mut layer = Map::new();
        let fields = [
            (BASE_URL_KEY, &self.base_url),
            (USERNAME_KEY, &self.username),
            (PASSWORD_KEY, &self.password),
        ];
        for (key, field) in fields {
            if let Some(value) = field {
                layer.insert(key.to_string(), Value::String(value.clone()));
            }
        }
        layer
    }
}

impl fmt::Debug for SecretOverlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretOverlay")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
