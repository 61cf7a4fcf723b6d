use crate::core::traits::env_source::EnvSource;

/// Reads variables from the real process environment.
///
/// Variables whose value is not valid Unicode are treated as unset.
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}
