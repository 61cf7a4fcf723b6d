use std::collections::HashMap;

/// Port for looking up process-environment variables.
pub trait EnvSource {
    /// Value of the variable `name`, or `None` when unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// A fixed snapshot of variables, used where the real process
/// environment must not leak in.
impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}
