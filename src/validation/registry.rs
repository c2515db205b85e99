//! Named validators resolved from keys stored in cell payloads

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Validator behavior. Returns true if the text is acceptable.
pub type ValidationFn = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Host-provided mapping from validator key to predicate
#[derive(Clone, Default)]
pub struct ValidatorRegistry {
    validators: HashMap<String, ValidationFn>,
}

impl fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("keys", &self.keys())
            .finish()
    }
}

impl ValidatorRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in validators:
    /// - `numeric`: ASCII digits only (empty allowed)
    /// - `integer`: optional leading `-`, then ASCII digits
    /// - `any`: accepts everything
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("numeric", is_numeric);
        registry.register("integer", is_integer);
        registry.register("any", |_| true);
        registry
    }

    /// Register (or replace) a validator under `key`.
    ///
    /// Closures may capture configuration, e.g. a maximum length.
    pub fn register<F>(&mut self, key: impl Into<String>, validator: F)
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.validators.insert(key.into(), Arc::new(validator));
    }

    pub fn get(&self, key: &str) -> Option<&ValidationFn> {
        self.validators.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.validators.contains_key(key)
    }

    /// Registered keys, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.validators.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

fn is_numeric(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_digit())
}

fn is_integer(text: &str) -> bool {
    is_numeric(text.strip_prefix('-').unwrap_or(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins() {
        let registry = ValidatorRegistry::with_builtins();
        assert_eq!(registry.keys(), vec!["any", "integer", "numeric"]);

        let numeric = registry.get("numeric").unwrap();
        assert!(numeric("0123"));
        assert!(numeric(""));
        assert!(!numeric("12a"));
        assert!(!numeric("-1"));

        let integer = registry.get("integer").unwrap();
        assert!(integer("-12"));
        assert!(!integer("1-2"));

        assert!(registry.get("any").unwrap()("¯\\_(ツ)_/¯"));
    }

    #[test]
    fn test_register_custom() {
        let mut registry = ValidatorRegistry::new();
        assert!(!registry.contains("short"));

        registry.register("short", |s| s.chars().count() <= 3);
        assert!(registry.contains("short"));
        assert!(registry.get("short").unwrap()("abc"));
        assert!(!registry.get("short").unwrap()("abcd"));
    }

    #[test]
    fn test_register_capturing_closure() {
        let max_len = 5;
        let mut registry = ValidatorRegistry::new();
        registry.register("bounded", move |s: &str| s.chars().count() <= max_len);

        let bounded = registry.get("bounded").unwrap();
        assert!(bounded("12345"));
        assert!(!bounded("123456"));
    }

    #[test]
    fn test_debug_lists_keys() {
        let registry = ValidatorRegistry::with_builtins();
        assert_eq!(
            format!("{:?}", registry),
            r#"ValidatorRegistry { keys: ["any", "integer", "numeric"] }"#
        );
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = ValidatorRegistry::with_builtins();
        registry.register("numeric", |_| false);
        assert!(!registry.get("numeric").unwrap()("1"));
    }
}
