use std::collections::HashMap;

use tracing::warn;

use super::Diagram;

pub type RuleFactory = fn() -> Diagram;

// Rule name -> diagram factory. Names keep the order they were first
// registered in, which is the order filtering and listing report.
#[derive(Debug, Default)]
pub struct Registry {
    order: Vec<String>,
    factories: HashMap<String, RuleFactory>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `factory` under `name`.
    ///
    /// Registering a name twice replaces the earlier factory; the name keeps
    /// its original position.
    pub fn register(&mut self, name: &str, factory: RuleFactory) {
        if self.factories.insert(name.to_string(), factory).is_some() {
            warn!(rule = name, "rule registered twice, keeping the last factory");
        } else {
            self.order.push(name.to_string());
        }
    }

    pub fn lookup(&self, name: &str) -> Option<RuleFactory> {
        self.factories.get(name).copied()
    }

    // Looks the rule up and builds its diagram
    pub fn describe(&self, name: &str) -> Option<Diagram> {
        self.lookup(name).map(|factory| factory())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{nt, t};

    #[test]
    fn lookup_registered_and_absent() {
        let mut registry = Registry::new();
        registry.register("alpha", || t("a"));

        assert_eq!(registry.describe("alpha"), Some(t("a")));
        assert!(registry.lookup("no-such-rule").is_none());
        assert_eq!(registry.describe("no-such-rule"), None);
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = Registry::new();
        registry.register("alpha", || t("first"));
        registry.register("bravo", || t("b"));
        registry.register("alpha", || t("second"));

        assert_eq!(registry.describe("alpha"), Some(t("second")));
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["alpha", "bravo"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn forward_references_are_allowed() {
        let mut registry = Registry::new();
        registry.register("early", || nt("late"));
        registry.register("late", || t("x"));

        assert_eq!(registry.describe("early"), Some(nt("late")));
        assert!(registry.contains("late"));
    }
}
