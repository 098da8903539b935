/*
    This module generates sample token sequences for a rule
*/

use rand::prelude::*;
use tracing::debug;

use crate::error_handling::*;
use crate::grammar::{Diagram, Registry};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum GenerateErrorType {
    // An undefined nonterminal was used
    #[error("No definition for nonterminal `{0}`")]
    UndefinedNonterminal(String),
}

impl ErrorType for GenerateErrorType {}

pub type GenerateError = Error<GenerateErrorType>;
pub type GenResult = Result<Vec<String>, GenerateError>;

// Most extra passes a generated loop takes
const MAX_REPEATS: usize = 2;

struct Generator<'a, R: Rng> {
    registry: &'a Registry,
    rng: &'a mut R,
    max_depth: usize,
    tokens: Vec<String>,
}

/// Random walk over `rule`'s diagram. References are expanded while fewer
/// than `max_depth` rules enclose them; deeper ones are emitted by name.
pub fn generate(registry: &Registry, rule: &str, rng: &mut impl Rng, max_depth: usize) -> GenResult {
    let mut generator = Generator {
        registry,
        rng,
        max_depth,
        tokens: Vec::new()
    };
    generator.expand(rule, rule, 0)?;
    debug!(rule, tokens = generator.tokens.len(), "generated sample");
    Ok(generator.tokens)
}

impl<R: Rng> Generator<'_, R> {
    fn expand(&mut self, name: &str, referrer: &str, depth: usize) -> Result<(), GenerateError> {
        let diagram = self.registry
            .describe(name)
            .ok_or_else(|| GenerateError {
                location: Location::rule(referrer),
                error: GenerateErrorType::UndefinedNonterminal(name.to_string())
            })?;
        self.walk(&diagram, name, depth)
    }

    fn walk(&mut self, diagram: &Diagram, rule: &str, depth: usize) -> Result<(), GenerateError> {
        match diagram {
            Diagram::Sequence(items) | Diagram::Stack(items) => {
                for item in items {
                    self.walk(item, rule, depth)?;
                }
            }
            Diagram::Choice(items) => {
                if let Some(item) = items.choose(&mut *self.rng) {
                    self.walk(item, rule, depth)?;
                }
            }
            Diagram::Optional(item) => {
                if self.rng.gen_bool(0.5) {
                    self.walk(item, rule, depth)?;
                }
            }
            Diagram::OneOrMore { item, separator } => self.repeat(item, separator.as_deref(), rule, depth)?,
            Diagram::ZeroOrMore { item, separator } => {
                if self.rng.gen_bool(0.5) {
                    self.repeat(item, separator.as_deref(), rule, depth)?;
                }
            }
            Diagram::Terminal(text) => self.tokens.push(text.clone()),
            Diagram::NonTerminal(name) if depth < self.max_depth => self.expand(name, rule, depth + 1)?,
            Diagram::NonTerminal(name) => {
                if !self.registry.contains(name) {
                    return Err(GenerateError {
                        location: Location::rule(rule),
                        error: GenerateErrorType::UndefinedNonterminal(name.clone())
                    });
                }
                self.tokens.push(name.clone());
            }
            Diagram::Comment(_) | Diagram::Skip => {}
        }
        Ok(())
    }

    fn repeat(&mut self, item: &Diagram, separator: Option<&Diagram>, rule: &str, depth: usize) -> Result<(), GenerateError> {
        let extra = self.rng.gen_range(0..=MAX_REPEATS);
        self.walk(item, rule, depth)?;
        for _ in 0..extra {
            if let Some(separator) = separator {
                self.walk(separator, rule, depth)?;
            }
            self.walk(item, rule, depth)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;

    use super::*;
    use crate::grammar::c23;
    use crate::grammar::matcher::accepts;
    use crate::grammar::{nt, seq, t};

    #[test]
    fn unexpanded_samples_are_accepted() {
        let registry = c23::registry();
        let rules = [
            "multiplicative-expression",
            "logical-or-expression",
            "postfix-expression",
            "iteration-statement",
            "enum-specifier",
            "initializer-list"
        ];

        for rule in rules {
            let diagram = registry.describe(rule).unwrap();
            for seed in 0..20 {
                let mut rng = StdRng::seed_from_u64(seed);
                let sample = generate(&registry, rule, &mut rng, 0).unwrap();
                let symbols: Vec<&str> = sample.iter().map(String::as_str).collect();
                assert!(accepts(&diagram, &symbols), "{rule}: {symbols:?}");
            }
        }
    }

    #[test]
    fn same_seed_same_sample() {
        let registry = c23::registry();
        let first = generate(&registry, "declaration", &mut StdRng::seed_from_u64(7), 3).unwrap();
        let second = generate(&registry, "declaration", &mut StdRng::seed_from_u64(7), 3).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn expands_within_depth() {
        let mut registry = Registry::new();
        registry.register("pair", || seq(vec![nt("left"), t(","), nt("right")]));
        registry.register("left", || t("x"));
        registry.register("right", || t("y"));
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(generate(&registry, "pair", &mut rng, 1).unwrap(), vec!["x", ",", "y"]);
        assert_eq!(generate(&registry, "pair", &mut rng, 0).unwrap(), vec!["left", ",", "right"]);
    }

    #[test]
    fn undefined_nonterminals() {
        let mut registry = Registry::new();
        registry.register("outer", || seq(vec![t("a"), nt("ghost")]));
        let mut rng = StdRng::seed_from_u64(0);

        for depth in [0, 2] {
            assert_eq!(generate(&registry, "outer", &mut rng, depth), Err(GenerateError {
                location: Location::rule("outer"),
                error: GenerateErrorType::UndefinedNonterminal("ghost".to_string())
            }));
        }
        assert_eq!(generate(&registry, "nowhere", &mut rng, 2), Err(GenerateError {
            location: Location::rule("nowhere"),
            error: GenerateErrorType::UndefinedNonterminal("nowhere".to_string())
        }));
    }
}
