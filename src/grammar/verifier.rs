use itertools::Itertools;
use rand::Rng;

use crate::error_handling::*;
use crate::generator::generate;

use super::c23::sections::Section;
use super::matcher::accepts;
use super::Registry;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum GrammarErrorType {
    // A rule refers to a rule that was never registered
    #[error("Could not find definition for `{0}`")]
    UndefinedNonterminal(String),
    // A section lists a rule that was never registered
    #[error("Section lists `{0}` but no factory is defined for it")]
    OrphanedSectionEntry(String),
    // A sample generated from a rule is not accepted by that rule's diagram
    #[error("Generated sample `{0}` is not accepted by the rule")]
    RejectedSample(String),
}

impl ErrorType for GrammarErrorType {}

pub type GrammarError = Error<GrammarErrorType>;
pub type GrammarErrors = Errors<GrammarErrorType>;

fn get_rule_undefined_symbols(name: &str, registry: &Registry) -> GrammarErrors {
    // Build the rule and keep only the references nothing is registered for
    let Some(diagram) = registry.describe(name) else {
        return Vec::new();
    };

    diagram.nonterminals()
        .into_iter()
        .filter(|symbol| !registry.contains(symbol))
        .map(|symbol| GrammarError {
            location: Location::rule(name),
            error: GrammarErrorType::UndefinedNonterminal(symbol.to_owned())
        })
        .collect()
}

pub fn verify_references(registry: &Registry) -> Result<(), GrammarErrors> {
    let errors: GrammarErrors = registry.names()
        .flat_map(|name| get_rule_undefined_symbols(name, registry))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn verify_sections(registry: &Registry, sections: &[Section]) -> Result<(), GrammarErrors> {
    let errors: GrammarErrors = sections.iter()
        .flat_map(|section| section.rules.iter().map(move |rule| (section.id, *rule)))
        .filter(|(_, rule)| !registry.contains(rule))
        .map(|(section, rule)| GrammarError {
            location: Location::in_section(section, rule),
            error: GrammarErrorType::OrphanedSectionEntry(rule.to_owned())
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Generates `rounds` unexpanded samples per rule and checks that the rule's
/// own diagram accepts each one. Undefined references are left to
/// `verify_references`.
pub fn verify_samples(registry: &Registry, rng: &mut impl Rng, rounds: usize) -> Result<(), GrammarErrors> {
    let mut errors = GrammarErrors::new();

    for name in registry.names() {
        let Some(diagram) = registry.describe(name) else {
            continue;
        };
        for _ in 0..rounds {
            let Ok(sample) = generate(registry, name, &mut *rng, 0) else {
                break;
            };
            let symbols = sample.iter().map(String::as_str).collect_vec();
            if !accepts(&diagram, &symbols) {
                errors.push(GrammarError {
                    location: Location::rule(name),
                    error: GrammarErrorType::RejectedSample(symbols.join(" "))
                });
                break;
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::grammar::{choice, nt, one_or_more, seq, t};

    #[test]
    fn undefined_references_are_located() {
        let mut registry = Registry::new();
        registry.register("alpha", || seq(vec![nt("bravo"), nt("ghost")]));
        registry.register("bravo", || t("b"));

        assert_eq!(verify_references(&registry), Err(vec![
            GrammarError {
                location: Location::rule("alpha"),
                error: GrammarErrorType::UndefinedNonterminal("ghost".to_string())
            }
        ]));
    }

    #[test]
    fn orphaned_section_entries() {
        let mut registry = Registry::new();
        registry.register("alpha", || t("a"));
        let sections = [Section {
            id: "letters",
            title: "Letters",
            rules: &["alpha", "missing"]
        }];

        assert_eq!(verify_sections(&registry, &sections), Err(vec![
            GrammarError {
                location: Location::in_section("letters", "missing"),
                error: GrammarErrorType::OrphanedSectionEntry("missing".to_string())
            }
        ]));
    }

    #[test]
    fn clean_registry_verifies() {
        let mut registry = Registry::new();
        registry.register("alpha", || nt("bravo"));
        registry.register("bravo", || t("b"));

        assert_eq!(verify_references(&registry), Ok(()));
    }

    #[test]
    fn samples_are_checked_against_their_rule() {
        let mut registry = Registry::new();
        registry.register("list", || seq(vec![t("("), one_or_more(nt("item")), t(")")]));
        registry.register("item", || t("x"));
        registry.register("nothing", || choice(Vec::new()));
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(verify_samples(&registry, &mut rng, 5), Err(vec![
            GrammarError {
                location: Location::rule("nothing"),
                error: GrammarErrorType::RejectedSample(String::new())
            }
        ]));
    }
}
