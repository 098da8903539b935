/*
    The C23 grammar (ISO/IEC 9899:2024, annex A), transcribed as diagrams
*/

mod declarations;
mod expressions;
mod external;
mod lexical;
pub mod sections;
mod statements;

use tracing::debug;

use super::Registry;

/// Builds the registry holding every C23 rule this crate draws.
pub fn registry() -> Registry {
    let mut registry = Registry::new();

    lexical::register(&mut registry);
    expressions::register(&mut registry);
    declarations::register(&mut registry);
    statements::register(&mut registry);
    external::register(&mut registry);

    debug!(rules = registry.len(), "registered C23 grammar");
    registry
}
