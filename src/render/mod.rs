/*
    This module mounts rule diagrams into a document
*/

pub mod page;

use std::fmt::Display;

use tracing::{debug, info, warn};

use crate::builder::{BuildErrorType, Builder, DiagramLibrary, ExportError};
use crate::dom::{Element, Node};
use crate::error_handling::*;
use crate::grammar::c23::sections::Section;
use crate::grammar::{Diagram, Registry};

// Marks the container a section's rules are rendered into
pub const SECTION_ATTR: &str = "data-section";

/// Ways of turning a built diagram into something displayable, in the order
/// they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Vector,
    Markup,
    Attach,
}

impl Strategy {
    pub const ORDER: [Strategy; 3] = [Strategy::Vector, Strategy::Markup, Strategy::Attach];
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Vector => write!(f, "vector"),
            Strategy::Markup => write!(f, "markup"),
            Strategy::Attach => write!(f, "attach"),
        }
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum RenderErrorType {
    #[error(transparent)]
    Build(#[from] BuildErrorType),
    #[error("every export strategy failed, last with: {0}")]
    Exhausted(ExportError),
}

impl ErrorType for RenderErrorType {}

pub type RenderError = Error<RenderErrorType>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rendered(Strategy),
    Missing,
    Failed,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    pub rendered: usize,
    pub missing: usize,
    pub failed: usize,
    pub skipped_sections: usize,
}

impl RenderSummary {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Rendered(_) => self.rendered += 1,
            Outcome::Missing => self.missing += 1,
            Outcome::Failed => self.failed += 1,
        }
    }
}

/// Case-insensitive substring filter that keeps the original order. An empty
/// query keeps every name; whitespace in the query is matched literally.
pub fn filter_rule_names<'n>(names: impl IntoIterator<Item = &'n str>, query: &str) -> Vec<&'n str> {
    let query = query.to_lowercase();
    names.into_iter()
        .filter(|name| query.is_empty() || name.to_lowercase().contains(&query))
        .collect()
}

fn rule_block(name: &str) -> Element {
    Element::new("div")
        .with_attr("class", "rule")
        .with_attr("id", &format!("rule-{}", name))
        .with_child(Element::new("h3").with_text(name))
}

fn placeholder(message: &str) -> Element {
    Element::new("div")
        .with_attr("class", "render-error")
        .with_child(Element::new("p").with_text(message))
}

pub struct Renderer<'a, L: DiagramLibrary> {
    registry: &'a Registry,
    library: &'a L,
    builder: Builder<'a, L>,
}

impl<'a, L: DiagramLibrary> Renderer<'a, L> {
    pub fn new(registry: &'a Registry, library: &'a L) -> Self {
        Renderer {
            registry,
            library,
            builder: Builder::new(library)
        }
    }

    /// Renders every section into the child of `root` marked with the
    /// section's id, keeping only rules that match `query`. Whatever the
    /// containers held before is replaced.
    pub fn render_all_sections(&self, root: &mut Element, sections: &[Section], query: &str) -> RenderSummary {
        let mut summary = RenderSummary::default();
        info!(sections = sections.len(), query, "rendering grammar");

        for section in sections {
            let Some(container) = root.find_by_attr_mut(SECTION_ATTR, section.id) else {
                warn!(section = section.id, "no container for section, skipping");
                summary.skipped_sections += 1;
                continue;
            };

            container.replace_children(Vec::new());
            let names = filter_rule_names(section.rules.iter().copied(), query);
            debug!(section = section.id, rules = names.len(), "rendering section");
            for name in names {
                summary.record(self.render_rule(container, name));
            }
        }

        info!(
            rendered = summary.rendered,
            missing = summary.missing,
            failed = summary.failed,
            convention = ?self.builder.convention(),
            "finished rendering"
        );
        summary
    }

    /// Looks `name` up and renders it. A name with no factory gets a
    /// placeholder block.
    pub fn render_rule(&self, container: &mut Element, name: &str) -> Outcome {
        let Some(factory) = self.registry.lookup(name) else {
            warn!(rule = name, "no factory defined for rule");
            let mut block = rule_block(name);
            block.set_attr("class", "rule missing");
            block.append_element(placeholder(&format!("No factory is defined for rule `{}`.", name)));
            container.append_element(block);
            return Outcome::Missing;
        };

        self.render(container, name, &factory())
    }

    /// Appends a titled block for `name` showing `diagram`, or an inline error
    /// if the diagram cannot be drawn.
    pub fn render(&self, container: &mut Element, name: &str, diagram: &Diagram) -> Outcome {
        let mut block = rule_block(name);

        let outcome = match self.mount(&mut block, diagram) {
            Ok(strategy) => {
                debug!(rule = name, %strategy, "rendered rule");
                Outcome::Rendered(strategy)
            }
            Err(error) => {
                let error = RenderError { location: Location::rule(name), error };
                warn!(rule = %error.location, error = %error.error, "could not render rule");
                block.set_attr("class", "rule broken");
                block.append_element(placeholder(&format!("Could not render `{}`: {}", name, error.error)));
                Outcome::Failed
            }
        };

        container.append_element(block);
        outcome
    }

    fn mount(&self, block: &mut Element, diagram: &Diagram) -> Result<Strategy, RenderErrorType> {
        let node = self.builder.finish(diagram, self.registry)?;

        let mut last_error = ExportError("no export strategy was tried".to_string());
        for strategy in Strategy::ORDER {
            let attempt = match strategy {
                Strategy::Vector => self.library.export_svg(&node).map(|svg| block.append(Node::Raw(svg))),
                Strategy::Markup => self.library.export_markup(&node).map(|markup| block.append(Node::Raw(markup))),
                Strategy::Attach => {
                    // Attach into scratch space so a failed attempt leaves nothing behind
                    let mut scratch = Element::new("div");
                    self.library.attach(&node, &mut scratch).map(|()| block.children.append(&mut scratch.children))
                }
            };

            match attempt {
                Ok(()) => return Ok(strategy),
                Err(error) => {
                    debug!(%strategy, %error, "export strategy failed");
                    last_error = error;
                }
            }
        }

        Err(RenderErrorType::Exhausted(last_error))
    }
}
