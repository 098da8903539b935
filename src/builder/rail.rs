// Diagram library backed by the `railroad` crate, which lays diagrams out and
// draws them as SVG.

use railroad::{
    Choice, Comment, Empty, NonTerminal, Optional, Repeat, Sequence, SimpleEnd, SimpleStart,
    Stack, Terminal, DEFAULT_CSS,
};

use super::{Arg, Convention, DiagramLibrary, ExportError, LibraryError, PrimitiveKind};
use crate::dom::{Element, Node};

pub type Part = Box<dyn railroad::Node>;

pub enum RailNode {
    Part(Part),
    // Framed with start and end markers, ready to draw
    Diagram(railroad::Diagram<Part>),
}

/// Which of the two API shapes the library is driven through: free factory
/// functions (older releases) or constructors (newer ones).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiStyle {
    Factory,
    #[default]
    Class,
}

impl ApiStyle {
    fn convention(self) -> Convention {
        match self {
            ApiStyle::Factory => Convention::Call,
            ApiStyle::Class => Convention::Construct,
        }
    }
}

#[derive(Debug, Default)]
pub struct RailroadLibrary {
    style: ApiStyle,
}

impl RailroadLibrary {
    pub fn new(style: ApiStyle) -> Self {
        RailroadLibrary { style }
    }

    // Stylesheet the exported SVG expects on the page
    pub fn css() -> &'static str {
        DEFAULT_CSS
    }
}

fn into_part(node: RailNode) -> Result<Part, String> {
    match node {
        RailNode::Part(part) => Ok(part),
        RailNode::Diagram(_) => Err("a finished diagram cannot be nested".to_string()),
    }
}

fn part(arg: Option<Arg<RailNode>>, kind: PrimitiveKind) -> Result<Part, String> {
    match arg {
        Some(Arg::Node(node)) => into_part(node),
        _ => Err(format!("`{}` expects a node", kind)),
    }
}

fn parts(arg: Option<Arg<RailNode>>, kind: PrimitiveKind) -> Result<Vec<Part>, String> {
    match arg {
        Some(Arg::Nodes(nodes)) if !nodes.is_empty() => nodes.into_iter().map(into_part).collect(),
        Some(Arg::Nodes(_)) => Err(format!("`{}` needs at least one node", kind)),
        _ => Err(format!("`{}` expects a list of nodes", kind)),
    }
}

fn label(arg: Option<Arg<RailNode>>, kind: PrimitiveKind) -> Result<String, String> {
    match arg {
        Some(Arg::Label(text)) => Ok(text),
        _ => Err(format!("`{}` expects a label", kind)),
    }
}

fn construct(kind: PrimitiveKind, args: Vec<Arg<RailNode>>) -> Result<RailNode, String> {
    let mut args = args.into_iter();

    let node: Part = match kind {
        PrimitiveKind::Diagram => {
            let root = part(args.next(), kind)?;
            let framed: Sequence<Part> = Sequence::new(vec![Box::new(SimpleStart) as Part, root, Box::new(SimpleEnd)]);
            return Ok(RailNode::Diagram(railroad::Diagram::new(Box::new(framed) as Part)));
        }
        PrimitiveKind::Sequence => Box::new(Sequence::new(parts(args.next(), kind)?)),
        PrimitiveKind::Stack => Box::new(Stack::new(parts(args.next(), kind)?)),
        PrimitiveKind::Choice => Box::new(Choice::new(parts(args.next(), kind)?)),
        PrimitiveKind::Optional => Box::new(Optional::new(part(args.next(), kind)?)),
        PrimitiveKind::OneOrMore | PrimitiveKind::ZeroOrMore => {
            let item = part(args.next(), kind)?;
            let separator: Part = match args.next() {
                Some(arg) => part(Some(arg), kind)?,
                None => Box::new(Empty),
            };
            let repeat: Part = Box::new(Repeat::new(item, separator));
            if kind == PrimitiveKind::ZeroOrMore {
                Box::new(Optional::new(repeat)) as Part
            } else {
                repeat
            }
        }
        PrimitiveKind::Terminal => Box::new(Terminal::new(label(args.next(), kind)?)),
        PrimitiveKind::NonTerminal => Box::new(NonTerminal::new(label(args.next(), kind)?)),
        PrimitiveKind::Comment => Box::new(Comment::new(label(args.next(), kind)?)),
        PrimitiveKind::Skip => Box::new(Empty),
    };

    Ok(RailNode::Part(node))
}

impl DiagramLibrary for RailroadLibrary {
    type Node = RailNode;

    fn invoke(
        &self,
        kind: PrimitiveKind,
        convention: Convention,
        args: Vec<Arg<RailNode>>,
    ) -> Result<RailNode, LibraryError<RailNode>> {
        if convention != self.style.convention() {
            return Err(LibraryError::Convention(args));
        }
        construct(kind, args).map_err(LibraryError::Failed)
    }

    fn export_svg(&self, node: &RailNode) -> Result<String, ExportError> {
        match node {
            RailNode::Diagram(diagram) => Ok(diagram.to_string()),
            RailNode::Part(_) => Err(ExportError("only finished diagrams can be exported".to_string())),
        }
    }

    fn export_markup(&self, node: &RailNode) -> Result<String, ExportError> {
        let svg = self.export_svg(node)?;
        Ok(format!("<div class=\"railroad-diagram\">{}</div>", svg))
    }

    fn attach(&self, node: &RailNode, container: &mut Element) -> Result<(), ExportError> {
        let svg = self.export_svg(node)?;
        container.append_element(Element::new("figure").with_attr("class", "railroad-diagram"));
        if let Some(Node::Element(figure)) = container.children.last_mut() {
            figure.append(Node::Raw(svg));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Builder;
    use crate::grammar::{chain, nt, Registry};

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry.register("cast-expression", || nt("unary-expression"));
        registry
    }

    #[test]
    fn draws_svg_for_both_api_styles() {
        let registry = registry();
        let diagram = chain("cast-expression", &["*", "/", "%"]);

        for style in [ApiStyle::Factory, ApiStyle::Class] {
            let library = RailroadLibrary::new(style);
            let builder = Builder::new(&library);
            let node = builder.finish(&diagram, &registry).unwrap();
            let svg = library.export_svg(&node).unwrap();

            assert!(svg.contains("<svg"), "{style:?}");
            assert!(svg.contains("cast-expression"), "{style:?}");
            assert!(svg.contains('%'), "{style:?}");
        }
    }

    #[test]
    fn mismatched_convention_hands_arguments_back() {
        let library = RailroadLibrary::new(ApiStyle::Factory);
        let result = library.invoke(
            PrimitiveKind::Terminal,
            Convention::Construct,
            vec![Arg::Label("if".to_string())]
        );

        assert!(matches!(result, Err(LibraryError::Convention(args)) if args.len() == 1));
    }

    #[test]
    fn unfinished_parts_do_not_export() {
        let library = RailroadLibrary::default();
        let builder = Builder::new(&library);
        let node = builder.terminal("if").unwrap();

        assert!(library.export_svg(&node).is_err());
        assert!(library.export_markup(&node).is_err());
    }

    #[test]
    fn wrong_arguments_fail() {
        let library = RailroadLibrary::default();
        let result = library.invoke(PrimitiveKind::Choice, Convention::Construct, vec![Arg::Nodes(Vec::new())]);

        assert!(matches!(result, Err(LibraryError::Failed(message)) if message == "`choice` needs at least one node"));
    }
}
