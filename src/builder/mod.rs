/*
    This module turns diagram descriptions into nodes of a drawing library.

    Drawing libraries disagree on how primitives are made: some expose plain
    factory functions, others want constructors. `Builder` hides that behind
    one method per primitive kind.
*/

pub mod rail;

use std::cell::Cell;
use std::fmt::Display;

use tracing::{debug, warn};

use crate::dom::Element;
use crate::error_handling::*;
use crate::grammar::{Diagram, Registry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Diagram,
    Sequence,
    Stack,
    Choice,
    Optional,
    OneOrMore,
    ZeroOrMore,
    Terminal,
    NonTerminal,
    Comment,
    Skip,
}

impl Display for PrimitiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PrimitiveKind::Diagram => "diagram",
            PrimitiveKind::Sequence => "sequence",
            PrimitiveKind::Stack => "stack",
            PrimitiveKind::Choice => "choice",
            PrimitiveKind::Optional => "optional",
            PrimitiveKind::OneOrMore => "one-or-more",
            PrimitiveKind::ZeroOrMore => "zero-or-more",
            PrimitiveKind::Terminal => "terminal",
            PrimitiveKind::NonTerminal => "non-terminal",
            PrimitiveKind::Comment => "comment",
            PrimitiveKind::Skip => "skip",
        };
        write!(f, "{}", name)
    }
}

// How a primitive is invoked: as a plain function or through its constructor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    Call,
    Construct,
}

impl Convention {
    pub fn alternate(self) -> Self {
        match self {
            Convention::Call => Convention::Construct,
            Convention::Construct => Convention::Call,
        }
    }
}

#[derive(Debug)]
pub enum Arg<N> {
    Node(N),
    Nodes(Vec<N>),
    Label(String),
}

#[derive(Debug)]
pub enum LibraryError<N> {
    // The primitive has to be invoked the other way; the arguments come back
    // untouched so the call can be retried
    Convention(Vec<Arg<N>>),
    Failed(String),
}

#[derive(Debug, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct ExportError(pub String);

/// The drawing library diagrams are built with.
pub trait DiagramLibrary {
    type Node;

    fn invoke(
        &self,
        kind: PrimitiveKind,
        convention: Convention,
        args: Vec<Arg<Self::Node>>,
    ) -> Result<Self::Node, LibraryError<Self::Node>>;

    /// Standalone vector graphic for a finished diagram.
    fn export_svg(&self, node: &Self::Node) -> Result<String, ExportError>;

    /// Markup fragment embedding the diagram.
    fn export_markup(&self, node: &Self::Node) -> Result<String, ExportError>;

    /// Mounts the diagram directly into `container`.
    fn attach(&self, node: &Self::Node, container: &mut Element) -> Result<(), ExportError>;
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum BuildErrorType {
    #[error("`{kind}` could not be invoked with either calling convention")]
    Incompatible { kind: PrimitiveKind },
    #[error("`{kind}` failed: {message}")]
    Library { kind: PrimitiveKind, message: String },
    #[error("malformed diagram: {0}")]
    Malformed(String),
}

impl ErrorType for BuildErrorType {}

pub type BuildResult<N> = Result<N, BuildErrorType>;

pub struct Builder<'a, L: DiagramLibrary> {
    library: &'a L,
    // Sticks to whichever convention last succeeded
    convention: Cell<Convention>,
}

impl<'a, L: DiagramLibrary> Builder<'a, L> {
    pub fn new(library: &'a L) -> Self {
        Builder {
            library,
            convention: Cell::new(Convention::Call)
        }
    }

    pub fn convention(&self) -> Convention {
        self.convention.get()
    }

    pub fn build(&self, kind: PrimitiveKind, args: Vec<Arg<L::Node>>) -> BuildResult<L::Node> {
        let convention = self.convention.get();
        let args = match self.library.invoke(kind, convention, args) {
            Ok(node) => return Ok(node),
            Err(LibraryError::Failed(message)) => return Err(BuildErrorType::Library { kind, message }),
            Err(LibraryError::Convention(args)) => args,
        };

        let alternate = convention.alternate();
        debug!(%kind, ?alternate, "retrying primitive with the other calling convention");
        match self.library.invoke(kind, alternate, args) {
            Ok(node) => {
                self.convention.set(alternate);
                Ok(node)
            }
            Err(LibraryError::Failed(message)) => Err(BuildErrorType::Library { kind, message }),
            Err(LibraryError::Convention(_)) => Err(BuildErrorType::Incompatible { kind }),
        }
    }

    pub fn diagram(&self, root: L::Node) -> BuildResult<L::Node> {
        self.build(PrimitiveKind::Diagram, vec![Arg::Node(root)])
    }

    pub fn sequence(&self, items: Vec<L::Node>) -> BuildResult<L::Node> {
        self.build(PrimitiveKind::Sequence, vec![Arg::Nodes(items)])
    }

    pub fn stack(&self, items: Vec<L::Node>) -> BuildResult<L::Node> {
        self.build(PrimitiveKind::Stack, vec![Arg::Nodes(items)])
    }

    pub fn choice(&self, items: Vec<L::Node>) -> BuildResult<L::Node> {
        self.build(PrimitiveKind::Choice, vec![Arg::Nodes(items)])
    }

    pub fn optional(&self, item: L::Node) -> BuildResult<L::Node> {
        self.build(PrimitiveKind::Optional, vec![Arg::Node(item)])
    }

    pub fn one_or_more(&self, item: L::Node, separator: Option<L::Node>) -> BuildResult<L::Node> {
        self.build(PrimitiveKind::OneOrMore, repeat_args(item, separator))
    }

    pub fn zero_or_more(&self, item: L::Node, separator: Option<L::Node>) -> BuildResult<L::Node> {
        self.build(PrimitiveKind::ZeroOrMore, repeat_args(item, separator))
    }

    pub fn terminal(&self, text: &str) -> BuildResult<L::Node> {
        self.build(PrimitiveKind::Terminal, vec![Arg::Label(text.to_string())])
    }

    pub fn non_terminal(&self, name: &str) -> BuildResult<L::Node> {
        self.build(PrimitiveKind::NonTerminal, vec![Arg::Label(name.to_string())])
    }

    pub fn comment(&self, text: &str) -> BuildResult<L::Node> {
        self.build(PrimitiveKind::Comment, vec![Arg::Label(text.to_string())])
    }

    pub fn skip(&self) -> BuildResult<L::Node> {
        self.build(PrimitiveKind::Skip, Vec::new())
    }

    /// Builds the library nodes for `diagram`, wrapped as a finished diagram.
    pub fn finish(&self, diagram: &Diagram, registry: &Registry) -> BuildResult<L::Node> {
        let root = self.lower(diagram, registry)?;
        self.diagram(root)
    }

    /// Builds the library nodes for `diagram`. References to rules missing
    /// from `registry` become a visible placeholder instead of an error.
    pub fn lower(&self, diagram: &Diagram, registry: &Registry) -> BuildResult<L::Node> {
        match diagram {
            Diagram::Sequence(items) => self.sequence(self.lower_all(PrimitiveKind::Sequence, items, registry)?),
            Diagram::Stack(items) => self.stack(self.lower_all(PrimitiveKind::Stack, items, registry)?),
            Diagram::Choice(items) => self.choice(self.lower_all(PrimitiveKind::Choice, items, registry)?),
            Diagram::Optional(item) => self.optional(self.lower(item, registry)?),
            Diagram::OneOrMore { item, separator } => {
                let (item, separator) = self.lower_repeat(item, separator.as_deref(), registry)?;
                self.one_or_more(item, separator)
            }
            Diagram::ZeroOrMore { item, separator } => {
                let (item, separator) = self.lower_repeat(item, separator.as_deref(), registry)?;
                self.zero_or_more(item, separator)
            }
            Diagram::Terminal(text) => self.terminal(text),
            Diagram::NonTerminal(name) if registry.contains(name) => self.non_terminal(name),
            Diagram::NonTerminal(name) => {
                warn!(rule = %name, "reference to a rule with no factory");
                self.comment(&format!("undefined: {}", name))
            }
            Diagram::Comment(text) => self.comment(text),
            Diagram::Skip => self.skip(),
        }
    }

    fn lower_all(&self, kind: PrimitiveKind, items: &[Diagram], registry: &Registry) -> BuildResult<Vec<L::Node>> {
        if items.is_empty() {
            return Err(BuildErrorType::Malformed(format!("empty {}", kind)));
        }
        items.iter().map(|item| self.lower(item, registry)).collect()
    }

    fn lower_repeat(
        &self,
        item: &Diagram,
        separator: Option<&Diagram>,
        registry: &Registry,
    ) -> BuildResult<(L::Node, Option<L::Node>)> {
        let item = self.lower(item, registry)?;
        let separator = separator.map(|separator| self.lower(separator, registry)).transpose()?;
        Ok((item, separator))
    }
}

fn repeat_args<N>(item: N, separator: Option<N>) -> Vec<Arg<N>> {
    let mut args = vec![Arg::Node(item)];
    args.extend(separator.map(Arg::Node));
    args
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::grammar::{choice, list, nt, opt, seq, t};

    // Builds nodes as s-expressions. Accepts only `convention`, and fails any
    // primitive listed in `broken`.
    pub struct Sketch {
        pub convention: Convention,
        pub broken: Vec<PrimitiveKind>,
        pub calls: RefCell<Vec<(PrimitiveKind, Convention)>>,
    }

    impl Sketch {
        pub fn new(convention: Convention) -> Self {
            Sketch {
                convention,
                broken: Vec::new(),
                calls: RefCell::new(Vec::new())
            }
        }
    }

    impl DiagramLibrary for Sketch {
        type Node = String;

        fn invoke(&self, kind: PrimitiveKind, convention: Convention, args: Vec<Arg<String>>) -> Result<String, LibraryError<String>> {
            self.calls.borrow_mut().push((kind, convention));
            if convention != self.convention {
                return Err(LibraryError::Convention(args));
            }
            if self.broken.contains(&kind) {
                return Err(LibraryError::Failed(format!("{} is broken", kind)));
            }
            let parts: Vec<String> = args.into_iter().map(|arg| match arg {
                Arg::Node(node) => node,
                Arg::Nodes(nodes) => nodes.join(" "),
                Arg::Label(label) => format!("{:?}", label),
            }).collect();
            if parts.is_empty() {
                Ok(format!("({})", kind))
            } else {
                Ok(format!("({} {})", kind, parts.join(" ")))
            }
        }

        fn export_svg(&self, node: &String) -> Result<String, ExportError> {
            Ok(format!("<svg>{}</svg>", node))
        }

        fn export_markup(&self, node: &String) -> Result<String, ExportError> {
            Ok(format!("<div>{}</div>", node))
        }

        fn attach(&self, node: &String, container: &mut Element) -> Result<(), ExportError> {
            container.append(crate::dom::Node::Text(node.clone()));
            Ok(())
        }
    }

    #[test]
    fn retries_with_the_other_convention() {
        let library = Sketch::new(Convention::Construct);
        let builder = Builder::new(&library);

        assert_eq!(builder.terminal("if"), Ok("(terminal \"if\")".to_string()));
        assert_eq!(builder.convention(), Convention::Construct);
        assert_eq!(builder.terminal("else"), Ok("(terminal \"else\")".to_string()));

        // The first call tried Call, then Construct; the second went straight to Construct
        assert_eq!(*library.calls.borrow(), vec![
            (PrimitiveKind::Terminal, Convention::Call),
            (PrimitiveKind::Terminal, Convention::Construct),
            (PrimitiveKind::Terminal, Convention::Construct)
        ]);
    }

    #[test]
    fn other_failures_propagate_unchanged() {
        let mut library = Sketch::new(Convention::Call);
        library.broken.push(PrimitiveKind::Choice);
        let builder = Builder::new(&library);

        let a = builder.terminal("a").unwrap();
        assert_eq!(builder.choice(vec![a]), Err(BuildErrorType::Library {
            kind: PrimitiveKind::Choice,
            message: "choice is broken".to_string()
        }));
        assert_eq!(library.calls.borrow().len(), 2);
    }

    #[test]
    fn lowers_every_primitive() {
        let library = Sketch::new(Convention::Call);
        let builder = Builder::new(&library);
        let mut registry = Registry::new();
        registry.register("item", || t("x"));
        let diagram = seq(vec![
            opt(t("static")),
            list(nt("item"), t(",")),
            choice(vec![t("a"), Diagram::Skip])
        ]);

        assert_eq!(
            builder.finish(&diagram, &registry),
            Ok("(diagram (sequence (optional (terminal \"static\")) \
                (one-or-more (non-terminal \"item\") (terminal \",\")) \
                (choice (terminal \"a\") (skip))))".to_string())
        );
    }

    #[test]
    fn undefined_reference_becomes_placeholder() {
        let library = Sketch::new(Convention::Call);
        let builder = Builder::new(&library);

        assert_eq!(
            builder.lower(&nt("ghost"), &Registry::new()),
            Ok("(comment \"undefined: ghost\")".to_string())
        );
    }

    #[test]
    fn empty_choice_is_malformed() {
        let library = Sketch::new(Convention::Call);
        let builder = Builder::new(&library);

        assert_eq!(
            builder.lower(&choice(Vec::new()), &Registry::new()),
            Err(BuildErrorType::Malformed("empty choice".to_string()))
        );
    }
}
