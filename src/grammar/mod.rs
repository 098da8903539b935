/*
    This module is for describing grammar rules as railroad diagrams
*/

pub mod c23;
pub mod matcher;
pub mod registry;
pub mod verifier;

pub use registry::{Registry, RuleFactory};

// A railroad diagram as plain data. Non-terminals are references by name and
// are only resolved when the diagram is rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagram {
    Sequence(Vec<Diagram>),
    // A sequence drawn as stacked lines, for long productions
    Stack(Vec<Diagram>),
    Choice(Vec<Diagram>),
    Optional(Box<Diagram>),
    OneOrMore {
        item: Box<Diagram>,
        separator: Option<Box<Diagram>>
    },
    ZeroOrMore {
        item: Box<Diagram>,
        separator: Option<Box<Diagram>>
    },
    Terminal(String),
    NonTerminal(String),
    Comment(String),
    Skip,
}

impl Diagram {
    /// Names of every rule this diagram refers to, in the order they appear.
    pub fn nonterminals(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_nonterminals(&mut names);
        names
    }

    fn collect_nonterminals<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Diagram::Sequence(items) | Diagram::Stack(items) | Diagram::Choice(items) => {
                for item in items {
                    item.collect_nonterminals(names);
                }
            }
            Diagram::Optional(item) => item.collect_nonterminals(names),
            Diagram::OneOrMore { item, separator } | Diagram::ZeroOrMore { item, separator } => {
                item.collect_nonterminals(names);
                if let Some(separator) = separator {
                    separator.collect_nonterminals(names);
                }
            }
            Diagram::NonTerminal(name) => names.push(name),
            Diagram::Terminal(_) | Diagram::Comment(_) | Diagram::Skip => {}
        }
    }
}

pub fn seq(items: Vec<Diagram>) -> Diagram {
    Diagram::Sequence(items)
}

pub fn stack(items: Vec<Diagram>) -> Diagram {
    Diagram::Stack(items)
}

pub fn choice(items: Vec<Diagram>) -> Diagram {
    Diagram::Choice(items)
}

pub fn opt(item: Diagram) -> Diagram {
    Diagram::Optional(Box::new(item))
}

pub fn one_or_more(item: Diagram) -> Diagram {
    Diagram::OneOrMore { item: Box::new(item), separator: None }
}

pub fn zero_or_more(item: Diagram) -> Diagram {
    Diagram::ZeroOrMore { item: Box::new(item), separator: None }
}

// One or more `item`s with `separator` drawn on the loop back
pub fn list(item: Diagram, separator: Diagram) -> Diagram {
    Diagram::OneOrMore {
        item: Box::new(item),
        separator: Some(Box::new(separator))
    }
}

pub fn t(text: &str) -> Diagram {
    Diagram::Terminal(text.to_string())
}

pub fn nt(name: &str) -> Diagram {
    Diagram::NonTerminal(name.to_string())
}

pub fn comment(text: &str) -> Diagram {
    Diagram::Comment(text.to_string())
}

// A choice between literal tokens
pub fn tokens(texts: &[&str]) -> Diagram {
    choice(texts.iter().map(|text| t(text)).collect())
}

/// A binary-operator precedence level.
///
/// The left-recursive `level: level op operand | operand` becomes
/// `operand (op operand)*`, so the first operand binds first and the level
/// can never start with an operator.
pub fn chain(operand: &str, operators: &[&str]) -> Diagram {
    let operator = match operators {
        [single] => t(single),
        _ => tokens(operators),
    };
    seq(vec![nt(operand), zero_or_more(seq(vec![operator, nt(operand)]))])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_shape() {
        assert_eq!(
            chain("cast-expression", &["*", "/", "%"]),
            seq(vec![
                nt("cast-expression"),
                zero_or_more(seq(vec![
                    choice(vec![t("*"), t("/"), t("%")]),
                    nt("cast-expression")
                ]))
            ])
        );
        assert_eq!(
            chain("equality-expression", &["&"]),
            seq(vec![
                nt("equality-expression"),
                zero_or_more(seq(vec![t("&"), nt("equality-expression")]))
            ])
        );
    }

    #[test]
    fn nonterminals_in_order() {
        let diagram = seq(vec![
            nt("alpha"),
            choice(vec![t("x"), nt("bravo")]),
            list(nt("charlie"), nt("delta")),
            opt(comment("note")),
            Diagram::Skip
        ]);

        assert_eq!(diagram.nonterminals(), vec!["alpha", "bravo", "charlie", "delta"]);
    }
}
