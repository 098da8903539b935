/*
    Checks which symbol sequences a single diagram accepts. Non-terminals are
    not expanded: a reference matches a symbol equal to the rule's name.
*/

use std::collections::BTreeSet;

use super::Diagram;

type Positions = BTreeSet<usize>;

pub fn accepts(diagram: &Diagram, symbols: &[&str]) -> bool {
    advance(diagram, &Positions::from([0]), symbols).contains(&symbols.len())
}

// Every input position reachable after matching `diagram` starting from any
// of `from`
fn advance(diagram: &Diagram, from: &Positions, symbols: &[&str]) -> Positions {
    match diagram {
        Diagram::Terminal(text) | Diagram::NonTerminal(text) => from.iter()
            .filter(|&&pos| symbols.get(pos) == Some(&text.as_str()))
            .map(|pos| pos + 1)
            .collect(),
        Diagram::Comment(_) | Diagram::Skip => from.clone(),
        Diagram::Sequence(items) | Diagram::Stack(items) => items.iter()
            .fold(from.clone(), |positions, item| advance(item, &positions, symbols)),
        Diagram::Choice(items) => items.iter()
            .flat_map(|item| advance(item, from, symbols))
            .collect(),
        Diagram::Optional(item) => {
            let mut positions = advance(item, from, symbols);
            positions.extend(from);
            positions
        }
        Diagram::OneOrMore { item, separator } => repeat(item, separator.as_deref(), from, symbols),
        Diagram::ZeroOrMore { item, separator } => {
            let mut positions = repeat(item, separator.as_deref(), from, symbols);
            positions.extend(from);
            positions
        }
    }
}

fn repeat(item: &Diagram, separator: Option<&Diagram>, from: &Positions, symbols: &[&str]) -> Positions {
    let mut reached = advance(item, from, symbols);
    let mut frontier = reached.clone();

    while !frontier.is_empty() {
        let before_item = match separator {
            Some(separator) => advance(separator, &frontier, symbols),
            None => frontier,
        };
        frontier = advance(item, &before_item, symbols)
            .difference(&reached)
            .copied()
            .collect();
        reached.extend(&frontier);
    }

    reached
}
