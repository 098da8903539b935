// Presentation grouping of the C23 rules, in page order

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub rules: &'static [&'static str]
}

pub const SECTIONS: &[Section] = &[
    Section {
        id: "lexical-elements",
        title: "Lexical elements",
        rules: &[
            "identifier", "constant", "enumeration-constant", "predefined-constant",
            "string-literal", "encoding-prefix"
        ]
    },
    Section {
        id: "expressions",
        title: "Expressions",
        rules: &[
            "primary-expression", "generic-selection", "generic-assoc-list",
            "generic-association", "postfix-expression", "argument-expression-list",
            "compound-literal", "storage-class-specifiers", "unary-expression",
            "unary-operator", "cast-expression", "multiplicative-expression",
            "additive-expression", "shift-expression", "relational-expression",
            "equality-expression", "and-expression", "exclusive-or-expression",
            "inclusive-or-expression", "logical-and-expression", "logical-or-expression",
            "conditional-expression", "assignment-expression", "assignment-operator",
            "expression", "constant-expression"
        ]
    },
    Section {
        id: "declarations",
        title: "Declarations",
        rules: &[
            "declaration", "declaration-specifiers", "declaration-specifier",
            "init-declarator-list", "init-declarator", "attribute-declaration",
            "storage-class-specifier", "type-specifier", "struct-or-union-specifier",
            "member-declaration-list", "member-declaration", "specifier-qualifier-list",
            "type-specifier-qualifier", "member-declarator-list", "member-declarator",
            "enum-specifier", "enumerator-list", "enumerator", "enum-type-specifier",
            "atomic-type-specifier", "typeof-specifier", "type-qualifier",
            "function-specifier", "alignment-specifier", "declarator", "direct-declarator",
            "array-declarator", "function-declarator", "pointer", "type-qualifier-list",
            "parameter-type-list", "parameter-list", "parameter-declaration", "type-name",
            "abstract-declarator", "direct-abstract-declarator", "typedef-name",
            "braced-initializer", "initializer", "initializer-list", "designation",
            "designator-list", "designator", "static_assert-declaration",
            "attribute-specifier-sequence", "attribute-specifier", "attribute-list",
            "attribute", "attribute-token", "attribute-argument-clause",
            "balanced-token-sequence", "balanced-token"
        ]
    },
    Section {
        id: "statements",
        title: "Statements and blocks",
        rules: &[
            "statement", "unlabeled-statement", "primary-block", "secondary-block", "label",
            "labeled-statement", "compound-statement", "block-item-list", "block-item",
            "expression-statement", "selection-statement", "iteration-statement",
            "jump-statement"
        ]
    },
    Section {
        id: "external-definitions",
        title: "External definitions",
        rules: &[
            "translation-unit", "external-declaration", "function-definition", "function-body"
        ]
    }
];

pub fn find(id: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|section| section.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_by_id() {
        assert_eq!(find("statements").map(|section| section.title), Some("Statements and blocks"));
        assert!(find("preprocessing-directives").is_none());
    }

    #[test]
    fn section_order() {
        let ids: Vec<&str> = SECTIONS.iter().map(|section| section.id).collect();
        assert_eq!(ids, vec![
            "lexical-elements",
            "expressions",
            "declarations",
            "statements",
            "external-definitions"
        ]);
    }
}
