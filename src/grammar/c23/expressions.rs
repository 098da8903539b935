use crate::grammar::*;

pub fn register(registry: &mut Registry) {
    registry.register("primary-expression", || choice(vec![
        nt("identifier"),
        nt("constant"),
        nt("string-literal"),
        seq(vec![t("("), nt("expression"), t(")")]),
        nt("generic-selection")
    ]));
    registry.register("generic-selection", || seq(vec![
        t("_Generic"),
        t("("),
        nt("assignment-expression"),
        t(","),
        nt("generic-assoc-list"),
        t(")")
    ]));
    registry.register("generic-assoc-list", || list(nt("generic-association"), t(",")));
    registry.register("generic-association", || seq(vec![
        choice(vec![nt("type-name"), t("default")]),
        t(":"),
        nt("assignment-expression")
    ]));

    // Left-recursive postfix forms become a loop over suffixes
    registry.register("postfix-expression", || seq(vec![
        choice(vec![nt("primary-expression"), nt("compound-literal")]),
        zero_or_more(choice(vec![
            seq(vec![t("["), nt("expression"), t("]")]),
            seq(vec![t("("), opt(nt("argument-expression-list")), t(")")]),
            seq(vec![tokens(&[".", "->"]), nt("identifier")]),
            t("++"),
            t("--")
        ]))
    ]));
    registry.register("argument-expression-list", || list(nt("assignment-expression"), t(",")));
    registry.register("compound-literal", || seq(vec![
        t("("),
        opt(nt("storage-class-specifiers")),
        nt("type-name"),
        t(")"),
        nt("braced-initializer")
    ]));
    registry.register("storage-class-specifiers", || one_or_more(nt("storage-class-specifier")));

    registry.register("unary-expression", || choice(vec![
        nt("postfix-expression"),
        seq(vec![tokens(&["++", "--"]), nt("unary-expression")]),
        seq(vec![nt("unary-operator"), nt("cast-expression")]),
        seq(vec![t("sizeof"), nt("unary-expression")]),
        seq(vec![tokens(&["sizeof", "alignof"]), t("("), nt("type-name"), t(")")])
    ]));
    registry.register("unary-operator", || tokens(&["&", "*", "+", "-", "~", "!"]));
    registry.register("cast-expression", || seq(vec![
        zero_or_more(seq(vec![t("("), nt("type-name"), t(")")])),
        nt("unary-expression")
    ]));

    registry.register("multiplicative-expression", || chain("cast-expression", &["*", "/", "%"]));
    registry.register("additive-expression", || chain("multiplicative-expression", &["+", "-"]));
    registry.register("shift-expression", || chain("additive-expression", &["<<", ">>"]));
    registry.register("relational-expression", || chain("shift-expression", &["<", ">", "<=", ">="]));
    registry.register("equality-expression", || chain("relational-expression", &["==", "!="]));
    registry.register("and-expression", || chain("equality-expression", &["&"]));
    registry.register("exclusive-or-expression", || chain("and-expression", &["^"]));
    registry.register("inclusive-or-expression", || chain("exclusive-or-expression", &["|"]));
    registry.register("logical-and-expression", || chain("inclusive-or-expression", &["&&"]));
    registry.register("logical-or-expression", || chain("logical-and-expression", &["||"]));

    registry.register("conditional-expression", || seq(vec![
        nt("logical-or-expression"),
        opt(seq(vec![t("?"), nt("expression"), t(":"), nt("conditional-expression")]))
    ]));
    registry.register("assignment-expression", || choice(vec![
        nt("conditional-expression"),
        seq(vec![nt("unary-expression"), nt("assignment-operator"), nt("assignment-expression")])
    ]));
    registry.register("assignment-operator", || tokens(&[
        "=", "*=", "/=", "%=", "+=", "-=", "<<=", ">>=", "&=", "^=", "|="
    ]));
    registry.register("expression", || chain("assignment-expression", &[","]));
    registry.register("constant-expression", || nt("conditional-expression"));
}
