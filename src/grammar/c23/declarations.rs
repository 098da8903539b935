use crate::grammar::*;

pub fn register(registry: &mut Registry) {
    registry.register("declaration", || choice(vec![
        seq(vec![
            opt(nt("attribute-specifier-sequence")),
            nt("declaration-specifiers"),
            opt(nt("init-declarator-list")),
            t(";")
        ]),
        nt("static_assert-declaration"),
        nt("attribute-declaration")
    ]));
    registry.register("declaration-specifiers", || seq(vec![
        one_or_more(nt("declaration-specifier")),
        opt(nt("attribute-specifier-sequence"))
    ]));
    registry.register("declaration-specifier", || choice(vec![
        nt("storage-class-specifier"),
        nt("type-specifier-qualifier"),
        nt("function-specifier")
    ]));
    registry.register("init-declarator-list", || list(nt("init-declarator"), t(",")));
    registry.register("init-declarator", || seq(vec![
        nt("declarator"),
        opt(seq(vec![t("="), nt("initializer")]))
    ]));
    registry.register("attribute-declaration", || seq(vec![nt("attribute-specifier-sequence"), t(";")]));
    registry.register("storage-class-specifier", || tokens(&[
        "auto", "constexpr", "extern", "register", "static", "thread_local", "typedef"
    ]));

    registry.register("type-specifier", || choice(vec![
        tokens(&["void", "char", "short", "int", "long", "float", "double", "signed", "unsigned"]),
        seq(vec![t("_BitInt"), t("("), nt("constant-expression"), t(")")]),
        tokens(&["bool", "_Complex", "_Decimal32", "_Decimal64", "_Decimal128"]),
        nt("atomic-type-specifier"),
        nt("struct-or-union-specifier"),
        nt("enum-specifier"),
        nt("typedef-name"),
        nt("typeof-specifier")
    ]));
    registry.register("struct-or-union-specifier", || seq(vec![
        tokens(&["struct", "union"]),
        opt(nt("attribute-specifier-sequence")),
        choice(vec![
            seq(vec![opt(nt("identifier")), t("{"), nt("member-declaration-list"), t("}")]),
            nt("identifier")
        ])
    ]));
    registry.register("member-declaration-list", || one_or_more(nt("member-declaration")));
    registry.register("member-declaration", || choice(vec![
        seq(vec![
            opt(nt("attribute-specifier-sequence")),
            nt("specifier-qualifier-list"),
            opt(nt("member-declarator-list")),
            t(";")
        ]),
        nt("static_assert-declaration")
    ]));
    registry.register("specifier-qualifier-list", || seq(vec![
        one_or_more(nt("type-specifier-qualifier")),
        opt(nt("attribute-specifier-sequence"))
    ]));
    registry.register("type-specifier-qualifier", || choice(vec![
        nt("type-specifier"),
        nt("type-qualifier"),
        nt("alignment-specifier")
    ]));
    registry.register("member-declarator-list", || list(nt("member-declarator"), t(",")));
    registry.register("member-declarator", || choice(vec![
        nt("declarator"),
        seq(vec![opt(nt("declarator")), t(":"), nt("constant-expression")])
    ]));

    registry.register("enum-specifier", || choice(vec![
        stack(vec![
            seq(vec![
                t("enum"),
                opt(nt("attribute-specifier-sequence")),
                opt(nt("identifier")),
                opt(nt("enum-type-specifier"))
            ]),
            seq(vec![t("{"), nt("enumerator-list"), opt(t(",")), t("}")])
        ]),
        seq(vec![t("enum"), nt("identifier"), opt(nt("enum-type-specifier"))])
    ]));
    registry.register("enumerator-list", || list(nt("enumerator"), t(",")));
    registry.register("enumerator", || seq(vec![
        nt("enumeration-constant"),
        opt(nt("attribute-specifier-sequence")),
        opt(seq(vec![t("="), nt("constant-expression")]))
    ]));
    registry.register("enum-type-specifier", || seq(vec![t(":"), nt("specifier-qualifier-list")]));
    registry.register("atomic-type-specifier", || seq(vec![t("_Atomic"), t("("), nt("type-name"), t(")")]));
    registry.register("typeof-specifier", || seq(vec![
        tokens(&["typeof", "typeof_unqual"]),
        t("("),
        choice(vec![nt("expression"), nt("type-name")]),
        t(")")
    ]));
    registry.register("type-qualifier", || tokens(&["const", "restrict", "volatile", "_Atomic"]));
    registry.register("function-specifier", || tokens(&["inline", "_Noreturn"]));
    registry.register("alignment-specifier", || seq(vec![
        t("alignas"),
        t("("),
        choice(vec![nt("type-name"), nt("constant-expression")]),
        t(")")
    ]));

    registry.register("declarator", || seq(vec![opt(nt("pointer")), nt("direct-declarator")]));
    // Array and function suffixes loop instead of recursing on the left
    registry.register("direct-declarator", || seq(vec![
        choice(vec![
            seq(vec![nt("identifier"), opt(nt("attribute-specifier-sequence"))]),
            seq(vec![t("("), nt("declarator"), t(")")])
        ]),
        zero_or_more(seq(vec![
            choice(vec![nt("array-declarator"), nt("function-declarator")]),
            opt(nt("attribute-specifier-sequence"))
        ]))
    ]));
    registry.register("array-declarator", || seq(vec![
        t("["),
        choice(vec![
            seq(vec![opt(nt("type-qualifier-list")), opt(nt("assignment-expression"))]),
            seq(vec![t("static"), opt(nt("type-qualifier-list")), nt("assignment-expression")]),
            seq(vec![nt("type-qualifier-list"), t("static"), nt("assignment-expression")]),
            seq(vec![opt(nt("type-qualifier-list")), t("*")])
        ]),
        t("]")
    ]));
    registry.register("function-declarator", || seq(vec![t("("), opt(nt("parameter-type-list")), t(")")]));
    registry.register("pointer", || one_or_more(seq(vec![
        t("*"),
        opt(nt("attribute-specifier-sequence")),
        opt(nt("type-qualifier-list"))
    ])));
    registry.register("type-qualifier-list", || one_or_more(nt("type-qualifier")));
    registry.register("parameter-type-list", || choice(vec![
        seq(vec![nt("parameter-list"), opt(seq(vec![t(","), t("...")]))]),
        t("...")
    ]));
    registry.register("parameter-list", || list(nt("parameter-declaration"), t(",")));
    registry.register("parameter-declaration", || seq(vec![
        opt(nt("attribute-specifier-sequence")),
        nt("declaration-specifiers"),
        choice(vec![nt("declarator"), opt(nt("abstract-declarator"))])
    ]));

    registry.register("type-name", || seq(vec![
        nt("specifier-qualifier-list"),
        opt(nt("abstract-declarator"))
    ]));
    registry.register("abstract-declarator", || choice(vec![
        nt("pointer"),
        seq(vec![opt(nt("pointer")), nt("direct-abstract-declarator")])
    ]));
    registry.register("direct-abstract-declarator", || choice(vec![
        seq(vec![
            t("("),
            nt("abstract-declarator"),
            t(")"),
            zero_or_more(choice(vec![nt("array-declarator"), nt("function-declarator")]))
        ]),
        one_or_more(choice(vec![nt("array-declarator"), nt("function-declarator")]))
    ]));
    registry.register("typedef-name", || nt("identifier"));

    registry.register("braced-initializer", || seq(vec![
        t("{"),
        opt(seq(vec![nt("initializer-list"), opt(t(","))])),
        t("}")
    ]));
    registry.register("initializer", || choice(vec![
        nt("assignment-expression"),
        nt("braced-initializer")
    ]));
    registry.register("initializer-list", || list(
        seq(vec![opt(nt("designation")), nt("initializer")]),
        t(",")
    ));
    registry.register("designation", || seq(vec![nt("designator-list"), t("=")]));
    registry.register("designator-list", || one_or_more(nt("designator")));
    registry.register("designator", || choice(vec![
        seq(vec![t("["), nt("constant-expression"), t("]")]),
        seq(vec![t("."), nt("identifier")])
    ]));
    registry.register("static_assert-declaration", || seq(vec![
        t("static_assert"),
        t("("),
        nt("constant-expression"),
        opt(seq(vec![t(","), nt("string-literal")])),
        t(")"),
        t(";")
    ]));

    registry.register("attribute-specifier-sequence", || one_or_more(nt("attribute-specifier")));
    registry.register("attribute-specifier", || seq(vec![
        t("["),
        t("["),
        nt("attribute-list"),
        t("]"),
        t("]")
    ]));
    registry.register("attribute-list", || list(opt(nt("attribute")), t(",")));
    registry.register("attribute", || seq(vec![
        nt("attribute-token"),
        opt(nt("attribute-argument-clause"))
    ]));
    registry.register("attribute-token", || seq(vec![
        nt("identifier"),
        opt(seq(vec![t("::"), nt("identifier")]))
    ]));
    registry.register("attribute-argument-clause", || seq(vec![
        t("("),
        opt(nt("balanced-token-sequence")),
        t(")")
    ]));
    registry.register("balanced-token-sequence", || one_or_more(nt("balanced-token")));
    registry.register("balanced-token", || choice(vec![
        seq(vec![t("("), opt(nt("balanced-token-sequence")), t(")")]),
        seq(vec![t("["), opt(nt("balanced-token-sequence")), t("]")]),
        seq(vec![t("{"), opt(nt("balanced-token-sequence")), t("}")]),
        comment("any token other than a parenthesis, bracket or brace")
    ]));
}
