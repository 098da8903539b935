use crate::grammar::*;

pub fn register(registry: &mut Registry) {
    registry.register("statement", || choice(vec![
        nt("labeled-statement"),
        nt("unlabeled-statement")
    ]));
    registry.register("unlabeled-statement", || choice(vec![
        nt("expression-statement"),
        seq(vec![
            opt(nt("attribute-specifier-sequence")),
            choice(vec![nt("primary-block"), nt("jump-statement")])
        ])
    ]));
    registry.register("primary-block", || choice(vec![
        nt("compound-statement"),
        nt("selection-statement"),
        nt("iteration-statement")
    ]));
    registry.register("secondary-block", || nt("statement"));
    registry.register("label", || choice(vec![
        seq(vec![opt(nt("attribute-specifier-sequence")), nt("identifier"), t(":")]),
        seq(vec![opt(nt("attribute-specifier-sequence")), t("case"), nt("constant-expression"), t(":")]),
        seq(vec![opt(nt("attribute-specifier-sequence")), t("default"), t(":")])
    ]));
    registry.register("labeled-statement", || seq(vec![nt("label"), nt("statement")]));
    registry.register("compound-statement", || seq(vec![t("{"), opt(nt("block-item-list")), t("}")]));
    registry.register("block-item-list", || one_or_more(nt("block-item")));
    registry.register("block-item", || choice(vec![
        nt("declaration"),
        nt("unlabeled-statement"),
        nt("label")
    ]));
    registry.register("expression-statement", || choice(vec![
        seq(vec![opt(nt("expression")), t(";")]),
        seq(vec![nt("attribute-specifier-sequence"), nt("expression"), t(";")])
    ]));
    registry.register("selection-statement", || choice(vec![
        seq(vec![
            t("if"),
            t("("),
            nt("expression"),
            t(")"),
            nt("secondary-block"),
            opt(seq(vec![t("else"), nt("secondary-block")]))
        ]),
        seq(vec![t("switch"), t("("), nt("expression"), t(")"), nt("secondary-block")])
    ]));
    registry.register("iteration-statement", || choice(vec![
        seq(vec![t("while"), t("("), nt("expression"), t(")"), nt("secondary-block")]),
        seq(vec![
            t("do"),
            nt("secondary-block"),
            t("while"),
            t("("),
            nt("expression"),
            t(")"),
            t(";")
        ]),
        stack(vec![
            seq(vec![
                t("for"),
                t("("),
                choice(vec![
                    seq(vec![opt(nt("expression")), t(";")]),
                    nt("declaration")
                ])
            ]),
            seq(vec![
                opt(nt("expression")),
                t(";"),
                opt(nt("expression")),
                t(")"),
                nt("secondary-block")
            ])
        ])
    ]));
    registry.register("jump-statement", || choice(vec![
        seq(vec![t("goto"), nt("identifier"), t(";")]),
        seq(vec![t("continue"), t(";")]),
        seq(vec![t("break"), t(";")]),
        seq(vec![t("return"), opt(nt("expression")), t(";")])
    ]));
}
