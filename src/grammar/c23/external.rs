use crate::grammar::*;

pub fn register(registry: &mut Registry) {
    registry.register("translation-unit", || one_or_more(nt("external-declaration")));
    registry.register("external-declaration", || choice(vec![
        nt("function-definition"),
        nt("declaration")
    ]));
    registry.register("function-definition", || seq(vec![
        opt(nt("attribute-specifier-sequence")),
        nt("declaration-specifiers"),
        nt("declarator"),
        nt("function-body")
    ]));
    registry.register("function-body", || nt("compound-statement"));
}
