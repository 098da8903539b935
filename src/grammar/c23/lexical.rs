// Tokens the phrase-structure rules refer to. Character-level detail is left
// as comments.

use crate::grammar::*;

pub fn register(registry: &mut Registry) {
    registry.register("identifier", || seq(vec![
        choice(vec![t("_"), comment("letter")]),
        zero_or_more(choice(vec![t("_"), comment("letter"), comment("digit")]))
    ]));
    registry.register("constant", || choice(vec![
        comment("integer-constant"),
        comment("floating-constant"),
        nt("enumeration-constant"),
        comment("character-constant"),
        nt("predefined-constant")
    ]));
    registry.register("enumeration-constant", || nt("identifier"));
    registry.register("predefined-constant", || tokens(&["false", "true", "nullptr"]));
    registry.register("string-literal", || seq(vec![
        opt(nt("encoding-prefix")),
        t("\""),
        opt(comment("s-char-sequence")),
        t("\"")
    ]));
    registry.register("encoding-prefix", || tokens(&["u8", "u", "U", "L"]));
}
