use crate::dom::{escape, Element};
use crate::grammar::c23::sections::Section;

use super::SECTION_ATTR;

/// Root element with a titled, empty container per section.
pub fn skeleton(sections: &[Section]) -> Element {
    sections.iter().fold(Element::new("main"), |root, section| {
        root.with_child(Element::new("section")
            .with_attr("id", section.id)
            .with_child(Element::new("h2").with_text(section.title))
            .with_child(Element::new("div").with_attr(SECTION_ATTR, section.id)))
    })
}

pub fn document(title: &str, css: &str, root: &Element) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{}\n</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        css,
        root
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skeleton_has_a_container_per_section() {
        let sections = [
            Section { id: "letters", title: "Letters", rules: &["alpha"] },
            Section { id: "numbers", title: "Numbers", rules: &[] },
        ];
        let root = skeleton(&sections);

        assert_eq!(
            root.to_string(),
            "<main>\
             <section id=\"letters\"><h2>Letters</h2><div data-section=\"letters\"></div></section>\
             <section id=\"numbers\"><h2>Numbers</h2><div data-section=\"numbers\"></div></section>\
             </main>"
        );
    }

    #[test]
    fn document_escapes_title() {
        let page = document("C <23>", "svg {}", &Element::new("main"));

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>C &lt;23&gt;</title>"));
        assert!(page.contains("<main></main>"));
    }
}
