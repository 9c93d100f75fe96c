//! A page is a doctype, a head and a body wrapped in `<html>`. The two
//! submodules build the same page with different ownership of those parts:
//! [`composition`] creates and owns them, [`aggregation`] is handed them.

use std::io::{self, Write};

use tracing::debug;

use crate::body::Body;
use crate::tag::{Content, Tag};

pub mod aggregation;
pub mod composition;

pub use aggregation::AggregatedDocument;
pub use composition::ComposedDocument;

pub trait Document {
    /// Appends a tag to the end of the body.
    fn add_tag(&mut self, name: &str, content: Content);

    fn write_to(&mut self, out: &mut dyn Write) -> io::Result<()>;
}

pub(crate) fn write_page(
    out: &mut dyn Write,
    doc_type: &Tag,
    head: &Tag,
    body: &mut Body,
) -> io::Result<()> {
    doc_type.write_to(out)?;
    writeln!(out, "<html>")?;
    head.write_to(out)?;
    debug!(children = body.children().len(), "writing body");
    body.write_to(out)?;
    writeln!(out, "\n</html>")
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use html5gum::{Token, Tokenizer};

    use super::{AggregatedDocument, ComposedDocument, Document};
    use crate::body::Body;
    use crate::tag::Tag;

    pub(crate) const EXPECTED: &str = "\n<!DOCTYPE html>\n<html>\n\n<head>\n<title>T</title></head>\n\n<body>\n<h1>A</h1>\n<p>B</p></body>\n\n</html>\n";

    pub(crate) fn render(document: &mut dyn Document) -> String {
        let mut out = Vec::new();
        document.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn tag_sequence(html: &str) -> Vec<String> {
        Tokenizer::new(html)
            .infallible()
            .filter_map(|token| match token {
                Token::StartTag(tag) => Some(String::from_utf8_lossy(&tag.name).into_owned()),
                Token::EndTag(tag) => Some(format!("/{}", String::from_utf8_lossy(&tag.name))),
                Token::Doctype(_) => Some(String::from("!doctype")),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn both_styles_render_identically() {
        let mut composed = ComposedDocument::new(Some("T"));
        composed.add_tag("h1", "A".into());
        composed.add_tag("p", "B".into());

        let mut aggregated = AggregatedDocument::new(
            Rc::new(Tag::doctype()),
            Rc::new(Tag::head(Some("T"))),
            Rc::new(RefCell::new(Body::new())),
        );
        aggregated.add_tag("h1", "A".into());
        aggregated.add_tag("p", "B".into());

        let composed = render(&mut composed);
        assert_eq!(composed, EXPECTED);
        assert_eq!(composed, render(&mut aggregated));
    }

    #[test]
    fn page_tokenizes_in_section_order() {
        let mut composed = ComposedDocument::new(Some("T"));
        composed.add_tag("h1", "A".into());
        composed.add_tag("p", "B".into());

        assert_eq!(
            tag_sequence(&render(&mut composed)),
            [
                "!doctype", "html", "head", "title", "/title", "/head", "body", "h1", "/h1",
                "p", "/p", "/body", "/html",
            ]
        );
    }
}
