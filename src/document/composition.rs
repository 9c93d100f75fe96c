use std::io::{self, Write};

use crate::body::Body;
use crate::tag::{Content, Tag};

use super::Document;

/// A page that builds its own doctype, head and body. The parts live and die
/// with the document.
#[derive(Debug, Clone)]
pub struct ComposedDocument {
    doc_type: Tag,
    head: Tag,
    body: Body,
}

impl ComposedDocument {
    pub fn new(title: Option<&str>) -> Self {
        Self {
            doc_type: Tag::doctype(),
            head: Tag::head(title),
            body: Body::new(),
        }
    }

    #[cfg(test)]
    pub fn body(&self) -> &Body {
        &self.body
    }
}

impl Document for ComposedDocument {
    fn add_tag(&mut self, name: &str, content: Content) {
        self.body.append(name, content);
    }

    fn write_to(&mut self, out: &mut dyn Write) -> io::Result<()> {
        super::write_page(out, &self.doc_type, &self.head, &mut self.body)
    }
}
