use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use crate::body::Body;
use crate::tag::{Content, Tag};

use super::Document;

/// A page assembled from parts the caller built beforehand. The document only
/// holds handles, so the caller may keep its own and the parts outlive the
/// document.
#[derive(Debug, Clone)]
pub struct AggregatedDocument {
    doc_type: Rc<Tag>,
    head: Rc<Tag>,
    body: Rc<RefCell<Body>>,
}

impl AggregatedDocument {
    pub fn new(doc_type: Rc<Tag>, head: Rc<Tag>, body: Rc<RefCell<Body>>) -> Self {
        Self {
            doc_type,
            head,
            body,
        }
    }
}

impl Document for AggregatedDocument {
    fn add_tag(&mut self, name: &str, content: Content) {
        self.body.borrow_mut().append(name, content);
    }

    fn write_to(&mut self, out: &mut dyn Write) -> io::Result<()> {
        super::write_page(out, &self.doc_type, &self.head, &mut self.body.borrow_mut())
    }
}
