use std::io::{self, Write};

use crate::tag::{Content, Tag};

/// The `<body>` element. Children are kept in the order they were appended and
/// only folded into the body's own content when it is written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    tag: Tag,
    children: Vec<Tag>,
}

impl Default for Body {
    fn default() -> Self {
        Self::new()
    }
}

impl Body {
    pub fn new() -> Self {
        Self {
            tag: Tag::new("body", String::new()),
            children: Vec::new(),
        }
    }

    pub fn append(&mut self, name: &str, content: impl Into<Content>) {
        self.children.push(Tag::new(name, content));
    }

    pub fn children(&self) -> &[Tag] {
        &self.children
    }

    #[cfg(test)]
    pub fn content(&self) -> &Content {
        self.tag.content()
    }

    /// Folds the children into the content buffer and writes the body.
    ///
    /// The buffer is never reset, so writing the same body twice emits the
    /// children twice the second time around.
    pub fn write_to(&mut self, out: &mut dyn Write) -> io::Result<()> {
        let rendered: String = self.children.iter().map(Tag::render).collect();

        match self.tag.content_mut() {
            Content::Text(buffer) => buffer.push_str(&rendered),
            other => *other = Content::Text(rendered),
        }

        self.tag.write_to(out)
    }
}
