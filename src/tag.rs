//! A very small representation of a HTML element: an opening tag, a closing
//! tag and whatever sits between them. Nothing is escaped or validated, the
//! strings go out exactly as they came in.

use std::fmt;
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Content {
    #[default]
    Empty,
    Text(String),
    /// Another element, rendered recursively.
    Tag(Box<Tag>),
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_owned())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<Tag> for Content {
    fn from(tag: Tag) -> Self {
        Content::Tag(Box::new(tag))
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Empty => Ok(()),
            Content::Text(text) => f.write_str(text),
            Content::Tag(tag) => write!(f, "{}", tag),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    start: String,
    close: String,
    content: Content,
}

impl Tag {
    pub fn new(name: &str, content: impl Into<Content>) -> Self {
        Self {
            start: format!("<{}>", name),
            close: format!("</{}>", name),
            content: content.into(),
        }
    }

    /// `<!DOCTYPE html>`, which has neither content nor a closing tag.
    pub fn doctype() -> Self {
        Self {
            close: String::new(),
            ..Self::new("!DOCTYPE html", Content::Empty)
        }
    }

    /// `<head>`, holding a `<title>` when a non-empty title is given.
    ///
    /// `None` and `Some("")` both give an empty `<head></head>`.
    pub fn head(title: Option<&str>) -> Self {
        let content = match title {
            Some(title) if !title.is_empty() => Content::from(Tag::new("title", title)),
            _ => Content::Empty,
        };

        Self::new("head", content)
    }

    #[cfg(test)]
    pub fn start(&self) -> &str {
        &self.start
    }

    #[cfg(test)]
    pub fn close(&self) -> &str {
        &self.close
    }

    #[cfg(test)]
    pub fn content(&self) -> &Content {
        &self.content
    }

    pub(crate) fn content_mut(&mut self) -> &mut Content {
        &mut self.content
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Writes the rendered tag as one line of output.
    pub fn write_to(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}{}{}", self.start, self.content, self.close)
    }
}
