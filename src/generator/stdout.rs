use std::io::{self, Write};

use crate::document::Document;
use crate::error::GenerateError;

use super::Generator;

/// Prints the page instead of writing a file.
pub struct Stdout;

impl Generator for Stdout {
    fn name(&self) -> &'static str {
        "stdout"
    }

    fn generate(&self, document: &mut dyn Document) -> Result<(), GenerateError> {
        let mut out = io::stdout().lock();
        document
            .write_to(&mut out)
            .and_then(|()| out.flush())
            .map_err(|source| GenerateError::Write {
                target: String::from("stdout"),
                source,
            })
    }
}
