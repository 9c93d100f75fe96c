use std::fs;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use tracing::info;

use crate::document::Document;
use crate::error::GenerateError;

use super::Generator;

/// Writes the page to a file, replacing whatever was there before.
pub struct File {
    path: PathBuf,
}

impl File {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[cfg(test)]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Generator for File {
    fn name(&self) -> &'static str {
        "file"
    }

    fn generate(&self, document: &mut dyn Document) -> Result<(), GenerateError> {
        let file = fs::File::create(&self.path).map_err(|source| GenerateError::Open {
            path: self.path.clone(),
            source,
        })?;

        // The handle is closed when the writer drops, error or not.
        let mut out = BufWriter::new(file);
        document
            .write_to(&mut out)
            .and_then(|()| out.flush())
            .map_err(|source| GenerateError::Write {
                target: self.path.display().to_string(),
                source,
            })?;

        info!(path = %self.path.display(), "page generated");
        Ok(())
    }
}
