use crate::document::Document;
use crate::error::GenerateError;

mod file;
mod stdout;

pub use file::File;
pub use stdout::Stdout;

pub trait Generator {
    fn name(&self) -> &'static str;

    fn generate(&self, document: &mut dyn Document) -> Result<(), GenerateError>;
}
