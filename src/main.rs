mod body;
mod document;
mod error;
mod generator;
mod tag;

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use argh::FromArgs;
use body::Body;
use document::{AggregatedDocument, ComposedDocument, Document};
use generator::{File, Generator, Stdout};
use tag::Tag;
use tracing_subscriber::EnvFilter;

#[derive(FromArgs)]
/// Generate a small HTML page, by composition or by aggregation.
struct Args {
    /// path of the generated page
    #[argh(option, short = 'o', default = r#"PathBuf::from("index.html")"#)]
    output: PathBuf,

    /// title of the generated page
    #[argh(option, short = 't', default = r#"String::from("Basic HTML Generator")"#)]
    title: String,

    /// how the page holds its parts: aggregation or composition
    #[argh(option, short = 's', default = r#"String::from("aggregation")"#)]
    style: String,

    /// where the page goes: file or stdout
    #[argh(option, short = 'g', default = r#"String::from("file")"#)]
    generator: String,
}

const COMPOSITION: &str = "composition";
const AGGREGATION: &str = "aggregation";

fn demo_tags(style: &str) -> [(&'static str, String); 3] {
    [
        ("h1", String::from("Main Header")),
        ("h2", String::from("Sub Header")),
        (
            "p",
            format!("The purpose is to demonstrate {} in Rust...", style),
        ),
    ]
}

fn composed(title: &str) -> ComposedDocument {
    let mut page = ComposedDocument::new(Some(title));
    for (name, content) in demo_tags(COMPOSITION) {
        page.add_tag(name, content.into());
    }
    page
}

fn aggregated(title: &str) -> AggregatedDocument {
    let doc_type = Rc::new(Tag::doctype());
    let page_head = Rc::new(Tag::head(Some(title)));

    let page_body = Rc::new(RefCell::new(Body::new()));
    for (name, content) in demo_tags(AGGREGATION) {
        page_body.borrow_mut().append(name, content);
    }

    AggregatedDocument::new(doc_type, page_head, page_body)
}

fn page(style: &str, title: &str) -> Result<Box<dyn Document>, String> {
    if style == COMPOSITION {
        Ok(Box::new(composed(title)))
    } else if style == AGGREGATION {
        Ok(Box::new(aggregated(title)))
    } else {
        Err(String::from("an unknown style is specified"))
    }
}

fn generator(name: &str, output: &Path) -> Result<Box<dyn Generator>, String> {
    let file = File::new(output);
    if name == file.name() {
        Ok(Box::new(file))
    } else if name == Stdout.name() {
        Ok(Box::new(Stdout))
    } else {
        Err(String::from("an unknown generator is specified"))
    }
}

fn main() -> Result<(), String> {
    let args = argh::from_env::<Args>();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut page = page(&args.style, &args.title)?;
    let generator = generator(&args.generator, &args.output)?;

    tracing::debug!(style = %args.style, generator = generator.name(), "generating page");
    generator
        .generate(&mut *page)
        .map_err(|e| e.to_string())
}
