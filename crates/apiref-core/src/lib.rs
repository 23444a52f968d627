pub mod config;
pub mod error;
pub mod output;
pub mod parse;
pub mod plan;
pub mod resolve;
pub mod transform;

pub use parse::Document;

/// A generated file with path (relative to the output root) and content.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for generators that turn a loaded API document into output pages.
pub trait DocGenerator {
    type Config;
    type Error: std::error::Error;
    fn generate(
        &self,
        document: &Document,
        config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, Self::Error>;
}
