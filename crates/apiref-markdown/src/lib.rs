pub mod emitters;
pub mod error;
pub mod generator;
pub mod templates;

pub use error::MarkdownError;
pub use generator::MarkdownGenerator;
