pub mod parameters;
pub mod schema_normalizer;
pub mod slug;

pub use parameters::{ClassifiedParameters, classify_parameters};
pub use schema_normalizer::normalize_schemas;
pub use slug::slugify;
