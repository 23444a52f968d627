pub mod data_types;
pub mod manifest;
pub mod operation;
pub mod toc;
