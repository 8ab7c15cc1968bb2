mod builtin;
pub mod engine;
pub mod index;
pub mod taxonomy;
pub mod tokenize;
pub mod types;
pub mod vector;
