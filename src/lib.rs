// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod fuzzy;
pub mod loader;
pub mod persistence;
pub use crate::core::engine::SemanticEngine;
