//! Core data types for typesift.

mod annotation;

pub use annotation::Annotation;
