//! Dynamically-typed values for gunner documents

pub mod value;

pub use value::Value;
