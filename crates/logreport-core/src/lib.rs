//! Core types for the logreport emitter.
//!
//! This crate provides the fundamental types shared by all logreport
//! components:
//! - Scalar cell values (Scalar) and data rows
//! - The series-keyed data mapping (DataSet)
//! - Input format tags (InputFormat)
//! - The emission error taxonomy (EmitError)

mod dataset;
mod error;
mod format;
mod scalar;

pub use dataset::{DataSet, Row};
pub use error::EmitError;
pub use format::InputFormat;
pub use scalar::Scalar;
