//! Raw label input and boundary validation.

mod source;

pub use source::{LabelInput, LabelTable, Scalar};
