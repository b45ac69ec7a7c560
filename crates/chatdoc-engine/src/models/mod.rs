pub mod document;

pub use document::{Document, StyledBlock};
