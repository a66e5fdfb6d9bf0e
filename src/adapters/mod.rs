//! Source format adapters.

pub mod docx;
