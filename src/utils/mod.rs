// Utility functions

pub mod logger;
pub mod text;

pub use text::*;
