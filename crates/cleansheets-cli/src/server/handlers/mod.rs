//! API request handlers.

mod analyze;

pub use analyze::*;
