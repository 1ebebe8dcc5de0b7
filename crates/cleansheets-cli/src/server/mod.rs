//! Web server for the cell-analysis endpoint.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;
