//! tensorwalk: a step-by-step terminal walkthrough from matrices to tensors.
//!
//! The library holds everything except the event loop so integration tests
//! can drive the app and render it against a test backend.

pub mod app;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod input;
pub mod logging;
pub mod nav;
pub mod terminal;
pub mod ui;
