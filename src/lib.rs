//! Prompt templating, generation and marker-based response parsing for the
//! academic and social content generators.

pub mod cli;
pub mod config;
pub mod errors;
pub mod generator;
pub mod log;
pub mod parse;
pub mod prompt;
pub mod provider;
pub mod ux;
pub mod wire;

pub use errors::GenError;
pub use generator::Generator;
pub use wire::{ContentRequest, ContentResult};
