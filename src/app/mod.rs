//! Application layer: resolution, reporting and the CLI adapter.

pub mod cli;
pub mod discovery;
pub mod report;

pub use discovery::{Resolution, resolve};
pub use report::check;
