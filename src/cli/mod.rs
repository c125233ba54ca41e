//! CLI layer: clap argument definitions, CLI-local errors, and the runner
//! that wires parsed arguments into the library API.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
