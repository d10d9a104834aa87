// Reusable library API, shared by the CLI and WASM builds
mod alphabet;
pub mod board;
pub mod config;
pub mod errors;
pub mod log;
pub mod prefix_index;
pub mod report;
pub mod solver;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
