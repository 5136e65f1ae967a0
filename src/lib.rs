// Reusable library API — visible to both CLI and WASM builds
pub mod cell;
pub mod direction;
pub mod errors;
pub mod export;
pub mod generator;
pub mod grid;
pub mod log;
pub mod text;
pub mod word_list;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use cell::Cell;
pub use direction::Direction;
pub use errors::GenerateError;
pub use export::PuzzleExport;
pub use generator::{generate, generate_with_rng, GenerateOptions, GenerateResult};
pub use grid::{Grid, Placement, PlacedWord};
