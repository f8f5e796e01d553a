#![no_std] // Shared with the wasm platform and the CLI tools

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod config;
pub mod grammar;
pub mod ids;
pub mod model;
pub mod tile;

pub use config::GameConfig;
pub use grammar::{GrammarRole, REQUIRED_PATTERN};
pub use ids::TileId;
pub use model::{Lexicon, WordEntry};
pub use tile::{Point, TileFlags};
