pub mod chip8;
pub mod definitions;
pub mod devices;
pub mod opcode;
pub mod quirks;
pub mod resources;
pub mod timer;
mod error;

// reexporting for convinience
pub use error::*;
