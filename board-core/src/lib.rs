//! Status Board Core - Platform-agnostic Driver and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert den Pixel-Treiber, die Farbtabelle und den Strip-Trait.

#![no_std]

pub mod board;
pub mod logic;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use board::StatusBoard;
pub use logic::random_color;
pub use traits::{BoardError, LedError, PixelWriter};
pub use types::{BoardCommand, NamedColor};
