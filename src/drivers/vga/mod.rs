//! # VGA Text Console
//!
//! Console mínimo para o modo texto legado (0xB8000).
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          core::entry (boot)             │
//! └────────────────────┬────────────────────┘
//!                      │ print_string
//! ┌────────────────────▼────────────────────┐
//! │        Console (cursor + write_byte)    │
//! └────────────────────┬────────────────────┘
//!                      │ TextBuffer::write_byte
//! ┌──────────────┬─────▼──────┬─────────────┐
//! │  MmioBuffer  │  [u8; N]   │  &mut [u8]  │
//! └──────────────┴────────────┴─────────────┘
//! ```

pub mod attribute;
pub mod buffer;
pub mod error;
pub mod global;
pub mod writer;

pub use attribute::{Attribute, Color};
pub use buffer::{Cell, MmioBuffer, TextBuffer};
pub use error::DisplayError;
pub use global::{install, with_console, CONSOLE};
pub use writer::Console;
