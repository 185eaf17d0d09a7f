//! # Early-Boot Driver Layer
//!
//! Apenas o necessário para diagnóstico antes de qualquer subsistema de I/O.
//!
//! | Driver   | Arquivo      | Papel                              |
//! |----------|--------------|------------------------------------|
//! | Serial   | `serial.rs`  | Logs de diagnóstico (COM1)         |
//! | VGA      | `vga/`       | Mensagem de boot no modo texto     |

pub mod serial; // UART 16550 - Logs
pub mod vga; // Modo texto 80x25

#[cfg(feature = "self_test")]
pub mod test;
