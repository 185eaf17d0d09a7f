//! Spark Early-Boot Console.
//!
//! Console de texto mínimo para o early-boot do Redstone OS: escreve a
//! mensagem de diagnóstico direto no buffer VGA antes de existir qualquer
//! subsistema de I/O (serial com IRQ, framebuffer, console de kernel).

#![cfg_attr(not(test), no_std)]

// --- Módulos de Baixo Nível (Hardware) ---
pub mod drivers; // Serial (logs) + VGA (texto)

// --- Módulos Centrais ---
pub mod core; // Entry point, Config, Logging, Panic
pub mod klib; // Framework de testes

pub use crate::drivers::vga::{Console, MmioBuffer, TextBuffer};
