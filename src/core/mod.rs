//! Core Module
//!
//! Entry point, configuração, logging e tratamento de panic.

pub mod config;
pub mod entry;
pub mod logging;
pub mod panic;
