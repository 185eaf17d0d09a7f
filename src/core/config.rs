//! # Configuração do Console de Early-Boot
//!
//! Define endereços de hardware e dimensões do modo texto legado.

// =============================================================================
// MODO TEXTO VGA
// =============================================================================

/// Endereço físico do buffer de texto VGA (convenção legada).
pub const VGA_TEXT_BASE: usize = 0xB8000;

/// Colunas do modo texto 80x25.
pub const TEXT_COLUMNS: usize = 80;

/// Linhas do modo texto 80x25.
pub const TEXT_ROWS: usize = 25;

/// Bytes por célula (glyph + atributo).
pub const CELL_SIZE: usize = 2;

/// Tamanho total do buffer de texto (4000 bytes).
pub const TEXT_BUFFER_BYTES: usize = TEXT_COLUMNS * TEXT_ROWS * CELL_SIZE;

// =============================================================================
// SERIAL
// =============================================================================

/// Porta base da COM1 (UART 16550).
pub const COM1_BASE: u16 = 0x3F8;
