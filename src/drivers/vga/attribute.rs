//! # Atributo de Célula VGA
//!
//! Byte de atributo do modo texto legado:
//!
//! ```text
//!  bit  7     6   5   4     3      2   1   0
//!     ┌─────┬───────────┬────────┬───────────┐
//!     │BLINK│  BG (RGB) │ BRIGHT │  FG (RGB) │
//!     └─────┴───────────┴────────┴───────────┘
//! ```
//!
//! O console escreve sempre [`Attribute::DEFAULT`] (branco brilhante sobre
//! preto). As cores existem para nomear esse valor, não para selecioná-lo.

use bitflags::bitflags;

bitflags! {
    /// Byte de atributo (cor de frente/fundo).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Attribute: u8 {
        const FG_BLUE   = 1 << 0;
        const FG_GREEN  = 1 << 1;
        const FG_RED    = 1 << 2;
        const FG_BRIGHT = 1 << 3;
        const BG_BLUE   = 1 << 4;
        const BG_GREEN  = 1 << 5;
        const BG_RED    = 1 << 6;
        /// Pisca (ou fundo brilhante, dependendo do modo do controlador).
        const BLINK     = 1 << 7;
    }
}

impl Attribute {
    /// Branco brilhante sobre preto (0x0F).
    pub const DEFAULT: Self = Self::from_bits_truncate(
        Self::FG_BLUE.bits() | Self::FG_GREEN.bits() | Self::FG_RED.bits() | Self::FG_BRIGHT.bits(),
    );

    /// Compõe o atributo a partir da paleta legada.
    ///
    /// O fundo usa apenas 3 bits; o bit de brilho do fundo é descartado
    /// para não ligar BLINK por acidente.
    pub const fn from_colors(fg: Color, bg: Color) -> Self {
        Self::from_bits_truncate(((bg as u8 & 0x07) << 4) | (fg as u8 & 0x0F))
    }
}

/// Paleta de 16 cores do modo texto.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    Pink = 13,
    Yellow = 14,
    White = 15,
}
