//! # Console de Texto
//!
//! Escritor de caracteres do early-boot.
//!
//! ## Modelo
//!
//! - `cursor` é um offset em BYTES a partir do início do buffer.
//! - Cada caractere ocupa uma célula: glyph em `cursor`, atributo fixo em
//!   `cursor + 1`, depois `cursor += 2`.
//! - O cursor só avança: sem newline, sem wrap, sem scroll, sem reset.
//! - Não há verificação de limites. Passar de 80x25 escreve além do buffer.

use core::ffi::CStr;
use core::fmt;

use super::attribute::Attribute;
use super::buffer::TextBuffer;
use crate::core::config::CELL_SIZE;

/// Console de texto sobre um [`TextBuffer`].
pub struct Console<B: TextBuffer> {
    buffer: B,
    cursor: usize,
}

impl<B: TextBuffer> Console<B> {
    /// Cria um console com cursor em 0.
    pub const fn new(buffer: B) -> Self {
        Self { buffer, cursor: 0 }
    }

    /// Escreve um caractere na posição do cursor e avança uma célula.
    ///
    /// Qualquer byte é aceito; não há tradução de controle.
    #[inline]
    pub fn write_byte(&mut self, glyph: u8) {
        self.buffer.write_byte(self.cursor, glyph);
        self.buffer
            .write_byte(self.cursor.wrapping_add(1), Attribute::DEFAULT.bits());
        self.cursor = self.cursor.wrapping_add(CELL_SIZE);
    }

    /// Escreve a sequência até o primeiro NUL (exclusive).
    ///
    /// Sem NUL, a sequência inteira é escrita.
    pub fn print_string(&mut self, s: &[u8]) {
        for &glyph in s.iter().take_while(|&&b| b != 0) {
            self.write_byte(glyph);
        }
    }

    /// Escreve uma C string.
    pub fn print_cstr(&mut self, s: &CStr) {
        self.print_string(s.to_bytes());
    }

    /// Escreve uma string terminada em NUL a partir de um ponteiro cru.
    ///
    /// Ponteiro nulo não escreve nada.
    ///
    /// # Safety
    /// `s` deve ser nulo ou apontar para uma sequência válida terminada em NUL.
    pub unsafe fn print_raw(&mut self, s: *const u8) {
        if s.is_null() {
            return;
        }
        let mut p = s;
        while *p != 0 {
            self.write_byte(*p);
            p = p.add(1);
        }
    }

    /// Offset atual (bytes).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Caracteres escritos desde a criação.
    pub fn cells_written(&self) -> usize {
        self.cursor / CELL_SIZE
    }

    /// O cursor já passou do tamanho conhecido do buffer?
    ///
    /// Sempre `false` quando o buffer não informa capacidade.
    pub fn overflowed(&self) -> bool {
        match self.buffer.capacity() {
            Some(cap) => self.cursor > cap,
            None => false,
        }
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut B {
        &mut self.buffer
    }

    pub fn into_inner(self) -> B {
        self.buffer
    }
}

impl<B: TextBuffer> fmt::Write for Console<B> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.print_string(s.as_bytes());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::TEXT_BUFFER_BYTES;
    use std::vec::Vec;

    /// Registra cada escrita (offset, valor) em ordem.
    #[derive(Default)]
    struct RecordingBuffer {
        writes: Vec<(usize, u8)>,
    }

    impl TextBuffer for RecordingBuffer {
        fn write_byte(&mut self, offset: usize, value: u8) {
            self.writes.push((offset, value));
        }
    }

    fn console() -> Console<[u8; TEXT_BUFFER_BYTES]> {
        Console::new([0u8; TEXT_BUFFER_BYTES])
    }

    #[test]
    fn hi_lands_in_first_two_cells() {
        let mut c = console();
        c.print_string(b"Hi\0");
        assert_eq!(&c.buffer()[..4], &[b'H', 0x0F, b'i', 0x0F]);
        assert_eq!(c.cursor(), 4);
        assert_eq!(c.cells_written(), 2);
    }

    #[test]
    fn empty_string_keeps_cursor() {
        let mut c = console();
        c.print_string(b"Hi");
        c.print_string(b"\0");
        c.print_string(b"");
        assert_eq!(c.cursor(), 4);
        assert!(c.buffer()[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn stops_at_first_nul() {
        let mut rec = Console::new(RecordingBuffer::default());
        rec.print_string(b"ab\0cd");
        let glyphs: Vec<u8> = rec.buffer().writes.iter().step_by(2).map(|w| w.1).collect();
        assert_eq!(glyphs, b"ab");
        assert_eq!(rec.cursor(), 4);
    }

    #[test]
    fn every_char_writes_glyph_then_attribute_at_cursor() {
        let mut rec = Console::new(RecordingBuffer::default());
        rec.print_string(b"abc");
        assert_eq!(
            rec.buffer().writes,
            [(0, b'a'), (1, 0x0F), (2, b'b'), (3, 0x0F), (4, b'c'), (5, 0x0F)]
        );
    }

    #[test]
    fn back_to_back_equals_concatenation() {
        let mut split = console();
        split.print_string(b"Hello, ");
        split.print_string(b"boot");

        let mut joined = console();
        joined.print_string(b"Hello, boot");

        assert_eq!(split.cursor(), joined.cursor());
        assert_eq!(split.buffer()[..], joined.buffer()[..]);
    }

    #[test]
    fn cursor_advances_two_bytes_per_char() {
        let mut c = console();
        c.print_string(b"xy");
        let start = c.cursor();
        c.print_string(b"12345");
        assert_eq!(c.cursor(), start + 2 * 5);
    }

    #[test]
    fn control_bytes_are_written_verbatim() {
        let mut c = console();
        c.write_byte(b'\n');
        c.write_byte(0xFF);
        assert_eq!(&c.buffer()[..4], &[b'\n', 0x0F, 0xFF, 0x0F]);
    }

    #[test]
    fn cstr_and_raw_pointer_match_slice_path() {
        let mut a = console();
        a.print_cstr(c"boot ok");

        let mut b = console();
        unsafe { b.print_raw(c"boot ok".as_ptr().cast()) };

        assert_eq!(a.cursor(), 14);
        assert_eq!(a.buffer()[..], b.buffer()[..]);
    }

    #[test]
    fn null_pointer_writes_nothing() {
        let mut rec = Console::new(RecordingBuffer::default());
        unsafe { rec.print_raw(core::ptr::null()) };
        assert!(rec.buffer().writes.is_empty());
        assert_eq!(rec.cursor(), 0);
    }

    #[test]
    fn no_bounds_check_past_the_screen() {
        let mut c = Console::new([0u8; 4]);
        c.print_string(b"abc");
        assert_eq!(c.cursor(), 6);
        assert!(c.overflowed());
        assert_eq!(c.into_inner(), [b'a', 0x0F, b'b', 0x0F]);
    }

    #[test]
    fn unknown_capacity_never_reports_overflow() {
        let mut rec = Console::new(RecordingBuffer::default());
        rec.print_string(&[b'x'; 3000]);
        assert!(!rec.overflowed());
        assert_eq!(rec.buffer().writes.last(), Some(&(5999, 0x0F)));
    }

    #[test]
    fn fmt_write_goes_through_print_string() {
        use core::fmt::Write;
        let mut c = console();
        write!(c, "n={}", 42).unwrap();
        assert_eq!(&c.buffer()[..8], &[b'n', 0x0F, b'=', 0x0F, b'4', 0x0F, b'2', 0x0F]);
        assert_eq!(c.cursor(), 8);
    }
}
