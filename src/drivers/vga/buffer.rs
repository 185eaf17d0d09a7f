//! # Text Buffer
//!
//! Abstração sobre a região de bytes do modo texto.
//!
//! O [`Console`](super::Console) só conhece offsets em bytes. Quem decide
//! para onde os bytes vão é o [`TextBuffer`]:
//!
//! | Implementação | Destino                               |
//! |---------------|---------------------------------------|
//! | `MmioBuffer`  | Memória de vídeo (escrita volátil)    |
//! | `[u8; N]`     | Array em memória (testes, preview)    |
//! | `&mut [u8]`   | Slice emprestado                      |

use core::ptr::NonNull;

use volatile::VolatilePtr;

use super::attribute::Attribute;
use super::error::DisplayError;
use crate::core::config::{TEXT_BUFFER_BYTES, VGA_TEXT_BASE};

// =============================================================================
// CELL
// =============================================================================

/// Uma célula do buffer: glyph + atributo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct Cell {
    pub glyph: u8,
    pub attribute: Attribute,
}

// =============================================================================
// TRAIT
// =============================================================================

/// Destino dos bytes escritos pelo console.
pub trait TextBuffer {
    /// Escreve um byte no offset dado.
    ///
    /// Não há contrato de limites: o offset vem direto do cursor.
    fn write_byte(&mut self, offset: usize, value: u8);

    /// Tamanho conhecido da região, se houver.
    fn capacity(&self) -> Option<usize> {
        None
    }
}

// =============================================================================
// MMIO
// =============================================================================

/// Buffer de texto mapeado em memória.
///
/// Escritas são voláteis e NÃO são verificadas contra `len`. Passar do fim
/// escreve na memória adjacente, exatamente como o hardware faria.
pub struct MmioBuffer {
    base: NonNull<u8>,
    len: usize,
}

// SAFETY: O buffer é memória de dispositivo, não dados de thread.
unsafe impl Send for MmioBuffer {}

impl MmioBuffer {
    /// Cria um buffer sobre `addr`.
    ///
    /// # Safety
    /// `addr` deve apontar para memória de vídeo mapeada e gravável, sem
    /// outros escritores ativos.
    pub unsafe fn new(addr: usize, len: usize) -> Result<Self, DisplayError> {
        let base = NonNull::new(addr as *mut u8).ok_or(DisplayError::NullAddress)?;
        crate::ktrace!("(VGA) MmioBuffer base=", addr);
        Ok(Self { base, len })
    }

    /// Buffer legado em 0xB8000 (80x25).
    ///
    /// # Safety
    /// Exige identity map (ou mapeamento equivalente) de 0xB8000.
    pub unsafe fn legacy_vga() -> Self {
        Self {
            base: NonNull::new_unchecked(VGA_TEXT_BASE as *mut u8),
            len: TEXT_BUFFER_BYTES,
        }
    }

    /// Endereço base.
    pub fn base(&self) -> usize {
        self.base.as_ptr() as usize
    }
}

impl TextBuffer for MmioBuffer {
    #[inline]
    fn write_byte(&mut self, offset: usize, value: u8) {
        let Some(target) = NonNull::new(self.base.as_ptr().wrapping_add(offset)) else {
            return;
        };
        // SAFETY: Contrato de `new`/`legacy_vga`; offsets fora do buffer são
        // responsabilidade de quem controla o cursor.
        unsafe { VolatilePtr::new(target) }.write(value);
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.len)
    }
}

// =============================================================================
// MEMÓRIA
// =============================================================================

impl<const N: usize> TextBuffer for [u8; N] {
    #[inline]
    fn write_byte(&mut self, offset: usize, value: u8) {
        if let Some(slot) = self.get_mut(offset) {
            *slot = value;
        }
    }

    fn capacity(&self) -> Option<usize> {
        Some(N)
    }
}

impl TextBuffer for &mut [u8] {
    #[inline]
    fn write_byte(&mut self, offset: usize, value: u8) {
        if let Some(slot) = self.get_mut(offset) {
            *slot = value;
        }
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_drops_writes_past_the_end() {
        let mut buf = [0u8; 4];
        buf.write_byte(3, b'x');
        buf.write_byte(4, b'y');
        buf.write_byte(usize::MAX, b'z');
        assert_eq!(buf, [0, 0, 0, b'x']);
        assert_eq!(TextBuffer::capacity(&buf), Some(4));
    }

    #[test]
    fn borrowed_slice_writes_in_place() {
        let mut backing = [0u8; 6];
        {
            let mut view: &mut [u8] = &mut backing[2..];
            view.write_byte(0, b'a');
            view.write_byte(1, 0x0F);
            view.write_byte(9, b'!');
            assert_eq!(view.capacity(), Some(4));
        }
        assert_eq!(backing, [0, 0, b'a', 0x0F, 0, 0]);
    }

    #[test]
    fn mmio_rejects_null_base() {
        let result = unsafe { MmioBuffer::new(0, TEXT_BUFFER_BYTES) };
        assert_eq!(result.err(), Some(DisplayError::NullAddress));
    }

    #[test]
    fn mmio_writes_are_visible_in_backing_memory() {
        let mut backing = [0u8; 8];
        let addr = backing.as_mut_ptr() as usize;
        let mut mmio = unsafe { MmioBuffer::new(addr, backing.len()) }.unwrap();
        mmio.write_byte(0, b'O');
        mmio.write_byte(1, 0x0F);
        mmio.write_byte(6, b'K');
        assert_eq!(mmio.base(), addr);
        assert_eq!(mmio.capacity(), Some(8));
        drop(mmio);
        assert_eq!(backing, [b'O', 0x0F, 0, 0, 0, 0, b'K', 0]);
    }
}
